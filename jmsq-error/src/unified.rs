// Copyright 2026 The JMSQ Admin Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Unified error system for the JMSQ admin tools
//!
//! Errors are grouped by concern: selector/report errors raised by the pure core,
//! tool errors raised by the command layer, and system errors (I/O, document
//! decoding, configuration) raised at the edges.

mod serialization;
mod tools;

use std::io;

pub use serialization::SerializationError;
use thiserror::Error;
pub use tools::ToolsError;

/// Main error type for all JMSQ operations
///
/// "No match" outcomes of the name and URL parsing cascades and empty reports are
/// not errors and never show up here; the parsers fall back to the raw input and
/// the report renderer returns `None`.
///
/// # Examples
///
/// ```rust
/// use jmsq_error::JmsqError;
/// use jmsq_error::JmsqResult;
///
/// fn first_cell(row: &[String], expected: usize) -> JmsqResult<&str> {
///     if row.len() != expected {
///         return Err(JmsqError::row_arity(0, expected, row.len()));
///     }
///     Ok(row[0].as_str())
/// }
/// ```
#[derive(Debug, Error)]
pub enum JmsqError {
    // ============================================================================
    // Selector Errors
    // ============================================================================
    /// A date-time literal inside a message selector is not a valid calendar date/time
    #[error("Malformed timestamp '{literal}': {reason}")]
    MalformedTimestamp { literal: String, reason: String },

    // ============================================================================
    // Report Errors
    // ============================================================================
    /// A report row does not have one value per column
    #[error("Report row {row} has {actual} values, expected {expected}")]
    RowArity { row: usize, expected: usize, actual: usize },

    // ============================================================================
    // Tools Errors
    // ============================================================================
    /// Admin tool errors (validation, lookup)
    #[error(transparent)]
    Tools(#[from] ToolsError),

    // ============================================================================
    // Serialization Errors
    // ============================================================================
    /// Snapshot/row file decoding errors
    #[error(transparent)]
    Serialization(#[from] SerializationError),

    // ============================================================================
    // System Errors
    // ============================================================================
    /// IO error from std::io
    #[error("IO error: {0}")]
    IO(#[from] io::Error),

    /// Configuration could not be loaded
    #[error("Config parse failed: {reason}")]
    ConfigParseFailed { reason: String },

    /// The tracing subscriber could not be installed
    #[error("Logger initialization failed: {0}")]
    LoggerInit(String),
}

// ============================================================================
// Convenience Constructors
// ============================================================================

impl JmsqError {
    /// Create a malformed timestamp error
    #[inline]
    pub fn malformed_timestamp(literal: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedTimestamp {
            literal: literal.into(),
            reason: reason.into(),
        }
    }

    /// Create a row arity error
    #[inline]
    pub fn row_arity(row: usize, expected: usize, actual: usize) -> Self {
        Self::RowArity { row, expected, actual }
    }

    /// Create a validation error
    #[inline]
    pub fn validation_error(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Tools(ToolsError::validation_error(field, reason))
    }

    /// Create a queue not found error
    #[inline]
    pub fn queue_not_found(queue: impl Into<String>) -> Self {
        Self::Tools(ToolsError::queue_not_found(queue))
    }

    /// Create a logger initialization error
    #[inline]
    pub fn logger_init(reason: impl Into<String>) -> Self {
        Self::LoggerInit(reason.into())
    }
}

// ============================================================================
// Error Conversion Implementations
// ============================================================================

#[cfg(feature = "with_config")]
impl From<config::ConfigError> for JmsqError {
    fn from(e: config::ConfigError) -> Self {
        Self::ConfigParseFailed { reason: e.to_string() }
    }
}

// ============================================================================
// Type Aliases
// ============================================================================

/// Result type alias for JMSQ operations
///
/// # Examples
///
/// ```rust
/// use jmsq_error::JmsqResult;
///
/// fn list_queues() -> JmsqResult<Vec<String>> {
///     Ok(vec!["jmsQueue1".to_string()])
/// }
/// ```
pub type JmsqResult<T> = std::result::Result<T, JmsqError>;
