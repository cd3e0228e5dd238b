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

//! Tools and Admin operation specific errors
//!
//! This module contains error types specific to the JMSQ admin CLI.

use thiserror::Error;

/// Tools-specific errors for admin operations
#[derive(Debug, Error)]
pub enum ToolsError {
    // ============================================================================
    // Queue Errors
    // ============================================================================
    /// Queue not found in the destination snapshot
    #[error("Queue '{queue}' not found")]
    QueueNotFound { queue: String },

    // ============================================================================
    // Validation Errors
    // ============================================================================
    /// Input validation failed
    #[error("Validation failed for '{field}': {reason}")]
    ValidationError { field: String, reason: String },
}

impl ToolsError {
    // ============================================================================
    // Convenience Constructors
    // ============================================================================

    /// Create a queue not found error
    #[inline]
    pub fn queue_not_found(queue: impl Into<String>) -> Self {
        Self::QueueNotFound { queue: queue.into() }
    }

    /// Create a validation error
    #[inline]
    pub fn validation_error(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_errors() {
        let err = ToolsError::queue_not_found("WLMsgQueueName");
        assert_eq!(err.to_string(), "Queue 'WLMsgQueueName' not found");
    }

    #[test]
    fn test_validation_errors() {
        let err = ToolsError::validation_error("queue_name", "Queue name cannot be empty");
        assert_eq!(
            err.to_string(),
            "Validation failed for 'queue_name': Queue name cannot be empty"
        );
    }
}
