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

//! CLI input validators
//!
//! Each validator doubles as a clap `value_parser` and returns the cleaned value.

use crate::cli::formatters::OutputFormat;
use crate::core::JmsqError;
use crate::core::JmsqResult;
use crate::core::ToolsError;
use crate::log::Level;

/// Validate a queue name or destination identifier
///
/// Surrounding whitespace is trimmed; the result must be non-empty and single-line.
pub fn validate_queue_name(name: &str) -> JmsqResult<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(JmsqError::Tools(ToolsError::ValidationError {
            field: "queue".to_string(),
            reason: "Queue name cannot be empty".to_string(),
        }));
    }
    if let Some(ch) = name.chars().find(|c| c.is_control()) {
        return Err(JmsqError::Tools(ToolsError::ValidationError {
            field: "queue".to_string(),
            reason: format!("Name '{}' contains control character {:?}", name.escape_debug(), ch),
        }));
    }
    Ok(name.to_string())
}

/// Validate a message selector
///
/// An empty selector is allowed and means "all messages".
pub fn validate_filter(filter: &str) -> JmsqResult<String> {
    if filter.contains(['\n', '\r']) {
        return Err(JmsqError::Tools(ToolsError::ValidationError {
            field: "filter".to_string(),
            reason: "Selector must be a single line".to_string(),
        }));
    }
    Ok(filter.trim().to_string())
}

/// Validate a connection URL
pub fn validate_connection_url(url: &str) -> JmsqResult<String> {
    match url.trim() {
        "" => Err(JmsqError::Tools(ToolsError::ValidationError {
            field: "url".to_string(),
            reason: "Connection URL cannot be empty".to_string(),
        })),
        url => Ok(url.to_string()),
    }
}

/// Validate a log level name
pub fn validate_log_level(level: &str) -> JmsqResult<Level> {
    level.parse()
}

/// Validate an output format, `table` or `json`
pub fn validate_output_format(format: &str) -> JmsqResult<OutputFormat> {
    match format.to_lowercase().as_str() {
        "table" | "json" => Ok(OutputFormat::from(format)),
        _ => Err(ToolsError::validation_error(
            "output",
            format!("Invalid format '{format}', expected 'table' or 'json'"),
        )
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_queue_name() {
        // Valid
        assert_eq!(validate_queue_name("jmsQueue1").unwrap(), "jmsQueue1");
        assert_eq!(
            validate_queue_name("  Mod!Srv@Host@Q1 ").unwrap(),
            "Mod!Srv@Host@Q1"
        );

        // Invalid: empty
        assert!(validate_queue_name("").is_err());
        assert!(validate_queue_name("   ").is_err());

        // Invalid: control characters
        assert!(validate_queue_name("queue\tname").is_err());
    }

    #[test]
    fn test_validate_filter() {
        assert_eq!(validate_filter("").unwrap(), "");
        assert_eq!(
            validate_filter(" JMSXDeliveryCount > 0 ").unwrap(),
            "JMSXDeliveryCount > 0"
        );
        assert!(validate_filter("a = 1\nb = 2").is_err());
    }

    #[test]
    fn test_validate_connection_url() {
        assert_eq!(
            validate_connection_url("t3://adminhost:7001").unwrap(),
            "t3://adminhost:7001"
        );
        assert!(validate_connection_url(" ").is_err());
    }

    #[test]
    fn test_validate_log_level() {
        assert_eq!(validate_log_level("debug").unwrap(), Level::DEBUG);
        assert!(validate_log_level("loud").is_err());
    }

    #[test]
    fn test_validate_output_format() {
        assert_eq!(validate_output_format("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(validate_output_format("table").unwrap(), OutputFormat::Table);
        assert!(validate_output_format("yaml").is_err());
    }
}
