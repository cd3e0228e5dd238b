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

//! CLI output formatters
//!
//! Structured results (descriptors, parsed URLs, normalized filters) are printed either as a
//! property table or as JSON. Reports are plain text and bypass the formatters in table mode.

mod json_formatter;
mod table_formatter;

pub use json_formatter::JsonFormatter;
use serde::Deserialize;
use serde::Serialize;
pub use table_formatter::TableFormatter;

/// Output format chosen with `--output` or the `output` config key
///
/// Reports render as aligned text in `Table` mode and as their `{title, columns, rows}`
/// document in `Json` mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl From<&str> for OutputFormat {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Table,
        }
    }
}

/// Turns a serializable command result into printable text
pub trait Formatter {
    fn format<T: Serialize>(&self, data: &T) -> String;
}

/// Formatter for one invocation's structured results
///
/// `destination resolve` prints a [`DestinationDescriptor`](crate::core::destination::DestinationDescriptor),
/// `destination parseUrl` a [`ConnectionUrl`](crate::core::url::ConnectionUrl) and
/// `selector normalizeFilter` the raw and normalized filter pair. `Table` lays each field out
/// as a Property/Value row, `Json` pretty-prints the camelCase document.
pub enum FormatterType {
    Json(JsonFormatter),
    Table(TableFormatter),
}

impl FormatterType {
    pub fn format<T: Serialize>(&self, data: &T) -> String {
        match self {
            Self::Json(f) => f.format(data),
            Self::Table(f) => f.format(data),
        }
    }
}

impl From<OutputFormat> for FormatterType {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => Self::Json(JsonFormatter),
            OutputFormat::Table => Self::Table(TableFormatter),
        }
    }
}

/// Formatter for `format`
pub fn get_formatter(format: OutputFormat) -> FormatterType {
    FormatterType::from(format)
}
