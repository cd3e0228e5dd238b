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

//! JMSQ Tools - queue administration core and CLI
//!
//! This crate provides both:
//! - **Core**: name and selector parsing plus the tabular report engine
//! - **CLI**: an offline command-line front-end over the core
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           CLI Layer (bin/)              │
//! │  - Command parsing (clap)               │
//! │  - Output formatting (formatters/)      │
//! │  - Input validation (validators/)       │
//! │  - Logging and configuration            │
//! └─────────────────┬───────────────────────┘
//!                   │
//!                   ▼
//! ┌─────────────────────────────────────────┐
//! │         Core Logic (core/)              │
//! │  - Selector timestamp normalization     │
//! │  - Destination name resolution          │
//! │  - Connection URL parsing               │
//! │  - Report rendering                     │
//! │  - Queue listings over snapshots        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Usage Examples
//!
//! ## As a Library (using core)
//!
//! ```rust
//! use jmsq_tools::core::render_report;
//! use jmsq_tools::core::resolve_short_name;
//! use jmsq_tools::report_row;
//!
//! assert_eq!(resolve_short_name("Mod!Srv@Host@Q1"), "Q1");
//!
//! let rows = vec![report_row!["B", 2], report_row!["A", 1]];
//! let report = render_report("Title", &rows, &["Name", "Count"], true, true)
//!     .unwrap()
//!     .unwrap();
//! assert!(report.ends_with("TOTAL (2)     3\n========= ====="));
//! ```
//!
//! ## As a CLI Tool
//!
//! ```bash
//! jmsq-admin-cli selector normalizeFilter -f "JMSTimestamp > '2018-05-03 17:47:53.728'"
//! jmsq-admin-cli queue list -s snapshot.json -k dmq
//! ```

// Core business logic - reusable across different interfaces
pub mod core {
    //! Core business logic module
    //!
    //! Pure, synchronous transformations with no I/O apart from
    //! [`queue::DestinationSnapshot::load`]. Compiled patterns are process-wide statics, so
    //! every function here is safe to call from several threads.
    //!
    //! # Available Modules
    //!
    //! - [`timestamp`] - Date-time literal to epoch milliseconds
    //! - [`selector`] - Message selector normalization
    //! - [`destination`] - Destination identifier resolution
    //! - [`url`] - Connection URL decomposition
    //! - [`report`] - Plain-text tabular reports
    //! - [`queue`] - Queue listings over destination snapshots

    pub mod destination;
    pub mod queue;
    pub mod report;
    pub mod selector;
    pub mod timestamp;
    pub mod url;

    // Re-export error types from jmsq-error
    pub use jmsq_error::JmsqError;
    pub use jmsq_error::JmsqResult;
    pub use jmsq_error::SerializationError;
    pub use jmsq_error::ToolsError;

    use self::destination::DestinationDescriptor;
    use self::destination::DestinationNameResolver;
    use self::report::ReportBuilder;
    use self::report::ReportValue;
    use self::selector::SelectorTranslator;
    use self::url::ConnectionUrl;

    /// Rewrites the first timestamp literal in `raw_filter` as epoch milliseconds (local time).
    pub fn normalize_filter(raw_filter: &str) -> JmsqResult<String> {
        SelectorTranslator::normalize(raw_filter)
    }

    pub fn resolve_short_name(raw_identifier: &str) -> String {
        DestinationNameResolver::short_name(raw_identifier).to_string()
    }

    pub fn resolve_destination(raw_identifier: &str) -> DestinationDescriptor {
        DestinationNameResolver::decompose(raw_identifier)
    }

    pub fn parse_connection_url(url: &str) -> ConnectionUrl {
        ConnectionUrl::parse(url)
    }

    /// Renders a report; `Ok(None)` when `rows` is empty.
    pub fn render_report<S: AsRef<str>>(
        title: &str,
        rows: &[Vec<ReportValue>],
        column_names: &[S],
        sorted: bool,
        totaled: bool,
    ) -> JmsqResult<Option<String>> {
        ReportBuilder::new(title)
            .columns(column_names.iter().map(|name| name.as_ref().to_string()))
            .sorted(sorted)
            .totaled(totaled)
            .build(rows)
    }
}

// CLI presentation layer
pub mod cli {
    //! CLI presentation layer
    //!
    //! - [`formatters`] - Output formatters (JSON, Table)
    //! - [`validators`] - Input validators
    //!
    //! The command tree itself lives in the crate-private `commands` module and is driven
    //! through [`crate::jmsq_cli::JmsqCli`].

    pub mod formatters;
    pub mod validators;
}

pub(crate) mod commands;

pub mod jmsq_cli;
pub mod log;
pub mod tools_config;
