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

//! Operation log
//!
//! Every CLI invocation appends to one never-rotated log file. Each line carries the
//! invocation's [`RunId`] through a root span, so interleaved runs can be told apart.
//! Rendered reports go to the same file on the [`REPORT_TARGET`] target.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use tracing::info;
use tracing::info_span;
use tracing::metadata::LevelFilter;
use tracing::Metadata;
use tracing::Span;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

use crate::core::JmsqError;
use crate::core::JmsqResult;
use crate::core::ToolsError;
use crate::tools_config::LogConfig;

/// Tracing target for rendered report lines
pub const REPORT_TARGET: &str = "report";

/// Tracing target of the per-invocation root span
pub const RUN_TARGET: &str = "run";

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Level(&'static str);

impl Level {
    /// Constant representing the ERROR log level.
    pub const ERROR: Level = Level("ERROR");

    /// Constant representing the WARN log level.
    pub const WARN: Level = Level("WARN");

    /// Constant representing the INFO log level.
    pub const INFO: Level = Level("INFO");

    /// Constant representing the DEBUG log level.
    pub const DEBUG: Level = Level("DEBUG");

    /// Constant representing the TRACE log level.
    pub const TRACE: Level = Level("TRACE");

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    pub fn as_filter(&self) -> LevelFilter {
        match self.0 {
            "ERROR" => LevelFilter::ERROR,
            "WARN" => LevelFilter::WARN,
            "DEBUG" => LevelFilter::DEBUG,
            "TRACE" => LevelFilter::TRACE,
            _ => LevelFilter::INFO,
        }
    }
}

impl FromStr for Level {
    type Err = JmsqError;

    fn from_str(level: &str) -> Result<Self, Self::Err> {
        match level.trim().to_ascii_uppercase().as_str() {
            "ERROR" => Ok(Level::ERROR),
            "WARN" | "WARNING" => Ok(Level::WARN),
            "INFO" => Ok(Level::INFO),
            "DEBUG" => Ok(Level::DEBUG),
            "TRACE" => Ok(Level::TRACE),
            _ => Err(ToolsError::validation_error(
                "log_level",
                format!("Invalid log level '{level}', expected one of ERROR, WARN, INFO, DEBUG, TRACE"),
            )
            .into()),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.0)
    }
}

/// Tags every log line of one invocation, e.g. `id0042`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RunId(String);

impl RunId {
    pub fn generate() -> Self {
        Self::from_number(rand::rng().random_range(1..=1000))
    }

    pub fn from_number(number: u32) -> Self {
        RunId(format!("id{number:04}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

/// Root span tagging every line of one invocation with `run{id=...}`.
///
/// The span is recorded whatever the configured level, so warnings and errors stay
/// attributable to their run.
pub fn run_span(run_id: &RunId) -> Span {
    info_span!(target: RUN_TARGET, "run", id = %run_id)
}

/// Installs the global subscriber: a file layer appending to `config.dir/config.file_name`
/// and, when enabled, a console layer on stderr that leaves report lines to stdout.
///
/// `level` applies per layer. Report lines reach the file at any level.
///
/// The returned guard flushes the file writer on drop and must outlive all logging.
pub fn init_logger(config: &LogConfig, level: &Level) -> JmsqResult<WorkerGuard> {
    let max_level = level.as_filter();

    std::fs::create_dir_all(&config.dir)?;
    let appender = tracing_appender::rolling::never(&config.dir, &config.file_name);
    let (file_writer, guard) = tracing_appender::non_blocking(appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_target(false)
        .with_writer(file_writer)
        .with_filter(filter_fn(move |metadata| {
            metadata.target() == REPORT_TARGET || enabled_at(metadata, max_level)
        }));

    let console_layer = config.console.then(|| {
        tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr)
            .with_filter(filter_fn(move |metadata| {
                metadata.target() != REPORT_TARGET && enabled_at(metadata, max_level)
            }))
    });

    tracing_subscriber::registry()
        .with(file_layer)
        .with(console_layer)
        .try_init()
        .map_err(|e| JmsqError::logger_init(e.to_string()))?;
    Ok(guard)
}

fn enabled_at(metadata: &Metadata<'_>, max_level: LevelFilter) -> bool {
    (metadata.is_span() && metadata.target() == RUN_TARGET) || *metadata.level() <= max_level
}

/// Writes a rendered report to stdout and, line by line, to the operation log.
pub fn emit_report(text: &str) {
    for line in text.lines() {
        info!(target: REPORT_TARGET, "{line}");
    }
    println!("{text}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_as_str_returns_correct_value() {
        assert_eq!(Level::ERROR.as_str(), "ERROR");
        assert_eq!(Level::WARN.as_str(), "WARN");
        assert_eq!(Level::INFO.as_str(), "INFO");
        assert_eq!(Level::DEBUG.as_str(), "DEBUG");
        assert_eq!(Level::TRACE.as_str(), "TRACE");
    }

    #[test]
    fn level_parses_case_insensitively() {
        assert_eq!("debug".parse::<Level>().unwrap(), Level::DEBUG);
        assert_eq!(" Warning ".parse::<Level>().unwrap(), Level::WARN);
        assert!("verbose".parse::<Level>().is_err());
    }

    #[test]
    fn level_display_pads() {
        assert_eq!(format!("{:<5}|", Level::INFO), "INFO |");
    }

    #[test]
    fn level_filter_mapping() {
        assert_eq!(Level::TRACE.as_filter(), LevelFilter::TRACE);
        assert_eq!(Level::ERROR.as_filter(), LevelFilter::ERROR);
    }

    #[test]
    fn run_id_is_zero_padded() {
        assert_eq!(RunId::from_number(7).as_str(), "id0007");
        assert_eq!(RunId::from_number(1000).to_string(), "id1000");
    }

    #[test]
    fn generated_run_id_in_range() {
        for _ in 0..50 {
            let id = RunId::generate();
            let number: u32 = id.as_str()[2..].parse().unwrap();
            assert!((1..=1000).contains(&number));
            assert_eq!(id.as_str().len(), 6);
        }
    }
}
