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

//! CLI configuration
//!
//! Sources are layered, later wins: built-in defaults, an optional config file (format
//! picked from its extension), then `JMSQ_` environment variables with `__` between
//! nested keys, e.g. `JMSQ_LOG__LEVEL=DEBUG`.

use std::path::Path;
use std::path::PathBuf;

use config::Config;
use config::Environment;
use serde::Deserialize;
use serde::Serialize;

use crate::cli::formatters::OutputFormat;
use crate::core::JmsqResult;

pub const ENV_PREFIX: &str = "JMSQ";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    pub log: LogConfig,
    /// Environment label shown in report titles when `--env` is not given
    pub default_env: Option<String>,
    pub output: OutputFormat,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            log: LogConfig::default(),
            default_env: None,
            output: OutputFormat::Table,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub dir: PathBuf,
    pub file_name: String,
    pub level: String,
    /// Also log to stderr
    pub console: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            file_name: "jmsq-admin.log".to_string(),
            level: "INFO".to_string(),
            console: true,
        }
    }
}

impl ToolsConfig {
    /// Loads defaults, then `config_file` if given, then the process environment.
    pub fn load(config_file: Option<&Path>) -> JmsqResult<Self> {
        Self::load_from(config_file, None)
    }

    /// Same as [`Self::load`] with an explicit environment instead of the process one.
    pub fn load_from(
        config_file: Option<&Path>,
        environment: Option<config::Map<String, String>>,
    ) -> JmsqResult<Self> {
        let mut builder = Config::builder().add_source(Config::try_from(&ToolsConfig::default())?);
        if let Some(path) = config_file {
            builder = builder.add_source(config::File::from(path));
        }
        let cfg = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .source(environment),
            )
            .build()?;
        Ok(cfg.try_deserialize::<ToolsConfig>()?)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn no_env() -> Option<config::Map<String, String>> {
        Some(config::Map::new())
    }

    #[test]
    fn defaults_without_sources() {
        let cfg = ToolsConfig::load_from(None, no_env()).unwrap();
        assert_eq!(cfg, ToolsConfig::default());
        assert_eq!(cfg.log.file_name, "jmsq-admin.log");
    }

    #[test]
    fn file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "default_env = \"PROD\"\noutput = \"json\"\n\n[log]\nlevel = \"DEBUG\"\nconsole = false"
        )
        .unwrap();

        let cfg = ToolsConfig::load_from(Some(file.path()), no_env()).unwrap();
        assert_eq!(cfg.default_env.as_deref(), Some("PROD"));
        assert_eq!(cfg.output, OutputFormat::Json);
        assert_eq!(cfg.log.level, "DEBUG");
        assert!(!cfg.log.console);
        assert_eq!(cfg.log.file_name, "jmsq-admin.log");
    }

    #[test]
    fn environment_overrides_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"log": {{"level": "DEBUG"}}}}"#).unwrap();

        let mut env = config::Map::new();
        env.insert("JMSQ_LOG__LEVEL".to_string(), "TRACE".to_string());
        env.insert("JMSQ_DEFAULT_ENV".to_string(), "UAT".to_string());

        let cfg = ToolsConfig::load_from(Some(file.path()), Some(env)).unwrap();
        assert_eq!(cfg.log.level, "TRACE");
        assert_eq!(cfg.default_env.as_deref(), Some("UAT"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        assert!(ToolsConfig::load_from(Some(&missing), no_env()).is_err());
    }
}
