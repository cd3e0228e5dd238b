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

use std::path::PathBuf;

use clap::Parser;
use tracing::error;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;

use crate::cli::formatters::OutputFormat;
use crate::cli::validators;
use crate::commands::CommandContext;
use crate::commands::CommandExecute;
use crate::commands::Commands;
use crate::core::JmsqResult;
use crate::log::init_logger;
use crate::log::run_span;
use crate::log::Level;
use crate::log::RunId;
use crate::tools_config::ToolsConfig;

#[derive(Parser)]
#[command(name = "jmsq-admin-cli")]
#[command(about = "JMS queue admin commands", long_about = None, version)]
pub struct JmsqCli {
    /// Configuration file (toml, yaml or json)
    #[arg(long = "config", global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level, overrides the configuration
    #[arg(
        long = "log-level",
        global = true,
        value_name = "LEVEL",
        value_parser = validators::validate_log_level
    )]
    log_level: Option<Level>,

    /// Environment label shown in report titles
    #[arg(long = "env", global = true, value_name = "ENV")]
    env: Option<String>,

    /// Output format: table or json
    #[arg(
        long = "output",
        global = true,
        value_name = "FORMAT",
        value_parser = validators::validate_output_format
    )]
    output: Option<OutputFormat>,

    #[command(subcommand)]
    commands: Option<Commands>,
}

impl JmsqCli {
    /// Resolves the effective settings: command-line flags win over configuration.
    pub(crate) fn context(&self, config: &ToolsConfig) -> CommandContext {
        CommandContext {
            output: self.output.unwrap_or(config.output),
            env: self.env.clone().or_else(|| config.default_env.clone()),
        }
    }

    pub(crate) fn log_level(&self, config: &ToolsConfig) -> JmsqResult<Level> {
        match &self.log_level {
            Some(level) => Ok(level.clone()),
            None => config.log.level.parse(),
        }
    }

    /// Runs the selected command.
    ///
    /// Every failure is reported on stderr exactly once: through the console log layer
    /// once logging is up, directly before that or when the console layer is off.
    pub fn handle(&self) -> JmsqResult<()> {
        let Some(commands) = &self.commands else {
            eprintln!("No command specified. Use --help for usage information.");
            return Ok(());
        };

        let (config, _guard) = match self.init() {
            Ok(initialized) => initialized,
            Err(e) => {
                eprintln!("Error: {e}");
                return Err(e);
            }
        };

        let run_id = RunId::generate();
        let span = run_span(&run_id);
        let _entered = span.enter();
        info!(
            version = env!("CARGO_PKG_VERSION"),
            log_file = %config.log.dir.join(&config.log.file_name).display(),
            "Starting jmsq-admin-cli"
        );

        let result = commands.execute(&self.context(&config));
        match &result {
            Ok(()) => info!("Command completed"),
            Err(e) => {
                error!("{e}");
                if !config.log.console {
                    eprintln!("Error: {e}");
                }
            }
        }
        result
    }

    fn init(&self) -> JmsqResult<(ToolsConfig, WorkerGuard)> {
        let config = ToolsConfig::load(self.config.as_deref())?;
        let level = self.log_level(&config)?;
        let guard = init_logger(&config.log, &level)?;
        Ok((config, guard))
    }
}
