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

pub mod command_util;
mod destination_commands;
mod queue_commands;
mod report_commands;
mod selector_commands;

use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use tabled::settings::Style;
use tabled::Table;
use tabled::Tabled;

use crate::cli::formatters::OutputFormat;
use crate::core::JmsqResult;

/// Settings shared by every command of one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandContext {
    pub output: OutputFormat,
    /// Overrides the environment label recorded in a snapshot
    pub env: Option<String>,
}

impl Default for CommandContext {
    fn default() -> Self {
        Self {
            output: OutputFormat::Table,
            env: None,
        }
    }
}

/// A trait that defines the execution behavior for commands.
///
/// Every command is a synchronous, offline transformation: its input comes from arguments
/// and files, its output goes to stdout and the operation log.
pub trait CommandExecute {
    /// Executes the command.
    ///
    /// # Parameters
    /// - `context`: output format and environment label chosen for this invocation
    fn execute(&self, context: &CommandContext) -> JmsqResult<()>;
}

#[derive(Debug, Parser, Clone)]
pub struct CommonArgs {
    /// Destination snapshot collected from the broker
    #[arg(
        short = 's',
        long = "snapshot",
        value_name = "FILE",
        help = "JSON destination snapshot, eg: 'snapshot.json'"
    )]
    pub snapshot: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(subcommand)]
    #[command(about = "Message selector commands")]
    Selector(selector_commands::SelectorCommands),

    #[command(subcommand)]
    #[command(about = "Destination name commands")]
    Destination(destination_commands::DestinationCommands),

    #[command(subcommand)]
    #[command(about = "Report commands")]
    Report(report_commands::ReportCommands),

    #[command(subcommand)]
    #[command(about = "Queue listing commands")]
    Queue(queue_commands::QueueCommands),

    #[command(about = "Category commands show")]
    Show(ClassificationTablePrint),
}

impl CommandExecute for Commands {
    fn execute(&self, context: &CommandContext) -> JmsqResult<()> {
        match self {
            Commands::Selector(value) => value.execute(context),
            Commands::Destination(value) => value.execute(context),
            Commands::Report(value) => value.execute(context),
            Commands::Queue(value) => value.execute(context),
            Commands::Show(value) => value.execute(context),
        }
    }
}

// ================for commands table print================
#[derive(Tabled, Clone)]
struct Command {
    #[tabled(rename = "Category")]
    category: &'static str,

    #[tabled(rename = "Command")]
    command: &'static str,

    #[tabled(rename = "Remark")]
    remark: &'static str,
}

#[derive(Parser)]
pub(crate) struct ClassificationTablePrint;

impl CommandExecute for ClassificationTablePrint {
    fn execute(&self, _context: &CommandContext) -> JmsqResult<()> {
        let commands: Vec<Command> = vec![
            Command {
                category: "Selector",
                command: "normalizeFilter",
                remark: "Rewrite a timestamp literal as epoch millis.",
            },
            Command {
                category: "Destination",
                command: "shortName",
                remark: "Extract the short queue name.",
            },
            Command {
                category: "Destination",
                command: "resolve",
                remark: "Split a destination identifier into parts.",
            },
            Command {
                category: "Destination",
                command: "parseUrl",
                remark: "Split a connection URL into parts.",
            },
            Command {
                category: "Report",
                command: "render",
                remark: "Render rows from a JSON file as a report.",
            },
            Command {
                category: "Queue",
                command: "list",
                remark: "List queues from a snapshot.",
            },
            Command {
                category: "Queue",
                command: "info",
                remark: "Show information on one queue.",
            },
            Command {
                category: "Queue",
                command: "find",
                remark: "Find the destinations a name targets.",
            },
        ];
        let mut table = Table::new(commands);
        table.with(Style::extended());
        print!("{table}");
        Ok(())
    }
}
