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

use chrono::Local;
use clap::Parser;
use tracing::info;
use tracing::warn;

use crate::cli::validators;
use crate::commands::command_util::CommandUtil;
use crate::commands::CommandContext;
use crate::commands::CommandExecute;
use crate::commands::CommonArgs;
use crate::core::queue::queue_info_reports;
use crate::core::JmsqError;
use crate::core::JmsqResult;

#[derive(Debug, Clone, Parser)]
pub struct InfoSubCommand {
    /// Common arguments
    #[command(flatten)]
    common_args: CommonArgs,

    #[arg(
        short = 'q',
        long = "queue",
        required = true,
        value_parser = validators::validate_queue_name,
        help = "short queue name, eg: 'jmsQueue1'"
    )]
    queue: String,
}

impl CommandExecute for InfoSubCommand {
    fn execute(&self, context: &CommandContext) -> JmsqResult<()> {
        info!("Entered queue name: {}", self.queue);
        let snapshot = CommandUtil::load_snapshot(&self.common_args, context)?;
        let reports = queue_info_reports(&snapshot, &self.queue, &Local::now());
        if reports.is_empty() {
            warn!("Queue was not found.");
            return Err(JmsqError::queue_not_found(self.queue.as_str()));
        }
        for report in &reports {
            CommandUtil::print_report(context, report)?;
        }
        Ok(())
    }
}
