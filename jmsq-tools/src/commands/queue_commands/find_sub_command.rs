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

use crate::cli::validators;
use crate::commands::command_util::CommandUtil;
use crate::commands::CommandContext;
use crate::commands::CommandExecute;
use crate::commands::CommonArgs;
use crate::core::queue::found_queues_report;
use crate::core::queue::DestinationQuery;
use crate::core::JmsqResult;

#[derive(Debug, Clone, Parser)]
pub struct FindSubCommand {
    /// Common arguments
    #[command(flatten)]
    common_args: CommonArgs,

    #[arg(
        short = 'q',
        long = "queue",
        required = true,
        value_parser = validators::validate_queue_name,
        help = "queue name or full identifier, eg: 'jmsQueue1' or 'Module!JmsServer@server1@jmsQueue1'"
    )]
    queue: String,
}

impl CommandExecute for FindSubCommand {
    fn execute(&self, context: &CommandContext) -> JmsqResult<()> {
        let snapshot = CommandUtil::load_snapshot(&self.common_args, context)?;
        let query = DestinationQuery::new(&self.queue);
        let descriptor = query.descriptor();
        info!(
            queue = query.raw(),
            host_server = descriptor.host_server.as_deref().unwrap_or("*"),
            broker_server = descriptor.broker_server.as_deref().unwrap_or("*"),
            "Searching destinations"
        );
        CommandUtil::print_report(context, &found_queues_report(&snapshot, &query, &Local::now()))
    }
}
