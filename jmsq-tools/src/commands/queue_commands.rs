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

mod find_sub_command;
mod info_sub_command;
mod list_sub_command;

use clap::Subcommand;

use crate::commands::CommandContext;
use crate::commands::CommandExecute;
use crate::core::JmsqResult;

#[derive(Subcommand)]
pub enum QueueCommands {
    #[command(
        name = "list",
        about = "List queues from a snapshot",
        long_about = r#"List the queues of a destination snapshot as a sorted report with totals.
Kinds: 'all', 'withoutListeners' (no consumers, DMQs excluded), 'withMessages' (current or
pending messages) and 'dmq' (dead-message queues holding messages)."#
    )]
    List(list_sub_command::ListSubCommand),

    #[command(
        name = "info",
        about = "Show information on one queue",
        long_about = r#"Show counters and the first and last message of a queue, one report per host server
the queue lives on."#
    )]
    Info(info_sub_command::InfoSubCommand),

    #[command(
        name = "find",
        about = "Find the destinations a name targets",
        long_about = r#"List the destinations a queue name would act on. A bare name matches every
destination with that short name; 'module!broker@host@queue' pins the broker and host servers."#
    )]
    Find(find_sub_command::FindSubCommand),
}

impl CommandExecute for QueueCommands {
    fn execute(&self, context: &CommandContext) -> JmsqResult<()> {
        match self {
            QueueCommands::List(value) => value.execute(context),
            QueueCommands::Info(value) => value.execute(context),
            QueueCommands::Find(value) => value.execute(context),
        }
    }
}
