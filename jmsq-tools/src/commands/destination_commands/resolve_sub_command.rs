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

use clap::Parser;
use tracing::info;

use crate::cli::validators;
use crate::commands::command_util::CommandUtil;
use crate::commands::CommandContext;
use crate::commands::CommandExecute;
use crate::core::resolve_destination;
use crate::core::JmsqResult;

#[derive(Debug, Clone, Parser)]
pub struct ResolveSubCommand {
    #[arg(
        short = 'n',
        long = "name",
        required = true,
        value_parser = validators::validate_queue_name,
        help = "destination identifier, eg: 'Module!JmsServer@server1@jmsQueue1'"
    )]
    name: String,
}

impl CommandExecute for ResolveSubCommand {
    fn execute(&self, context: &CommandContext) -> JmsqResult<()> {
        let descriptor = resolve_destination(&self.name);
        info!(
            identifier = %self.name,
            logical_name = %descriptor.logical_name,
            "Resolved destination"
        );
        CommandUtil::print_structured(context, &descriptor);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_name() {
        let cmd = ResolveSubCommand::try_parse_from(["resolve", "-n", "Mod!Srv@Host@Q1"]).unwrap();
        assert_eq!(cmd.name, "Mod!Srv@Host@Q1");
    }
}
