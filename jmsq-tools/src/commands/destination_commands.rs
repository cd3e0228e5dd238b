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

mod parse_url_sub_command;
mod resolve_sub_command;
mod short_name_sub_command;

use clap::Subcommand;

use crate::commands::CommandContext;
use crate::commands::CommandExecute;
use crate::core::JmsqResult;

#[derive(Subcommand)]
pub enum DestinationCommands {
    #[command(
        name = "shortName",
        about = "Extract the short queue name",
        long_about = r#"Extract the user-facing queue name from a runtime destination identifier,
eg: 'Module!JmsServer@server1@jmsQueue1' -> 'jmsQueue1'. JNDI path prefixes are stripped."#
    )]
    ShortName(short_name_sub_command::ShortNameSubCommand),

    #[command(
        name = "resolve",
        about = "Split a destination identifier into parts",
        long_about = r#"Split a runtime destination identifier into module, broker server, host server
and logical name. Parts the identifier does not carry are omitted."#
    )]
    Resolve(resolve_sub_command::ResolveSubCommand),

    #[command(
        name = "parseUrl",
        about = "Split a connection URL into parts",
        long_about = r#"Split an admin connection URL into protocol, hostname, port and path.
Input that is not a URL is reported as a bare hostname."#
    )]
    ParseUrl(parse_url_sub_command::ParseUrlSubCommand),
}

impl CommandExecute for DestinationCommands {
    fn execute(&self, context: &CommandContext) -> JmsqResult<()> {
        match self {
            DestinationCommands::ShortName(value) => value.execute(context),
            DestinationCommands::Resolve(value) => value.execute(context),
            DestinationCommands::ParseUrl(value) => value.execute(context),
        }
    }
}
