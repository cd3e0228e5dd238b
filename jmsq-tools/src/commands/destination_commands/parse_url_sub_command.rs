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

use crate::cli::validators;
use crate::commands::command_util::CommandUtil;
use crate::commands::CommandContext;
use crate::commands::CommandExecute;
use crate::core::parse_connection_url;
use crate::core::JmsqResult;

#[derive(Debug, Clone, Parser)]
pub struct ParseUrlSubCommand {
    #[arg(
        short = 'u',
        long = "url",
        required = true,
        value_parser = validators::validate_connection_url,
        help = "admin connection URL, eg: 't3://adminhost:7001'"
    )]
    url: String,
}

impl CommandExecute for ParseUrlSubCommand {
    fn execute(&self, context: &CommandContext) -> JmsqResult<()> {
        CommandUtil::print_structured(context, &parse_connection_url(&self.url));
        Ok(())
    }
}
