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

mod normalize_filter_sub_command;

use clap::Subcommand;

use crate::commands::CommandContext;
use crate::commands::CommandExecute;
use crate::core::JmsqResult;

#[derive(Subcommand)]
pub enum SelectorCommands {
    #[command(
        name = "normalizeFilter",
        about = "Normalize a message selector",
        long_about = r#"Rewrite the first date-time literal of a message selector as epoch milliseconds
in the local time zone. Accepted literals: 'YYYY-MM-DD HH:MM:SS.mmm', 'YYYY-MM-DD HH:MM:SS'
and 'YYYY-MM-DD HH:MM'. Selectors without a literal are printed unchanged."#
    )]
    NormalizeFilter(normalize_filter_sub_command::NormalizeFilterSubCommand),
}

impl CommandExecute for SelectorCommands {
    fn execute(&self, context: &CommandContext) -> JmsqResult<()> {
        match self {
            SelectorCommands::NormalizeFilter(value) => value.execute(context),
        }
    }
}
