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

mod render_sub_command;

use clap::Subcommand;

use crate::commands::CommandContext;
use crate::commands::CommandExecute;
use crate::core::JmsqResult;

#[derive(Subcommand)]
pub enum ReportCommands {
    #[command(
        name = "render",
        about = "Render rows as a report",
        long_about = r#"Render a JSON report document as a column-aligned text report. The document holds
'columns' (names) and 'rows' (arrays of numbers, booleans or strings), plus an optional 'title'.
Columns whose values are all integers are right-justified and summed in the totals row."#
    )]
    Render(render_sub_command::RenderSubCommand),
}

impl CommandExecute for ReportCommands {
    fn execute(&self, context: &CommandContext) -> JmsqResult<()> {
        match self {
            ReportCommands::Render(value) => value.execute(context),
        }
    }
}
