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
use serde::Serialize;
use tracing::info;

use crate::cli::validators;
use crate::commands::command_util::CommandUtil;
use crate::commands::CommandContext;
use crate::commands::CommandExecute;
use crate::core::normalize_filter;
use crate::core::JmsqResult;

#[derive(Debug, Clone, Parser)]
pub struct NormalizeFilterSubCommand {
    #[arg(
        short = 'f',
        long = "filter",
        required = true,
        allow_hyphen_values = true,
        value_parser = validators::validate_filter,
        help = "message selector, eg: \"JMSTimestamp > '2018-05-03 17:47:53.728'\""
    )]
    filter: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NormalizedFilter<'a> {
    filter: &'a str,
    normalized: &'a str,
}

impl CommandExecute for NormalizeFilterSubCommand {
    fn execute(&self, context: &CommandContext) -> JmsqResult<()> {
        let normalized = normalize_filter(&self.filter)?;
        if normalized.is_empty() {
            info!("No filters will be applied");
        } else {
            info!("The following message filter will be applied: {normalized}");
        }
        CommandUtil::print_structured(
            context,
            &NormalizedFilter {
                filter: &self.filter,
                normalized: &normalized,
            },
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_filter_argument() {
        let cmd = NormalizeFilterSubCommand::try_parse_from([
            "normalizeFilter",
            "-f",
            " JMSTimestamp > '2018-05-03 17:47' ",
        ])
        .unwrap();
        assert_eq!(cmd.filter, "JMSTimestamp > '2018-05-03 17:47'");
    }

    #[test]
    fn malformed_literal_fails_the_command() {
        let cmd = NormalizeFilterSubCommand {
            filter: "JMSTimestamp > '2018-02-30 00:00'".to_string(),
        };
        assert!(cmd.execute(&CommandContext::default()).is_err());
    }
}
