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
use clap::ValueEnum;
use tracing::info;

use crate::commands::command_util::CommandUtil;
use crate::commands::CommandContext;
use crate::commands::CommandExecute;
use crate::commands::CommonArgs;
use crate::core::queue::QueueListing;
use crate::core::JmsqResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListingKind {
    #[value(name = "all")]
    All,
    #[value(name = "withoutListeners")]
    WithoutListeners,
    #[value(name = "withMessages")]
    WithMessages,
    #[value(name = "dmq")]
    Dmq,
}

impl From<ListingKind> for QueueListing {
    fn from(kind: ListingKind) -> Self {
        match kind {
            ListingKind::All => QueueListing::All,
            ListingKind::WithoutListeners => QueueListing::WithoutListeners,
            ListingKind::WithMessages => QueueListing::WithCurrentMessages,
            ListingKind::Dmq => QueueListing::DmqWithCurrentMessages,
        }
    }
}

#[derive(Debug, Clone, Parser)]
pub struct ListSubCommand {
    /// Common arguments
    #[command(flatten)]
    common_args: CommonArgs,

    #[arg(short = 'k', long = "kind", value_enum, default_value = "all", help = "which queues to list")]
    kind: ListingKind,
}

impl CommandExecute for ListSubCommand {
    fn execute(&self, context: &CommandContext) -> JmsqResult<()> {
        let snapshot = CommandUtil::load_snapshot(&self.common_args, context)?;
        let listing = QueueListing::from(self.kind);
        let report = listing.report(&snapshot, &Local::now());
        CommandUtil::print_report(context, &report)?;
        info!(listing = listing.subject(), rows = report.rows.len(), "Queue listing completed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_are_camel_case() {
        let cmd = ListSubCommand::try_parse_from(["list", "-s", "snapshot.json", "-k", "withoutListeners"]).unwrap();
        assert_eq!(cmd.kind, ListingKind::WithoutListeners);
        assert_eq!(
            QueueListing::from(cmd.kind),
            QueueListing::WithoutListeners
        );
    }

    #[test]
    fn kind_defaults_to_all() {
        let cmd = ListSubCommand::try_parse_from(["list", "--snapshot", "snapshot.json"]).unwrap();
        assert_eq!(cmd.kind, ListingKind::All);
    }

    #[test]
    fn unknown_kind_is_rejected() {
        assert!(ListSubCommand::try_parse_from(["list", "-s", "snapshot.json", "-k", "everything"]).is_err());
    }
}
