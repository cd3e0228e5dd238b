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

use serde::Serialize;
use tracing::info;

use crate::cli::formatters::get_formatter;
use crate::cli::formatters::OutputFormat;
use crate::commands::CommandContext;
use crate::commands::CommonArgs;
use crate::core::queue::DestinationSnapshot;
use crate::core::report::TabularReport;
use crate::core::JmsqResult;
use crate::log::emit_report;

pub struct CommandUtil;

impl CommandUtil {
    const NO_RESULTS: &'static str = "The search returned no results.";

    /// Loads the snapshot named by `args`, applying the context's environment label.
    pub fn load_snapshot(args: &CommonArgs, context: &CommandContext) -> JmsqResult<DestinationSnapshot> {
        let mut snapshot = DestinationSnapshot::load(&args.snapshot)?;
        if let Some(env) = &context.env {
            snapshot.env = env.clone();
        }
        info!(
            url = %snapshot.url,
            env = %snapshot.env,
            destinations = snapshot.destinations.len(),
            "Using destination snapshot"
        );
        Ok(snapshot)
    }

    /// Prints structured data in the context's output format.
    pub fn print_structured<T: Serialize>(context: &CommandContext, data: &T) {
        println!("{}", get_formatter(context.output).format(data));
    }

    /// Prints a report: rendered text in table mode, the report document in JSON mode.
    pub fn print_report(context: &CommandContext, report: &TabularReport) -> JmsqResult<()> {
        match context.output {
            OutputFormat::Json => Self::print_structured(context, report),
            OutputFormat::Table => match report.render()? {
                Some(text) => emit_report(&text),
                None => info!("{}", Self::NO_RESULTS),
            },
        }
        Ok(())
    }
}
