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

use std::path::Path;
use std::path::PathBuf;

use clap::Parser;
use serde::Deserialize;

use crate::commands::command_util::CommandUtil;
use crate::commands::CommandContext;
use crate::commands::CommandExecute;
use crate::core::report::ReportValue;
use crate::core::report::TabularReport;
use crate::core::JmsqResult;
use crate::core::SerializationError;
use crate::core::ToolsError;

#[derive(Debug, Clone, Parser)]
pub struct RenderSubCommand {
    #[arg(
        short = 'i',
        long = "input",
        required = true,
        value_name = "FILE",
        help = "JSON report document, eg: 'rows.json'"
    )]
    input: PathBuf,

    #[arg(short = 't', long = "title", help = "report title, overrides the document title")]
    title: Option<String>,

    #[arg(long = "sorted", help = "sort rows by their text")]
    sorted: bool,

    #[arg(long = "totaled", help = "append a totals row")]
    totaled: bool,
}

#[derive(Debug, Deserialize)]
struct ReportDocument {
    #[serde(default)]
    title: Option<String>,
    columns: Vec<String>,
    #[serde(default)]
    rows: Vec<Vec<ReportValue>>,
}

impl RenderSubCommand {
    fn load_report(&self, input: &Path) -> JmsqResult<TabularReport> {
        let document: ReportDocument = serde_json::from_str(&std::fs::read_to_string(input)?)
            .map_err(|e| SerializationError::decode_failed("JSON", format!("{}: {e}", input.display())))?;
        let title = self
            .title
            .clone()
            .or(document.title)
            .ok_or_else(|| ToolsError::validation_error("title", "Report title is missing, pass --title"))?;
        Ok(TabularReport {
            title,
            columns: document.columns,
            rows: document.rows,
            sorted: self.sorted,
            totaled: self.totaled,
        })
    }
}

impl CommandExecute for RenderSubCommand {
    fn execute(&self, context: &CommandContext) -> JmsqResult<()> {
        let report = self.load_report(&self.input)?;
        CommandUtil::print_report(context, &report)
    }
}
