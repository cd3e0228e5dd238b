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

//! Plain-text tabular reports
//!
//! Every listing the admin tools print goes through [`ReportBuilder`]. A report is built in
//! two passes: columns are first classified from the typed values (a column is numeric only
//! when every value in it is an integer), then every value is stringified and the numeric
//! classification drives justification and totals.
//!
//! ```text
//! Title
//! ========= =====
//! Name      Count
//! --------- -----
//! A             1
//! B             2
//! --------- -----
//! TOTAL (2)     3
//! ========= =====
//! ```

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use tracing::debug;

use crate::core::JmsqError;
use crate::core::JmsqResult;

/// A single report cell before stringification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReportValue {
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Text(String),
}

impl ReportValue {
    #[inline]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            ReportValue::Integer(value) => Some(*value),
            _ => None,
        }
    }
}

impl fmt::Display for ReportValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportValue::Integer(value) => write!(f, "{value}"),
            ReportValue::Float(value) => write!(f, "{value:?}"),
            ReportValue::Boolean(value) => write!(f, "{value}"),
            ReportValue::Text(value) => f.write_str(value),
        }
    }
}

macro_rules! integer_report_value {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ReportValue {
                #[inline]
                fn from(value: $ty) -> Self {
                    ReportValue::Integer(i64::from(value))
                }
            }
        )*
    };
}

integer_report_value!(i8, i16, i32, i64, u8, u16, u32);

impl From<f64> for ReportValue {
    #[inline]
    fn from(value: f64) -> Self {
        ReportValue::Float(value)
    }
}

impl From<bool> for ReportValue {
    #[inline]
    fn from(value: bool) -> Self {
        ReportValue::Boolean(value)
    }
}

impl From<&str> for ReportValue {
    #[inline]
    fn from(value: &str) -> Self {
        ReportValue::Text(value.to_string())
    }
}

impl From<String> for ReportValue {
    #[inline]
    fn from(value: String) -> Self {
        ReportValue::Text(value)
    }
}

/// Builds a report row from heterogeneous values.
///
/// ```rust
/// use jmsq_tools::core::report::ReportValue;
/// use jmsq_tools::report_row;
///
/// let row = report_row!["jmsQueue1", 3, 0];
/// assert_eq!(row[1], ReportValue::Integer(3));
/// ```
#[macro_export]
macro_rules! report_row {
    ($($value:expr),* $(,)?) => {
        vec![$($crate::core::report::ReportValue::from($value)),*]
    };
}

/// Fluent builder for a plain-text report
#[derive(Debug, Clone, Default)]
pub struct ReportBuilder {
    title: String,
    columns: Vec<String>,
    sorted: bool,
    totaled: bool,
}

impl ReportBuilder {
    #[inline]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Column names, positionally aligned with every row
    #[inline]
    pub fn columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Sort data rows by their stringified cells
    ///
    /// The comparison is textual for every column, so `"10"` sorts before `"9"`.
    #[inline]
    pub fn sorted(mut self, sorted: bool) -> Self {
        self.sorted = sorted;
        self
    }

    /// Append a totals row summing the numeric columns
    #[inline]
    pub fn totaled(mut self, totaled: bool) -> Self {
        self.totaled = totaled;
        self
    }

    /// Renders `rows` into a text block.
    ///
    /// Returns `Ok(None)` when there are no rows. Lines are joined with `\n` and the block
    /// has no trailing newline.
    ///
    /// # Errors
    /// [`JmsqError::RowArity`] when a row does not have one value per column.
    pub fn build(&self, rows: &[Vec<ReportValue>]) -> JmsqResult<Option<String>> {
        if rows.is_empty() {
            debug!(title = %self.title, "Report has no rows");
            return Ok(None);
        }
        let arity = self.columns.len();
        if let Some((index, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != arity) {
            return Err(JmsqError::row_arity(index, arity, row.len()));
        }

        let numeric: Vec<bool> = (0..arity)
            .map(|column| rows.iter().all(|row| row[column].as_integer().is_some()))
            .collect();

        let mut body: Vec<Vec<String>> = rows
            .iter()
            .map(|row| row.iter().map(ToString::to_string).collect())
            .collect();
        if self.sorted {
            body.sort();
        }

        let totals = self.totaled.then(|| totals_row(rows, &numeric));

        let mut widths: Vec<usize> = self.columns.iter().map(|name| name.chars().count()).collect();
        for row in body.iter().chain(totals.iter()) {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let thick = rule(&widths, '=');
        let thin = rule(&widths, '-');
        let mut lines = Vec::with_capacity(body.len() + 7);
        lines.push(self.title.clone());
        lines.push(thick.clone());
        lines.push(justify(&self.columns, &widths, &numeric));
        lines.push(thin.clone());
        lines.extend(body.iter().map(|row| justify(row, &widths, &numeric)));
        if let Some(totals) = &totals {
            lines.push(thin);
            lines.push(justify(totals, &widths, &numeric));
        }
        lines.push(thick);

        debug!(title = %self.title, rows = rows.len(), "Rendered report");
        Ok(Some(lines.join("\n")))
    }
}

/// A report's content kept apart from its rendering, for callers that print either text or
/// structured output
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TabularReport {
    pub title: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<ReportValue>>,
    #[serde(skip)]
    pub sorted: bool,
    #[serde(skip)]
    pub totaled: bool,
}

impl TabularReport {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn render(&self) -> JmsqResult<Option<String>> {
        ReportBuilder::new(self.title.as_str())
            .columns(self.columns.iter().map(String::as_str))
            .sorted(self.sorted)
            .totaled(self.totaled)
            .build(&self.rows)
    }
}

fn totals_row(rows: &[Vec<ReportValue>], numeric: &[bool]) -> Vec<String> {
    let mut totals: Vec<String> = numeric
        .iter()
        .enumerate()
        .map(|(column, is_numeric)| {
            if *is_numeric {
                rows.iter()
                    .filter_map(|row| row[column].as_integer())
                    .map(i128::from)
                    .sum::<i128>()
                    .to_string()
            } else {
                String::new()
            }
        })
        .collect();
    if let Some(first) = totals.first_mut().filter(|first| first.is_empty()) {
        *first = format!("TOTAL ({})", rows.len());
    }
    totals
}

fn rule(widths: &[usize], fill: char) -> String {
    widths
        .iter()
        .map(|width| fill.to_string().repeat(*width))
        .collect::<Vec<_>>()
        .join(" ")
}

fn justify<S: AsRef<str>>(cells: &[S], widths: &[usize], numeric: &[bool]) -> String {
    cells
        .iter()
        .zip(widths)
        .zip(numeric)
        .map(|((cell, width), is_numeric)| {
            if *is_numeric {
                format!("{:>width$}", cell.as_ref())
            } else {
                format!("{:<width$}", cell.as_ref())
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report_row;

    fn name_count() -> ReportBuilder {
        ReportBuilder::new("Title").columns(["Name", "Count"])
    }

    #[test]
    fn sorted_and_totaled() {
        let rows = vec![report_row!["B", 2], report_row!["A", 1]];
        let text = name_count().sorted(true).totaled(true).build(&rows).unwrap().unwrap();
        let expected = [
            "Title",
            "========= =====",
            "Name      Count",
            "--------- -----",
            "A             1",
            "B             2",
            "--------- -----",
            "TOTAL (2)     3",
            "========= =====",
        ]
        .join("\n");
        assert_eq!(text, expected);
    }

    #[test]
    fn plain_report_keeps_row_order() {
        let rows = vec![report_row!["B", 2], report_row!["A", 1]];
        let text = name_count().build(&rows).unwrap().unwrap();
        let expected = [
            "Title",
            "==== =====",
            "Name Count",
            "---- -----",
            "B        2",
            "A        1",
            "==== =====",
        ]
        .join("\n");
        assert_eq!(text, expected);
    }

    #[test]
    fn empty_rows_signal_no_data() {
        assert_eq!(name_count().sorted(true).totaled(true).build(&[]).unwrap(), None);
    }

    #[test]
    fn ragged_row_is_rejected() {
        let rows = vec![report_row!["A", 1], report_row!["B"]];
        let err = name_count().build(&rows).unwrap_err();
        assert!(matches!(
            err,
            JmsqError::RowArity {
                row: 1,
                expected: 2,
                actual: 1
            }
        ));
    }

    #[test]
    fn sort_is_textual() {
        let rows = vec![report_row![9, "x"], report_row![10, "y"]];
        let text = ReportBuilder::new("T")
            .columns(["N", "S"])
            .sorted(true)
            .build(&rows)
            .unwrap()
            .unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[4], "10 y");
        assert_eq!(lines[5], " 9 x");
    }

    #[test]
    fn numeric_first_column_keeps_its_sum() {
        let rows = vec![report_row![4, "a"], report_row![5, "b"]];
        let text = ReportBuilder::new("T")
            .columns(["N", "S"])
            .totaled(true)
            .build(&rows)
            .unwrap()
            .unwrap();
        assert_eq!(text.lines().nth(7), Some("9  "));
    }

    #[test]
    fn zero_sum_first_column_is_not_replaced() {
        let rows = vec![report_row![0, "a"]];
        let text = ReportBuilder::new("T")
            .columns(["N", "S"])
            .totaled(true)
            .build(&rows)
            .unwrap()
            .unwrap();
        assert_eq!(text.lines().nth(6), Some("0  "));
    }

    #[test]
    fn mixed_column_is_textual() {
        let rows = vec![report_row!["q", 1], report_row!["r", 1.5], report_row!["s", true]];
        let text = ReportBuilder::new("T")
            .columns(["Q", "V"])
            .totaled(true)
            .build(&rows)
            .unwrap()
            .unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[4], "q         1   ");
        assert_eq!(lines[5], "r         1.5 ");
        assert_eq!(lines[6], "s         true");
        assert_eq!(lines[8], "TOTAL (3)     ");
    }

    #[test]
    fn widths_count_characters() {
        let rows = vec![report_row!["Zürich", 1]];
        let text = ReportBuilder::new("T").columns(["Ort", "N"]).build(&rows).unwrap().unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "====== =");
        assert_eq!(lines[2], "Ort    N");
    }

    #[test]
    fn totals_do_not_overflow() {
        let rows = vec![report_row![i64::MAX], report_row![i64::MAX]];
        let text = ReportBuilder::new("T").columns(["N"]).totaled(true).build(&rows).unwrap().unwrap();
        let expected = (i128::from(i64::MAX) * 2).to_string();
        assert_eq!(text.lines().nth(7), Some(expected.as_str()));
    }

    #[test]
    fn tabular_report_renders_like_builder() {
        let report = TabularReport {
            title: "Title".to_string(),
            columns: vec!["Name".to_string(), "Count".to_string()],
            rows: vec![report_row!["B", 2], report_row!["A", 1]],
            sorted: true,
            totaled: true,
        };
        let rows = report.rows.clone();
        assert_eq!(
            report.render().unwrap(),
            name_count().sorted(true).totaled(true).build(&rows).unwrap()
        );
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(
            json,
            r#"{"title":"Title","columns":["Name","Count"],"rows":[["B",2],["A",1]]}"#
        );
    }

    #[test]
    fn values_deserialize_from_json() {
        let rows: Vec<Vec<ReportValue>> = serde_json::from_str(r#"[["a", 1, 2.5, false]]"#).unwrap();
        assert_eq!(
            rows[0],
            vec![
                ReportValue::Text("a".into()),
                ReportValue::Integer(1),
                ReportValue::Float(2.5),
                ReportValue::Boolean(false),
            ]
        );
    }
}
