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

//! Property table formatter

use serde::Serialize;
use serde_json::Value;
use tabled::settings::Style;
use tabled::Table;
use tabled::Tabled;

use super::Formatter;

pub struct TableFormatter;

#[derive(Tabled)]
struct PropertyEntry {
    #[tabled(rename = "Property")]
    property: String,
    #[tabled(rename = "Value")]
    value: String,
}

impl Formatter for TableFormatter {
    /// Objects become one row per field, ordered by field name; anything else is printed as is.
    fn format<T: Serialize>(&self, data: &T) -> String {
        let value = match serde_json::to_value(data) {
            Ok(value) => value,
            Err(e) => return format!("error: {e}"),
        };
        match value {
            Value::Object(fields) => {
                let rows: Vec<PropertyEntry> = fields
                    .into_iter()
                    .map(|(property, value)| PropertyEntry {
                        property,
                        value: scalar_text(value),
                    })
                    .collect();
                let mut table = Table::new(rows);
                table.with(Style::extended());
                table.to_string()
            }
            other => scalar_text(other),
        }
    }
}

fn scalar_text(value: Value) -> String {
    match value {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
