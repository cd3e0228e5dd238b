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

//! Queue listings over a destination snapshot
//!
//! A [`DestinationSnapshot`] is the runtime state of every destination on every host server,
//! as collected from the broker's management interface. This module only turns such a
//! snapshot into report rows; it never talks to the broker.

use std::fmt::Display;
use std::path::Path;

use chrono::DateTime;
use chrono::TimeZone;
use serde::Deserialize;
use serde::Serialize;
use tracing::debug;

use super::destination::DestinationDescriptor;
use super::destination::DestinationNameResolver;
use super::report::ReportValue;
use super::report::TabularReport;
use super::timestamp::TimestampNormalizer;
use super::url::ConnectionUrl;
use crate::core::JmsqResult;
use crate::core::SerializationError;
use crate::report_row;

/// Marker carried by dead-message queue names
pub const DMQ_MARKER: &str = "_dmq";

const TITLE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S %Z";

/// Runtime state of all destinations reachable through one admin connection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationSnapshot {
    pub url: String,
    pub env: String,
    #[serde(default)]
    pub destinations: Vec<DestinationStats>,
}

impl DestinationSnapshot {
    /// Reads a JSON snapshot file
    pub fn load(path: impl AsRef<Path>) -> JmsqResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let snapshot: Self = serde_json::from_str(&content)
            .map_err(|e| SerializationError::decode_failed("JSON", format!("{}: {e}", path.display())))?;
        debug!(
            path = %path.display(),
            destinations = snapshot.destinations.len(),
            "Loaded destination snapshot"
        );
        Ok(snapshot)
    }
}

/// Runtime counters of one destination on one broker server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationStats {
    pub name: String,
    pub host_server: String,
    pub broker_server: String,
    #[serde(default)]
    pub consumers_current_count: i64,
    #[serde(default)]
    pub messages_current_count: i64,
    #[serde(default)]
    pub messages_pending_count: i64,
    #[serde(default)]
    pub messages_received_count: i64,
    #[serde(default)]
    pub messages_high_count: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_message: Option<MessageSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_message: Option<MessageSummary>,
}

impl DestinationStats {
    #[inline]
    pub fn is_dmq(&self) -> bool {
        self.name.contains(DMQ_MARKER)
    }

    #[inline]
    pub fn short_name(&self) -> &str {
        DestinationNameResolver::short_name(&self.name)
    }
}

/// Header properties of a message sitting on a queue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageSummary {
    pub jms_message_id: String,
    /// Epoch milliseconds
    pub jms_timestamp: i64,
    #[serde(default)]
    pub payload_size: i64,
    #[serde(default)]
    pub jms_expiration: i64,
    #[serde(default)]
    pub jms_redelivered: bool,
    #[serde(default)]
    pub jms_redelivery_limit: i64,
}

/// The queue listings an operator can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueListing {
    All,
    WithoutListeners,
    WithCurrentMessages,
    DmqWithCurrentMessages,
}

impl QueueListing {
    pub fn subject(self) -> &'static str {
        match self {
            QueueListing::All => "LIST OF ALL QUEUES",
            QueueListing::WithoutListeners => "LIST OF QUEUES WITHOUT LISTENERS",
            QueueListing::WithCurrentMessages => "LIST OF QUEUES WITH CURRENT MESSAGES",
            QueueListing::DmqWithCurrentMessages => "LIST OF DMQs WITH CURRENT MESSAGES",
        }
    }

    pub fn columns(self) -> &'static [&'static str] {
        match self {
            QueueListing::All | QueueListing::WithCurrentMessages => {
                &["QUEUE_NAME", "CUR_CONS", "CUR_MSG", "PEND_MSG"]
            }
            QueueListing::WithoutListeners => &["QUEUE_NAME", "CUR_CONS", "CUR_MSG"],
            QueueListing::DmqWithCurrentMessages => &["QUEUE_NAME", "CUR_MSG"],
        }
    }

    /// Whether `stats` belongs in this listing. DMQs never count as queues without listeners.
    pub fn includes(self, stats: &DestinationStats) -> bool {
        match self {
            QueueListing::All => true,
            QueueListing::WithoutListeners => stats.consumers_current_count == 0 && !stats.is_dmq(),
            QueueListing::WithCurrentMessages => {
                stats.messages_current_count > 0 || stats.messages_pending_count > 0
            }
            QueueListing::DmqWithCurrentMessages => stats.messages_current_count > 0 && stats.is_dmq(),
        }
    }

    pub fn row(self, stats: &DestinationStats) -> Vec<ReportValue> {
        let name = stats.name.as_str();
        match self {
            QueueListing::All | QueueListing::WithCurrentMessages => report_row![
                name,
                stats.consumers_current_count,
                stats.messages_current_count,
                stats.messages_pending_count
            ],
            QueueListing::WithoutListeners => {
                report_row![name, stats.consumers_current_count, stats.messages_current_count]
            }
            QueueListing::DmqWithCurrentMessages => report_row![name, stats.messages_current_count],
        }
    }

    pub fn rows(self, destinations: &[DestinationStats]) -> Vec<Vec<ReportValue>> {
        destinations
            .iter()
            .filter(|stats| self.includes(stats))
            .map(|stats| self.row(stats))
            .collect()
    }

    /// The listing as a sorted and totaled report
    pub fn report<Tz>(self, snapshot: &DestinationSnapshot, now: &DateTime<Tz>) -> TabularReport
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        TabularReport {
            title: report_title(self.subject(), &snapshot.url, &snapshot.env, now),
            columns: self.columns().iter().map(|name| name.to_string()).collect(),
            rows: self.rows(&snapshot.destinations),
            sorted: true,
            totaled: true,
        }
    }
}

/// `REPORT: <SUBJECT>, <hostname> (<env>), <YYYY-MM-DD HH:MM:SS tz>`
pub fn report_title<Tz>(subject: &str, url: &str, env: &str, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!(
        "REPORT: {}, {} ({}), {}",
        subject,
        ConnectionUrl::parse(url).hostname,
        env,
        now.format(TITLE_TIME_FORMAT)
    )
}

/// PROPERTY/VALUE rows describing one destination and its first and last message.
pub fn queue_info_rows(stats: &DestinationStats) -> Vec<Vec<ReportValue>> {
    let mut rows = vec![
        report_row!["Queue name", stats.short_name()],
        report_row!["Queue full name", stats.name.as_str()],
        report_row!["Messages Current Count", stats.messages_current_count],
        report_row!["Messages Received Count", stats.messages_received_count],
        report_row!["Messages Pending Count", stats.messages_pending_count],
        report_row!["Messages High Count", stats.messages_high_count],
        report_row!["Consumers Current Count", stats.consumers_current_count],
    ];
    if stats.messages_current_count == 0 {
        return rows;
    }
    if let Some(first) = &stats.first_message {
        push_message_rows(&mut rows, "First message..........", first);
    }
    if let Some(last) = stats
        .last_message
        .as_ref()
        .filter(|last| stats.first_message.as_ref() != Some(*last))
    {
        push_message_rows(&mut rows, "Last message...........", last);
    }
    rows
}

fn push_message_rows(rows: &mut Vec<Vec<ReportValue>>, label: &str, message: &MessageSummary) {
    rows.push(report_row!["", ""]);
    rows.push(report_row![label, ""]);
    rows.push(report_row!["JMSMessageID", message.jms_message_id.as_str()]);
    rows.push(report_row![
        "JMSTimestamp",
        TimestampNormalizer::to_local_string(message.jms_timestamp)
    ]);
    rows.push(report_row!["PayloadSize", message.payload_size]);
    rows.push(report_row!["JMSExpiration", message.jms_expiration]);
    rows.push(report_row!["JMSRedelivered", message.jms_redelivered]);
    rows.push(report_row!["JMSRedeliveryLimit", message.jms_redelivery_limit]);
}

/// Information reports for `queue`, one per host server it lives on, in snapshot order.
pub fn queue_info_reports<Tz>(snapshot: &DestinationSnapshot, queue: &str, now: &DateTime<Tz>) -> Vec<TabularReport>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let queue = queue.trim();
    let mut host_servers: Vec<&str> = Vec::new();
    for stats in &snapshot.destinations {
        if !host_servers.contains(&stats.host_server.as_str()) {
            host_servers.push(&stats.host_server);
        }
    }

    let mut reports = Vec::new();
    for host_server in host_servers {
        let rows: Vec<Vec<ReportValue>> = snapshot
            .destinations
            .iter()
            .filter(|stats| stats.host_server == host_server && stats.short_name() == queue)
            .flat_map(queue_info_rows)
            .collect();
        if rows.is_empty() {
            debug!(queue, host_server, "Queue not present on host server");
            continue;
        }
        reports.push(TabularReport {
            title: format!(
                "REPORT: INFORMATION ON QUEUE {}, {} ({}) {}",
                queue,
                host_server,
                snapshot.env,
                now.format(TITLE_TIME_FORMAT)
            ),
            columns: vec!["PROPERTY".to_string(), "VALUE".to_string()],
            rows,
            sorted: false,
            totaled: false,
        });
    }
    reports
}

/// A user-entered destination name and the parts it pins down
///
/// A bare queue name targets every destination with that short name. A qualified name
/// (`module!broker@host@queue`) narrows the match to the given broker and host servers and
/// is compared against the full destination name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationQuery {
    raw: String,
    descriptor: DestinationDescriptor,
}

impl DestinationQuery {
    pub fn new(raw: &str) -> Self {
        let raw = raw.trim();
        Self {
            raw: raw.to_string(),
            descriptor: DestinationNameResolver::decompose(raw),
        }
    }

    #[inline]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    #[inline]
    pub fn descriptor(&self) -> &DestinationDescriptor {
        &self.descriptor
    }

    pub fn targets_host_server(&self, host_server: &str) -> bool {
        self.descriptor
            .host_server
            .as_deref()
            .is_none_or(|wanted| wanted == host_server)
    }

    /// Broker server names may carry an `@host` suffix, which is ignored.
    pub fn targets_broker_server(&self, broker_server: &str) -> bool {
        let broker_server = broker_server.split('@').next().unwrap_or(broker_server);
        self.descriptor
            .broker_server
            .as_deref()
            .is_none_or(|wanted| wanted == broker_server)
    }

    pub fn targets_name(&self, full_name: &str) -> bool {
        if self.descriptor.module.is_some() {
            full_name == self.raw
        } else {
            DestinationNameResolver::short_name(full_name) == self.raw
        }
    }

    pub fn targets(&self, stats: &DestinationStats) -> bool {
        self.targets_host_server(&stats.host_server)
            && self.targets_broker_server(&stats.broker_server)
            && self.targets_name(&stats.name)
    }

    pub fn select<'a>(&'a self, destinations: &'a [DestinationStats]) -> impl Iterator<Item = &'a DestinationStats> {
        destinations.iter().filter(move |stats| self.targets(stats))
    }
}

/// Columns of the report listing the destinations a query targets
pub const FOUND_COLUMNS: [&str; 6] = [
    "SERVER",
    "JMS_SERVER",
    "QUEUE_NAME",
    "CUR_CONS",
    "CUR_MSG",
    "PEND_MSG",
];

/// The destinations targeted by `query` as a sorted and totaled report
pub fn found_queues_report<Tz>(snapshot: &DestinationSnapshot, query: &DestinationQuery, now: &DateTime<Tz>) -> TabularReport
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let rows: Vec<Vec<ReportValue>> = query
        .select(&snapshot.destinations)
        .map(|stats| {
            report_row![
                stats.host_server.as_str(),
                stats.broker_server.as_str(),
                stats.name.as_str(),
                stats.consumers_current_count,
                stats.messages_current_count,
                stats.messages_pending_count
            ]
        })
        .collect();
    TabularReport {
        title: report_title("QUEUES FOUND", &snapshot.url, &snapshot.env, now),
        columns: FOUND_COLUMNS.iter().map(|name| name.to_string()).collect(),
        rows,
        sorted: true,
        totaled: true,
    }
}
