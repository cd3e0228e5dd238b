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
use chrono::TimeZone;
use jmsq_tools::core::normalize_filter;
use jmsq_tools::core::JmsqError;

fn local_millis(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32, ms: i64) -> i64 {
    Local
        .with_ymd_and_hms(y, mo, d, h, mi, s)
        .earliest()
        .unwrap()
        .timestamp_millis()
        + ms
}

#[test]
fn full_literal_becomes_local_epoch_millis() {
    let expected = local_millis(2018, 5, 3, 17, 47, 53, 728);
    assert_eq!(
        normalize_filter("JMSTimestamp > '2018-05-03 17:47:53.728'").unwrap(),
        format!("JMSTimestamp > {expected}")
    );
}

#[test]
fn shorter_literals_are_completed() {
    let seconds = local_millis(2018, 5, 3, 17, 47, 53, 0);
    let minutes = local_millis(2018, 5, 3, 17, 47, 0, 0);
    assert_eq!(
        normalize_filter("JMSTimestamp < 2018-05-03T17:47:53").unwrap(),
        format!("JMSTimestamp < {seconds}")
    );
    assert_eq!(
        normalize_filter("JMSTimestamp < \"2018-05-03 17:47\"").unwrap(),
        format!("JMSTimestamp < {minutes}")
    );
}

#[test]
fn only_the_first_literal_is_rewritten() {
    let first = local_millis(2018, 5, 3, 0, 0, 0, 0);
    assert_eq!(
        normalize_filter("JMSTimestamp > '2018-05-03 00:00' AND JMSTimestamp < '2018-05-04 00:00'").unwrap(),
        format!("JMSTimestamp > {first} AND JMSTimestamp < '2018-05-04 00:00'")
    );
}

#[test]
fn plain_selectors_pass_through() {
    for raw in ["", "JMSPriority > 4", "JMSCorrelationID = 'abc-2018'"] {
        assert_eq!(normalize_filter(raw).unwrap(), raw);
    }
}

#[test]
fn impossible_dates_are_reported() {
    match normalize_filter("JMSTimestamp > '2018-05-32 10:00'") {
        Err(JmsqError::MalformedTimestamp { literal, .. }) => assert_eq!(literal, "2018-05-32 10:00:00.000"),
        other => panic!("unexpected result: {other:?}"),
    }
}
