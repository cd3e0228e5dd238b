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

//! Message selector normalization
//!
//! The management API only accepts numeric values for `JMSTimestamp`, so a selector such as
//! `JMSTimestamp > '2018-05-03 17:47:53.728'` must reach the broker as
//! `JMSTimestamp > 1525369673728` (in UTC+0). Only the first literal found by the shape
//! cascade is rewritten; the rest of the expression is passed through as text.

use chrono::Local;
use chrono::TimeZone;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::timestamp::TimestampNormalizer;
use crate::core::JmsqResult;

/// One accepted literal shape and the suffix that completes it to full millisecond precision.
struct LiteralShape {
    name: &'static str,
    pattern: Regex,
    completion: &'static str,
}

impl LiteralShape {
    fn new(name: &'static str, pattern: &str, completion: &'static str) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).expect("timestamp literal pattern is valid"),
            completion,
        }
    }
}

/// Longest shape first, otherwise the minutes shape would claim the prefix of a full literal.
static LITERAL_SHAPES: Lazy<[LiteralShape; 3]> = Lazy::new(|| {
    [
        LiteralShape::new(
            "date time.millis",
            r"[0-9]{4}-[0-9]{2}-[0-9]{2}[^0-9][0-9]{2}:[0-9]{2}:[0-9]{2}\.[0-9]{3}",
            "",
        ),
        LiteralShape::new(
            "date time",
            r"[0-9]{4}-[0-9]{2}-[0-9]{2}[^0-9][0-9]{2}:[0-9]{2}:[0-9]{2}",
            ".000",
        ),
        LiteralShape::new(
            "date hours:minutes",
            r"[0-9]{4}-[0-9]{2}-[0-9]{2}[^0-9][0-9]{2}:[0-9]{2}",
            ":00.000",
        ),
    ]
});

/// Rewrites timestamp literals in message selectors
pub struct SelectorTranslator;

impl SelectorTranslator {
    /// Normalizes `raw` using the local time zone.
    ///
    /// Returns the input unchanged when it holds no date-shaped substring.
    ///
    /// # Errors
    /// [`crate::core::JmsqError::MalformedTimestamp`] when a date-shaped substring is
    /// found but is not a real date/time. The error is never swallowed: a selector with
    /// the literal left in place would be rejected or misread by the broker.
    pub fn normalize(raw: &str) -> JmsqResult<String> {
        Self::normalize_in(raw, &Local)
    }

    /// Same as [`Self::normalize`] with an explicit time zone.
    pub fn normalize_in<Tz: TimeZone>(raw: &str, tz: &Tz) -> JmsqResult<String> {
        for shape in LITERAL_SHAPES.iter() {
            let Some(found) = shape.pattern.find(raw) else {
                continue;
            };
            let literal = format!("{}{}", found.as_str(), shape.completion);
            let millis = TimestampNormalizer::to_epoch_millis_in(&literal, tz)?;
            let (start, end) = strip_quotes(raw, found.start(), found.end());
            debug!(
                shape = shape.name,
                literal = found.as_str(),
                millis,
                "Rewrote timestamp literal in selector"
            );
            return Ok(format!("{}{}{}", &raw[..start], millis, &raw[end..]));
        }
        Ok(raw.to_string())
    }
}

/// Widens `start..end` over a matching pair of `'` or `"` quotes around the literal.
fn strip_quotes(raw: &str, start: usize, end: usize) -> (usize, usize) {
    let bytes = raw.as_bytes();
    if start == 0 || end >= bytes.len() {
        return (start, end);
    }
    let open = bytes[start - 1];
    if (open == b'\'' || open == b'"') && bytes[end] == open {
        (start - 1, end + 1)
    } else {
        (start, end)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::core::JmsqError;

    #[test]
    fn full_literal() {
        assert_eq!(
            SelectorTranslator::normalize_in("JMSTimestamp > 2018-05-03 17:47:53.728", &Utc).unwrap(),
            "JMSTimestamp > 1525369673728"
        );
    }

    #[test]
    fn quoted_literal_loses_its_quotes() {
        assert_eq!(
            SelectorTranslator::normalize_in("JMSTimestamp > '2018-05-03 17:47:53.728'", &Utc).unwrap(),
            "JMSTimestamp > 1525369673728"
        );
        assert_eq!(
            SelectorTranslator::normalize_in("JMSTimestamp > \"2018-05-03 17:47:53.728\"", &Utc).unwrap(),
            "JMSTimestamp > 1525369673728"
        );
    }

    #[test]
    fn unbalanced_quote_is_kept() {
        assert_eq!(
            SelectorTranslator::normalize_in("JMSTimestamp > '2018-05-03 17:47:53.728", &Utc).unwrap(),
            "JMSTimestamp > '1525369673728"
        );
    }

    #[test]
    fn seconds_literal() {
        assert_eq!(
            SelectorTranslator::normalize_in("JMSTimestamp < 2018-05-03 17:47:53", &Utc).unwrap(),
            "JMSTimestamp < 1525369673000"
        );
    }

    #[test]
    fn minutes_literal() {
        assert_eq!(
            SelectorTranslator::normalize_in("JMSTimestamp < '2018-05-03 17:47'", &Utc).unwrap(),
            "JMSTimestamp < 1525369620000"
        );
    }

    #[test]
    fn trailing_expression_is_kept() {
        assert_eq!(
            SelectorTranslator::normalize_in(
                "JMSTimestamp > '2018-05-03 17:47:53.728' AND JMSXDeliveryCount > 0",
                &Utc
            )
            .unwrap(),
            "JMSTimestamp > 1525369673728 AND JMSXDeliveryCount > 0"
        );
    }

    #[test]
    fn only_first_literal_is_rewritten() {
        let out = SelectorTranslator::normalize_in(
            "JMSTimestamp > '2018-05-03 17:47:53.728' AND JMSTimestamp < '2018-05-04 00:00:00.000'",
            &Utc,
        )
        .unwrap();
        assert_eq!(
            out,
            "JMSTimestamp > 1525369673728 AND JMSTimestamp < '2018-05-04 00:00:00.000'"
        );
    }

    #[test]
    fn longer_shape_wins_over_earlier_shorter_literal() {
        // the millisecond literal comes second but its shape is tried first
        let out = SelectorTranslator::normalize_in(
            "JMSTimestamp > '2018-05-03 17:47' AND JMSTimestamp < '2018-05-03 17:47:53.728'",
            &Utc,
        )
        .unwrap();
        assert_eq!(
            out,
            "JMSTimestamp > '2018-05-03 17:47' AND JMSTimestamp < 1525369673728"
        );
    }

    #[test]
    fn non_temporal_filters_are_untouched() {
        for raw in [
            "",
            "JMS_BEA_State LIKE 'expired'",
            "JMSXDeliveryCount > 0",
            "JMSType = 'car' AND weight > 2500",
            "JMSTimestamp > 1525369673728",
        ] {
            assert_eq!(SelectorTranslator::normalize_in(raw, &Utc).unwrap(), raw);
        }
    }

    #[test]
    fn malformed_literal_propagates() {
        let err = SelectorTranslator::normalize_in("JMSTimestamp > '2018-13-03 17:47:53.728'", &Utc).unwrap_err();
        assert!(matches!(err, JmsqError::MalformedTimestamp { .. }));
    }

    #[test]
    fn local_zone_matches_normalizer() {
        let literal = "2018-05-03 17:47:53.728";
        let millis = TimestampNormalizer::to_epoch_millis(literal).unwrap();
        assert_eq!(
            SelectorTranslator::normalize(&format!("X {literal}")).unwrap(),
            format!("X {millis}")
        );
    }
}
