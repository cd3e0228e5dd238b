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

//! Date-time literal normalization
//!
//! Message selectors compare `JMSTimestamp` against epoch milliseconds, while
//! operators type dates. [`TimestampNormalizer`] converts a
//! `YYYY-MM-DD<sep>HH:MM:SS.mmm` literal into the number the broker expects.

use chrono::DateTime;
use chrono::Local;
use chrono::NaiveDate;
use chrono::NaiveDateTime;
use chrono::TimeZone;
use once_cell::sync::Lazy;
use regex::Captures;
use regex::Regex;

use crate::core::JmsqError;
use crate::core::JmsqResult;

/// Display format for message timestamps in queue reports.
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The separator between date and time may be any single non-digit character.
static FULL_LITERAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{4})-([0-9]{2})-([0-9]{2})[^0-9]([0-9]{2}):([0-9]{2}):([0-9]{2})\.([0-9]{3})$")
        .expect("full timestamp literal pattern is valid")
});

/// Converts date-time literals to epoch milliseconds
pub struct TimestampNormalizer;

impl TimestampNormalizer {
    /// Epoch milliseconds of `literal`, read as a wall-clock time in the local time zone.
    ///
    /// # Errors
    /// [`JmsqError::MalformedTimestamp`] if the literal does not have the exact
    /// `YYYY-MM-DD<sep>HH:MM:SS.mmm` shape, names an impossible calendar date or time of
    /// day, or falls into a daylight-saving gap.
    pub fn to_epoch_millis(literal: &str) -> JmsqResult<i64> {
        Self::to_epoch_millis_in(literal, &Local)
    }

    /// Same as [`Self::to_epoch_millis`] with an explicit time zone.
    ///
    /// Wall-clock times that occur twice (daylight-saving fold) resolve to the earliest
    /// instant.
    pub fn to_epoch_millis_in<Tz: TimeZone>(literal: &str, tz: &Tz) -> JmsqResult<i64> {
        let naive = Self::parse_naive(literal)?;
        tz.from_local_datetime(&naive)
            .earliest()
            .map(|instant| instant.timestamp_millis())
            .ok_or_else(|| JmsqError::malformed_timestamp(literal, "local time does not exist in this time zone"))
    }

    /// Parses the literal without attaching a time zone.
    pub fn parse_naive(literal: &str) -> JmsqResult<NaiveDateTime> {
        let caps = FULL_LITERAL
            .captures(literal)
            .ok_or_else(|| JmsqError::malformed_timestamp(literal, "expected YYYY-MM-DD HH:MM:SS.mmm"))?;

        let year = field(literal, &caps, 1)? as i32;
        let month = field(literal, &caps, 2)?;
        let day = field(literal, &caps, 3)?;
        let hour = field(literal, &caps, 4)?;
        let minute = field(literal, &caps, 5)?;
        let second = field(literal, &caps, 6)?;
        let milli = field(literal, &caps, 7)?;

        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| JmsqError::malformed_timestamp(literal, "invalid calendar date"))?;
        // chrono admits a leap second as second 59 with millis >= 1000; the literal only
        // carries three millisecond digits, so second 60 is rejected here
        date.and_hms_milli_opt(hour, minute, second, milli)
            .ok_or_else(|| JmsqError::malformed_timestamp(literal, "invalid time of day"))
    }

    /// Formats epoch milliseconds as a local `YYYY-MM-DD HH:MM:SS` string.
    ///
    /// Out-of-range values are rendered as the raw number.
    pub fn to_local_string(millis: i64) -> String {
        match DateTime::from_timestamp_millis(millis) {
            Some(instant) => instant.with_timezone(&Local).format(DISPLAY_FORMAT).to_string(),
            None => millis.to_string(),
        }
    }
}

fn field(literal: &str, caps: &Captures<'_>, index: usize) -> JmsqResult<u32> {
    caps[index]
        .parse::<u32>()
        .map_err(|e| JmsqError::malformed_timestamp(literal, e.to_string()))
}

#[cfg(test)]
mod tests {
    use chrono::FixedOffset;
    use chrono::Utc;

    use super::*;

    #[test]
    fn utc_epoch_origin() {
        assert_eq!(
            TimestampNormalizer::to_epoch_millis_in("1970-01-01 00:00:00.000", &Utc).unwrap(),
            0
        );
    }

    #[test]
    fn utc_known_instant() {
        assert_eq!(
            TimestampNormalizer::to_epoch_millis_in("2018-05-03 17:47:53.728", &Utc).unwrap(),
            1_525_369_673_728
        );
    }

    #[test]
    fn fixed_offset_shifts_result() {
        let cet = FixedOffset::east_opt(3600).unwrap();
        assert_eq!(
            TimestampNormalizer::to_epoch_millis_in("2018-05-03 17:47:53.728", &cet).unwrap(),
            1_525_369_673_728 - 3_600_000
        );
    }

    #[test]
    fn any_non_digit_separator() {
        for literal in [
            "2018-05-03T17:47:53.728",
            "2018-05-03_17:47:53.728",
            "2018-05-03 17:47:53.728",
        ] {
            assert_eq!(
                TimestampNormalizer::to_epoch_millis_in(literal, &Utc).unwrap(),
                1_525_369_673_728,
                "{literal}"
            );
        }
    }

    #[test]
    fn local_time_zone_is_used() {
        let expected = Local
            .with_ymd_and_hms(2019, 1, 1, 0, 0, 0)
            .earliest()
            .unwrap()
            .timestamp_millis();
        assert_eq!(
            TimestampNormalizer::to_epoch_millis("2019-01-01 00:00:00.000").unwrap(),
            expected
        );
    }

    #[test]
    fn leap_day() {
        assert_eq!(
            TimestampNormalizer::to_epoch_millis_in("2020-02-29 12:30:00.000", &Utc).unwrap(),
            1_582_979_400_000
        );
    }

    #[test]
    fn rejects_impossible_dates() {
        for literal in [
            "2018-13-03 17:47:53.728",
            "2018-05-32 17:47:53.728",
            "2019-02-29 00:00:00.000",
            "2018-00-10 00:00:00.000",
        ] {
            let err = TimestampNormalizer::to_epoch_millis_in(literal, &Utc).unwrap_err();
            assert!(matches!(err, JmsqError::MalformedTimestamp { .. }), "{literal}");
        }
    }

    #[test]
    fn rejects_impossible_times() {
        for literal in [
            "2018-05-03 24:00:00.000",
            "2018-05-03 17:60:00.000",
            "2018-05-03 17:47:60.000",
        ] {
            let err = TimestampNormalizer::to_epoch_millis_in(literal, &Utc).unwrap_err();
            assert!(matches!(err, JmsqError::MalformedTimestamp { .. }), "{literal}");
        }
    }

    #[test]
    fn rejects_wrong_shape() {
        for literal in [
            "",
            "2018-5-3 17:47:53.728",
            "2018-05-03 17:47:53",
            "2018-05-03 17:47:53.728 ",
            "2018-05-03017:47:53.728",
        ] {
            assert!(TimestampNormalizer::parse_naive(literal).is_err(), "{literal:?}");
        }
    }

    #[test]
    fn local_string_round_trip() {
        let millis = TimestampNormalizer::to_epoch_millis("2018-05-03 17:47:53.728").unwrap();
        assert_eq!(TimestampNormalizer::to_local_string(millis), "2018-05-03 17:47:53");
    }

    #[test]
    fn local_string_out_of_range() {
        assert_eq!(TimestampNormalizer::to_local_string(i64::MAX), i64::MAX.to_string());
    }
}
