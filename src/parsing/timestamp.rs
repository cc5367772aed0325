//! Timestamp normalization.
//!
//! Export headers carry the time as a `D/M/YYYY` date, an `H:MM` clock
//! reading and an `am`/`pm` marker. [`normalize_timestamp`] turns that triple
//! into a [`Timestamp`]: either a local date-time rendered as ISO-8601, or a
//! fallback that keeps the raw inputs when the values don't form a real
//! calendar date-time.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::boundary::decimal_digit;
use crate::error::ChatfoldError;

/// Prefix of the fallback string used for timestamps that failed to parse.
pub const INVALID_TIMESTAMP_PREFIX: &str = "Invalid timestamp: ";

/// ISO-8601 local date-time at second precision, no offset.
const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// The timestamp of a message record.
///
/// Serializes as a string: `2023-02-01T10:15:00` for [`Timestamp::Local`] and
/// `Invalid timestamp: 31/02/2023 10:15 am` for [`Timestamp::Invalid`].
///
/// # Example
///
/// ```rust
/// use chatfold::parsing::normalize_timestamp;
///
/// let ts = normalize_timestamp("01/02/2023", "10:15", "pm");
/// assert_eq!(ts.to_string(), "2023-02-01T22:15:00");
///
/// let bad = normalize_timestamp("01/02/2023", "13:15", "pm");
/// assert_eq!(bad.to_string(), "Invalid timestamp: 01/02/2023 13:15 pm");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Timestamp {
    /// A valid local date-time (no timezone).
    Local(NaiveDateTime),

    /// The raw header values, kept verbatim because they didn't form a valid
    /// date-time.
    Invalid {
        date: String,
        time: String,
        period: String,
    },
}

impl Timestamp {
    /// Returns the parsed date-time, if valid.
    pub fn as_datetime(&self) -> Option<&NaiveDateTime> {
        match self {
            Timestamp::Local(dt) => Some(dt),
            Timestamp::Invalid { .. } => None,
        }
    }

    /// Returns the calendar day, if valid.
    pub fn date(&self) -> Option<NaiveDate> {
        self.as_datetime().map(NaiveDateTime::date)
    }

    /// Returns `true` for [`Timestamp::Local`].
    pub fn is_valid(&self) -> bool {
        matches!(self, Timestamp::Local(_))
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(dt: NaiveDateTime) -> Self {
        Timestamp::Local(dt)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Timestamp::Local(dt) => write!(f, "{}", dt.format(ISO_FORMAT)),
            Timestamp::Invalid { date, time, period } => {
                write!(f, "{INVALID_TIMESTAMP_PREFIX}{date} {time} {period}")
            }
        }
    }
}

impl FromStr for Timestamp {
    type Err = ChatfoldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(raw) = s.strip_prefix(INVALID_TIMESTAMP_PREFIX) {
            let mut parts = raw.splitn(3, ' ');
            return match (parts.next(), parts.next(), parts.next()) {
                (Some(date), Some(time), Some(period)) => Ok(Timestamp::Invalid {
                    date: date.to_string(),
                    time: time.to_string(),
                    period: period.to_string(),
                }),
                _ => Err(ChatfoldError::invalid_timestamp(s)),
            };
        }

        NaiveDateTime::parse_from_str(s, ISO_FORMAT)
            .map(Timestamp::Local)
            .map_err(|_| ChatfoldError::invalid_timestamp(s))
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Converts a `D/M/YYYY`, `H:MM`, `am|pm` triple into a [`Timestamp`].
///
/// `pm` adds 12 hours unless the hour is 12, `am` maps hour 12 to 0, and any
/// other period leaves the hour as written. Values that don't make a real
/// date-time (day 31 in February, `13:15 pm`, non-numeric parts) produce
/// [`Timestamp::Invalid`] holding the three inputs verbatim. This never fails.
pub fn normalize_timestamp(date: &str, time: &str, period: &str) -> Timestamp {
    if let Some(dt) = to_datetime(date, time, period) {
        return Timestamp::Local(dt);
    }

    tracing::warn!(date, time, period, "timestamp is not a valid date-time, keeping raw values");
    Timestamp::Invalid {
        date: date.to_string(),
        time: time.to_string(),
        period: period.to_string(),
    }
}

fn to_datetime(date: &str, time: &str, period: &str) -> Option<NaiveDateTime> {
    let mut fields = date.split('/');
    let day = decimal(fields.next()?)?;
    let month = decimal(fields.next()?)?;
    let year = i32::try_from(decimal(fields.next()?)?).ok()?;
    if fields.next().is_some() || !(1..=9999).contains(&year) {
        return None;
    }

    let (hour, minute) = time.split_once(':')?;
    let mut hour = decimal(hour)?;
    let minute = decimal(minute)?;

    if period.eq_ignore_ascii_case("pm") && hour != 12 {
        hour = hour.checked_add(12)?;
    } else if period.eq_ignore_ascii_case("am") && hour == 12 {
        hour = 0;
    }

    NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, 0)
}

/// Digits of any script, nothing else.
fn decimal(field: &str) -> Option<u32> {
    if field.is_empty() {
        return None;
    }
    field.chars().try_fold(0u32, |acc, c| {
        acc.checked_mul(10)?.checked_add(decimal_digit(c)?)
    })
}
