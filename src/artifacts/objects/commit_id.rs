//! Chronological commit identifiers
//!
//! A commit id is the local time of the commit with microsecond resolution,
//! written as `YYYYMMDDHHMMSS.ffffff`. The fixed width makes lexicographic
//! order equal to chronological order, so listing history is a plain sort.
//!
//! The first 14 digits are the "seconds" component; the same 14-digit layout
//! is used for index scan times and commit record dates.

use crate::errors::LgitError;
use chrono::{NaiveDate, NaiveDateTime, TimeDelta, Timelike};

/// Width of the `YYYYMMDDHHMMSS` component
pub const SECONDS_WIDTH: usize = 14;

/// Width of a full commit id including the `.ffffff` suffix
pub const COMMIT_ID_WIDTH: usize = SECONDS_WIDTH + 7;

/// Format used when rendering a decoded timestamp in the log
pub const LOG_DATE_FORMAT: &str = "%a %b %d %H:%M:%S %Y";

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommitId(String);

impl CommitId {
    pub fn from_datetime(datetime: NaiveDateTime) -> Self {
        let micros = datetime.nanosecond().min(999_999_999) / 1_000;
        Self(format!("{}.{:06}", format_seconds(&datetime), micros))
    }

    /// Allocate an id for a commit happening at `now`
    ///
    /// The result is strictly greater than `newest`: when the clock did not
    /// move past the newest existing id, the id is bumped by one microsecond.
    pub fn allocate(now: NaiveDateTime, newest: Option<&CommitId>) -> Self {
        let candidate = Self::from_datetime(now);

        match newest {
            Some(newest) if newest >= &candidate => {
                Self::from_datetime(newest.to_datetime() + TimeDelta::microseconds(1))
            }
            _ => candidate,
        }
    }

    pub fn try_parse(id: &str) -> Result<Self, LgitError> {
        let invalid = |reason: &str| LgitError::CorruptRecord {
            name: id.to_string(),
            reason: reason.to_string(),
        };

        if id.len() != COMMIT_ID_WIDTH {
            return Err(invalid("unexpected commit id width"));
        }

        let (seconds, fraction) = id.split_at(SECONDS_WIDTH);
        let micros = fraction
            .strip_prefix('.')
            .filter(|micros| micros.chars().all(|c| c.is_ascii_digit()))
            .ok_or_else(|| invalid("malformed sub-second component"))?;
        decode_seconds(seconds)?;
        micros
            .parse::<u32>()
            .map_err(|_| invalid("malformed sub-second component"))?;

        Ok(Self(id.to_string()))
    }

    /// The `YYYYMMDDHHMMSS` component
    pub fn seconds(&self) -> &str {
        &self.0[..SECONDS_WIDTH]
    }

    pub fn to_datetime(&self) -> NaiveDateTime {
        let (seconds, fraction) = self.0.split_at(SECONDS_WIDTH);
        let micros = fraction[1..].parse::<u32>().unwrap_or_default();

        // the id was validated on construction
        decode_seconds(seconds)
            .ok()
            .and_then(|datetime| datetime.with_nanosecond(micros * 1_000))
            .unwrap_or_default()
    }
}

impl AsRef<str> for CommitId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CommitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub fn format_seconds(datetime: &NaiveDateTime) -> String {
    datetime.format("%Y%m%d%H%M%S").to_string()
}

/// Decode a fixed-width `YYYYMMDDHHMMSS` string into a calendar time
pub fn decode_seconds(seconds: &str) -> Result<NaiveDateTime, LgitError> {
    let invalid = || LgitError::CorruptRecord {
        name: seconds.to_string(),
        reason: "expected a 14-digit YYYYMMDDHHMMSS timestamp".to_string(),
    };

    if seconds.len() != SECONDS_WIDTH || !seconds.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }

    let field = |range: std::ops::Range<usize>| seconds[range].parse::<u32>().map_err(|_| invalid());
    let year = seconds[0..4].parse::<i32>().map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(year, field(4..6)?, field(6..8)?)
        .and_then(|date| date.and_hms_opt(field(8..10).ok()?, field(10..12).ok()?, field(12..14).ok()?))
        .ok_or_else(invalid)
}
