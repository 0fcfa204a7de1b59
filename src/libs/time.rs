//! Minute-of-day arithmetic for feeding times.
//!
//! Feeding schedules are exchanged with the feeder API as `"HH:MM"` strings in
//! 24-hour format. Internally every comparison happens on integer minutes since
//! midnight, so this module provides the two conversions plus [`MealTime`], a
//! validated wrapper used by the rest of the crate.
//!
//! ## Examples
//!
//! ```rust
//! use catfeed::libs::time::{to_minutes, to_time_string};
//!
//! assert_eq!(to_minutes("07:30").unwrap(), 450);
//! assert_eq!(to_time_string(450).unwrap(), "07:30");
//! assert!(to_minutes("24:00").is_err());
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of minutes in one day.
pub const MINUTES_PER_DAY: u16 = 1440;

/// Largest valid minute-of-day value (23:59).
pub const LAST_MINUTE: u16 = MINUTES_PER_DAY - 1;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeError {
    #[error("invalid time '{0}', expected HH:MM between 00:00 and 23:59")]
    InvalidFormat(String),
    #[error("{0} is outside a day (0..=1439 minutes)")]
    OutOfRange(i32),
}

/// Converts a strict `"HH:MM"` string into minutes since midnight.
///
/// Exactly two digits are required on each side of the colon. Hours must be
/// in `0..=23` and minutes in `0..=59`.
pub fn to_minutes(time: &str) -> Result<u16, TimeError> {
    let invalid = || TimeError::InvalidFormat(time.to_string());

    let bytes = time.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return Err(invalid());
    }
    if ![0, 1, 3, 4].iter().all(|&i| bytes[i].is_ascii_digit()) {
        return Err(invalid());
    }

    let digit = |i: usize| u16::from(bytes[i] - b'0');
    let hours = digit(0) * 10 + digit(1);
    let minutes = digit(3) * 10 + digit(4);

    if hours > 23 || minutes > 59 {
        return Err(invalid());
    }
    Ok(hours * 60 + minutes)
}

/// Formats minutes since midnight as a zero-padded `"HH:MM"` string.
///
/// Does not wrap: callers normalise into a single day first.
pub fn to_time_string(minutes: i32) -> Result<String, TimeError> {
    if !(0..=i32::from(LAST_MINUTE)).contains(&minutes) {
        return Err(TimeError::OutOfRange(minutes));
    }
    Ok(format!("{:02}:{:02}", minutes / 60, minutes % 60))
}

/// A validated time of day with minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MealTime(u16);

impl MealTime {
    pub fn from_minutes(minutes: i32) -> Result<Self, TimeError> {
        if !(0..=i32::from(LAST_MINUTE)).contains(&minutes) {
            return Err(TimeError::OutOfRange(minutes));
        }
        Ok(Self(minutes as u16))
    }

    /// Builds a time from a minute count the caller already knows is in range.
    pub(crate) const fn from_minutes_unchecked(minutes: u16) -> Self {
        Self(minutes)
    }

    pub fn minutes(&self) -> u16 {
        self.0
    }
}

impl FromStr for MealTime {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        to_minutes(s).map(Self)
    }
}

impl fmt::Display for MealTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = to_time_string(i32::from(self.0)).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

impl Serialize for MealTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MealTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
