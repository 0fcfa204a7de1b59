//! Feeding history grouping and search.
//!
//! The feeder API returns a flat list of dispensing events. For display they
//! are grouped by calendar day in the viewer's time zone, keeping the order
//! in which the API delivered them, both for the groups and for the entries
//! inside each group.
//!
//! Events whose timestamp cannot be parsed are skipped with a warning; the
//! aggregation itself never fails.
//!
//! ## Examples
//!
//! ```rust
//! use catfeed::libs::history::{aggregate_in, FeedingEvent};
//! use chrono::Utc;
//!
//! let events = vec![
//!     FeedingEvent::new("2023-05-20T08:30:00Z", 150.0),
//!     FeedingEvent::new("2023-05-19T09:00:00Z", 150.0),
//! ];
//! let groups = aggregate_in(&events, &Utc);
//! assert_eq!(groups.len(), 2);
//! ```

use chrono::{DateTime, Local, LocalResult, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;

const TIME_OF_DAY_FORMAT: &str = "%I:%M %p";
const HEADING_FORMAT: &str = "%A, %B %-d, %Y";
const KEY_FORMAT: &str = "%Y-%m-%d";
const MINUTE_OFFSET_FORMAT: &str = "%Y-%m-%dT%H:%M%:z";
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    #[error("malformed feeding record: unparsable timestamp '{0}'")]
    MalformedRecord(String),
    #[error("feeding amount must be positive, got {0}")]
    InvalidAmount(String),
}

/// A historical dispensing action as reported by the feeder.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedingEvent {
    pub timestamp: String,
    pub amount: f64,
}

impl FeedingEvent {
    pub fn new(timestamp: &str, amount: f64) -> Self {
        Self {
            timestamp: timestamp.to_string(),
            amount,
        }
    }

    /// Resolves the event's timestamp in the given zone.
    pub fn timestamp_in<Tz: TimeZone>(&self, tz: &Tz) -> Result<DateTime<Tz>, HistoryError> {
        parse_timestamp(&self.timestamp, tz).ok_or_else(|| HistoryError::MalformedRecord(self.timestamp.clone()))
    }
}

/// Display-ready feeding entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedingRecord {
    pub time: String,
    pub amount: String,
}

/// All feedings that happened on one calendar day.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedingHistoryGroup<Tz: TimeZone> {
    pub key: NaiveDate,
    /// Timestamp of the first event seen for this day.
    pub date: DateTime<Tz>,
    pub feedings: Vec<FeedingRecord>,
}

impl<Tz: TimeZone> FeedingHistoryGroup<Tz>
where
    Tz::Offset: std::fmt::Display,
{
    /// Long-form heading such as "Saturday, May 20, 2023".
    pub fn heading(&self) -> String {
        self.date.format(HEADING_FORMAT).to_string()
    }

    pub fn key_string(&self) -> String {
        self.key.format(KEY_FORMAT).to_string()
    }
}

/// Accepts RFC 3339, the same with minute precision, offset-less date-times
/// and bare dates. Bare dates are midnight UTC.
fn parse_timestamp<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(tz));
    }

    let zoned = match raw.strip_suffix('Z') {
        Some(rest) => format!("{}+00:00", rest),
        None => raw.to_string(),
    };
    if let Ok(parsed) = DateTime::parse_from_str(&zoned, MINUTE_OFFSET_FORMAT) {
        return Some(parsed.with_timezone(tz));
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, KEY_FORMAT) {
        return Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?).with_timezone(tz));
    }

    // Offset-less timestamps are wall-clock times in the viewer's zone
    let naive = NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())?;
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Some(dt),
        LocalResult::Ambiguous(earliest, _) => Some(earliest),
        LocalResult::None => None,
    }
}

/// Groups feeding events by calendar date in `tz`.
pub fn aggregate_in<Tz: TimeZone>(events: &[FeedingEvent], tz: &Tz) -> Vec<FeedingHistoryGroup<Tz>>
where
    Tz::Offset: std::fmt::Display,
{
    let mut groups: Vec<FeedingHistoryGroup<Tz>> = Vec::new();
    let mut index: HashMap<NaiveDate, usize> = HashMap::new();

    for event in events {
        let timestamp = match event.timestamp_in(tz) {
            Ok(timestamp) => timestamp,
            Err(e) => {
                tracing::warn!("skipping feeding event: {}", e);
                continue;
            }
        };

        let key = timestamp.date_naive();
        let slot = *index.entry(key).or_insert_with(|| {
            groups.push(FeedingHistoryGroup {
                key,
                date: timestamp.clone(),
                feedings: Vec::new(),
            });
            groups.len() - 1
        });

        groups[slot].feedings.push(FeedingRecord {
            time: timestamp.format(TIME_OF_DAY_FORMAT).to_string(),
            amount: event.amount.to_string(),
        });
    }

    groups
}

/// Groups feeding events by calendar date in the local time zone.
pub fn aggregate(events: &[FeedingEvent]) -> Vec<FeedingHistoryGroup<Local>> {
    aggregate_in(events, &Local)
}

/// Keeps groups whose heading or date key contains `query`, ignoring case.
pub fn filter_groups<Tz: TimeZone>(groups: &[FeedingHistoryGroup<Tz>], query: &str) -> Vec<FeedingHistoryGroup<Tz>>
where
    Tz::Offset: std::fmt::Display,
{
    let query = query.trim().to_lowercase();
    groups
        .iter()
        .filter(|group| query.is_empty() || group.heading().to_lowercase().contains(&query) || group.key_string().contains(&query))
        .cloned()
        .collect()
}
