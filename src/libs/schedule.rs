//! Daily feeding schedules and next-meal selection.
//!
//! Every [`ScheduleEntry`] recurs daily. The selector treats an entry whose
//! minute-of-day is at or before the current minute as belonging to tomorrow,
//! so a non-empty schedule always yields a next meal.

use super::time::{MealTime, MINUTES_PER_DAY};
use chrono::{Local, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Placeholders shown when there is no next meal to display.
pub const UNKNOWN_TIME: &str = "--:--";
pub const UNKNOWN_AMOUNT: &str = "---";

const DRAFT_DEFAULT_TIME: u16 = 7 * 60;
const DRAFT_DEFAULT_PORTION: u32 = 150;
const DRAFT_TIME_STEP: u16 = 30;
const DRAFT_EARLIEST: u16 = 6 * 60;
const DRAFT_LATEST: u16 = 23 * 60;
const DRAFT_PORTION_STEP: u32 = 10;
const DRAFT_MIN_PORTION: u32 = 50;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("schedule entry has no id")]
    MissingId,
    #[error(transparent)]
    Time(#[from] super::time::TimeError),
    #[error("portion must be a positive number of grams, got {0}")]
    InvalidAmount(String),
}

/// One recurring daily feeding configured for a cat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub id: String,
    pub time: MealTime,
    pub amount: u32,
    pub device_id: Option<String>,
}

/// The soonest upcoming recurrence of a schedule entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NextMeal {
    pub time: MealTime,
    pub amount: u32,
}

impl From<&ScheduleEntry> for NextMeal {
    fn from(entry: &ScheduleEntry) -> Self {
        Self {
            time: entry.time,
            amount: entry.amount,
        }
    }
}

/// Selects the next meal relative to `now`.
///
/// Entries due at exactly the current minute are deferred to tomorrow. Ties
/// on the adjusted time resolve to the first entry in input order.
pub fn next_meal_at(entries: &[ScheduleEntry], now: NaiveTime) -> Option<NextMeal> {
    let current = (now.hour() * 60 + now.minute()) as u16;

    let mut best: Option<(u16, &ScheduleEntry)> = None;
    for entry in entries {
        let scheduled = entry.time.minutes();
        let adjusted = if scheduled > current { scheduled } else { scheduled + MINUTES_PER_DAY };

        match best {
            Some((closest, _)) if adjusted >= closest => {}
            _ => best = Some((adjusted, entry)),
        }
    }

    best.map(|(_, entry)| NextMeal::from(entry))
}

/// Selects the next meal using the local wall clock.
pub fn next_meal(entries: &[ScheduleEntry]) -> Option<NextMeal> {
    next_meal_at(entries, Local::now().time())
}

/// Per-cat summary rendered on the status screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MealSummary {
    Scheduled(NextMeal),
    NoSchedule,
    Unavailable,
}

impl MealSummary {
    pub fn from_entries(entries: &[ScheduleEntry], now: NaiveTime) -> Self {
        match next_meal_at(entries, now) {
            Some(meal) => MealSummary::Scheduled(meal),
            None => MealSummary::NoSchedule,
        }
    }

    /// Display pair of (time, amount) strings.
    pub fn display_pair(&self) -> (String, String) {
        match self {
            MealSummary::Scheduled(meal) => (meal.time.to_string(), meal.amount.to_string()),
            MealSummary::NoSchedule => ("No schedule".to_string(), UNKNOWN_AMOUNT.to_string()),
            MealSummary::Unavailable => ("Error".to_string(), UNKNOWN_AMOUNT.to_string()),
        }
    }
}

/// Editable schedule being prepared before it is sent to the feeder.
///
/// Stepping is bounded the same way the feeder's schedule editor is: times
/// move in 30 minute steps inside 06:00..=23:00, portions move in 10 g steps
/// and never go under 50 g.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleDraft {
    pub time: MealTime,
    pub portion: u32,
}

impl Default for ScheduleDraft {
    fn default() -> Self {
        Self {
            time: MealTime::from_minutes_unchecked(DRAFT_DEFAULT_TIME),
            portion: DRAFT_DEFAULT_PORTION,
        }
    }
}

impl ScheduleDraft {
    pub fn new(time: MealTime, portion: u32) -> Result<Self, ScheduleError> {
        if portion == 0 {
            return Err(ScheduleError::InvalidAmount(portion.to_string()));
        }
        Ok(Self { time, portion })
    }

    pub fn earlier(&mut self) {
        let minutes = self.time.minutes();
        if minutes > DRAFT_EARLIEST {
            self.shift(i32::from(minutes) - i32::from(DRAFT_TIME_STEP));
        }
    }

    pub fn later(&mut self) {
        let minutes = self.time.minutes();
        if minutes < DRAFT_LATEST {
            self.shift(i32::from(minutes) + i32::from(DRAFT_TIME_STEP));
        }
    }

    pub fn less(&mut self) {
        if self.portion > DRAFT_MIN_PORTION {
            self.portion -= DRAFT_PORTION_STEP;
        }
    }

    pub fn more(&mut self) {
        self.portion += DRAFT_PORTION_STEP;
    }

    fn shift(&mut self, minutes: i32) {
        if let Ok(time) = MealTime::from_minutes(minutes) {
            self.time = time;
        }
    }
}
