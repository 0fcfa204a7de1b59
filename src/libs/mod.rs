//! Core library modules for the catfeed client.
//!
//! The pure feeding logic (`time`, `schedule`, `history`, `cat`) has no I/O
//! and is what the tests exercise most. The rest is CLI plumbing: persisted
//! configuration and session, terminal output and message text.
//!
//! ```rust
//! use catfeed::libs::schedule::{next_meal_at, ScheduleEntry};
//! use chrono::NaiveTime;
//!
//! let entries = vec![ScheduleEntry {
//!     id: "1".to_string(),
//!     time: "06:00".parse().unwrap(),
//!     amount: 100,
//!     device_id: None,
//! }];
//! let now = NaiveTime::from_hms_opt(23, 50, 0).unwrap();
//! assert_eq!(next_meal_at(&entries, now).unwrap().time.to_string(), "06:00");
//! ```

pub mod cat;
pub mod config;
pub mod data_storage;
pub mod formatter;
pub mod history;
pub mod messages;
pub mod schedule;
pub mod secret;
pub mod session;
pub mod time;
pub mod view;
