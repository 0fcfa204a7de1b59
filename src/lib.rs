//! # catfeed
//!
//! Command-line client for a networked smart cat feeder: cat profiles,
//! daily feeding schedules with next-meal prediction, feed-now, feeding
//! history grouped by day and camera-based cat recognition.
//!
//! ```rust,no_run
//! use catfeed::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
