use super::cat::Cat;
use super::formatter::{format_weight, UNKNOWN_WEIGHT};
use super::history::FeedingHistoryGroup;
use super::schedule::{MealSummary, ScheduleEntry};
use crate::msg_print;
use anyhow::Result;
use chrono::TimeZone;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn cats(cats: &[Cat], current_cat_id: Option<&str>) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["", "ID", "NAME", "BREED", "WEIGHT (KG)"]);
        for cat in cats {
            let marker = if current_cat_id == Some(cat.id.as_str()) { "*" } else { "" };
            table.add_row(row![
                marker,
                cat.id,
                cat.name,
                cat.breed.as_deref().unwrap_or("-"),
                cat.weight.map(|w| w.to_string()).unwrap_or_else(|| UNKNOWN_WEIGHT.to_string())
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn schedules(entries: &[ScheduleEntry]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "TIME", "AMOUNT (G)"]);
        for entry in entries {
            table.add_row(row![entry.id, entry.time, entry.amount]);
        }
        table.printstd();

        Ok(())
    }

    /// Home screen: one row per cat with its next meal, then the scale.
    pub fn status(meals: &[(String, MealSummary)], weight: Option<f64>) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["CAT", "NEXT MEAL", "AMOUNT (G)"]);
        for (name, summary) in meals {
            let (time, amount) = summary.display_pair();
            table.add_row(row![name, time, amount]);
        }
        table.printstd();

        let mut scale = Table::new();
        scale.add_row(row!["CONTAINER", format_weight(weight)]);
        scale.printstd();

        Ok(())
    }

    pub fn history<Tz: TimeZone>(groups: &[FeedingHistoryGroup<Tz>]) -> Result<()>
    where
        Tz::Offset: std::fmt::Display,
    {
        for group in groups {
            msg_print!(group.heading(), true);

            let mut table = Table::new();
            table.add_row(row!["TIME", "AMOUNT"]);
            for feeding in &group.feedings {
                table.add_row(row![feeding.time, feeding.amount]);
            }
            table.printstd();
        }

        Ok(())
    }
}
