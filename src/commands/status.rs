use super::Connection;
use crate::{
    api::FeederApi,
    libs::{
        cat::Cat,
        data_storage::DataStorage,
        formatter::format_weight,
        messages::Message,
        schedule::MealSummary,
        view::View,
    },
    msg_info, msg_print, msg_warning,
};
use anyhow::Result;
use chrono::Local;
use clap::Args;
use std::time::Duration;

#[derive(Debug, Args)]
pub struct StatusArgs {
    /// Keep refreshing the container weight until Ctrl-C
    #[arg(short, long)]
    watch: bool,
}

pub async fn cmd(status_args: StatusArgs, storage: &DataStorage) -> Result<()> {
    let conn = Connection::open(storage)?;

    let cats = conn.api.cats().await?;
    let meals = next_meals(&conn.api, &cats).await;
    let weight = read_weight(&conn.api).await;

    msg_print!(Message::StatusHeader, true);
    if cats.is_empty() {
        msg_info!(Message::NoCats);
    }
    View::status(&meals, weight)?;

    if status_args.watch {
        watch(&conn.api, conn.config.feeder().poll_interval).await;
    }
    Ok(())
}

/// Fetches every cat's schedule concurrently; one failing cat shows as
/// unavailable without affecting the others.
async fn next_meals(api: &FeederApi, cats: &[Cat]) -> Vec<(String, MealSummary)> {
    let handles: Vec<_> = cats
        .iter()
        .map(|cat| {
            let api = api.clone();
            let cat_id = cat.id.clone();
            tokio::spawn(async move { api.schedules(&cat_id).await })
        })
        .collect();

    let now = Local::now().time();
    let mut meals = Vec::with_capacity(cats.len());
    for (cat, handle) in cats.iter().zip(handles) {
        let summary = match handle.await {
            Ok(Ok(entries)) => MealSummary::from_entries(&entries, now),
            Ok(Err(e)) => {
                tracing::warn!("failed to load schedule for cat {}: {}", cat.id, e);
                MealSummary::Unavailable
            }
            Err(e) => {
                tracing::warn!("schedule task for cat {} failed: {}", cat.id, e);
                MealSummary::Unavailable
            }
        };
        meals.push((cat.name.clone(), summary));
    }
    meals
}

async fn read_weight(api: &FeederApi) -> Option<f64> {
    match api.container_weight().await {
        Ok(weight) => weight,
        Err(e) => {
            msg_warning!(Message::WeightFetchFailed(e.to_string()));
            None
        }
    }
}

async fn watch(api: &FeederApi, poll_interval: u64) {
    let poll_interval = poll_interval.max(1);
    msg_info!(Message::WatchingWeight(poll_interval));

    let mut ticker = tokio::time::interval(Duration::from_secs(poll_interval));
    // The first tick fires immediately; the table above already shows it.
    ticker.tick().await;

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                match api.container_weight().await {
                    Ok(weight) => msg_print!(Message::ContainerWeight(format_weight(weight))),
                    Err(e) => msg_warning!(Message::WeightFetchFailed(e.to_string())),
                }
            }
            _ = &mut ctrl_c => {
                msg_info!(Message::WatchStopped);
                break;
            }
        }
    }
}
