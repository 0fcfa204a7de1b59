use super::Connection;
use crate::{
    libs::{data_storage::DataStorage, messages::Message},
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct FeedArgs {
    #[arg(short, long)]
    cat: Option<String>,
    /// Portion in grams; defaults to the configured feed amount
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    amount: Option<u32>,
}

pub async fn cmd(feed_args: FeedArgs, storage: &DataStorage) -> Result<()> {
    let conn = Connection::open(storage)?;
    let cat = conn.resolve_cat(feed_args.cat.as_deref()).await?;
    let amount = feed_args.amount.unwrap_or(conn.config.feeder().feed_amount);

    msg_info!(Message::Dispensing {
        name: cat.name.clone(),
        amount,
    });
    conn.api.feed_now(&cat.id, amount).await?;

    msg_success!(Message::FoodDispensed(cat.name));
    Ok(())
}
