use super::Connection;
use crate::{
    libs::{
        data_storage::DataStorage,
        history::{aggregate, filter_groups},
        messages::Message,
        view::View,
    },
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct HistoryArgs {
    #[arg(short, long)]
    cat: Option<String>,
    /// Only show days whose date matches, e.g. "may 20" or "2023-05"
    #[arg(short, long)]
    search: Option<String>,
}

pub async fn cmd(history_args: HistoryArgs, storage: &DataStorage) -> Result<()> {
    let conn = Connection::open(storage)?;
    let cat = conn.resolve_cat(history_args.cat.as_deref()).await?;

    let events = conn.api.feeding_history(&cat.id).await?;
    let mut groups = aggregate(&events);
    if groups.is_empty() {
        msg_info!(Message::NoHistory);
        return Ok(());
    }

    if let Some(query) = history_args.search.as_deref().filter(|q| !q.trim().is_empty()) {
        groups = filter_groups(&groups, query);
        if groups.is_empty() {
            msg_info!(Message::NoHistoryMatches(query.to_string()));
            return Ok(());
        }
    }

    msg_print!(Message::HistoryHeader(cat.name));
    View::history(&groups)
}
