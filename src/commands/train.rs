use super::Connection;
use crate::{
    api::FeederApi,
    libs::{data_storage::DataStorage, messages::Message},
    msg_info, msg_success,
};
use anyhow::Result;

pub async fn cmd(storage: &DataStorage) -> Result<()> {
    let conn = Connection::open(storage)?;
    run(&conn.api).await
}

pub(crate) async fn run(api: &FeederApi) -> Result<()> {
    msg_info!(Message::TrainingStarted);
    api.train_model().await?;
    msg_success!(Message::TrainingCompleted);
    Ok(())
}
