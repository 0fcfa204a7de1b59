use crate::{
    libs::{data_storage::DataStorage, messages::Message, session::AppSession},
    msg_info, msg_success,
};
use anyhow::Result;

pub fn cmd(storage: &DataStorage) -> Result<()> {
    if AppSession::destroy(storage)? {
        msg_success!(Message::LoggedOut);
    } else {
        msg_info!(Message::NoActiveSession);
    }
    Ok(())
}
