use crate::{
    libs::{config::Config, data_storage::DataStorage, messages::Message},
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write the default configuration without prompting
    #[arg(short, long)]
    reset: bool,
}

pub fn cmd(init_args: InitArgs, storage: &DataStorage) -> Result<()> {
    let config = if init_args.reset { Config::default() } else { Config::init(storage)? };
    config.save_to(storage)?;

    msg_success!(Message::ConfigSaved);
    Ok(())
}
