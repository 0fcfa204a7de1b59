use super::login::email_or_prompt;
use crate::{
    api::{Credentials, FeederApi},
    libs::{config::Config, data_storage::DataStorage, messages::Message, session::AppSession},
    msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Password};

#[derive(Debug, Args)]
pub struct RegisterArgs {
    #[arg(short, long)]
    email: Option<String>,
}

pub async fn cmd(register_args: RegisterArgs, storage: &DataStorage) -> Result<()> {
    let config = Config::read_from(storage)?;
    let email = email_or_prompt(register_args.email)?;
    let password = Password::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptPassword.to_string())
        .with_confirmation(Message::PromptPasswordConfirm.to_string(), Message::PasswordMismatch.to_string())
        .interact()?;

    let credentials = Credentials::new(&email, &password)?;
    let token = FeederApi::new(&config).register(&credentials).await?;
    let session = AppSession::create(storage, credentials.email(), &token)?;

    msg_success!(Message::Registered(session.email));
    Ok(())
}
