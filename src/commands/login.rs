use crate::{
    api::{Credentials, FeederApi, Session},
    libs::{config::Config, data_storage::DataStorage, messages::Message},
    msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Password};

#[derive(Debug, Args)]
pub struct LoginArgs {
    #[arg(short, long)]
    email: Option<String>,
}

/// Password login against the feeder API, prompting in the terminal.
struct LoginFlow {
    api: FeederApi,
    retries: i32,
}

impl LoginFlow {
    fn new(api: FeederApi) -> Self {
        Self { api, retries: 0 }
    }
}

impl Session for LoginFlow {
    async fn authenticate(&self, credentials: &Credentials) -> Result<String> {
        self.api.login(credentials).await
    }

    fn prompt_password(&self, email: &str) -> Result<String> {
        Ok(Password::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("{} for {}", Message::PromptPassword, email))
            .interact()?)
    }

    fn retry(&self) -> i32 {
        self.retries
    }

    fn inc_retry(&mut self) {
        self.retries += 1;
    }
}

/// Uses the `--email` flag when given, otherwise asks for it.
pub(crate) fn email_or_prompt(email: Option<String>) -> Result<String> {
    match email {
        Some(email) => Ok(email),
        None => Ok(Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptEmail.to_string())
            .interact_text()?),
    }
}

pub async fn cmd(login_args: LoginArgs, storage: &DataStorage) -> Result<()> {
    let config = Config::read_from(storage)?;
    let email = email_or_prompt(login_args.email)?;

    let session = LoginFlow::new(FeederApi::new(&config)).establish(storage, &email).await?;

    msg_success!(Message::LoggedIn(session.email));
    Ok(())
}
