//! Command-line interface for the catfeed client.
//!
//! Each subcommand lives in its own module with a clap `Args` struct and a
//! `cmd` entry point. Commands that talk to the feeder API open a
//! [`Connection`], which bundles the saved configuration, the logged-in
//! session and an authenticated [`FeederApi`].
//!
//! When the server answers an authenticated request with 401, the stored
//! session is discarded and the user is asked to log in again.

pub mod cats;
pub mod feed;
pub mod history;
pub mod init;
pub mod login;
pub mod logout;
pub mod recognize;
pub mod register;
pub mod schedule;
pub mod status;
pub mod train;

use crate::api::{ApiError, FeederApi};
use crate::libs::cat::{self, Cat};
use crate::libs::config::Config;
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::session::AppSession;
use crate::{msg_bail_anyhow, msg_debug};
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Create an account and log in")]
    Register(register::RegisterArgs),
    #[command(about = "Log in to the feeder service")]
    Login(login::LoginArgs),
    #[command(about = "Log out and forget the stored session")]
    Logout,
    #[command(about = "Manage cat profiles")]
    Cats(cats::CatsArgs),
    #[command(about = "Show or add feeding schedules")]
    Schedule(schedule::ScheduleArgs),
    #[command(about = "Dispense food now")]
    Feed(feed::FeedArgs),
    #[command(about = "Show feeding history grouped by day")]
    History(history::HistoryArgs),
    #[command(about = "Next meal for every cat and the container weight")]
    Status(status::StatusArgs),
    #[command(about = "Capture a picture of every cat and retrain recognition")]
    Recognize,
    #[command(about = "Retrain the cat recognition model")]
    Train,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        let storage = DataStorage::new();

        let result = match cli.command {
            Commands::Init(args) => init::cmd(args, &storage),
            Commands::Register(args) => register::cmd(args, &storage).await,
            Commands::Login(args) => login::cmd(args, &storage).await,
            Commands::Logout => logout::cmd(&storage),
            Commands::Cats(args) => cats::cmd(args, &storage).await,
            Commands::Schedule(args) => schedule::cmd(args, &storage).await,
            Commands::Feed(args) => feed::cmd(args, &storage).await,
            Commands::History(args) => history::cmd(args, &storage).await,
            Commands::Status(args) => status::cmd(args, &storage).await,
            Commands::Recognize => recognize::cmd(&storage).await,
            Commands::Train => train::cmd(&storage).await,
        };

        match result {
            Err(e) if matches!(e.downcast_ref::<ApiError>(), Some(ApiError::Unauthorized)) => {
                AppSession::destroy(&storage)?;
                msg_bail_anyhow!(Message::SessionExpired)
            }
            other => other,
        }
    }
}

/// Everything an authenticated command needs.
pub struct Connection {
    pub storage: DataStorage,
    pub config: Config,
    pub session: AppSession,
    pub api: FeederApi,
}

impl Connection {
    pub fn open(storage: &DataStorage) -> Result<Self> {
        let config = Config::read_from(storage)?;
        let session = AppSession::require(storage)?;
        let api = FeederApi::for_session(&config, &session);
        msg_debug!(format!("Using feeder {} at {}", api.device_id(), api.api_url()));

        Ok(Self {
            storage: storage.clone(),
            config,
            session,
            api,
        })
    }

    /// Fetches the cats and picks the one to act on.
    pub async fn resolve_cat(&self, requested: Option<&str>) -> Result<Cat> {
        let cats = self.api.cats().await?;
        let cat = cat::resolve(&cats, requested, self.session.current_cat_id.as_deref())?;
        Ok(cat.clone())
    }

    pub fn save_session(&self) -> Result<()> {
        self.session.save(&self.storage)
    }
}
