//! Configuration management for the catfeed client.
//!
//! The configuration tells the client where the feeder API lives and which
//! feeder device it controls, plus a handful of timing defaults used by the
//! interactive flows. It is stored as pretty-printed JSON in the
//! platform-specific data directory:
//!
//! - **Windows**: `%LOCALAPPDATA%\catfeed\catfeed\config.json`
//! - **macOS**: `~/Library/Application Support/catfeed/catfeed/config.json`
//! - **Linux**: `~/.local/share/catfeed/catfeed/config.json`
//!
//! Credentials are never written here; the access token lives in the
//! encrypted session file.
//!
//! ## Environment Overrides
//!
//! `CATFEED_API_URL` (also read from a `.env` file) takes precedence over the
//! configured API URL, which is handy when pointing the client at a local
//! development server.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use catfeed::libs::config::Config;
//! use catfeed::libs::data_storage::DataStorage;
//!
//! let config = Config::read_from(&DataStorage::new())?;
//! println!("API: {}", config.api_url());
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const API_URL_ENV: &str = "CATFEED_API_URL";

pub const DEFAULT_API_URL: &str = "http://localhost:3333";
pub const DEFAULT_DEVICE_ID: &str = "bc:f6:c1:98:4a:3a";

/// Represents a configurable module offered by the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Feeder API server settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ServerConfig {
    /// Base URL of the feeder API, without a trailing slash.
    pub api_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

/// Device and timing settings for the feeder itself.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FeederConfig {
    /// Hardware id (MAC address) of the feeder the commands target.
    pub device_id: String,

    /// Grams dispensed by `feed` when no amount is given.
    pub feed_amount: u32,

    /// Seconds between container weight refreshes in `status --watch`.
    pub poll_interval: u64,

    /// Seconds the cat is given to get in front of the camera before capture.
    pub capture_countdown: u64,

    /// Seconds to wait for the feeder to process a captured image.
    pub processing_wait: u64,
}

impl Default for FeederConfig {
    fn default() -> Self {
        Self {
            device_id: DEFAULT_DEVICE_ID.to_string(),
            feed_amount: 100,
            poll_interval: 30,
            capture_countdown: 5,
            processing_wait: 10,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub feeder: Option<FeederConfig>,
}

impl Config {
    pub fn read_from(storage: &DataStorage) -> Result<Config> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save_to(&self, storage: &DataStorage) -> Result<()> {
        let config_file = File::create(storage.get_path(CONFIG_FILE_NAME)?)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Effective API base URL: environment override, then config, then default.
    pub fn api_url(&self) -> String {
        let url = env::var(API_URL_ENV)
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| self.server.clone().unwrap_or_default().api_url);
        url.trim().trim_end_matches('/').to_string()
    }

    pub fn feeder(&self) -> FeederConfig {
        self.feeder.clone().unwrap_or_default()
    }

    /// Runs the interactive setup wizard, starting from the saved values.
    pub fn init(storage: &DataStorage) -> Result<Self> {
        let mut config = Self::read_from(storage).unwrap_or_default();

        let modules = vec![
            ConfigModule {
                key: "server".to_string(),
                name: "Server".to_string(),
            },
            ConfigModule {
                key: "feeder".to_string(),
                name: "Feeder".to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "server" => {
                    let default = config.server.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleServer);
                    config.server = Some(ServerConfig {
                        api_url: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptServerApiUrl.to_string())
                            .default(default.api_url)
                            .interact_text()?,
                    });
                }
                "feeder" => {
                    let default = config.feeder();
                    msg_print!(Message::ConfigModuleFeeder);
                    config.feeder = Some(FeederConfig {
                        device_id: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptDeviceId.to_string())
                            .default(default.device_id)
                            .interact_text()?,
                        feed_amount: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptFeedAmount.to_string())
                            .default(default.feed_amount)
                            .interact_text()?,
                        poll_interval: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptPollInterval.to_string())
                            .default(default.poll_interval)
                            .interact_text()?,
                        capture_countdown: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptCaptureCountdown.to_string())
                            .default(default.capture_countdown)
                            .interact_text()?,
                        processing_wait: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptProcessingWait.to_string())
                            .default(default.processing_wait)
                            .interact_text()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
