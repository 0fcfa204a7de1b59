//! Logged-in user context.
//!
//! An [`AppSession`] is created when the user logs in or registers and is
//! destroyed at logout. Commands receive it explicitly; nothing about the
//! current user or current cat lives in global state. Between CLI runs the
//! session is persisted encrypted through [`Secret`].

use super::data_storage::DataStorage;
use super::secret::Secret;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const SESSION_FILE: &str = ".session";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("You are not logged in. Run `catfeed login` first")]
    NotLoggedIn,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSession {
    pub email: String,
    pub token: String,
    #[serde(default)]
    pub current_cat_id: Option<String>,
    #[serde(default)]
    pub current_pet: Option<String>,
}

impl AppSession {
    fn secret(storage: &DataStorage) -> Result<Secret> {
        Ok(Secret::new(storage.get_path(SESSION_FILE)?))
    }

    /// Starts a new session for `email`, replacing any previous one.
    pub fn create(storage: &DataStorage, email: &str, token: &str) -> Result<Self> {
        let session = Self {
            email: email.to_string(),
            token: token.to_string(),
            current_cat_id: None,
            current_pet: None,
        };
        session.save(storage)?;
        Ok(session)
    }

    pub fn load(storage: &DataStorage) -> Result<Option<Self>> {
        let secret = Self::secret(storage)?;
        if !secret.exists() {
            return Ok(None);
        }
        match secret.load().and_then(|json| Ok(serde_json::from_str::<Self>(&json)?)) {
            Ok(session) => Ok(Some(session)),
            Err(e) => {
                // Unreadable sessions (e.g. keys changed between builds) count as logged out
                tracing::warn!("discarding unreadable session: {}", e);
                secret.remove()?;
                Ok(None)
            }
        }
    }

    pub fn require(storage: &DataStorage) -> Result<Self> {
        Self::load(storage)?.ok_or_else(|| SessionError::NotLoggedIn.into())
    }

    pub fn save(&self, storage: &DataStorage) -> Result<()> {
        Self::secret(storage)?.store(&serde_json::to_string(self)?)
    }

    pub fn select_cat(&mut self, cat_id: &str, name: &str) {
        self.current_cat_id = Some(cat_id.to_string());
        self.current_pet = Some(name.to_string());
    }

    pub fn clear_cat(&mut self) {
        self.current_cat_id = None;
        self.current_pet = None;
    }

    /// Ends the session. Returns whether one existed.
    pub fn destroy(storage: &DataStorage) -> Result<bool> {
        let secret = Self::secret(storage)?;
        let existed = secret.exists();
        secret.remove()?;
        Ok(existed)
    }
}
