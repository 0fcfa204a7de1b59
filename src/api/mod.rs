//! Client for the smart feeder HTTP API.
//!
//! All persistent state (accounts, cats, schedules, feeding history) and all
//! device control (dispensing, scale readings, camera capture, model training)
//! live behind this API. [`FeederApi`] wraps the endpoints and converts the
//! untyped JSON responses into validated domain types before they reach the
//! rest of the crate.
//!
//! ## Features
//!
//! - **Auth**: registration and login returning a bearer token
//! - **Cats**: profile CRUD and picture upload
//! - **Feeder**: schedules, feed-now, container weight, feeding history
//! - **Recognition**: image capture per cat and model training
//! - **Boundary validation**: list items that fail validation are logged and
//!   skipped instead of failing the whole response
//!
//! ## Usage
//!
//! ```rust,no_run
//! use catfeed::api::FeederApi;
//! use catfeed::libs::config::Config;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let api = FeederApi::new(&Config::default()).with_token("token");
//! let cats = api.cats().await?;
//! # Ok(())
//! # }
//! ```

use crate::libs::config::Config;
use crate::libs::session::AppSession;
use anyhow::Result;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::fmt::Display;
use thiserror::Error;

pub mod auth;
pub mod cats;
pub mod feeder;
pub mod recognition;

pub use auth::{Credentials, Session};

/// Maximum number of login attempts before giving up.
pub const MAX_RETRY_COUNT: i32 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("You are not logged in. Run `catfeed login` first")]
    NotLoggedIn,
    #[error("Your session has expired, please log in again")]
    Unauthorized,
    #[error("{message} (HTTP {status})")]
    Status { status: u16, message: String },
    #[error("{0}")]
    Rejected(String),
    #[error("unexpected response from the feeder API: {0}")]
    InvalidResponse(String),
}

/// Identifier as sent by the API, which uses both numbers and strings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Number(i64),
    Text(String),
}

impl RawId {
    pub fn into_id(self) -> Option<String> {
        match self {
            RawId::Number(n) => Some(n.to_string()),
            RawId::Text(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
            RawId::Text(_) => None,
        }
    }
}

/// `{ success, message }` envelope returned by device actions.
#[derive(Debug, Deserialize)]
pub struct ActionResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl ActionResponse {
    pub fn into_result(self, default_message: &str) -> Result<(), ApiError> {
        if self.success {
            return Ok(());
        }
        Err(ApiError::Rejected(self.message.filter(|m| !m.trim().is_empty()).unwrap_or_else(|| default_message.to_string())))
    }
}

/// Reads a number that may arrive as a JSON number or a numeric string.
pub fn number_from(value: &Value) -> Option<f64> {
    let number: Option<f64> = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    number.filter(|n| n.is_finite())
}

/// Extracts a human message from an error body.
///
/// Accepts `{"message": "..."}` as well as `{"message": ["...", "..."]}`.
pub fn error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("message")? {
        Value::String(message) if !message.trim().is_empty() => Some(message.clone()),
        Value::Array(items) => {
            let parts: Vec<&str> = items.iter().filter_map(|item| item.as_str()).collect();
            (!parts.is_empty()).then(|| parts.join(", "))
        }
        _ => None,
    }
}

/// Converts raw JSON items into domain values, skipping the invalid ones.
pub fn parse_list<Raw, T>(items: Vec<Value>, what: &str) -> Vec<T>
where
    Raw: DeserializeOwned,
    T: TryFrom<Raw>,
    T::Error: Display,
{
    items
        .into_iter()
        .enumerate()
        .filter_map(|(i, item)| {
            let raw = match serde_json::from_value::<Raw>(item) {
                Ok(raw) => raw,
                Err(e) => {
                    tracing::warn!("skipping {} #{}: {}", what, i, e);
                    return None;
                }
            };
            match T::try_from(raw) {
                Ok(value) => Some(value),
                Err(e) => {
                    tracing::warn!("skipping {} #{}: {}", what, i, e);
                    None
                }
            }
        })
        .collect()
}

#[derive(Debug, Clone)]
pub struct FeederApi {
    client: Client,
    api_url: String,
    device_id: String,
    token: Option<String>,
}

impl FeederApi {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            api_url: config.api_url(),
            device_id: config.feeder().device_id,
            token: None,
        }
    }

    pub fn with_token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }

    pub fn for_session(config: &Config, session: &AppSession) -> Self {
        Self::new(config).with_token(&session.token)
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path)
    }

    fn device_url(&self, path: &str) -> String {
        format!("{}/pet-feeder/{}/{}", self.api_url, self.device_id, path)
    }

    fn authorized(&self, builder: RequestBuilder) -> Result<RequestBuilder, ApiError> {
        let token = self.token.as_deref().ok_or(ApiError::NotLoggedIn)?;
        Ok(builder.bearer_auth(token))
    }

    /// Sends an authenticated request; a 401 means the session is no longer valid.
    async fn send(&self, builder: RequestBuilder) -> Result<Response> {
        let res = self.authorized(builder)?.send().await?;
        check(res, true).await
    }

    async fn send_public(&self, builder: RequestBuilder) -> Result<Response> {
        let res = builder.send().await?;
        check(res, false).await
    }
}

async fn check(res: Response, authenticated: bool) -> Result<Response> {
    let status = res.status();
    tracing::debug!("{} {}", status.as_u16(), res.url());
    if status.is_success() {
        return Ok(res);
    }
    if authenticated && status == StatusCode::UNAUTHORIZED {
        return Err(ApiError::Unauthorized.into());
    }

    let body = res.text().await.unwrap_or_default();
    let message = error_message(&body).unwrap_or_else(|| status.canonical_reason().unwrap_or("Request failed").to_string());
    Err(ApiError::Status {
        status: status.as_u16(),
        message,
    }
    .into())
}
