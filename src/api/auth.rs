use super::{ApiError, FeederApi, MAX_RETRY_COUNT};
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::session::AppSession;
use crate::{msg_error, msg_error_anyhow};
use anyhow::Result;
use serde::{Deserialize, Serialize};

const REGISTER_URL: &str = "auth/register";
const LOGIN_URL: &str = "auth/login";

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    /// Builds credentials from user input; both fields are trimmed and required.
    pub fn new(email: &str, password: &str) -> Result<Self> {
        let (email, password) = (email.trim(), password.trim());
        if email.is_empty() || password.is_empty() {
            return Err(msg_error_anyhow!(Message::EmptyCredentials));
        }
        Ok(Self {
            email: email.to_string(),
            password: password.to_string(),
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

#[derive(Deserialize, Debug)]
struct AuthResponse {
    access_token: Option<String>,
}

/// Pulls the access token out of a register/login response body.
pub fn parse_access_token(body: &str) -> Result<String, ApiError> {
    let response: AuthResponse = serde_json::from_str(body).map_err(|e| ApiError::InvalidResponse(e.to_string()))?;
    response
        .access_token
        .filter(|token| !token.trim().is_empty())
        .ok_or_else(|| ApiError::InvalidResponse("No access token received".to_string()))
}

impl FeederApi {
    pub async fn register(&self, credentials: &Credentials) -> Result<String> {
        let res = self.send_public(self.client.post(self.url(REGISTER_URL)).json(credentials)).await?;
        Ok(parse_access_token(&res.text().await?)?)
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<String> {
        let res = self.send_public(self.client.post(self.url(LOGIN_URL)).json(credentials)).await?;
        Ok(parse_access_token(&res.text().await?)?)
    }
}

/// Interactive login with a bounded number of password attempts.
///
/// Implementors provide the authentication call and the password prompt;
/// [`Session::establish`] drives the retry loop and persists the resulting
/// [`AppSession`].
#[allow(async_fn_in_trait)]
pub trait Session {
    /// Exchanges credentials for an access token.
    async fn authenticate(&self, credentials: &Credentials) -> Result<String>;

    /// Asks the user for the password of `email`.
    fn prompt_password(&self, email: &str) -> Result<String>;

    fn retry(&self) -> i32;

    fn inc_retry(&mut self);

    /// Logs in, retrying on rejected credentials, and stores the new session.
    ///
    /// Only credential rejections are retried; transport failures and
    /// malformed responses are returned immediately.
    async fn establish(&mut self, storage: &DataStorage, email: &str) -> Result<AppSession> {
        loop {
            let password = self.prompt_password(email)?;
            let credentials = Credentials::new(email, &password)?;

            match self.authenticate(&credentials).await {
                Ok(token) => return AppSession::create(storage, credentials.email(), &token),
                Err(e) => {
                    if !matches!(e.downcast_ref::<ApiError>(), Some(ApiError::Status { .. })) {
                        return Err(e);
                    }
                    msg_error!(Message::LoginFailed(e.to_string()));
                    if self.retry() + 1 < MAX_RETRY_COUNT {
                        self.inc_retry();
                        continue;
                    }
                    break Err(msg_error_anyhow!(Message::WrongPassword(MAX_RETRY_COUNT)));
                }
            }
        }
    }
}
