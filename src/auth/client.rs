//! HTTP client for a GoTrue-compatible identity provider
//!
//! Talks to the `/auth/v1` REST endpoints exposed by Supabase and other
//! GoTrue deployments. Only the outcome matters to the app; session
//! payloads are not kept.

use super::{AuthError, IdentityProvider};
use crate::config::TuiConfig;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Serialize)]
struct PasswordRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Error payload shapes returned by GoTrue versions
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ErrorBody {
    msg: Option<String>,
    message: Option<String>,
    error_description: Option<String>,
    error: Option<String>,
}

impl ErrorBody {
    fn into_message(self) -> Option<String> {
        [self.msg, self.message, self.error_description, self.error]
            .into_iter()
            .flatten()
            .find(|m| !m.trim().is_empty())
    }
}

/// Pull a user-facing message out of an error response body
fn extract_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(ErrorBody::into_message)
}

/// Client for the identity provider's REST API
#[derive(Clone)]
pub struct GoTrueClient {
    http: reqwest::Client,
    base_url: Option<String>,
    anon_key: Option<String>,
}

impl GoTrueClient {
    /// Create a client. Missing settings are reported when a call is made.
    pub fn new(base_url: Option<String>, anon_key: Option<String>) -> Self {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            http,
            base_url,
            anon_key,
        }
    }

    pub fn from_config(config: &TuiConfig) -> Self {
        Self::new(config.auth_url.clone(), config.auth_anon_key.clone())
    }

    /// Whether both the URL and key are set
    pub fn is_configured(&self) -> bool {
        self.base_url.is_some() && self.anon_key.is_some()
    }

    fn endpoint(&self, path: &str) -> Result<(String, &str), AuthError> {
        let base = self
            .base_url
            .as_deref()
            .filter(|u| !u.trim().is_empty())
            .ok_or_else(|| AuthError::Config("auth_url is not set".to_string()))?;
        let key = self
            .anon_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| AuthError::Config("auth_anon_key is not set".to_string()))?;

        Ok((format!("{}/auth/v1/{}", base.trim_end_matches('/'), path), key))
    }

    async fn post_password(
        &self,
        path: &str,
        email: &str,
        password: &str,
    ) -> Result<(), AuthError> {
        let (url, key) = self.endpoint(path)?;

        let response = self
            .http
            .post(&url)
            .header("apikey", key)
            .bearer_auth(key)
            .json(&PasswordRequest { email, password })
            .send()
            .await?;

        let status = response.status();
        tracing::debug!(%status, path, "Identity provider responded");

        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        let message = extract_error_message(&body).unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Authentication failed")
                .to_string()
        });
        Err(AuthError::Provider(message))
    }
}

#[async_trait]
impl IdentityProvider for GoTrueClient {
    async fn sign_up(&self, email: &str, password: &str) -> Result<(), AuthError> {
        self.post_password("signup", email, password).await
    }

    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<(), AuthError> {
        self.post_password("token?grant_type=password", email, password)
            .await
    }
}
