//! OAuth2 refresh-token exchange.
//!
//! Obtaining the first credential (the browser consent flow) happens
//! outside this crate. This module only keeps an existing credential alive
//! by posting `grant_type=refresh_token` to the token endpoint.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::config::OAuthConfig;
use crate::credential::{Credential, TokenRefresher};
use crate::error::{AuthError, truncate};

/// Longest token endpoint body kept in an error.
const MAX_ERROR_BODY: usize = 512;

/// Token endpoint response.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    token_type: Option<String>,
    #[serde(default)]
    refresh_token: Option<String>,
    /// Lifetime in seconds.
    #[serde(default)]
    expires_in: Option<i64>,
}

impl TokenResponse {
    fn into_credential(self) -> Result<Credential, AuthError> {
        let mut credential = Credential::new(self.access_token);
        if let Some(token_type) = self.token_type.filter(|t| !t.is_empty()) {
            credential.token_type = token_type;
        }
        credential.refresh_token = self.refresh_token.filter(|t| !t.is_empty());
        if let Some(secs) = self.expires_in.filter(|s| *s > 0) {
            let expiry = Duration::try_seconds(secs)
                .and_then(|lifetime| Utc::now().checked_add_signed(lifetime))
                .ok_or_else(|| {
                    AuthError::InvalidResponse(format!("expires_in out of range: {}", secs))
                })?;
            credential = credential.with_expiry(expiry);
        }
        Ok(credential)
    }
}

/// Refreshes credentials against an OAuth2 token endpoint.
#[derive(Debug, Clone)]
pub struct OAuthRefresher {
    config: OAuthConfig,
    http: Client,
}

impl OAuthRefresher {
    /// Creates a refresher with its own HTTP client.
    pub fn new(config: OAuthConfig) -> Self {
        Self::with_client(config, Client::new())
    }

    /// Creates a refresher sharing an existing HTTP client.
    pub fn with_client(config: OAuthConfig, http: Client) -> Self {
        Self { config, http }
    }

    /// Returns the application registration.
    pub fn config(&self) -> &OAuthConfig {
        &self.config
    }
}

#[async_trait]
impl TokenRefresher for OAuthRefresher {
    #[instrument(skip(self, refresh_token), fields(token_url = %self.config.token_url))]
    async fn refresh(&self, refresh_token: &str) -> Result<Credential, AuthError> {
        debug!("Refreshing access token");

        let mut params = vec![
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
            ("client_id", self.config.client_id.as_str()),
        ];
        if let Some(secret) = self.config.client_secret.as_deref() {
            params.push(("client_secret", secret));
        }

        let response = self
            .http
            .post(&self.config.token_url)
            .form(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let mut body = response.text().await.unwrap_or_default();
            truncate(&mut body, MAX_ERROR_BODY);
            return Err(AuthError::RefreshRejected { status, body });
        }

        let body = response.bytes().await?;
        let token: TokenResponse = serde_json::from_slice(&body)
            .map_err(|e| AuthError::InvalidResponse(e.to_string()))?;

        token.into_credential()
    }
}

// ============================================================================
// Tests
// ============================================================================
