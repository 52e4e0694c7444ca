//! Bearer credentials and the sources that supply them.
//!
//! A [`TokenSource`] hands out a credential for every outgoing request.
//! Two sources are provided:
//!
//! - [`StaticTokenSource`] wraps one credential and returns it unchanged,
//!   with no expiry handling at all.
//! - [`RefreshingTokenSource`] tracks expiry and exchanges the refresh token
//!   through a [`TokenRefresher`] before an expired credential would be
//!   handed out.
//!
//! # Credential Format
//!
//! [`Credential`] uses the common OAuth2 token shape, so a token saved by
//! the consent flow can be deserialized directly:
//!
//! ```json
//! {
//!   "access_token": "EwB4Aq1D...",
//!   "token_type": "bearer",
//!   "refresh_token": "MCVk...",
//!   "expiry": "2015-11-02T19:00:00Z"
//! }
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::error::AuthError;

/// A credential is treated as expired this many seconds before its expiry.
const EXPIRY_DELTA_SECS: i64 = 10;

// ============================================================================
// Credential
// ============================================================================

/// An OAuth2 bearer credential.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    /// The bearer token.
    pub access_token: String,
    /// Token type, normally "bearer".
    #[serde(default = "default_token_type")]
    pub token_type: String,
    /// Token used to obtain a new access token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    /// When the access token stops being valid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry: Option<DateTime<Utc>>,
}

fn default_token_type() -> String {
    "Bearer".to_string()
}

impl Credential {
    /// Creates a credential with no expiry and no refresh token.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            token_type: default_token_type(),
            refresh_token: None,
            expiry: None,
        }
    }

    /// Sets the refresh token.
    pub fn with_refresh_token(mut self, refresh_token: impl Into<String>) -> Self {
        self.refresh_token = Some(refresh_token.into());
        self
    }

    /// Sets the absolute expiry.
    pub fn with_expiry(mut self, expiry: DateTime<Utc>) -> Self {
        self.expiry = Some(expiry);
        self
    }

    /// Sets the expiry relative to now.
    ///
    /// A lifetime past the representable range saturates at the latest
    /// representable instant.
    pub fn expires_in(self, lifetime: Duration) -> Self {
        let expiry = Utc::now()
            .checked_add_signed(lifetime)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        self.with_expiry(expiry)
    }

    /// Returns true if the credential is expired, or about to be.
    ///
    /// A credential without expiry never expires.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Returns true if the credential is expired at `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        let deadline = now
            .checked_add_signed(Duration::seconds(EXPIRY_DELTA_SECS))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        self.expiry.is_some_and(|expiry| expiry <= deadline)
    }

    /// Returns true if the credential can be refreshed.
    pub fn can_refresh(&self) -> bool {
        self.refresh_token.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// Returns the `Authorization` header value.
    pub fn authorization_value(&self) -> String {
        // Servers answer "bearer" but expect "Bearer" back.
        let scheme = if self.token_type.is_empty() || self.token_type.eq_ignore_ascii_case("bearer")
        {
            "Bearer"
        } else {
            self.token_type.as_str()
        };
        format!("{} {}", scheme, self.access_token)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("access_token", &"<redacted>")
            .field("token_type", &self.token_type)
            .field(
                "refresh_token",
                &self.refresh_token.as_ref().map(|_| "<redacted>"),
            )
            .field("expiry", &self.expiry)
            .finish()
    }
}

// ============================================================================
// Token Source Trait
// ============================================================================

/// Supplies a valid credential on demand.
///
/// Called once per outgoing request; implementations must be safe to call
/// from concurrent requests.
#[async_trait]
pub trait TokenSource: Send + Sync {
    /// Returns a credential to attach to the next request.
    async fn token(&self) -> Result<Credential, AuthError>;
}

/// Exchanges a refresh token for a new credential.
#[async_trait]
pub trait TokenRefresher: Send + Sync {
    /// Performs the exchange.
    async fn refresh(&self, refresh_token: &str) -> Result<Credential, AuthError>;
}

// ============================================================================
// Static Token Source
// ============================================================================

/// Returns the same credential forever.
#[derive(Debug, Clone)]
pub struct StaticTokenSource {
    credential: Credential,
}

impl StaticTokenSource {
    /// Wraps a credential.
    pub fn new(credential: Credential) -> Self {
        Self { credential }
    }
}

#[async_trait]
impl TokenSource for StaticTokenSource {
    async fn token(&self) -> Result<Credential, AuthError> {
        Ok(self.credential.clone())
    }
}

// ============================================================================
// Refreshing Token Source
// ============================================================================

/// Caches a credential and refreshes it when it expires.
///
/// Concurrent callers that hit an expired credential wait on the same lock,
/// so only one refresh is performed.
pub struct RefreshingTokenSource<R> {
    current: Mutex<Credential>,
    refresher: R,
}

impl<R: TokenRefresher> RefreshingTokenSource<R> {
    /// Creates a source from an existing credential.
    pub fn new(credential: Credential, refresher: R) -> Self {
        Self {
            current: Mutex::new(credential),
            refresher,
        }
    }

    /// Returns a copy of the cached credential without refreshing it.
    pub async fn current(&self) -> Credential {
        self.current.lock().await.clone()
    }
}

impl<R> fmt::Debug for RefreshingTokenSource<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RefreshingTokenSource").finish_non_exhaustive()
    }
}

#[async_trait]
impl<R: TokenRefresher> TokenSource for RefreshingTokenSource<R> {
    async fn token(&self) -> Result<Credential, AuthError> {
        let mut current = self.current.lock().await;
        if !current.is_expired() {
            return Ok(current.clone());
        }

        let refresh_token = match current.refresh_token.clone() {
            Some(token) if !token.is_empty() => token,
            _ => return Err(AuthError::Expired),
        };

        info!("Access token expired, refreshing");
        let mut fresh = self.refresher.refresh(&refresh_token).await?;

        // The token endpoint may omit the refresh token when it does not rotate it.
        if !fresh.can_refresh() {
            fresh.refresh_token = Some(refresh_token);
        }

        if fresh.is_expired() {
            return Err(AuthError::InvalidResponse(
                "refreshed token is already expired".to_string(),
            ));
        }

        debug!(expiry = ?fresh.expiry, "Stored refreshed credential");
        *current = fresh.clone();
        Ok(fresh)
    }
}

// ============================================================================
// Tests
// ============================================================================
