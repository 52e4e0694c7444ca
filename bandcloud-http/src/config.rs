//! Client configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

use crate::error::BandError;

/// Base URL of the Band cloud API.
pub const DEFAULT_BASE_URL: &str = "https://api.microsofthealth.net/v1/me";

/// User agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!("bandcloud/", env!("CARGO_PKG_VERSION"));

/// Microsoft account token endpoint.
pub const DEFAULT_TOKEN_URL: &str = "https://login.live.com/oauth20_token.srf";

// ============================================================================
// Client Config
// ============================================================================

/// Settings fixed at client construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Prefix every resource path is appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Identification string sent as `User-Agent`.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Whole-request timeout. `None` keeps the transport default.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// Connect timeout. `None` keeps the transport default.
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            timeout_secs: None,
            connect_timeout_secs: None,
        }
    }
}

impl ClientConfig {
    /// Sets the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Sets the whole-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_secs = Some(timeout.as_secs());
        self
    }

    /// Returns the request timeout, if configured.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Returns the connect timeout, if configured.
    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout_secs.map(Duration::from_secs)
    }

    /// Loads configuration from a JSON file.
    ///
    /// A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, BandError> {
        if !path.exists() {
            debug!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| BandError::InvalidConfig(format!("{}: {}", path.display(), e)))?;
        let config: ClientConfig = serde_json::from_str(&content)
            .map_err(|e| BandError::InvalidConfig(format!("{}: {}", path.display(), e)))?;

        info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }
}

// ============================================================================
// OAuth Config
// ============================================================================

/// Application registration used to refresh access tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OAuthConfig {
    /// Application (client) identifier.
    pub client_id: String,
    /// Application secret.
    #[serde(default)]
    pub client_secret: Option<String>,
    /// Token endpoint.
    #[serde(default = "default_token_url")]
    pub token_url: String,
}

fn default_token_url() -> String {
    DEFAULT_TOKEN_URL.to_string()
}

impl OAuthConfig {
    /// Creates a config for a public client (no secret).
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: None,
            token_url: default_token_url(),
        }
    }

    /// Sets the client secret.
    pub fn with_client_secret(mut self, secret: impl Into<String>) -> Self {
        self.client_secret = Some(secret.into());
        self
    }

    /// Sets the token endpoint.
    pub fn with_token_url(mut self, token_url: impl Into<String>) -> Self {
        self.token_url = token_url.into();
        self
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.user_agent.starts_with("bandcloud/"));
        assert!(config.timeout().is_none());
        assert!(config.connect_timeout().is_none());
    }

    #[test]
    fn test_partial_json_uses_field_defaults() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"base_url":"http://localhost:8080/v1/me"}"#).unwrap();
        assert_eq!(config.base_url, "http://localhost:8080/v1/me");
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = ClientConfig::load_from(&dir.path().join("missing.json")).unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"user_agent":"custom/1.0","timeout_secs":15}}"#).unwrap();

        let config = ClientConfig::load_from(file.path()).unwrap();
        assert_eq!(config.user_agent, "custom/1.0");
        assert_eq!(config.timeout(), Some(Duration::from_secs(15)));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_load_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let result = ClientConfig::load_from(file.path());
        assert!(matches!(result, Err(BandError::InvalidConfig(_))));
    }

    #[test]
    fn test_oauth_config_defaults() {
        let config = OAuthConfig::new("client-id").with_client_secret("s3cret");
        assert_eq!(config.token_url, DEFAULT_TOKEN_URL);
        assert_eq!(config.client_secret.as_deref(), Some("s3cret"));
    }
}
