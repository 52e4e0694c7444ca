//! Client construction.

use std::sync::Arc;

use bandcloud_http::{
    AuthorizedTransport, BandError, ClientConfig, Credential, OAuthConfig, OAuthRefresher,
    RefreshingTokenSource, RequestBuilder, ReqwestTransport, StaticTokenSource, TokenSource,
    Transport,
};
use tracing::debug;

use crate::client::BandClient;

/// Builder for [`BandClient`].
///
/// A credential source is required. Whatever transport is configured, the
/// built client always sends through an [`AuthorizedTransport`] wrapping it.
#[derive(Default)]
pub struct BandClientBuilder {
    config: ClientConfig,
    tokens: Option<Arc<dyn TokenSource>>,
    transport: Option<Arc<dyn Transport>>,
}

impl BandClientBuilder {
    /// Creates a builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole configuration.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    /// Sets the user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Uses a fixed credential. It is never refreshed.
    pub fn credential(self, credential: Credential) -> Self {
        self.token_source(StaticTokenSource::new(credential))
    }

    /// Uses `credential` and refreshes it through the OAuth token endpoint
    /// once it expires.
    pub fn oauth(self, oauth: OAuthConfig, credential: Credential) -> Self {
        self.token_source(RefreshingTokenSource::new(
            credential,
            OAuthRefresher::new(oauth),
        ))
    }

    /// Uses a custom credential source.
    pub fn token_source(mut self, tokens: impl TokenSource + 'static) -> Self {
        self.tokens = Some(Arc::new(tokens));
        self
    }

    /// Uses a shared credential source.
    pub fn shared_token_source(mut self, tokens: Arc<dyn TokenSource>) -> Self {
        self.tokens = Some(tokens);
        self
    }

    /// Sends through `transport` instead of the network.
    ///
    /// The transport receives requests that already carry authorization.
    pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Builds the client.
    pub fn build(self) -> Result<BandClient, BandError> {
        let tokens = self
            .tokens
            .ok_or_else(|| BandError::InvalidConfig("no credential configured".to_string()))?;

        let requests = RequestBuilder::from_config(&self.config)?;
        let inner: Arc<dyn Transport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::from_config(&self.config)?),
        };

        debug!(base_url = %self.config.base_url, "Building Band client");
        let transport = AuthorizedTransport::new(inner, tokens);
        Ok(BandClient::from_parts(requests, Arc::new(transport)))
    }
}

// ============================================================================
// Tests
// ============================================================================
