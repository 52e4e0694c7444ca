//! Network transport over `reqwest`.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};

use super::{InboundResponse, Transport};
use crate::config::ClientConfig;
use crate::error::BandError;
use crate::request::OutboundRequest;

/// Sends requests with a pooled `reqwest` client.
///
/// Redirects, TLS and connection reuse are whatever the client provides.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Creates a transport with default settings.
    pub fn new() -> Result<Self, BandError> {
        Self::from_config(&ClientConfig::default())
    }

    /// Creates a transport honoring the configured timeouts.
    pub fn from_config(config: &ClientConfig) -> Result<Self, BandError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = config.connect_timeout() {
            builder = builder.connect_timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| BandError::InvalidConfig(format!("HTTP client: {}", e)))?;
        Ok(Self { client })
    }

    /// Wraps an existing client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Returns the inner reqwest client.
    pub fn client(&self) -> &Client {
        &self.client
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    #[instrument(skip(self, request), fields(method = %request.method(), url = %request.url()))]
    async fn send(&self, request: OutboundRequest) -> Result<InboundResponse, BandError> {
        let (method, url, headers, body) = request.into_parts();

        let mut builder = self.client.request(method, url.as_str()).headers(headers);
        if let Some(body) = body {
            builder = builder.body(body);
        }

        debug!("Sending request");
        let response = builder.send().await?;
        let status = response.status();
        debug!(status = %status, "Response received");

        let headers = response.headers().clone();
        Ok(InboundResponse::new(status, response).with_headers(headers))
    }
}
