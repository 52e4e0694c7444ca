//! Outbound request construction.
//!
//! The absolute URL of a request is the configured base URL followed
//! directly by the resource path. This is plain string concatenation, not
//! RFC 3986 reference resolution: no separator is inserted, and `.`/`..`
//! segments or query strings in the path are carried over verbatim. Every
//! built-in resource path starts with `/` so that
//! `https://api.microsofthealth.net/v1/me` + `/Profile` yields
//! `https://api.microsofthealth.net/v1/me/Profile`.
//!
//! [`OutboundRequest::url`] keeps the concatenated string as built.
//! [`ReqwestTransport`](crate::transport::http::ReqwestTransport) parses it
//! before sending, so dot segments are removed on the wire:
//! `/v1/me` + `/../Devices` is requested as `/v1/Devices`.

use bytes::Bytes;
use reqwest::Method;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use serde::Serialize;
use url::Url;

use crate::config::ClientConfig;
use crate::error::BandError;

// ============================================================================
// Outbound Request
// ============================================================================

/// A fully formed request, ready for a transport.
///
/// Only the identification header is set here; authorization and content
/// negotiation headers are added by the transport layer.
#[derive(Debug, Clone)]
pub struct OutboundRequest {
    method: Method,
    url: String,
    headers: HeaderMap,
    body: Option<Bytes>,
}

impl OutboundRequest {
    /// Request method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Absolute URL, exactly as concatenated.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Request headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Mutable request headers, for transport decorators.
    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    /// Serialized JSON body, if any.
    pub fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    /// Splits the request into its parts.
    pub fn into_parts(self) -> (Method, String, HeaderMap, Option<Bytes>) {
        (self.method, self.url, self.headers, self.body)
    }
}

// ============================================================================
// Request Builder
// ============================================================================

/// Builds requests against a fixed base URL.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    base_url: String,
    user_agent: HeaderValue,
}

impl RequestBuilder {
    /// Creates a builder.
    pub fn new(base_url: impl Into<String>, user_agent: &str) -> Result<Self, BandError> {
        let base_url = base_url.into();
        Url::parse(&base_url)
            .map_err(|e| BandError::InvalidConfig(format!("base URL {:?}: {}", base_url, e)))?;
        let user_agent = HeaderValue::from_str(user_agent)
            .map_err(|e| BandError::InvalidConfig(format!("user agent: {}", e)))?;

        Ok(Self {
            base_url,
            user_agent,
        })
    }

    /// Creates a builder from client configuration.
    pub fn from_config(config: &ClientConfig) -> Result<Self, BandError> {
        Self::new(config.base_url.clone(), &config.user_agent)
    }

    /// Returns the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds a bodyless GET request.
    pub fn get(&self, path: &str) -> Result<OutboundRequest, BandError> {
        self.build::<()>(Method::GET, path, None)
    }

    /// Builds a request, serializing `body` as JSON when present.
    ///
    /// No I/O happens here.
    pub fn build<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<OutboundRequest, BandError> {
        validate_path(path)?;

        let url = format!("{}{}", self.base_url, path);
        Url::parse(&url).map_err(|e| BandError::InvalidPath {
            path: path.to_string(),
            reason: e.to_string(),
        })?;

        let body = body
            .map(|b| serde_json::to_vec(b).map(Bytes::from))
            .transpose()
            .map_err(BandError::Encoding)?;

        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, self.user_agent.clone());

        Ok(OutboundRequest {
            method,
            url,
            headers,
            body,
        })
    }
}

/// Checks that a path is a well-formed URI component.
fn validate_path(path: &str) -> Result<(), BandError> {
    let invalid = |reason: &str| BandError::InvalidPath {
        path: path.to_string(),
        reason: reason.to_string(),
    };

    if path.chars().any(|c| c.is_control() || c.is_whitespace()) {
        return Err(invalid("contains whitespace or control characters"));
    }

    let bytes = path.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let escape = bytes.get(i + 1..i + 3);
            if !escape.is_some_and(|e| e.iter().all(u8::is_ascii_hexdigit)) {
                return Err(invalid("malformed percent escape"));
            }
            i += 3;
        } else {
            i += 1;
        }
    }

    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
