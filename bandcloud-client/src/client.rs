//! Band cloud API client.

use std::fmt;
use std::sync::Arc;

use bandcloud_core::{Activities, Activity, Device, DeviceProfiles, Period, Profile, Summaries};
use bandcloud_http::{
    BandError, Credential, OutboundRequest, RequestBuilder, Transport, decode, discard,
};
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::builder::BandClientBuilder;

// ============================================================================
// Resource Paths
// ============================================================================

/// Signed-in user's profile.
const PROFILE_PATH: &str = "/Profile";

/// Registered devices.
const DEVICES_PATH: &str = "/Devices";

/// Recorded activities.
const ACTIVITIES_PATH: &str = "/Activities";

/// Period summaries, followed by `/{period}`.
const SUMMARIES_PATH: &str = "/Summaries";

// ============================================================================
// Client
// ============================================================================

/// Typed access to the Band cloud API.
///
/// Every accessor performs one request: it builds the request, sends it
/// through the authorizing transport, and decodes the JSON reply. Errors are
/// returned, never logged. Callers that want a zero value on failure can use
/// `unwrap_or_default()`; every record implements `Default`.
///
/// Listings are returned one page at a time. When a listing carries a
/// next-page token, following it is up to the caller.
///
/// Cloning is cheap; clones share the transport and the token source.
#[derive(Clone)]
pub struct BandClient {
    requests: RequestBuilder,
    transport: Arc<dyn Transport>,
}

impl BandClient {
    /// Returns a builder.
    pub fn builder() -> BandClientBuilder {
        BandClientBuilder::new()
    }

    /// Creates a client for the default endpoint with a fixed credential.
    pub fn new(credential: Credential) -> Result<Self, BandError> {
        Self::builder().credential(credential).build()
    }

    /// Assembles a client from a request builder and an already-authorizing
    /// transport.
    pub(crate) fn from_parts(requests: RequestBuilder, transport: Arc<dyn Transport>) -> Self {
        Self {
            requests,
            transport,
        }
    }

    /// Returns the base URL every path is appended to.
    pub fn base_url(&self) -> &str {
        self.requests.base_url()
    }

    // ------------------------------------------------------------------------
    // Resources
    // ------------------------------------------------------------------------

    /// Fetches hourly or daily summaries.
    pub async fn period_summaries(&self, period: Period) -> Result<Summaries, BandError> {
        self.get(&format!("{}/{}", SUMMARIES_PATH, period)).await
    }

    /// Fetches the user's profile.
    pub async fn profile(&self) -> Result<Profile, BandError> {
        self.get(PROFILE_PATH).await
    }

    /// Lists registered devices.
    pub async fn devices(&self) -> Result<DeviceProfiles, BandError> {
        self.get(DEVICES_PATH).await
    }

    /// Fetches one device.
    ///
    /// The id is inserted into the path as given; an id that is not a valid
    /// path segment fails with [`BandError::InvalidPath`].
    pub async fn device(&self, id: &str) -> Result<Device, BandError> {
        self.get(&format!("{}/{}", DEVICES_PATH, id)).await
    }

    /// Lists recorded activities, bucketed by kind.
    pub async fn activities(&self) -> Result<Activities, BandError> {
        self.get(ACTIVITIES_PATH).await
    }

    /// Fetches one activity.
    pub async fn activity(&self, id: &str) -> Result<Activity, BandError> {
        self.get(&format!("{}/{}", ACTIVITIES_PATH, id)).await
    }

    // ------------------------------------------------------------------------
    // Generic calls
    // ------------------------------------------------------------------------

    /// Sends a GET for `path` and decodes the reply into `T`.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, BandError> {
        let request = self.requests.get(path)?;
        self.round_trip(request).await
    }

    /// Sends `body` as JSON with `method` and decodes the reply into `T`.
    pub async fn send<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, BandError>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.requests.build(method, path, body)?;
        self.round_trip(request).await
    }

    /// Sends a bodyless request and discards the reply after checking its
    /// status.
    #[instrument(skip(self))]
    pub async fn execute(&self, method: Method, path: &str) -> Result<(), BandError> {
        let request = self.requests.build::<()>(method, path, None)?;
        let response = self.transport.send(request).await?;
        debug!(status = %response.status(), "Discarding response");
        discard(response).await
    }

    #[instrument(skip(self, request), fields(method = %request.method(), url = %request.url()))]
    async fn round_trip<T: DeserializeOwned>(
        &self,
        request: OutboundRequest,
    ) -> Result<T, BandError> {
        let response = self.transport.send(request).await?;
        debug!(status = %response.status(), "Decoding response");
        decode(response).await
    }
}

impl fmt::Debug for BandClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BandClient")
            .field("base_url", &self.requests.base_url())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================
