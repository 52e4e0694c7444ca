// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # `BandCloud` Client
//!
//! Typed accessors for the Microsoft Band cloud health API.
//!
//! | Accessor | Path | Record |
//! |----------|------|--------|
//! | [`BandClient::period_summaries`] | `/Summaries/{period}` | [`Summaries`] |
//! | [`BandClient::profile`] | `/Profile` | [`Profile`] |
//! | [`BandClient::devices`] | `/Devices` | [`DeviceProfiles`] |
//! | [`BandClient::device`] | `/Devices/{id}` | [`Device`] |
//! | [`BandClient::activities`] | `/Activities` | [`Activities`] |
//! | [`BandClient::activity`] | `/Activities/{id}` | [`Activity`] |
//!
//! ## Usage
//!
//! ```ignore
//! use bandcloud_client::{BandClient, Credential, OAuthConfig, Period};
//!
//! let client = BandClient::builder()
//!     .oauth(
//!         OAuthConfig::new("000000004C12345"),
//!         Credential::new(access_token).with_refresh_token(refresh_token),
//!     )
//!     .build()?;
//!
//! let profile = client.profile().await?;
//! let daily = client.period_summaries(Period::Daily).await?;
//! println!("{} walked {} steps", profile.full_name(), daily.total_steps());
//! ```

pub mod builder;
pub mod client;

pub use builder::BandClientBuilder;
pub use client::BandClient;

// Re-export records
pub use bandcloud_core::{
    Activities, Activity, ActivityKind, ActivitySegment, CaloriesBurnedSummary, CoreError,
    Device, DeviceProfiles, DistanceSummary, HeartRateSummary, HeartRateZones, Location, MapPoint,
    PerformanceSummary, Period, Profile, Summaries, Summary,
};

// Re-export pipeline types
pub use bandcloud_http::{
    AuthError, BandError, ClientConfig, Credential, OAuthConfig, TokenSource, Transport,
};
