// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # `BandCloud` Core
//!
//! Resource records for the Microsoft Band cloud health API.
//!
//! The records carry no behavior beyond a few convenience accessors; they
//! are the decode targets of the `bandcloud-http` pipeline.
//!
//! ## Key Types
//!
//! ### Account
//! - [`Profile`] - The signed-in user's profile
//! - [`Device`] / [`DeviceProfiles`] - Registered devices
//!
//! ### Summaries
//! - [`Summaries`] / [`Summary`] - Hourly or daily aggregates
//! - [`Period`] - Summary granularity
//!
//! ### Activities
//! - [`Activities`] - Listing bucketed by kind
//! - [`Activity`] - One recorded session, tagged with an [`ActivityKind`]
//! - [`ActivitySegment`], [`MapPoint`] - Per-segment and GPS detail

pub mod error;
pub mod models;

// Re-export error types
pub use error::CoreError;

// Re-export all model types
pub use models::{
    // Account
    Device,
    DeviceProfiles,
    Profile,
    // Summaries
    CaloriesBurnedSummary,
    DistanceSummary,
    HeartRateSummary,
    Period,
    Summaries,
    Summary,
    // Activities
    Activities,
    Activity,
    ActivityKind,
    ActivitySegment,
    HeartRateZones,
    Location,
    MapPoint,
    PerformanceSummary,
};
