//! Resource records for the Band cloud API.
//!
//! These types are plain data decoded from the API's JSON responses. Every
//! field defaults when absent, so a partially populated payload still
//! decodes.
//!
//! ## Submodules
//!
//! - [`profile`] - The user profile
//! - [`device`] - Registered devices
//! - [`summary`] - Hourly and daily summaries, shared metric summaries
//! - [`activity`] - Recorded activities and their segments

mod activity;
mod device;
mod profile;
mod summary;

// Re-export everything at the models level
pub use activity::{
    Activities, Activity, ActivityKind, ActivitySegment, HeartRateZones, Location, MapPoint,
    PerformanceSummary,
};
pub use device::{Device, DeviceProfiles};
pub use profile::Profile;
pub use summary::{
    CaloriesBurnedSummary, DistanceSummary, HeartRateSummary, Period, Summaries, Summary,
};
