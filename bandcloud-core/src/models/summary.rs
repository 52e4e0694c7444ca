//! Period summary types.
//!
//! This module contains the aggregated metrics records returned by the
//! `/Summaries/{period}` resource, plus the per-metric summaries that are
//! shared with activities and activity segments:
//! - [`Summaries`] - Listing of summaries for a period
//! - [`Summary`] - One hourly or daily bucket
//! - [`CaloriesBurnedSummary`], [`HeartRateSummary`], [`DistanceSummary`]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

// ============================================================================
// Period
// ============================================================================

/// Granularity of a period summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// One bucket per hour.
    Hourly,
    /// One bucket per day.
    #[default]
    Daily,
}

impl Period {
    /// Returns the path segment used by the API for this period.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
        }
    }

    /// Returns all periods.
    pub fn all() -> &'static [Period] {
        &[Self::Hourly, Self::Daily]
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hourly" => Ok(Self::Hourly),
            "daily" => Ok(Self::Daily),
            _ => Err(CoreError::UnknownPeriod(s.to_string())),
        }
    }
}

// ============================================================================
// Summaries
// ============================================================================

/// Response of the `/Summaries/{period}` resource.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Summaries {
    /// Summary buckets, oldest first.
    #[serde_as(as = "DefaultOnNull")]
    pub summaries: Vec<Summary>,
    /// Number of items in this page.
    #[serde_as(as = "DefaultOnNull")]
    pub item_count: i64,
    /// Token of the next page, if the listing continues.
    pub next_page: Option<String>,
}

impl Summaries {
    /// Returns true if the API signalled a further page.
    pub fn has_next_page(&self) -> bool {
        self.next_page.as_deref().is_some_and(|p| !p.is_empty())
    }

    /// Total steps across all buckets.
    pub fn total_steps(&self) -> i64 {
        self.summaries.iter().map(|s| s.steps_taken).sum()
    }

    /// Total calories across all buckets.
    pub fn total_calories(&self) -> i64 {
        self.summaries
            .iter()
            .map(|s| s.calories_burned_summary.total_calories)
            .sum()
    }
}

/// Aggregated metrics for one hour or one day.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Summary {
    /// Owner of the summary.
    #[serde_as(as = "DefaultOnNull")]
    pub user_id: String,
    /// Start of the bucket.
    pub start_time: Option<DateTime<Utc>>,
    /// End of the bucket.
    pub end_time: Option<DateTime<Utc>>,
    /// Day this bucket belongs to.
    pub parent_day: Option<DateTime<Utc>>,
    /// Whether the day was a time-zone transit day.
    #[serde_as(as = "DefaultOnNull")]
    pub is_transit_day: bool,
    /// Period label (e.g. "Daily").
    #[serde_as(as = "DefaultOnNull")]
    pub period: String,
    /// ISO 8601 duration of the bucket.
    #[serde_as(as = "DefaultOnNull")]
    pub duration: String,
    /// Steps taken.
    #[serde_as(as = "DefaultOnNull")]
    pub steps_taken: i64,
    /// Floors climbed.
    #[serde_as(as = "DefaultOnNull")]
    pub floors_climbed: i64,
    /// Hours with activity.
    #[serde_as(as = "DefaultOnNull")]
    pub active_hours: i64,
    /// UV exposure (ISO 8601 duration).
    #[serde_as(as = "DefaultOnNull")]
    pub uv_exposure: String,
    /// Calories.
    #[serde(alias = "CaloriesBurnedSummary")]
    #[serde_as(as = "DefaultOnNull")]
    pub calories_burned_summary: CaloriesBurnedSummary,
    /// Heart rate.
    #[serde(alias = "HeartRateSummary")]
    #[serde_as(as = "DefaultOnNull")]
    pub heart_rate_summary: HeartRateSummary,
    /// Distance.
    #[serde(alias = "DistanceSummary")]
    #[serde_as(as = "DefaultOnNull")]
    pub distance_summary: DistanceSummary,
}

// ============================================================================
// Metric Summaries
// ============================================================================

/// Calories burned during a period.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CaloriesBurnedSummary {
    /// Period label.
    #[serde_as(as = "DefaultOnNull")]
    pub period: String,
    /// Total kilocalories.
    #[serde_as(as = "DefaultOnNull")]
    pub total_calories: i64,
}

/// Heart rate statistics during a period.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeartRateSummary {
    /// Period label.
    #[serde_as(as = "DefaultOnNull")]
    pub period: String,
    /// Average beats per minute.
    #[serde_as(as = "DefaultOnNull")]
    pub average_heart_rate: i64,
    /// Peak beats per minute.
    #[serde_as(as = "DefaultOnNull")]
    pub peak_heart_rate: i64,
    /// Lowest beats per minute.
    #[serde_as(as = "DefaultOnNull")]
    pub lowest_heart_rate: i64,
}

/// Distance statistics during a period.
///
/// Distances are in centimeters; speed and pace use the API's native units.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DistanceSummary {
    /// Period label.
    #[serde_as(as = "DefaultOnNull")]
    pub period: String,
    /// Total distance.
    #[serde_as(as = "DefaultOnNull")]
    pub total_distance: i64,
    /// Distance covered on foot.
    #[serde_as(as = "DefaultOnNull")]
    pub total_distance_on_foot: i64,
    /// GPS-measured distance.
    #[serde_as(as = "DefaultOnNull")]
    pub actual_distance: i64,
    /// Elevation gained.
    #[serde_as(as = "DefaultOnNull")]
    pub elevation_gain: i64,
    /// Elevation lost.
    #[serde_as(as = "DefaultOnNull")]
    pub elevation_loss: i64,
    /// Highest elevation.
    #[serde_as(as = "DefaultOnNull")]
    pub max_elevation: i64,
    /// Lowest elevation.
    #[serde_as(as = "DefaultOnNull")]
    pub min_elevation: i64,
    /// Distance between waypoints.
    #[serde_as(as = "DefaultOnNull")]
    pub waypoint_distance: i64,
    /// Speed.
    #[serde_as(as = "DefaultOnNull")]
    pub speed: i64,
    /// Pace.
    #[serde_as(as = "DefaultOnNull")]
    pub pace: i64,
    /// Overall pace.
    #[serde_as(as = "DefaultOnNull")]
    pub overall_pace: i64,
}

// ============================================================================
// Tests
// ============================================================================
