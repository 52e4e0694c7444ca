//! Recorded activities.
//!
//! Every activity type (sleep, run, bike, golf, free play, guided workout)
//! shares one record, [`Activity`], tagged with an [`ActivityKind`]. Fields
//! that do not apply to a given kind are simply left at their defaults.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};
use std::fmt;

use super::summary::{CaloriesBurnedSummary, DistanceSummary, HeartRateSummary, Summary};

// ============================================================================
// Activity Kind
// ============================================================================

/// The type of a recorded activity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityKind {
    /// Run.
    Run,
    /// Bike ride.
    Bike,
    /// Sleep session.
    Sleep,
    /// Unstructured workout.
    FreePlay,
    /// Guided workout plan.
    GuidedWorkout,
    /// Round of golf.
    Golf,
    /// A type this client does not know about.
    #[default]
    #[serde(other)]
    Unknown,
}

impl ActivityKind {
    /// Returns the display name for this kind.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Run => "Run",
            Self::Bike => "Bike",
            Self::Sleep => "Sleep",
            Self::FreePlay => "Free Play",
            Self::GuidedWorkout => "Guided Workout",
            Self::Golf => "Golf",
            Self::Unknown => "Unknown",
        }
    }

    /// Returns all known kinds.
    pub fn all() -> &'static [ActivityKind] {
        &[
            Self::Run,
            Self::Bike,
            Self::Sleep,
            Self::FreePlay,
            Self::GuidedWorkout,
            Self::Golf,
        ]
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

// ============================================================================
// Activities Listing
// ============================================================================

/// Response of the `/Activities` resource, bucketed by kind.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Activities {
    /// Sleep sessions.
    #[serde_as(as = "DefaultOnNull")]
    pub sleep_activities: Vec<Activity>,
    /// Runs.
    #[serde_as(as = "DefaultOnNull")]
    pub run_activities: Vec<Activity>,
    /// Guided workouts.
    #[serde_as(as = "DefaultOnNull")]
    pub guided_workout_activities: Vec<Activity>,
    /// Golf rounds.
    #[serde_as(as = "DefaultOnNull")]
    pub golf_activities: Vec<Activity>,
    /// Free play workouts.
    #[serde_as(as = "DefaultOnNull")]
    pub free_play_activities: Vec<Activity>,
    /// Bike rides.
    #[serde_as(as = "DefaultOnNull")]
    pub bike_activities: Vec<Activity>,
    /// Number of items in this page.
    #[serde_as(as = "DefaultOnNull")]
    pub item_count: i64,
    /// Token of the next page, if the listing continues.
    pub next_page: Option<String>,
}

impl Activities {
    /// Returns true if the API signalled a further page.
    pub fn has_next_page(&self) -> bool {
        self.next_page.as_deref().is_some_and(|p| !p.is_empty())
    }

    /// Returns the activities of one kind.
    pub fn of_kind(&self, kind: ActivityKind) -> &[Activity] {
        match kind {
            ActivityKind::Run => &self.run_activities,
            ActivityKind::Bike => &self.bike_activities,
            ActivityKind::Sleep => &self.sleep_activities,
            ActivityKind::FreePlay => &self.free_play_activities,
            ActivityKind::GuidedWorkout => &self.guided_workout_activities,
            ActivityKind::Golf => &self.golf_activities,
            ActivityKind::Unknown => &[],
        }
    }

    /// Total number of activities across all buckets.
    pub fn len(&self) -> usize {
        ActivityKind::all().iter().map(|k| self.of_kind(*k).len()).sum()
    }

    /// Returns true if no bucket holds an activity.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flattens all buckets into one list.
    ///
    /// Records whose `activityType` is absent, null or unrecognized are
    /// tagged with the kind of the bucket they were listed under.
    pub fn all(self) -> Vec<Activity> {
        let buckets = [
            (ActivityKind::Sleep, self.sleep_activities),
            (ActivityKind::Run, self.run_activities),
            (ActivityKind::GuidedWorkout, self.guided_workout_activities),
            (ActivityKind::Golf, self.golf_activities),
            (ActivityKind::FreePlay, self.free_play_activities),
            (ActivityKind::Bike, self.bike_activities),
        ];

        buckets
            .into_iter()
            .flat_map(|(kind, activities)| {
                activities.into_iter().map(move |mut activity| {
                    if activity.kind == ActivityKind::Unknown {
                        activity.kind = kind;
                    }
                    activity
                })
            })
            .collect()
    }
}

// ============================================================================
// Activity
// ============================================================================

/// A recorded activity session.
///
/// Durations are ISO 8601 strings (e.g. `PT7H12M`) as emitted by the API.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Activity {
    /// Activity identifier.
    #[serde_as(as = "DefaultOnNull")]
    pub id: String,
    /// Owner of the activity.
    #[serde_as(as = "DefaultOnNull")]
    pub user_id: String,
    /// Device that recorded the activity.
    #[serde_as(as = "DefaultOnNull")]
    pub device_id: String,
    /// Activity type tag.
    #[serde(rename = "activityType")]
    #[serde_as(as = "DefaultOnNull")]
    pub kind: ActivityKind,
    /// Name given to the activity.
    #[serde_as(as = "DefaultOnNull")]
    pub name: String,
    /// Start of the session.
    pub start_time: Option<DateTime<Utc>>,
    /// End of the session.
    pub end_time: Option<DateTime<Utc>>,
    /// Day the session belongs to.
    pub day_id: Option<DateTime<Utc>>,
    /// When the record was created.
    pub created_time: Option<DateTime<Utc>>,
    /// Creator of the record.
    #[serde_as(as = "DefaultOnNull")]
    pub created_by: String,
    /// Total duration.
    #[serde_as(as = "DefaultOnNull")]
    pub duration: String,
    /// Time spent paused.
    #[serde_as(as = "DefaultOnNull")]
    pub paused_duration: String,
    /// UV exposure.
    #[serde_as(as = "DefaultOnNull")]
    pub uv_exposure: String,

    // -- Shared metrics
    /// Heart rate over the session.
    #[serde_as(as = "DefaultOnNull")]
    pub heart_rate_summary: HeartRateSummary,
    /// Calories over the session.
    #[serde_as(as = "DefaultOnNull")]
    pub calories_burned_summary: CaloriesBurnedSummary,
    /// Distance over the session.
    #[serde_as(as = "DefaultOnNull")]
    pub distance_summary: DistanceSummary,
    /// Performance after the session.
    #[serde_as(as = "DefaultOnNull")]
    pub performance_summary: PerformanceSummary,
    /// Per-minute metric buckets.
    #[serde_as(as = "DefaultOnNull")]
    pub minute_summaries: Vec<Summary>,
    /// Segments (laps, sleep phases, holes, circuits).
    #[serde(rename = "activitySegments")]
    #[serde_as(as = "DefaultOnNull")]
    pub segments: Vec<ActivitySegment>,
    /// GPS trace.
    #[serde_as(as = "DefaultOnNull")]
    pub map_points: Vec<MapPoint>,
    /// Nested activities.
    #[serde_as(as = "DefaultOnNull")]
    pub child_activities: Vec<Activity>,
    /// Distance between split markers.
    #[serde_as(as = "DefaultOnNull")]
    pub split_distance: i64,

    // -- Sleep
    /// Time awake.
    #[serde_as(as = "DefaultOnNull")]
    pub awake_duration: String,
    /// Time asleep.
    #[serde_as(as = "DefaultOnNull")]
    pub sleep_duration: String,
    /// Number of wake-ups.
    #[serde_as(as = "DefaultOnNull")]
    pub number_of_wakeups: i64,
    /// Time to fall asleep.
    #[serde_as(as = "DefaultOnNull")]
    pub fall_asleep_duration: String,
    /// Sleep efficiency (0-100).
    #[serde_as(as = "DefaultOnNull")]
    pub sleep_efficiency_percentage: i64,
    /// Restless sleep.
    #[serde_as(as = "DefaultOnNull")]
    pub total_restless_sleep_duration: String,
    /// Restful sleep.
    #[serde_as(as = "DefaultOnNull")]
    pub total_restful_sleep_duration: String,
    /// Resting heart rate.
    #[serde_as(as = "DefaultOnNull")]
    pub resting_heart_rate: i64,
    /// When the user fell asleep.
    pub fall_asleep_time: Option<DateTime<Utc>>,
    /// When the user woke up.
    pub wakeup_time: Option<DateTime<Utc>>,

    // -- Guided workout
    /// Rounds completed.
    #[serde_as(as = "DefaultOnNull")]
    pub rounds_performed: i64,
    /// Repetitions completed.
    #[serde_as(as = "DefaultOnNull")]
    pub repetitions_performed: i64,
    /// Workout plan identifier.
    #[serde_as(as = "DefaultOnNull")]
    pub workout_plan_id: String,

    // -- Golf
    /// Steps taken.
    #[serde_as(as = "DefaultOnNull")]
    pub total_step_count: i64,
    /// Distance walked.
    #[serde_as(as = "DefaultOnNull")]
    pub total_distance_walked: i64,
    /// Holes at par or better.
    #[serde_as(as = "DefaultOnNull")]
    pub par_or_better_count: i64,
    /// Longest drive.
    #[serde_as(as = "DefaultOnNull")]
    pub longest_drive_distance: i64,
    /// Longest stroke.
    #[serde_as(as = "DefaultOnNull")]
    pub longest_stroke_distance: i64,
}

impl Activity {
    /// Returns true if this is a sleep session.
    pub fn is_sleep(&self) -> bool {
        self.kind == ActivityKind::Sleep
    }

    /// Returns true if the activity carries a GPS trace.
    pub fn has_map(&self) -> bool {
        !self.map_points.is_empty()
    }
}

/// Performance figures recorded at the end of a workout.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PerformanceSummary {
    /// Heart rate at finish.
    #[serde_as(as = "DefaultOnNull")]
    pub finish_heart_rate: i64,
    /// Heart rate one minute after finishing.
    #[serde_as(as = "DefaultOnNull")]
    pub recovery_heart_rate_at1_minute: i64,
    /// Heart rate two minutes after finishing.
    #[serde_as(as = "DefaultOnNull")]
    pub recovery_heart_rate_at2_minutes: i64,
    /// Time spent per heart rate zone.
    #[serde_as(as = "DefaultOnNull")]
    pub heart_rate_zones: HeartRateZones,
}

/// Minutes spent in each heart rate zone.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeartRateZones {
    /// Below the healthy heart zone.
    #[serde_as(as = "DefaultOnNull")]
    pub under_healthy_heart: i64,
    /// Below aerobic.
    #[serde_as(as = "DefaultOnNull")]
    pub under_aerobic: i64,
    /// Aerobic.
    #[serde_as(as = "DefaultOnNull")]
    pub aerobic: i64,
    /// Anaerobic.
    #[serde_as(as = "DefaultOnNull")]
    pub anaerobic: i64,
    /// Fitness zone.
    #[serde_as(as = "DefaultOnNull")]
    pub fitness_zone: i64,
    /// Healthy heart.
    #[serde_as(as = "DefaultOnNull")]
    pub healthy_heart: i64,
    /// Redline.
    #[serde_as(as = "DefaultOnNull")]
    pub redline: i64,
    /// Above redline.
    #[serde_as(as = "DefaultOnNull")]
    pub over_redline: i64,
}

// ============================================================================
// Segments & Map Points
// ============================================================================

/// One segment of an activity.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActivitySegment {
    /// Segment number within the activity.
    #[serde_as(as = "DefaultOnNull")]
    pub segment_id: i64,
    /// Segment type (e.g. "Run", "Sleep", "GolfHole").
    #[serde_as(as = "DefaultOnNull")]
    pub segment_type: String,
    /// Day the segment belongs to.
    pub day_id: Option<DateTime<Utc>>,
    /// Start of the segment.
    pub start_time: Option<DateTime<Utc>>,
    /// End of the segment.
    pub end_time: Option<DateTime<Utc>>,
    /// Segment duration.
    #[serde_as(as = "DefaultOnNull")]
    pub duration: String,
    /// Time spent paused.
    #[serde_as(as = "DefaultOnNull")]
    pub paused_duration: String,
    /// Heart rate over the segment.
    #[serde_as(as = "DefaultOnNull")]
    pub heart_rate_summary: HeartRateSummary,
    /// Calories over the segment.
    #[serde_as(as = "DefaultOnNull")]
    pub calories_burned_summary: CaloriesBurnedSummary,
    /// Distance over the segment.
    #[serde_as(as = "DefaultOnNull")]
    pub distance_summary: DistanceSummary,
    /// Time spent per heart rate zone.
    #[serde_as(as = "DefaultOnNull")]
    pub heart_rate_zones: HeartRateZones,
    /// Distance between split markers.
    #[serde_as(as = "DefaultOnNull")]
    pub split_distance: i64,
    /// Sleep time in the segment.
    #[serde_as(as = "DefaultOnNull")]
    pub sleep_time: i64,
    /// Sleep phase (e.g. "RestfulSleep").
    #[serde_as(as = "DefaultOnNull")]
    pub sleep_type: String,
    /// Circuit position in a guided workout.
    #[serde_as(as = "DefaultOnNull")]
    pub circuit_ordinal: i64,
    /// Circuit type in a guided workout.
    #[serde_as(as = "DefaultOnNull")]
    pub circuit_type: i64,
    /// Golf hole number.
    #[serde_as(as = "DefaultOnNull")]
    pub hole_number: i64,
    /// Steps taken.
    #[serde_as(as = "DefaultOnNull")]
    pub step_count: i64,
    /// Distance walked.
    #[serde_as(as = "DefaultOnNull")]
    pub distance_walked: i64,
}

/// One point of an activity's GPS trace.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MapPoint {
    /// Seconds since the activity started.
    #[serde_as(as = "DefaultOnNull")]
    pub seconds_since_start: i64,
    /// Point type (e.g. "Start", "Split").
    #[serde_as(as = "DefaultOnNull")]
    pub map_point_type: String,
    /// Position in the trace.
    #[serde_as(as = "DefaultOnNull")]
    pub ordinal: i64,
    /// GPS-measured distance so far.
    #[serde_as(as = "DefaultOnNull")]
    pub actual_distance: i64,
    /// Total distance so far.
    #[serde_as(as = "DefaultOnNull")]
    pub total_distance: i64,
    /// Heart rate at this point.
    #[serde_as(as = "DefaultOnNull")]
    pub heart_rate: i64,
    /// Pace.
    #[serde_as(as = "DefaultOnNull")]
    pub pace: i64,
    /// Pace scaled for display.
    #[serde_as(as = "DefaultOnNull")]
    pub scaled_pace: i64,
    /// Speed.
    #[serde_as(as = "DefaultOnNull")]
    pub speed: i64,
    /// Position.
    #[serde_as(as = "DefaultOnNull")]
    pub location: Location,
    /// Whether the activity was paused here.
    #[serde_as(as = "DefaultOnNull")]
    pub is_paused: bool,
    /// Whether the activity resumed here.
    #[serde_as(as = "DefaultOnNull")]
    pub is_resume: bool,
}

/// A GPS fix.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Location {
    /// Speed over ground.
    #[serde_as(as = "DefaultOnNull")]
    pub speed_over_ground: i64,
    /// Latitude, scaled integer.
    #[serde_as(as = "DefaultOnNull")]
    pub latitude: i64,
    /// Longitude, scaled integer.
    #[serde_as(as = "DefaultOnNull")]
    pub longitude: i64,
    /// Elevation above mean sea level.
    #[serde_as(as = "DefaultOnNull")]
    pub elevation_from_mean_sea_level: i64,
    /// Horizontal error estimate.
    #[serde_as(as = "DefaultOnNull")]
    pub estimated_horizontal_error: i64,
    /// Vertical error estimate.
    #[serde_as(as = "DefaultOnNull")]
    pub estimated_vertical_error: i64,
}
