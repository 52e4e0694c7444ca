//! Connected devices.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};

/// A device registered to the user, returned by `/Devices/{id}`.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Device {
    /// Device identifier.
    #[serde_as(as = "DefaultOnNull")]
    pub id: String,
    /// User-facing name.
    #[serde_as(as = "DefaultOnNull")]
    pub display_name: String,
    /// Last successful sync with the cloud.
    pub last_successful_sync: Option<DateTime<Utc>>,
    /// Device family (e.g. "Band").
    #[serde_as(as = "DefaultOnNull")]
    pub device_family: String,
    /// Hardware revision.
    #[serde_as(as = "DefaultOnNull")]
    pub hardware_version: String,
    /// Firmware revision.
    #[serde_as(as = "DefaultOnNull")]
    pub software_version: String,
    /// Model name.
    #[serde_as(as = "DefaultOnNull")]
    pub model_name: String,
    /// Manufacturer.
    #[serde_as(as = "DefaultOnNull")]
    pub manufacturer: String,
    /// Registration status (e.g. "Active").
    #[serde_as(as = "DefaultOnNull")]
    pub device_status: String,
    /// When the device was registered.
    pub created_date: Option<DateTime<Utc>>,
}

impl Device {
    /// Returns true if the service reports the device as active.
    pub fn is_active(&self) -> bool {
        self.device_status.eq_ignore_ascii_case("active")
    }
}

/// Response of the `/Devices` resource.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeviceProfiles {
    /// Registered devices.
    #[serde(rename = "deviceProfiles")]
    #[serde_as(as = "DefaultOnNull")]
    pub devices: Vec<Device>,
    /// Number of devices.
    #[serde_as(as = "DefaultOnNull")]
    pub item_count: i64,
}

impl DeviceProfiles {
    /// Finds a device by identifier.
    pub fn find(&self, id: &str) -> Option<&Device> {
        self.devices.iter().find(|d| d.id == id)
    }
}
