//! User profile.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};

/// The signed-in user's profile, returned by `/Profile`.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    /// Given name.
    ///
    /// The service historically emits this under the `firstString` key.
    #[serde(rename = "firstString", alias = "firstName")]
    #[serde_as(as = "DefaultOnNull")]
    pub first_name: String,
    /// Middle name.
    #[serde_as(as = "DefaultOnNull")]
    pub middle_name: String,
    /// Family name.
    #[serde_as(as = "DefaultOnNull")]
    pub last_name: String,
    /// Date of birth.
    pub birthdate: Option<DateTime<Utc>>,
    /// Postal code.
    #[serde_as(as = "DefaultOnNull")]
    pub postal_code: String,
    /// Gender as reported by the service.
    #[serde_as(as = "DefaultOnNull")]
    pub gender: String,
    /// Height in millimeters.
    #[serde_as(as = "DefaultOnNull")]
    pub height: i64,
    /// Weight in grams.
    #[serde_as(as = "DefaultOnNull")]
    pub weight: i64,
    /// Locale (e.g. "en-US").
    #[serde_as(as = "DefaultOnNull")]
    pub preferred_locale: String,
    /// When the profile last changed.
    pub last_update_time: Option<DateTime<Utc>>,
}

impl Profile {
    /// Returns the display name, skipping empty parts.
    pub fn full_name(&self) -> String {
        [&self.first_name, &self.middle_name, &self.last_name]
            .iter()
            .filter(|part| !part.is_empty())
            .map(|part| part.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_skips_empty_parts() {
        let profile = Profile {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            ..Default::default()
        };
        assert_eq!(profile.full_name(), "Jane Doe");
    }

    #[test]
    fn test_first_name_accepts_both_keys() {
        let legacy: Profile = serde_json::from_str(r#"{"firstString":"Jane"}"#).unwrap();
        let modern: Profile = serde_json::from_str(r#"{"firstName":"Jane"}"#).unwrap();
        assert_eq!(legacy.first_name, "Jane");
        assert_eq!(modern.first_name, "Jane");
    }
}
