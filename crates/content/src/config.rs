//! Page configuration
//!
//! Names of the mounting points the page markup provides. Hosts that use
//! different ids pass overrides as JSON; unknown keys are rejected.

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub const FEATURES_MOUNT: &str = "features-container";
pub const STATS_MOUNT: &str = "stats-container";
pub const TEAM_MOUNT: &str = "team-container";
pub const YEAR_MOUNT: &str = "year";

/// Mounting point ids
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct PageConfig {
    pub features_mount: String,
    pub stats_mount: String,
    pub team_mount: String,
    pub year_mount: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            features_mount: FEATURES_MOUNT.to_string(),
            stats_mount: STATS_MOUNT.to_string(),
            team_mount: TEAM_MOUNT.to_string(),
            year_mount: YEAR_MOUNT.to_string(),
        }
    }
}

impl PageConfig {
    /// Parse overrides; omitted fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PageConfig::default();
        assert_eq!(config.features_mount, "features-container");
        assert_eq!(config.stats_mount, "stats-container");
        assert_eq!(config.team_mount, "team-container");
        assert_eq!(config.year_mount, "year");
    }

    #[test]
    fn test_partial_override() {
        let config = PageConfig::from_json(r#"{"teamMount":"people"}"#).unwrap();
        assert_eq!(config.team_mount, "people");
        assert_eq!(config.features_mount, FEATURES_MOUNT);
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(PageConfig::from_json(r#"{"footer":"x"}"#).is_err());
    }
}
