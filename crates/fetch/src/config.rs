//! Configuration for dataset retrieval.
//!
//! Supports environment-based configuration with sensible defaults.

use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// FoodData Central SR-Legacy dataset, the snapshot the local database is
/// built from.
const DEFAULT_DATASET_URL: &str =
    "https://fdc.nal.usda.gov/fdc-datasets/FoodData_Central_sr_legacy_food_json_2018-04.zip";

/// Default request timeout; the dataset archive is tens of megabytes.
const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Dataset retrieval configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// URL of the zipped dataset snapshot
    pub dataset_url: String,
    /// Optional FoodData Central API key, used by remote-query variants.
    /// The local lookup flow works without one.
    pub api_key: Option<String>,
    /// Request timeout
    #[serde(with = "secs_serde")]
    pub timeout: Duration,
}

mod secs_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            dataset_url: DEFAULT_DATASET_URL.to_owned(),
            api_key: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl FetchConfig {
    /// Creates configuration from environment variables.
    ///
    /// Reads the following environment variables:
    /// - `NUTRIFIND_DATASET_URL`: alternate dataset snapshot URL
    /// - `NUTRIFIND_API_KEY`: FoodData Central API key
    /// - `NUTRIFIND_TIMEOUT_SECS`: request timeout in seconds
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let dataset_url =
            env::var("NUTRIFIND_DATASET_URL").unwrap_or(defaults.dataset_url);
        let api_key = env::var("NUTRIFIND_API_KEY").ok();
        let timeout = env::var("NUTRIFIND_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.timeout);

        Self {
            dataset_url,
            api_key,
            timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_sr_legacy() {
        let config = FetchConfig::default();
        assert!(config.dataset_url.ends_with(".zip"));
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_serde_round_trip() {
        let config = FetchConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: FetchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.dataset_url, config.dataset_url);
        assert_eq!(back.timeout, config.timeout);
    }
}
