//! Tunables for derived statistics.

use serde::{Deserialize, Serialize};

/// Configuration for the insight views.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InsightsConfig {
    /// Community impact estimation.
    pub impact: ImpactConfig,
}

/// Parameters for the community impact estimate on a contributor profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImpactConfig {
    /// Average number of people who view a single report.
    pub people_reached_per_report: u64,

    /// Upper bound on the number of neighbourhoods a contributor is
    /// credited with.
    pub max_areas_impacted: usize,
}

impl Default for ImpactConfig {
    fn default() -> Self {
        Self {
            people_reached_per_report: 150,
            max_areas_impacted: 8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: InsightsConfig =
            serde_json::from_str(r#"{"impact": {"max_areas_impacted": 3}}"#).unwrap();

        assert_eq!(config.impact.max_areas_impacted, 3);
        assert_eq!(config.impact.people_reached_per_report, 150);
    }
}
