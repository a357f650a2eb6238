//! Client configuration.

use saferoute_ambient::ObserverConfig;
use saferoute_insights::InsightsConfig;
use serde::{Deserialize, Serialize};

use crate::error::{ClientError, ClientResult};

/// Configuration for one home feed surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Number of incidents shown in the "recent incidents" strip.
    pub recent_limit: usize,

    /// Risk trigger policy for the feed's observer.
    pub observer: ObserverConfig,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            recent_limit: 4,
            observer: ObserverConfig::default(),
        }
    }
}

impl FeedConfig {
    pub fn validate(&self) -> ClientResult<()> {
        if self.recent_limit == 0 {
            return Err(ClientError::InvalidConfig(
                "feed.recent_limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration for the page-level views.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Home feed layout and risk trigger.
    pub feed: FeedConfig,

    /// Scoring parameters for the profile page.
    pub insights: InsightsConfig,
}

impl ClientConfig {
    /// Parse and validate a JSON document. Missing fields take defaults.
    pub fn from_json(raw: &str) -> ClientResult<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ClientResult<()> {
        self.feed.validate()
    }
}
