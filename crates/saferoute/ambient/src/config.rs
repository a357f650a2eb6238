//! Observer configuration.

use saferoute_types::Severity;
use serde::{Deserialize, Serialize};

/// Trigger policy for a [`HighSeverityObserver`](crate::HighSeverityObserver).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObserverConfig {
    /// Severity whose presence asserts risk mode.
    pub trigger_severity: Severity,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            trigger_severity: Severity::High,
        }
    }
}
