//! The ambient display mode.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Process-wide display mode.
///
/// Only two states exist; there is no night mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskMode {
    /// Normal presentation. Initial state.
    #[default]
    Day,

    /// At least one surface is asserting risk.
    Risk,
}

impl RiskMode {
    /// The mode implied by an assertion count.
    pub fn from_assertions(assertions: u32) -> Self {
        if assertions > 0 {
            RiskMode::Risk
        } else {
            RiskMode::Day
        }
    }

    pub fn is_risk(&self) -> bool {
        matches!(self, RiskMode::Risk)
    }
}

impl fmt::Display for RiskMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskMode::Day => write!(f, "day"),
            RiskMode::Risk => write!(f, "risk"),
        }
    }
}
