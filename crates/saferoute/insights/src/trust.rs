//! Contributor trust tiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tiered reputation rank derived from a contributor's report count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TrustLevel {
    New,
    Active,
    Trusted,
    Expert,
}

impl TrustLevel {
    /// Tiers paired with the report count at which they start, lowest first.
    pub const TIERS: [(usize, TrustLevel); 4] = [
        (0, TrustLevel::New),
        (5, TrustLevel::Active),
        (10, TrustLevel::Trusted),
        (25, TrustLevel::Expert),
    ];

    /// The highest tier whose lower bound `count` reaches.
    pub fn from_report_count(count: usize) -> Self {
        Self::TIERS
            .iter()
            .rev()
            .find(|(min, _)| count >= *min)
            .map(|(_, level)| *level)
            .unwrap_or(TrustLevel::New)
    }

    /// Fixed progress percentage shown for the tier. Not interpolated.
    pub fn progress(&self) -> u8 {
        match self {
            TrustLevel::New => 25,
            TrustLevel::Active => 50,
            TrustLevel::Trusted => 75,
            TrustLevel::Expert => 100,
        }
    }

    /// Report count at which this tier starts.
    pub fn min_reports(&self) -> usize {
        match self {
            TrustLevel::New => 0,
            TrustLevel::Active => 5,
            TrustLevel::Trusted => 10,
            TrustLevel::Expert => 25,
        }
    }

    /// The tier after this one, if any.
    pub fn next(&self) -> Option<TrustLevel> {
        match self {
            TrustLevel::New => Some(TrustLevel::Active),
            TrustLevel::Active => Some(TrustLevel::Trusted),
            TrustLevel::Trusted => Some(TrustLevel::Expert),
            TrustLevel::Expert => None,
        }
    }

    /// Reports still needed to reach the next tier.
    pub fn reports_to_next(count: usize) -> Option<usize> {
        Self::from_report_count(count)
            .next()
            .map(|next| next.min_reports().saturating_sub(count))
    }
}

impl fmt::Display for TrustLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrustLevel::New => write!(f, "New"),
            TrustLevel::Active => write!(f, "Active"),
            TrustLevel::Trusted => write!(f, "Trusted"),
            TrustLevel::Expert => write!(f, "Expert"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        let cases = [
            (0, TrustLevel::New),
            (4, TrustLevel::New),
            (5, TrustLevel::Active),
            (9, TrustLevel::Active),
            (10, TrustLevel::Trusted),
            (24, TrustLevel::Trusted),
            (25, TrustLevel::Expert),
            (1_000, TrustLevel::Expert),
        ];

        for (count, expected) in cases {
            assert_eq!(TrustLevel::from_report_count(count), expected, "count={}", count);
        }
    }

    #[test]
    fn test_progress_is_fixed_per_tier() {
        assert_eq!(TrustLevel::from_report_count(5).progress(), 50);
        assert_eq!(TrustLevel::from_report_count(9).progress(), 50);
        assert_eq!(TrustLevel::New.progress(), 25);
        assert_eq!(TrustLevel::Expert.progress(), 100);
    }

    #[test]
    fn test_tier_table_agrees_with_min_reports() {
        for (min, level) in TrustLevel::TIERS {
            assert_eq!(level.min_reports(), min);
        }
    }

    #[test]
    fn test_reports_to_next() {
        assert_eq!(TrustLevel::reports_to_next(0), Some(5));
        assert_eq!(TrustLevel::reports_to_next(7), Some(3));
        assert_eq!(TrustLevel::reports_to_next(24), Some(1));
        assert_eq!(TrustLevel::reports_to_next(25), None);
    }
}
