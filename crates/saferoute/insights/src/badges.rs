//! Fixed achievement catalog.
//!
//! Badges are never awarded or stored. Whether one is earned is a
//! threshold test on the current report count, so it is monotonic: a
//! badge earned at some count stays earned at every larger count.

use serde::{Deserialize, Serialize};

/// One of the four catalog achievements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BadgeKind {
    FirstReport,
    #[serde(rename = "trusted")]
    TrustedContributor,
    CommunityHelper,
    SafetyAdvocate,
}

impl BadgeKind {
    /// Catalog in display order.
    pub const CATALOG: [BadgeKind; 4] = [
        BadgeKind::FirstReport,
        BadgeKind::TrustedContributor,
        BadgeKind::CommunityHelper,
        BadgeKind::SafetyAdvocate,
    ];

    /// Stable identifier.
    pub fn id(&self) -> &'static str {
        match self {
            BadgeKind::FirstReport => "first-report",
            BadgeKind::TrustedContributor => "trusted",
            BadgeKind::CommunityHelper => "community-helper",
            BadgeKind::SafetyAdvocate => "safety-advocate",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BadgeKind::FirstReport => "First Report",
            BadgeKind::TrustedContributor => "Trusted Contributor",
            BadgeKind::CommunityHelper => "Community Helper",
            BadgeKind::SafetyAdvocate => "Safety Advocate",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            BadgeKind::FirstReport => "Submitted your first safety report",
            BadgeKind::TrustedContributor => "Earned trust through consistent reporting",
            BadgeKind::CommunityHelper => "Helped shape community safety",
            BadgeKind::SafetyAdvocate => "Dedicated to community protection",
        }
    }

    /// Minimum report count that unlocks the badge.
    pub fn threshold(&self) -> usize {
        match self {
            BadgeKind::FirstReport => 1,
            BadgeKind::TrustedContributor => 5,
            BadgeKind::CommunityHelper => 10,
            BadgeKind::SafetyAdvocate => 25,
        }
    }

    pub fn is_earned(&self, report_count: usize) -> bool {
        report_count >= self.threshold()
    }
}

/// A catalog badge together with its earned flag for a given count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeStatus {
    pub badge: BadgeKind,
    pub earned: bool,
}

/// Evaluate every catalog badge independently against `report_count`.
pub fn badge_status(report_count: usize) -> Vec<BadgeStatus> {
    BadgeKind::CATALOG
        .iter()
        .map(|badge| BadgeStatus {
            badge: *badge,
            earned: badge.is_earned(report_count),
        })
        .collect()
}
