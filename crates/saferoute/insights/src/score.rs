//! Contributor profile scoring.

use chrono::{DateTime, Utc};
use saferoute_types::{Incident, User};
use serde::{Deserialize, Serialize};

use crate::badges::{badge_status, BadgeStatus};
use crate::config::ImpactConfig;
use crate::milestones::{milestone_timeline, Milestone};
use crate::trust::TrustLevel;

/// Estimated community reach of a contributor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpactMetrics {
    pub reports: usize,
    pub people_reached: u64,
    pub areas_impacted: usize,
    pub member_since: DateTime<Utc>,
}

impl ImpactMetrics {
    pub fn estimate(report_count: usize, member_since: DateTime<Utc>, config: &ImpactConfig) -> Self {
        Self {
            reports: report_count,
            people_reached: (report_count as u64).saturating_mul(config.people_reached_per_report),
            areas_impacted: report_count.min(config.max_areas_impacted),
            member_since,
        }
    }
}

/// Everything a contributor profile displays, derived in one pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributorScore {
    pub trust_level: TrustLevel,
    pub progress: u8,
    pub badges: Vec<BadgeStatus>,
    pub milestones: Vec<Milestone>,
    pub impact: ImpactMetrics,
}

impl ContributorScore {
    pub fn earned_badges(&self) -> impl Iterator<Item = &BadgeStatus> {
        self.badges.iter().filter(|status| status.earned)
    }
}

/// Score `user` from their reports, ordered oldest first.
pub fn score(user: &User, reporter_incidents_ascending: &[Incident]) -> ContributorScore {
    score_with(user, reporter_incidents_ascending, &ImpactConfig::default())
}

/// [`score`] with explicit impact parameters.
pub fn score_with(
    user: &User,
    reporter_incidents_ascending: &[Incident],
    config: &ImpactConfig,
) -> ContributorScore {
    let count = reporter_incidents_ascending.len();
    let trust_level = TrustLevel::from_report_count(count);

    ContributorScore {
        trust_level,
        progress: trust_level.progress(),
        badges: badge_status(count),
        milestones: milestone_timeline(user.created_at, reporter_incidents_ascending),
        impact: ImpactMetrics::estimate(count, user.created_at, config),
    }
}

/// Avatar initials: the first letter of each word, uppercased. Falls back
/// to `"U"` when the name has no letters to offer.
pub fn initials(display_name: &str) -> String {
    let letters: String = display_name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect();

    if letters.is_empty() {
        "U".to_string()
    } else {
        letters
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::badges::BadgeKind;
    use chrono::{Duration, TimeZone};
    use saferoute_types::{Category, IncidentDraft, Severity};

    fn user() -> User {
        User::new(
            "Jordan Rivera",
            "jordan@example.com",
            Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap(),
        )
    }

    fn reports_for(user: &User, count: usize) -> Vec<Incident> {
        (0..count)
            .map(|i| {
                Incident::from_draft(
                    IncidentDraft::new("report", Category::Harassment, Severity::Medium),
                    Some(user.id.clone()),
                    user.created_at + Duration::hours(i as i64 + 1),
                )
            })
            .collect()
    }

    #[test]
    fn test_seven_reports() {
        let user = user();
        let score = score(&user, &reports_for(&user, 7));

        assert_eq!(score.trust_level, TrustLevel::Active);
        assert_eq!(score.progress, 50);

        let earned: Vec<_> = score.earned_badges().map(|s| s.badge).collect();
        assert_eq!(
            earned,
            vec![BadgeKind::FirstReport, BadgeKind::TrustedContributor]
        );
        let unearned: Vec<_> = score
            .badges
            .iter()
            .filter(|s| !s.earned)
            .map(|s| s.badge)
            .collect();
        assert_eq!(
            unearned,
            vec![BadgeKind::CommunityHelper, BadgeKind::SafetyAdvocate]
        );
    }

    #[test]
    fn test_no_reports() {
        let user = user();
        let score = score(&user, &[]);

        assert_eq!(score.trust_level, TrustLevel::New);
        assert_eq!(score.progress, 25);
        assert_eq!(score.earned_badges().count(), 0);
        assert_eq!(
            score.milestones.iter().filter(|m| m.completed).count(),
            1
        );
        assert_eq!(score.impact.people_reached, 0);
    }

    #[test]
    fn test_impact_estimate() {
        let user = user();
        let score = score(&user, &reports_for(&user, 12));

        assert_eq!(score.impact.people_reached, 1_800);
        assert_eq!(score.impact.areas_impacted, 8);
        assert_eq!(score.impact.member_since, user.created_at);

        let custom = ImpactConfig {
            people_reached_per_report: 10,
            max_areas_impacted: 20,
        };
        let scored = score_with(&user, &reports_for(&user, 12), &custom);
        assert_eq!(scored.impact.people_reached, 120);
        assert_eq!(scored.impact.areas_impacted, 12);
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Jordan Rivera"), "JR");
        assert_eq!(initials("  ada   lovelace byron "), "ALB");
        assert_eq!(initials(""), "U");
        assert_eq!(initials("   "), "U");
    }
}
