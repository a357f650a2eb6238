//! Contribution timeline.
//!
//! A milestone is either tied to account creation or to the n-th report in
//! the contributor's history. Completion follows the report count; the
//! timestamp is read from the history only when the matching entry is
//! actually present, so a truncated or partially refreshed list yields an
//! undated but completed milestone instead of an out-of-range read.

use chrono::{DateTime, Utc};
use saferoute_types::Incident;
use serde::{Deserialize, Serialize};

/// Checkpoints on a contributor's timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneKind {
    AccountCreated,
    FirstReport,
    TrustedContributor,
    CommunityHelper,
}

impl MilestoneKind {
    /// Timeline in display order.
    pub const TIMELINE: [MilestoneKind; 4] = [
        MilestoneKind::AccountCreated,
        MilestoneKind::FirstReport,
        MilestoneKind::TrustedContributor,
        MilestoneKind::CommunityHelper,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            MilestoneKind::AccountCreated => "Account Created",
            MilestoneKind::FirstReport => "First Report Submitted",
            MilestoneKind::TrustedContributor => "Trusted Contributor",
            MilestoneKind::CommunityHelper => "Community Helper",
        }
    }

    /// One-based position of the report that marks this milestone, or
    /// `None` for the account-creation entry.
    pub fn report_ordinal(&self) -> Option<usize> {
        match self {
            MilestoneKind::AccountCreated => None,
            MilestoneKind::FirstReport => Some(1),
            MilestoneKind::TrustedContributor => Some(5),
            MilestoneKind::CommunityHelper => Some(10),
        }
    }
}

/// A timeline entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub kind: MilestoneKind,
    pub title: String,
    pub reached_at: Option<DateTime<Utc>>,
    pub completed: bool,
}

/// Build the four-entry timeline from a history ordered oldest first.
pub fn milestone_timeline(
    account_created_at: DateTime<Utc>,
    ordered_incidents: &[Incident],
) -> Vec<Milestone> {
    milestone_timeline_with_count(
        account_created_at,
        ordered_incidents.len(),
        ordered_incidents,
    )
}

/// Like [`milestone_timeline`], for callers whose authoritative report
/// count may exceed the history they hold (a paged or stale list).
pub fn milestone_timeline_with_count(
    account_created_at: DateTime<Utc>,
    report_count: usize,
    ordered_incidents: &[Incident],
) -> Vec<Milestone> {
    MilestoneKind::TIMELINE
        .iter()
        .map(|kind| {
            let (completed, reached_at) = match kind.report_ordinal() {
                None => (true, Some(account_created_at)),
                Some(ordinal) => {
                    let completed = report_count >= ordinal;
                    let reached_at = if completed {
                        ordered_incidents
                            .get(ordinal - 1)
                            .map(|incident| incident.reported_at)
                    } else {
                        None
                    };
                    (completed, reached_at)
                }
            };

            Milestone {
                kind: *kind,
                title: kind.title().to_string(),
                reached_at,
                completed,
            }
        })
        .collect()
}
