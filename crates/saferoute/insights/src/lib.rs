//! # SafeRoute Insights - Derived statistics over incident reports
//!
//! Everything in this crate is a pure function of its input. Nothing is
//! cached or persisted: counts, badges, milestones and trust levels are
//! recomputed from the current incident list on every read, so callers
//! may invoke them from any number of views concurrently.
//!
//! ## Key Components
//!
//! - [`IncidentAggregator`]: severity counts and recency ordering
//! - [`TrustLevel`]: four-tier contributor rank
//! - [`BadgeKind`]: fixed achievement catalog
//! - [`milestone_timeline`]: contribution checkpoints
//! - [`score`]: everything a contributor profile shows, in one value
//!
//! ## Example
//!
//! ```rust
//! use chrono::Utc;
//! use saferoute_insights::{aggregate, score, TrustLevel};
//! use saferoute_types::{Category, Incident, IncidentDraft, Severity, User};
//!
//! let user = User::new("Ada Lovelace", "ada@example.com", Utc::now());
//! let reports: Vec<Incident> = (0..6)
//!     .map(|i| {
//!         Incident::from_draft(
//!             IncidentDraft::new(format!("report {i}"), Category::Theft, Severity::Low),
//!             Some(user.id.clone()),
//!             Utc::now(),
//!         )
//!     })
//!     .collect();
//!
//! let summary = aggregate(&reports);
//! assert_eq!(summary.counts.low, 6);
//!
//! let profile = score(&user, &reports);
//! assert_eq!(profile.trust_level, TrustLevel::Active);
//! ```

pub mod aggregate;
pub mod badges;
pub mod config;
pub mod milestones;
pub mod score;
pub mod trust;

pub use aggregate::{aggregate, AggregateSummary, IncidentAggregator, SeverityCounts};
pub use badges::{badge_status, BadgeKind, BadgeStatus};
pub use config::{ImpactConfig, InsightsConfig};
pub use milestones::{milestone_timeline, milestone_timeline_with_count, Milestone, MilestoneKind};
pub use score::{initials, score, score_with, ContributorScore, ImpactMetrics};
pub use trust::TrustLevel;
