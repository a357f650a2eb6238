//! Home dashboard feed.
//!
//! Each feed is one display surface: it owns a risk observer bound to the
//! shared controller, so mounting two feeds and dropping one never clears
//! the other's assertion.

use std::sync::Arc;

use saferoute_ambient::{HighSeverityObserver, RiskMode, RiskModeController};
use saferoute_insights::{aggregate, SeverityCounts};
use saferoute_types::Incident;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::config::FeedConfig;
use crate::error::ClientResult;
use crate::source::IncidentSource;

/// What the home page renders after a refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeSnapshot {
    pub total_reports: usize,
    pub high_priority: usize,
    pub counts: SeverityCounts,
    /// Newest first, at most `recent_limit` entries.
    pub recent: Vec<Incident>,
    /// Ambient mode right after this surface reacted to the data.
    pub mode: RiskMode,
}

/// Dashboard view over an incident source.
pub struct HomeFeed<S: IncidentSource + ?Sized> {
    source: Arc<S>,
    observer: HighSeverityObserver,
    recent_limit: usize,
}

impl<S: IncidentSource + ?Sized> HomeFeed<S> {
    /// Mount a feed surface. Fails on an invalid [`FeedConfig`].
    pub fn new(
        name: impl Into<String>,
        source: Arc<S>,
        controller: RiskModeController,
        config: &FeedConfig,
    ) -> ClientResult<Self> {
        config.validate()?;
        Ok(Self {
            source,
            observer: HighSeverityObserver::new(name, controller, config.observer.clone()),
            recent_limit: config.recent_limit,
        })
    }

    pub fn name(&self) -> &str {
        self.observer.name()
    }

    /// Whether this surface is currently holding risk mode on.
    pub fn is_asserting(&self) -> bool {
        self.observer.is_asserting()
    }

    /// Fetch the incident list and recompute the dashboard.
    ///
    /// On a failed fetch the surface keeps whatever assertion it held, so
    /// a transient outage does not flicker the ambient mode.
    #[instrument(skip(self), fields(surface = %self.observer.name()))]
    pub async fn refresh(&mut self) -> ClientResult<HomeSnapshot> {
        let incidents = match self.source.list_incidents().await {
            Ok(incidents) => incidents,
            Err(err) => {
                warn!(error = %err, "Feed refresh failed; keeping previous risk state");
                return Err(err);
            }
        };

        let summary = aggregate(&incidents);
        let trigger = self.observer.config().trigger_severity;
        let mode = self.observer.observe_count(summary.counts.get(trigger));

        debug!(
            total = summary.total(),
            high = summary.counts.high,
            mode = %mode,
            "Feed refreshed"
        );

        Ok(HomeSnapshot {
            total_reports: summary.total(),
            high_priority: summary.counts.high,
            counts: summary.counts,
            recent: summary.top_n(self.recent_limit).to_vec(),
            mode,
        })
    }
}
