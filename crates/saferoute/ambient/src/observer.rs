//! Per-surface trigger policy.
//!
//! A display surface asks for risk mode while its view of the incident
//! feed contains at least one incident of the trigger severity. It holds
//! at most one assertion at a time, so repeated refreshes never inflate
//! the shared count, and the assertion goes away with the observer.

use saferoute_insights::IncidentAggregator;
use saferoute_types::Incident;
use tracing::debug;

use crate::config::ObserverConfig;
use crate::controller::RiskModeController;
use crate::guard::RiskAssertion;
use crate::mode::RiskMode;

/// One display surface watching the severity signal.
#[derive(Debug)]
pub struct HighSeverityObserver {
    name: String,
    controller: RiskModeController,
    config: ObserverConfig,
    assertion: Option<RiskAssertion>,
    last_count: usize,
}

impl HighSeverityObserver {
    /// Mount a surface. Nothing is asserted until the first observation.
    pub fn new(
        name: impl Into<String>,
        controller: RiskModeController,
        config: ObserverConfig,
    ) -> Self {
        let name = name.into();
        debug!(observer = %name, trigger = %config.trigger_severity, "Observer mounted");
        Self {
            name,
            controller,
            config,
            assertion: None,
            last_count: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &ObserverConfig {
        &self.config
    }

    /// Whether this surface currently holds a live assertion.
    pub fn is_asserting(&self) -> bool {
        self.assertion
            .as_ref()
            .map(|assertion| !assertion.is_stale())
            .unwrap_or(false)
    }

    /// Trigger count seen on the last observation.
    pub fn last_count(&self) -> usize {
        self.last_count
    }

    /// React to a fresh incident snapshot.
    pub fn observe(&mut self, incidents: &[Incident]) -> RiskMode {
        let count =
            IncidentAggregator::new(incidents).count_by_severity(self.config.trigger_severity);
        self.observe_count(count)
    }

    /// React to an already-computed trigger count.
    pub fn observe_count(&mut self, count: usize) -> RiskMode {
        self.last_count = count;

        if self.assertion.as_ref().is_some_and(RiskAssertion::is_stale) {
            // Taken before a controller teardown; holds nothing anymore.
            self.assertion = None;
        }

        match (count > 0, self.assertion.is_some()) {
            (true, false) => {
                debug!(observer = %self.name, count = count, "Observer asserting risk");
                self.assertion = Some(self.controller.acquire());
            }
            (false, true) => {
                debug!(observer = %self.name, "Observer releasing risk");
                if let Some(assertion) = self.assertion.take() {
                    assertion.release();
                }
            }
            _ => {}
        }

        self.controller.current_mode()
    }
}

impl Drop for HighSeverityObserver {
    fn drop(&mut self) {
        debug!(
            observer = %self.name,
            asserting = self.is_asserting(),
            "Observer unmounted"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use saferoute_types::{Category, IncidentDraft, Severity};

    fn incident(severity: Severity) -> Incident {
        Incident::from_draft(
            IncidentDraft::new("report", Category::Assault, severity),
            None,
            Utc::now(),
        )
    }

    fn observer(name: &str, controller: &RiskModeController) -> HighSeverityObserver {
        HighSeverityObserver::new(name, controller.clone(), ObserverConfig::default())
    }

    #[test]
    fn test_refreshes_do_not_inflate_count() {
        let controller = RiskModeController::new();
        let mut home = observer("home", &controller);
        let feed = vec![incident(Severity::High), incident(Severity::Low)];

        for _ in 0..3 {
            assert_eq!(home.observe(&feed), RiskMode::Risk);
        }
        assert_eq!(controller.assertions(), 1);
        assert_eq!(home.last_count(), 1);

        assert_eq!(home.observe(&[incident(Severity::Low)]), RiskMode::Day);
        assert!(!home.is_asserting());
    }

    #[test]
    fn test_one_surface_clearing_does_not_reset_another() {
        let controller = RiskModeController::new();
        let mut home = observer("home", &controller);
        let mut map = observer("map", &controller);
        let feed = vec![incident(Severity::High)];

        home.observe(&feed);
        map.observe(&feed);

        assert_eq!(home.observe(&[]), RiskMode::Risk);
        assert_eq!(map.observe(&[]), RiskMode::Day);
    }

    #[test]
    fn test_unmount_releases() {
        let controller = RiskModeController::new();
        let mut home = observer("home", &controller);
        home.observe(&[incident(Severity::High)]);
        assert_eq!(controller.current_mode(), RiskMode::Risk);

        drop(home);
        assert_eq!(controller.current_mode(), RiskMode::Day);
    }

    #[test]
    fn test_custom_trigger_severity() {
        let controller = RiskModeController::new();
        let mut cautious = HighSeverityObserver::new(
            "cautious",
            controller.clone(),
            ObserverConfig {
                trigger_severity: Severity::Medium,
            },
        );

        assert_eq!(cautious.observe(&[incident(Severity::High)]), RiskMode::Day);
        assert_eq!(cautious.observe(&[incident(Severity::Medium)]), RiskMode::Risk);
    }

    #[test]
    fn test_reasserts_after_teardown() {
        let controller = RiskModeController::new();
        let mut home = observer("home", &controller);
        let feed = vec![incident(Severity::High)];

        home.observe(&feed);
        controller.teardown();
        assert!(!home.is_asserting());
        assert_eq!(controller.current_mode(), RiskMode::Day);

        assert_eq!(home.observe(&feed), RiskMode::Risk);
        assert_eq!(controller.assertions(), 1);
    }

    #[test]
    fn test_unmount_after_teardown_releases_nothing() {
        let controller = RiskModeController::new();
        let mut home = observer("home", &controller);
        home.observe(&[incident(Severity::High)]);

        controller.teardown();
        let _anchor = controller.acquire();
        assert!(!home.is_asserting());

        drop(home);
        assert_eq!(controller.assertions(), 1);
        assert_eq!(controller.current_mode(), RiskMode::Risk);
    }
}
