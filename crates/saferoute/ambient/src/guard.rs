//! Scoped risk assertions.

use crate::controller::RiskModeController;
use crate::mode::RiskMode;

/// One outstanding risk assertion.
///
/// Released exactly once: either through [`RiskAssertion::release`] or
/// when the guard is dropped, whichever comes first. Guards minted before
/// a [`RiskModeController::teardown`] release nothing.
#[must_use = "dropping a RiskAssertion releases it immediately"]
#[derive(Debug)]
pub struct RiskAssertion {
    controller: RiskModeController,
    generation: u64,
    active: bool,
}

impl RiskAssertion {
    pub(crate) fn new(controller: RiskModeController, generation: u64) -> Self {
        Self {
            controller,
            generation,
            active: true,
        }
    }

    /// Controller generation this assertion was taken in.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether the controller has been torn down since this was taken.
    pub fn is_stale(&self) -> bool {
        self.controller.generation() != self.generation
    }

    /// Release now and return the resulting mode.
    pub fn release(mut self) -> RiskMode {
        self.active = false;
        self.controller.release_generation(self.generation)
    }
}

impl Drop for RiskAssertion {
    fn drop(&mut self) {
        if self.active {
            self.active = false;
            self.controller.release_generation(self.generation);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_happens_once() {
        let controller = RiskModeController::new();
        let other = controller.acquire();
        let guard = controller.acquire();

        assert_eq!(guard.release(), RiskMode::Risk);
        assert_eq!(controller.assertions(), 1);
        assert_eq!(controller.stats().releases_total, 1);

        drop(other);
        assert_eq!(controller.current_mode(), RiskMode::Day);
        assert_eq!(controller.stats().ignored_releases, 0);
    }

    #[test]
    fn test_drop_in_any_order() {
        let controller = RiskModeController::new();
        let mut guards: Vec<_> = (0..5).map(|_| controller.acquire()).collect();

        guards.swap(0, 3);
        while guards.len() > 1 {
            drop(guards.remove(guards.len() / 2));
            assert_eq!(controller.current_mode(), RiskMode::Risk);
        }
        guards.clear();

        assert_eq!(controller.current_mode(), RiskMode::Day);
        assert_eq!(controller.assertions(), 0);
    }

    #[test]
    fn test_stale_after_teardown() {
        let controller = RiskModeController::new();
        let guard = controller.acquire();
        assert!(!guard.is_stale());

        controller.teardown();
        assert!(guard.is_stale());
        assert_eq!(guard.release(), RiskMode::Day);
        assert_eq!(controller.stats().ignored_releases, 1);
    }
}
