//! Reference-counted risk mode controller.
//!
//! The assertion count and the published mode live together in a single
//! `tokio::sync::watch` slot. Every assert, release and teardown rewrites
//! both under the channel's write lock, and every reader borrows them
//! under its read lock, so the pair is always consistent. Subscribers are
//! only woken when the mode actually flips.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::error::{AmbientError, AmbientResult};
use crate::guard::RiskAssertion;
use crate::mode::RiskMode;

/// Snapshot of the controller state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskModeStats {
    /// Published mode. Always `Risk` iff `assertions > 0`.
    pub mode: RiskMode,

    /// Outstanding assertions.
    pub assertions: u32,

    /// Incremented by each teardown; guards from older generations are
    /// ignored on release.
    pub generation: u64,

    /// Total asserts accepted.
    pub asserts_total: u64,

    /// Total releases that decremented the count.
    pub releases_total: u64,

    /// Releases that found nothing to release (floored or stale).
    pub ignored_releases: u64,
}

/// Shared ambient risk mode.
///
/// Cloning is cheap and every clone drives the same state; hand one to
/// each display surface at construction.
#[derive(Debug, Clone)]
pub struct RiskModeController {
    state: Arc<watch::Sender<RiskModeStats>>,
}

impl RiskModeController {
    /// Create a controller in day mode with no assertions.
    pub fn new() -> Self {
        let (state, _) = watch::channel(RiskModeStats::default());
        Self {
            state: Arc::new(state),
        }
    }

    /// Add one assertion. Returns the mode after the call.
    pub fn assert_risk(&self) -> RiskMode {
        self.update("assert", |state| {
            state.assertions = state.assertions.saturating_add(1);
            state.asserts_total += 1;
        })
        .mode
    }

    /// Remove one assertion, flooring at zero. Returns the mode after the
    /// call.
    pub fn release_risk(&self) -> RiskMode {
        self.update("release", |state| {
            if state.assertions == 0 {
                state.ignored_releases += 1;
            } else {
                state.assertions -= 1;
                state.releases_total += 1;
            }
        })
        .mode
    }

    /// Assert risk and return a guard that releases it exactly once.
    pub fn acquire(&self) -> RiskAssertion {
        let state = self.update("acquire", |state| {
            state.assertions = state.assertions.saturating_add(1);
            state.asserts_total += 1;
        });
        RiskAssertion::new(self.clone(), state.generation)
    }

    /// Release on behalf of a guard minted in `generation`.
    pub(crate) fn release_generation(&self, generation: u64) -> RiskMode {
        self.update("release", |state| {
            if state.generation != generation {
                debug!(
                    guard_generation = generation,
                    current_generation = state.generation,
                    "Ignoring release from a guard that predates teardown"
                );
                state.ignored_releases += 1;
            } else if state.assertions == 0 {
                state.ignored_releases += 1;
            } else {
                state.assertions -= 1;
                state.releases_total += 1;
            }
        })
        .mode
    }

    /// Current mode.
    pub fn current_mode(&self) -> RiskMode {
        self.state.borrow().mode
    }

    /// Outstanding assertions.
    pub fn assertions(&self) -> u32 {
        self.state.borrow().assertions
    }

    pub fn generation(&self) -> u64 {
        self.state.borrow().generation
    }

    pub fn stats(&self) -> RiskModeStats {
        *self.state.borrow()
    }

    /// Watch for mode changes.
    pub fn subscribe(&self) -> RiskModeSubscription {
        RiskModeSubscription {
            receiver: self.state.subscribe(),
        }
    }

    /// Drop every outstanding assertion and return to day mode.
    ///
    /// Guards acquired before this call become inert. Returns the number
    /// of assertions that were still outstanding.
    pub fn teardown(&self) -> u32 {
        let mut leaked = 0;
        let state = self.update("teardown", |state| {
            leaked = state.assertions;
            state.assertions = 0;
            state.generation += 1;
        });

        if leaked > 0 {
            warn!(
                leaked = leaked,
                generation = state.generation,
                "Risk mode torn down with outstanding assertions"
            );
        }
        info!(generation = state.generation, "Risk mode controller torn down");
        leaked
    }

    /// Apply `op` and re-derive the mode in one critical section.
    fn update<F>(&self, op: &'static str, apply: F) -> RiskModeStats
    where
        F: FnOnce(&mut RiskModeStats),
    {
        let mut before = RiskMode::Day;
        let mut after = RiskModeStats::default();

        self.state.send_if_modified(|state| {
            before = state.mode;
            apply(state);
            state.mode = RiskMode::from_assertions(state.assertions);
            after = *state;
            state.mode != before
        });

        debug!(
            op = op,
            assertions = after.assertions,
            mode = %after.mode,
            "Risk assertion count updated"
        );
        if after.mode != before {
            info!(
                old_mode = %before,
                new_mode = %after.mode,
                assertions = after.assertions,
                "Risk mode changed"
            );
        }

        after
    }
}

impl Default for RiskModeController {
    fn default() -> Self {
        Self::new()
    }
}

/// Receiver side of the risk mode.
#[derive(Debug, Clone)]
pub struct RiskModeSubscription {
    receiver: watch::Receiver<RiskModeStats>,
}

impl RiskModeSubscription {
    /// Mode as of now.
    pub fn current(&self) -> RiskMode {
        self.receiver.borrow().mode
    }

    /// Full snapshot as of now.
    pub fn stats(&self) -> RiskModeStats {
        *self.receiver.borrow()
    }

    /// Wait for the next mode flip and return the new mode.
    pub async fn changed(&mut self) -> AmbientResult<RiskMode> {
        self.receiver
            .changed()
            .await
            .map_err(|_| AmbientError::ControllerClosed)?;
        Ok(self.receiver.borrow_and_update().mode)
    }

    /// Wait until the published mode equals `mode`.
    pub async fn wait_for(&mut self, mode: RiskMode) -> AmbientResult<()> {
        self.receiver
            .wait_for(|state| state.mode == mode)
            .await
            .map(|_| ())
            .map_err(|_| AmbientError::ControllerClosed)
    }
}
