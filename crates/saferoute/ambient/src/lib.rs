//! # SafeRoute Ambient - Shared risk mode for display surfaces
//!
//! Any number of independent views may watch the incident feed and ask
//! for the ambient "risk" treatment while high-severity incidents are
//! present. This crate keeps that request honest under arbitrary mount and
//! unmount ordering.
//!
//! ## Model
//!
//! - The controller keeps an assertion count `a`. The published mode is
//!   [`RiskMode::Risk`] exactly when `a > 0`.
//! - Each surface holds at most one [`RiskAssertion`]. Dropping it
//!   releases, so an unmounted surface cannot leave the app stuck in risk
//!   mode.
//! - Releases beyond the outstanding count are floored at zero.
//! - Count and mode are updated together under one lock; a reader never
//!   sees `day` while the count is positive.
//!
//! ## Key Components
//!
//! - [`RiskModeController`]: the shared context object
//! - [`RiskAssertion`]: scoped assertion guard
//! - [`HighSeverityObserver`]: one surface's trigger policy
//! - [`RiskModeSubscription`]: change notifications
//!
//! ## Example
//!
//! ```rust
//! use saferoute_ambient::{RiskMode, RiskModeController};
//!
//! let controller = RiskModeController::new();
//! let banner = controller.acquire();
//! let map = controller.acquire();
//! assert_eq!(controller.current_mode(), RiskMode::Risk);
//!
//! drop(banner);
//! assert_eq!(controller.current_mode(), RiskMode::Risk);
//!
//! map.release();
//! assert_eq!(controller.current_mode(), RiskMode::Day);
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod guard;
pub mod mode;
pub mod observer;

pub use config::ObserverConfig;
pub use controller::{RiskModeController, RiskModeStats, RiskModeSubscription};
pub use error::{AmbientError, AmbientResult};
pub use guard::RiskAssertion;
pub use mode::RiskMode;
pub use observer::HighSeverityObserver;
