//! # SafeRoute Client - Collaborator seams and page-level views
//!
//! This crate connects the derived-state engine to its external
//! collaborators:
//!
//! - [`IncidentSource`]: the remote incident store (list, list by
//!   reporter, create). [`InMemoryIncidentSource`] backs development and
//!   tests.
//! - [`SessionProvider`]: the auth collaborator's view of who is signed in.
//!
//! On top of those it provides the three page-level operations:
//!
//! - [`HomeFeed`]: dashboard statistics plus one risk-mode observer
//! - [`load_profile`]: contributor trust, badges, milestones and impact
//! - [`submit_report`]: create an incident as the signed-in user
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use saferoute_ambient::RiskModeController;
//! use saferoute_client::{ClientConfig, HomeFeed, InMemoryIncidentSource};
//!
//! # async fn example() -> saferoute_client::ClientResult<()> {
//! let controller = RiskModeController::new();
//! let source = Arc::new(InMemoryIncidentSource::new());
//! let config = ClientConfig::default();
//!
//! let mut home = HomeFeed::new("home", source, controller.clone(), &config.feed)?;
//! let snapshot = home.refresh().await?;
//! println!("{} reports, mode {}", snapshot.total_reports, snapshot.mode);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod feed;
pub mod profile;
pub mod report;
pub mod session;
pub mod source;

pub use config::{ClientConfig, FeedConfig};
pub use error::{ClientError, ClientResult};
pub use feed::{HomeFeed, HomeSnapshot};
pub use profile::{load_profile, ProfileSnapshot};
pub use report::submit_report;
pub use session::{LocalSession, SessionProvider};
pub use source::{InMemoryIncidentSource, IncidentSource};
