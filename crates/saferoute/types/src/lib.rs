//! # SafeRoute Types
//!
//! Core value types shared by every SafeRoute crate.
//!
//! Incidents and users are owned by external collaborators (the incident
//! store and the auth service). The derived-state crates only ever read
//! them, so everything here is plain immutable data.

pub mod ids;
pub mod incident;
pub mod user;

pub use ids::{IncidentId, UserId};
pub use incident::{Category, Coordinate, Incident, IncidentDraft, Severity, CHICAGO_CENTER};
pub use user::User;
