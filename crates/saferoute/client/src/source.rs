//! Incident data source seam.
//!
//! The real store is remote; this module only fixes the interface the
//! views depend on and provides an in-memory implementation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use saferoute_types::{Incident, IncidentDraft, IncidentId, UserId};
use tracing::debug;

use crate::error::{ClientError, ClientResult};

/// Trait for incident store backends.
#[async_trait]
pub trait IncidentSource: Send + Sync {
    /// All incidents, in no particular order.
    async fn list_incidents(&self) -> ClientResult<Vec<Incident>>;

    /// Incidents reported by `user_id`, oldest first.
    async fn list_incidents_by_reporter(&self, user_id: &UserId) -> ClientResult<Vec<Incident>>;

    /// Persist a new incident. The store assigns the id and timestamp.
    async fn create_incident(
        &self,
        draft: IncidentDraft,
        reporter: Option<UserId>,
    ) -> ClientResult<Incident>;

    /// Look up a single incident.
    async fn get_incident(&self, id: &IncidentId) -> ClientResult<Incident> {
        self.list_incidents()
            .await?
            .into_iter()
            .find(|incident| &incident.id == id)
            .ok_or_else(|| ClientError::IncidentNotFound(id.clone()))
    }
}

/// In-memory incident store for development and testing.
pub struct InMemoryIncidentSource {
    /// All incidents indexed by ID.
    incidents: Arc<DashMap<IncidentId, Incident>>,

    /// When false every call fails with `SourceUnavailable`.
    available: AtomicBool,
}

impl InMemoryIncidentSource {
    pub fn new() -> Self {
        Self {
            incidents: Arc::new(DashMap::new()),
            available: AtomicBool::new(true),
        }
    }

    /// Create a store pre-seeded with `incidents`.
    pub fn with_incidents(incidents: impl IntoIterator<Item = Incident>) -> Self {
        let source = Self::new();
        for incident in incidents {
            source.insert(incident);
        }
        source
    }

    /// Insert or replace an incident as-is.
    pub fn insert(&self, incident: Incident) {
        self.incidents.insert(incident.id.clone(), incident);
    }

    pub fn remove(&self, id: &IncidentId) -> Option<Incident> {
        self.incidents.remove(id).map(|(_, incident)| incident)
    }

    pub fn len(&self) -> usize {
        self.incidents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.incidents.is_empty()
    }

    /// Simulate the remote store going away or coming back.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    fn ensure_available(&self) -> ClientResult<()> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(ClientError::SourceUnavailable(
                "in-memory source marked offline".to_string(),
            ))
        }
    }

    /// Oldest first, ties broken by id for a stable listing.
    fn sorted(mut incidents: Vec<Incident>) -> Vec<Incident> {
        incidents.sort_by(|a, b| {
            a.reported_at
                .cmp(&b.reported_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        incidents
    }
}

impl Default for InMemoryIncidentSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IncidentSource for InMemoryIncidentSource {
    async fn list_incidents(&self) -> ClientResult<Vec<Incident>> {
        self.ensure_available()?;
        let incidents = self.incidents.iter().map(|entry| entry.clone()).collect();
        Ok(Self::sorted(incidents))
    }

    async fn list_incidents_by_reporter(&self, user_id: &UserId) -> ClientResult<Vec<Incident>> {
        self.ensure_available()?;
        let incidents = self
            .incidents
            .iter()
            .filter(|entry| entry.is_reported_by(user_id))
            .map(|entry| entry.clone())
            .collect();
        Ok(Self::sorted(incidents))
    }

    async fn create_incident(
        &self,
        draft: IncidentDraft,
        reporter: Option<UserId>,
    ) -> ClientResult<Incident> {
        self.ensure_available()?;
        let incident = Incident::from_draft(draft, reporter, Utc::now());
        debug!(incident_id = %incident.id, severity = %incident.severity, "Incident stored");
        self.insert(incident.clone());
        Ok(incident)
    }

    async fn get_incident(&self, id: &IncidentId) -> ClientResult<Incident> {
        self.ensure_available()?;
        self.incidents
            .get(id)
            .map(|entry| entry.clone())
            .ok_or_else(|| ClientError::IncidentNotFound(id.clone()))
    }
}
