//! Counts and orderings over an incident collection.
//!
//! The aggregator borrows the caller's slice and never reorders it in
//! place; every ordering it hands out is a fresh vector.

use saferoute_types::{Category, Incident, Severity};
use serde::{Deserialize, Serialize};

/// Incident counts per severity level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityCounts {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

impl SeverityCounts {
    /// Count for a single level.
    pub fn get(&self, level: Severity) -> usize {
        match level {
            Severity::Low => self.low,
            Severity::Medium => self.medium,
            Severity::High => self.high,
        }
    }

    pub fn total(&self) -> usize {
        self.low + self.medium + self.high
    }

    fn record(&mut self, level: Severity) {
        match level {
            Severity::Low => self.low += 1,
            Severity::Medium => self.medium += 1,
            Severity::High => self.high += 1,
        }
    }
}

/// Read-only view over a borrowed incident collection.
#[derive(Debug, Clone, Copy)]
pub struct IncidentAggregator<'a> {
    incidents: &'a [Incident],
}

impl<'a> IncidentAggregator<'a> {
    pub fn new(incidents: &'a [Incident]) -> Self {
        Self { incidents }
    }

    pub fn len(&self) -> usize {
        self.incidents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.incidents.is_empty()
    }

    /// Number of incidents whose severity equals `level`.
    pub fn count_by_severity(&self, level: Severity) -> usize {
        self.incidents
            .iter()
            .filter(|incident| incident.severity == level)
            .count()
    }

    /// All three severity counts in a single pass.
    pub fn counts(&self) -> SeverityCounts {
        self.incidents
            .iter()
            .fold(SeverityCounts::default(), |mut counts, incident| {
                counts.record(incident.severity);
                counts
            })
    }

    pub fn count_by_category(&self, category: Category) -> usize {
        self.incidents
            .iter()
            .filter(|incident| incident.category == category)
            .count()
    }

    pub fn count_verified(&self) -> usize {
        self.incidents.iter().filter(|incident| incident.verified).count()
    }

    /// Newest first. Incidents reported at the same instant keep their
    /// original relative order.
    pub fn sorted_by_recency_descending(&self) -> Vec<&'a Incident> {
        let mut sorted: Vec<&'a Incident> = self.incidents.iter().collect();
        // `sort_by` is stable.
        sorted.sort_by(|a, b| b.reported_at.cmp(&a.reported_at));
        sorted
    }

    /// The `n` most recent incidents, or all of them when `n` exceeds the
    /// collection size.
    pub fn top_n(&self, n: usize) -> Vec<&'a Incident> {
        let mut sorted = self.sorted_by_recency_descending();
        sorted.truncate(n);
        sorted
    }
}

/// Owned aggregation result handed to display components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateSummary {
    pub counts: SeverityCounts,
    pub sorted_by_recency: Vec<Incident>,
}

impl AggregateSummary {
    pub fn total(&self) -> usize {
        self.sorted_by_recency.len()
    }

    pub fn top_n(&self, n: usize) -> &[Incident] {
        &self.sorted_by_recency[..n.min(self.sorted_by_recency.len())]
    }
}

/// Derive counts and the recency ordering for `incidents`.
pub fn aggregate(incidents: &[Incident]) -> AggregateSummary {
    let aggregator = IncidentAggregator::new(incidents);
    AggregateSummary {
        counts: aggregator.counts(),
        sorted_by_recency: aggregator
            .sorted_by_recency_descending()
            .into_iter()
            .cloned()
            .collect(),
    }
}
