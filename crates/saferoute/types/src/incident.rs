//! Incident reports and their closed enumerations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ids::{IncidentId, UserId};

/// Default map point for drafts that carry no explicit location.
pub const CHICAGO_CENTER: Coordinate = Coordinate {
    latitude: 41.8781,
    longitude: -87.6298,
};

/// Ordered risk rank of an incident.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    #[default]
    Medium,
    High,
}

impl Severity {
    /// Every severity, lowest first.
    pub const ALL: [Severity; 3] = [Severity::Low, Severity::Medium, Severity::High];

    /// Human-readable label used on incident cards.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Low => write!(f, "low"),
            Severity::Medium => write!(f, "medium"),
            Severity::High => write!(f, "high"),
        }
    }
}

/// Kind of safety event being reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Theft,
    Assault,
    Vandalism,
    Harassment,
    Scam,
    UnsafeArea,
    Other,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Theft,
        Category::Assault,
        Category::Vandalism,
        Category::Harassment,
        Category::Scam,
        Category::UnsafeArea,
        Category::Other,
    ];

    /// Human-readable label used on incident cards.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Theft => "Theft",
            Category::Assault => "Assault",
            Category::Vandalism => "Vandalism",
            Category::Harassment => "Harassment",
            Category::Scam => "Scam/Fraud",
            Category::UnsafeArea => "Unsafe Area",
            Category::Other => "Other",
        }
    }
}

/// Geographic point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl Default for Coordinate {
    fn default() -> Self {
        CHICAGO_CENTER
    }
}

/// The fields a reporter submits when creating an incident.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentDraft {
    pub title: String,
    pub description: String,
    pub category: Category,
    #[serde(default)]
    pub severity: Severity,
    pub location: String,
    #[serde(flatten)]
    pub coordinate: Coordinate,
}

impl IncidentDraft {
    pub fn new(title: impl Into<String>, category: Category, severity: Severity) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            category,
            severity,
            location: String::new(),
            coordinate: Coordinate::default(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_location(mut self, label: impl Into<String>, coordinate: Coordinate) -> Self {
        self.location = label.into();
        self.coordinate = coordinate;
        self
    }
}

/// A single reported safety event. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Incident {
    pub id: IncidentId,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub severity: Severity,
    pub location: String,
    #[serde(flatten)]
    pub coordinate: Coordinate,
    pub verified: bool,
    /// `None` for anonymous reports.
    pub reporter_id: Option<UserId>,
    pub reported_at: DateTime<Utc>,
}

impl Incident {
    /// Materialise a draft as the store would, with a fresh id and the
    /// verified flag cleared.
    pub fn from_draft(
        draft: IncidentDraft,
        reporter_id: Option<UserId>,
        reported_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: IncidentId::generate(),
            title: draft.title,
            description: draft.description,
            category: draft.category,
            severity: draft.severity,
            location: draft.location,
            coordinate: draft.coordinate,
            verified: false,
            reporter_id,
            reported_at,
        }
    }

    pub fn is_anonymous(&self) -> bool {
        self.reporter_id.is_none()
    }

    pub fn is_reported_by(&self, user_id: &UserId) -> bool {
        self.reporter_id.as_ref() == Some(user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
        assert_eq!(Severity::default(), Severity::Medium);
    }

    #[test]
    fn test_category_wire_names() {
        let json = serde_json::to_string(&Category::UnsafeArea).unwrap();
        assert_eq!(json, "\"unsafe_area\"");
        assert_eq!(Category::Scam.label(), "Scam/Fraud");
    }

    #[test]
    fn test_unknown_severity_is_rejected() {
        let parsed: Result<Severity, _> = serde_json::from_str("\"critical\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_incident_from_draft() {
        let reporter = UserId::generate();
        let draft = IncidentDraft::new("Phone snatched", Category::Theft, Severity::High)
            .with_location("Millennium Park", Coordinate::new(41.8826, -87.6226));
        let incident = Incident::from_draft(draft, Some(reporter.clone()), Utc::now());

        assert!(!incident.verified);
        assert!(incident.is_reported_by(&reporter));
        assert!(!incident.is_anonymous());
        assert_eq!(incident.location, "Millennium Park");
    }

    #[test]
    fn test_draft_without_point_defaults_to_city_center() {
        let draft: IncidentDraft = serde_json::from_str(
            r#"{"title": "Loose grate", "description": "", "category": "other", "location": "Loop"}"#,
        )
        .unwrap();

        assert_eq!(draft.coordinate, CHICAGO_CENTER);
        assert_eq!(draft.severity, Severity::Medium);
    }

    #[test]
    fn test_incident_json_shape() {
        let incident = Incident::from_draft(
            IncidentDraft::new("Broken lights", Category::UnsafeArea, Severity::Low),
            None,
            Utc::now(),
        );
        let value = serde_json::to_value(&incident).unwrap();

        assert_eq!(value["severity"], "low");
        assert_eq!(value["reporterId"], serde_json::Value::Null);
        assert!(value.get("latitude").is_some());
        assert!(value.get("reportedAt").is_some());
    }
}
