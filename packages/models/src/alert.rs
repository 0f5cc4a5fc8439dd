//! Alert records: reported threats moving through triage.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

use crate::{Location, RecordId, RiskLevel};

/// Lifecycle state of an alert.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AlertStatus {
    /// Newly raised, awaiting triage.
    Active,
    /// Under review by an analyst.
    Investigating,
    /// Closed out, no further action.
    Resolved,
}

impl AlertStatus {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Active, Self::Investigating, Self::Resolved]
    }
}

/// A stored alert as the backend returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    /// Server-assigned identifier.
    pub id: RecordId,
    /// Short headline shown in tables and feeds.
    pub title: String,
    /// Longer narrative of what was observed.
    pub description: String,
    /// Assessed risk level.
    pub risk_level: RiskLevel,
    /// Current lifecycle state.
    pub status: AlertStatus,
    /// Backend user that raised the alert.
    pub user_id: String,
    /// Where the activity was observed.
    pub location: Location,
    /// When the record was created (server clock).
    pub created_at: DateTime<Utc>,
    /// When the record was last modified (server clock).
    pub updated_at: DateTime<Utc>,
}

/// Fields supplied when raising a new alert.
///
/// The server assigns `id` and timestamps; `user_id` is stamped from the
/// caller's identity at insert time, never carried in the draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAlert {
    /// Short headline.
    pub title: String,
    /// Longer narrative.
    pub description: String,
    /// Assessed risk level.
    pub risk_level: RiskLevel,
    /// Initial lifecycle state.
    pub status: AlertStatus,
    /// Where the activity was observed.
    pub location: Location,
}

/// Partial update for an alert. Only set fields are sent to the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlertPatch {
    /// New headline, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New narrative, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New risk level, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<RiskLevel>,
    /// New lifecycle state, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AlertStatus>,
    /// New location, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alert_decodes_from_backend_row() {
        let json = r#"{
            "id": "a1",
            "title": "Test",
            "description": "Suspicious activity near school",
            "risk_level": "high",
            "status": "active",
            "user_id": "u-1",
            "location": {"lat": 1.0, "lng": 2.0},
            "created_at": "2025-04-01T12:00:00Z",
            "updated_at": "2025-04-01T12:00:00Z"
        }"#;
        let alert: Alert = serde_json::from_str(json).unwrap();
        assert_eq!(alert.title, "Test");
        assert_eq!(alert.risk_level, RiskLevel::High);
        assert_eq!(alert.status, AlertStatus::Active);
        assert_eq!(alert.location, Location::point(1.0, 2.0));
    }

    #[test]
    fn empty_patch_serializes_to_empty_object() {
        let patch = AlertPatch::default();
        assert_eq!(serde_json::to_string(&patch).unwrap(), "{}");
    }

    #[test]
    fn patch_only_carries_set_fields() {
        let patch = AlertPatch {
            status: Some(AlertStatus::Resolved),
            ..AlertPatch::default()
        };
        let json = serde_json::to_string(&patch).unwrap();
        assert_eq!(json, "{\"status\":\"resolved\"}");
    }
}
