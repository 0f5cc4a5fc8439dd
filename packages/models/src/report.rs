//! Report records: public submissions, standard or anonymous.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

use crate::RecordId;

/// Lifecycle state of a report.
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
pub enum ReportStatus {
    /// Saved but not yet sent in.
    Draft,
    /// Received and queued for review.
    Submitted,
    /// Reviewed and released.
    Published,
}

impl ReportStatus {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Draft, Self::Submitted, Self::Published]
    }
}

/// How the report was submitted.
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
pub enum ReportType {
    /// Reporter supplied contact details for follow-up.
    Standard,
    /// No identifying information collected.
    Anonymous,
}

impl ReportType {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Standard, Self::Anonymous]
    }
}

/// A stored report as the backend returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Server-assigned identifier.
    pub id: RecordId,
    /// Short summary line.
    pub title: String,
    /// Submission channel.
    pub report_type: ReportType,
    /// Free-form period label (`"2025-Q1"`), when the report covers one.
    pub reporting_period: Option<String>,
    /// Structured body of the report. Shape varies by submission channel,
    /// so it stays schemaless JSON end to end.
    pub content: serde_json::Value,
    /// Current lifecycle state.
    pub status: ReportStatus,
    /// Backend user the submission is attributed to.
    pub user_id: String,
    /// When the report was released, if it has been.
    pub published_at: Option<DateTime<Utc>>,
    /// When the record was created (server clock).
    pub created_at: DateTime<Utc>,
    /// When the record was last modified (server clock).
    pub updated_at: DateTime<Utc>,
}

/// Fields supplied when submitting a new report.
///
/// `user_id` is stamped from the caller's identity at insert time. Anonymous
/// submissions run under the service identity so no personal account is ever
/// attached to them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewReport {
    /// Short summary line.
    pub title: String,
    /// Submission channel.
    pub report_type: ReportType,
    /// Free-form period label, when applicable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reporting_period: Option<String>,
    /// Structured body of the report.
    pub content: serde_json::Value,
    /// Initial lifecycle state.
    pub status: ReportStatus,
}

/// Partial update for a report. Only set fields are sent to the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportPatch {
    /// New summary line, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New period label, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reporting_period: Option<String>,
    /// New body, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<serde_json::Value>,
    /// New lifecycle state, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ReportStatus>,
    /// New publication time, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn report_decodes_with_schemaless_content() {
        let json = r#"{
            "id": "r1",
            "title": "Suspicious vehicle near playground",
            "report_type": "anonymous",
            "reporting_period": null,
            "content": {"incident_type": "suspicious-activity", "details": "..."},
            "status": "submitted",
            "user_id": "svc-1",
            "published_at": null,
            "created_at": "2025-02-10T09:00:00Z",
            "updated_at": "2025-02-10T09:00:00Z"
        }"#;
        let report: Report = serde_json::from_str(json).unwrap();
        assert_eq!(report.report_type, ReportType::Anonymous);
        assert_eq!(report.status, ReportStatus::Submitted);
        assert_eq!(
            report.content["incident_type"],
            json!("suspicious-activity")
        );
    }

    #[test]
    fn new_report_serializes_content_verbatim() {
        let draft = NewReport {
            title: "Weekly intake".to_string(),
            report_type: ReportType::Standard,
            reporting_period: Some("2025-W06".to_string()),
            content: json!({"summary": "quiet week"}),
            status: ReportStatus::Submitted,
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["content"]["summary"], json!("quiet week"));
        assert_eq!(value["report_type"], json!("standard"));
    }
}
