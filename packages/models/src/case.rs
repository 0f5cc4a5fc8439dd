//! Case records: incident reports promoted into tracked investigations.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

use crate::{Location, RecordId};

/// Lifecycle state of a case.
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
pub enum CaseStatus {
    /// Filed, not yet assigned.
    Open,
    /// Assigned and being worked.
    Active,
    /// Investigation concluded.
    Closed,
}

impl CaseStatus {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Open, Self::Active, Self::Closed]
    }
}

/// What kind of incident a case concerns.
///
/// Wire values are kebab-case because that is what the intake form has always
/// submitted and what existing rows contain.
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
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum CaseCategory {
    /// Behavior that warrants a closer look but names no specific offense.
    SuspiciousActivity,
    /// Indicators consistent with trafficking.
    PotentialTrafficking,
    /// A child reported missing.
    MissingChild,
    /// A child in a dangerous situation.
    ChildAtRisk,
    /// Anything that fits no other category.
    Other,
}

impl CaseCategory {
    /// Human-readable label as shown in the intake form.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SuspiciousActivity => "Suspicious Activity",
            Self::PotentialTrafficking => "Potential Trafficking",
            Self::MissingChild => "Missing Child",
            Self::ChildAtRisk => "Child at Risk",
            Self::Other => "Other Concern",
        }
    }

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::SuspiciousActivity,
            Self::PotentialTrafficking,
            Self::MissingChild,
            Self::ChildAtRisk,
            Self::Other,
        ]
    }
}

/// A stored case as the backend returns it.
///
/// Most fields are nullable: anonymous intake produces sparse rows and
/// enrichment happens over the life of the investigation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Case {
    /// Server-assigned identifier.
    pub id: RecordId,
    /// Short summary line.
    pub title: String,
    /// Narrative of the incident.
    pub description: Option<String>,
    /// Where the incident happened.
    pub location: Option<Location>,
    /// Incident classification.
    pub category: Option<CaseCategory>,
    /// Current lifecycle state.
    pub status: CaseStatus,
    /// Calendar date the incident occurred, when known.
    pub incident_date: Option<NaiveDate>,
    /// Backend user that filed the case, absent for anonymous intake.
    pub reporter_id: Option<String>,
    /// Analyst the case is assigned to.
    pub assigned_to: Option<String>,
    /// URLs of supporting evidence.
    pub evidence_links: Option<Vec<String>>,
    /// When the record was created (server clock).
    pub created_at: DateTime<Utc>,
    /// When the record was last modified (server clock).
    pub updated_at: DateTime<Utc>,
}

/// Fields supplied when filing a new case.
///
/// `reporter_id` is ordinary data here, not an ownership stamp: anonymous
/// intake legitimately files cases with no reporter at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCase {
    /// Short summary line.
    pub title: String,
    /// Narrative of the incident.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Where the incident happened.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    /// Incident classification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CaseCategory>,
    /// Initial lifecycle state.
    pub status: CaseStatus,
    /// Calendar date the incident occurred, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incident_date: Option<NaiveDate>,
    /// Filing user, when the reporter chose to identify themselves.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reporter_id: Option<String>,
    /// URLs of supporting evidence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evidence_links: Option<Vec<String>>,
}

/// Partial update for a case. Only set fields are sent to the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CasePatch {
    /// New summary line, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New narrative, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New location, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    /// New classification, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CaseCategory>,
    /// New lifecycle state, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CaseStatus>,
    /// New assignee, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    /// New evidence list, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evidence_links: Option<Vec<String>>,
}
