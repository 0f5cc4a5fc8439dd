#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Domain record types, risk taxonomy, and location handling for Guardian One.
//!
//! This crate defines the canonical shapes of the four record kinds the
//! platform tracks (alerts, cases, reports, risk zones) exactly as the hosted
//! backend stores them, plus the draft and patch types used to create and
//! update them. Everything downstream (store, resources, pages, API) speaks
//! these types.

pub mod alert;
pub mod case;
pub mod location;
pub mod report;
pub mod risk_zone;

pub use alert::{Alert, AlertPatch, AlertStatus, NewAlert};
pub use case::{Case, CaseCategory, CasePatch, CaseStatus, NewCase};
pub use location::{Coordinates, Location};
pub use report::{NewReport, Report, ReportPatch, ReportStatus, ReportType};
pub use risk_zone::{NewRiskZone, RiskZone, RiskZonePatch, ZoneStatus};

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Server-assigned identifier of a stored record.
///
/// The hosted backend generates these; clients never mint them.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub String);

impl RecordId {
    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// The authenticated principal on whose behalf an operation runs.
///
/// Records that carry ownership (`user_id`) are stamped from this at insert
/// time. Callers construct one from whatever session or service account they
/// hold and pass it into each owning operation explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Backend user id the operation is attributed to.
    pub user_id: String,
}

impl Identity {
    /// Creates an identity for the given backend user id.
    #[must_use]
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}

/// Risk level for an alert or risk zone, from 1 (low) to 4 (critical).
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
pub enum RiskLevel {
    /// Level 1: Routine observation, no immediate concern
    Low = 1,
    /// Level 2: Elevated pattern worth monitoring
    Medium = 2,
    /// Level 3: Credible threat requiring investigation
    High = 3,
    /// Level 4: Immediate danger requiring response
    Critical = 4,
}

impl RiskLevel {
    /// Returns the numeric value of this risk level.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Creates a risk level from a numeric value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not in the range 1-4.
    pub const fn from_value(value: u8) -> Result<Self, InvalidRiskLevelError> {
        match value {
            1 => Ok(Self::Low),
            2 => Ok(Self::Medium),
            3 => Ok(Self::High),
            4 => Ok(Self::Critical),
            _ => Err(InvalidRiskLevelError { value }),
        }
    }

    /// Returns all variants of this enum, lowest first.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Low, Self::Medium, Self::High, Self::Critical]
    }
}

/// Error returned when attempting to create a [`RiskLevel`] from an invalid
/// numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidRiskLevelError {
    /// The invalid risk value that was provided.
    pub value: u8,
}

impl std::fmt::Display for InvalidRiskLevelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid risk level value {}: expected 1-4", self.value)
    }
}

impl std::error::Error for InvalidRiskLevelError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_level_from_value_roundtrip() {
        for v in 1..=4u8 {
            let level = RiskLevel::from_value(v).unwrap();
            assert_eq!(level.value(), v);
        }
        assert!(RiskLevel::from_value(0).is_err());
        assert!(RiskLevel::from_value(5).is_err());
    }

    #[test]
    fn risk_level_orders_by_severity() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
        assert!(RiskLevel::High < RiskLevel::Critical);
    }

    #[test]
    fn risk_level_wire_form_is_lowercase() {
        assert_eq!(
            serde_json::to_string(&RiskLevel::Critical).unwrap(),
            "\"critical\""
        );
        let parsed: RiskLevel = serde_json::from_str("\"high\"").unwrap();
        assert_eq!(parsed, RiskLevel::High);
    }

    #[test]
    fn risk_level_parses_from_str() {
        let level: RiskLevel = "medium".parse().unwrap();
        assert_eq!(level, RiskLevel::Medium);
        assert!("extreme".parse::<RiskLevel>().is_err());
    }

    #[test]
    fn record_id_is_transparent_in_json() {
        let id = RecordId::from("zone-1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"zone-1\"");
        let back: RecordId = serde_json::from_str("\"zone-1\"").unwrap();
        assert_eq!(back, id);
    }
}
