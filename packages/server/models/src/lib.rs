#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Request and response types for the Guardian One server.
//!
//! Query strings and form posts arrive as loosely typed text. The types here
//! parse that text once, at the edge, so handlers work with the same domain
//! types the rest of the workspace uses. Validation failures surface as
//! [`FormError`] values whose messages are written to be shown verbatim in a
//! toast.

use guardian_models::{
    AlertPatch, AlertStatus, CaseCategory, Coordinates, Location, NewAlert, NewReport,
    ReportStatus, ReportType, RiskLevel,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the service is healthy.
    pub healthy: bool,
    /// Service version.
    pub version: String,
}

/// Query parameters accepted by the JSON list endpoints.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct RefreshQuery {
    /// When `true`, re-fetch from the backend before responding.
    pub refresh: Option<bool>,
}

impl RefreshQuery {
    /// Whether the caller asked for a backend re-fetch.
    #[must_use]
    pub const fn wants_refresh(self) -> bool {
        matches!(self.refresh, Some(true))
    }
}

/// Query parameters for the dashboard page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardQuery {
    /// Selected tab slug, absent for the overview.
    pub tab: Option<String>,
    /// Risk zone to open in the map detail panel.
    pub zone: Option<String>,
    /// When `true`, re-fetch records from the backend before rendering.
    pub refresh: Option<bool>,
}

impl DashboardQuery {
    /// Whether the caller asked for a backend re-fetch.
    #[must_use]
    pub const fn wants_refresh(&self) -> bool {
        matches!(self.refresh, Some(true))
    }
}

/// Query parameters for pages whose only state is a tab slug.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TabQuery {
    /// Selected tab slug, absent for the default tab.
    pub tab: Option<String>,
}

/// Query parameters for the report confirmation page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReferenceQuery {
    /// Reference code issued when the report was accepted.
    #[serde(rename = "ref")]
    pub reference: Option<String>,
}

/// Why a form submission was rejected.
///
/// The `Display` text doubles as the toast body shown to the submitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    /// A coordinate field did not parse as a number.
    #[error("Latitude and longitude must be decimal degrees.")]
    CoordinatesNotNumeric,
    /// Parsed coordinates fall outside the WGS84 ranges.
    #[error("Latitude must be within -90..90 and longitude within -180..180.")]
    CoordinatesOutOfRange,
    /// The good-faith confirmation box was left unchecked.
    #[error("Please confirm the report is being made in good faith.")]
    GoodFaithUnconfirmed,
    /// The anonymous no-follow-up acknowledgement was left unchecked.
    #[error("Please acknowledge that anonymous reports cannot be followed up.")]
    FollowUpUnacknowledged,
}

/// Fields posted by the alert create and edit forms.
///
/// Coordinates stay as text here: the form inputs are free-typed, and a bad
/// value should come back as a flash message on the form, not as a 400 from
/// the extractor.
#[derive(Debug, Clone, Deserialize)]
pub struct AlertForm {
    /// Short headline.
    pub title: String,
    /// Longer narrative.
    pub description: String,
    /// Assessed risk level.
    pub risk_level: RiskLevel,
    /// Lifecycle state.
    pub status: AlertStatus,
    /// Latitude as typed into the form.
    pub lat: String,
    /// Longitude as typed into the form.
    pub lng: String,
}

impl AlertForm {
    /// Parses and range-checks the coordinate fields.
    ///
    /// # Errors
    ///
    /// Returns an error when either field is not a number or the pair falls
    /// outside the WGS84 ranges.
    pub fn location(&self) -> Result<Location, FormError> {
        let lat: f64 = self
            .lat
            .trim()
            .parse()
            .map_err(|_| FormError::CoordinatesNotNumeric)?;
        let lng: f64 = self
            .lng
            .trim()
            .parse()
            .map_err(|_| FormError::CoordinatesNotNumeric)?;
        let coordinates = Coordinates::new(lat, lng);
        if coordinates.in_range() {
            Ok(Location::Point(coordinates))
        } else {
            Err(FormError::CoordinatesOutOfRange)
        }
    }

    /// Converts the submission into an insert draft.
    ///
    /// # Errors
    ///
    /// Returns an error when the coordinate fields do not validate.
    pub fn into_draft(self) -> Result<NewAlert, FormError> {
        let location = self.location()?;
        Ok(NewAlert {
            title: self.title,
            description: self.description,
            risk_level: self.risk_level,
            status: self.status,
            location,
        })
    }

    /// Converts the submission into a whole-record patch for an edit.
    ///
    /// The form always posts every field, so every patch field is set.
    ///
    /// # Errors
    ///
    /// Returns an error when the coordinate fields do not validate.
    pub fn into_patch(self) -> Result<AlertPatch, FormError> {
        let location = self.location()?;
        Ok(AlertPatch {
            title: Some(self.title),
            description: Some(self.description),
            risk_level: Some(self.risk_level),
            status: Some(self.status),
            location: Some(location),
        })
    }
}

/// Fields posted by the public report intake form.
///
/// Contact fields only exist on the standard tab, so they deserialize as
/// optional. Checkboxes post `"on"` when ticked and nothing when not, hence
/// the `Option<String>` acknowledgements.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportForm {
    /// Which intake tab the submission came from.
    pub report_type: ReportType,
    /// Reporter name (standard tab only).
    pub name: Option<String>,
    /// Reporter email (standard tab only).
    pub email: Option<String>,
    /// Reporter phone (standard tab only).
    pub phone: Option<String>,
    /// Where the incident happened, as typed.
    pub location: String,
    /// Incident category chosen from the select.
    pub incident_type: CaseCategory,
    /// Narrative of what was observed.
    pub description: String,
    /// Good-faith confirmation checkbox.
    pub good_faith: Option<String>,
    /// Anonymous no-follow-up acknowledgement checkbox.
    pub no_followup: Option<String>,
}

impl ReportForm {
    /// The form tab to send the reporter back to when validation fails.
    #[must_use]
    pub const fn return_path(&self) -> &'static str {
        match self.report_type {
            ReportType::Standard => "/report",
            ReportType::Anonymous => "/report?tab=anonymous",
        }
    }

    /// Converts the submission into an insert draft, stamping `reference`
    /// into the report body so the confirmation page can echo it back.
    ///
    /// Anonymous submissions carry no contact object at all.
    ///
    /// # Errors
    ///
    /// Returns an error when a required acknowledgement box was left
    /// unchecked.
    pub fn into_draft(self, reference: &str) -> Result<NewReport, FormError> {
        if self.good_faith.is_none() {
            return Err(FormError::GoodFaithUnconfirmed);
        }
        if self.report_type == ReportType::Anonymous && self.no_followup.is_none() {
            return Err(FormError::FollowUpUnacknowledged);
        }

        let title = format!("{} at {}", self.incident_type.label(), self.location);
        let mut content = serde_json::json!({
            "reference": reference,
            "incident_type": self.incident_type,
            "location": self.location,
            "description": self.description,
        });
        if self.report_type == ReportType::Standard {
            content["contact"] = serde_json::json!({
                "name": self.name.unwrap_or_default(),
                "email": self.email.unwrap_or_default(),
                "phone": self.phone.unwrap_or_default(),
            });
        }

        Ok(NewReport {
            title,
            report_type: self.report_type,
            reporting_period: None,
            content,
            status: ReportStatus::Submitted,
        })
    }
}
