//! Risk zone records: geographic areas under elevated watch.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

use crate::{Coordinates, Location, RecordId, RiskLevel};

/// Watch state of a risk zone.
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
pub enum ZoneStatus {
    /// Zone is live and feeding the map.
    Active,
    /// Watch downgraded, kept for trend data.
    Monitoring,
    /// No longer considered a risk area.
    Cleared,
}

impl ZoneStatus {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Active, Self::Monitoring, Self::Cleared]
    }
}

/// A stored risk zone as the backend returns it.
///
/// `location` names the area; `coordinates` is always the exact map anchor.
/// Zones carry no timestamps, the backend never exposed them for this table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskZone {
    /// Server-assigned identifier.
    pub id: RecordId,
    /// Area name or point, as entered.
    pub location: Location,
    /// Why the zone is flagged.
    pub description: String,
    /// Assessed risk level.
    pub risk_level: RiskLevel,
    /// Current watch state.
    pub status: ZoneStatus,
    /// Map anchor for the zone marker.
    pub coordinates: Coordinates,
    /// Backend user that flagged the zone.
    pub user_id: String,
}

/// Fields supplied when flagging a new risk zone.
///
/// `user_id` is stamped from the caller's identity at insert time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRiskZone {
    /// Area name or point.
    pub location: Location,
    /// Why the zone is flagged.
    pub description: String,
    /// Assessed risk level.
    pub risk_level: RiskLevel,
    /// Initial watch state.
    pub status: ZoneStatus,
    /// Map anchor for the zone marker.
    pub coordinates: Coordinates,
}

/// Partial update for a risk zone. Only set fields are sent to the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskZonePatch {
    /// New area name or point, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    /// New description, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New risk level, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<RiskLevel>,
    /// New watch state, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ZoneStatus>,
    /// New map anchor, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zone_decodes_with_text_location() {
        let json = r#"{
            "id": "z1",
            "location": "Border crossing east",
            "description": "Repeat trafficking indicators",
            "risk_level": "critical",
            "status": "active",
            "coordinates": {"lat": 13.75, "lng": 100.5},
            "user_id": "u-9"
        }"#;
        let zone: RiskZone = serde_json::from_str(json).unwrap();
        assert_eq!(zone.risk_level, RiskLevel::Critical);
        assert_eq!(zone.location, Location::text("Border crossing east"));
        assert!((zone.coordinates.lat - 13.75).abs() < f64::EPSILON);
    }

    #[test]
    fn zone_patch_carries_only_set_fields() {
        let patch = RiskZonePatch {
            status: Some(ZoneStatus::Cleared),
            ..RiskZonePatch::default()
        };
        assert_eq!(
            serde_json::to_string(&patch).unwrap(),
            "{\"status\":\"cleared\"}"
        );
    }
}
