//! Location handling shared by all record kinds.
//!
//! The backend stores locations in two shapes: a free-text place name
//! (`"Lagos, Nigeria"`) or a coordinate pair (`{"lat": 6.52, "lng": 3.38}`).
//! [`Location`] captures that choice once so every consumer matches on it
//! instead of re-sniffing JSON shapes.

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in WGS84 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in degrees, -90 to 90.
    pub lat: f64,
    /// Longitude in degrees, -180 to 180.
    pub lng: f64,
}

impl Coordinates {
    /// Creates a coordinate pair.
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Whether both components are inside their valid WGS84 ranges.
    #[must_use]
    pub fn in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }
}

/// Where a record refers to: either a named place or an exact point.
///
/// Serialization is untagged to match the backend's storage: `Text`
/// round-trips as a bare JSON string, `Point` as a `{lat, lng}` object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Location {
    /// An exact coordinate pair.
    Point(Coordinates),
    /// A free-text place name.
    Text(String),
}

impl Location {
    /// Creates a point location.
    #[must_use]
    pub const fn point(lat: f64, lng: f64) -> Self {
        Self::Point(Coordinates::new(lat, lng))
    }

    /// Creates a text location.
    #[must_use]
    pub fn text(name: impl Into<String>) -> Self {
        Self::Text(name.into())
    }

    /// Returns the coordinates if this location is a point.
    #[must_use]
    pub const fn coordinates(&self) -> Option<Coordinates> {
        match self {
            Self::Point(coords) => Some(*coords),
            Self::Text(_) => None,
        }
    }

    /// Human-readable rendering: the place name verbatim, or the point as
    /// `"lat, lng"` with two decimals.
    #[must_use]
    pub fn display(&self) -> String {
        match self {
            Self::Point(coords) => format!("{:.2}, {:.2}", coords.lat, coords.lng),
            Self::Text(name) => name.clone(),
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_location_roundtrips_as_bare_string() {
        let loc = Location::text("Lagos, Nigeria");
        let json = serde_json::to_string(&loc).unwrap();
        assert_eq!(json, "\"Lagos, Nigeria\"");
        let back: Location = serde_json::from_str(&json).unwrap();
        assert_eq!(back, loc);
    }

    #[test]
    fn point_location_roundtrips_as_object() {
        let loc = Location::point(6.5244, 3.3792);
        let json = serde_json::to_string(&loc).unwrap();
        let back: Location = serde_json::from_str(&json).unwrap();
        assert_eq!(back, loc);
        assert!(json.contains("\"lat\""));
        assert!(json.contains("\"lng\""));
    }

    #[test]
    fn point_display_uses_two_decimals() {
        let loc = Location::point(6.5244, 3.3792);
        assert_eq!(loc.display(), "6.52, 3.38");
    }

    #[test]
    fn text_display_is_verbatim() {
        assert_eq!(Location::text("Manila").display(), "Manila");
    }

    #[test]
    fn coordinates_range_check() {
        assert!(Coordinates::new(1.0, 2.0).in_range());
        assert!(!Coordinates::new(91.0, 0.0).in_range());
        assert!(!Coordinates::new(0.0, -181.0).in_range());
    }
}
