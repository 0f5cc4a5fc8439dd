#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Monitoring map view and marker lifecycle.
//!
//! The map itself renders in the browser. This crate owns everything the
//! server decides about it: the base view configuration, the set of markers
//! that should be on screen, and the detail panel opened by clicking a zone
//! marker. [`MarkerCanvas`] is the seam to the actual map surface so the
//! overlay logic stays testable without a browser.

use guardian_models::{Coordinates, RecordId, RiskLevel, RiskZone, ZoneStatus};
use serde::Serialize;

/// Base view configuration for the monitoring map.
///
/// Carried as data to the in-browser bootstrap, which applies it to the map
/// library verbatim.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    /// Map style name.
    pub style: &'static str,
    /// Projection, `"globe"` for the monitoring view.
    pub projection: &'static str,
    /// Initial center of the viewport.
    pub center: Coordinates,
    /// Initial zoom level.
    pub zoom: f64,
    /// Camera pitch in degrees.
    pub pitch: f64,
    /// Whether to show the navigation control (top right).
    pub nav_control: bool,
}

impl MapView {
    /// The global monitoring view: dark style, globe projection, pulled back
    /// far enough to show every monitored region at once.
    #[must_use]
    pub const fn monitoring() -> Self {
        Self {
            style: "dark-v11",
            projection: "globe",
            center: Coordinates::new(15.0, 30.0),
            zoom: 1.5,
            pitch: 45.0,
            nav_control: true,
        }
    }
}

impl Default for MapView {
    fn default() -> Self {
        Self::monitoring()
    }
}

/// A single marker to place on the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    /// Stable identifier, used to resolve clicks back to a record.
    pub id: String,
    /// Label shown in the marker popup.
    pub title: String,
    /// Where the marker sits.
    pub coordinates: Coordinates,
    /// Drives the marker color.
    pub risk_level: RiskLevel,
}

/// Opaque handle to a marker previously added to a canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerHandle(u64);

impl MarkerHandle {
    /// Wraps a raw canvas-assigned handle value.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw handle value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// The surface markers are placed on.
///
/// Production uses [`MarkerSet`], which the page embed and
/// `GET /api/map/markers` read from. Tests substitute recording
/// implementations to observe marker churn.
pub trait MarkerCanvas {
    /// Places a marker and returns a handle for later removal.
    fn add_marker(&mut self, marker: &Marker) -> MarkerHandle;

    /// Removes a previously placed marker. Unknown handles are ignored.
    fn remove_marker(&mut self, handle: MarkerHandle);
}

/// Canvas implementation that simply holds the current marker set.
///
/// Iteration order is insertion order, so the serialized payload is stable
/// across refreshes.
#[derive(Debug, Default)]
pub struct MarkerSet {
    markers: Vec<(MarkerHandle, Marker)>,
    next: u64,
}

impl MarkerSet {
    /// Creates an empty marker set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            markers: Vec::new(),
            next: 0,
        }
    }

    /// Markers currently on the canvas, oldest first.
    pub fn markers(&self) -> impl Iterator<Item = &Marker> {
        self.markers.iter().map(|(_, marker)| marker)
    }

    /// Number of markers currently on the canvas.
    #[must_use]
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// Whether the canvas is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

impl MarkerCanvas for MarkerSet {
    fn add_marker(&mut self, marker: &Marker) -> MarkerHandle {
        let handle = MarkerHandle::new(self.next);
        self.next += 1;
        self.markers.push((handle, marker.clone()));
        handle
    }

    fn remove_marker(&mut self, handle: MarkerHandle) {
        self.markers.retain(|(h, _)| *h != handle);
    }
}

/// Detail panel state for a clicked zone marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneDetail {
    /// The zone record id.
    pub id: RecordId,
    /// Area name or point, rendered for display.
    pub location: String,
    /// Why the zone is flagged.
    pub description: String,
    /// Assessed risk level.
    pub risk_level: RiskLevel,
    /// Current watch state.
    pub status: ZoneStatus,
}

impl From<&RiskZone> for ZoneDetail {
    fn from(zone: &RiskZone) -> Self {
        Self {
            id: zone.id.clone(),
            location: zone.location.display(),
            description: zone.description.clone(),
            risk_level: zone.risk_level,
            status: zone.status,
        }
    }
}

struct ZoneMarker {
    handle: MarkerHandle,
    marker: Marker,
    zone: RiskZone,
}

/// Keeps the map canvas in sync with the risk-zone collection.
///
/// Fixed illustrative markers are mounted once; zone markers are refreshed
/// by removing every previously inserted one and reinserting the current
/// set. No diffing, a full refresh is linear in the marker count and the
/// map never shows more than a few dozen.
pub struct ZoneOverlay<C: MarkerCanvas> {
    canvas: C,
    view: MapView,
    fixed: Vec<(MarkerHandle, Marker)>,
    zones: Vec<ZoneMarker>,
    selected: Option<ZoneDetail>,
}

impl<C: MarkerCanvas> ZoneOverlay<C> {
    /// Creates an overlay over `canvas` with the standard monitoring view.
    pub const fn new(canvas: C) -> Self {
        Self::with_view(canvas, MapView::monitoring())
    }

    /// Creates an overlay over `canvas` with an explicit view.
    pub const fn with_view(canvas: C, view: MapView) -> Self {
        Self {
            canvas,
            view,
            fixed: Vec::new(),
            zones: Vec::new(),
            selected: None,
        }
    }

    /// Places the fixed illustrative markers.
    ///
    /// Calling again replaces the previous fixed set, so a remount is safe.
    pub fn mount(&mut self, markers: &[Marker]) {
        for (handle, _) in self.fixed.drain(..) {
            self.canvas.remove_marker(handle);
        }
        for marker in markers {
            let handle = self.canvas.add_marker(marker);
            self.fixed.push((handle, marker.clone()));
        }
        log::debug!("mounted {} fixed markers", self.fixed.len());
    }

    /// Refreshes zone markers from the current collection contents.
    ///
    /// Every previously inserted zone marker is removed and the current set
    /// reinserted. If a zone was selected, the selection follows the record:
    /// refreshed when the zone is still present, cleared when it is gone.
    pub fn sync(&mut self, zones: &[RiskZone]) {
        for zone_marker in self.zones.drain(..) {
            self.canvas.remove_marker(zone_marker.handle);
        }
        for zone in zones {
            let marker = Marker {
                id: zone.id.as_str().to_owned(),
                title: zone.location.display(),
                coordinates: zone.coordinates,
                risk_level: zone.risk_level,
            };
            let handle = self.canvas.add_marker(&marker);
            self.zones.push(ZoneMarker {
                handle,
                marker,
                zone: zone.clone(),
            });
        }
        log::debug!("synced {} zone markers", self.zones.len());

        if let Some(selected) = self.selected.take() {
            self.selected = self
                .zones
                .iter()
                .find(|zm| zm.zone.id == selected.id)
                .map(|zm| ZoneDetail::from(&zm.zone));
        }
    }

    /// Resolves a marker click into the detail panel.
    ///
    /// Returns the opened detail for a zone marker. Fixed markers and
    /// unknown ids resolve to `None` and leave any open panel alone.
    pub fn select(&mut self, marker_id: &str) -> Option<&ZoneDetail> {
        let detail = self
            .zones
            .iter()
            .find(|zm| zm.marker.id == marker_id)
            .map(|zm| ZoneDetail::from(&zm.zone))?;
        self.selected = Some(detail);
        self.selected.as_ref()
    }

    /// Closes the detail panel.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// The currently open detail panel, if any.
    #[must_use]
    pub const fn selected(&self) -> Option<&ZoneDetail> {
        self.selected.as_ref()
    }

    /// The base view configuration.
    #[must_use]
    pub const fn view(&self) -> &MapView {
        &self.view
    }

    /// The underlying canvas.
    #[must_use]
    pub const fn canvas(&self) -> &C {
        &self.canvas
    }

    /// Total markers currently placed, fixed plus zones.
    #[must_use]
    pub fn marker_count(&self) -> usize {
        self.fixed.len() + self.zones.len()
    }

    /// Serializes the view and current marker set for the browser bootstrap.
    ///
    /// # Errors
    ///
    /// * If the payload fails to serialize
    pub fn marker_payload(&self) -> Result<String, serde_json::Error> {
        #[derive(Serialize)]
        struct Payload<'a> {
            view: &'a MapView,
            markers: Vec<&'a Marker>,
        }

        let markers = self
            .fixed
            .iter()
            .map(|(_, marker)| marker)
            .chain(self.zones.iter().map(|zm| &zm.marker))
            .collect();

        serde_json::to_string(&Payload {
            view: &self.view,
            markers,
        })
    }
}

#[cfg(test)]
mod tests {
    use guardian_models::Location;

    use super::*;

    /// Canvas that records every add and remove for assertions.
    #[derive(Default)]
    struct RecordingCanvas {
        next: u64,
        added: Vec<(MarkerHandle, Marker)>,
        removed: Vec<MarkerHandle>,
    }

    impl MarkerCanvas for RecordingCanvas {
        fn add_marker(&mut self, marker: &Marker) -> MarkerHandle {
            let handle = MarkerHandle::new(self.next);
            self.next += 1;
            self.added.push((handle, marker.clone()));
            handle
        }

        fn remove_marker(&mut self, handle: MarkerHandle) {
            self.removed.push(handle);
        }
    }

    fn zone(id: &str, location: &str, level: RiskLevel) -> RiskZone {
        RiskZone {
            id: RecordId::from(id),
            location: Location::text(location),
            description: format!("{location} under watch"),
            risk_level: level,
            status: ZoneStatus::Active,
            coordinates: Coordinates::new(13.75, 100.5),
            user_id: "service".to_owned(),
        }
    }

    fn fixed_marker(id: &str) -> Marker {
        Marker {
            id: id.to_owned(),
            title: "Bangkok, Thailand".to_owned(),
            coordinates: Coordinates::new(13.75, 100.5),
            risk_level: RiskLevel::Critical,
        }
    }

    #[test]
    fn mount_places_each_fixed_marker_once() {
        let mut overlay = ZoneOverlay::new(RecordingCanvas::default());
        overlay.mount(&[fixed_marker("monitor-1"), fixed_marker("monitor-2")]);

        assert_eq!(overlay.canvas().added.len(), 2);
        assert!(overlay.canvas().removed.is_empty());
        assert_eq!(overlay.marker_count(), 2);
    }

    #[test]
    fn remount_replaces_previous_fixed_markers() {
        let mut overlay = ZoneOverlay::new(RecordingCanvas::default());
        overlay.mount(&[fixed_marker("monitor-1")]);
        overlay.mount(&[fixed_marker("monitor-1"), fixed_marker("monitor-2")]);

        assert_eq!(overlay.canvas().removed.len(), 1);
        assert_eq!(overlay.marker_count(), 2);
    }

    #[test]
    fn sync_clears_and_reinserts_every_zone_marker() {
        let mut overlay = ZoneOverlay::new(RecordingCanvas::default());
        overlay.sync(&[zone("z1", "Bangkok", RiskLevel::High)]);
        let first_pass = overlay.canvas().added.len();
        assert_eq!(first_pass, 1);

        overlay.sync(&[
            zone("z1", "Bangkok", RiskLevel::High),
            zone("z2", "Lagos", RiskLevel::Medium),
        ]);

        // The unchanged z1 marker was still removed and reinserted.
        assert_eq!(overlay.canvas().removed.len(), 1);
        assert_eq!(overlay.canvas().added.len(), 3);
        assert_eq!(overlay.marker_count(), 2);
    }

    #[test]
    fn sync_leaves_fixed_markers_alone() {
        let mut overlay = ZoneOverlay::new(RecordingCanvas::default());
        overlay.mount(&[fixed_marker("monitor-1")]);
        overlay.sync(&[zone("z1", "Bangkok", RiskLevel::High)]);
        overlay.sync(&[]);

        let mounted = overlay.canvas().added[0].0;
        assert!(!overlay.canvas().removed.contains(&mounted));
        assert_eq!(overlay.marker_count(), 1);
    }

    #[test]
    fn selecting_a_zone_marker_opens_its_detail() {
        let mut overlay = ZoneOverlay::new(MarkerSet::new());
        overlay.sync(&[zone("z1", "Border crossing east", RiskLevel::Critical)]);

        let detail = overlay.select("z1").cloned().unwrap();
        assert_eq!(detail.id, RecordId::from("z1"));
        assert_eq!(detail.location, "Border crossing east");
        assert_eq!(detail.risk_level, RiskLevel::Critical);
        assert_eq!(overlay.selected(), Some(&detail));
    }

    #[test]
    fn selecting_an_unknown_marker_keeps_the_open_panel() {
        let mut overlay = ZoneOverlay::new(MarkerSet::new());
        overlay.mount(&[fixed_marker("monitor-1")]);
        overlay.sync(&[zone("z1", "Bangkok", RiskLevel::High)]);
        overlay.select("z1").unwrap();

        assert!(overlay.select("monitor-1").is_none());
        assert!(overlay.select("nope").is_none());
        assert_eq!(overlay.selected().unwrap().id, RecordId::from("z1"));
    }

    #[test]
    fn selection_follows_the_record_across_syncs() {
        let mut overlay = ZoneOverlay::new(MarkerSet::new());
        overlay.sync(&[zone("z1", "Bangkok", RiskLevel::High)]);
        overlay.select("z1").unwrap();

        let mut updated = zone("z1", "Bangkok", RiskLevel::High);
        updated.status = ZoneStatus::Monitoring;
        overlay.sync(&[updated]);
        assert_eq!(overlay.selected().unwrap().status, ZoneStatus::Monitoring);

        overlay.sync(&[]);
        assert!(overlay.selected().is_none());
    }

    #[test]
    fn clear_selection_closes_the_panel() {
        let mut overlay = ZoneOverlay::new(MarkerSet::new());
        overlay.sync(&[zone("z1", "Bangkok", RiskLevel::High)]);
        overlay.select("z1").unwrap();
        overlay.clear_selection();
        assert!(overlay.selected().is_none());
    }

    #[test]
    fn zone_marker_title_renders_point_locations() {
        let mut overlay = ZoneOverlay::new(MarkerSet::new());
        let mut z = zone("z1", "unused", RiskLevel::Low);
        z.location = Location::point(6.5244, 3.3792);
        overlay.sync(&[z]);

        let marker = overlay.canvas().markers().next().unwrap();
        assert_eq!(marker.title, "6.52, 3.38");
    }

    #[test]
    fn payload_carries_view_and_all_markers() {
        let mut overlay = ZoneOverlay::new(MarkerSet::new());
        overlay.mount(&[fixed_marker("monitor-1")]);
        overlay.sync(&[zone("z1", "Bangkok", RiskLevel::High)]);

        let payload: serde_json::Value =
            serde_json::from_str(&overlay.marker_payload().unwrap()).unwrap();
        assert_eq!(payload["view"]["projection"], "globe");
        assert_eq!(payload["view"]["zoom"], 1.5);
        assert_eq!(payload["view"]["center"]["lng"], 30.0);
        let markers = payload["markers"].as_array().unwrap();
        assert_eq!(markers.len(), 2);
        assert_eq!(markers[0]["id"], "monitor-1");
        assert_eq!(markers[1]["id"], "z1");
        assert_eq!(markers[1]["risk_level"], "high");
    }

    #[test]
    fn marker_set_removes_by_handle() {
        let mut set = MarkerSet::new();
        let a = set.add_marker(&fixed_marker("a"));
        let _b = set.add_marker(&fixed_marker("b"));
        set.remove_marker(a);

        assert_eq!(set.len(), 1);
        assert_eq!(set.markers().next().unwrap().id, "b");
    }
}
