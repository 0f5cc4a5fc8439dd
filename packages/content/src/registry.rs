//! Content registry loading all site content from embedded TOML configs.
//!
//! Each `.toml` file in `packages/content/content/` is baked into the
//! binary at compile time via [`include_str!`]. Editing copy means editing
//! a config and rebuilding; the page code never changes.

use serde::Deserialize;

use crate::{
    ActivityEntry, Feature, FeedEntry, LiveStatCard, MapMarker, SiteContent, StatCard,
    UpcomingEvent,
};

const SITE_TOML: &str = include_str!("../content/site.toml");
const FEATURES_TOML: &str = include_str!("../content/features.toml");
const STATS_TOML: &str = include_str!("../content/stats.toml");
const ALERT_FEED_TOML: &str = include_str!("../content/alert_feed.toml");
const DASHBOARD_TOML: &str = include_str!("../content/dashboard.toml");
const MARKERS_TOML: &str = include_str!("../content/markers.toml");

#[derive(Deserialize)]
struct FeaturesFile {
    features: Vec<Feature>,
}

#[derive(Deserialize)]
struct StatsFile {
    impact: Vec<StatCard>,
}

#[derive(Deserialize)]
struct FeedFile {
    entries: Vec<FeedEntry>,
}

#[derive(Deserialize)]
struct DashboardFile {
    active_alerts: LiveStatCard,
    stats: Vec<StatCard>,
    activity: Vec<ActivityEntry>,
    events: Vec<UpcomingEvent>,
}

#[derive(Deserialize)]
struct MarkersFile {
    markers: Vec<MapMarker>,
}

/// Everything the pages render that is not backed by live records.
#[derive(Debug, Clone)]
pub struct ContentRegistry {
    /// Brand, navigation, footer, banners.
    pub site: SiteContent,
    /// Home page feature cards.
    pub features: Vec<Feature>,
    /// Home page impact stat cards.
    pub impact_stats: Vec<StatCard>,
    /// Framing for the live active-alerts dashboard card.
    pub active_alerts_card: LiveStatCard,
    /// Fixed-value dashboard stat cards.
    pub dashboard_stats: Vec<StatCard>,
    /// Illustrative alert feed for the alert center.
    pub alert_feed: Vec<FeedEntry>,
    /// Dashboard recent-activity entries.
    pub recent_activity: Vec<ActivityEntry>,
    /// Dashboard upcoming events.
    pub upcoming_events: Vec<UpcomingEvent>,
    /// Fixed monitoring markers for the global map.
    pub map_markers: Vec<MapMarker>,
}

fn parse<T: for<'de> Deserialize<'de>>(name: &str, toml_str: &str) -> T {
    toml::de::from_str(toml_str).unwrap_or_else(|e| panic!("Failed to parse {name}.toml: {e}"))
}

impl ContentRegistry {
    /// Parses all embedded configs.
    ///
    /// # Panics
    ///
    /// Panics if any embedded TOML is malformed or a marker sits outside
    /// valid coordinate ranges. The configs are embedded, so this can only
    /// fire on a bad edit and is caught by the first boot or test run.
    #[must_use]
    pub fn load() -> Self {
        let site: SiteContent = parse("site", SITE_TOML);
        let features = parse::<FeaturesFile>("features", FEATURES_TOML).features;
        let impact_stats = parse::<StatsFile>("stats", STATS_TOML).impact;
        let dashboard = parse::<DashboardFile>("dashboard", DASHBOARD_TOML);
        let alert_feed = parse::<FeedFile>("alert_feed", ALERT_FEED_TOML).entries;
        let markers = parse::<MarkersFile>("markers", MARKERS_TOML).markers;

        for marker in &markers {
            assert!(
                guardian_models::Coordinates::new(marker.lat, marker.lng).in_range(),
                "markers.toml: {} is outside coordinate range",
                marker.id
            );
        }

        Self {
            site,
            features,
            impact_stats,
            active_alerts_card: dashboard.active_alerts,
            dashboard_stats: dashboard.stats,
            alert_feed,
            recent_activity: dashboard.activity,
            upcoming_events: dashboard.events,
            map_markers: markers,
        }
    }
}
