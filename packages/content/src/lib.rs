#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Embedded site content.
//!
//! Everything the pages render that is not backed by live records lives in
//! TOML configs baked into the binary at compile time. Changing marketing
//! copy, the illustrative alert feed, or the fixed map markers is an edit
//! to a config file, not to page code.

pub mod registry;

use guardian_models::{AlertStatus, RiskLevel};
use serde::Deserialize;

pub use registry::ContentRegistry;

/// A navigation or footer link.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SiteLink {
    /// Link text.
    pub label: String,
    /// Target path.
    pub path: String,
}

/// A titled group of footer links.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FooterGroup {
    /// Group heading.
    pub title: String,
    /// Links in the group.
    pub links: Vec<SiteLink>,
}

/// Brand identity strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Brand {
    /// Display name.
    pub name: String,
    /// One-line mission statement shown in the footer.
    pub tagline: String,
    /// Closing strap next to the footer heart.
    pub strap: String,
}

/// Visual treatment of a system banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BannerVariant {
    /// Informational, primary palette.
    Default,
    /// Critical, accent palette.
    Destructive,
    /// Caution, warning palette.
    Warning,
    /// Positive, success palette.
    Success,
}

/// A standing system banner.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Banner {
    /// Banner heading.
    pub title: String,
    /// Banner body.
    pub description: String,
    /// Visual treatment.
    pub variant: BannerVariant,
}

/// The three standing banners, one per page that shows one.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Banners {
    /// Home page banner.
    pub home: Banner,
    /// Dashboard banner.
    pub dashboard: Banner,
    /// Alert center banner.
    pub alert_center: Banner,
}

/// Site chrome: brand, navigation, footer, banners.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SiteContent {
    /// Brand identity.
    pub brand: Brand,
    /// Header navigation links, in order.
    pub nav: Vec<SiteLink>,
    /// Footer link groups, in order.
    pub footer_groups: Vec<FooterGroup>,
    /// Standing system banners.
    pub banners: Banners,
}

/// One platform feature card on the home page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Feature {
    /// Card heading.
    pub title: String,
    /// Card body.
    pub description: String,
    /// Icon name.
    pub icon: String,
}

/// Direction of a stat trend indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    /// Value rising.
    Up,
    /// Value falling.
    Down,
    /// No movement.
    Neutral,
}

/// A stat card trend line.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Trend {
    /// Which way the stat is moving.
    pub direction: TrendDirection,
    /// Trend text, shown next to the arrow.
    pub value: String,
}

/// A stat card with a fixed value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatCard {
    /// Card heading.
    pub title: String,
    /// Headline figure.
    pub value: String,
    /// Icon name.
    pub icon: String,
    /// Supporting line under the figure.
    pub description: String,
    /// Optional trend indicator.
    #[serde(default)]
    pub trend: Option<Trend>,
}

/// Framing for a stat card whose value comes from live records.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LiveStatCard {
    /// Card heading.
    pub title: String,
    /// Icon name.
    pub icon: String,
    /// Supporting line under the figure.
    pub description: String,
    /// Optional trend indicator.
    #[serde(default)]
    pub trend: Option<Trend>,
}

/// One entry in the illustrative alert feed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FeedEntry {
    /// Stable feed position id.
    pub id: u32,
    /// Alert headline.
    pub title: String,
    /// Where it happened.
    pub location: String,
    /// What was detected.
    pub description: String,
    /// Severity, reusing the record risk taxonomy.
    pub severity: RiskLevel,
    /// Handling state, reusing the record status taxonomy.
    pub status: AlertStatus,
    /// Relative time label.
    pub time: String,
    /// Distance from the monitoring center, when known.
    #[serde(default)]
    pub distance: Option<String>,
}

/// One entry in the dashboard recent-activity feed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ActivityEntry {
    /// Region the activity was seen in.
    pub region: String,
    /// Assessed risk level.
    pub level: RiskLevel,
    /// What was detected.
    pub description: String,
    /// Relative time label.
    pub time: String,
}

/// A scheduled operation or maintenance window.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpcomingEvent {
    /// Event name.
    pub title: String,
    /// Where and when.
    pub detail: String,
    /// Icon name.
    pub icon: String,
}

/// A fixed monitoring marker on the global map.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MapMarker {
    /// Stable marker id.
    pub id: String,
    /// Popup label.
    pub title: String,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
    /// Drives the marker color.
    pub risk_level: RiskLevel,
}
