//! Shared building blocks used across the page views.

pub mod badges;
pub mod banners;
pub mod cards;
pub mod charts;
pub mod icons;

pub use badges::{SeverityBadge, StatusBadge};
pub use banners::SystemBanner;
pub use cards::{FeatureCard, LiveStatTile, StatTile};
pub use charts::{RegionsChart, ResponseChart, TrendsChart};
pub use icons::Icon;
