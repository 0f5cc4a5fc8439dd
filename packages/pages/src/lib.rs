#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Server-rendered page components.
//!
//! Every page is a tree of Leptos components rendered to a complete HTML
//! document on the server. There is no hydration: interactivity is links,
//! query-string tabs, and plain form posts, with the map bootstrap as the
//! one scripted island.

pub mod components;
pub mod layout;
pub mod pages;

pub use pages::{
    AboutTab, CenterTab, DashboardData, DashboardTab, about_page, alert_center_page,
    alert_delete_page, alert_form_page, dashboard_page, home_page, not_found_page, report_page,
    report_submitted_page,
};

/// One queued notification, rendered as a toast in the page corner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Whether the underlying operation succeeded.
    pub success: bool,
    /// Toast headline.
    pub title: String,
    /// Toast body.
    pub body: String,
}

impl Toast {
    /// A success toast.
    #[must_use]
    pub fn success(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            success: true,
            title: title.into(),
            body: body.into(),
        }
    }

    /// A failure toast.
    #[must_use]
    pub fn failure(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            success: false,
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Renders a component tree to a complete HTML document.
pub(crate) fn render<N: leptos::IntoView>(f: impl FnOnce() -> N + 'static) -> String {
    format!("<!DOCTYPE html>{}", leptos::ssr::render_to_string(f))
}

/// Record timestamps as shown in tables and cards.
pub(crate) fn format_timestamp(at: chrono::DateTime<chrono::Utc>) -> String {
    at.format("%b %-d, %Y %H:%M UTC").to_string()
}
