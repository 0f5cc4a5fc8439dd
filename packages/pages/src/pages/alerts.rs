//! Alert center, alert form, and delete confirmation.

use guardian_analytics::{AlertSummary, AVG_RESPONSE_TIME};
use guardian_content::{ContentRegistry, FeedEntry};
use guardian_models::{Alert, AlertStatus, RiskLevel};
use leptos::*;

use crate::components::badges::{chip_label, severity_classes};
use crate::components::{Icon, StatusBadge, SystemBanner};
use crate::layout::Shell;
use crate::{Toast, format_timestamp, render};

/// Alert center filter selected by the `tab` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CenterTab {
    /// Every alert.
    #[default]
    All,
    /// Critical severity only.
    Critical,
    /// Active status only.
    Active,
    /// Resolved status only.
    Resolved,
}

impl CenterTab {
    const ALL: [Self; 4] = [Self::All, Self::Critical, Self::Active, Self::Resolved];

    /// Parses the `tab` query value, defaulting to the unfiltered view.
    #[must_use]
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some("critical") => Self::Critical,
            Some("active") => Self::Active,
            Some("resolved") => Self::Resolved,
            _ => Self::All,
        }
    }

    /// The `tab` query value for this filter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Critical => "critical",
            Self::Active => "active",
            Self::Resolved => "resolved",
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::All => "All Alerts",
            Self::Critical => "Critical",
            Self::Active => "Active",
            Self::Resolved => "Resolved",
        }
    }

    const fn admits(self, severity: RiskLevel, status: AlertStatus) -> bool {
        match self {
            Self::All => true,
            Self::Critical => matches!(severity, RiskLevel::Critical),
            Self::Active => matches!(status, AlertStatus::Active),
            Self::Resolved => matches!(status, AlertStatus::Resolved),
        }
    }
}

/// One card in the center list, sourced from either the live collection or
/// the illustrative feed.
struct CenterEntry {
    title: String,
    location: String,
    description: String,
    severity: RiskLevel,
    status: AlertStatus,
    time: String,
    distance: Option<String>,
    details_href: String,
    respond_href: String,
}

fn live_entry(alert: &Alert) -> CenterEntry {
    CenterEntry {
        title: alert.title.clone(),
        location: alert.location.display(),
        description: alert.description.clone(),
        severity: alert.risk_level,
        status: alert.status,
        time: format_timestamp(alert.created_at),
        distance: None,
        details_href: "/dashboard?tab=alerts".to_owned(),
        respond_href: format!("/alerts/{}/edit", alert.id),
    }
}

fn feed_entry(entry: &FeedEntry) -> CenterEntry {
    CenterEntry {
        title: entry.title.clone(),
        location: entry.location.clone(),
        description: entry.description.clone(),
        severity: entry.severity,
        status: entry.status,
        time: entry.time.clone(),
        distance: entry.distance.clone(),
        details_href: "/dashboard?tab=map".to_owned(),
        respond_href: "/report".to_owned(),
    }
}

/// Renders the alert center at the requested filter.
///
/// The live collection takes precedence; the illustrative feed fills the
/// list only while the mirror is empty.
#[must_use]
pub fn alert_center_page(
    content: &ContentRegistry,
    alerts: Vec<Alert>,
    tab: CenterTab,
    toasts: Vec<Toast>,
) -> String {
    let content = content.clone();
    render(move || {
        let site = content.site.clone();
        let banner = site.banners.alert_center.clone();
        let entries: Vec<CenterEntry> = if alerts.is_empty() {
            content.alert_feed.iter().map(feed_entry).collect()
        } else {
            alerts.iter().map(live_entry).collect()
        };
        let summary = AlertSummary::tally(entries.iter().map(|e| (e.severity, e.status)));
        let shown: Vec<CenterEntry> = entries
            .into_iter()
            .filter(|e| tab.admits(e.severity, e.status))
            .collect();
        view! {
            <Shell title="Alert Center | Guardian One" site=site toasts=toasts active="/alerts">
                <div class="container mx-auto px-4 py-8">
                    <div class="flex flex-col md:flex-row justify-between items-start md:items-center mb-6 gap-4">
                        <div>
                            <h1 class="text-3xl font-bold tracking-tight">"Alert Center"</h1>
                            <p class="text-gray-500">
                                "Monitor and respond to potential trafficking situations"
                            </p>
                        </div>
                        <a
                            href="/alerts/new"
                            class="inline-flex items-center gap-2 rounded-md bg-guardian-primary hover:bg-guardian-dark text-white px-4 py-2 text-sm font-medium"
                        >
                            <Icon name="bell" class="h-4 w-4"/>
                            "Configure Alerts"
                        </a>
                    </div>
                    <div class="mb-6">
                        <SystemBanner banner=banner/>
                    </div>
                    <SummaryCards summary=summary/>
                    <CenterTabs current=tab/>
                    <div class="space-y-4 mt-4">
                        {if shown.is_empty() {
                            view! {
                                <p class="text-sm text-gray-500 py-8 text-center">
                                    "No alerts in this view"
                                </p>
                            }
                            .into_view()
                        } else {
                            shown
                                .into_iter()
                                .map(|entry| view! { <CenterCard entry=entry/> })
                                .collect::<Vec<_>>()
                                .into_view()
                        }}
                    </div>
                </div>
            </Shell>
        }
    })
}

#[component]
fn SummaryCards(summary: AlertSummary) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-4 gap-4 mb-6">
            <div class="rounded-lg border bg-guardian-accent/10 border-guardian-accent/30 p-4">
                <div class="text-sm font-medium flex items-center gap-2 text-guardian-accent">
                    <Icon name="alert-circle" class="h-4 w-4"/>
                    <span>"Critical Alerts"</span>
                </div>
                <div class="text-2xl font-bold text-guardian-accent mt-3">{summary.critical}</div>
            </div>
            <div class="rounded-lg border bg-guardian-warning/10 border-guardian-warning/30 p-4">
                <div class="text-sm font-medium flex items-center gap-2 text-guardian-warning">
                    <Icon name="alert-triangle" class="h-4 w-4"/>
                    <span>"High Priority"</span>
                </div>
                <div class="text-2xl font-bold text-guardian-warning mt-3">
                    {summary.high_priority}
                </div>
            </div>
            <div class="rounded-lg border border-gray-200 bg-white p-4">
                <div class="text-sm font-medium flex items-center gap-2">
                    <Icon name="shield-alert" class="h-4 w-4 text-guardian-primary"/>
                    <span>"Active Cases"</span>
                </div>
                <div class="text-2xl font-bold mt-3">{summary.active}</div>
            </div>
            <div class="rounded-lg border border-gray-200 bg-white p-4">
                <div class="text-sm font-medium flex items-center gap-2">
                    <Icon name="clock" class="h-4 w-4 text-gray-500"/>
                    <span>"Avg. Response Time"</span>
                </div>
                <div class="text-2xl font-bold mt-3">{AVG_RESPONSE_TIME}</div>
            </div>
        </div>
    }
}

#[component]
fn CenterTabs(current: CenterTab) -> impl IntoView {
    view! {
        <div class="inline-flex items-center gap-1 rounded-lg bg-gray-100 p-1">
            {CenterTab::ALL
                .into_iter()
                .map(|tab| {
                    let classes = if tab == current {
                        "px-3 py-1.5 rounded-md text-sm font-medium bg-white shadow-sm"
                    } else {
                        "px-3 py-1.5 rounded-md text-sm font-medium text-gray-600 hover:text-gray-900"
                    };
                    view! {
                        <a href=format!("/alerts?tab={}", tab.as_str()) class=classes>
                            {tab.label()}
                        </a>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

#[component]
fn CenterCard(entry: CenterEntry) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg border border-gray-200 shadow-sm overflow-hidden">
            <div class=format!("h-1 {}", severity_classes(entry.severity))></div>
            <div class="p-4 md:p-6">
                <div class="flex flex-col md:flex-row gap-4 justify-between">
                    <div class="space-y-3 flex-1">
                        <div class="flex justify-between items-start">
                            <div class="space-y-1">
                                <h3 class="font-semibold text-lg">{entry.title}</h3>
                                <div class="flex items-center gap-2 text-sm text-gray-500">
                                    <Icon name="map-pin" class="h-3.5 w-3.5"/>
                                    <span>{entry.location}</span>
                                </div>
                            </div>
                            <StatusBadge status=entry.status/>
                        </div>
                        <p class="text-gray-500">{entry.description}</p>
                        <div class="flex flex-wrap items-center gap-x-4 gap-y-2 text-sm">
                            <div class="flex items-center gap-1 text-gray-500">
                                <Icon name="clock" class="h-3.5 w-3.5"/>
                                <span>{entry.time}</span>
                            </div>
                            {entry.distance.map(|distance| view! {
                                <div class="flex items-center gap-1 text-gray-500">
                                    <Icon name="map-pin" class="h-3.5 w-3.5"/>
                                    <span>{distance}</span>
                                </div>
                            })}
                        </div>
                    </div>
                    <div class="flex md:flex-col items-center gap-3">
                        <a
                            href=entry.details_href
                            class="w-full text-center rounded-md border border-gray-300 px-4 py-2 text-sm font-medium hover:bg-gray-50"
                        >
                            "Details"
                        </a>
                        <a
                            href=entry.respond_href
                            class="w-full inline-flex items-center justify-center rounded-md bg-guardian-primary hover:bg-guardian-dark text-white px-4 py-2 text-sm font-medium"
                        >
                            "Respond"
                            <Icon name="chevron-right" class="h-4 w-4 ml-1"/>
                        </a>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Renders the alert form, blank for create or pre-filled for edit.
#[must_use]
pub fn alert_form_page(
    content: &ContentRegistry,
    existing: Option<Alert>,
    toasts: Vec<Toast>,
) -> String {
    let content = content.clone();
    render(move || {
        let site = content.site.clone();
        let editing = existing.is_some();
        let action = existing.as_ref().map_or_else(
            || "/alerts/new".to_owned(),
            |alert| format!("/alerts/{}/edit", alert.id),
        );
        let heading = if editing { "Edit Alert" } else { "New Alert" };
        let submit = if editing { "Update Alert" } else { "Create Alert" };
        let title = existing.as_ref().map(|a| a.title.clone()).unwrap_or_default();
        let description = existing
            .as_ref()
            .map(|a| a.description.clone())
            .unwrap_or_default();
        let risk_level = existing
            .as_ref()
            .map_or(RiskLevel::Medium, |a| a.risk_level);
        let status = existing.as_ref().map_or(AlertStatus::Active, |a| a.status);
        let coords = existing.as_ref().and_then(|a| a.location.coordinates());
        let lat = coords.map_or_else(|| "0".to_owned(), |c| c.lat.to_string());
        let lng = coords.map_or_else(|| "0".to_owned(), |c| c.lng.to_string());
        view! {
            <Shell
                title=format!("{heading} | Guardian One")
                site=site
                toasts=toasts
                active="/alerts"
            >
                <div class="container mx-auto px-4 py-8 max-w-2xl">
                    <h1 class="text-3xl font-bold tracking-tight mb-6">{heading}</h1>
                    <div class="bg-white rounded-lg border border-gray-200 shadow-sm p-6">
                        <form method="post" action=action class="space-y-4">
                            <label class="block space-y-2">
                                <span class="text-sm font-medium">"Alert Title"</span>
                                <input
                                    name="title"
                                    value=title
                                    placeholder="Enter alert title"
                                    required
                                    class="w-full rounded-md border border-gray-300 px-3 py-2 text-sm"
                                />
                            </label>
                            <label class="block space-y-2">
                                <span class="text-sm font-medium">"Description"</span>
                                <textarea
                                    name="description"
                                    placeholder="Describe the alert"
                                    required
                                    rows="4"
                                    class="w-full rounded-md border border-gray-300 px-3 py-2 text-sm"
                                >
                                    {description}
                                </textarea>
                            </label>
                            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                                <label class="block space-y-2">
                                    <span class="text-sm font-medium">"Risk Level"</span>
                                    <select
                                        name="risk_level"
                                        class="w-full rounded-md border border-gray-300 px-3 py-2 text-sm bg-white"
                                    >
                                        {RiskLevel::all()
                                            .iter()
                                            .map(|&level| view! {
                                                <option
                                                    value=level.to_string()
                                                    selected=level == risk_level
                                                >
                                                    {chip_label(level.as_ref())}
                                                </option>
                                            })
                                            .collect::<Vec<_>>()}
                                    </select>
                                </label>
                                <label class="block space-y-2">
                                    <span class="text-sm font-medium">"Status"</span>
                                    <select
                                        name="status"
                                        class="w-full rounded-md border border-gray-300 px-3 py-2 text-sm bg-white"
                                    >
                                        {AlertStatus::all()
                                            .iter()
                                            .map(|&value| view! {
                                                <option
                                                    value=value.to_string()
                                                    selected=value == status
                                                >
                                                    {chip_label(value.as_ref())}
                                                </option>
                                            })
                                            .collect::<Vec<_>>()}
                                    </select>
                                </label>
                            </div>
                            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                                <label class="block space-y-2">
                                    <span class="text-sm font-medium">"Latitude"</span>
                                    <input
                                        name="lat"
                                        type="number"
                                        step="any"
                                        value=lat
                                        placeholder="Latitude"
                                        class="w-full rounded-md border border-gray-300 px-3 py-2 text-sm"
                                    />
                                </label>
                                <label class="block space-y-2">
                                    <span class="text-sm font-medium">"Longitude"</span>
                                    <input
                                        name="lng"
                                        type="number"
                                        step="any"
                                        value=lng
                                        placeholder="Longitude"
                                        class="w-full rounded-md border border-gray-300 px-3 py-2 text-sm"
                                    />
                                </label>
                            </div>
                            <div class="flex justify-end space-x-2 pt-4">
                                <a
                                    href="/dashboard?tab=alerts"
                                    class="rounded-md border border-gray-300 px-4 py-2 text-sm font-medium hover:bg-gray-50"
                                >
                                    "Cancel"
                                </a>
                                <button
                                    type="submit"
                                    class="rounded-md bg-guardian-primary hover:bg-guardian-dark text-white px-4 py-2 text-sm font-medium"
                                >
                                    {submit}
                                </button>
                            </div>
                        </form>
                    </div>
                </div>
            </Shell>
        }
    })
}

/// Renders the delete confirmation for one alert.
#[must_use]
pub fn alert_delete_page(content: &ContentRegistry, alert: Alert, toasts: Vec<Toast>) -> String {
    let content = content.clone();
    render(move || {
        let site = content.site.clone();
        let action = format!("/alerts/{}/delete", alert.id);
        view! {
            <Shell title="Confirm Deletion | Guardian One" site=site toasts=toasts active="/alerts">
                <div class="container mx-auto px-4 py-8 max-w-lg">
                    <div class="bg-white rounded-lg border border-gray-200 shadow-sm p-6">
                        <h1 class="text-xl font-semibold">"Confirm Deletion"</h1>
                        <p class="text-sm text-gray-500 mt-2">
                            "Are you sure you want to delete this alert? This action cannot be undone."
                        </p>
                        <div class="mt-4 rounded-md border border-gray-200 p-4">
                            <div class="font-medium">{alert.title}</div>
                            <div class="flex items-center gap-1 text-sm text-gray-500 mt-1">
                                <Icon name="map-pin" class="h-3.5 w-3.5"/>
                                <span>{alert.location.display()}</span>
                            </div>
                        </div>
                        <form method="post" action=action class="flex justify-end space-x-2 mt-6">
                            <a
                                href="/dashboard?tab=alerts"
                                class="rounded-md border border-gray-300 px-4 py-2 text-sm font-medium hover:bg-gray-50"
                            >
                                "Cancel"
                            </a>
                            <button
                                type="submit"
                                class="rounded-md bg-guardian-accent hover:bg-red-700 text-white px-4 py-2 text-sm font-medium"
                            >
                                "Delete Alert"
                            </button>
                        </form>
                    </div>
                </div>
            </Shell>
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabs_admit_by_severity_or_status() {
        assert!(CenterTab::All.admits(RiskLevel::Low, AlertStatus::Resolved));
        assert!(CenterTab::Critical.admits(RiskLevel::Critical, AlertStatus::Resolved));
        assert!(!CenterTab::Critical.admits(RiskLevel::High, AlertStatus::Active));
        assert!(CenterTab::Active.admits(RiskLevel::Low, AlertStatus::Active));
        assert!(!CenterTab::Resolved.admits(RiskLevel::Low, AlertStatus::Active));
    }

    #[test]
    fn tab_queries_round_trip() {
        for tab in CenterTab::ALL {
            assert_eq!(CenterTab::from_query(Some(tab.as_str())), tab);
        }
        assert_eq!(CenterTab::from_query(None), CenterTab::All);
        assert_eq!(CenterTab::from_query(Some("urgent")), CenterTab::All);
    }
}
