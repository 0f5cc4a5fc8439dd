//! Dashboard: overview stats, live alert management, analytics, global map.

use guardian_analytics::{
    active_alert_count, alert_trends, regional_distribution, response_times, risk_distribution,
    status_breakdown,
};
use guardian_content::{ActivityEntry, ContentRegistry, LiveStatCard, StatCard, UpcomingEvent};
use guardian_map::ZoneDetail;
use guardian_models::{Alert, RiskLevel, RiskZone};
use leptos::*;

use crate::components::badges::chip_label;
use crate::components::{
    Icon, LiveStatTile, RegionsChart, ResponseChart, SeverityBadge, StatTile, StatusBadge,
    SystemBanner, TrendsChart,
};
use crate::layout::Shell;
use crate::{Toast, format_timestamp, render};

/// Dashboard tab selected by the `tab` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardTab {
    /// Stat cards, recent activity, upcoming events.
    #[default]
    Overview,
    /// Live alert management table.
    Alerts,
    /// Chart series and live counters.
    Analytics,
    /// Global monitoring map.
    Map,
}

impl DashboardTab {
    const ALL: [Self; 4] = [Self::Overview, Self::Alerts, Self::Analytics, Self::Map];

    /// Parses the `tab` query value, defaulting to the overview.
    #[must_use]
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some("alerts") => Self::Alerts,
            Some("analytics") => Self::Analytics,
            Some("map") => Self::Map,
            _ => Self::Overview,
        }
    }

    /// The `tab` query value for this tab.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Alerts => "alerts",
            Self::Analytics => "analytics",
            Self::Map => "map",
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Alerts => "Active Alerts",
            Self::Analytics => "Analytics",
            Self::Map => "Global Map",
        }
    }
}

/// Live state the dashboard renders.
#[derive(Debug, Clone, Default)]
pub struct DashboardData {
    /// Selected tab.
    pub tab: DashboardTab,
    /// Mirrored alert collection.
    pub alerts: Vec<Alert>,
    /// Mirrored risk zone collection.
    pub zones: Vec<RiskZone>,
    /// Serialized view and marker payload for the map bootstrap.
    pub map_payload: String,
    /// Detail panel for the selected zone marker, when one is open.
    pub selected: Option<ZoneDetail>,
}

/// Renders the dashboard at the requested tab.
#[must_use]
pub fn dashboard_page(content: &ContentRegistry, data: DashboardData, toasts: Vec<Toast>) -> String {
    let content = content.clone();
    render(move || {
        let site = content.site.clone();
        let banner = site.banners.dashboard.clone();
        view! {
            <Shell title="Dashboard | Guardian One" site=site toasts=toasts active="/dashboard">
                <div class="container mx-auto px-4 py-8">
                    <h1 class="text-3xl font-bold tracking-tight mb-6">"Dashboard"</h1>
                    <div class="mb-6">
                        <SystemBanner banner=banner/>
                    </div>
                    <div class="flex flex-wrap justify-between items-center gap-4 mb-6">
                        <TabSwitcher current=data.tab/>
                        <a
                            href="/alerts/new"
                            class="inline-flex items-center gap-2 rounded-md bg-guardian-primary hover:bg-guardian-dark text-white px-4 py-2 text-sm font-medium"
                        >
                            <Icon name="bell" class="h-4 w-4"/>
                            "New Alert"
                        </a>
                    </div>
                    {tab_body(&content, data)}
                </div>
            </Shell>
        }
    })
}

fn tab_body(content: &ContentRegistry, data: DashboardData) -> View {
    match data.tab {
        DashboardTab::Overview => {
            let active = active_alert_count(&data.alerts);
            view! {
                <OverviewTab
                    card=content.active_alerts_card.clone()
                    active=active
                    stats=content.dashboard_stats.clone()
                    activity=content.recent_activity.clone()
                    events=content.upcoming_events.clone()
                />
            }
            .into_view()
        }
        DashboardTab::Alerts => view! { <AlertsTab alerts=data.alerts/> }.into_view(),
        DashboardTab::Analytics => {
            view! { <AnalyticsTab alerts=data.alerts zones=data.zones/> }.into_view()
        }
        DashboardTab::Map => view! {
            <MapTab payload=data.map_payload zones=data.zones selected=data.selected/>
        }
        .into_view(),
    }
}

#[component]
fn TabSwitcher(current: DashboardTab) -> impl IntoView {
    view! {
        <div class="inline-flex items-center gap-1 rounded-lg bg-gray-100 p-1">
            {DashboardTab::ALL
                .into_iter()
                .map(|tab| {
                    let classes = if tab == current {
                        "px-3 py-1.5 rounded-md text-sm font-medium bg-white shadow-sm"
                    } else {
                        "px-3 py-1.5 rounded-md text-sm font-medium text-gray-600 hover:text-gray-900"
                    };
                    view! {
                        <a href=format!("/dashboard?tab={}", tab.as_str()) class=classes>
                            {tab.label()}
                        </a>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

#[component]
fn OverviewTab(
    card: LiveStatCard,
    active: usize,
    stats: Vec<StatCard>,
    activity: Vec<ActivityEntry>,
    events: Vec<UpcomingEvent>,
) -> impl IntoView {
    view! {
        <div class="space-y-6">
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                <LiveStatTile card=card value=active.to_string()/>
                {stats
                    .into_iter()
                    .map(|card| view! { <StatTile card=card/> })
                    .collect::<Vec<_>>()}
            </div>
            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                <div class="lg:col-span-2 bg-white rounded-lg border border-gray-200 shadow-sm">
                    <div class="p-6 border-b border-gray-100">
                        <h2 class="text-lg font-semibold">"Recent Activity"</h2>
                        <p class="text-sm text-gray-500">"System-wide alerts and notifications"</p>
                    </div>
                    <div class="p-6 space-y-4">
                        {activity
                            .into_iter()
                            .map(|entry| view! { <ActivityRow entry=entry/> })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
                <div class="bg-white rounded-lg border border-gray-200 shadow-sm">
                    <div class="p-6 border-b border-gray-100">
                        <h2 class="text-lg font-semibold">"Upcoming Events"</h2>
                        <p class="text-sm text-gray-500">"Scheduled operations and maintenance"</p>
                    </div>
                    <div class="p-6 space-y-4">
                        {events
                            .into_iter()
                            .map(|event| view! {
                                <div class="flex items-start gap-3 p-3 rounded-lg border border-gray-200">
                                    <Icon
                                        name=event.icon
                                        class="h-5 w-5 text-guardian-primary mt-0.5"
                                    />
                                    <div>
                                        <h4 class="font-medium text-sm">{event.title}</h4>
                                        <p class="text-xs text-gray-500">{event.detail}</p>
                                    </div>
                                </div>
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </div>
        </div>
    }
}

const fn activity_tint(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::High | RiskLevel::Critical => "bg-guardian-accent/15 text-guardian-accent",
        RiskLevel::Medium => "bg-guardian-warning/15 text-guardian-warning",
        RiskLevel::Low => "bg-guardian-primary/15 text-guardian-primary",
    }
}

#[component]
fn ActivityRow(entry: ActivityEntry) -> impl IntoView {
    let tint = activity_tint(entry.level);
    let chip = format!("{} Risk", chip_label(entry.level.as_ref()));
    view! {
        <div class="flex items-start gap-4 p-4 rounded-lg border border-gray-200">
            <div class=format!("p-2 rounded-full {tint}")>
                <Icon name="alert-circle"/>
            </div>
            <div class="flex-1">
                <div class="flex justify-between items-start">
                    <h4 class="font-medium">{entry.region}</h4>
                    <span class=format!("text-xs px-2 py-1 rounded-full {tint}")>{chip}</span>
                </div>
                <p class="text-sm text-gray-500 mt-1">{entry.description}</p>
                <div class="flex justify-between items-center mt-2">
                    <span class="text-xs text-gray-500">{entry.time}</span>
                    <a href="/alerts" class="text-sm text-guardian-primary hover:underline">
                        "View Details"
                    </a>
                </div>
            </div>
        </div>
    }
}

#[component]
fn AlertsTab(alerts: Vec<Alert>) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg border border-gray-200 shadow-sm">
            <div class="p-6 border-b border-gray-100">
                <h2 class="text-lg font-semibold">"Active Alerts"</h2>
                <p class="text-sm text-gray-500">"Real-time monitoring of high-risk situations"</p>
            </div>
            <div class="p-6 overflow-x-auto">
                <table class="w-full text-left border border-gray-200 rounded-md">
                    <thead class="bg-gray-50 text-sm text-gray-600">
                        <tr>
                            <th class="px-4 py-3 w-1/3 font-medium">"Title & Location"</th>
                            <th class="px-4 py-3 font-medium">"Description"</th>
                            <th class="px-4 py-3 w-32 text-center font-medium">"Risk Level"</th>
                            <th class="px-4 py-3 w-32 text-center font-medium">"Status"</th>
                            <th class="px-4 py-3 w-40 text-right font-medium">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-100 text-sm">
                        {if alerts.is_empty() {
                            view! {
                                <tr>
                                    <td colspan="5" class="text-center py-8 text-gray-500">
                                        "No alerts found"
                                    </td>
                                </tr>
                            }
                            .into_view()
                        } else {
                            alerts
                                .into_iter()
                                .map(|alert| view! { <AlertRow alert=alert/> })
                                .collect::<Vec<_>>()
                                .into_view()
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[component]
fn AlertRow(alert: Alert) -> impl IntoView {
    let edit = format!("/alerts/{}/edit", alert.id);
    let delete = format!("/alerts/{}/delete", alert.id);
    view! {
        <tr>
            <td class="px-4 py-3 align-top">
                <div class="font-medium">{alert.title}</div>
                <div class="flex items-center gap-1 text-sm text-gray-500 mt-1">
                    <Icon name="map-pin" class="h-3.5 w-3.5"/>
                    <span>{alert.location.display()}</span>
                </div>
                <div class="flex items-center gap-1 text-xs text-gray-500 mt-1">
                    <Icon name="clock" class="h-3 w-3"/>
                    <span>{format_timestamp(alert.created_at)}</span>
                </div>
            </td>
            <td class="px-4 py-3 align-top">
                <div class="text-sm line-clamp-2">{alert.description}</div>
            </td>
            <td class="px-4 py-3 text-center align-top">
                <SeverityBadge level=alert.risk_level/>
            </td>
            <td class="px-4 py-3 text-center align-top">
                <StatusBadge status=alert.status/>
            </td>
            <td class="px-4 py-3 text-right align-top">
                <div class="inline-flex items-center gap-3">
                    <a href=edit class="text-guardian-primary hover:underline">"Edit"</a>
                    <a href=delete class="text-guardian-accent hover:underline">"Delete"</a>
                </div>
            </td>
        </tr>
    }
}

#[component]
fn ChartCard(
    #[prop(into)] title: String,
    #[prop(into)] description: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg border border-gray-200 shadow-sm">
            <div class="p-6 border-b border-gray-100">
                <h2 class="text-lg font-semibold">{title}</h2>
                <p class="text-sm text-gray-500">{description}</p>
            </div>
            <div class="p-6">{children()}</div>
        </div>
    }
}

#[component]
fn AnalyticsTab(alerts: Vec<Alert>, zones: Vec<RiskZone>) -> impl IntoView {
    let statuses = status_breakdown(&alerts);
    let risks = risk_distribution(&zones);
    view! {
        <div class="space-y-6">
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <ChartCard title="Alert Trends" description="Monthly alert volumes and resolutions">
                    <TrendsChart points=alert_trends()/>
                </ChartCard>
                <ChartCard title="Regional Distribution" description="Alert distribution by region">
                    <RegionsChart regions=regional_distribution()/>
                </ChartCard>
            </div>
            <ChartCard
                title="Response Time Analysis"
                description="Time taken to respond to alerts"
            >
                <ResponseChart buckets=response_times()/>
            </ChartCard>
            <div class="bg-white rounded-lg border border-gray-200 shadow-sm p-6">
                <h2 class="text-lg font-semibold">"Live Snapshot"</h2>
                <p class="text-sm text-gray-500">"Current mirrored records by status and risk"</p>
                <div class="grid grid-cols-1 sm:grid-cols-2 gap-6 mt-4 text-sm">
                    <div>
                        <h3 class="font-medium mb-2">"Alerts by status"</h3>
                        <ul class="space-y-2">
                            {statuses
                                .into_iter()
                                .map(|row| view! {
                                    <li class="flex justify-between">
                                        <span>{chip_label(row.status.as_ref())}</span>
                                        <span class="font-semibold">{row.count}</span>
                                    </li>
                                })
                                .collect::<Vec<_>>()}
                        </ul>
                    </div>
                    <div>
                        <h3 class="font-medium mb-2">"Zones by risk"</h3>
                        <ul class="space-y-2">
                            {risks
                                .into_iter()
                                .map(|row| view! {
                                    <li class="flex justify-between">
                                        <span>{chip_label(row.level.as_ref())}</span>
                                        <span class="font-semibold">{row.count}</span>
                                    </li>
                                })
                                .collect::<Vec<_>>()}
                        </ul>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn MapTab(payload: String, zones: Vec<RiskZone>, selected: Option<ZoneDetail>) -> impl IntoView {
    view! {
        <div class="space-y-6">
            <div class="bg-white rounded-lg border border-gray-200 shadow-sm">
                <div class="p-6 border-b border-gray-100">
                    <h2 class="text-lg font-semibold">"Global Monitoring Map"</h2>
                    <p class="text-sm text-gray-500">
                        "Geographic visualization of alerts and activities"
                    </p>
                </div>
                <div class="p-6">
                    <link
                        rel="stylesheet"
                        href="https://unpkg.com/maplibre-gl@4.7.1/dist/maplibre-gl.css"
                    />
                    <div id="map" class="h-[480px] w-full rounded-md overflow-hidden bg-gray-900"></div>
                    <script type="application/json" id="map-data" inner_html=payload></script>
                    <script src="https://unpkg.com/maplibre-gl@4.7.1/dist/maplibre-gl.js"></script>
                    <script src="/assets/js/map.js"></script>
                </div>
            </div>
            {selected.map(|zone| view! { <ZonePanel zone=zone/> })}
            <ZoneList zones=zones/>
        </div>
    }
}

#[component]
fn ZonePanel(zone: ZoneDetail) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg border border-gray-200 shadow-sm p-6">
            <div class="flex items-center justify-between">
                <h3 class="text-lg font-semibold">{zone.location}</h3>
                <SeverityBadge level=zone.risk_level/>
            </div>
            <p class="text-sm text-gray-600 mt-2">{zone.description}</p>
            <p class="text-xs text-gray-500 mt-3">
                {format!("Status: {}", chip_label(zone.status.as_ref()))}
            </p>
            <a
                href="/dashboard?tab=map"
                class="inline-block mt-4 text-sm text-guardian-primary hover:underline"
            >
                "Close panel"
            </a>
        </div>
    }
}

#[component]
fn ZoneList(zones: Vec<RiskZone>) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg border border-gray-200 shadow-sm">
            <div class="p-6 border-b border-gray-100">
                <h2 class="text-lg font-semibold">"Monitored Zones"</h2>
                <p class="text-sm text-gray-500">"Risk zones currently tracked on the map"</p>
            </div>
            <div class="p-6">
                {if zones.is_empty() {
                    view! { <p class="text-sm text-gray-500">"No risk zones found"</p> }.into_view()
                } else {
                    zones
                        .into_iter()
                        .map(|zone| {
                            let href = format!("/dashboard?tab=map&zone={}", zone.id);
                            view! {
                                <a
                                    href=href
                                    class="flex items-center justify-between gap-4 p-3 rounded-lg border border-gray-200 hover:border-guardian-primary/50 mb-3"
                                >
                                    <div>
                                        <div class="font-medium text-sm">
                                            {zone.location.display()}
                                        </div>
                                        <p class="text-xs text-gray-500 mt-1">{zone.description}</p>
                                    </div>
                                    <SeverityBadge level=zone.risk_level/>
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_view()
                }}
            </div>
        </div>
    }
}
