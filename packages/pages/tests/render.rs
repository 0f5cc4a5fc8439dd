use chrono::{TimeZone, Utc};
use guardian_content::ContentRegistry;
use guardian_map::{MarkerSet, ZoneOverlay};
use guardian_models::{
    Alert, AlertStatus, Coordinates, Location, RecordId, RiskLevel, RiskZone, ZoneStatus,
};
use guardian_pages::{
    AboutTab, CenterTab, DashboardData, DashboardTab, Toast, about_page, alert_center_page,
    alert_delete_page, alert_form_page, dashboard_page, home_page, not_found_page, report_page,
    report_submitted_page,
};

fn alert(id: &str, title: &str, level: RiskLevel, status: AlertStatus) -> Alert {
    let at = Utc.with_ymd_and_hms(2025, 4, 1, 12, 0, 0).unwrap();
    Alert {
        id: RecordId::from(id),
        title: title.to_owned(),
        description: format!("{title} reported near the riverside market"),
        risk_level: level,
        status,
        user_id: "service".to_owned(),
        location: Location::text("Bangkok, Thailand"),
        created_at: at,
        updated_at: at,
    }
}

fn zone(id: &str, location: &str) -> RiskZone {
    RiskZone {
        id: RecordId::from(id),
        location: Location::text(location),
        description: format!("{location} flagged for elevated activity"),
        risk_level: RiskLevel::High,
        status: ZoneStatus::Active,
        coordinates: Coordinates::new(13.75, 100.5),
        user_id: "service".to_owned(),
    }
}

#[test]
fn home_page_carries_hero_features_and_cta() {
    let content = ContentRegistry::load();
    let html = home_page(&content, Vec::new());

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Protecting children through innovative technology"));
    assert!(html.contains("Core Components"));
    assert!(html.contains("Biometric Child Identity Ledger"));
    assert!(html.contains("Community Shield App"));
    assert!(html.contains("Making a Global Impact"));
    assert!(html.contains("Join our mission to protect every child"));
    assert!(html.contains("Emergency SOS"));
}

#[test]
fn queued_toasts_render_in_the_corner_stack() {
    let content = ContentRegistry::load();
    let html = home_page(
        &content,
        vec![
            Toast::success("Alert created", "The alert has been successfully created."),
            Toast::failure("Error fetching alerts", "Alert service is unavailable."),
        ],
    );

    assert!(html.contains("Alert created"));
    assert!(html.contains("Error fetching alerts"));
}

#[test]
fn dashboard_overview_shows_live_counter_and_fixed_cards() {
    let content = ContentRegistry::load();
    let data = DashboardData {
        alerts: vec![
            alert("a1", "Checkpoint tipoff", RiskLevel::High, AlertStatus::Active),
            alert("a2", "Closed depot case", RiskLevel::Low, AlertStatus::Resolved),
        ],
        ..DashboardData::default()
    };
    let html = dashboard_page(&content, data, Vec::new());

    assert!(html.contains("Active Alerts"));
    assert!(html.contains("Protected Children"));
    assert!(html.contains("Recent Activity"));
    assert!(html.contains("Upcoming Events"));
    assert!(html.contains("New Alert"));
}

#[test]
fn dashboard_alerts_tab_lists_records_with_actions() {
    let content = ContentRegistry::load();
    let data = DashboardData {
        tab: DashboardTab::Alerts,
        alerts: vec![alert(
            "a1",
            "Checkpoint tipoff",
            RiskLevel::High,
            AlertStatus::Active,
        )],
        ..DashboardData::default()
    };
    let html = dashboard_page(&content, data, Vec::new());

    assert!(html.contains("Checkpoint tipoff"));
    assert!(html.contains("Bangkok, Thailand"));
    assert!(html.contains("Apr 1, 2025 12:00 UTC"));
    assert!(html.contains("/alerts/a1/edit"));
    assert!(html.contains("/alerts/a1/delete"));
}

#[test]
fn dashboard_alerts_tab_renders_the_empty_state() {
    let content = ContentRegistry::load();
    let data = DashboardData {
        tab: DashboardTab::Alerts,
        ..DashboardData::default()
    };
    let html = dashboard_page(&content, data, Vec::new());

    assert!(html.contains("No alerts found"));
}

#[test]
fn dashboard_analytics_tab_draws_every_chart() {
    let content = ContentRegistry::load();
    let data = DashboardData {
        tab: DashboardTab::Analytics,
        alerts: vec![alert(
            "a1",
            "Checkpoint tipoff",
            RiskLevel::High,
            AlertStatus::Active,
        )],
        zones: vec![zone("z1", "Border crossing east")],
        ..DashboardData::default()
    };
    let html = dashboard_page(&content, data, Vec::new());

    assert!(html.contains("Alert Trends"));
    assert!(html.contains("Regional Distribution"));
    assert!(html.contains("Response Time Analysis"));
    assert!(html.contains("polyline"));
    assert!(html.contains("Live Snapshot"));
}

#[test]
fn dashboard_map_tab_embeds_the_marker_payload() {
    let content = ContentRegistry::load();
    let zones = vec![zone("z1", "Border crossing east")];
    let mut overlay = ZoneOverlay::new(MarkerSet::new());
    overlay.sync(&zones);
    let data = DashboardData {
        tab: DashboardTab::Map,
        map_payload: overlay.marker_payload().unwrap(),
        selected: overlay.select("z1").cloned(),
        zones,
        ..DashboardData::default()
    };
    let html = dashboard_page(&content, data, Vec::new());

    assert!(html.contains("Global Monitoring Map"));
    assert!(html.contains("id=\"map-data\""));
    assert!(html.contains("dark-v11"));
    assert!(html.contains("maplibre-gl@4.7.1"));
    assert!(html.contains("/assets/js/map.js"));
    // Zone list link plus the open detail panel.
    assert!(html.contains("tab=map&amp;zone=z1"));
    assert!(html.contains("Border crossing east"));
    assert!(html.contains("Close panel"));
}

#[test]
fn alert_center_falls_back_to_the_sample_feed() {
    let content = ContentRegistry::load();
    let html = alert_center_page(&content, Vec::new(), CenterTab::All, Vec::new());

    assert!(html.contains("Alert Center"));
    assert!(html.contains("Child ID Mismatch"));
    assert!(html.contains("Avg. Response Time"));
    assert!(html.contains("4.2 min"));
}

#[test]
fn alert_center_prefers_live_records_over_the_feed() {
    let content = ContentRegistry::load();
    let html = alert_center_page(
        &content,
        vec![alert(
            "a1",
            "Checkpoint tipoff",
            RiskLevel::High,
            AlertStatus::Active,
        )],
        CenterTab::All,
        Vec::new(),
    );

    assert!(html.contains("Checkpoint tipoff"));
    assert!(!html.contains("Child ID Mismatch"));
}

#[test]
fn alert_center_tabs_filter_the_cards() {
    let content = ContentRegistry::load();
    let alerts = vec![
        alert("a1", "Night ferry watch", RiskLevel::High, AlertStatus::Active),
        alert(
            "a2",
            "Closed depot case",
            RiskLevel::Critical,
            AlertStatus::Resolved,
        ),
    ];

    let html = alert_center_page(&content, alerts.clone(), CenterTab::Critical, Vec::new());
    assert!(html.contains("Closed depot case"));
    assert!(!html.contains("Night ferry watch"));

    let html = alert_center_page(&content, alerts, CenterTab::Active, Vec::new());
    assert!(html.contains("Night ferry watch"));
    assert!(!html.contains("Closed depot case"));
}

#[test]
fn blank_alert_form_posts_to_the_create_route() {
    let content = ContentRegistry::load();
    let html = alert_form_page(&content, None, Vec::new());

    assert!(html.contains("New Alert"));
    assert!(html.contains("Create Alert"));
    assert!(html.contains("action=\"/alerts/new\""));
    // Medium risk and active status are preselected for new alerts.
    assert!(html.contains("value=\"medium\" selected"));
    assert!(html.contains("value=\"active\" selected"));
}

#[test]
fn edit_form_prefills_the_existing_alert() {
    let content = ContentRegistry::load();
    let mut existing = alert(
        "a7",
        "Checkpoint tipoff",
        RiskLevel::High,
        AlertStatus::Investigating,
    );
    existing.location = Location::point(13.75, 100.5);
    let html = alert_form_page(&content, Some(existing), Vec::new());

    assert!(html.contains("Edit Alert"));
    assert!(html.contains("Update Alert"));
    assert!(html.contains("action=\"/alerts/a7/edit\""));
    assert!(html.contains("value=\"Checkpoint tipoff\""));
    assert!(html.contains("value=\"high\" selected"));
    assert!(html.contains("value=\"investigating\" selected"));
    assert!(html.contains("value=\"13.75\""));
    assert!(html.contains("value=\"100.5\""));
}

#[test]
fn delete_confirmation_names_the_alert() {
    let content = ContentRegistry::load();
    let html = alert_delete_page(
        &content,
        alert("a9", "Checkpoint tipoff", RiskLevel::High, AlertStatus::Active),
        Vec::new(),
    );

    assert!(html.contains("Confirm Deletion"));
    assert!(html.contains("This action cannot be undone"));
    assert!(html.contains("Checkpoint tipoff"));
    assert!(html.contains("action=\"/alerts/a9/delete\""));
    assert!(html.contains("Delete Alert"));
}

#[test]
fn standard_report_form_collects_contact_details() {
    let content = ContentRegistry::load();
    let html = report_page(&content, false, Vec::new());

    assert!(html.contains("Report an Incident"));
    assert!(html.contains("Your Name"));
    assert!(html.contains("Email Address"));
    assert!(html.contains("value=\"standard\""));
    assert!(html.contains("Your information is kept confidential"));
    assert!(html.contains("made in good faith"));
    // Incident types come from the case taxonomy.
    assert!(html.contains("value=\"suspicious-activity\""));
    assert!(html.contains("Suspicious Activity"));
}

#[test]
fn anonymous_report_form_drops_contact_fields() {
    let content = ContentRegistry::load();
    let html = report_page(&content, true, Vec::new());

    assert!(html.contains("value=\"anonymous\""));
    assert!(html.contains("I understand that I cannot be contacted for follow-up information"));
    assert!(html.contains("Your identity will be protected"));
    assert!(!html.contains("Your Name"));
    assert!(!html.contains("Email Address"));
}

#[test]
fn submitted_report_page_shows_the_reference() {
    let content = ContentRegistry::load();
    let html = report_submitted_page(&content, "reports:w2qsl7".to_owned(), Vec::new());

    assert!(html.contains("Report Submitted"));
    assert!(html.contains("Thank you for your vigilance"));
    assert!(html.contains("reports:w2qsl7"));
    assert!(html.contains("Submit Another Report"));
}

#[test]
fn about_tabs_switch_between_briefs() {
    let content = ContentRegistry::load();

    let html = about_page(&content, AboutTab::Mission, Vec::new());
    assert!(html.contains("About GUARDIAN ONE"));
    assert!(html.contains("Core Principles"));

    let html = about_page(&content, AboutTab::Technology, Vec::new());
    assert!(html.contains("Real-Time Risk Detection AI (RRD-AI)"));

    let html = about_page(&content, AboutTab::Partners, Vec::new());
    assert!(html.contains("Become a Partner"));
}

#[test]
fn not_found_page_stands_alone() {
    let html = not_found_page();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("404"));
    assert!(html.contains("Page not found"));
    assert!(html.contains("Return to Home"));
    // No site chrome on the fallback page.
    assert!(!html.contains("Emergency SOS"));
}
