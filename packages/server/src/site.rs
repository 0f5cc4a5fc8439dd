//! Page and form handlers.
//!
//! Every GET renders a full HTML document and drains the flash queue into
//! it. Every POST validates, runs the collection operation, and answers
//! with a 303 redirect; the outcome rides the flash queue to the next page.

use actix_web::http::header::{ContentType, LOCATION};
use actix_web::{HttpRequest, HttpResponse, web};
use guardian_models::RecordId;
use guardian_pages::{
    AboutTab, CenterTab, DashboardData, DashboardTab, about_page, alert_center_page,
    alert_delete_page, alert_form_page, dashboard_page, home_page, not_found_page, report_page,
    report_submitted_page,
};
use guardian_server_models::{AlertForm, DashboardQuery, ReferenceQuery, ReportForm, TabQuery};

use crate::AppState;

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body)
}

/// 303 redirect, the answer to every form post.
fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((LOCATION, location))
        .finish()
}

/// `GET /`
pub async fn home(state: web::Data<AppState>) -> HttpResponse {
    html(home_page(&state.content, state.flash.drain()))
}

/// `GET /dashboard`
///
/// `?refresh=true` re-fetches alerts and zones before rendering;
/// `?zone=<id>` opens that zone's map detail panel and `?zone=` closes it.
pub async fn dashboard(
    state: web::Data<AppState>,
    query: web::Query<DashboardQuery>,
) -> HttpResponse {
    let query = query.into_inner();
    if query.wants_refresh() {
        state.alerts.write().await.load().await;
        state.zones.write().await.load().await;
        state.sync_overlay().await;
    }

    let tab = DashboardTab::from_query(query.tab.as_deref());
    let alerts = state.alerts.read().await.records().to_vec();
    let zones = state.zones.read().await.records().to_vec();

    let mut overlay = state.overlay.write().await;
    match query.zone.as_deref() {
        Some("") => overlay.clear_selection(),
        Some(id) => {
            overlay.select(id);
        }
        None => {}
    }
    let map_payload = overlay.marker_payload().unwrap_or_else(|error| {
        log::error!("Failed to serialize marker payload: {error}");
        String::new()
    });
    let selected = overlay.selected().cloned();
    drop(overlay);

    let data = DashboardData {
        tab,
        alerts,
        zones,
        map_payload,
        selected,
    };
    html(dashboard_page(&state.content, data, state.flash.drain()))
}

/// `GET /alerts`
pub async fn alert_center(
    state: web::Data<AppState>,
    query: web::Query<TabQuery>,
) -> HttpResponse {
    let tab = CenterTab::from_query(query.tab.as_deref());
    let alerts = state.alerts.read().await.records().to_vec();
    html(alert_center_page(
        &state.content,
        alerts,
        tab,
        state.flash.drain(),
    ))
}

/// `GET /alerts/new`
pub async fn new_alert_form(state: web::Data<AppState>) -> HttpResponse {
    html(alert_form_page(&state.content, None, state.flash.drain()))
}

/// `POST /alerts/new`
pub async fn create_alert(state: web::Data<AppState>, form: web::Form<AlertForm>) -> HttpResponse {
    match form.into_inner().into_draft() {
        Ok(draft) => {
            let created = state.alerts.write().await.add(&state.identity, draft).await;
            if created.is_some() {
                see_other("/dashboard?tab=alerts")
            } else {
                see_other("/alerts/new")
            }
        }
        Err(error) => {
            state.flash.push_failure("Invalid alert", &error.to_string());
            see_other("/alerts/new")
        }
    }
}

/// `GET /alerts/{id}/edit`
pub async fn edit_alert_form(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: HttpRequest,
) -> HttpResponse {
    let id = RecordId(path.into_inner());
    let existing = state.alerts.read().await.get(&id).cloned();
    match existing {
        Some(alert) => html(alert_form_page(
            &state.content,
            Some(alert),
            state.flash.drain(),
        )),
        None => not_found(req).await,
    }
}

/// `POST /alerts/{id}/edit`
pub async fn apply_alert_edit(
    state: web::Data<AppState>,
    path: web::Path<String>,
    form: web::Form<AlertForm>,
) -> HttpResponse {
    let id = RecordId(path.into_inner());
    match form.into_inner().into_patch() {
        Ok(patch) => {
            let updated = state.alerts.write().await.edit(&id, patch).await;
            if updated.is_some() {
                see_other("/dashboard?tab=alerts")
            } else {
                see_other(&format!("/alerts/{id}/edit"))
            }
        }
        Err(error) => {
            state.flash.push_failure("Invalid alert", &error.to_string());
            see_other(&format!("/alerts/{id}/edit"))
        }
    }
}

/// `GET /alerts/{id}/delete`
pub async fn delete_alert_confirm(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: HttpRequest,
) -> HttpResponse {
    let id = RecordId(path.into_inner());
    let existing = state.alerts.read().await.get(&id).cloned();
    match existing {
        Some(alert) => html(alert_delete_page(
            &state.content,
            alert,
            state.flash.drain(),
        )),
        None => not_found(req).await,
    }
}

/// `POST /alerts/{id}/delete`
pub async fn apply_alert_delete(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> HttpResponse {
    let id = RecordId(path.into_inner());
    state.alerts.write().await.remove(&id).await;
    see_other("/dashboard?tab=alerts")
}

/// `GET /report`
pub async fn report_form(state: web::Data<AppState>, query: web::Query<TabQuery>) -> HttpResponse {
    let anonymous = query.tab.as_deref() == Some("anonymous");
    html(report_page(&state.content, anonymous, state.flash.drain()))
}

/// Reference code echoed back to the reporter, short enough to write down.
fn new_reference() -> String {
    let id = uuid::Uuid::new_v4().simple().to_string();
    format!("GRD-{}", id[..8].to_uppercase())
}

/// `POST /report`
pub async fn submit_report(state: web::Data<AppState>, form: web::Form<ReportForm>) -> HttpResponse {
    let form = form.into_inner();
    let return_path = form.return_path();
    let reference = new_reference();
    match form.into_draft(&reference) {
        Ok(draft) => {
            let created = state
                .reports
                .write()
                .await
                .add(&state.identity, draft)
                .await;
            if created.is_some() {
                see_other(&format!("/report/submitted?ref={reference}"))
            } else {
                see_other(return_path)
            }
        }
        Err(error) => {
            state
                .flash
                .push_failure("Invalid report", &error.to_string());
            see_other(return_path)
        }
    }
}

/// `GET /report/submitted`
pub async fn report_submitted(
    state: web::Data<AppState>,
    query: web::Query<ReferenceQuery>,
) -> HttpResponse {
    let reference = query
        .into_inner()
        .reference
        .unwrap_or_else(|| "unavailable".to_string());
    html(report_submitted_page(
        &state.content,
        reference,
        state.flash.drain(),
    ))
}

/// `GET /about`
pub async fn about(state: web::Data<AppState>, query: web::Query<TabQuery>) -> HttpResponse {
    let tab = AboutTab::from_query(query.tab.as_deref());
    html(about_page(&state.content, tab, state.flash.drain()))
}

/// Any unmatched route.
pub async fn not_found(req: HttpRequest) -> HttpResponse {
    log::error!("Attempted to access non-existent route: {}", req.path());
    HttpResponse::NotFound()
        .content_type(ContentType::html())
        .body(not_found_page())
}
