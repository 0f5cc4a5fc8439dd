//! JSON API handlers over the mirrored collections.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, web};
use guardian_models::{
    AlertPatch, CasePatch, NewAlert, NewCase, NewReport, NewRiskZone, RecordId, ReportPatch,
    RiskZonePatch,
};
use guardian_resources::{Collection, Operation};
use guardian_server_models::{ApiHealth, RefreshQuery};
use guardian_store::Resource;
use tokio::sync::RwLock;

use crate::AppState;

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Builds the 502 body from the operation's recorded failure.
fn op_failed<R: Resource>(collection: &Collection<R>, op: Operation) -> HttpResponse {
    let message = collection.last_error(op).unwrap_or("backend call failed");
    HttpResponse::BadGateway().json(serde_json::json!({ "error": message }))
}

/// Serves the mirror, re-fetching first when `?refresh=true`.
async fn list<R: Resource>(collection: &RwLock<Collection<R>>, query: RefreshQuery) -> HttpResponse {
    if query.wants_refresh() {
        let mut collection = collection.write().await;
        if !collection.load().await {
            return op_failed(&collection, Operation::Load);
        }
        return HttpResponse::Ok().json(collection.records());
    }
    HttpResponse::Ok().json(collection.read().await.records())
}

async fn create<R: Resource>(
    state: &AppState,
    collection: &RwLock<Collection<R>>,
    draft: R::Draft,
) -> HttpResponse {
    let mut collection = collection.write().await;
    match collection.add(&state.identity, draft).await {
        Some(record) => HttpResponse::Created().json(record),
        None => op_failed(&collection, Operation::Add),
    }
}

async fn update<R: Resource>(
    collection: &RwLock<Collection<R>>,
    id: RecordId,
    patch: R::Patch,
) -> HttpResponse {
    let mut collection = collection.write().await;
    match collection.edit(&id, patch).await {
        Some(record) => HttpResponse::Ok().json(record),
        None => op_failed(&collection, Operation::Edit),
    }
}

async fn remove<R: Resource>(collection: &RwLock<Collection<R>>, id: RecordId) -> HttpResponse {
    let mut collection = collection.write().await;
    if collection.remove(&id).await {
        HttpResponse::NoContent().finish()
    } else {
        op_failed(&collection, Operation::Remove)
    }
}

/// `GET /api/alerts`
pub async fn list_alerts(
    state: web::Data<AppState>,
    query: web::Query<RefreshQuery>,
) -> HttpResponse {
    list(&state.alerts, query.into_inner()).await
}

/// `POST /api/alerts`
pub async fn create_alert(state: web::Data<AppState>, draft: web::Json<NewAlert>) -> HttpResponse {
    create(&state, &state.alerts, draft.into_inner()).await
}

/// `PATCH /api/alerts/{id}`
pub async fn update_alert(
    state: web::Data<AppState>,
    path: web::Path<String>,
    patch: web::Json<AlertPatch>,
) -> HttpResponse {
    update(&state.alerts, RecordId(path.into_inner()), patch.into_inner()).await
}

/// `DELETE /api/alerts/{id}`
pub async fn delete_alert(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    remove(&state.alerts, RecordId(path.into_inner())).await
}

/// `GET /api/cases`
pub async fn list_cases(
    state: web::Data<AppState>,
    query: web::Query<RefreshQuery>,
) -> HttpResponse {
    list(&state.cases, query.into_inner()).await
}

/// `POST /api/cases`
pub async fn create_case(state: web::Data<AppState>, draft: web::Json<NewCase>) -> HttpResponse {
    create(&state, &state.cases, draft.into_inner()).await
}

/// `PATCH /api/cases/{id}`
pub async fn update_case(
    state: web::Data<AppState>,
    path: web::Path<String>,
    patch: web::Json<CasePatch>,
) -> HttpResponse {
    update(&state.cases, RecordId(path.into_inner()), patch.into_inner()).await
}

/// `DELETE /api/cases/{id}`
pub async fn delete_case(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    remove(&state.cases, RecordId(path.into_inner())).await
}

/// `GET /api/reports`
pub async fn list_reports(
    state: web::Data<AppState>,
    query: web::Query<RefreshQuery>,
) -> HttpResponse {
    list(&state.reports, query.into_inner()).await
}

/// `POST /api/reports`
pub async fn create_report(
    state: web::Data<AppState>,
    draft: web::Json<NewReport>,
) -> HttpResponse {
    create(&state, &state.reports, draft.into_inner()).await
}

/// `PATCH /api/reports/{id}`
pub async fn update_report(
    state: web::Data<AppState>,
    path: web::Path<String>,
    patch: web::Json<ReportPatch>,
) -> HttpResponse {
    update(&state.reports, RecordId(path.into_inner()), patch.into_inner()).await
}

/// `DELETE /api/reports/{id}`
pub async fn delete_report(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    remove(&state.reports, RecordId(path.into_inner())).await
}

/// `GET /api/risk-zones`
///
/// A refresh re-syncs the map overlay so zone markers track the mirror.
pub async fn list_zones(
    state: web::Data<AppState>,
    query: web::Query<RefreshQuery>,
) -> HttpResponse {
    let query = query.into_inner();
    let refreshed = query.wants_refresh();
    let response = list(&state.zones, query).await;
    if refreshed && response.status().is_success() {
        state.sync_overlay().await;
    }
    response
}

/// `POST /api/risk-zones`
pub async fn create_zone(
    state: web::Data<AppState>,
    draft: web::Json<NewRiskZone>,
) -> HttpResponse {
    let response = create(&state, &state.zones, draft.into_inner()).await;
    if response.status().is_success() {
        state.sync_overlay().await;
    }
    response
}

/// `PATCH /api/risk-zones/{id}`
pub async fn update_zone(
    state: web::Data<AppState>,
    path: web::Path<String>,
    patch: web::Json<RiskZonePatch>,
) -> HttpResponse {
    let response = update(&state.zones, RecordId(path.into_inner()), patch.into_inner()).await;
    if response.status().is_success() {
        state.sync_overlay().await;
    }
    response
}

/// `DELETE /api/risk-zones/{id}`
pub async fn delete_zone(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    let response = remove(&state.zones, RecordId(path.into_inner())).await;
    if response.status().is_success() {
        state.sync_overlay().await;
    }
    response
}

/// `GET /api/map/markers`
///
/// The overlay's serialized view and marker set, the same payload the
/// dashboard embeds for the map bootstrap.
pub async fn map_markers(state: web::Data<AppState>) -> HttpResponse {
    let payload = state.overlay.read().await.marker_payload();
    match payload {
        Ok(body) => HttpResponse::Ok()
            .content_type(ContentType::json())
            .body(body),
        Err(error) => {
            log::error!("Failed to serialize marker payload: {error}");
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to serialize marker payload"
            }))
        }
    }
}
