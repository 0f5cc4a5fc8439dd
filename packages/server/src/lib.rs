#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web server for the Guardian One platform.
//!
//! Serves the public site (server-rendered Leptos pages), a JSON API over
//! the mirrored record collections, and static assets for the map
//! bootstrap. All persistent data lives on the hosted backend; this process
//! keeps in-memory mirrors of the four record tables and pushes operation
//! outcomes onto a flash queue that the next rendered page drains into
//! toasts.

mod handlers;
mod site;

use std::sync::{Arc, Mutex};

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, middleware, web};
use guardian_content::ContentRegistry;
use guardian_map::{Marker, MarkerSet, ZoneOverlay};
use guardian_models::{Coordinates, Identity};
use guardian_pages::Toast;
use guardian_resources::{
    AlertCollection, CaseCollection, Collection, Notifier, ReportCollection, RiskZoneCollection,
};
use guardian_store::{BackendClient, BackendConfig};
use tokio::sync::RwLock;

/// Queue of notifications waiting to be shown on the next rendered page.
///
/// Cheap to clone; all clones share one queue.
#[derive(Debug, Clone, Default)]
pub struct Flash(Arc<Mutex<Vec<Toast>>>);

impl Flash {
    fn queue(&self) -> std::sync::MutexGuard<'_, Vec<Toast>> {
        self.0.lock().expect("flash queue mutex poisoned")
    }

    /// Queues a success toast.
    pub fn push_success(&self, title: &str, body: &str) {
        self.queue().push(Toast::success(title, body));
    }

    /// Queues a failure toast.
    pub fn push_failure(&self, title: &str, body: &str) {
        self.queue().push(Toast::failure(title, body));
    }

    /// Takes every queued toast, leaving the queue empty.
    #[must_use]
    pub fn drain(&self) -> Vec<Toast> {
        std::mem::take(&mut *self.queue())
    }
}

/// [`Notifier`] that turns collection outcomes into flash toasts.
struct FlashNotifier(Flash);

impl Notifier for FlashNotifier {
    fn success(&self, title: &str, body: &str) {
        self.0.push_success(title, body);
    }

    fn failure(&self, title: &str, body: &str) {
        self.0.push_failure(title, body);
    }
}

/// Shared application state.
pub struct AppState {
    /// Embedded site content.
    pub content: ContentRegistry,
    /// Identity mutations run under.
    pub identity: Identity,
    /// Mirrored alert collection.
    pub alerts: RwLock<AlertCollection>,
    /// Mirrored case collection.
    pub cases: RwLock<CaseCollection>,
    /// Mirrored report collection.
    pub reports: RwLock<ReportCollection>,
    /// Mirrored risk zone collection.
    pub zones: RwLock<RiskZoneCollection>,
    /// Monitoring map overlay, fed by the zone collection.
    pub overlay: RwLock<ZoneOverlay<MarkerSet>>,
    /// Flash queue shared with every collection's notifier.
    pub flash: Flash,
}

impl AppState {
    /// Builds the state over one backend client, with empty mirrors and the
    /// fixed monitoring markers already mounted.
    #[must_use]
    pub fn new(config: &BackendConfig, identity: Identity, content: ContentRegistry) -> Self {
        let client = Arc::new(BackendClient::new(config));
        let flash = Flash::default();
        let notifier: Arc<dyn Notifier> = Arc::new(FlashNotifier(flash.clone()));

        let fixed: Vec<Marker> = content
            .map_markers
            .iter()
            .map(|marker| Marker {
                id: marker.id.clone(),
                title: marker.title.clone(),
                coordinates: Coordinates::new(marker.lat, marker.lng),
                risk_level: marker.risk_level,
            })
            .collect();
        let mut overlay = ZoneOverlay::new(MarkerSet::new());
        overlay.mount(&fixed);

        Self {
            content,
            identity,
            alerts: RwLock::new(Collection::new(client.clone(), notifier.clone())),
            cases: RwLock::new(Collection::new(client.clone(), notifier.clone())),
            reports: RwLock::new(Collection::new(client.clone(), notifier.clone())),
            zones: RwLock::new(Collection::new(client, notifier)),
            overlay: RwLock::new(overlay),
            flash,
        }
    }

    /// Runs the initial load of every collection, then syncs the overlay.
    ///
    /// Failures are logged and queued as toasts by the collections
    /// themselves; the server comes up regardless and every load can be
    /// retried from the UI.
    pub async fn load_initial(&self) {
        self.alerts.write().await.load().await;
        self.cases.write().await.load().await;
        self.reports.write().await.load().await;
        self.zones.write().await.load().await;
        self.sync_overlay().await;
    }

    /// Rebuilds the overlay's zone markers from the current zone mirror.
    ///
    /// Lock order is zones before overlay, everywhere.
    pub async fn sync_overlay(&self) {
        let zones = self.zones.read().await;
        let mut overlay = self.overlay.write().await;
        overlay.sync(zones.records());
    }
}

/// Registers every page and API route on `cfg`.
///
/// Split out of [`run_server`] so integration tests mount the same routing
/// table on a test service. Static assets are not registered here; tests
/// have no asset directory.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(handlers::health))
            .route("/alerts", web::get().to(handlers::list_alerts))
            .route("/alerts", web::post().to(handlers::create_alert))
            .route("/alerts/{id}", web::patch().to(handlers::update_alert))
            .route("/alerts/{id}", web::delete().to(handlers::delete_alert))
            .route("/cases", web::get().to(handlers::list_cases))
            .route("/cases", web::post().to(handlers::create_case))
            .route("/cases/{id}", web::patch().to(handlers::update_case))
            .route("/cases/{id}", web::delete().to(handlers::delete_case))
            .route("/reports", web::get().to(handlers::list_reports))
            .route("/reports", web::post().to(handlers::create_report))
            .route("/reports/{id}", web::patch().to(handlers::update_report))
            .route("/reports/{id}", web::delete().to(handlers::delete_report))
            .route("/risk-zones", web::get().to(handlers::list_zones))
            .route("/risk-zones", web::post().to(handlers::create_zone))
            .route("/risk-zones/{id}", web::patch().to(handlers::update_zone))
            .route("/risk-zones/{id}", web::delete().to(handlers::delete_zone))
            .route("/map/markers", web::get().to(handlers::map_markers)),
    )
    .route("/", web::get().to(site::home))
    .route("/dashboard", web::get().to(site::dashboard))
    .route("/alerts", web::get().to(site::alert_center))
    .route("/alerts/new", web::get().to(site::new_alert_form))
    .route("/alerts/new", web::post().to(site::create_alert))
    .route("/alerts/{id}/edit", web::get().to(site::edit_alert_form))
    .route("/alerts/{id}/edit", web::post().to(site::apply_alert_edit))
    .route("/alerts/{id}/delete", web::get().to(site::delete_alert_confirm))
    .route("/alerts/{id}/delete", web::post().to(site::apply_alert_delete))
    .route("/report", web::get().to(site::report_form))
    .route("/report", web::post().to(site::submit_report))
    .route("/report/submitted", web::get().to(site::report_submitted))
    .route("/about", web::get().to(site::about))
    .default_service(web::to(site::not_found));
}

/// Starts the Guardian One server.
///
/// Reads configuration from the environment (`BIND_ADDR`, `PORT`,
/// `BACKEND_URL`, `BACKEND_API_KEY`, `SERVICE_USER_ID`), builds the shared
/// state, attempts the initial backend loads, and serves pages, the JSON
/// API, and `assets/`. The caller provides the async runtime, normally via
/// `#[actix_web::main]`.
///
/// # Errors
///
/// Returns an `std::io::Result` error if the HTTP server fails to bind or
/// encounters a runtime error.
#[allow(clippy::future_not_send)]
pub async fn run_server() -> std::io::Result<()> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    let config = BackendConfig {
        base_url: std::env::var("BACKEND_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:54321".to_string()),
        api_key: std::env::var("BACKEND_API_KEY").unwrap_or_default(),
    };
    let identity = Identity::new(
        std::env::var("SERVICE_USER_ID").unwrap_or_else(|_| "guardian-service".to_string()),
    );

    log::info!("Loading embedded content...");
    let content = ContentRegistry::load();

    let state = web::Data::new(AppState::new(&config, identity, content));

    log::info!("Fetching initial records from {}", config.base_url);
    state.load_initial().await;

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    log::info!("Starting server on {bind_addr}:{port}");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(routes)
            // Serve the map bootstrap script and stylesheet
            .service(Files::new("/assets", "assets"))
    })
    .bind((bind_addr, port))?
    .run()
    .await
}
