#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Record store trait and hosted-backend HTTP client.
//!
//! Everything the platform persists lives in four tables on a hosted
//! backend-as-a-service. [`RecordStore`] is the seam: the rest of the app
//! talks to it, [`BackendClient`] implements it over the backend's REST
//! table protocol, and tests implement it in memory.

pub mod backend;

pub use backend::{BackendClient, BackendConfig};

use async_trait::async_trait;
use guardian_models::{
    Alert, AlertPatch, Case, CasePatch, Identity, NewAlert, NewCase, NewReport, NewRiskZone,
    RecordId, Report, ReportPatch, RiskZone, RiskZonePatch,
};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Errors that can occur during store operations.
///
/// `Api`'s `Display` is the backend's own message verbatim; that string is
/// what ends up in notifications, so it stays free of protocol noise.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// HTTP transport failed before a response arrived.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("{message}")]
    Api {
        /// HTTP status code of the response.
        status: u16,
        /// Message extracted from the backend's error body.
        message: String,
    },

    /// The response body was not the JSON we expected.
    #[error("JSON parse error: {0}")]
    Decode(#[from] serde_json::Error),

    /// An insert or update came back without the affected row.
    #[error("backend returned no row where one was expected")]
    MissingRecord,
}

/// Ties a record type to its remote table and write semantics.
///
/// Implemented here for the four record kinds; the store and the resource
/// layer are generic over it.
pub trait Resource: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    /// Remote table name under `/rest/v1/`.
    const TABLE: &'static str;
    /// Lowercase singular noun for user-facing messages (`"risk zone"`).
    const NOUN: &'static str;
    /// Lowercase plural noun for user-facing messages (`"risk zones"`).
    const PLURAL: &'static str;
    /// Whether inserts stamp the caller's `user_id` onto the row.
    const OWNED: bool;

    /// Fields accepted when creating a record of this kind.
    type Draft: Serialize + Send + Sync;
    /// Partial update accepted for a record of this kind.
    type Patch: Serialize + Send + Sync;

    /// The record's server-assigned identifier.
    fn id(&self) -> &RecordId;
}

impl Resource for Alert {
    const TABLE: &'static str = "alerts";
    const NOUN: &'static str = "alert";
    const PLURAL: &'static str = "alerts";
    const OWNED: bool = true;

    type Draft = NewAlert;
    type Patch = AlertPatch;

    fn id(&self) -> &RecordId {
        &self.id
    }
}

impl Resource for Case {
    const TABLE: &'static str = "cases";
    const NOUN: &'static str = "case";
    const PLURAL: &'static str = "cases";
    // Cases carry an optional reporter_id as data; anonymous intake files
    // rows with no owner at all.
    const OWNED: bool = false;

    type Draft = NewCase;
    type Patch = CasePatch;

    fn id(&self) -> &RecordId {
        &self.id
    }
}

impl Resource for Report {
    const TABLE: &'static str = "reports";
    const NOUN: &'static str = "report";
    const PLURAL: &'static str = "reports";
    const OWNED: bool = true;

    type Draft = NewReport;
    type Patch = ReportPatch;

    fn id(&self) -> &RecordId {
        &self.id
    }
}

impl Resource for RiskZone {
    const TABLE: &'static str = "risk_zones";
    const NOUN: &'static str = "risk zone";
    const PLURAL: &'static str = "risk zones";
    const OWNED: bool = true;

    type Draft = NewRiskZone;
    type Patch = RiskZonePatch;

    fn id(&self) -> &RecordId {
        &self.id
    }
}

/// CRUD access to one record kind.
///
/// One remote call per operation: no retries, no client-side timeout, no
/// pagination. Failures come back as [`StoreError`] and the caller decides
/// how to surface them.
#[async_trait]
pub trait RecordStore<R: Resource>: Send + Sync {
    /// Fetches every record in the table.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the request or decode fails.
    async fn select_all(&self) -> Result<Vec<R>, StoreError>;

    /// Creates a record from `draft`, stamping `identity` onto it when the
    /// record kind is owned, and returns the stored row.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the request fails or the backend returns
    /// no created row.
    async fn insert(&self, identity: &Identity, draft: &R::Draft) -> Result<R, StoreError>;

    /// Applies `patch` to the record with `id` and returns the stored row.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the request fails or the backend returns
    /// no updated row (e.g. the id matched nothing).
    async fn update(&self, id: &RecordId, patch: &R::Patch) -> Result<R, StoreError>;

    /// Deletes the record with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the request fails or the backend rejects
    /// the delete.
    async fn delete(&self, id: &RecordId) -> Result<(), StoreError>;
}
