#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Collection lifecycle for Guardian One records.
//!
//! A [`Collection`] owns the in-memory mirror of one backend table and runs
//! its four operations: load the full table, add a record, edit a record,
//! remove a record. Mutations go remote-first: the backend call happens
//! before the mirror changes, and a failed call leaves the mirror exactly as
//! it was. Outcomes are reported through the injected [`Notifier`] and
//! recorded per operation, so a slow load can never clobber the state of a
//! concurrent edit.

use std::sync::Arc;

use guardian_models::{Identity, RecordId};
use guardian_store::{RecordStore, Resource, StoreError};

/// The four operations a collection runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Fetch the full table and replace the mirror.
    Load,
    /// Create a record and append it.
    Add,
    /// Update a record in place.
    Edit,
    /// Delete a record and drop it from the mirror.
    Remove,
}

impl Operation {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Load, Self::Add, Self::Edit, Self::Remove]
    }

    const fn index(self) -> usize {
        match self {
            Self::Load => 0,
            Self::Add => 1,
            Self::Edit => 2,
            Self::Remove => 3,
        }
    }
}

/// Bookkeeping for one operation slot.
#[derive(Debug, Clone, Default)]
pub struct OpState {
    /// Whether a call is currently in flight.
    pub in_flight: bool,
    /// Message from the most recent failure, cleared when the operation is
    /// attempted again.
    pub last_error: Option<String>,
}

#[derive(Debug, Clone, Default)]
struct OpStates([OpState; 4]);

impl OpStates {
    fn begin(&mut self, op: Operation) {
        let slot = &mut self.0[op.index()];
        slot.in_flight = true;
        slot.last_error = None;
    }

    fn finish(&mut self, op: Operation) {
        self.0[op.index()].in_flight = false;
    }

    fn fail(&mut self, op: Operation, message: String) {
        let slot = &mut self.0[op.index()];
        slot.in_flight = false;
        slot.last_error = Some(message);
    }

    const fn get(&self, op: Operation) -> &OpState {
        &self.0[op.index()]
    }

    fn any_busy(&self) -> bool {
        self.0.iter().any(|slot| slot.in_flight)
    }
}

/// Where operation outcomes are announced.
///
/// The collection never touches UI machinery; whoever constructs it decides
/// what a notification becomes (a flash toast, a log line, a test record).
pub trait Notifier: Send + Sync {
    /// A mutation succeeded.
    fn success(&self, title: &str, body: &str);

    /// An operation failed. `body` is the human-readable cause.
    fn failure(&self, title: &str, body: &str);
}

/// Notifier for headless contexts that writes outcomes to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn success(&self, title: &str, body: &str) {
        log::info!("{title}: {body}");
    }

    fn failure(&self, title: &str, body: &str) {
        log::warn!("{title}: {body}");
    }
}

/// `"risk zone"` + `"deleted"` becomes `"Risk zone deleted"`.
fn headline(noun: &str, verb: &str) -> String {
    let mut chars = noun.chars();
    chars.next().map_or_else(
        || verb.to_string(),
        |first| format!("{}{} {verb}", first.to_uppercase(), chars.as_str()),
    )
}

/// In-memory mirror of one backend table plus its operation lifecycle.
pub struct Collection<R: Resource> {
    store: Arc<dyn RecordStore<R>>,
    notifier: Arc<dyn Notifier>,
    records: Vec<R>,
    ops: OpStates,
}

impl<R: Resource> Collection<R> {
    /// Creates an empty collection over the given store and notifier.
    #[must_use]
    pub fn new(store: Arc<dyn RecordStore<R>>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            store,
            notifier,
            records: Vec::new(),
            ops: OpStates::default(),
        }
    }

    /// The current mirror, in backend order.
    #[must_use]
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Looks up a mirrored record by id.
    #[must_use]
    pub fn get(&self, id: &RecordId) -> Option<&R> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// Number of mirrored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the mirror is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether the given operation has a call in flight.
    #[must_use]
    pub fn is_busy(&self, op: Operation) -> bool {
        self.ops.get(op).in_flight
    }

    /// Whether any operation has a call in flight.
    #[must_use]
    pub fn any_busy(&self) -> bool {
        self.ops.any_busy()
    }

    /// Message from the given operation's most recent failure, if its last
    /// attempt failed.
    #[must_use]
    pub fn last_error(&self, op: Operation) -> Option<&str> {
        self.ops.get(op).last_error.as_deref()
    }

    /// Fetches the full table and replaces the mirror with the response.
    ///
    /// Returns whether the load succeeded. On failure the mirror keeps its
    /// previous contents.
    pub async fn load(&mut self) -> bool {
        self.ops.begin(Operation::Load);
        match self.store.select_all().await {
            Ok(rows) => {
                self.records = rows;
                self.ops.finish(Operation::Load);
                true
            }
            Err(error) => {
                self.report(Operation::Load, &format!("Error fetching {}", R::PLURAL), &error);
                false
            }
        }
    }

    /// Creates a record from `draft` on behalf of `identity` and appends the
    /// stored row to the mirror.
    ///
    /// Returns the stored row, or `None` if the call failed.
    pub async fn add(&mut self, identity: &Identity, draft: R::Draft) -> Option<R> {
        self.ops.begin(Operation::Add);
        match self.store.insert(identity, &draft).await {
            Ok(record) => {
                self.records.push(record.clone());
                self.notifier.success(
                    &headline(R::NOUN, "created"),
                    &format!("The {} has been successfully created.", R::NOUN),
                );
                self.ops.finish(Operation::Add);
                Some(record)
            }
            Err(error) => {
                self.report(Operation::Add, &format!("Error creating {}", R::NOUN), &error);
                None
            }
        }
    }

    /// Applies `patch` to the record with `id` and replaces the matching
    /// mirrored row with the stored result.
    ///
    /// Returns the stored row, or `None` if the call failed.
    pub async fn edit(&mut self, id: &RecordId, patch: R::Patch) -> Option<R> {
        self.ops.begin(Operation::Edit);
        match self.store.update(id, &patch).await {
            Ok(updated) => {
                for record in &mut self.records {
                    if record.id() == id {
                        *record = updated.clone();
                    }
                }
                self.notifier.success(
                    &headline(R::NOUN, "updated"),
                    &format!("The {} has been successfully updated.", R::NOUN),
                );
                self.ops.finish(Operation::Edit);
                Some(updated)
            }
            Err(error) => {
                self.report(Operation::Edit, &format!("Error updating {}", R::NOUN), &error);
                None
            }
        }
    }

    /// Deletes the record with `id` and drops it from the mirror.
    ///
    /// Returns whether the delete succeeded.
    pub async fn remove(&mut self, id: &RecordId) -> bool {
        self.ops.begin(Operation::Remove);
        match self.store.delete(id).await {
            Ok(()) => {
                self.records.retain(|record| record.id() != id);
                self.notifier.success(
                    &headline(R::NOUN, "deleted"),
                    &format!("The {} has been successfully deleted.", R::NOUN),
                );
                self.ops.finish(Operation::Remove);
                true
            }
            Err(error) => {
                self.report(Operation::Remove, &format!("Error deleting {}", R::NOUN), &error);
                false
            }
        }
    }

    fn report(&mut self, op: Operation, title: &str, error: &StoreError) {
        let message = error.to_string();
        log::error!("{title}: {message}");
        self.notifier.failure(title, &message);
        self.ops.fail(op, message);
    }
}

/// Alert collection.
pub type AlertCollection = Collection<guardian_models::Alert>;
/// Case collection.
pub type CaseCollection = Collection<guardian_models::Case>;
/// Report collection.
pub type ReportCollection = Collection<guardian_models::Report>;
/// Risk zone collection.
pub type RiskZoneCollection = Collection<guardian_models::RiskZone>;

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use chrono::Utc;
    use guardian_models::{
        Alert, AlertPatch, AlertStatus, Coordinates, Location, NewAlert, NewRiskZone, RiskLevel,
        RiskZone, ZoneStatus,
    };

    /// In-memory alert store with failure injection.
    struct FakeAlertStore {
        rows: Mutex<Vec<Alert>>,
        next_id: AtomicUsize,
        fail_with: Mutex<Option<String>>,
    }

    impl FakeAlertStore {
        fn new(rows: Vec<Alert>) -> Self {
            Self {
                rows: Mutex::new(rows),
                next_id: AtomicUsize::new(100),
                fail_with: Mutex::new(None),
            }
        }

        fn fail_next(&self, message: &str) {
            *self.fail_with.lock().unwrap() = Some(message.to_string());
        }

        fn take_failure(&self) -> Option<StoreError> {
            self.fail_with
                .lock()
                .unwrap()
                .take()
                .map(|message| StoreError::Api {
                    status: 500,
                    message,
                })
        }
    }

    #[async_trait]
    impl RecordStore<Alert> for FakeAlertStore {
        async fn select_all(&self) -> Result<Vec<Alert>, StoreError> {
            if let Some(error) = self.take_failure() {
                return Err(error);
            }
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn insert(&self, identity: &Identity, draft: &NewAlert) -> Result<Alert, StoreError> {
            if let Some(error) = self.take_failure() {
                return Err(error);
            }
            let now = Utc::now();
            let alert = Alert {
                id: RecordId(format!("a-{}", self.next_id.fetch_add(1, Ordering::SeqCst))),
                title: draft.title.clone(),
                description: draft.description.clone(),
                risk_level: draft.risk_level,
                status: draft.status,
                user_id: identity.user_id.clone(),
                location: draft.location.clone(),
                created_at: now,
                updated_at: now,
            };
            self.rows.lock().unwrap().push(alert.clone());
            Ok(alert)
        }

        async fn update(&self, id: &RecordId, patch: &AlertPatch) -> Result<Alert, StoreError> {
            if let Some(error) = self.take_failure() {
                return Err(error);
            }
            let mut rows = self.rows.lock().unwrap();
            let alert = rows
                .iter_mut()
                .find(|alert| alert.id() == id)
                .ok_or(StoreError::MissingRecord)?;
            if let Some(title) = &patch.title {
                alert.title = title.clone();
            }
            if let Some(status) = patch.status {
                alert.status = status;
            }
            if let Some(risk_level) = patch.risk_level {
                alert.risk_level = risk_level;
            }
            alert.updated_at = Utc::now();
            Ok(alert.clone())
        }

        async fn delete(&self, id: &RecordId) -> Result<(), StoreError> {
            if let Some(error) = self.take_failure() {
                return Err(error);
            }
            self.rows.lock().unwrap().retain(|alert| alert.id() != id);
            Ok(())
        }
    }

    /// Zone store that rejects deletes of ids it does not hold, the way the
    /// backend's row security rejects them.
    struct FakeZoneStore {
        rows: Mutex<Vec<RiskZone>>,
    }

    #[async_trait]
    impl RecordStore<RiskZone> for FakeZoneStore {
        async fn select_all(&self) -> Result<Vec<RiskZone>, StoreError> {
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn insert(
            &self,
            identity: &Identity,
            draft: &NewRiskZone,
        ) -> Result<RiskZone, StoreError> {
            let zone = RiskZone {
                id: RecordId::from("z-new"),
                location: draft.location.clone(),
                description: draft.description.clone(),
                risk_level: draft.risk_level,
                status: draft.status,
                coordinates: draft.coordinates,
                user_id: identity.user_id.clone(),
            };
            self.rows.lock().unwrap().push(zone.clone());
            Ok(zone)
        }

        async fn update(
            &self,
            _id: &RecordId,
            _patch: &guardian_models::RiskZonePatch,
        ) -> Result<RiskZone, StoreError> {
            Err(StoreError::MissingRecord)
        }

        async fn delete(&self, id: &RecordId) -> Result<(), StoreError> {
            let mut rows = self.rows.lock().unwrap();
            if rows.iter().any(|zone| zone.id() == id) {
                rows.retain(|zone| zone.id() != id);
                Ok(())
            } else {
                Err(StoreError::Api {
                    status: 404,
                    message: format!("no risk zone with id {id}"),
                })
            }
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        events: Mutex<Vec<(bool, String, String)>>,
    }

    impl RecordingNotifier {
        fn events(&self) -> Vec<(bool, String, String)> {
            self.events.lock().unwrap().clone()
        }
    }

    impl Notifier for RecordingNotifier {
        fn success(&self, title: &str, body: &str) {
            self.events
                .lock()
                .unwrap()
                .push((true, title.to_string(), body.to_string()));
        }

        fn failure(&self, title: &str, body: &str) {
            self.events
                .lock()
                .unwrap()
                .push((false, title.to_string(), body.to_string()));
        }
    }

    fn alert(id: &str, title: &str, status: AlertStatus) -> Alert {
        let now = Utc::now();
        Alert {
            id: RecordId::from(id),
            title: title.to_string(),
            description: String::new(),
            risk_level: RiskLevel::Medium,
            status,
            user_id: "u-0".to_string(),
            location: Location::text("Somewhere"),
            created_at: now,
            updated_at: now,
        }
    }

    fn zone(id: &str) -> RiskZone {
        RiskZone {
            id: RecordId::from(id),
            location: Location::text("Harbor"),
            description: "Watch area".to_string(),
            risk_level: RiskLevel::High,
            status: ZoneStatus::Active,
            coordinates: Coordinates::new(1.0, 2.0),
            user_id: "u-0".to_string(),
        }
    }

    fn collection_with(
        rows: Vec<Alert>,
    ) -> (
        Collection<Alert>,
        Arc<FakeAlertStore>,
        Arc<RecordingNotifier>,
    ) {
        let store = Arc::new(FakeAlertStore::new(rows));
        let notifier = Arc::new(RecordingNotifier::default());
        let collection = Collection::new(store.clone(), notifier.clone());
        (collection, store, notifier)
    }

    #[tokio::test]
    async fn load_replaces_the_mirror() {
        let (mut alerts, _store, _notifier) = collection_with(vec![
            alert("a1", "First", AlertStatus::Active),
            alert("a2", "Second", AlertStatus::Resolved),
        ]);

        assert!(alerts.is_empty());
        assert!(alerts.load().await);
        assert_eq!(alerts.len(), 2);
        assert!(!alerts.is_busy(Operation::Load));
        assert!(alerts.last_error(Operation::Load).is_none());
    }

    #[tokio::test]
    async fn add_appends_exactly_one_matching_record() {
        let (mut alerts, _store, notifier) =
            collection_with(vec![alert("a1", "First", AlertStatus::Active)]);
        alerts.load().await;

        let created = alerts
            .add(
                &Identity::new("u-1"),
                NewAlert {
                    title: "Test".to_string(),
                    description: "desc".to_string(),
                    risk_level: RiskLevel::High,
                    status: AlertStatus::Active,
                    location: Location::point(1.0, 2.0),
                },
            )
            .await
            .expect("add should succeed");

        assert_eq!(alerts.len(), 2);
        assert_eq!(created.title, "Test");
        assert_eq!(created.risk_level, RiskLevel::High);
        assert_eq!(created.status, AlertStatus::Active);
        assert_eq!(created.location, Location::point(1.0, 2.0));
        assert_eq!(created.user_id, "u-1");
        assert_eq!(alerts.records().last().unwrap().id, created.id);

        let events = notifier.events();
        let (ok, title, body) = events.last().unwrap();
        assert!(ok);
        assert_eq!(title, "Alert created");
        assert_eq!(body, "The alert has been successfully created.");
    }

    #[tokio::test]
    async fn edit_updates_only_the_target_record() {
        let (mut alerts, _store, notifier) = collection_with(vec![
            alert("a1", "First", AlertStatus::Active),
            alert("a2", "Second", AlertStatus::Active),
        ]);
        alerts.load().await;

        let updated = alerts
            .edit(
                &RecordId::from("a1"),
                AlertPatch {
                    status: Some(AlertStatus::Resolved),
                    ..AlertPatch::default()
                },
            )
            .await
            .expect("edit should succeed");

        assert_eq!(updated.status, AlertStatus::Resolved);
        assert_eq!(
            alerts.get(&RecordId::from("a1")).unwrap().status,
            AlertStatus::Resolved
        );
        assert_eq!(
            alerts.get(&RecordId::from("a2")).unwrap().status,
            AlertStatus::Active,
            "non-target record must be untouched"
        );
        assert_eq!(notifier.events().last().unwrap().1, "Alert updated");
    }

    #[tokio::test]
    async fn remove_deletes_exactly_the_target_record() {
        let (mut alerts, _store, notifier) = collection_with(vec![
            alert("a1", "First", AlertStatus::Active),
            alert("a2", "Second", AlertStatus::Active),
        ]);
        alerts.load().await;

        assert!(alerts.remove(&RecordId::from("a1")).await);
        assert_eq!(alerts.len(), 1);
        assert!(alerts.get(&RecordId::from("a1")).is_none());
        assert!(alerts.get(&RecordId::from("a2")).is_some());
        assert_eq!(notifier.events().last().unwrap().1, "Alert deleted");
    }

    #[tokio::test]
    async fn failing_load_keeps_previous_mirror_and_records_error() {
        let (mut alerts, store, notifier) =
            collection_with(vec![alert("a1", "First", AlertStatus::Active)]);
        alerts.load().await;

        store.fail_next("connection reset");
        assert!(!alerts.load().await);

        assert_eq!(alerts.len(), 1, "mirror must survive a failed load");
        assert_eq!(alerts.last_error(Operation::Load), Some("connection reset"));
        assert!(!alerts.is_busy(Operation::Load));

        let (ok, title, body) = notifier.events().last().unwrap().clone();
        assert!(!ok);
        assert_eq!(title, "Error fetching alerts");
        assert_eq!(body, "connection reset");
    }

    #[tokio::test]
    async fn failing_add_leaves_collection_untouched() {
        let (mut alerts, store, notifier) =
            collection_with(vec![alert("a1", "First", AlertStatus::Active)]);
        alerts.load().await;
        let before: Vec<_> = alerts.records().to_vec();

        store.fail_next("row-level security violation");
        let created = alerts
            .add(
                &Identity::new("u-1"),
                NewAlert {
                    title: "Test".to_string(),
                    description: String::new(),
                    risk_level: RiskLevel::Low,
                    status: AlertStatus::Active,
                    location: Location::text("x"),
                },
            )
            .await;

        assert!(created.is_none());
        assert_eq!(alerts.records(), before.as_slice());
        assert_eq!(
            alerts.last_error(Operation::Add),
            Some("row-level security violation")
        );
        assert_eq!(notifier.events().last().unwrap().1, "Error creating alert");
    }

    #[tokio::test]
    async fn error_clears_when_operation_is_retried() {
        let (mut alerts, store, _notifier) = collection_with(vec![]);

        store.fail_next("boom");
        assert!(!alerts.load().await);
        assert!(alerts.last_error(Operation::Load).is_some());

        assert!(alerts.load().await);
        assert!(alerts.last_error(Operation::Load).is_none());
    }

    #[tokio::test]
    async fn operation_states_are_independent() {
        let (mut alerts, store, _notifier) = collection_with(vec![]);

        store.fail_next("insert denied");
        let created = alerts
            .add(
                &Identity::new("u-1"),
                NewAlert {
                    title: "Test".to_string(),
                    description: String::new(),
                    risk_level: RiskLevel::Low,
                    status: AlertStatus::Active,
                    location: Location::text("x"),
                },
            )
            .await;
        assert!(created.is_none());

        // A later successful load must not clear the add slot's error.
        assert!(alerts.load().await);
        assert_eq!(alerts.last_error(Operation::Add), Some("insert denied"));
        assert!(alerts.last_error(Operation::Load).is_none());
    }

    #[tokio::test]
    async fn removing_missing_zone_surfaces_error_and_keeps_list() {
        let store = Arc::new(FakeZoneStore {
            rows: Mutex::new(vec![zone("z1"), zone("z2")]),
        });
        let notifier = Arc::new(RecordingNotifier::default());
        let mut zones = Collection::new(store, notifier.clone());
        zones.load().await;

        assert!(!zones.remove(&RecordId::from("zone-1")).await);

        assert_eq!(zones.len(), 2, "list must be unchanged");
        assert_eq!(
            zones.last_error(Operation::Remove),
            Some("no risk zone with id zone-1")
        );
        let (ok, title, _body) = notifier.events().last().unwrap().clone();
        assert!(!ok);
        assert_eq!(title, "Error deleting risk zone");
    }

    #[tokio::test]
    async fn zone_notifications_use_the_two_word_noun() {
        let store = Arc::new(FakeZoneStore {
            rows: Mutex::new(vec![zone("z1")]),
        });
        let notifier = Arc::new(RecordingNotifier::default());
        let mut zones = Collection::new(store, notifier.clone());
        zones.load().await;

        assert!(zones.remove(&RecordId::from("z1")).await);
        let (_, title, body) = notifier.events().last().unwrap().clone();
        assert_eq!(title, "Risk zone deleted");
        assert_eq!(body, "The risk zone has been successfully deleted.");
    }

    #[test]
    fn headline_capitalizes_only_the_first_word() {
        assert_eq!(headline("alert", "created"), "Alert created");
        assert_eq!(headline("risk zone", "updated"), "Risk zone updated");
    }

    #[tokio::test]
    async fn log_notifier_leaves_operation_state_intact() {
        let store = Arc::new(FakeAlertStore::new(vec![alert(
            "a1",
            "First",
            AlertStatus::Active,
        )]));
        let mut alerts = Collection::new(store.clone(), Arc::new(LogNotifier));
        alerts.load().await;

        store.fail_next("connection reset");
        assert!(!alerts.remove(&RecordId::from("a1")).await);
        assert_eq!(alerts.len(), 1);
        assert_eq!(
            alerts.last_error(Operation::Remove),
            Some("connection reset")
        );
    }
}
