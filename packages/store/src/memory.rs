use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde_json::Value;
use uuid::Uuid;

use crate::backend::{BackendError, DataBackend, IdentityBackend};
use crate::models::UserInfo;

/// In-memory stand-in for the hosted service, used in tests.
///
/// Models the service contract the live client relies on: inserts are
/// stamped with a server-assigned `id` and `created_at`, and selects come
/// back ordered by `created_at` descending.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    user: Arc<Mutex<Option<UserInfo>>>,
    tables: Arc<Mutex<HashMap<String, Vec<Value>>>>,
    seq: Arc<Mutex<i64>>,
    fail_identity: Arc<Mutex<bool>>,
    fail_select: Arc<Mutex<bool>>,
    fail_insert: Arc<Mutex<bool>>,
    insert_calls: Arc<Mutex<usize>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sign a user in or out of the simulated session.
    pub fn set_user(&self, user: Option<UserInfo>) {
        *self.user.lock().unwrap() = user;
    }

    pub fn fail_identity(&self, fail: bool) {
        *self.fail_identity.lock().unwrap() = fail;
    }

    pub fn fail_select(&self, fail: bool) {
        *self.fail_select.lock().unwrap() = fail;
    }

    pub fn fail_insert(&self, fail: bool) {
        *self.fail_insert.lock().unwrap() = fail;
    }

    /// Number of insert calls that reached the backend.
    pub fn insert_calls(&self) -> usize {
        *self.insert_calls.lock().unwrap()
    }

    fn next_row_stamp(&self) -> (Uuid, DateTime<Utc>) {
        let mut seq = self.seq.lock().unwrap();
        *seq += 1;
        let id = Uuid::from_u128(*seq as u128);
        // Monotonic timestamps so insertion order maps onto created_at order.
        let created_at = DateTime::<Utc>::from_timestamp(1_700_000_000 + *seq, 0)
            .unwrap_or(DateTime::<Utc>::UNIX_EPOCH);
        (id, created_at)
    }

    fn created_at_of(row: &Value) -> Option<DateTime<Utc>> {
        row.get("created_at")
            .and_then(Value::as_str)
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|t| t.with_timezone(&Utc))
    }
}

impl IdentityBackend for MemoryBackend {
    async fn current_user(&self) -> Result<Option<UserInfo>, BackendError> {
        if *self.fail_identity.lock().unwrap() {
            return Err(BackendError::Service("identity service unreachable".into()));
        }
        Ok(self.user.lock().unwrap().clone())
    }
}

impl DataBackend for MemoryBackend {
    async fn select_all(&self, table: &str) -> Result<Vec<Value>, BackendError> {
        if *self.fail_select.lock().unwrap() {
            return Err(BackendError::Service("query failed".into()));
        }
        let mut rows = self
            .tables
            .lock()
            .unwrap()
            .get(table)
            .cloned()
            .unwrap_or_default();
        rows.sort_by_key(|row| std::cmp::Reverse(Self::created_at_of(row)));
        Ok(rows)
    }

    async fn insert(&self, table: &str, row: Value) -> Result<(), BackendError> {
        *self.insert_calls.lock().unwrap() += 1;
        if *self.fail_insert.lock().unwrap() {
            return Err(BackendError::Service("insert failed".into()));
        }
        let (id, created_at) = self.next_row_stamp();
        let mut row = row;
        if let Value::Object(map) = &mut row {
            map.insert("id".into(), Value::String(id.to_string()));
            map.insert("created_at".into(), Value::String(created_at.to_rfc3339()));
        }
        self.tables
            .lock()
            .unwrap()
            .entry(table.to_string())
            .or_default()
            .push(row);
        Ok(())
    }
}
