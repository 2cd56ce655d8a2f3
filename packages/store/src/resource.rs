//! # Resource stores
//!
//! One [`ResourceStore`] per resource type holds a disposable read cache of
//! the remote table plus a loading flag and the last fetch error. Every
//! read is a wholesale snapshot replacement; every successful insert
//! triggers a fresh fetch. The store never treats its local list as a
//! source of truth.
//!
//! Error policy is uniform across resources: fetch failures degrade the
//! cache to empty and are recorded in `last_error` without surfacing a
//! `Result` to the caller, while insert failures are returned so the view
//! can show them next to the form.

use serde_json::Value;

use crate::backend::{BackendError, DataBackend};
use crate::models::{Resource, Syllabus, Thesis, UserInfo};

/// Error returned by mutating store operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No signed-in user; the operation was rejected before any network call.
    #[error("not signed in")]
    NotAuthenticated,
    #[error(transparent)]
    Backend(#[from] BackendError),
    /// A row from the service did not match the expected record shape.
    #[error("malformed record: {0}")]
    Decode(String),
}

/// Read cache and insert frontend for one table of the data service.
#[derive(Clone, Debug)]
pub struct ResourceStore<R: Resource, B: DataBackend> {
    backend: B,
    records: Vec<R>,
    loading: bool,
    last_error: Option<StoreError>,
}

pub type ThesesStore<B> = ResourceStore<Thesis, B>;
pub type SyllabiStore<B> = ResourceStore<Syllabus, B>;

impl<R: Resource, B: DataBackend> ResourceStore<R, B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            records: Vec::new(),
            loading: false,
            last_error: None,
        }
    }

    /// Fetched records, newest first.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Error recorded by the most recent failed fetch, if any.
    pub fn last_error(&self) -> Option<&StoreError> {
        self.last_error.as_ref()
    }

    /// Replace the local list with a fresh snapshot of the remote table.
    ///
    /// On failure the list is cleared and the error is recorded in
    /// `last_error`; nothing is returned to the caller, so an empty list is
    /// indistinguishable from a failed fetch without consulting the slot.
    pub async fn fetch_all(&mut self) {
        self.loading = true;
        let outcome = match self.backend.select_all(R::TABLE).await {
            Ok(rows) => rows
                .into_iter()
                .map(|row| {
                    serde_json::from_value::<R>(row)
                        .map_err(|err| StoreError::Decode(err.to_string()))
                })
                .collect::<Result<Vec<R>, StoreError>>(),
            Err(err) => Err(err.into()),
        };
        match outcome {
            Ok(rows) => {
                self.records = rows;
                self.last_error = None;
            }
            Err(err) => {
                tracing::error!("failed to fetch {}: {}", R::TABLE, err);
                self.records.clear();
                self.last_error = Some(err);
            }
        }
        self.loading = false;
    }

    /// Insert a row owned by `user`, then refresh the local list.
    ///
    /// Without a signed-in user no network call is made and the list is
    /// left untouched.
    pub async fn insert(
        &mut self,
        user: Option<&UserInfo>,
        payload: &R::Insert,
    ) -> Result<(), StoreError> {
        let Some(user) = user else {
            tracing::warn!("insert into {} rejected: no signed-in user", R::TABLE);
            return Err(StoreError::NotAuthenticated);
        };

        let mut row = serde_json::to_value(payload)
            .map_err(|err| StoreError::Decode(err.to_string()))?;
        if let Value::Object(map) = &mut row {
            map.insert("user_id".into(), Value::String(user.id.to_string()));
        }

        self.backend.insert(R::TABLE, row).await?;
        self.fetch_all().await;
        Ok(())
    }

    /// Clear the local list. Used on sign-out.
    pub fn reset(&mut self) {
        self.records.clear();
        self.last_error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryBackend;
    use crate::models::{NewSyllabus, NewThesis};
    use uuid::Uuid;

    fn user(email: &str) -> UserInfo {
        UserInfo {
            id: Uuid::new_v4(),
            email: email.to_string(),
        }
    }

    fn new_thesis(title: &str) -> NewThesis {
        NewThesis {
            title: title.to_string(),
            author: "A. Student".to_string(),
            file_url: format!("https://files.example/{title}.pdf"),
        }
    }

    #[tokio::test]
    async fn fetch_all_replaces_list_newest_first() {
        let backend = MemoryBackend::new();
        let mut store = ThesesStore::new(backend.clone());
        let u = user("grad@x.edu");

        store.insert(Some(&u), &new_thesis("first")).await.unwrap();
        store.insert(Some(&u), &new_thesis("second")).await.unwrap();
        store.insert(Some(&u), &new_thesis("third")).await.unwrap();

        assert_eq!(store.records().len(), 3);
        assert_eq!(store.records()[0].title, "third");
        assert_eq!(store.records()[2].title, "first");
        assert!(store
            .records()
            .windows(2)
            .all(|w| w[0].created_at >= w[1].created_at));
    }

    #[tokio::test]
    async fn fetch_failure_degrades_to_empty_without_erroring() {
        let backend = MemoryBackend::new();
        let mut store = ThesesStore::new(backend.clone());
        let u = user("grad@x.edu");

        store.insert(Some(&u), &new_thesis("kept")).await.unwrap();
        assert_eq!(store.records().len(), 1);

        backend.fail_select(true);
        store.fetch_all().await;

        assert!(store.records().is_empty());
        assert!(matches!(store.last_error(), Some(StoreError::Backend(_))));
        assert!(!store.is_loading());

        // A later successful fetch clears the error slot.
        backend.fail_select(false);
        store.fetch_all().await;
        assert_eq!(store.records().len(), 1);
        assert!(store.last_error().is_none());
    }

    #[tokio::test]
    async fn insert_without_user_makes_no_call() {
        let backend = MemoryBackend::new();
        let mut store = SyllabiStore::new(backend.clone());
        let u = user("fac@x.edu");

        let payload = NewSyllabus {
            course_code: "CS101".to_string(),
            title: "Intro".to_string(),
            file_url: "https://files.example/cs101.pdf".to_string(),
        };
        store.insert(Some(&u), &payload).await.unwrap();
        let before = store.records().to_vec();
        let calls = backend.insert_calls();

        let err = store.insert(None, &payload).await.unwrap_err();

        assert_eq!(err, StoreError::NotAuthenticated);
        assert_eq!(backend.insert_calls(), calls);
        assert_eq!(store.records(), before.as_slice());
    }

    #[tokio::test]
    async fn insert_attaches_owner_and_lists_newest_first() {
        let backend = MemoryBackend::new();
        let mut store = SyllabiStore::new(backend.clone());
        let u1 = user("u1@x.edu");

        store
            .insert(
                Some(&u1),
                &NewSyllabus {
                    course_code: "CS101".to_string(),
                    title: "Intro".to_string(),
                    file_url: "https://files.example/cs101.pdf".to_string(),
                },
            )
            .await
            .unwrap();
        store
            .insert(
                Some(&u1),
                &NewSyllabus {
                    course_code: "CS201".to_string(),
                    title: "Data Structures".to_string(),
                    file_url: "https://files.example/cs201.pdf".to_string(),
                },
            )
            .await
            .unwrap();

        let records = store.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].course_code, "CS201");
        assert!(records.iter().all(|s| s.user_id == u1.id));
    }

    #[tokio::test]
    async fn insert_failure_is_returned_and_list_survives() {
        let backend = MemoryBackend::new();
        let mut store = ThesesStore::new(backend.clone());
        let u = user("grad@x.edu");

        store.insert(Some(&u), &new_thesis("kept")).await.unwrap();

        backend.fail_insert(true);
        let err = store.insert(Some(&u), &new_thesis("lost")).await.unwrap_err();

        assert!(matches!(err, StoreError::Backend(_)));
        assert_eq!(store.records().len(), 1);
    }

    #[tokio::test]
    async fn reset_clears_records_and_error() {
        let backend = MemoryBackend::new();
        let mut store = ThesesStore::new(backend.clone());
        let u = user("grad@x.edu");

        store.insert(Some(&u), &new_thesis("t")).await.unwrap();
        backend.fail_select(true);
        store.fetch_all().await;
        assert!(store.last_error().is_some());

        store.reset();

        assert!(store.records().is_empty());
        assert!(store.last_error().is_none());
    }
}
