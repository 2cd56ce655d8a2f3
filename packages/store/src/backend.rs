//! Backend traits over the hosted identity and data services.
//!
//! The stores and the session gate never talk to the network themselves.
//! All remote access goes through these two traits, so the same logic works
//! against the live HTTP client (the `api` crate) or the in-memory backend
//! used in tests ([`crate::MemoryBackend`]).

use serde_json::Value;

use crate::models::UserInfo;

/// Error reported by a backend call. The hosted service is opaque to the
/// client, so failures carry only a message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    #[error("service error: {0}")]
    Service(String),
}

/// Session queries against the identity service.
pub trait IdentityBackend {
    /// Query the current session. `Ok(None)` means no user is signed in.
    fn current_user(
        &self,
    ) -> impl std::future::Future<Output = Result<Option<UserInfo>, BackendError>>;
}

/// Row queries against the data service.
pub trait DataBackend {
    /// Select every row of `table`, ordered by `created_at` descending.
    /// The ordering is part of the remote query, not a client-side sort.
    fn select_all(
        &self,
        table: &str,
    ) -> impl std::future::Future<Output = Result<Vec<Value>, BackendError>>;

    /// Insert a single row into `table`. The row already carries the owning
    /// `user_id`; the service assigns `id` and `created_at`.
    fn insert(
        &self,
        table: &str,
        row: Value,
    ) -> impl std::future::Future<Output = Result<(), BackendError>>;
}
