//! # Domain models for portal records
//!
//! Defines the rows the portal reads from and writes to the hosted data
//! service, plus the client-safe view of the signed-in user.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`UserInfo`] | The signed-in user as reported by the identity service: id and email. Re-derived from the service on demand, never authoritative on the client. |
//! | [`Thesis`] / [`NewThesis`] | A thesis row (`theses` table) and its insert payload. The payload carries only the resource fields; the store attaches the owning `user_id` and the service assigns `id` and `created_at`. |
//! | [`Syllabus`] / [`NewSyllabus`] | A syllabus row (`syllabi` table) and its insert payload, same split. |
//!
//! The [`Resource`] trait ties a record type to its table name, insert
//! payload type, and creation timestamp, so one store implementation covers
//! every resource.

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use uuid::Uuid;

/// The signed-in user as reported by the identity service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: Uuid,
    pub email: String,
}

/// A record type stored in one table of the hosted data service.
pub trait Resource: DeserializeOwned + Serialize + Clone + PartialEq + 'static {
    /// Table name on the data service.
    const TABLE: &'static str;
    /// Payload submitted on insert. The owning `user_id` is attached by the
    /// store; `id` and `created_at` are assigned by the service.
    type Insert: Serialize;
    /// Creation timestamp assigned by the service.
    fn created_at(&self) -> DateTime<Utc>;
}

/// A thesis row from the `theses` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thesis {
    pub id: Uuid,
    /// User who uploaded the record.
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub title: String,
    pub author: String,
    /// Link to the uploaded document file.
    pub file_url: String,
}

/// Insert payload for a thesis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewThesis {
    pub title: String,
    pub author: String,
    pub file_url: String,
}

impl Resource for Thesis {
    const TABLE: &'static str = "theses";
    type Insert = NewThesis;

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// A syllabus row from the `syllabi` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Syllabus {
    pub id: Uuid,
    /// User who uploaded the record.
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub course_code: String,
    pub title: String,
    /// Link to the uploaded document file.
    pub file_url: String,
}

/// Insert payload for a syllabus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSyllabus {
    pub course_code: String,
    pub title: String,
    pub file_url: String,
}

impl Resource for Syllabus {
    const TABLE: &'static str = "syllabi";
    type Insert = NewSyllabus;

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
