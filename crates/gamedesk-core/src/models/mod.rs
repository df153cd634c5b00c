//! Domain records for the four management tables: users, admins, game
//! topics, and game statistics.
//!
//! Each type implements [`Record`] as a declarative schema descriptor and
//! carries its own deletion-protection policy, so the engine stays fully
//! generic.

pub mod seed;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::record::{FieldValue, Record};

// ===========================================================================
// Users
// ===========================================================================

/// Account standing of a regular user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Withdrawn,
}

impl UserStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Withdrawn => "withdrawn",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Member,
    Admin,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Member => "member",
            Role::Admin => "admin",
        }
    }
}

/// One row of the user management table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub created_at: NaiveDate,
    /// Last account modification; null for never-modified accounts.
    pub modified_at: Option<NaiveDate>,
    pub status: UserStatus,
    pub role: Role,
}

impl UserRecord {
    /// Bulk delete skips withdrawn accounts and admin-role accounts.
    pub fn can_delete(&self) -> bool {
        self.status != UserStatus::Withdrawn && self.role != Role::Admin
    }
}

impl Record for UserRecord {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }

    fn fields() -> &'static [&'static str] {
        &[
            "id",
            "username",
            "email",
            "created_at",
            "modified_at",
            "status",
            "role",
        ]
    }

    fn searchable() -> &'static [&'static str] {
        &["username", "email"]
    }

    fn value(&self, field: &str) -> FieldValue {
        match field {
            "id" => FieldValue::Int(self.id),
            "username" => FieldValue::Text(self.username.clone()),
            "email" => FieldValue::Text(self.email.clone()),
            "created_at" => FieldValue::Text(self.created_at.to_string()),
            "modified_at" => match self.modified_at {
                Some(d) => FieldValue::Text(d.to_string()),
                None => FieldValue::Null,
            },
            "status" => FieldValue::Text(self.status.as_str().to_string()),
            "role" => FieldValue::Text(self.role.as_str().to_string()),
            _ => FieldValue::Null,
        }
    }
}

// ===========================================================================
// Admins
// ===========================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdminStatus {
    Active,
    Withdrawn,
}

impl AdminStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            AdminStatus::Active => "active",
            AdminStatus::Withdrawn => "withdrawn",
        }
    }
}

/// What an administrator account is allowed to do in the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    View,
    Edit,
    Admin,
}

impl Permission {
    pub fn as_str(self) -> &'static str {
        match self {
            Permission::View => "view",
            Permission::Edit => "edit",
            Permission::Admin => "admin",
        }
    }
}

/// One row of the administrator management table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: NaiveDate,
    pub modified_at: Option<NaiveDate>,
    pub status: AdminStatus,
    pub permission: Permission,
}

impl AdminRecord {
    /// Bulk delete skips withdrawn admins and full-admin accounts.
    pub fn can_delete(&self) -> bool {
        self.status != AdminStatus::Withdrawn && self.permission != Permission::Admin
    }
}

impl Record for AdminRecord {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }

    fn fields() -> &'static [&'static str] {
        &[
            "id",
            "name",
            "email",
            "created_at",
            "modified_at",
            "status",
            "permission",
        ]
    }

    fn searchable() -> &'static [&'static str] {
        &["name", "email"]
    }

    fn value(&self, field: &str) -> FieldValue {
        match field {
            "id" => FieldValue::Int(self.id),
            "name" => FieldValue::Text(self.name.clone()),
            "email" => FieldValue::Text(self.email.clone()),
            "created_at" => FieldValue::Text(self.created_at.to_string()),
            "modified_at" => match self.modified_at {
                Some(d) => FieldValue::Text(d.to_string()),
                None => FieldValue::Null,
            },
            "status" => FieldValue::Text(self.status.as_str().to_string()),
            "permission" => FieldValue::Text(self.permission.as_str().to_string()),
            _ => FieldValue::Null,
        }
    }
}

// ===========================================================================
// Game topics
// ===========================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TopicStatus {
    Active,
    Deleted,
}

impl TopicStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            TopicStatus::Active => "active",
            TopicStatus::Deleted => "deleted",
        }
    }
}

/// One row of the game-topic management table. Topics are soft-deleted:
/// the row survives with a status transition and a deletion timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicRecord {
    pub id: i64,
    pub title: String,
    pub created_at: NaiveDate,
    pub question_count: i64,
    pub status: TopicStatus,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl TopicRecord {
    /// Already-deleted topics are excluded from bulk delete.
    pub fn can_delete(&self) -> bool {
        self.status != TopicStatus::Deleted
    }

    /// Soft-delete transition applied by the store.
    pub fn mark_deleted(&mut self) {
        self.status = TopicStatus::Deleted;
        self.deleted_at = Some(Utc::now());
    }
}

impl Record for TopicRecord {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }

    fn fields() -> &'static [&'static str] {
        &[
            "id",
            "title",
            "created_at",
            "question_count",
            "status",
            "deleted_at",
        ]
    }

    fn searchable() -> &'static [&'static str] {
        &["title"]
    }

    fn value(&self, field: &str) -> FieldValue {
        match field {
            "id" => FieldValue::Int(self.id),
            "title" => FieldValue::Text(self.title.clone()),
            "created_at" => FieldValue::Text(self.created_at.to_string()),
            "question_count" => FieldValue::Int(self.question_count),
            "status" => FieldValue::Text(self.status.as_str().to_string()),
            "deleted_at" => match self.deleted_at {
                Some(t) => FieldValue::Text(t.to_rfc3339()),
                None => FieldValue::Null,
            },
            _ => FieldValue::Null,
        }
    }
}

// ===========================================================================
// Game statistics
// ===========================================================================

/// One row of the per-topic game statistics table. Read-only; served
/// page-by-page by the backend (server pagination mode).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameStatRecord {
    pub topic_id: i64,
    pub title: String,
    pub usage_count: i64,
    pub question_count: i64,
    pub completion_rate: f64,
}

impl Record for GameStatRecord {
    type Id = i64;

    fn id(&self) -> i64 {
        self.topic_id
    }

    fn fields() -> &'static [&'static str] {
        &[
            "id",
            "title",
            "usage_count",
            "question_count",
            "completion_rate",
        ]
    }

    fn searchable() -> &'static [&'static str] {
        &["title"]
    }

    fn value(&self, field: &str) -> FieldValue {
        match field {
            "id" => FieldValue::Int(self.topic_id),
            "title" => FieldValue::Text(self.title.clone()),
            "usage_count" => FieldValue::Int(self.usage_count),
            "question_count" => FieldValue::Int(self.question_count),
            "completion_rate" => FieldValue::Float(self.completion_rate),
            _ => FieldValue::Null,
        }
    }
}
