//! Accounts domain entities

use chrono::{DateTime, Utc};
use serde::Serialize;
use surveymaster_auth::Role;
use uuid::Uuid;

/// A registered user.
///
/// Email uniqueness is enforced by an insert-time pre-check in the handler,
/// not by a database constraint. `role` is absent for ordinary callers and
/// granted by an admin through the role-patch endpoint.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub role: Option<Role>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Whether this user currently holds `role`.
    pub fn has_role(&self, role: Role) -> bool {
        self.role == Some(role)
    }
}
