//! Auth read-model types
//!
//! Lightweight view of the user row owned by the accounts domain, carrying
//! only what authorization decisions need.

use serde::{Deserialize, Serialize};

/// Role attribute on a user record, used for authorization decisions.
///
/// A user with no role is an ordinary caller; roles are granted by an admin
/// through the role-patch endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, Serialize, Deserialize)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Surveyor,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Surveyor => write!(f, "surveyor"),
        }
    }
}
