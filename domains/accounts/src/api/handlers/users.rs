//! User management API handlers
//!
//! Implements the users collection operations:
//! - POST /users - register a user (idempotent on duplicate email)
//! - GET /users - list all users (admin only)
//! - GET /users/admin/{email} - admin flag self-check (same identity only)
//! - PATCH /users/admin/{id} - set a user's role (admin only)
//! - GET /users/surveyor/{email} - surveyor flag self-check (same identity only)
//! - DELETE /users/{id} - delete a user (admin only)

use axum::{
    extract::{Path, State},
    response::Json,
};
use serde::{Deserialize, Serialize};
use surveymaster_auth::{AdminUser, AuthUser, Role};
use surveymaster_common::Error;
use uuid::Uuid;

use crate::api::middleware::AccountsState;
use crate::domain::entities::User;

/// Request for user registration. Extra fields in the submitted document are
/// ignored.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub name: Option<String>,
}

/// Response for user registration.
///
/// A duplicate email is not an error: the insert is short-circuited and
/// signalled with a null `insertedId`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserResponse {
    pub inserted_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Role flag self-check response, e.g. `{"admin": true}`
#[derive(Debug, Serialize)]
pub struct AdminFlagResponse {
    pub admin: bool,
}

#[derive(Debug, Serialize)]
pub struct SurveyorFlagResponse {
    pub surveyor: bool,
}

/// Request for the role patch
#[derive(Debug, Deserialize)]
pub struct SetRoleRequest {
    pub role: Role,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoleResponse {
    pub matched_count: u64,
    pub modified_count: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteUserResponse {
    pub deleted_count: u64,
}

/// POST /users - register a user
///
/// Duplicate emails short-circuit with a success response rather than an
/// error status; the pre-check (not a database constraint) is what enforces
/// uniqueness.
pub async fn create_user(
    State(state): State<AccountsState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<Json<CreateUserResponse>, Error> {
    if state
        .repos
        .users
        .find_by_email(&request.email)
        .await?
        .is_some()
    {
        return Ok(Json(CreateUserResponse {
            inserted_id: None,
            message: Some("user already exists".to_string()),
        }));
    }

    let id = state
        .repos
        .users
        .insert(&request.email, request.name.as_deref())
        .await?;

    Ok(Json(CreateUserResponse {
        inserted_id: Some(id),
        message: None,
    }))
}

/// GET /users - list all users (admin only)
pub async fn list_users(
    AdminUser(_claims): AdminUser,
    State(state): State<AccountsState>,
) -> Result<Json<Vec<User>>, Error> {
    let users = state.repos.users.list().await?;
    Ok(Json(users))
}

/// GET /users/admin/{email} - does the caller hold the admin role?
///
/// The path email must equal the authenticated email, independent of role;
/// this stops one authenticated user from probing another's role flags.
/// A missing user record reads as `false`.
pub async fn admin_flag(
    AuthUser(claims): AuthUser,
    State(state): State<AccountsState>,
    Path(email): Path<String>,
) -> Result<Json<AdminFlagResponse>, Error> {
    if email != claims.email {
        return Err(Error::Authorization("forbidden access".to_string()));
    }

    let user = state.repos.users.find_by_email(&email).await?;
    let admin = user.map(|u| u.has_role(Role::Admin)).unwrap_or(false);

    Ok(Json(AdminFlagResponse { admin }))
}

/// GET /users/surveyor/{email} - does the caller hold the surveyor role?
pub async fn surveyor_flag(
    AuthUser(claims): AuthUser,
    State(state): State<AccountsState>,
    Path(email): Path<String>,
) -> Result<Json<SurveyorFlagResponse>, Error> {
    if email != claims.email {
        return Err(Error::Authorization("forbidden access".to_string()));
    }

    let user = state.repos.users.find_by_email(&email).await?;
    let surveyor = user.map(|u| u.has_role(Role::Surveyor)).unwrap_or(false);

    Ok(Json(SurveyorFlagResponse { surveyor }))
}

/// PATCH /users/admin/{id} - set a user's role (admin only)
///
/// A malformed identifier maps to the same generic 500 as a storage failure;
/// repeating the same patch is idempotent.
pub async fn set_role(
    AdminUser(_claims): AdminUser,
    State(state): State<AccountsState>,
    Path(identifier): Path<String>,
    Json(request): Json<SetRoleRequest>,
) -> Result<Json<UpdateRoleResponse>, Error> {
    let generic = || Error::Internal("Error updating user role".to_string());

    let id = Uuid::parse_str(&identifier).map_err(|_| generic())?;
    let matched = state
        .repos
        .users
        .set_role(id, request.role)
        .await
        .map_err(|_| generic())?;

    Ok(Json(UpdateRoleResponse {
        matched_count: matched,
        modified_count: matched,
    }))
}

/// DELETE /users/{id} - delete at most one user by id (admin only)
pub async fn delete_user(
    AdminUser(_claims): AdminUser,
    State(state): State<AccountsState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteUserResponse>, Error> {
    let deleted = state.repos.users.delete(id).await?;
    Ok(Json(DeleteUserResponse {
        deleted_count: deleted,
    }))
}
