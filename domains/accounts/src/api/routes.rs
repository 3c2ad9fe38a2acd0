//! Route definitions for the accounts domain API

use axum::{
    routing::{delete, get, post},
    Router,
};

use super::handlers::{auth, users};
use super::middleware::AccountsState;

/// Token issuance route
fn token_routes() -> Router<AccountsState> {
    Router::new().route("/jwt", post(auth::issue_token))
}

/// User management routes
///
/// The admin self-check and the role patch share one path with different
/// parameter meanings (email vs id), so they are registered on a single
/// segment name.
fn user_routes() -> Router<AccountsState> {
    Router::new()
        .route("/users", post(users::create_user).get(users::list_users))
        .route(
            "/users/admin/{identifier}",
            get(users::admin_flag).patch(users::set_role),
        )
        .route("/users/surveyor/{email}", get(users::surveyor_flag))
        .route("/users/{id}", delete(users::delete_user))
}

/// Create all accounts domain API routes
pub fn routes() -> Router<AccountsState> {
    Router::new().merge(token_routes()).merge(user_routes())
}
