//! Authentication errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Authentication error
#[derive(Debug)]
pub enum AuthError {
    MissingAuthorization,
    InvalidAuthorizationFormat,
    InvalidToken,
    ExpiredToken,
    /// Role or identity check failed for an otherwise authenticated caller
    Forbidden,
    /// Storage read during the role check failed
    RoleLookupError,
    /// Signer misconfiguration while issuing a token
    TokenCreation,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AuthError::MissingAuthorization
            | AuthError::InvalidAuthorizationFormat
            | AuthError::InvalidToken
            | AuthError::ExpiredToken => (StatusCode::UNAUTHORIZED, "unauthorized access"),
            AuthError::Forbidden => (StatusCode::FORBIDDEN, "forbidden access"),
            AuthError::RoleLookupError | AuthError::TokenCreation => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
            }
        };

        let body = Json(json!({
            "message": message,
        }));

        (status, body).into_response()
    }
}
