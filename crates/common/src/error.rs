//! Common error types and handling for SurveyMaster
//!
//! Every user-visible error renders as a JSON body of the form
//! `{"message": "..."}`; storage detail is logged server-side and never
//! leaked into the response. Authentication failures are handled separately
//! by the auth crate's own error type.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Common result type
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the SurveyMaster application
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Authorization error: {0}")]
    Authorization(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Get the appropriate HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Authorization(_) => StatusCode::FORBIDDEN,
            Error::Database(_) | Error::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message exposed in the response body.
    ///
    /// `Internal` carries a handler-chosen generic message; raw storage
    /// errors collapse to a fixed string.
    pub fn public_message(&self) -> String {
        match self {
            Error::Authorization(msg) | Error::Internal(msg) => msg.clone(),
            Error::Database(_) => "internal server error".to_string(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Log internal errors with full context
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "Internal server error");
        }

        let body = Json(json!({
            "message": self.public_message(),
        }));

        (status, body).into_response()
    }
}
