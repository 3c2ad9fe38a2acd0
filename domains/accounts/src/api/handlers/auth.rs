//! Token issuance handler
//!
//! POST /jwt - exchange an identity payload for a signed access token

use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};
use surveymaster_auth::AuthError;

use crate::api::middleware::AccountsState;

/// Request for token issuance.
///
/// The client submits an arbitrary claims object; only the email survives.
/// Extra fields are dropped here rather than signed into the token.
#[derive(Debug, Deserialize)]
pub struct IssueTokenRequest {
    pub email: String,
}

/// Response carrying the signed token
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// POST /jwt - issue a signed, 1-hour token for the submitted identity
pub async fn issue_token(
    State(state): State<AccountsState>,
    Json(request): Json<IssueTokenRequest>,
) -> Result<Json<TokenResponse>, AuthError> {
    let token = state.auth.issue(&request.email)?;
    Ok(Json(TokenResponse { token }))
}
