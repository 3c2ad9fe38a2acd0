//! Token signing, verification, and header extraction helpers

use axum::http::HeaderValue;
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};

use crate::claims::Claims;
use crate::config::AuthConfig;
use crate::error::AuthError;

/// Sign a token for the given principal, expiring one hour from now.
pub(crate) fn issue_token(email: &str, config: &AuthConfig) -> Result<String, AuthError> {
    let claims = Claims::new(email);
    let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_ref());

    encode(&Header::new(Algorithm::HS256), &claims, &encoding_key).map_err(|e| {
        tracing::error!(error = %e, "Token signing failed");
        AuthError::TokenCreation
    })
}

/// Validate signature and expiry; returns the decoded claims.
///
/// Claims are trusted only when verification succeeds against the server
/// secret. Expired tokens are distinguished from malformed or tampered ones.
pub(crate) fn verify_token(token: &str, config: &AuthConfig) -> Result<Claims, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_aud = false;

    let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_ref());

    let token_data = decode::<Claims>(token, &decoding_key, &validation).map_err(|e| {
        tracing::debug!(error = %e, "Token validation failed");
        match e.kind() {
            ErrorKind::ExpiredSignature => AuthError::ExpiredToken,
            _ => AuthError::InvalidToken,
        }
    })?;

    Ok(token_data.claims)
}

/// Extract bearer token from Authorization header
pub(crate) fn extract_bearer_token(header: &HeaderValue) -> Result<String, AuthError> {
    let header_str = header
        .to_str()
        .map_err(|_| AuthError::InvalidAuthorizationFormat)?;

    if let Some(token) = header_str.strip_prefix("Bearer ") {
        Ok(token.to_string())
    } else {
        Err(AuthError::InvalidAuthorizationFormat)
    }
}
