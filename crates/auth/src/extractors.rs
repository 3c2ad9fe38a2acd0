//! Axum extractors for authentication
//!
//! Generic over any state `S` where `AuthBackend: FromRef<S>`.
//! This is axum's idiomatic nested-state pattern.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::backend::AuthBackend;
use crate::claims::Claims;
use crate::error::AuthError;
use crate::jwt::extract_bearer_token;
use crate::types::Role;

/// Authenticated caller extractor.
///
/// Requires `Authorization: Bearer <token>`; on success the decoded claims
/// are handed to the handler. Performs no storage reads.
#[derive(Debug)]
pub struct AuthUser(pub Claims);

impl<S> FromRequestParts<S> for AuthUser
where
    AuthBackend: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let backend = AuthBackend::from_ref(state);

        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or(AuthError::MissingAuthorization)?;

        let token = extract_bearer_token(auth_header)?;
        let claims = backend.verify(&token)?;

        Ok(AuthUser(claims))
    }
}

/// Admin-only extractor.
///
/// Like `AuthUser` but additionally requires the caller's user record to
/// carry the `admin` role, looked up fresh from storage on every request.
/// Non-admin callers (including principals with no user record) are rejected
/// with 403 FORBIDDEN.
#[derive(Debug)]
pub struct AdminUser(pub Claims);

impl<S> FromRequestParts<S> for AdminUser
where
    AuthBackend: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let AuthUser(claims) = AuthUser::from_request_parts(parts, state).await?;

        let backend = AuthBackend::from_ref(state);
        if !backend.has_role(&claims.email, Role::Admin).await? {
            return Err(AuthError::Forbidden);
        }

        Ok(AdminUser(claims))
    }
}
