//! Concrete authentication backend
//!
//! Wraps `PgPool` + `AuthConfig` and owns the auth-specific storage reads.
//! Uses runtime `sqlx` queries (not macros) so the gate stays decoupled from
//! the accounts domain that owns the table.

use sqlx::PgPool;

use crate::claims::Claims;
use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::jwt;
use crate::types::Role;

/// Concrete authentication backend.
///
/// Wraps a database pool and auth configuration. Issues and verifies tokens
/// and derives role trust from a fresh storage read on every check, never
/// from the token itself, so a revoked role is denied on the next request.
///
/// Domain states expose this via `FromRef`:
/// ```ignore
/// impl FromRef<MyDomainState> for AuthBackend {
///     fn from_ref(state: &MyDomainState) -> Self {
///         state.auth.clone()
///     }
/// }
/// ```
#[derive(Clone)]
pub struct AuthBackend {
    pool: PgPool,
    config: AuthConfig,
}

impl AuthBackend {
    pub fn new(pool: PgPool, config: AuthConfig) -> Self {
        Self { pool, config }
    }

    /// Issue a signed token for the given principal (1-hour expiry).
    pub fn issue(&self, email: &str) -> Result<String, AuthError> {
        jwt::issue_token(email, &self.config)
    }

    /// Verify a token and return its claims. No side effects.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        jwt::verify_token(token, &self.config)
    }

    /// Current role on the user record for this principal, if any.
    pub async fn find_role(&self, email: &str) -> Result<Option<Role>, AuthError> {
        let role: Option<Option<Role>> =
            sqlx::query_scalar("SELECT role FROM users WHERE email = $1")
                .bind(email)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!(error = %e, email, "Failed to load user role");
                    AuthError::RoleLookupError
                })?;

        Ok(role.flatten())
    }

    /// Capability check: does the principal currently hold `role`?
    ///
    /// Pure function of (principal, role, current storage state); a missing
    /// user record is simply `false`.
    pub async fn has_role(&self, email: &str, role: Role) -> Result<bool, AuthError> {
        Ok(self.find_role(email).await? == Some(role))
    }
}
