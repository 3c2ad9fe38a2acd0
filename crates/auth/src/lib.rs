//! Authentication gate for the SurveyMaster API
//!
//! Provides token issuance and verification, role-based authorization backed
//! by fresh storage reads, and axum extractors that work with any domain
//! state implementing `FromRef<S>` for `AuthBackend`.

mod backend;
mod claims;
mod config;
mod error;
mod extractors;
mod jwt;
mod types;

pub use backend::AuthBackend;
pub use claims::{Claims, TOKEN_TTL_SECS};
pub use config::AuthConfig;
pub use error::AuthError;
pub use extractors::{AdminUser, AuthUser};
pub use types::Role;
