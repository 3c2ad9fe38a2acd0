//! Accounts domain: users, roles, and token issuance

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::User;
pub use repository::{AccountsRepositories, UserRepository};

// Re-export API types
pub use api::routes;
pub use api::AccountsState;

// Re-export auth types from surveymaster-auth for convenience
pub use surveymaster_auth::{AdminUser, AuthBackend, AuthConfig, AuthError, AuthUser, Role};
