//! Token claims type

use serde::{Deserialize, Serialize};

/// Token lifetime: one hour. Expiry is the only invalidation; there is no
/// revocation list.
pub const TOKEN_TTL_SECS: u64 = 3600;

/// Identity claims carried by an access token.
///
/// This is a fixed, closed record: any extra fields submitted at issuance
/// are dropped at deserialization rather than passed through into the
/// signed token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Principal identity
    pub email: String,
    /// Issued at (unix seconds)
    pub iat: u64,
    /// Expires at (unix seconds)
    pub exp: u64,
}

impl Claims {
    /// Claims for a freshly issued token, expiring [`TOKEN_TTL_SECS`] from now.
    pub fn new(email: impl Into<String>) -> Self {
        let now = chrono::Utc::now().timestamp() as u64;
        Self {
            email: email.into(),
            iat: now,
            exp: now + TOKEN_TTL_SECS,
        }
    }
}
