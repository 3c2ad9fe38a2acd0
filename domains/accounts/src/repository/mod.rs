//! Accounts domain repositories

mod users;

pub use users::UserRepository;

use sqlx::PgPool;

/// Repository bundle for the accounts domain
#[derive(Clone)]
pub struct AccountsRepositories {
    pub users: UserRepository,
}

impl AccountsRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            users: UserRepository::new(pool),
        }
    }
}
