//! User repository
//!
//! Runtime `sqlx` queries over the `users` table. One storage operation per
//! method; outcome interpretation stays in the handlers.

use crate::domain::entities::User;
use sqlx::PgPool;
use surveymaster_auth::Role;
use surveymaster_common::Result;
use uuid::Uuid;

#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find user by email
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let user: Option<User> = sqlx::query_as(
            r#"
            SELECT id, email, name, role, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// List all users
    pub async fn list(&self) -> Result<Vec<User>> {
        let users: Vec<User> = sqlx::query_as(
            r#"
            SELECT id, email, name, role, created_at
            FROM users
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    /// Insert a new user and return its id
    pub async fn insert(&self, email: &str, name: Option<&str>) -> Result<Uuid> {
        let id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO users (email, name)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(email)
        .bind(name)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    /// Set the role on a user record; returns the number of matched rows.
    ///
    /// Repeating the same update is idempotent.
    pub async fn set_role(&self, id: Uuid, role: Role) -> Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET role = $2
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(role)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Delete at most one user by id; returns the number of deleted rows.
    pub async fn delete(&self, id: Uuid) -> Result<u64> {
        let result = sqlx::query(
            r#"
            DELETE FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}
