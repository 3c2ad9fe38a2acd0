//! Review repository

use crate::domain::entities::Review;
use sqlx::PgPool;
use surveymaster_common::Result;

#[derive(Clone)]
pub struct ReviewRepository {
    pool: PgPool,
}

impl ReviewRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all reviews
    pub async fn list(&self) -> Result<Vec<Review>> {
        let reviews: Vec<Review> = sqlx::query_as(
            r#"
            SELECT id, name, rating, comment, created_at
            FROM reviews
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(reviews)
    }
}
