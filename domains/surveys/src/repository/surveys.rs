//! Survey repository

use crate::domain::entities::{Survey, SurveyOption};
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::PgPool;
use surveymaster_common::Result;
use uuid::Uuid;

/// Fields for a new survey; counters start at zero and the timestamp is
/// supplied by the handler, not the client.
#[derive(Debug)]
pub struct NewSurvey {
    pub title: String,
    pub category: String,
    pub description: String,
    pub options: Vec<SurveyOption>,
}

#[derive(Clone)]
pub struct SurveyRepository {
    pool: PgPool,
}

impl SurveyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all surveys, newest first
    pub async fn list(&self) -> Result<Vec<Survey>> {
        let surveys: Vec<Survey> = sqlx::query_as(
            r#"
            SELECT id, title, category, description, options,
                   likes, dislikes, total_voted, timestamp
            FROM surveys
            ORDER BY timestamp DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(surveys)
    }

    /// Insert a new survey and return its id
    pub async fn insert(&self, survey: NewSurvey, timestamp: DateTime<Utc>) -> Result<Uuid> {
        let id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO surveys (title, category, description, options, timestamp)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(survey.title)
        .bind(survey.category)
        .bind(survey.description)
        .bind(Json(survey.options))
        .bind(timestamp)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }
}
