//! Surveys domain entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use uuid::Uuid;

/// One answer option on a survey, with its running vote count.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyOption {
    pub option_text: String,
    #[serde(default)]
    pub votes: i32,
}

/// A published survey. Options are embedded as a JSONB document; the
/// timestamp is stamped by the server at creation, never taken from the
/// client.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Survey {
    pub id: Uuid,
    pub title: String,
    pub category: String,
    pub description: String,
    pub options: Json<Vec<SurveyOption>>,
    pub likes: i32,
    pub dislikes: i32,
    pub total_voted: i32,
    pub timestamp: DateTime<Utc>,
}

/// A platform review left by a visitor.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: Uuid,
    pub name: String,
    pub rating: i32,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}
