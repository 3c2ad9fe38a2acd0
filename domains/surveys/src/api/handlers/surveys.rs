//! Survey API handlers
//!
//! - GET /surveys - list all surveys (public)
//! - POST /surveys - publish a survey (authenticated)

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use surveymaster_auth::AuthUser;
use surveymaster_common::Error;
use uuid::Uuid;

use crate::api::middleware::SurveysState;
use crate::domain::entities::{Survey, SurveyOption};
use crate::repository::NewSurvey;

/// Request for publishing a survey. Vote counters on submitted options
/// default to zero; the timestamp is server-stamped.
#[derive(Debug, Deserialize)]
pub struct CreateSurveyRequest {
    pub title: String,
    pub category: String,
    pub description: String,
    #[serde(default)]
    pub options: Vec<SurveyOption>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSurveyResponse {
    pub inserted_id: Uuid,
}

/// GET /surveys - list all surveys
pub async fn list_surveys(
    State(state): State<SurveysState>,
) -> Result<Json<Vec<Survey>>, Error> {
    let surveys = state.repos.surveys.list().await?;
    Ok(Json(surveys))
}

/// POST /surveys - publish a survey (any authenticated caller)
pub async fn create_survey(
    AuthUser(_claims): AuthUser,
    State(state): State<SurveysState>,
    Json(request): Json<CreateSurveyRequest>,
) -> Result<(StatusCode, Json<CreateSurveyResponse>), Error> {
    let survey = NewSurvey {
        title: request.title,
        category: request.category,
        description: request.description,
        options: request.options,
    };

    let timestamp = chrono::Utc::now();
    let id = state.repos.surveys.insert(survey, timestamp).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateSurveyResponse { inserted_id: id }),
    ))
}
