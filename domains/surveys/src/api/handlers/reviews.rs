//! Review API handlers
//!
//! - GET /reviews - list all reviews (public)

use axum::{extract::State, response::Json};
use surveymaster_common::Error;

use crate::api::middleware::SurveysState;
use crate::domain::entities::Review;

/// GET /reviews - list all reviews
pub async fn list_reviews(State(state): State<SurveysState>) -> Result<Json<Vec<Review>>, Error> {
    let reviews = state.repos.reviews.list().await?;
    Ok(Json(reviews))
}
