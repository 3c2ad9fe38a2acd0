//! Route definitions for the surveys domain API
//!
//! The original service exposed two equivalent "list all surveys" routes;
//! only the single consolidated endpoint survives here.

use axum::{
    routing::get,
    Router,
};

use super::handlers::{reviews, surveys};
use super::middleware::SurveysState;

fn survey_routes() -> Router<SurveysState> {
    Router::new().route(
        "/surveys",
        get(surveys::list_surveys).post(surveys::create_survey),
    )
}

fn review_routes() -> Router<SurveysState> {
    Router::new().route("/reviews", get(reviews::list_reviews))
}

/// Create all surveys domain API routes
pub fn routes() -> Router<SurveysState> {
    Router::new().merge(survey_routes()).merge(review_routes())
}
