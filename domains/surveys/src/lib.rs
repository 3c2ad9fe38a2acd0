//! Surveys domain: surveys and reviews collections

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{Review, Survey, SurveyOption};
pub use repository::{ReviewRepository, SurveyRepository, SurveysRepositories};

// Re-export API types
pub use api::routes;
pub use api::SurveysState;
