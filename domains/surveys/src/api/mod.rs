//! Surveys domain HTTP API

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use middleware::SurveysState;
pub use routes::routes;
