//! SurveyMaster application composition root
//!
//! Composes the domain routers into a single application. The pool and auth
//! backend are created once here and passed into each domain's state by
//! dependency injection; nothing reaches for ambient globals.

use axum::Router;
use sqlx::PgPool;
use surveymaster_accounts::{AccountsRepositories, AccountsState};
use surveymaster_auth::{AuthBackend, AuthConfig};
use surveymaster_common::Config;
use surveymaster_surveys::{SurveysRepositories, SurveysState};

/// Create the main application router with all routes
pub fn create_app(config: &Config, pool: PgPool) -> Router {
    let auth = AuthBackend::new(
        pool.clone(),
        AuthConfig::new(config.access_token_secret.clone()),
    );

    let accounts_state = AccountsState {
        repos: AccountsRepositories::new(pool.clone()),
        auth: auth.clone(),
    };

    let surveys_state = SurveysState {
        repos: SurveysRepositories::new(pool),
        auth,
    };

    Router::new()
        .route("/", axum::routing::get(health_check))
        .merge(surveymaster_accounts::routes().with_state(accounts_state))
        .merge(surveymaster_surveys::routes().with_state(surveys_state))
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "Server is running"
}
