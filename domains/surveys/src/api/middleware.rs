//! Surveys domain state and auth backend integration

use crate::SurveysRepositories;
use axum::extract::FromRef;
use surveymaster_auth::AuthBackend;

/// Application state for the surveys domain
#[derive(Clone)]
pub struct SurveysState {
    pub repos: SurveysRepositories,
    pub auth: AuthBackend,
}

impl FromRef<SurveysState> for AuthBackend {
    fn from_ref(state: &SurveysState) -> Self {
        state.auth.clone()
    }
}
