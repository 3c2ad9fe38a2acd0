//! Surveys domain repositories

mod reviews;
mod surveys;

pub use reviews::ReviewRepository;
pub use surveys::{NewSurvey, SurveyRepository};

use sqlx::PgPool;

/// Repository bundle for the surveys domain
#[derive(Clone)]
pub struct SurveysRepositories {
    pub surveys: SurveyRepository,
    pub reviews: ReviewRepository,
}

impl SurveysRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            surveys: SurveyRepository::new(pool.clone()),
            reviews: ReviewRepository::new(pool),
        }
    }
}
