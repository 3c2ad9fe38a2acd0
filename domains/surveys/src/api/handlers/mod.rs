//! Surveys API handlers

pub mod reviews;
pub mod surveys;
