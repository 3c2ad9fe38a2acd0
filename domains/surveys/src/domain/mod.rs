//! Surveys domain model

pub mod entities;
