//! Shared utilities, configuration, and error handling for SurveyMaster
//!
//! This crate provides common functionality used across the SurveyMaster
//! application:
//! - Configuration management following 12-factor principles
//! - Error types with HTTP response mapping

pub mod config;
pub mod error;

pub use config::Config;
pub use error::{Error, Result};
