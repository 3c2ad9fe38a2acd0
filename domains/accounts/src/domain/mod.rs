//! Accounts domain model

pub mod entities;
