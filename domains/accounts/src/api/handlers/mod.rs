//! Accounts API handlers

pub mod auth;
pub mod users;
