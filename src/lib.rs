//! Hiredeck client core - cached data reads and UI state for the recruiting portal
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod auth;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod query;
pub mod state;
pub mod traits;
