//! Books API
//!
//! A REST JSON API exposing create, fetch, list, update and delete
//! operations over book records stored in SQLite.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod database;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<services::Services>,
}
