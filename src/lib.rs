//! Local Library catalog server
//!
//! Server-rendered CRUD pages for the library catalog's genres and book
//! copies (instances), backed by Postgres and rendered through Tera
//! templates.

use std::sync::Arc;

pub mod config;
pub mod error;
pub mod models;
pub mod pages;
pub mod repository;
pub mod services;
pub mod validation;
pub mod views;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
