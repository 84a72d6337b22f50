//! Bookshelf
//!
//! A small REST JSON server managing an in-memory collection of books,
//! each owning an ordered list of authorship details. Nothing is persisted:
//! the collection lives as long as the serving process.

use std::sync::Arc;

pub mod api;
pub mod config;
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

impl AppState {
    /// Build state over a fresh, empty book collection
    pub fn new(config: &AppConfig) -> Self {
        let services = services::Services::new(
            repository::Repository::new(),
            config.identity.clone(),
        );
        Self {
            services: Arc::new(services),
        }
    }
}
