//! Libris Library Record Service
//!
//! A Rust implementation of the Libris record server, providing a REST JSON
//! API for managing libraries, their members and books, and the lending
//! workflow between them.

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
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
