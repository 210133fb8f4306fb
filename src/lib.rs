//! Academia Gym Management Server
//!
//! A Rust REST API server backing a gym marketing site and its administrative
//! back office: plans, promotions, partners, ads, testimonials, knowledge base,
//! lead capture and member check-ins.

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
