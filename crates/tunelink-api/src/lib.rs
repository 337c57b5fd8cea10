//! Axum HTTP API server.
//!
//! This crate provides:
//! - Related-song lookup with catalog-first, extractor fallback resolution
//! - Audio stream URL lookup via yt-dlp
//! - Health and readiness probes
//! - Prometheus metrics

pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use services::RelatedService;
pub use state::AppState;
