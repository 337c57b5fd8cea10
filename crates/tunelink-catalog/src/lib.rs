//! YouTube Data API client.
//!
//! This crate provides:
//! - A thin REST client for the `videos` and `search` endpoints
//! - Key-based authentication, request timeouts and metrics
//! - `CatalogResolver`, the primary related-song resolver

pub mod client;
pub mod error;
pub mod metrics;
pub mod resolver;
pub mod types;


pub use client::{CatalogClient, CatalogConfig};
pub use error::{CatalogError, CatalogResult};
pub use resolver::CatalogResolver;
