//! Application state.

use std::sync::Arc;

use tunelink_catalog::{CatalogClient, CatalogError, CatalogResolver};
use tunelink_media::{AudioLocator, ExtractorResolver, ExtractorRunner, YtDlpRunner};
use tunelink_models::RelatedSource;

use crate::config::ApiConfig;
use crate::services::RelatedService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub related: RelatedService,
    pub audio: AudioLocator,
    pub extractor: Arc<dyn ExtractorRunner>,
    /// Whether the primary source has credentials to work with
    pub catalog_configured: bool,
}

impl AppState {
    /// Create new application state backed by the catalog and yt-dlp.
    pub fn new(config: ApiConfig) -> Result<Self, CatalogError> {
        let catalog = CatalogClient::new(config.catalog.clone())?;
        let catalog_configured = catalog.has_api_key();
        let extractor: Arc<dyn ExtractorRunner> =
            Arc::new(YtDlpRunner::new(config.extractor.clone()));

        Ok(Self::assemble(
            config,
            Arc::new(CatalogResolver::new(catalog)),
            extractor,
            catalog_configured,
        ))
    }

    /// Assemble state from an explicit primary source and extractor.
    pub fn from_parts(
        config: ApiConfig,
        primary: Arc<dyn RelatedSource>,
        extractor: Arc<dyn ExtractorRunner>,
    ) -> Self {
        let catalog_configured = config.catalog.api_key.is_some();
        Self::assemble(config, primary, extractor, catalog_configured)
    }

    fn assemble(
        config: ApiConfig,
        primary: Arc<dyn RelatedSource>,
        extractor: Arc<dyn ExtractorRunner>,
        catalog_configured: bool,
    ) -> Self {
        let fallback = Arc::new(ExtractorResolver::new(Arc::clone(&extractor)));

        Self {
            related: RelatedService::new(primary, fallback),
            audio: AudioLocator::new(Arc::clone(&extractor)),
            extractor,
            catalog_configured,
            config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tunelink_catalog::CatalogConfig;

    #[test]
    fn test_state_reports_catalog_key() {
        let state = AppState::new(ApiConfig::default()).unwrap();
        assert!(!state.catalog_configured);

        let config = ApiConfig {
            catalog: CatalogConfig::new("test-key", "http://127.0.0.1:1"),
            ..Default::default()
        };
        assert!(AppState::new(config).unwrap().catalog_configured);
    }
}
