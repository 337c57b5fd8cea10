//! Two-tier related-songs resolution.
//!
//! The primary source is always tried first. Any failure it reports is
//! logged and the same id is handed to the fallback source; a fallback
//! failure is final.

use std::sync::Arc;

use tracing::{error, info, warn};

use tunelink_models::{RelatedResult, RelatedSource, ResolveResult, VideoRef};

use crate::metrics;

/// Orchestrates the primary and fallback related-song sources.
#[derive(Clone)]
pub struct RelatedService {
    primary: Arc<dyn RelatedSource>,
    fallback: Arc<dyn RelatedSource>,
}

impl RelatedService {
    pub fn new(primary: Arc<dyn RelatedSource>, fallback: Arc<dyn RelatedSource>) -> Self {
        Self { primary, fallback }
    }

    /// Resolve related songs for a caller-supplied id.
    pub async fn resolve(&self, video_id: &str) -> ResolveResult<RelatedResult> {
        let video_id = VideoRef::parse(video_id)?;

        let primary_err = match self.primary.resolve(&video_id).await {
            Ok(result) => {
                metrics::record_related_resolution(self.primary.name(), true);
                return Ok(result);
            }
            Err(e) => e,
        };

        metrics::record_related_resolution(self.primary.name(), false);
        warn!(
            video_id = %video_id,
            source = self.primary.name(),
            error = %primary_err,
            "Primary related-songs source failed, using fallback"
        );

        match self.fallback.resolve(&video_id).await {
            Ok(result) => {
                metrics::record_related_resolution(self.fallback.name(), true);
                info!(
                    video_id = %video_id,
                    source = self.fallback.name(),
                    songs = result.songs.len(),
                    "Fallback related-songs source answered"
                );
                Ok(result)
            }
            Err(e) => {
                metrics::record_related_resolution(self.fallback.name(), false);
                error!(
                    video_id = %video_id,
                    primary_error = %primary_err,
                    fallback_error = %e,
                    details = e.details().unwrap_or_default(),
                    "Both related-songs sources failed"
                );
                Err(e)
            }
        }
    }
}
