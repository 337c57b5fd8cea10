//! Direct audio stream lookup.

use std::sync::Arc;
use std::time::Instant;

use tracing::info;

use tunelink_models::{ResolveResult, VideoRef};

use crate::command::ExtractorRunner;
use crate::error::MediaError;
use crate::metrics::record_extractor_run;

/// Resolves the best audio-only stream URL of a video.
#[derive(Clone)]
pub struct AudioLocator {
    runner: Arc<dyn ExtractorRunner>,
}

impl AudioLocator {
    pub fn new(runner: Arc<dyn ExtractorRunner>) -> Self {
        Self { runner }
    }

    /// Look up the direct URL of the best audio-only format.
    ///
    /// The id is validated before the extractor is started.
    pub async fn resolve(&self, video_id: &str) -> ResolveResult<String> {
        let video_id = VideoRef::parse(video_id)?;
        let args = vec![
            "-g".to_string(),
            "-f".to_string(),
            "ba".to_string(),
            video_id.watch_url(),
        ];

        let start = Instant::now();
        let result = self.runner.run(&args).await.and_then(|o| o.into_success());
        let output = match result {
            Ok(output) => output,
            Err(e) => {
                record_extractor_run("audio_url", false, start.elapsed().as_secs_f64());
                return Err(e.into());
            }
        };

        let url = output.stdout.trim();
        let succeeded = !url.is_empty();
        record_extractor_run("audio_url", succeeded, start.elapsed().as_secs_f64());
        if !succeeded {
            let stderr = Some(output.stderr).filter(|s| !s.trim().is_empty());
            return Err(MediaError::EmptyOutput { stderr }.into());
        }

        info!(video_id = %video_id, "Resolved audio stream URL");
        Ok(url.to_string())
    }
}
