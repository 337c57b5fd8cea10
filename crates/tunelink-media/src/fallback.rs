//! Related-song fallback built on yt-dlp's flat listing.
//!
//! Used when the catalog is unavailable. yt-dlp prints one comma-separated
//! line per candidate; the first candidate stands in for the seed video
//! because the listing does not describe the seed separately.

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use tunelink_models::{
    extract_work_name, mq_thumbnail_url, RelatedResult, RelatedSource, ResolveResult, VideoRef,
    VideoSummary,
};

use crate::command::ExtractorRunner;
use crate::error::{MediaError, MediaResult};
use crate::metrics::record_extractor_run;

/// Most songs a fallback answer may carry.
pub const MAX_FALLBACK_SONGS: usize = 10;

/// Output template for `--print`; field order matters to the parser.
const LISTING_TEMPLATE: &str = "%(id)s,%(title)s,%(uploader)s,%(duration_string)s";

/// Parse yt-dlp flat-listing output into song summaries.
///
/// Blank lines are ignored. Lines that do not split into exactly four
/// comma-separated fields, or that have an empty id, are skipped.
pub fn parse_flat_listing(stdout: &str) -> Vec<VideoSummary> {
    stdout
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let fields: Vec<&str> = line.split(',').collect();
            let [id, title, author, duration] = fields.as_slice() else {
                debug!(fields = fields.len(), line = %line, "Skipping malformed listing line");
                return None;
            };
            if id.is_empty() {
                return None;
            }
            Some(VideoSummary {
                id: id.to_string(),
                title: title.to_string(),
                thumbnail: mq_thumbnail_url(id),
                author: author.to_string(),
                duration: duration.to_string(),
            })
        })
        .collect()
}

/// Fallback resolver driven by the extractor.
#[derive(Clone)]
pub struct ExtractorResolver {
    runner: Arc<dyn ExtractorRunner>,
}

impl ExtractorResolver {
    pub fn new(runner: Arc<dyn ExtractorRunner>) -> Self {
        Self { runner }
    }

    async fn resolve_listing(&self, video_id: &VideoRef) -> MediaResult<RelatedResult> {
        let args = vec![
            "--flat-playlist".to_string(),
            "--print".to_string(),
            LISTING_TEMPLATE.to_string(),
            video_id.watch_url(),
        ];

        let start = Instant::now();
        let result = self.runner.run(&args).await.and_then(|o| o.into_success());
        let elapsed = start.elapsed().as_secs_f64();
        record_extractor_run("related_listing", result.is_ok(), elapsed);
        let output = result?;

        let candidates = parse_flat_listing(&output.stdout);
        let Some(representative) = candidates.first() else {
            warn!(video_id = %video_id, "yt-dlp listing had no usable lines");
            return Err(MediaError::EmptyOutput {
                stderr: Some(output.stderr).filter(|s| !s.trim().is_empty()),
            });
        };

        let work_name = extract_work_name(&representative.title);
        let total = candidates.len();

        let songs: Vec<VideoSummary> = candidates
            .into_iter()
            .filter(|song| song.id != video_id.as_str() && song.title.contains(&work_name))
            .take(MAX_FALLBACK_SONGS)
            .collect();

        info!(
            video_id = %video_id,
            work_name = %work_name,
            candidates = total,
            songs = songs.len(),
            "Resolved related songs via yt-dlp"
        );

        Ok(RelatedResult::fallback(work_name, songs))
    }
}

#[async_trait]
impl RelatedSource for ExtractorResolver {
    fn name(&self) -> &'static str {
        "extractor"
    }

    async fn resolve(&self, video_id: &VideoRef) -> ResolveResult<RelatedResult> {
        Ok(self.resolve_listing(video_id).await?)
    }
}
