//! Catalog-backed related-song resolution.

use async_trait::async_trait;
use tracing::{debug, info};

use tunelink_models::{
    extract_work_name, format_duration, RelatedResult, RelatedSource, ResolveError,
    ResolveResult, VideoRef, VideoSummary,
};

use crate::client::CatalogClient;
use crate::types::VideoItem;

/// Upper bound on candidates requested from `search.list`.
pub const MAX_SEARCH_RESULTS: u32 = 15;

/// Primary resolver: seed lookup, same-channel search, batched detail fetch.
#[derive(Clone)]
pub struct CatalogResolver {
    client: CatalogClient,
}

impl CatalogResolver {
    pub fn new(client: CatalogClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RelatedSource for CatalogResolver {
    fn name(&self) -> &'static str {
        "catalog"
    }

    async fn resolve(&self, video_id: &VideoRef) -> ResolveResult<RelatedResult> {
        let seed = self
            .client
            .list_videos(&[video_id.as_str()], "snippet")
            .await?
            .items
            .into_iter()
            .next()
            .ok_or_else(|| ResolveError::not_found(format!("catalog has no video {}", video_id)))?;

        let snippet = seed
            .snippet
            .ok_or_else(|| ResolveError::malformed("seed video has no snippet"))?;
        let title = snippet
            .title
            .ok_or_else(|| ResolveError::malformed("seed video has no title"))?;
        let channel_id = snippet
            .channel_id
            .ok_or_else(|| ResolveError::malformed("seed video has no channelId"))?;

        let work_name = extract_work_name(&title);
        debug!(video_id = %video_id, title = %title, work_name = %work_name, "Inferred work name");

        let query = format!("{} songs", work_name);
        let candidate_ids: Vec<String> = self
            .client
            .search_channel_videos(&query, &channel_id, MAX_SEARCH_RESULTS)
            .await?
            .items
            .into_iter()
            .filter_map(|item| item.id.video_id)
            .collect();

        if candidate_ids.is_empty() {
            info!(
                video_id = %video_id,
                work_name = %work_name,
                "Catalog search returned no candidates"
            );
            return Ok(RelatedResult::primary(work_name, Vec::new()));
        }

        let ids: Vec<&str> = candidate_ids.iter().map(String::as_str).collect();
        let details = self.client.list_videos(&ids, "snippet,contentDetails").await?;

        let songs = details
            .items
            .into_iter()
            .map(to_summary)
            .collect::<ResolveResult<Vec<_>>>()?
            .into_iter()
            .filter(|song| song.id != video_id.as_str())
            .collect::<Vec<_>>();

        info!(
            video_id = %video_id,
            work_name = %work_name,
            songs = songs.len(),
            "Resolved related songs from catalog"
        );

        Ok(RelatedResult::primary(work_name, songs))
    }
}

/// Map a detailed video resource to the normalized schema.
fn to_summary(item: VideoItem) -> ResolveResult<VideoSummary> {
    let missing =
        |field: &str| ResolveError::malformed(format!("video {} has no {}", item.id, field));

    let snippet = item.snippet.ok_or_else(|| missing("snippet"))?;
    let title = snippet.title.ok_or_else(|| missing("title"))?;
    let author = snippet.channel_title.ok_or_else(|| missing("channelTitle"))?;
    let thumbnail = snippet
        .thumbnails
        .medium
        .map(|t| t.url)
        .ok_or_else(|| missing("medium thumbnail"))?;

    let duration = format_duration(
        item.content_details
            .as_ref()
            .and_then(|c| c.duration.as_deref()),
    );

    Ok(VideoSummary {
        id: item.id,
        title,
        thumbnail,
        author,
        duration,
    })
}
