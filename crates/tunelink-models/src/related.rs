//! Related-media results and the resolver seam.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ResolveResult;
use crate::video::{VideoRef, VideoSummary};

/// Songs believed to belong to the same work as a seed video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedResult {
    /// Inferred movie or album name
    #[serde(rename = "movieAlbum")]
    pub work_name: String,
    pub songs: Vec<VideoSummary>,
    /// Provenance flag, serialized only when the fallback tier answered
    #[serde(
        rename = "fallbackMethodUsed",
        default,
        skip_serializing_if = "std::ops::Not::not"
    )]
    pub used_fallback: bool,
}

impl RelatedResult {
    /// Result produced by the catalog tier.
    pub fn primary(work_name: impl Into<String>, songs: Vec<VideoSummary>) -> Self {
        Self {
            work_name: work_name.into(),
            songs,
            used_fallback: false,
        }
    }

    /// Result produced by the extractor tier.
    pub fn fallback(work_name: impl Into<String>, songs: Vec<VideoSummary>) -> Self {
        Self {
            work_name: work_name.into(),
            songs,
            used_fallback: true,
        }
    }
}

/// A producer of related-media results.
///
/// Implemented by the catalog resolver and the extractor resolver so the
/// request boundary can treat both tiers uniformly.
#[async_trait]
pub trait RelatedSource: Send + Sync {
    /// Short name used in logs and metric labels.
    fn name(&self) -> &'static str;

    /// Resolve the related songs for `video_id`.
    async fn resolve(&self, video_id: &VideoRef) -> ResolveResult<RelatedResult>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(id: &str) -> VideoSummary {
        VideoSummary {
            id: id.to_string(),
            title: "Titanic - My Heart Will Go On".to_string(),
            thumbnail: format!("https://img.youtube.com/vi/{}/mqdefault.jpg", id),
            author: "Sony".to_string(),
            duration: "4:40".to_string(),
        }
    }

    #[test]
    fn test_primary_omits_fallback_flag() {
        let result = RelatedResult::primary("Titanic", vec![song("a")]);
        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json["movieAlbum"], "Titanic");
        assert_eq!(json["songs"][0]["id"], "a");
        assert!(json.get("fallbackMethodUsed").is_none());
    }

    #[test]
    fn test_fallback_sets_flag() {
        let json = serde_json::to_value(RelatedResult::fallback("Titanic", vec![])).unwrap();
        assert_eq!(json["fallbackMethodUsed"], true);
        assert_eq!(json["songs"], serde_json::json!([]));
    }
}
