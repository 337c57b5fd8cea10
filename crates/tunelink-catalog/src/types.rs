//! YouTube Data API v3 response shapes.
//!
//! Only the fields the resolver reads are modelled. Everything is optional
//! so a partial payload decodes and the resolver decides what is missing.

use serde::Deserialize;

/// `videos.list` response.
#[derive(Debug, Clone, Deserialize)]
pub struct VideoListResponse {
    #[serde(default)]
    pub items: Vec<VideoItem>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoItem {
    pub id: String,
    pub snippet: Option<Snippet>,
    pub content_details: Option<ContentDetails>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    pub title: Option<String>,
    pub channel_id: Option<String>,
    pub channel_title: Option<String>,
    #[serde(default)]
    pub thumbnails: Thumbnails,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Thumbnails {
    pub medium: Option<Thumbnail>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Thumbnail {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentDetails {
    /// ISO-8601 duration, e.g. `PT4M13S`
    pub duration: Option<String>,
}

/// `search.list` response.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchListResponse {
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchItem {
    pub id: SearchItemId,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchItemId {
    pub video_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_video_item() {
        let json = r#"{
            "kind": "youtube#videoListResponse",
            "items": [{
                "id": "abc",
                "snippet": {
                    "title": "Titanic - My Heart Will Go On",
                    "channelId": "UC1",
                    "channelTitle": "Sony Music",
                    "thumbnails": {
                        "medium": {"url": "https://i.ytimg.com/vi/abc/mqdefault.jpg", "width": 320}
                    }
                },
                "contentDetails": {"duration": "PT4M40S"}
            }]
        }"#;
        let resp: VideoListResponse = serde_json::from_str(json).unwrap();
        let item = &resp.items[0];
        let snippet = item.snippet.as_ref().unwrap();
        assert_eq!(snippet.channel_id.as_deref(), Some("UC1"));
        assert_eq!(
            snippet.thumbnails.medium.as_ref().map(|t| t.url.as_str()),
            Some("https://i.ytimg.com/vi/abc/mqdefault.jpg")
        );
        assert_eq!(
            item.content_details.as_ref().and_then(|c| c.duration.as_deref()),
            Some("PT4M40S")
        );
    }

    #[test]
    fn test_missing_items_is_empty() {
        let resp: VideoListResponse =
            serde_json::from_str(r#"{"pageInfo": {"totalResults": 0}}"#).unwrap();
        assert!(resp.items.is_empty());
    }
}
