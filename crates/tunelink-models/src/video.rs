//! Video identifiers and song summaries.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ResolveError, ResolveResult};

/// Placeholder some clients send when they have no id to give.
const UNDEFINED_PLACEHOLDER: &str = "undefined";

/// Opaque identifier of a video on the platform.
///
/// Only ever used verbatim to build outbound queries and URLs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct VideoRef(String);

impl VideoRef {
    /// Validate a caller-supplied id.
    ///
    /// Rejects the empty string and the literal `"undefined"`.
    pub fn parse(raw: impl Into<String>) -> ResolveResult<Self> {
        let raw = raw.into();
        if raw.is_empty() || raw == UNDEFINED_PLACEHOLDER {
            return Err(ResolveError::invalid_input(format!(
                "'{}' is not a usable video id",
                raw
            )));
        }
        Ok(Self(raw))
    }

    /// Get the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Canonical watch page for this video.
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.0)
    }
}

impl fmt::Display for VideoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Medium-quality thumbnail path for a video id on the public image host.
pub fn mq_thumbnail_url(id: &str) -> String {
    format!("https://img.youtube.com/vi/{}/mqdefault.jpg", id)
}

/// A single related song, identical in shape whichever source produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoSummary {
    pub id: String,
    pub title: String,
    /// Thumbnail URL
    pub thumbnail: String,
    pub author: String,
    /// Human-readable clock string, e.g. `3:09`
    pub duration: String,
}
