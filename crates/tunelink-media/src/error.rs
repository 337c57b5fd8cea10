//! Error types for extractor operations.

use std::time::Duration;

use thiserror::Error;
use tunelink_models::ResolveError;

/// Result type for extractor operations.
pub type MediaResult<T> = Result<T, MediaError>;

/// Errors that can occur while running the extractor.
#[derive(Debug, Error)]
pub enum MediaError {
    #[error("yt-dlp not found: {0}")]
    YtDlpNotFound(String),

    #[error("yt-dlp failed: {message}")]
    ExtractorFailed {
        message: String,
        stderr: Option<String>,
        exit_code: Option<i32>,
    },

    #[error("yt-dlp produced no usable output")]
    EmptyOutput { stderr: Option<String> },

    #[error("yt-dlp timed out after {0:?}")]
    Timeout(Duration),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MediaError {
    /// Create an extractor failure error.
    pub fn extractor_failed(
        message: impl Into<String>,
        stderr: Option<String>,
        exit_code: Option<i32>,
    ) -> Self {
        Self::ExtractorFailed {
            message: message.into(),
            stderr,
            exit_code,
        }
    }

    /// Diagnostic output captured from the process, if any.
    pub fn stderr(&self) -> Option<&str> {
        match self {
            MediaError::ExtractorFailed { stderr, .. } | MediaError::EmptyOutput { stderr } => {
                stderr.as_deref()
            }
            _ => None,
        }
    }
}

impl From<MediaError> for ResolveError {
    fn from(e: MediaError) -> Self {
        let details = e
            .stderr()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        ResolveError::external_tool(e.to_string(), details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_keeps_stderr_as_details() {
        let err: ResolveError = MediaError::extractor_failed(
            "exit status 1",
            Some("ERROR: [youtube] abc: Video unavailable\n".to_string()),
            Some(1),
        )
        .into();

        match err {
            ResolveError::ExternalTool { message, details } => {
                assert_eq!(message, "yt-dlp failed: exit status 1");
                assert_eq!(details.as_deref(), Some("ERROR: [youtube] abc: Video unavailable"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_timeout_has_no_details() {
        let err: ResolveError = MediaError::Timeout(Duration::from_secs(60)).into();
        assert!(matches!(err, ResolveError::ExternalTool { details: None, .. }));
    }

    #[test]
    fn test_timeout_message_keeps_subsecond_precision() {
        let err = MediaError::Timeout(Duration::from_millis(300));
        assert_eq!(err.to_string(), "yt-dlp timed out after 300ms");
    }
}
