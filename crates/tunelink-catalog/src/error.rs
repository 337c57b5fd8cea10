//! Catalog error types.

use thiserror::Error;
use tunelink_models::ResolveError;

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors that can occur while talking to the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog API key is not configured")]
    MissingApiKey,

    #[error("Invalid catalog URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Catalog request timed out")]
    Timeout,

    #[error("Catalog returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(reqwest::Error),

    #[error("Could not decode catalog response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for CatalogError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            return CatalogError::Timeout;
        }
        if e.is_decode() {
            return CatalogError::Decode(e.without_url().to_string());
        }
        // The request URL carries the API key
        CatalogError::Network(e.without_url())
    }
}

impl CatalogError {
    /// HTTP status to report in metrics.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            CatalogError::Http { status, .. } => Some(*status),
            CatalogError::Timeout => Some(504),
            _ => None,
        }
    }
}

impl From<CatalogError> for ResolveError {
    fn from(e: CatalogError) -> Self {
        ResolveError::malformed(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_errors_become_malformed_response() {
        let err: ResolveError = CatalogError::Http {
            status: 403,
            body: "quotaExceeded".to_string(),
        }
        .into();
        assert!(matches!(err, ResolveError::MalformedResponse(ref m) if m.contains("403")));

        let err: ResolveError = CatalogError::MissingApiKey.into();
        assert!(matches!(err, ResolveError::MalformedResponse(_)));
    }

    #[test]
    fn test_http_status_getter() {
        assert_eq!(CatalogError::Timeout.http_status(), Some(504));
        assert_eq!(
            CatalogError::Http { status: 403, body: String::new() }.http_status(),
            Some(403)
        );
        assert_eq!(CatalogError::MissingApiKey.http_status(), None);
    }
}
