//! Resolution error taxonomy shared by every resolver.

use thiserror::Error;

/// Result type for resolution operations.
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Errors a resolver can surface to the request boundary.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The seed video is absent upstream.
    #[error("Video not found: {0}")]
    NotFound(String),

    /// The catalog answered with something we could not use.
    #[error("Malformed upstream response: {0}")]
    MalformedResponse(String),

    /// The extractor exited nonzero or printed nothing usable.
    #[error("External tool failed: {message}")]
    ExternalTool {
        message: String,
        /// Diagnostic output from the tool, usually its stderr
        details: Option<String>,
    },

    /// Caller-supplied input rejected before any I/O.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl ResolveError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedResponse(msg.into())
    }

    pub fn external_tool(message: impl Into<String>, details: Option<String>) -> Self {
        Self::ExternalTool {
            message: message.into(),
            details,
        }
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Diagnostic output carried by the error, if any.
    pub fn details(&self) -> Option<&str> {
        match self {
            ResolveError::ExternalTool { details, .. } => {
                details.as_deref().filter(|d| !d.trim().is_empty())
            }
            _ => None,
        }
    }
}
