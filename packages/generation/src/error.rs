//! Typed errors for the generation library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling. The orchestrator recovers
//! from almost all of these internally; only the HTTP boundary ever maps
//! an error to a caller-visible failure.

use thiserror::Error;

/// Errors that can occur during document generation.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Content provider is not reachable or failed its health check
    #[error("content provider unavailable")]
    ProviderUnavailable,

    /// Content provider call failed
    #[error("provider error: {0}")]
    Provider(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Provider answered but the payload could not be used
    #[error("provider returned malformed content: {reason}")]
    ProviderContent { reason: String },

    /// Image provider call failed
    #[error("image fetch error: {0}")]
    ImageFetch(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// HTTP transport failure
    #[error("HTTP error: {0}")]
    Http(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// A required request field is absent or empty
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },
}

/// Result type alias for generation operations.
pub type Result<T> = std::result::Result<T, GenerationError>;
