//! Error types for content delivery operations.

use rt_renderer::RenderError;

/// Error from content delivery API operations.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// HTTP request failed (network error, timeout, etc).
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] ureq::Error),

    /// HTTP response error (server returned a non-2xx status).
    #[error("HTTP error: {status} - {body}")]
    HttpResponse {
        /// HTTP status code.
        status: u16,
        /// Raw response body (may contain error details).
        body: String,
    },

    /// Response body is not the expected JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Response nests deeper than the rich-text depth limit allows.
    #[error("response nesting exceeds depth limit of {limit}")]
    DepthExceeded {
        /// Configured node depth limit.
        limit: usize,
    },

    /// Entry has no field with the requested name.
    #[error("entry has no field `{0}`")]
    MissingField(String),

    /// Field is present but is not a valid rich-text document.
    #[error("field `{field}` is not a rich-text document: {source}")]
    Document {
        /// Field name.
        field: String,
        /// Underlying shape error.
        #[source]
        source: RenderError,
    },
}
