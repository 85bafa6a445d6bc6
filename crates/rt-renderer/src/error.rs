//! Error types for rich-text rendering.

/// Error produced while building or rendering a content tree.
///
/// Any error aborts the whole render call. No partial output is returned.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RenderError {
    /// Text node carries a mark with no registered tag pair.
    #[error("unknown mark type `{0}`")]
    UnknownMark(String),

    /// Node type outside the known set, rejected by
    /// [`UnknownNodePolicy::Reject`](crate::UnknownNodePolicy::Reject).
    #[error("unrecognized node type `{0}`")]
    UnknownNodeType(String),

    /// Node is missing a field required by its type.
    #[error("malformed `{node_type}` node: {reason}")]
    Shape {
        /// `nodeType` of the offending node, or `?` when it has none.
        node_type: String,
        /// What was missing or mistyped.
        reason: String,
    },

    /// Tree nests deeper than [`RenderOptions::max_depth`](crate::RenderOptions::max_depth).
    #[error("content tree exceeds maximum depth of {limit}")]
    DepthExceeded {
        /// Configured depth limit.
        limit: usize,
    },

    /// Input is not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RenderError {
    pub(crate) fn shape(node_type: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Shape {
            node_type: node_type.into(),
            reason: reason.into(),
        }
    }
}
