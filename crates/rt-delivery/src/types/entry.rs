//! Entry types.

use rt_renderer::{ContentNode, DEFAULT_MAX_DEPTH, Document};
use serde::Deserialize;
use serde_json::{Map, Value};

use super::Sys;
use crate::error::FetchError;

/// Content entry.
#[derive(Debug, Clone, Deserialize)]
pub struct Entry {
    /// Entry metadata.
    pub sys: Sys,
    /// Field values for the requested locale.
    #[serde(default)]
    pub fields: Map<String, Value>,
}

impl Entry {
    /// Content type ID, if the entry carries one.
    #[must_use]
    pub fn content_type_id(&self) -> Option<&str> {
        self.sys.content_type.as_ref().map(|link| link.sys.id.as_str())
    }

    /// String value of a field.
    #[must_use]
    pub fn text_field(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(Value::as_str)
    }

    /// Parse a rich-text field into renderer input.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::MissingField`] if the field is absent and
    /// [`FetchError::Document`] if it is not a rich-text document.
    pub fn rich_text(&self, field: &str) -> Result<Vec<ContentNode>, FetchError> {
        self.rich_text_with_limit(field, DEFAULT_MAX_DEPTH)
    }

    /// Parse a rich-text field whose nodes may nest up to `max_depth` levels.
    ///
    /// # Errors
    ///
    /// As [`rich_text`](Self::rich_text). A tree that is too deep is a
    /// [`FetchError::Document`] wrapping
    /// [`RenderError::DepthExceeded`](rt_renderer::RenderError::DepthExceeded).
    pub fn rich_text_with_limit(
        &self,
        field: &str,
        max_depth: usize,
    ) -> Result<Vec<ContentNode>, FetchError> {
        let value = self
            .fields
            .get(field)
            .ok_or_else(|| FetchError::MissingField(field.to_owned()))?;
        Document::from_value_with_limit(value, max_depth)
            .map(Document::into_nodes)
            .map_err(|source| FetchError::Document {
                field: field.to_owned(),
                source,
            })
    }
}
