//! Typed content tree.
//!
//! Rich-text JSON is a tree of objects discriminated by a `nodeType` string.
//! [`ContentNode::from_value`] turns each object into one variant of a closed
//! sum type, so the renderer dispatches with an exhaustive `match` instead of a
//! string lookup. Node types outside the known set land in
//! [`ContentNode::Unknown`] and are handled by
//! [`UnknownNodePolicy`](crate::UnknownNodePolicy).

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::RenderError;
use crate::options::DEFAULT_MAX_DEPTH;

/// Container node kinds that map to a fixed open/close tag pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    Paragraph,
    Heading1,
    Heading2,
    Heading3,
    Heading4,
    Heading5,
    Heading6,
    ListItem,
    UnorderedList,
    OrderedList,
    Table,
    TableRow,
    TableHeaderCell,
    TableCell,
}

impl ContainerKind {
    /// Every container kind, in tag-table order.
    pub const ALL: [Self; 14] = [
        Self::Paragraph,
        Self::Heading1,
        Self::Heading2,
        Self::Heading3,
        Self::Heading4,
        Self::Heading5,
        Self::Heading6,
        Self::ListItem,
        Self::UnorderedList,
        Self::OrderedList,
        Self::Table,
        Self::TableRow,
        Self::TableHeaderCell,
        Self::TableCell,
    ];

    /// Parse a `nodeType` string.
    #[must_use]
    pub fn from_node_type(node_type: &str) -> Option<Self> {
        let kind = match node_type {
            "paragraph" => Self::Paragraph,
            "heading-1" => Self::Heading1,
            "heading-2" => Self::Heading2,
            "heading-3" => Self::Heading3,
            "heading-4" => Self::Heading4,
            "heading-5" => Self::Heading5,
            "heading-6" => Self::Heading6,
            "list-item" => Self::ListItem,
            "unordered-list" => Self::UnorderedList,
            "ordered-list" => Self::OrderedList,
            "table" => Self::Table,
            "table-row" => Self::TableRow,
            "table-header-cell" => Self::TableHeaderCell,
            "table-cell" => Self::TableCell,
            _ => return None,
        };
        Some(kind)
    }

    /// The `nodeType` string for this kind.
    #[must_use]
    pub const fn node_type(self) -> &'static str {
        match self {
            Self::Paragraph => "paragraph",
            Self::Heading1 => "heading-1",
            Self::Heading2 => "heading-2",
            Self::Heading3 => "heading-3",
            Self::Heading4 => "heading-4",
            Self::Heading5 => "heading-5",
            Self::Heading6 => "heading-6",
            Self::ListItem => "list-item",
            Self::UnorderedList => "unordered-list",
            Self::OrderedList => "ordered-list",
            Self::Table => "table",
            Self::TableRow => "table-row",
            Self::TableHeaderCell => "table-header-cell",
            Self::TableCell => "table-cell",
        }
    }
}

/// Inline styling annotation on a text leaf.
///
/// The mark type is kept as written. Resolution to a tag pair happens at
/// render time so that an unknown type surfaces as
/// [`RenderError::UnknownMark`] rather than a parse failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mark {
    mark_type: String,
}

impl Mark {
    /// Create a mark of the given type.
    #[must_use]
    pub fn new(mark_type: impl Into<String>) -> Self {
        Self {
            mark_type: mark_type.into(),
        }
    }

    #[must_use]
    pub fn bold() -> Self {
        Self::new("bold")
    }

    #[must_use]
    pub fn italic() -> Self {
        Self::new("italic")
    }

    /// The mark's `type` field.
    #[must_use]
    pub fn mark_type(&self) -> &str {
        &self.mark_type
    }

    fn from_value(value: &Value) -> Result<Self, RenderError> {
        value
            .get("type")
            .and_then(Value::as_str)
            .map(Self::new)
            .ok_or_else(|| RenderError::shape("text", "mark is missing string `type`"))
    }
}

/// One node of a rich-text document tree.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Value")]
pub enum ContentNode {
    /// Block or cell wrapping its children in a fixed tag pair.
    Container {
        kind: ContainerKind,
        content: Vec<ContentNode>,
    },
    /// Anchor around its children.
    Hyperlink {
        /// Link target from `data.uri`, emitted verbatim.
        uri: String,
        content: Vec<ContentNode>,
    },
    /// Text leaf with marks applied first-innermost.
    Text { value: String, marks: Vec<Mark> },
    /// `hr` leaf.
    HorizontalRule,
    /// Any `nodeType` outside the known set.
    Unknown {
        node_type: String,
        /// Children when the node carried a `content` array, empty otherwise.
        content: Vec<ContentNode>,
    },
}

impl ContentNode {
    /// Build a container node.
    #[must_use]
    pub fn container(kind: ContainerKind, content: Vec<ContentNode>) -> Self {
        Self::Container { kind, content }
    }

    #[must_use]
    pub fn paragraph(content: Vec<ContentNode>) -> Self {
        Self::container(ContainerKind::Paragraph, content)
    }

    /// Build a text leaf.
    #[must_use]
    pub fn text(value: impl Into<String>, marks: Vec<Mark>) -> Self {
        Self::Text {
            value: value.into(),
            marks,
        }
    }

    /// Build a hyperlink node.
    #[must_use]
    pub fn hyperlink(uri: impl Into<String>, content: Vec<ContentNode>) -> Self {
        Self::Hyperlink {
            uri: uri.into(),
            content,
        }
    }

    /// The `nodeType` this node was parsed from.
    #[must_use]
    pub fn node_type(&self) -> &str {
        match self {
            Self::Container { kind, .. } => kind.node_type(),
            Self::Hyperlink { .. } => "hyperlink",
            Self::Text { .. } => "text",
            Self::HorizontalRule => "hr",
            Self::Unknown { node_type, .. } => node_type,
        }
    }

    /// Child nodes. Leaves have none.
    #[must_use]
    pub fn children(&self) -> &[ContentNode] {
        match self {
            Self::Container { content, .. }
            | Self::Hyperlink { content, .. }
            | Self::Unknown { content, .. } => content,
            Self::Text { .. } | Self::HorizontalRule => &[],
        }
    }

    /// Build a node from its JSON representation.
    ///
    /// Children may nest up to [`DEFAULT_MAX_DEPTH`] levels.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Shape`] when the object lacks a field its
    /// `nodeType` requires. Extraneous fields are ignored.
    pub fn from_value(value: &Value) -> Result<Self, RenderError> {
        Self::from_value_with_limit(value, DEFAULT_MAX_DEPTH)
    }

    /// Build a node, allowing children to nest up to `max_depth` levels.
    ///
    /// Depth is counted the same way [`render`](crate::render) counts it, so
    /// a tree accepted here never fails the render-time depth check under
    /// the same limit.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::DepthExceeded`] for deeper trees, otherwise as
    /// [`from_value`](Self::from_value).
    pub fn from_value_with_limit(value: &Value, max_depth: usize) -> Result<Self, RenderError> {
        TreeParser { max_depth }.node(value, 0)
    }
}

impl TryFrom<Value> for ContentNode {
    type Error = RenderError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(&value)
    }
}

/// Recursive JSON-to-node conversion with a nesting budget.
#[derive(Clone, Copy)]
struct TreeParser {
    max_depth: usize,
}

impl TreeParser {
    fn node(self, value: &Value, depth: usize) -> Result<ContentNode, RenderError> {
        let object = value
            .as_object()
            .ok_or_else(|| RenderError::shape("?", "node is not a JSON object"))?;
        let node_type = object
            .get("nodeType")
            .and_then(Value::as_str)
            .ok_or_else(|| RenderError::shape("?", "missing string `nodeType`"))?;

        match node_type {
            "hr" => Ok(ContentNode::HorizontalRule),
            "text" => {
                let value = object
                    .get("value")
                    .and_then(Value::as_str)
                    .ok_or_else(|| RenderError::shape(node_type, "missing string `value`"))?;
                let marks = object
                    .get("marks")
                    .and_then(Value::as_array)
                    .ok_or_else(|| RenderError::shape(node_type, "missing `marks` array"))?
                    .iter()
                    .map(Mark::from_value)
                    .collect::<Result<_, _>>()?;
                Ok(ContentNode::text(value, marks))
            }
            "hyperlink" => {
                let uri = object
                    .get("data")
                    .and_then(|data| data.get("uri"))
                    .and_then(Value::as_str)
                    .ok_or_else(|| RenderError::shape(node_type, "missing string `data.uri`"))?;
                let content = self.required_children(node_type, object, depth + 1)?;
                Ok(ContentNode::hyperlink(uri, content))
            }
            other => match ContainerKind::from_node_type(other) {
                Some(kind) => Ok(ContentNode::container(
                    kind,
                    self.required_children(other, object, depth + 1)?,
                )),
                None => Ok(ContentNode::Unknown {
                    node_type: other.to_owned(),
                    content: self.optional_children(other, object, depth + 1)?,
                }),
            },
        }
    }

    fn required_children(
        self,
        node_type: &str,
        object: &Map<String, Value>,
        depth: usize,
    ) -> Result<Vec<ContentNode>, RenderError> {
        match object.get("content") {
            Some(content) => self.children(node_type, content, depth),
            None => Err(RenderError::shape(node_type, "missing `content` array")),
        }
    }

    fn optional_children(
        self,
        node_type: &str,
        object: &Map<String, Value>,
        depth: usize,
    ) -> Result<Vec<ContentNode>, RenderError> {
        match object.get("content") {
            Some(content) => self.children(node_type, content, depth),
            None => Ok(Vec::new()),
        }
    }

    /// Parse a `content` array whose nodes sit at `depth`.
    fn children(
        self,
        node_type: &str,
        content: &Value,
        depth: usize,
    ) -> Result<Vec<ContentNode>, RenderError> {
        let items = content
            .as_array()
            .ok_or_else(|| RenderError::shape(node_type, "`content` is not an array"))?;
        if items.is_empty() {
            return Ok(Vec::new());
        }
        if depth > self.max_depth {
            return Err(RenderError::DepthExceeded {
                limit: self.max_depth,
            });
        }
        items.iter().map(|item| self.node(item, depth)).collect()
    }
}

/// Top-level sequence of nodes.
///
/// Accepts either a bare JSON array of nodes or a `document` root object
/// (`{"nodeType": "document", "content": [...]}`) as served by rich-text
/// delivery APIs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Value")]
pub struct Document {
    /// Nodes in reading order.
    pub content: Vec<ContentNode>,
}

impl Document {
    /// Build a document from a JSON array or `document` object.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Shape`] when the value is neither, or when any
    /// node inside it is malformed.
    pub fn from_value(value: &Value) -> Result<Self, RenderError> {
        Self::from_value_with_limit(value, DEFAULT_MAX_DEPTH)
    }

    /// Build a document whose nodes may nest up to `max_depth` levels.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::DepthExceeded`] for deeper trees, otherwise as
    /// [`from_value`](Self::from_value).
    pub fn from_value_with_limit(value: &Value, max_depth: usize) -> Result<Self, RenderError> {
        let parser = TreeParser { max_depth };
        let content = match value {
            Value::Array(_) => parser.children("document", value, 0)?,
            Value::Object(object)
                if object.get("nodeType").and_then(Value::as_str) == Some("document") =>
            {
                parser.required_children("document", object, 0)?
            }
            _ => {
                return Err(RenderError::shape(
                    "document",
                    "expected an array of nodes or a `document` object",
                ));
            }
        };
        Ok(Self { content })
    }

    /// Consume the document, yielding its nodes.
    #[must_use]
    pub fn into_nodes(self) -> Vec<ContentNode> {
        self.content
    }
}

impl TryFrom<Value> for Document {
    type Error = RenderError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_container_kind_node_type_round_trips() {
        for kind in ContainerKind::ALL {
            assert_eq!(ContainerKind::from_node_type(kind.node_type()), Some(kind));
        }
    }

    #[test]
    fn test_container_kind_unknown() {
        assert_eq!(ContainerKind::from_node_type("blockquote"), None);
        assert_eq!(ContainerKind::from_node_type("heading-7"), None);
    }

    #[test]
    fn test_parse_paragraph_with_text() {
        let value = json!({
            "nodeType": "paragraph",
            "data": {},
            "content": [
                {"nodeType": "text", "value": "Hello", "marks": [{"type": "bold"}], "data": {}}
            ]
        });
        let node = ContentNode::from_value(&value).unwrap();
        assert_eq!(
            node,
            ContentNode::paragraph(vec![ContentNode::text("Hello", vec![Mark::bold()])])
        );
    }

    #[test]
    fn test_parse_hyperlink() {
        let value = json!({
            "nodeType": "hyperlink",
            "data": {"uri": "https://example.com"},
            "content": [{"nodeType": "text", "value": "go", "marks": []}]
        });
        let node = ContentNode::from_value(&value).unwrap();
        assert_eq!(
            node,
            ContentNode::hyperlink("https://example.com", vec![ContentNode::text("go", vec![])])
        );
    }

    #[test]
    fn test_parse_hr_ignores_extra_fields() {
        let value = json!({"nodeType": "hr", "content": [1, 2], "value": 3});
        assert_eq!(
            ContentNode::from_value(&value).unwrap(),
            ContentNode::HorizontalRule
        );
    }

    #[test]
    fn test_parse_unknown_keeps_children() {
        let value = json!({
            "nodeType": "blockquote",
            "content": [{"nodeType": "hr"}]
        });
        let node = ContentNode::from_value(&value).unwrap();
        assert_eq!(node.node_type(), "blockquote");
        assert_eq!(node.children(), &[ContentNode::HorizontalRule]);
    }

    #[test]
    fn test_parse_unknown_without_content() {
        let value = json!({"nodeType": "embedded-entry-inline", "data": {"target": {}}});
        let node = ContentNode::from_value(&value).unwrap();
        assert!(node.children().is_empty());
    }

    #[test]
    fn test_parse_text_missing_value() {
        let value = json!({"nodeType": "text", "marks": []});
        let err = ContentNode::from_value(&value).unwrap_err();
        assert!(matches!(err, RenderError::Shape { ref node_type, .. } if node_type == "text"));
        assert!(err.to_string().contains("value"));
    }

    #[test]
    fn test_parse_text_missing_marks() {
        let value = json!({"nodeType": "text", "value": "x"});
        let err = ContentNode::from_value(&value).unwrap_err();
        assert!(err.to_string().contains("marks"));
    }

    #[test]
    fn test_parse_mark_without_type() {
        let value = json!({"nodeType": "text", "value": "x", "marks": [{"kind": "bold"}]});
        let err = ContentNode::from_value(&value).unwrap_err();
        assert!(matches!(err, RenderError::Shape { .. }));
    }

    #[test]
    fn test_parse_hyperlink_missing_uri() {
        let value = json!({"nodeType": "hyperlink", "data": {}, "content": []});
        let err = ContentNode::from_value(&value).unwrap_err();
        assert!(err.to_string().contains("data.uri"));
    }

    #[test]
    fn test_parse_container_missing_content() {
        let value = json!({"nodeType": "paragraph"});
        let err = ContentNode::from_value(&value).unwrap_err();
        assert!(matches!(err, RenderError::Shape { ref node_type, .. } if node_type == "paragraph"));
    }

    #[test]
    fn test_parse_content_not_array() {
        let value = json!({"nodeType": "list-item", "content": "oops"});
        let err = ContentNode::from_value(&value).unwrap_err();
        assert!(err.to_string().contains("not an array"));
    }

    #[test]
    fn test_parse_missing_node_type() {
        let err = ContentNode::from_value(&json!({"content": []})).unwrap_err();
        assert!(err.to_string().contains("nodeType"));
        let err = ContentNode::from_value(&json!("text")).unwrap_err();
        assert!(err.to_string().contains("not a JSON object"));
    }

    #[test]
    fn test_parse_nested_error_propagates() {
        let value = json!({
            "nodeType": "unordered-list",
            "content": [{"nodeType": "list-item", "content": [{"nodeType": "text"}]}]
        });
        assert!(ContentNode::from_value(&value).is_err());
    }

    #[test]
    fn test_deserialize_via_serde() {
        let node: ContentNode =
            serde_json::from_str(r#"{"nodeType": "heading-2", "content": []}"#).unwrap();
        assert_eq!(node, ContentNode::container(ContainerKind::Heading2, vec![]));
    }

    #[test]
    fn test_document_from_array() {
        let doc = Document::from_value(&json!([{"nodeType": "hr"}])).unwrap();
        assert_eq!(doc.into_nodes(), vec![ContentNode::HorizontalRule]);
    }

    #[test]
    fn test_document_from_root_object() {
        let value = json!({
            "nodeType": "document",
            "data": {},
            "content": [{"nodeType": "hr"}, {"nodeType": "hr"}]
        });
        let doc = Document::from_value(&value).unwrap();
        assert_eq!(doc.content.len(), 2);
    }

    #[test]
    fn test_document_rejects_other_values() {
        assert!(Document::from_value(&json!({"nodeType": "paragraph", "content": []})).is_err());
        assert!(Document::from_value(&json!(42)).is_err());
    }

    fn nested_items(levels: usize) -> Value {
        (0..levels).fold(json!({"nodeType": "hr"}), |inner, _| {
            json!({"nodeType": "list-item", "content": [inner]})
        })
    }

    #[test]
    fn test_parse_depth_at_limit() {
        let node = ContentNode::from_value_with_limit(&nested_items(10), 10).unwrap();
        assert_eq!(node.node_type(), "list-item");
    }

    #[test]
    fn test_parse_depth_exceeded() {
        let err = ContentNode::from_value_with_limit(&nested_items(11), 10).unwrap_err();
        assert!(matches!(err, RenderError::DepthExceeded { limit: 10 }));
    }

    #[test]
    fn test_parse_empty_children_do_not_count() {
        let value = json!({"nodeType": "list-item", "content": [
            {"nodeType": "list-item", "content": []}
        ]});
        assert!(ContentNode::from_value_with_limit(&value, 1).is_ok());
        assert!(ContentNode::from_value_with_limit(&value, 0).is_err());
    }

    #[test]
    fn test_document_depth_limit() {
        let value = json!({"nodeType": "document", "content": [nested_items(3)]});
        assert!(Document::from_value_with_limit(&value, 3).is_ok());
        let err = Document::from_value_with_limit(&value, 2).unwrap_err();
        assert!(matches!(err, RenderError::DepthExceeded { limit: 2 }));
    }

    #[test]
    fn test_document_deserialize() {
        let doc: Document = serde_json::from_str("[]").unwrap();
        assert!(doc.content.is_empty());
    }
}
