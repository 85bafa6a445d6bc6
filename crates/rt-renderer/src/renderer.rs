//! Recursive tree-to-markup renderer.

use serde_json::Value;
use tracing::debug;

use crate::error::RenderError;
use crate::json::from_json_str;
use crate::node::{ContentNode, Document, Mark};
use crate::options::{RenderOptions, UnknownNodePolicy};
use crate::processor::ProcessResult;
use crate::tags::HORIZONTAL_RULE;

/// Render a node sequence to a markup string.
///
/// Nodes are rendered in order and concatenated without a separator. Text
/// values and link targets are interpolated verbatim.
///
/// # Errors
///
/// Fails on the first unknown mark, rejected unknown node, or depth overrun.
/// No partial output is returned.
pub fn render(nodes: &[ContentNode], options: &RenderOptions) -> Result<String, RenderError> {
    let mut out = String::new();
    RenderContext::new(options).write_nodes(nodes, &mut out)?;
    Ok(out)
}

/// Apply marks to a text value.
///
/// Marks fold left to right, each wrapping the accumulated string, so the
/// first mark ends up innermost: `[bold, italic]` on `hi` gives
/// `<em><strong>hi</strong></em>`.
///
/// # Errors
///
/// Returns [`RenderError::UnknownMark`] for a mark with no tag pair.
pub fn render_text(
    value: &str,
    marks: &[Mark],
    options: &RenderOptions,
) -> Result<String, RenderError> {
    marks.iter().try_fold(value.to_owned(), |acc, mark| {
        let (open, close) = options.mark_tags(mark.mark_type())?;
        Ok(format!("{open}{acc}{close}"))
    })
}

/// Parse and render a JSON array of nodes or a `document` object.
///
/// Parsing honours the depth limit of `options`.
pub fn render_value(value: &Value, options: &RenderOptions) -> Result<String, RenderError> {
    let document = Document::from_value_with_limit(value, options.max_depth())?;
    render(&document.content, options)
}

/// Parse and render rich-text JSON source.
///
/// Source nesting is bounded by the depth limit of `options`, not by
/// `serde_json`'s default recursion limit.
pub fn render_json(json: &str, options: &RenderOptions) -> Result<String, RenderError> {
    let value: Value = from_json_str(json, options.max_depth())?;
    render_value(&value, options)
}

/// State of one step of the traversal.
///
/// Handed to [`NodeProcessor`](crate::NodeProcessor)s so they can render
/// nested content with the same options and depth accounting.
#[derive(Clone, Copy, Debug)]
pub struct RenderContext<'a> {
    options: &'a RenderOptions,
    depth: usize,
}

impl<'a> RenderContext<'a> {
    fn new(options: &'a RenderOptions) -> Self {
        Self { options, depth: 0 }
    }

    /// Options of the current render call.
    #[must_use]
    pub fn options(&self) -> &'a RenderOptions {
        self.options
    }

    /// Nesting depth of the node being rendered. Top-level nodes are at 0.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Render the children of the current node.
    ///
    /// # Errors
    ///
    /// Same as [`render`].
    pub fn render_children(&self, nodes: &[ContentNode]) -> Result<String, RenderError> {
        let mut out = String::new();
        self.write_children(nodes, &mut out)?;
        Ok(out)
    }

    fn nested(&self) -> Result<Self, RenderError> {
        let depth = self.depth + 1;
        let limit = self.options.max_depth();
        if depth > limit {
            return Err(RenderError::DepthExceeded { limit });
        }
        Ok(Self {
            options: self.options,
            depth,
        })
    }

    fn write_children(&self, nodes: &[ContentNode], out: &mut String) -> Result<(), RenderError> {
        if nodes.is_empty() {
            return Ok(());
        }
        self.nested()?.write_nodes(nodes, out)
    }

    fn write_nodes(&self, nodes: &[ContentNode], out: &mut String) -> Result<(), RenderError> {
        for node in nodes {
            self.write_node(node, out)?;
        }
        Ok(())
    }

    fn write_node(&self, node: &ContentNode, out: &mut String) -> Result<(), RenderError> {
        for processor in self.options.processors() {
            if let ProcessResult::Inline(html) = processor.process(node, self)? {
                out.push_str(&html);
                return Ok(());
            }
        }

        match node {
            ContentNode::Container { kind, content } => {
                let (open, close) = kind.tags();
                out.push_str(open);
                self.write_children(content, out)?;
                out.push_str(close);
            }
            ContentNode::Hyperlink { uri, content } => {
                out.push_str(r#"<a href=""#);
                out.push_str(uri);
                out.push_str(r#"">"#);
                self.write_children(content, out)?;
                out.push_str("</a>");
            }
            ContentNode::Text { value, marks } => {
                out.push_str(&render_text(value, marks, self.options)?);
            }
            ContentNode::HorizontalRule => out.push_str(HORIZONTAL_RULE),
            ContentNode::Unknown { node_type, content } => match self.options.unknown_nodes() {
                UnknownNodePolicy::Passthrough => {
                    debug!("Unknown node type `{node_type}`, rendering children unwrapped");
                    self.write_children(content, out)?;
                }
                UnknownNodePolicy::Skip => {
                    debug!("Unknown node type `{node_type}`, skipping");
                }
                UnknownNodePolicy::Reject => {
                    return Err(RenderError::UnknownNodeType(node_type.clone()));
                }
            },
        }
        Ok(())
    }
}
