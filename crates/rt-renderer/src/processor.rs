//! Node processor trait for node-specific rendering.
//!
//! Processors let callers change how particular nodes render (embedded
//! entries, custom link targets, extra wrappers) without touching the
//! traversal. They are registered on [`RenderOptions`](crate::RenderOptions)
//! and consulted in order for every node; the first result other than
//! [`ProcessResult::PassThrough`] wins.
//!
//! # Example
//!
//! ```
//! use rt_renderer::{
//!     ContentNode, NodeProcessor, ProcessResult, RenderContext, RenderError, RenderOptions,
//! };
//!
//! struct ExternalLinks;
//!
//! impl NodeProcessor for ExternalLinks {
//!     fn process(
//!         &self,
//!         node: &ContentNode,
//!         ctx: &RenderContext<'_>,
//!     ) -> Result<ProcessResult, RenderError> {
//!         let ContentNode::Hyperlink { uri, content } = node else {
//!             return Ok(ProcessResult::PassThrough);
//!         };
//!         let inner = ctx.render_children(content)?;
//!         Ok(ProcessResult::Inline(format!(
//!             r#"<a href="{uri}" rel="noopener">{inner}</a>"#
//!         )))
//!     }
//! }
//!
//! let options = RenderOptions::new().with_processor(ExternalLinks);
//! let nodes = [ContentNode::hyperlink("https://x", vec![ContentNode::text("go", vec![])])];
//! let html = rt_renderer::render(&nodes, &options).unwrap();
//! assert_eq!(html, r#"<a href="https://x" rel="noopener">go</a>"#);
//! ```

use crate::error::RenderError;
use crate::node::ContentNode;
use crate::renderer::RenderContext;

/// Result of offering a node to a processor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProcessResult {
    /// Emit this markup in place of the node.
    Inline(String),

    /// Render the node with the built-in rules.
    PassThrough,
}

/// Hook for rendering specific nodes.
pub trait NodeProcessor: Send + Sync {
    /// Render `node` or decline with [`ProcessResult::PassThrough`].
    ///
    /// `ctx` carries the active options and depth; use
    /// [`RenderContext::render_children`] to render nested content with the
    /// same traversal.
    fn process(
        &self,
        node: &ContentNode,
        ctx: &RenderContext<'_>,
    ) -> Result<ProcessResult, RenderError>;
}
