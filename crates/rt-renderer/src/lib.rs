//! Recursive rich-text renderer.
//!
//! Translates a structured rich-text tree (the JSON node format served by
//! content delivery APIs) into a flat HTML fragment.
//!
//! # Architecture
//!
//! - [`ContentNode`]: closed sum type with one variant per known `nodeType`
//!   and an explicit [`ContentNode::Unknown`] case
//! - [`render`]: pure recursive traversal, one tag pair per container
//! - [`RenderOptions`]: threaded unchanged through every recursive call;
//!   carries the [`UnknownNodePolicy`], a depth limit, extra marks and
//!   [`NodeProcessor`] hooks
//!
//! Text and link targets are emitted verbatim. No escaping is performed.
//!
//! # Example
//!
//! ```
//! use rt_renderer::{RenderOptions, render_json};
//!
//! let json = r#"[{
//!     "nodeType": "paragraph",
//!     "content": [{"nodeType": "text", "value": "Hello", "marks": [{"type": "bold"}]}]
//! }]"#;
//! let html = render_json(json, &RenderOptions::new()).unwrap();
//! assert_eq!(html, "<p><strong>Hello</strong></p>");
//! ```

mod error;
mod json;
mod node;
mod options;
mod processor;
mod renderer;
mod tags;

pub use error::RenderError;
pub use json::{from_json_str, json_exceeds_depth};
pub use node::{ContainerKind, ContentNode, Document, Mark};
pub use options::{DEFAULT_MAX_DEPTH, RenderOptions, UnknownNodePolicy};
pub use processor::{NodeProcessor, ProcessResult};
pub use renderer::{RenderContext, render, render_json, render_text, render_value};
pub use tags::{HORIZONTAL_RULE, MARK_TAGS, builtin_mark};
