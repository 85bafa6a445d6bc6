//! Render options threaded through every recursive call.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::RenderError;
use crate::processor::NodeProcessor;
use crate::tags::builtin_mark;

/// Default nesting limit.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// What to do with a node whose `nodeType` is not in the known set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownNodePolicy {
    /// Render the node's children without wrapping tags.
    #[default]
    Passthrough,
    /// Drop the node and everything under it.
    Skip,
    /// Fail with [`RenderError::UnknownNodeType`].
    Reject,
}

impl FromStr for UnknownNodePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "passthrough" => Ok(Self::Passthrough),
            "skip" => Ok(Self::Skip),
            "reject" => Ok(Self::Reject),
            other => Err(format!(
                "unknown node policy `{other}` (expected passthrough, skip or reject)"
            )),
        }
    }
}

/// Options for a render call.
///
/// The same value is passed unchanged to every recursive step and to every
/// [`NodeProcessor`].
pub struct RenderOptions {
    unknown_nodes: UnknownNodePolicy,
    max_depth: usize,
    custom_marks: HashMap<String, (String, String)>,
    processors: Vec<Box<dyn NodeProcessor>>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            unknown_nodes: UnknownNodePolicy::default(),
            max_depth: DEFAULT_MAX_DEPTH,
            custom_marks: HashMap::new(),
            processors: Vec::new(),
        }
    }
}

impl fmt::Debug for RenderOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderOptions")
            .field("unknown_nodes", &self.unknown_nodes)
            .field("max_depth", &self.max_depth)
            .field("custom_marks", &self.custom_marks)
            .field("processors", &self.processors.len())
            .finish()
    }
}

impl RenderOptions {
    /// Options with default policy and depth limit, no extensions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the unknown node policy.
    #[must_use]
    pub fn with_unknown_nodes(mut self, policy: UnknownNodePolicy) -> Self {
        self.unknown_nodes = policy;
        self
    }

    /// Set the maximum nesting depth below the top-level sequence.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Register a tag pair for an additional mark type.
    ///
    /// Built-in marks (`bold`, `italic`) always win over a registration with
    /// the same name.
    #[must_use]
    pub fn with_mark(
        mut self,
        mark_type: impl Into<String>,
        open: impl Into<String>,
        close: impl Into<String>,
    ) -> Self {
        self.custom_marks
            .insert(mark_type.into(), (open.into(), close.into()));
        self
    }

    /// Add a node processor. Processors run in registration order.
    #[must_use]
    pub fn with_processor(mut self, processor: impl NodeProcessor + 'static) -> Self {
        self.processors.push(Box::new(processor));
        self
    }

    #[must_use]
    pub fn unknown_nodes(&self) -> UnknownNodePolicy {
        self.unknown_nodes
    }

    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub(crate) fn processors(&self) -> &[Box<dyn NodeProcessor>] {
        &self.processors
    }

    /// Resolve a mark type to its open and close tags.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::UnknownMark`] when neither the built-in table
    /// nor a registration covers `mark_type`.
    pub fn mark_tags(&self, mark_type: &str) -> Result<(&str, &str), RenderError> {
        if let Some(pair) = builtin_mark(mark_type) {
            return Ok(pair);
        }
        self.custom_marks
            .get(mark_type)
            .map(|(open, close)| (open.as_str(), close.as_str()))
            .ok_or_else(|| RenderError::UnknownMark(mark_type.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = RenderOptions::new();
        assert_eq!(options.unknown_nodes(), UnknownNodePolicy::Passthrough);
        assert_eq!(options.max_depth(), DEFAULT_MAX_DEPTH);
        assert!(options.processors().is_empty());
    }

    #[test]
    fn test_mark_tags_builtin() {
        let options = RenderOptions::new();
        assert_eq!(options.mark_tags("bold").unwrap(), ("<strong>", "</strong>"));
    }

    #[test]
    fn test_mark_tags_unknown() {
        let err = RenderOptions::new().mark_tags("sparkle").unwrap_err();
        assert!(matches!(err, RenderError::UnknownMark(ref t) if t == "sparkle"));
    }

    #[test]
    fn test_mark_tags_custom() {
        let options = RenderOptions::new().with_mark("underline", "<u>", "</u>");
        assert_eq!(options.mark_tags("underline").unwrap(), ("<u>", "</u>"));
    }

    #[test]
    fn test_builtin_mark_not_overridable() {
        let options = RenderOptions::new().with_mark("bold", "<b>", "</b>");
        assert_eq!(options.mark_tags("bold").unwrap(), ("<strong>", "</strong>"));
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!(
            "skip".parse::<UnknownNodePolicy>(),
            Ok(UnknownNodePolicy::Skip)
        );
        assert_eq!(
            "reject".parse::<UnknownNodePolicy>(),
            Ok(UnknownNodePolicy::Reject)
        );
        assert!("ignore".parse::<UnknownNodePolicy>().is_err());
    }

    #[test]
    fn test_debug_reports_processor_count() {
        let debug = format!("{:?}", RenderOptions::new());
        assert!(debug.contains("processors: 0"));
    }
}
