//! Fixed tag tables.
//!
//! Node-type misses and mark-type misses are handled separately: an unknown
//! node falls through to [`UnknownNodePolicy`](crate::UnknownNodePolicy),
//! an unknown mark is an error.

use crate::node::ContainerKind;

/// Horizontal rule markup.
pub const HORIZONTAL_RULE: &str = "<hr />";

/// Built-in mark table: `(type, open, close)`.
pub const MARK_TAGS: &[(&str, &str, &str)] = &[
    ("bold", "<strong>", "</strong>"),
    ("italic", "<em>", "</em>"),
];

/// Look up a built-in mark.
#[must_use]
pub fn builtin_mark(mark_type: &str) -> Option<(&'static str, &'static str)> {
    MARK_TAGS
        .iter()
        .find(|(name, _, _)| *name == mark_type)
        .map(|&(_, open, close)| (open, close))
}

impl ContainerKind {
    /// Open and close tags for this container.
    #[must_use]
    pub const fn tags(self) -> (&'static str, &'static str) {
        match self {
            Self::Paragraph => ("<p>", "</p>"),
            Self::Heading1 => ("<h1>", "</h1>"),
            Self::Heading2 => ("<h2>", "</h2>"),
            Self::Heading3 => ("<h3>", "</h3>"),
            Self::Heading4 => ("<h4>", "</h4>"),
            Self::Heading5 => ("<h5>", "</h5>"),
            Self::Heading6 => ("<h6>", "</h6>"),
            Self::ListItem => ("<li>", "</li>"),
            Self::UnorderedList => ("<ul>", "</ul>"),
            Self::OrderedList => ("<ol>", "</ol>"),
            Self::Table => ("<table>", "</table>"),
            Self::TableRow => ("<tr>", "</tr>"),
            Self::TableHeaderCell => ("<th>", "</th>"),
            Self::TableCell => ("<td>", "</td>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_marks() {
        assert_eq!(builtin_mark("bold"), Some(("<strong>", "</strong>")));
        assert_eq!(builtin_mark("italic"), Some(("<em>", "</em>")));
        assert_eq!(builtin_mark("underline"), None);
        assert_eq!(builtin_mark("Bold"), None);
    }

    #[test]
    fn test_heading_tags() {
        assert_eq!(ContainerKind::Heading1.tags(), ("<h1>", "</h1>"));
        assert_eq!(ContainerKind::Heading6.tags(), ("<h6>", "</h6>"));
    }

    #[test]
    fn test_every_close_tag_matches_open() {
        for kind in ContainerKind::ALL {
            let (open, close) = kind.tags();
            assert_eq!(close, open.replacen('<', "</", 1), "{kind:?}");
        }
    }
}
