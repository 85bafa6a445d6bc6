//! Depth-bounded JSON source parsing.
//!
//! `serde_json` stops at a fixed recursion limit of 128, which a rich-text
//! tree reaches at about 62 node levels because every level costs two JSON
//! levels (the node object and its `content` array). Here the limit is lifted
//! and replaced by a bracket scan sized from the render depth limit, so the
//! configured `max_depth` decides how deep a document may be.

use serde::de::DeserializeOwned;

use crate::error::RenderError;

/// JSON levels allowed on top of two per node level.
///
/// Leaves carry `marks` and `data` objects, and API responses wrap the
/// document in an envelope of their own.
const EXTRA_JSON_LEVELS: usize = 16;

/// Check whether `json` nests deeper than a tree of `max_depth` node levels.
///
/// Only brackets outside string literals count. Malformed input is not
/// rejected here; the parser reports it.
#[must_use]
pub fn json_exceeds_depth(json: &str, max_depth: usize) -> bool {
    let limit = max_depth
        .saturating_add(1)
        .saturating_mul(2)
        .saturating_add(EXTRA_JSON_LEVELS);

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    for byte in json.bytes() {
        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match byte {
            b'"' => in_string = true,
            b'[' | b'{' => {
                depth += 1;
                if depth > limit {
                    return true;
                }
            }
            b']' | b'}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    false
}

/// Deserialize JSON source whose nesting fits `max_depth` node levels.
///
/// # Errors
///
/// Returns [`RenderError::DepthExceeded`] when the source nests too deeply
/// and [`RenderError::Json`] when it is not valid JSON for `T`.
pub fn from_json_str<T: DeserializeOwned>(json: &str, max_depth: usize) -> Result<T, RenderError> {
    if json_exceeds_depth(json, max_depth) {
        return Err(RenderError::DepthExceeded { limit: max_depth });
    }
    let mut deserializer = serde_json::Deserializer::from_str(json);
    deserializer.disable_recursion_limit();
    let value = T::deserialize(&mut deserializer)?;
    deserializer.end()?;
    Ok(value)
}
