//! System metadata shared by all resources.

use serde::Deserialize;

/// Resource metadata (`sys` object).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sys {
    /// Resource ID.
    pub id: String,
    /// Resource type (`Entry`, `Asset`, `Array`).
    #[serde(rename = "type")]
    pub resource_type: String,
    /// Content type link (entries only).
    #[serde(default)]
    pub content_type: Option<Link>,
    /// Locale the fields were resolved for.
    #[serde(default)]
    pub locale: Option<String>,
    /// Last update timestamp (ISO 8601).
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Link to another resource.
#[derive(Debug, Clone, Deserialize)]
pub struct Link {
    pub sys: LinkSys,
}

/// Link target metadata.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkSys {
    /// Target ID.
    pub id: String,
    /// Target kind (`ContentType`, `Entry`, `Asset`).
    #[serde(default)]
    pub link_type: Option<String>,
}

/// Collection response.
///
/// Only the first page is requested; `total` may exceed `items.len()`.
#[derive(Debug, Clone, Deserialize)]
pub struct Collection<T> {
    /// Total number of matching resources.
    pub total: u64,
    /// Offset of the first item.
    #[serde(default)]
    pub skip: u64,
    /// Page size.
    #[serde(default)]
    pub limit: u64,
    /// Resources on this page.
    pub items: Vec<T>,
}
