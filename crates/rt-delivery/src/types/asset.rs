//! Asset types.

use serde::Deserialize;

use super::Sys;

/// Media asset.
#[derive(Debug, Clone, Deserialize)]
pub struct Asset {
    /// Asset metadata.
    pub sys: Sys,
    /// Asset fields for the requested locale.
    #[serde(default)]
    pub fields: AssetFields,
}

/// Asset fields.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssetFields {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Uploaded file, absent while processing.
    #[serde(default)]
    pub file: Option<AssetFile>,
}

/// Uploaded file description.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetFile {
    /// File URL, usually protocol-relative (`//images.example.net/...`).
    pub url: String,
    #[serde(default)]
    pub file_name: Option<String>,
    /// MIME type.
    #[serde(default)]
    pub content_type: Option<String>,
}

impl AssetFile {
    /// File URL with an explicit `https:` scheme.
    #[must_use]
    pub fn absolute_url(&self) -> String {
        if self.url.starts_with("//") {
            format!("https:{}", self.url)
        } else {
            self.url.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_asset() {
        let asset: Asset = serde_json::from_value(json!({
            "sys": {"id": "a1", "type": "Asset"},
            "fields": {
                "title": "Logo",
                "file": {
                    "url": "//images.example.net/logo.png",
                    "fileName": "logo.png",
                    "contentType": "image/png",
                    "details": {"size": 1024}
                }
            }
        }))
        .unwrap();

        assert_eq!(asset.fields.title.as_deref(), Some("Logo"));
        let file = asset.fields.file.unwrap();
        assert_eq!(file.file_name.as_deref(), Some("logo.png"));
        assert_eq!(file.content_type.as_deref(), Some("image/png"));
        assert_eq!(file.absolute_url(), "https://images.example.net/logo.png");
    }

    #[test]
    fn test_absolute_url_keeps_scheme() {
        let file = AssetFile {
            url: "http://localhost/a.png".to_owned(),
            file_name: None,
            content_type: None,
        };
        assert_eq!(file.absolute_url(), "http://localhost/a.png");
    }

    #[test]
    fn test_asset_without_fields() {
        let asset: Asset =
            serde_json::from_value(json!({"sys": {"id": "a2", "type": "Asset"}})).unwrap();
        assert!(asset.fields.file.is_none());
    }
}
