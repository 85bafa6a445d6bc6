//! Asset operations for the content delivery API.

use tracing::info;

use super::DeliveryClient;
use crate::error::FetchError;
use crate::types::Asset;

impl DeliveryClient {
    /// Get a single asset by ID.
    pub fn get_asset(&self, asset_id: &str) -> Result<Asset, FetchError> {
        let url = self.resource_url("assets", asset_id);

        info!("Getting asset {}", asset_id);

        self.get_json(&url, &[])
    }
}

#[cfg(test)]
mod tests {
    use httpmock::MockServer;

    use super::super::test_support::{client, env_path};

    #[test]
    fn test_get_asset() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method("GET").path(env_path("/assets/logo"));
            then.status(200).body(
                r#"{
                    "sys": {"id": "logo", "type": "Asset"},
                    "fields": {
                        "title": "Logo",
                        "file": {"url": "//images.example.net/logo.svg", "contentType": "image/svg+xml"}
                    }
                }"#,
            );
        });

        let asset = client(&server).get_asset("logo").unwrap();

        mock.assert();
        assert_eq!(asset.sys.id, "logo");
        assert_eq!(
            asset.fields.file.unwrap().absolute_url(),
            "https://images.example.net/logo.svg"
        );
    }

    #[test]
    fn test_get_asset_server_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method("GET").path(env_path("/assets/logo"));
            then.status(503).body("unavailable");
        });

        let err = client(&server).get_asset("logo").unwrap_err();
        assert!(err.to_string().contains("503"));
        assert!(err.to_string().contains("unavailable"));
    }
}
