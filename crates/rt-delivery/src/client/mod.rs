//! Content delivery REST API client.
//!
//! Provides a sync HTTP client authenticated with a bearer access token.

mod assets;
mod entries;

use std::time::Duration;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use rt_config::DeliveryConfig;
use rt_renderer::{DEFAULT_MAX_DEPTH, json_exceeds_depth};
use serde::de::DeserializeOwned;
use tracing::debug;
use ureq::Agent;

use crate::error::FetchError;

/// Characters escaped in resource IDs placed in a URL path segment.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_');

/// Content delivery API client.
///
/// All settings come from the [`DeliveryConfig`] passed at construction.
pub struct DeliveryClient {
    agent: Agent,
    base_url: String,
    space_id: String,
    environment: String,
    access_token: String,
    locale: Option<String>,
    max_depth: usize,
}

impl DeliveryClient {
    /// Create client from delivery configuration.
    #[must_use]
    pub fn from_config(config: &DeliveryConfig) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(config.timeout_secs)))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            space_id: config.space_id.clone(),
            environment: config.environment.clone(),
            access_token: config.access_token.clone(),
            locale: config.locale.clone(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Set the rich-text depth limit that bounds response nesting.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Get the environment-scoped API URL.
    fn environment_url(&self) -> String {
        format!(
            "{}/spaces/{}/environments/{}",
            self.base_url, self.space_id, self.environment
        )
    }

    /// Get the URL of one resource, escaping its ID as a single path segment.
    fn resource_url(&self, collection: &str, id: &str) -> String {
        format!(
            "{}/{collection}/{}",
            self.environment_url(),
            utf8_percent_encode(id, PATH_SEGMENT)
        )
    }

    /// Issue a GET request and decode a JSON response.
    ///
    /// The configured locale is appended to every request.
    fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, FetchError> {
        debug!("GET {}", url);

        let mut request = self
            .agent
            .get(url)
            .header("Authorization", &format!("Bearer {}", self.access_token))
            .header("Accept", "application/json");
        for (key, value) in query {
            request = request.query(*key, *value);
        }
        if let Some(locale) = &self.locale {
            request = request.query("locale", locale);
        }

        let response = request.call()?;

        let status = response.status().as_u16();
        let mut body_reader = response.into_body();

        if !(200..300).contains(&status) {
            let error_body = body_reader
                .read_to_string()
                .unwrap_or_else(|_| "(unable to read error body)".to_owned());
            return Err(FetchError::HttpResponse {
                status,
                body: error_body,
            });
        }

        let body = body_reader.read_to_string()?;
        if json_exceeds_depth(&body, self.max_depth) {
            return Err(FetchError::DepthExceeded {
                limit: self.max_depth,
            });
        }
        let mut deserializer = serde_json::Deserializer::from_str(&body);
        deserializer.disable_recursion_limit();
        let value = T::deserialize(&mut deserializer)?;
        deserializer.end()?;
        Ok(value)
    }
}
