//! Entry operations for the content delivery API.

use tracing::info;

use super::DeliveryClient;
use crate::error::FetchError;
use crate::types::{Collection, Entry};

impl DeliveryClient {
    /// Get a single entry by ID.
    pub fn get_entry(&self, entry_id: &str) -> Result<Entry, FetchError> {
        let url = self.resource_url("entries", entry_id);

        info!("Getting entry {}", entry_id);

        self.get_json(&url, &[])
    }

    /// Get the first page of entries, optionally filtered by content type.
    pub fn get_entries(&self, content_type: Option<&str>) -> Result<Collection<Entry>, FetchError> {
        let url = format!("{}/entries", self.environment_url());

        let query: Vec<(&str, &str)> = content_type
            .map(|ct| ("content_type", ct))
            .into_iter()
            .collect();

        info!(
            "Listing entries{}",
            content_type.map_or_else(String::new, |ct| format!(" of type {ct}"))
        );

        let entries: Collection<Entry> = self.get_json(&url, &query)?;
        info!("Found {} entries ({} total)", entries.items.len(), entries.total);
        Ok(entries)
    }
}
