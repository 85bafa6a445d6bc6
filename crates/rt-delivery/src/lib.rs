//! Content delivery API client for rt.
//!
//! Fetches entries and assets from a Contentful-style delivery API and hands
//! rich-text fields to [`rt_renderer`] as [`ContentNode`](rt_renderer::ContentNode)
//! trees. The renderer has no dependency on this crate.
//!
//! # Example
//!
//! ```ignore
//! use rt_config::Config;
//! use rt_delivery::DeliveryClient;
//! use rt_renderer::{RenderOptions, render};
//!
//! let config = Config::load(None, None)?;
//! let client = DeliveryClient::from_config(config.require_delivery()?);
//!
//! let entry = client.get_entry("welcome")?;
//! let html = render(&entry.rich_text("body")?, &RenderOptions::new())?;
//! ```

// API client
mod client;
pub use client::DeliveryClient;

// Types
pub mod types;
pub use types::{Asset, Collection, Entry};

// Errors
pub mod error;
pub use error::FetchError;
