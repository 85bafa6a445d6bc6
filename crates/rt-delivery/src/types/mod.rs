//! Content delivery API types.

mod asset;
mod entry;
mod sys;

pub use asset::{Asset, AssetFields, AssetFile};
pub use entry::Entry;
pub use sys::{Collection, Link, LinkSys, Sys};
