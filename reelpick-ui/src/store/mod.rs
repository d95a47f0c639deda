//! JSON-file-backed record stores
//!
//! Watchlist entries and reviews live as flat JSON arrays under the data
//! folder. A missing or unreadable file reads as an empty list; writes
//! are pretty-printed and create the data folder on demand.

mod reviews;
mod watchlist;

pub use reviews::{NewReview, ReviewStore};
pub use watchlist::{NewWatchlistEntry, WatchlistStore};

use reelpick_common::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

/// Read all records from a JSON array file; missing or corrupt ⇒ empty
fn read_records<T: DeserializeOwned>(path: &Path) -> Vec<T> {
    match std::fs::read_to_string(path) {
        Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
            tracing::warn!("Corrupt record file {}: {} - treating as empty", path.display(), e);
            Vec::new()
        }),
        Err(_) => Vec::new(),
    }
}

/// Write all records back, creating the parent folder if needed
fn write_records<T: Serialize>(path: &Path, records: &[T]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let serialized = serde_json::to_string_pretty(records)
        .map_err(|e| reelpick_common::Error::Internal(format!("Serialize records: {}", e)))?;
    std::fs::write(path, serialized)?;
    Ok(())
}
