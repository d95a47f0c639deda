//! Watchlist record store

use chrono::Utc;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use reelpick_common::types::WatchlistItem;
use reelpick_common::{Error, Result};

/// A watchlist entry about to be stored
#[derive(Debug, Clone)]
pub struct NewWatchlistEntry {
    pub movie_id: u64,
    pub movie_title: String,
    pub poster_path: Option<String>,
}

/// Flat-file watchlist store (`watchlist.json` under the data folder)
#[derive(Debug, Clone)]
pub struct WatchlistStore {
    path: PathBuf,
}

impl WatchlistStore {
    pub fn new(data_folder: &Path) -> Self {
        Self {
            path: data_folder.join("watchlist.json"),
        }
    }

    /// All stored entries, oldest first
    pub fn list(&self) -> Vec<WatchlistItem> {
        super::read_records(&self.path)
    }

    /// Append an entry; a movie id already present is rejected
    pub fn add(&self, entry: NewWatchlistEntry) -> Result<WatchlistItem> {
        let mut watchlist = self.list();

        if watchlist.iter().any(|item| item.movie_id == entry.movie_id) {
            return Err(Error::InvalidInput("Movie already in watchlist".to_string()));
        }

        let item = WatchlistItem {
            id: Uuid::new_v4(),
            movie_id: entry.movie_id,
            movie_title: entry.movie_title,
            poster_path: entry.poster_path,
            added_at: Utc::now().to_rfc3339(),
        };

        watchlist.push(item.clone());
        super::write_records(&self.path, &watchlist)?;
        Ok(item)
    }

    /// Remove every entry for a movie id; removing an absent id is a no-op
    pub fn remove(&self, movie_id: u64) -> Result<()> {
        let watchlist: Vec<WatchlistItem> = self
            .list()
            .into_iter()
            .filter(|item| item.movie_id != movie_id)
            .collect();
        super::write_records(&self.path, &watchlist)
    }
}
