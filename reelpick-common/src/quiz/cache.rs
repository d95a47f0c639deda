//! File-backed cache for quiz results
//!
//! One fixed slot holding the last computed result set, with 30-day
//! expiration and schema-version validation. Storage failures are fully
//! absorbed: writes report success as a bool, reads return None, and a
//! read that detects a stale or corrupt entry deletes it so the next read
//! starts clean.

use chrono::Utc;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::warn;

use super::constants::{CACHE_EXPIRATION_MS, CACHE_KEY, CACHE_VERSION};
use super::types::{MovieRecommendation, QuizSelections, SavedResult};

/// Cache metadata without the full result payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheMetadata {
    pub timestamp: i64,
    pub expires_at: i64,
    pub version: String,
}

/// The single quiz-result cache slot
///
/// Last writer wins; there is no concurrent-writer protection. Acceptable
/// for the single-user flow this backs.
#[derive(Debug, Clone)]
pub struct ResultCache {
    slot: PathBuf,
}

impl ResultCache {
    /// Cache slot living under the given data folder
    pub fn new(data_folder: &Path) -> Self {
        Self {
            slot: data_folder.join(format!("{}.json", CACHE_KEY)),
        }
    }

    /// Path of the slot file
    pub fn slot_path(&self) -> &Path {
        &self.slot
    }

    fn now_ms() -> i64 {
        Utc::now().timestamp_millis()
    }

    /// Save a quiz result, unconditionally overwriting any existing entry
    ///
    /// Returns false (never panics) when the result cannot be serialized or
    /// when the write fails twice; on the first write failure the slot is
    /// cleared and the write retried exactly once.
    pub fn set(
        &self,
        selections: &QuizSelections,
        recommendations: &[MovieRecommendation],
        total_matches: usize,
    ) -> bool {
        let now = Self::now_ms();
        let saved = SavedResult {
            timestamp: now,
            expires_at: now + CACHE_EXPIRATION_MS,
            version: CACHE_VERSION.to_string(),
            selections: selections.clone(),
            recommendations: recommendations.to_vec(),
            total_matches,
        };

        let serialized = match serde_json::to_string(&saved) {
            Ok(s) => s,
            Err(e) => {
                warn!("Failed to serialize quiz result: {}", e);
                return false;
            }
        };

        self.store(&serialized, |path, contents| std::fs::write(path, contents))
    }

    /// Write the serialized entry with clear-and-retry-once semantics
    fn store(
        &self,
        serialized: &str,
        mut write: impl FnMut(&Path, &str) -> std::io::Result<()>,
    ) -> bool {
        if let Some(parent) = self.slot.parent() {
            let _ = std::fs::create_dir_all(parent);
        }

        match write(&self.slot, serialized) {
            Ok(()) => true,
            Err(e) => {
                warn!("Quiz cache write failed: {} - clearing slot and retrying", e);
                self.clear();
                match write(&self.slot, serialized) {
                    Ok(()) => true,
                    Err(e) => {
                        warn!("Quiz cache write failed after clearing: {}", e);
                        false
                    }
                }
            }
        }
    }

    /// Load the cached quiz result, if a fresh, version-matching entry exists
    ///
    /// Version mismatch, expiry, and parse failure all delete the entry as a
    /// side effect and return None.
    pub fn get(&self) -> Option<SavedResult> {
        let serialized = std::fs::read_to_string(&self.slot).ok()?;

        let saved: SavedResult = match serde_json::from_str(&serialized) {
            Ok(saved) => saved,
            Err(e) => {
                warn!("Corrupt quiz cache entry: {} - clearing", e);
                self.clear();
                return None;
            }
        };

        if saved.version != CACHE_VERSION {
            warn!(
                stored = %saved.version,
                current = %CACHE_VERSION,
                "Quiz cache version mismatch - clearing"
            );
            self.clear();
            return None;
        }

        if Self::now_ms() >= saved.expires_at {
            warn!("Quiz cache entry expired - clearing");
            self.clear();
            return None;
        }

        Some(saved)
    }

    /// Delete the cache slot; idempotent, absorbs errors
    pub fn clear(&self) {
        if let Err(e) = std::fs::remove_file(&self.slot) {
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!("Failed to clear quiz cache: {}", e);
            }
        }
    }

    /// Whether a valid cached result exists
    pub fn has_cached_results(&self) -> bool {
        self.get().is_some()
    }

    /// Cache metadata without the result payload
    pub fn metadata(&self) -> Option<CacheMetadata> {
        self.get().map(|saved| CacheMetadata {
            timestamp: saved.timestamp,
            expires_at: saved.expires_at,
            version: saved.version,
        })
    }
}
