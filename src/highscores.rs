//! High score ranking
//!
//! Persisted through a `PersistenceBackend`, keeps the top 10 scores. The
//! stored document is the only source of truth: every operation reloads it.

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_PLAYER_NAME;
use crate::persistence::PersistenceBackend;

/// Maximum number of ranking entries to keep
pub const MAX_RANKING_ENTRIES: usize = 10;

/// A single ranking entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingEntry {
    /// Player name
    pub name: String,
    /// Foods eaten
    pub score: u32,
}

impl RankingEntry {
    /// Build an entry, substituting the default name for blank input
    pub fn new(name: &str, score: u32) -> Self {
        Self {
            name: player_name_or_default(name),
            score,
        }
    }
}

/// Trimmed player name, or the default when blank
pub fn player_name_or_default(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        DEFAULT_PLAYER_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Sort descending by score (stable for ties), drop zero scores, cap length
fn normalize(entries: &mut Vec<RankingEntry>) {
    entries.retain(|e| e.score > 0);
    entries.sort_by(|a, b| b.score.cmp(&a.score));
    entries.truncate(MAX_RANKING_ENTRIES);
}

/// Ranking persisted under a single storage key
pub struct RankingStore<B> {
    backend: B,
}

impl<B: PersistenceBackend> RankingStore<B> {
    /// Storage key, shared with earlier releases of the game
    pub const STORAGE_KEY: &'static str = "snakeRankingV1";

    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Load the ranking; missing or corrupt data yields an empty ranking
    pub fn load(&self) -> Vec<RankingEntry> {
        let Some(json) = self.backend.get(Self::STORAGE_KEY) else {
            return Vec::new();
        };

        match serde_json::from_str::<Vec<RankingEntry>>(&json) {
            Ok(mut entries) => {
                normalize(&mut entries);
                entries
            }
            Err(e) => {
                log::warn!("Stored ranking is corrupt, treating as empty: {e}");
                Vec::new()
            }
        }
    }

    /// Record a finished game
    ///
    /// Zero scores are ignored. Returns the 1-indexed rank when the entry
    /// made it into the stored top 10, `None` if the write failed.
    pub fn record(&mut self, name: &str, score: u32) -> Option<usize> {
        if score == 0 {
            return None;
        }

        let mut entries = self.load();
        // Stable sort keeps earlier entries ahead of equal newcomers
        let position = entries.iter().filter(|e| e.score >= score).count();
        let rank = (position < MAX_RANKING_ENTRIES).then_some(position + 1);

        entries.push(RankingEntry::new(name, score));
        normalize(&mut entries);

        let json = match serde_json::to_string(&entries) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Failed to encode ranking: {e}");
                return None;
            }
        };
        match self.backend.set(Self::STORAGE_KEY, &json) {
            Ok(()) => {
                log::info!("Ranking saved ({} entries)", entries.len());
                rank
            }
            Err(e) => {
                log::warn!("Failed to save ranking: {e}");
                None
            }
        }
    }

    /// Top score, or 0 when the ranking is empty
    pub fn high_score(&self) -> u32 {
        self.load().first().map(|e| e.score).unwrap_or(0)
    }
}
