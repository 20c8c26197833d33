//! Durable per-key performance counters with JSON persistence.
//!
//! The store is exclusively owned by one process and mutated strictly in
//! sequence by the session, so there is no locking. Durability comes from
//! flushing the whole mapping after every recorded answer; `save` writes to
//! a sibling temp file and renames so an interrupted flush never truncates
//! the previous snapshot.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::TrainerError;
use crate::model::Key;

/// Lifetime counters for one key. Invariant: `correct <= attempts`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryStats {
    pub attempts: u32,
    pub correct: u32,
}

impl EntryStats {
    /// Accuracy in `[0, 1]`, or `None` when the key was never attempted.
    pub fn accuracy(&self) -> Option<f64> {
        if self.attempts == 0 {
            None
        } else {
            Some(self.correct as f64 / self.attempts as f64)
        }
    }
}

/// Mapping from key to lifetime counters. Keys with no record are
/// semantically `attempts = 0`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsStore {
    entries: BTreeMap<Key, EntryStats>,
}

impl StatsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load persisted stats. A missing file is simply an empty store; a file
    /// that exists but does not parse is a [`TrainerError::StatsLoad`] so the
    /// caller can decide between falling back and aborting.
    pub fn load(path: &Path) -> Result<Self, TrainerError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no stats file, starting empty");
            return Ok(Self::new());
        }
        let corrupt = |reason: String| TrainerError::StatsLoad {
            path: path.to_path_buf(),
            reason,
        };
        let content = std::fs::read_to_string(path).map_err(|e| corrupt(e.to_string()))?;
        let entries: BTreeMap<Key, EntryStats> =
            serde_json::from_str(&content).map_err(|e| corrupt(e.to_string()))?;
        for (key, stats) in &entries {
            if stats.correct > stats.attempts {
                return Err(corrupt(format!(
                    "key {key}: correct {} exceeds attempts {}",
                    stats.correct, stats.attempts
                )));
            }
        }
        tracing::debug!(path = %path.display(), entries = entries.len(), "loaded stats");
        Ok(Self { entries })
    }

    /// Flush the full mapping to disk as pretty JSON.
    pub fn save(&self, path: &Path) -> Result<(), TrainerError> {
        let save_err = |source: std::io::Error| TrainerError::StatsSave {
            path: path.to_path_buf(),
            source,
        };
        let json = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| save_err(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(save_err)?;
            }
        }
        let tmp = path.with_extension("tmp");
        std::fs::write(&tmp, json).map_err(save_err)?;
        std::fs::rename(&tmp, path).map_err(save_err)?;
        tracing::debug!(path = %path.display(), entries = self.entries.len(), "stats flushed");
        Ok(())
    }

    /// Counters for a key; zeroes when it has never been attempted.
    pub fn stats(&self, key: Key) -> EntryStats {
        self.entries.get(&key).copied().unwrap_or_default()
    }

    /// Record one graded answer.
    pub fn record(&mut self, key: Key, was_correct: bool) {
        let entry = self.entries.entry(key).or_default();
        entry.attempts += 1;
        if was_correct {
            entry.correct += 1;
        }
        tracing::debug!(%key, correct = was_correct, attempts = entry.attempts, "recorded answer");
    }

    /// Lifetime accuracy for a key, or `None` when never attempted.
    pub fn accuracy(&self, key: Key) -> Option<f64> {
        self.stats(key).accuracy()
    }

    /// Total recorded attempts across all keys.
    pub fn total_attempts(&self) -> u64 {
        self.entries.values().map(|s| s.attempts as u64).sum()
    }

    /// Total correct answers across all keys.
    pub fn total_correct(&self) -> u64 {
        self.entries.values().map(|s| s.correct as u64).sum()
    }

    /// Lifetime accuracy across all keys, or `None` if nothing was attempted.
    pub fn overall_accuracy(&self) -> Option<f64> {
        let attempts = self.total_attempts();
        if attempts == 0 {
            None
        } else {
            Some(self.total_correct() as f64 / attempts as f64)
        }
    }

    /// Attempted keys sorted by ascending accuracy (ties by key), at most
    /// `n` entries. Never-attempted keys are excluded since they have no
    /// accuracy to rank.
    pub fn weakest(&self, n: usize) -> Vec<(Key, f64)> {
        let mut ranked: Vec<(Key, f64)> = self
            .entries
            .iter()
            .filter_map(|(key, stats)| stats.accuracy().map(|a| (*key, a)))
            .collect();
        ranked.sort_by(|a, b| {
            a.1.partial_cmp(&b.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.0.cmp(&b.0))
        });
        ranked.truncate(n);
        ranked
    }
}
