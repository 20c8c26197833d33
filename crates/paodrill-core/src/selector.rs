//! Weighted-random key selection biased toward weak entries.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::model::Key;
use crate::stats::StatsStore;
use crate::table::AssociationTable;

/// Tuning for the two-pool selection policy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Keys with lifetime accuracy below this cutoff count as weak.
    /// Never-attempted keys always count as weak.
    pub weak_threshold: f64,
    /// Probability of drawing from the weak pool instead of the full domain.
    pub weak_bias: f64,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            weak_threshold: 0.7,
            weak_bias: 0.30,
        }
    }
}

/// Picks the next key to drill.
///
/// On each draw: with probability `weak_bias` (and a non-empty weak pool)
/// the pick is uniform over the weak pool; otherwise it is uniform over all
/// 100 keys. Every key therefore stays reachable on every draw, and once
/// nothing qualifies as weak the policy degrades to plain uniform selection.
///
/// The random source is injected so tests can seed it.
#[derive(Debug)]
pub struct Selector<R: Rng = StdRng> {
    config: SelectorConfig,
    rng: R,
}

impl Selector<StdRng> {
    pub fn new(config: SelectorConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }
}

impl<R: Rng> Selector<R> {
    /// Selector with an explicit random source, for deterministic tests.
    pub fn with_rng(config: SelectorConfig, rng: R) -> Self {
        Self { config, rng }
    }

    pub fn config(&self) -> SelectorConfig {
        self.config
    }

    /// Keys that currently qualify as weak: never attempted, or lifetime
    /// accuracy below the configured cutoff.
    pub fn weak_pool(&self, table: &AssociationTable, stats: &StatsStore) -> Vec<Key> {
        table
            .all_keys()
            .filter(|&key| match stats.accuracy(key) {
                None => true,
                Some(accuracy) => accuracy < self.config.weak_threshold,
            })
            .collect()
    }

    /// Choose the next key to quiz.
    pub fn next(&mut self, table: &AssociationTable, stats: &StatsStore) -> Key {
        let weak = self.weak_pool(table, stats);
        if !weak.is_empty() && self.rng.gen::<f64>() < self.config.weak_bias {
            let pick = weak[self.rng.gen_range(0..weak.len())];
            tracing::debug!(key = %pick, pool = "weak", pool_size = weak.len(), "selected");
            return pick;
        }
        let all: Vec<Key> = table.all_keys().collect();
        let pick = all[self.rng.gen_range(0..all.len())];
        tracing::debug!(key = %pick, pool = "all", "selected");
        pick
    }
}
