//! CLI subcommand implementations.

use std::path::PathBuf;

use anyhow::{Context, Result};

use paodrill_core::config::DrillConfig;
use paodrill_core::stats::StatsStore;
use paodrill_core::table::AssociationTable;

pub mod browse;
pub mod init;
pub mod stats;
pub mod train;

/// Resolve config (flags override the file), then load the association
/// table and the stats store. A corrupt stats file falls back to an empty
/// store with a warning; a bad association table is fatal.
pub(crate) fn load_state(
    data: Option<PathBuf>,
    stats_file: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<(DrillConfig, AssociationTable, StatsStore)> {
    let mut config = DrillConfig::load(config_path.as_deref())?;
    if let Some(data) = data {
        config.data_file = data;
    }
    if let Some(stats_file) = stats_file {
        config.stats_file = stats_file;
    }

    let table = AssociationTable::load(&config.data_file).with_context(|| {
        format!(
            "cannot load associations from {} (run `paodrill init` to create a starter table)",
            config.data_file.display()
        )
    })?;

    let stats = match StatsStore::load(&config.stats_file) {
        Ok(stats) => stats,
        Err(e) if e.is_recoverable() => {
            tracing::warn!("{e}");
            eprintln!("Warning: {e}; starting with an empty stats store");
            StatsStore::new()
        }
        Err(e) => return Err(e.into()),
    };

    Ok((config, table, stats))
}
