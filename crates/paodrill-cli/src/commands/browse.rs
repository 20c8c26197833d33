//! The `paodrill browse` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

pub fn execute(
    data: Option<PathBuf>,
    stats_file: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let (_, table, stats) = super::load_state(data, stats_file, config_path)?;

    let mut output = Table::new();
    output.set_header(vec![
        "Number", "Person", "Action", "Object", "Accuracy", "Attempts",
    ]);

    for key in table.all_keys() {
        let association = table.get(key)?;
        let entry = stats.stats(key);
        let accuracy = entry
            .accuracy()
            .map(|a| format!("{:.0}%", a * 100.0))
            .unwrap_or_else(|| "-".to_string());
        output.add_row(vec![
            Cell::new(key),
            Cell::new(&association.person),
            Cell::new(&association.action),
            Cell::new(&association.object),
            Cell::new(accuracy),
            Cell::new(entry.attempts),
        ]);
    }

    println!("{output}");
    Ok(())
}
