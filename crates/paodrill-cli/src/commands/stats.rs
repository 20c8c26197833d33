//! The `paodrill stats` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use paodrill_core::stats::EntryStats;

/// Accuracy bands for the per-key breakdown.
const BANDS: [(&str, f64); 4] = [
    ("Mastered (90-100%)", 0.90),
    ("Good (70-89%)", 0.70),
    ("Needs work (50-69%)", 0.50),
    ("Struggling (0-49%)", 0.0),
];

pub fn execute(
    data: Option<PathBuf>,
    stats_file: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let (_, table, stats) = super::load_state(data, stats_file, config_path)?;

    match stats.overall_accuracy() {
        Some(accuracy) => println!(
            "Lifetime: {} attempts, {} correct ({:.1}%)",
            stats.total_attempts(),
            stats.total_correct(),
            accuracy * 100.0
        ),
        None => println!("Lifetime: no attempts recorded yet"),
    }

    // Group keys into accuracy bands, untested last.
    let mut banded: Vec<Vec<(paodrill_core::model::Key, EntryStats)>> =
        vec![Vec::new(); BANDS.len()];
    let mut untested = 0usize;
    for key in table.all_keys() {
        let entry = stats.stats(key);
        match entry.accuracy() {
            None => untested += 1,
            Some(accuracy) => {
                let band = BANDS
                    .iter()
                    .position(|(_, floor)| accuracy >= *floor)
                    .unwrap_or(BANDS.len() - 1);
                banded[band].push((key, entry));
            }
        }
    }

    for ((name, _), keys) in BANDS.iter().zip(&banded) {
        if keys.is_empty() {
            continue;
        }
        println!("\n{name} ({}):", keys.len());
        for (key, entry) in keys.iter().take(10) {
            let person = &table.get(*key)?.person;
            let accuracy = entry.accuracy().unwrap_or(0.0);
            println!(
                "  {key}: {person} ({:.0}% over {} attempts)",
                accuracy * 100.0,
                entry.attempts
            );
        }
        if keys.len() > 10 {
            println!("  ... and {} more", keys.len() - 10);
        }
    }
    println!("\nUntested: {untested} of {} keys", table.len());

    let weakest = stats.weakest(10);
    if !weakest.is_empty() {
        let mut output = Table::new();
        output.set_header(vec!["Number", "Person", "Accuracy", "Attempts"]);
        for (key, accuracy) in weakest {
            output.add_row(vec![
                Cell::new(key),
                Cell::new(&table.get(key)?.person),
                Cell::new(format!("{:.0}%", accuracy * 100.0)),
                Cell::new(stats.stats(key).attempts),
            ]);
        }
        println!("\nWeakest keys:\n{output}");
    }

    Ok(())
}
