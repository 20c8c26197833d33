//! The `paodrill train` command.

use std::path::PathBuf;

use anyhow::Result;

use paodrill_core::selector::Selector;
use paodrill_core::session::Session;
use paodrill_core::stats::StatsStore;

use crate::console::ConsoleIo;

pub fn execute(
    data: Option<PathBuf>,
    stats_file: Option<PathBuf>,
    weak_threshold: Option<f64>,
    weak_bias: Option<f64>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let (mut config, table, stats) = super::load_state(data, stats_file, config_path)?;
    if let Some(threshold) = weak_threshold {
        config.selector.weak_threshold = threshold;
    }
    if let Some(bias) = weak_bias {
        config.selector.weak_bias = bias;
    }

    print_banner(&stats);

    let selector = Selector::new(config.selector);
    let mut session = Session::new(table, stats, selector, config.stats_file.clone());
    let mut io = ConsoleIo::new();
    session.run(&mut io)
}

fn print_banner(stats: &StatsStore) {
    println!("PAO Memory Trainer");
    println!("Answer with the Person/Action/Object triple for each number.");
    println!("Commands: 'quit' to exit, 'stats' for lifetime statistics");
    match stats.overall_accuracy() {
        Some(accuracy) => println!(
            "Lifetime so far: {} attempts, {:.1}% correct",
            stats.total_attempts(),
            accuracy * 100.0
        ),
        None => println!("No attempts recorded yet - every key is new."),
    }
}
