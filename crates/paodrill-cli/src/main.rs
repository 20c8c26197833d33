//! paodrill CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod console;

#[derive(Parser)]
#[command(
    name = "paodrill",
    version,
    about = "Terminal trainer for PAO number mnemonics"
)]
struct Cli {
    /// Defaults to `train` when no subcommand is given.
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an interactive training session
    Train {
        /// Association CSV path (overrides config)
        #[arg(long)]
        data: Option<PathBuf>,

        /// Stats JSON path (overrides config)
        #[arg(long)]
        stats_file: Option<PathBuf>,

        /// Accuracy cutoff below which a key counts as weak
        #[arg(long)]
        weak_threshold: Option<f64>,

        /// Share of draws taken from the weak pool
        #[arg(long)]
        weak_bias: Option<f64>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List all 100 associations with lifetime accuracy
    Browse {
        /// Association CSV path (overrides config)
        #[arg(long)]
        data: Option<PathBuf>,

        /// Stats JSON path (overrides config)
        #[arg(long)]
        stats_file: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print aggregate and per-key statistics
    Stats {
        /// Association CSV path (overrides config)
        #[arg(long)]
        data: Option<PathBuf>,

        /// Stats JSON path (overrides config)
        #[arg(long)]
        stats_file: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create a starter config and association table
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("paodrill=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let command = cli.command.unwrap_or(Commands::Train {
        data: None,
        stats_file: None,
        weak_threshold: None,
        weak_bias: None,
        config: None,
    });

    let result = match command {
        Commands::Train {
            data,
            stats_file,
            weak_threshold,
            weak_bias,
            config,
        } => commands::train::execute(data, stats_file, weak_threshold, weak_bias, config),
        Commands::Browse {
            data,
            stats_file,
            config,
        } => commands::browse::execute(data, stats_file, config),
        Commands::Stats {
            data,
            stats_file,
            config,
        } => commands::stats::execute(data, stats_file, config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
