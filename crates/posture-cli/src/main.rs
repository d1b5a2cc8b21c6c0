//! CLI frontend for the Posture turn order engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "posture",
    about = "Posture: readiness-based turn order for tabletop combat",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an interactive encounter
    Run {
        /// Roster file (JSON object of name -> attributes)
        #[arg(short, long, default_value = "characters.json")]
        roster: PathBuf,

        /// Maximum event log size (0 = unlimited)
        #[arg(long, default_value = "0")]
        max_events: usize,
    },

    /// Validate a roster and show each participant's posture rate
    Check {
        /// Roster file (JSON object of name -> attributes)
        #[arg(short, long, default_value = "characters.json")]
        roster: PathBuf,
    },

    /// Run an encounter where every offered turn is taken immediately
    Simulate {
        /// Roster file (JSON object of name -> attributes)
        #[arg(short, long, default_value = "characters.json")]
        roster: PathBuf,

        /// Number of ticks to simulate
        #[arg(short, long, default_value = "20")]
        ticks: u64,

        /// Print every tick (not just the summary)
        #[arg(short, long)]
        verbose: bool,

        /// Print the event log as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run { roster, max_events } => commands::run::run(&roster, max_events),
        Commands::Check { roster } => commands::check::run(&roster),
        Commands::Simulate {
            roster,
            ticks,
            verbose,
            json,
        } => commands::simulate::run(&roster, ticks, verbose, json),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
