mod commands;

use clap::{Parser, Subcommand};
use holdem_shared::RoundStep;
use std::path::PathBuf;

pub use commands::{load_snapshot, run};

/// CLI for inspecting and generating table snapshots
#[derive(Parser, Debug, Clone)]
#[command(name = "holdem-snapshot", version, about = "Inspect, check, redact and generate Hold'em table snapshots", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(long, default_value = "holdem-snapshot.toml")]
    pub config: PathBuf,

    /// Verbose logging with targets, files and line numbers
    #[arg(long, default_value_t = false)]
    pub debug: bool,

    /// Output JSON instead of human-readable text where both are possible
    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print a snapshot file as a table
    Show { file: PathBuf },
    /// Validate a snapshot file and report the first problem found
    Check { file: PathBuf },
    /// Print the snapshot as the given seat would receive it
    Redact {
        file: PathBuf,
        /// Seat to keep hole cards for (defaults to config.default_viewer; spectator when unset)
        #[arg(long)]
        viewer: Option<usize>,
    },
    /// Deal a random table and print it as JSON
    Demo {
        /// Number of seated players
        #[arg(long, default_value_t = 4)]
        players: usize,
        /// Seed for a reproducible deal
        #[arg(long)]
        seed: Option<u64>,
        /// Hand progress to deal up to
        #[arg(long, value_enum, default_value_t = StepArg::Flop)]
        step: StepArg,
        /// Redact for this seat before printing
        #[arg(long)]
        viewer: Option<usize>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum StepArg {
    Waiting,
    Preflop,
    Flop,
    Turn,
    River,
    Showdown,
    Results,
}

impl From<StepArg> for RoundStep {
    fn from(step: StepArg) -> Self {
        match step {
            StepArg::Waiting => RoundStep::Waiting,
            StepArg::Preflop => RoundStep::PreFlop,
            StepArg::Flop => RoundStep::Flop,
            StepArg::Turn => RoundStep::Turn,
            StepArg::River => RoundStep::River,
            StepArg::Showdown => RoundStep::Showdown,
            StepArg::Results => RoundStep::Results,
        }
    }
}
