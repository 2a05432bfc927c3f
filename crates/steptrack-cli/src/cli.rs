//! CLI argument definitions for steptrack.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "steptrack")]
#[command(about = "Step-chart score reconstruction toolkit", version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

/// Chart note counts shared by the chart-bound commands.
#[derive(Debug, clap::Args)]
pub struct ChartArgs {
    /// Normal step count
    #[arg(long)]
    pub notes: u32,

    /// Freeze arrow (hold note) count
    #[arg(long, default_value_t = 0)]
    pub freeze_arrow: u32,

    /// Shock arrow count
    #[arg(long, default_value_t = 0)]
    pub shock_arrow: u32,
}

#[derive(Subcommand)]
pub enum Command {
    /// Complete a partial score observation into a full record
    Reconstruct {
        #[command(flatten)]
        chart: ChartArgs,
        /// Partial score as JSON, or @FILE to read it from a file
        partial: String,
    },
    /// Check a score record against the chart's physical limits
    Validate {
        #[command(flatten)]
        chart: ChartArgs,
        /// Score record as JSON, or @FILE to read it from a file
        record: String,
    },
    /// Enumerate judgment breakdowns consistent with a score
    Search {
        #[command(flatten)]
        chart: ChartArgs,
        /// Observed score
        #[arg(long)]
        score: u32,
        /// Clear lamp tier constraint (0-7)
        #[arg(long, default_value_t = 0)]
        lamp: u8,
        /// Stop after this many breakdowns
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Dance level for a score
    Grade {
        #[arg(long)]
        score: u32,
    },
    /// Flare skill for a chart level and flare rank
    Flare {
        /// Chart level (1-19)
        #[arg(long)]
        level: u8,
        /// Flare rank (None, I..IX, EX)
        #[arg(long, default_value = "EX")]
        rank: String,
    },
    /// Fold score observations (JSON lines) into a score book file
    Import {
        /// Score book file
        #[arg(short, long, default_value = "scorebook.json")]
        book: PathBuf,
        /// Observations file, one JSON object per line
        input: PathBuf,
    },
    /// Print a score book
    Show {
        /// Score book file
        #[arg(short, long, default_value = "scorebook.json")]
        book: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
