use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Args, Command};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("steptrack=info".parse()?)
                .add_directive("steptrack_core=info".parse()?),
        )
        .init();

    let args = Args::parse();

    match args.command {
        Command::Reconstruct { chart, partial } => commands::reconstruct::run(&chart, &partial),
        Command::Validate { chart, record } => commands::validate::run(&chart, &record),
        Command::Search {
            chart,
            score,
            lamp,
            limit,
        } => commands::search::run(&chart, score, lamp, limit),
        Command::Grade { score } => commands::grade::run(score),
        Command::Flare { level, rank } => commands::flare::run(level, &rank),
        Command::Import { book, input } => commands::import::run(&book, &input),
        Command::Show { book, json } => commands::show::run(&book, json),
    }
}
