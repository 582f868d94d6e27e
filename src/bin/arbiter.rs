//! Arbiter CLI
//!
//! This CLI provides a unified interface for:
//! - Ranking the pages of an HTML corpus with both PageRank estimators
//! - Solving Tic-Tac-Toe positions with exhaustive adversarial search

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "arbiter")]
#[command(version, about = "Game solving and page ranking toolkit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate page ranks for an HTML corpus
    Rank(arbiter::cli::commands::rank::RankArgs),

    /// Compute the optimal move for a Tic-Tac-Toe position
    Solve(arbiter::cli::commands::solve::SolveArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Rank(args) => arbiter::cli::commands::rank::execute(args),
        Commands::Solve(args) => arbiter::cli::commands::solve::execute(args),
    }
}
