//! TRIHEX CLI - Command-line interface
//!
//! Commands:
//! - play: Play a game in the terminal
//! - graph: Inspect an adjacency graph

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod graph;
mod play;

#[derive(Parser)]
#[command(name = "trihex")]
#[command(about = "Hexagon connection game")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game in the terminal
    Play {
        /// Hex grid is N x N
        #[arg(long, default_value = "3")]
        grid_size: usize,
        #[arg(long, default_value = "4")]
        players: usize,
        /// Connected group size that wins
        #[arg(long, default_value = "3")]
        win_length: usize,
        /// Adjacency mode: general, face or corner
        #[arg(long, default_value = "general")]
        mode: String,
        /// JSON config file overriding the flags
        #[arg(long)]
        config: Option<PathBuf>,
        /// Comma-separated cell indices to play instead of reading stdin
        #[arg(long)]
        moves: Option<String>,
    },
    /// Inspect an adjacency graph
    Graph {
        #[arg(long, default_value = "3")]
        grid_size: usize,
        /// Adjacency mode: general, face or corner
        #[arg(long, default_value = "general")]
        mode: String,
    },
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            grid_size,
            players,
            win_length,
            mode,
            config,
            moves,
        } => play::run(grid_size, players, win_length, &mode, config, moves),
        Commands::Graph { grid_size, mode } => graph::run(grid_size, &mode),
    }
}
