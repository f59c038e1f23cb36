//! Command-line interface for the tic-tac-toe front end.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_engine::Intent;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe with a running score", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Path to a TOML config file
        #[arg(short, long, default_value = "tictactoe.toml")]
        config: PathBuf,
    },

    /// Apply a list of intents and print the final state
    Script {
        /// Comma-separated intents: cell indices 0-8, `reset`, `new`
        #[arg(short, long, value_delimiter = ',', required = true)]
        moves: Vec<Intent>,

        /// Print the state as JSON instead of a text grid
        #[arg(long)]
        json: bool,
    },
}
