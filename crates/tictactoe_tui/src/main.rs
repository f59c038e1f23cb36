//! Tic-tac-toe - terminal front end.

use anyhow::Result;
use clap::Parser;
use tictactoe_tui::{
    Cli, Command, JsonPresenter, TextPresenter, TuiConfig, init_file_logging, init_stderr_logging,
    run, run_script,
};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file (RUST_LOG)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config } => {
            let config = TuiConfig::load(Some(config.as_path()))?;
            init_file_logging(config.log_file())?;
            info!("Starting tic-tac-toe");
            run(&config)
        }
        Command::Script { moves, json } => {
            init_stderr_logging()?;
            let stdout = std::io::stdout().lock();
            if json {
                run_script(&moves, &mut JsonPresenter::new(stdout))?;
            } else {
                run_script(&moves, &mut TextPresenter::new(stdout))?;
            }
            Ok(())
        }
    }
}
