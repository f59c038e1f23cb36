//! Terminal front end for the tic-tac-toe engine.
//!
//! - **Play**: interactive ratatui board with keyboard control
//! - **Script**: headless replay of intents, printed as text or JSON
//!
//! Both drive the engine through the same [`Presenter`](tictactoe_engine::Presenter)
//! seam.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod logging;
mod script;
mod terminal;
mod text;
mod ui;

pub use app::App;
pub use cli::{Cli, Command};
pub use config::{ConfigError, Theme, TuiConfig};
pub use input::{Command as KeyCommand, command_for_key, move_cursor};
pub use logging::{init_file_logging, init_stderr_logging};
pub use script::run_script;
pub use terminal::{TerminalPresenter, run};
pub use text::{JsonPresenter, TextPresenter, render_grid};
pub use ui::draw;
