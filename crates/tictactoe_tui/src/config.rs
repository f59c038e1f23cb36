//! Terminal front-end configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info, instrument};

/// Settings for the terminal front end, read from TOML.
///
/// Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// File the TUI writes its log to (the screen is taken).
    log_file: PathBuf,

    /// Color name for X marks.
    x_color: String,

    /// Color name for O marks.
    o_color: String,

    /// Background color of the winning line.
    highlight_color: String,

    /// Show 1-9 in empty cells.
    show_cell_numbers: bool,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from("tictactoe.log"),
            x_color: "blue".to_string(),
            o_color: "red".to_string(),
            highlight_color: "green".to_string(),
            show_cell_numbers: true,
        }
    }
}

impl TuiConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Loads the file if one was given, defaults if it does not exist.
    ///
    /// Any other read failure is an error.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml(&content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(path = %path.display(), "Config file not found, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(ConfigError::new(format!(
                "Failed to read config file: {}",
                e
            ))),
        }
    }

    fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.theme()?;
        info!("Config loaded successfully");
        Ok(config)
    }

    /// Resolves the color names into a theme.
    pub fn theme(&self) -> Result<Theme, ConfigError> {
        Ok(Theme {
            x: parse_color(&self.x_color)?,
            o: parse_color(&self.o_color)?,
            highlight: parse_color(&self.highlight_color)?,
            show_cell_numbers: self.show_cell_numbers,
        })
    }
}

fn parse_color(name: &str) -> Result<Color, ConfigError> {
    Color::from_str(name).map_err(|_| ConfigError::new(format!("Unknown color: {}", name)))
}

/// Resolved drawing colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Color of X marks.
    pub x: Color,
    /// Color of O marks.
    pub o: Color,
    /// Background of the winning line.
    pub highlight: Color,
    /// Show 1-9 in empty cells.
    pub show_cell_numbers: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            x: Color::Blue,
            o: Color::Red,
            highlight: Color::Green,
            show_cell_numbers: true,
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
