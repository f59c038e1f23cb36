//! Application state for the terminal front end.

use crate::input::{Command, command_for_key, move_cursor};
use crossterm::event::KeyCode;
use tictactoe_engine::{Dispatch, GameEngine, GameView, Intent, Position};
use tracing::{debug, info};

/// Engine plus the bits of UI state the engine does not care about.
#[derive(Debug, Clone)]
pub struct App {
    engine: GameEngine,
    cursor: Position,
    notice: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh engine.
    pub fn new() -> Self {
        Self {
            engine: GameEngine::new(),
            cursor: Position::Center,
            notice: None,
            should_quit: false,
        }
    }

    /// The engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Cell under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Why the last input was ignored, if it was.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Render snapshot of the engine.
    pub fn view(&self) -> GameView {
        self.engine.view()
    }

    /// Handles one key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        let Some(command) = command_for_key(key) else {
            return;
        };
        debug!(?command, "Handling key");

        match command {
            Command::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
            Command::Cursor(direction) => {
                self.cursor = move_cursor(self.cursor, direction);
            }
            Command::PlaceAtCursor => {
                self.send(Intent::Move(self.cursor.to_index()));
            }
            Command::Engine(intent) => {
                if let Intent::Move(index) = intent
                    && let Some(pos) = Position::from_index(index)
                {
                    self.cursor = pos;
                }
                self.send(intent);
            }
        }
    }

    fn send(&mut self, intent: Intent) {
        self.notice = match self.engine.dispatch(intent) {
            Dispatch::Ignored(err) => Some(err.to_string()),
            Dispatch::Applied(_) => None,
            Dispatch::RoundReset => Some("New round".to_string()),
            Dispatch::MatchReset => Some("New match, scores cleared".to_string()),
        };
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
