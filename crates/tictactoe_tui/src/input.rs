//! Keyboard mapping.

use crossterm::event::KeyCode;
use tictactoe_engine::{Intent, Position};

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Forward an intent to the engine.
    Engine(Intent),
    /// Play the cell under the cursor.
    PlaceAtCursor,
    /// Move the cursor.
    Cursor(KeyCode),
    /// Leave the game.
    Quit,
}

/// Maps a key to a command. Unbound keys map to `None`.
pub fn command_for_key(key: KeyCode) -> Option<Command> {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char('r') => Some(Command::Engine(Intent::ResetRound)),
        KeyCode::Char('n') => Some(Command::Engine(Intent::ResetMatch)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::PlaceAtCursor),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .map(|digit| Command::Engine(Intent::Move(digit as usize - 1))),
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => Some(Command::Cursor(key)),
        KeyCode::Char('k') => Some(Command::Cursor(KeyCode::Up)),
        KeyCode::Char('j') => Some(Command::Cursor(KeyCode::Down)),
        KeyCode::Char('h') => Some(Command::Cursor(KeyCode::Left)),
        KeyCode::Char('l') => Some(Command::Cursor(KeyCode::Right)),
        _ => None,
    }
}

/// Moves cursor based on arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_are_one_based() {
        assert_eq!(
            command_for_key(KeyCode::Char('1')),
            Some(Command::Engine(Intent::Move(0)))
        );
        assert_eq!(
            command_for_key(KeyCode::Char('9')),
            Some(Command::Engine(Intent::Move(8)))
        );
        assert_eq!(command_for_key(KeyCode::Char('0')), None);
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(command_for_key(KeyCode::Esc), Some(Command::Quit));
        assert_eq!(
            command_for_key(KeyCode::Char('n')),
            Some(Command::Engine(Intent::ResetMatch))
        );
        assert_eq!(command_for_key(KeyCode::Enter), Some(Command::PlaceAtCursor));
        assert_eq!(
            command_for_key(KeyCode::Char('h')),
            Some(Command::Cursor(KeyCode::Left))
        );
        assert_eq!(command_for_key(KeyCode::Tab), None);
    }

    #[test]
    fn test_cursor_moves() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Down), Position::MiddleLeft);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::MiddleRight, KeyCode::Right), Position::MiddleRight);
    }
}
