//! Stateless UI rendering for tic-tac-toe.

use crate::config::Theme;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_engine::{GameView, Player, Position};

const CELL_WIDTH: u16 = 7;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = 5;

/// Renders the board, score and status line.
pub fn draw(frame: &mut Frame, view: &GameView, cursor: Position, notice: Option<&str>, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(BOARD_HEIGHT),
            Constraint::Length(3), // Score
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], view, cursor, theme);
    draw_score(frame, chunks[2], view, theme);

    let status = match notice {
        Some(notice) => format!("{}  ({})", view.message, notice),
        None => view.message.clone(),
    };
    let status_text = Paragraph::new(status)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_text, chunks[3]);

    let help = Paragraph::new("arrows/1-9 move · enter place · r round · n match · q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);
}

fn draw_board(frame: &mut Frame, area: Rect, view: &GameView, cursor: Position, theme: &Theme) {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(board_area);

    for row in 0..3 {
        draw_row(frame, rows[row * 2], view, cursor, theme, row);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, view: &GameView, cursor: Position, theme: &Theme, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
        ])
        .split(area);

    for col in 0..3 {
        if let Some(pos) = Position::from_row_col(row, col) {
            draw_cell(frame, cols[col * 2], view, cursor, theme, pos);
        }
        if col < 2 {
            let sep = Paragraph::new("│").style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, view: &GameView, cursor: Position, theme: &Theme, pos: Position) {
    let cell = view.cell(pos);

    let (symbol, mut style) = match cell.mark {
        None if theme.show_cell_numbers => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        None => (" ".to_string(), Style::default()),
        Some(Player::X) => (
            "X".to_string(),
            Style::default().fg(theme.x).add_modifier(Modifier::BOLD),
        ),
        Some(Player::O) => (
            "O".to_string(),
            Style::default().fg(theme.o).add_modifier(Modifier::BOLD),
        ),
    };

    if cell.highlighted {
        style = style.bg(theme.highlight);
    }
    if pos == cursor && !view.status.is_terminal() {
        style = style.bg(Color::White).fg(Color::Black);
    }

    let paragraph = Paragraph::new(Line::from(Span::styled(format!(" {} ", symbol), style)))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(BOARD_WIDTH as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_score(frame: &mut Frame, area: Rect, view: &GameView, theme: &Theme) {
    let scores = &view.scores;
    let line = Line::from(vec![
        Span::styled(format!("X: {}", scores.x()), Style::default().fg(theme.x)),
        Span::raw("   "),
        Span::styled(format!("O: {}", scores.o()), Style::default().fg(theme.o)),
        Span::raw("   "),
        Span::raw(format!("Draw: {}", scores.draws())),
    ]);
    let paragraph = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().title("Score").borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
