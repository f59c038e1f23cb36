//! Plain-text and JSON presenters for headless play.

use std::io::Write;
use tictactoe_engine::{GameView, Presenter};

/// Writes the board as a 3x3 text grid with the status and score below.
#[derive(Debug)]
pub struct TextPresenter<W> {
    out: W,
}

impl<W: Write> TextPresenter<W> {
    /// Creates a presenter writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Formats the grid. Winning cells are wrapped in brackets.
pub fn render_grid(view: &GameView) -> String {
    let rows: Vec<String> = view
        .cells
        .chunks(3)
        .enumerate()
        .map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(|(col, cell)| {
                    let symbol = match cell.mark {
                        Some(player) => player.to_string(),
                        None => (row * 3 + col + 1).to_string(),
                    };
                    if cell.highlighted {
                        format!("[{}]", symbol)
                    } else {
                        format!(" {} ", symbol)
                    }
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();
    rows.join("\n---+---+---\n")
}

impl<W: Write> Presenter for TextPresenter<W> {
    type Error = std::io::Error;

    fn present(&mut self, view: &GameView) -> Result<(), Self::Error> {
        writeln!(self.out, "{}", render_grid(view))?;
        writeln!(self.out)?;
        writeln!(self.out, "{}", view.message)?;
        writeln!(
            self.out,
            "Score  X: {}  O: {}  Draw: {}",
            view.scores.x(),
            view.scores.o(),
            view.scores.draws()
        )?;
        self.out.flush()
    }
}

/// Writes each view as one pretty-printed JSON document.
#[derive(Debug)]
pub struct JsonPresenter<W> {
    out: W,
}

impl<W: Write> JsonPresenter<W> {
    /// Creates a presenter writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for JsonPresenter<W> {
    type Error = anyhow::Error;

    fn present(&mut self, view: &GameView) -> Result<(), Self::Error> {
        serde_json::to_writer_pretty(&mut self.out, view)?;
        writeln!(self.out)?;
        Ok(())
    }
}
