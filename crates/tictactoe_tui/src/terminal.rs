//! Interactive terminal session.

use crate::app::App;
use crate::config::{Theme, TuiConfig};
use crate::ui;
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tictactoe_engine::{GameView, Position, Presenter};
use tracing::{debug, info, instrument, warn};

/// Runs its cleanup exactly once, when dropped.
///
/// Created right after a setup step succeeds; a later `?` in the same
/// setup drops it.
pub(crate) struct RestoreGuard<F: FnMut()> {
    restore: F,
}

impl<F: FnMut()> RestoreGuard<F> {
    pub(crate) fn new(restore: F) -> Self {
        Self { restore }
    }
}

impl<F: FnMut()> Drop for RestoreGuard<F> {
    fn drop(&mut self) {
        (self.restore)();
    }
}

fn restore_terminal() {
    debug!("Restoring terminal");
    if let Err(e) = disable_raw_mode() {
        warn!(error = %e, "Failed to disable raw mode");
    }
    if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, Show) {
        warn!(error = %e, "Failed to leave alternate screen");
    }
}

/// Draws views on the real terminal. Restores the terminal on drop.
pub struct TerminalPresenter {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    theme: Theme,
    cursor: Position,
    notice: Option<String>,
    // Dropped after `terminal`.
    _restore: RestoreGuard<fn()>,
}

impl TerminalPresenter {
    /// Switches the terminal to raw mode on the alternate screen.
    ///
    /// If a step after raw mode fails, the terminal is restored before the
    /// error is returned.
    pub fn enter(theme: Theme) -> io::Result<Self> {
        enable_raw_mode()?;
        let restore = RestoreGuard::new(restore_terminal as fn());
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        debug!("Terminal initialized");
        Ok(Self {
            terminal,
            theme,
            cursor: Position::Center,
            notice: None,
            _restore: restore,
        })
    }

    /// Sets the UI-only state drawn with the next view.
    pub fn focus(&mut self, cursor: Position, notice: Option<&str>) {
        self.cursor = cursor;
        self.notice = notice.map(str::to_string);
    }
}

impl Presenter for TerminalPresenter {
    type Error = io::Error;

    fn present(&mut self, view: &GameView) -> Result<(), Self::Error> {
        let (cursor, theme) = (self.cursor, self.theme);
        let notice = self.notice.as_deref();
        self.terminal
            .draw(|frame| ui::draw(frame, view, cursor, notice, &theme))?;
        Ok(())
    }
}

/// Runs the interactive game until the user quits.
#[instrument(skip_all)]
pub fn run(config: &TuiConfig) -> anyhow::Result<()> {
    let theme = config.theme()?;
    let mut app = App::new();
    let mut presenter = TerminalPresenter::enter(theme)?;

    info!("Starting interactive session");
    while !app.should_quit() {
        presenter.focus(app.cursor(), app.notice());
        presenter.present(&app.view())?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }
    }

    info!(scores = ?app.engine().scores(), "Session ended");
    Ok(())
}
