//! Headless play: apply a fixed list of intents, then present the result.

use tictactoe_engine::{Dispatch, GameEngine, Intent, Presenter};
use tracing::{info, instrument, warn};

/// Applies each intent in order and presents the final view once.
///
/// Invalid moves are logged and skipped, as a click on a taken cell
/// would be.
#[instrument(skip(presenter))]
pub fn run_script<P: Presenter>(intents: &[Intent], presenter: &mut P) -> Result<GameEngine, P::Error> {
    let mut engine = GameEngine::new();

    for (step, intent) in intents.iter().enumerate() {
        match engine.dispatch(*intent) {
            Dispatch::Ignored(err) => warn!(step, %err, "Skipping invalid move"),
            outcome => info!(step, ?outcome, "Applied intent"),
        }
    }

    presenter.present(&engine.view())?;
    Ok(engine)
}
