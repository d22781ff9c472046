//! Mark count invariant: one mark per accepted move.

use super::super::GameState;
use super::Invariant;

/// Invariant: occupied squares equal the number of moves played.
///
/// Together with the history check this rules out marks appearing,
/// disappearing, or being overwritten.
pub struct MarkCountInvariant;

impl Invariant<GameState> for MarkCountInvariant {
    fn holds(state: &GameState) -> bool {
        state.board().occupied_count() == state.moves().len()
    }

    fn description() -> &'static str {
        "Occupied squares equal moves played"
    }
}
