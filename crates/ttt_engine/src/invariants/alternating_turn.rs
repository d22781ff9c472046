//! Alternating turn invariant: marks alternate from the opening player.

use super::super::GameState;
use super::Invariant;

/// Invariant: players alternate turns.
///
/// The n-th move (0-based) belongs to the opening player when n is even,
/// and the player to move is whoever did not make the last move.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let expected_next = if state.moves().len() % 2 == 0 {
            state.first_player()
        } else {
            state.first_player().opponent()
        };

        let marks_alternate = state.moves().iter().enumerate().all(|(n, pos)| {
            let mover = if n % 2 == 0 {
                state.first_player()
            } else {
                state.first_player().opponent()
            };
            state.board().get(*pos).mark() == Some(mover)
        });

        marks_alternate && state.to_move() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns starting with the opening player"
    }
}
