//! History consistency invariant: every played square is still marked.

use super::super::{GameState, Position};
use super::Invariant;
use std::collections::HashSet;

/// Invariant: each played position is unique and occupied on the board.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let mut seen: HashSet<Position> = HashSet::new();
        state
            .moves()
            .iter()
            .all(|pos| seen.insert(*pos) && !state.board().is_empty(*pos))
    }

    fn description() -> &'static str {
        "Played positions are unique and occupied"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Square};

    #[test]
    fn test_holds_after_moves() {
        let mut state = GameState::new(Player::X);
        state.apply_move(Position::BottomRight);
        state.apply_move(Position::TopLeft);
        assert!(HistoryConsistentInvariant::holds(&state));
    }

    #[test]
    fn test_detects_cleared_square() {
        let mut state = GameState::new(Player::X);
        state.apply_move(Position::Center);
        state.board_mut().set(Position::Center, Square::Empty);
        assert!(!HistoryConsistentInvariant::holds(&state));
    }
}
