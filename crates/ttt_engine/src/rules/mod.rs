//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Nothing here touches turn or score
//! state, so an outcome can be re-evaluated any number of times.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WINNING_LINES, check_winner};

use super::{Board, GameStatus};
use tracing::instrument;

/// Evaluates the outcome of a board.
///
/// A completed line wins; otherwise a full board is a draw; otherwise the
/// game is still in progress.
#[instrument(skip(board))]
pub fn evaluate_outcome(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        GameStatus::Won(winner)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Square};

    const E: Square = Square::Empty;
    const X: Square = Square::Occupied(Player::X);
    const O: Square = Square::Occupied(Player::O);

    #[test]
    fn test_top_row_x_wins() {
        let board = Board::from_squares([X, X, X, E, E, E, E, E, E]);
        assert_eq!(evaluate_outcome(&board), GameStatus::Won(Player::X));
    }

    #[test]
    fn test_left_column_o_wins() {
        let board = Board::from_squares([O, E, E, O, E, E, O, E, E]);
        assert_eq!(evaluate_outcome(&board), GameStatus::Won(Player::O));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = Board::from_squares([X, O, X, X, O, O, O, X, X]);
        assert_eq!(evaluate_outcome(&board), GameStatus::Draw);
    }

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate_outcome(&Board::new()), GameStatus::InProgress);
    }

    #[test]
    fn test_full_board_with_line_is_win_not_draw() {
        let board = Board::from_squares([X, X, X, O, O, X, X, O, O]);
        assert_eq!(evaluate_outcome(&board), GameStatus::Won(Player::X));
    }
}
