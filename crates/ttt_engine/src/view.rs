//! Renderer-facing views of the engine.
//!
//! A renderer draws these and forwards clicks or key presses back to
//! [`GameEngine::apply_move`]. Nothing here mutates state.

use super::{GameEngine, GameStatus, Player, Position};
use derive_getters::Getters;
use derive_new::new;

/// What the status line should say.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum StatusLine {
    /// Game in progress; this player moves next.
    #[display("Turn: Player {}", _0)]
    Turn(Player),
    /// Game won.
    #[display("Player {} wins!", _0)]
    Winner(Player),
    /// Board full with no line.
    #[display("It's a draw!")]
    Draw,
}

impl StatusLine {
    /// The mark whose color the status line takes, if any.
    pub fn accent(self) -> Option<Player> {
        match self {
            StatusLine::Turn(player) | StatusLine::Winner(player) => Some(player),
            StatusLine::Draw => None,
        }
    }
}

/// One cell as the renderer sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, new)]
pub struct CellView {
    /// Which cell.
    position: Position,
    /// Mark on the cell, if any.
    mark: Option<Player>,
    /// True when clicking this cell would be accepted.
    playable: bool,
}

impl CellView {
    /// Board index (0-8).
    pub fn index(&self) -> usize {
        self.position.to_index()
    }

    /// Accessible label: `cell 5` or `cell 5: X` (1-based).
    pub fn label(&self) -> String {
        match self.mark {
            Some(mark) => format!("cell {}: {}", self.index() + 1, mark),
            None => format!("cell {}", self.index() + 1),
        }
    }
}

impl GameEngine {
    /// Status line for the current game.
    pub fn status_line(&self) -> StatusLine {
        match self.status() {
            GameStatus::InProgress => StatusLine::Turn(self.to_move()),
            GameStatus::Won(winner) => StatusLine::Winner(winner),
            GameStatus::Draw => StatusLine::Draw,
        }
    }

    /// The nine cells in index order.
    pub fn cells(&self) -> [CellView; 9] {
        let in_progress = !self.status().is_terminal();
        Position::ALL.map(|pos| {
            let mark = self.board().get(pos).mark();
            CellView::new(pos, mark, in_progress && mark.is_none())
        })
    }
}
