//! Two-player tic-tac-toe game logic.
//!
//! # Architecture
//!
//! - **Types**: board, squares, players, and game status
//! - **Rules**: pure win/draw evaluation over a board
//! - **Engine**: [`GameEngine`] applies moves, keeps the score, and
//!   starts new games
//! - **View**: status line and cell views for a renderer
//! - **Invariants**: properties checked after every accepted move
//!
//! # Example
//!
//! ```
//! use ttt_engine::{GameEngine, GameStatus, Player};
//!
//! let mut engine = GameEngine::new();
//! for index in [0, 3, 1, 4, 2] {
//!     engine.apply_move(index).unwrap();
//! }
//! assert_eq!(engine.status(), GameStatus::Won(Player::X));
//! assert_eq!(engine.score().wins(Player::X), 1);
//!
//! engine.reset_game();
//! assert_eq!(engine.board().occupied_count(), 0);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
pub mod invariants;
mod position;
pub mod rules;
mod score;
mod theme;
mod types;
mod view;

pub use action::MoveError;
pub use engine::GameEngine;
pub use position::Position;
pub use rules::evaluate_outcome;
pub use score::Score;
pub use theme::ThemeMode;
pub use types::{Board, GameState, GameStatus, Player, Square};
pub use view::{CellView, StatusLine};
