//! The session engine: one game at a time, a running score, and a theme.

use super::invariants::{InvariantSet, TicTacToeInvariants};
use super::rules::evaluate_outcome;
use super::{Board, GameState, GameStatus, MoveError, Player, Position, Score, ThemeMode};
use tracing::{debug, info, instrument};

/// Tic-tac-toe session engine.
///
/// Owns everything a renderer needs: the current game, the win tally, and
/// the display theme. All mutation happens through the methods below, each
/// of which runs to completion synchronously.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameEngine {
    state: GameState,
    score: Score,
    theme: ThemeMode,
}

impl GameEngine {
    /// Creates a session with an empty board, X to move, 0-0, light theme.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session starting in the given theme.
    #[instrument]
    pub fn with_theme(theme: ThemeMode) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the board of the current game.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.state.to_move()
    }

    /// Returns the status recorded after the last accepted move.
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// Returns the win tally.
    pub fn score(&self) -> Score {
        self.score
    }

    /// Returns the display theme.
    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    /// Re-evaluates the outcome from the board.
    ///
    /// Pure: calling this any number of times never changes the score.
    pub fn outcome(&self) -> GameStatus {
        evaluate_outcome(self.state.board())
    }

    /// Plays the cell at `index` (0-8) for the player to move.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] for indices past 8, otherwise the
    /// same rejections as [`GameEngine::place`]. A rejected move changes
    /// nothing.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, index: usize) -> Result<GameStatus, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfRange(index))?;
        self.place(pos)
    }

    /// Places the mover's mark at `pos`, flips the turn, and re-evaluates.
    ///
    /// The winner's score goes up on the `InProgress -> Won` edge, which
    /// can only be crossed once per game.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the game is already won or drawn.
    /// - [`MoveError::SquareOccupied`] if `pos` already holds a mark.
    #[instrument(skip(self), fields(player = %self.state.to_move()))]
    pub fn place(&mut self, pos: Position) -> Result<GameStatus, MoveError> {
        let before = self.state.status();
        if before.is_terminal() {
            debug!(?before, "Move rejected: game over");
            return Err(MoveError::GameOver);
        }
        if !self.state.board().is_empty(pos) {
            debug!(%pos, "Move rejected: square occupied");
            return Err(MoveError::SquareOccupied(pos));
        }

        self.state.apply_move(pos);
        let after = evaluate_outcome(self.state.board());
        self.state.set_status(after);

        debug_assert!(
            TicTacToeInvariants::check_all(&self.state).is_ok(),
            "game invariants violated after placing at {pos}"
        );

        if let (GameStatus::InProgress, GameStatus::Won(winner)) = (before, after) {
            self.score.record_win(winner);
            info!(%winner, score = %self.score, "Game won");
        } else if after == GameStatus::Draw {
            info!("Game drawn");
        } else {
            debug!(%pos, next = %self.state.to_move(), "Move applied");
        }

        Ok(after)
    }

    /// Starts a new game, keeping the score and theme.
    ///
    /// O opens the new game if O won the last one; otherwise X opens.
    #[instrument(skip(self), fields(previous = ?self.state.status()))]
    pub fn reset_game(&mut self) {
        let first_player = match self.state.status() {
            GameStatus::Won(Player::O) => Player::O,
            _ => Player::X,
        };
        self.state = GameState::new(first_player);
        info!(%first_player, "New game");
    }

    /// Zeroes the score, then starts a new game.
    #[instrument(skip(self))]
    pub fn reset_scores(&mut self) {
        self.score.clear();
        info!("Scores reset");
        self.reset_game();
    }

    /// Switches between light and dark mode.
    #[instrument(skip(self))]
    pub fn toggle_theme(&mut self) -> ThemeMode {
        self.theme = self.theme.toggle();
        debug!(theme = %self.theme, "Theme toggled");
        self.theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(engine: &mut GameEngine, indices: &[usize]) {
        for &index in indices {
            engine.apply_move(index).unwrap();
        }
    }

    #[test]
    fn test_initial_state() {
        let engine = GameEngine::new();
        assert_eq!(engine.to_move(), Player::X);
        assert_eq!(engine.status(), GameStatus::InProgress);
        assert_eq!(engine.score(), Score::new());
        assert_eq!(engine.theme(), ThemeMode::Light);
        assert_eq!(engine.board().occupied_count(), 0);
    }

    #[test]
    fn test_win_scores_once() {
        let mut engine = GameEngine::new();
        play(&mut engine, &[0, 3, 1, 4, 2]);
        assert_eq!(engine.status(), GameStatus::Won(Player::X));
        assert_eq!(engine.score().wins(Player::X), 1);

        for _ in 0..3 {
            assert_eq!(engine.outcome(), GameStatus::Won(Player::X));
        }
        assert_eq!(engine.apply_move(8), Err(MoveError::GameOver));
        assert_eq!(engine.score().wins(Player::X), 1);
        assert_eq!(engine.score().wins(Player::O), 0);
    }

    #[test]
    fn test_turn_flips_on_winning_move() {
        let mut engine = GameEngine::new();
        play(&mut engine, &[0, 3, 1, 4, 2]);
        assert_eq!(engine.to_move(), Player::O);
    }

    #[test]
    fn test_out_of_range_rejected() {
        let mut engine = GameEngine::new();
        assert_eq!(engine.apply_move(9), Err(MoveError::OutOfRange(9)));
        assert_eq!(engine, GameEngine::new());
    }

    #[test]
    fn test_reset_after_x_win_x_opens() {
        let mut engine = GameEngine::new();
        play(&mut engine, &[0, 3, 1, 4, 2]);
        engine.reset_game();
        assert_eq!(engine.to_move(), Player::X);
        assert_eq!(engine.state().first_player(), Player::X);
    }

    #[test]
    fn test_toggle_theme_survives_resets() {
        let mut engine = GameEngine::new();
        assert_eq!(engine.toggle_theme(), ThemeMode::Dark);
        engine.reset_game();
        engine.reset_scores();
        assert_eq!(engine.theme(), ThemeMode::Dark);
    }
}
