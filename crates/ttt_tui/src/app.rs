//! Application state and key handling.

use crate::input::{digit_index, move_cursor};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info, instrument};
use ttt_engine::{GameEngine, Position};

/// Main application state: the engine plus UI-only state.
#[derive(Debug)]
pub struct App {
    engine: GameEngine,
    cursor: Position,
    running: bool,
}

impl App {
    /// Creates an application around `engine`, cursor on the center cell.
    pub fn new(engine: GameEngine) -> Self {
        Self {
            engine,
            cursor: Position::Center,
            running: true,
        }
    }

    /// Gets the engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Gets the cursor cell.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// False once the user has asked to quit.
    pub fn running(&self) -> bool {
        self.running
    }

    /// Handles one key press.
    #[instrument(skip(self, key), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.running = false;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.running = false;
            }
            KeyCode::Char('n') => self.engine.reset_game(),
            KeyCode::Char('r') => self.engine.reset_scores(),
            KeyCode::Char('t') => {
                self.engine.toggle_theme();
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key.code);
            }
            code => {
                if let Some(pos) = digit_index(code).and_then(Position::from_index) {
                    self.cursor = pos;
                    self.play(pos);
                }
            }
        }
    }

    /// Plays `pos` for whoever is to move; rejected moves are ignored.
    pub fn play(&mut self, pos: Position) {
        if let Err(e) = self.engine.place(pos) {
            debug!(error = %e, "Ignoring move");
        }
    }
}
