//! Event loop and terminal lifecycle.

use crate::app::App;
use crate::ui;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    layout::{Position as ScreenPosition, Rect},
};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{debug, error, info, instrument};

/// The terminal type used by the binary.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Switches the terminal into raw mode on the alternate screen.
#[instrument]
pub fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    debug!("Terminal ready");
    Ok(terminal)
}

/// Restores the terminal to the state the shell expects.
#[instrument(skip(terminal))]
pub fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    debug!("Terminal restored");
    Ok(())
}

/// Combines the game loop result with the terminal restore result.
///
/// Both failures are logged. The game loop error wins since a failed
/// restore is usually a consequence of it.
pub fn finish_session(run_result: Result<()>, restore_result: Result<()>) -> Result<()> {
    if let Err(err) = &run_result {
        error!(error = ?err, "Game loop error");
    }
    if let Err(err) = &restore_result {
        error!(error = ?err, "Failed to restore terminal");
    }
    run_result.and(restore_result)
}

/// Draws and handles input until the user quits.
#[instrument(skip_all)]
pub fn run<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    info!("Starting game loop");

    while app.running() {
        let mut frame_area = Rect::default();
        terminal.draw(|f| {
            frame_area = f.area();
            ui::draw(f, app);
        })?;

        // Poll with a short timeout so resizes redraw promptly.
        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        handle_event(app, event::read()?, frame_area);
    }

    info!(score = %app.engine().score(), "Game loop finished");
    Ok(())
}

/// Applies one terminal event to the application.
///
/// `frame_area` is the area of the last drawn frame, used to find the cell
/// under a mouse click.
pub fn handle_event(app: &mut App, event: Event, frame_area: Rect) {
    match event {
        // Skip key release events (some terminals fire both press and release).
        Event::Key(key) if key.kind == KeyEventKind::Release => {}
        Event::Key(key) => app.handle_key(key),
        Event::Mouse(mouse) => handle_mouse(app, mouse, frame_area),
        _ => {}
    }
}

fn handle_mouse(app: &mut App, mouse: MouseEvent, frame_area: Rect) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    let point = ScreenPosition::new(mouse.column, mouse.row);
    let hit = ui::cell_areas(frame_area)
        .iter()
        .position(|area| area.contains(point))
        .and_then(ttt_engine::Position::from_index);
    if let Some(pos) = hit {
        debug!(%pos, "Cell clicked");
        app.play(pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ttt_engine::{GameEngine, Player, Position, Square};

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_click_plays_cell_under_pointer() {
        let mut app = App::new(GameEngine::new());
        let frame = Rect::new(0, 0, 80, 24);
        let target = ui::cell_areas(frame)[2];

        handle_event(&mut app, click(target.x + 1, target.y + 1), frame);
        assert_eq!(
            app.engine().board().get(Position::TopRight),
            Square::Occupied(Player::X)
        );
    }

    #[test]
    fn test_click_outside_grid_ignored() {
        let mut app = App::new(GameEngine::new());
        handle_event(&mut app, click(0, 0), Rect::new(0, 0, 80, 24));
        assert_eq!(app.engine().board().occupied_count(), 0);
    }

    #[test]
    fn test_loop_error_survives_failed_restore() {
        let res = finish_session(
            Err(anyhow::anyhow!("draw failed")),
            Err(anyhow::anyhow!("restore failed")),
        );
        assert_eq!(res.unwrap_err().to_string(), "draw failed");
    }

    #[test]
    fn test_restore_error_reported_after_clean_loop() {
        let res = finish_session(Ok(()), Err(anyhow::anyhow!("restore failed")));
        assert_eq!(res.unwrap_err().to_string(), "restore failed");
        assert!(finish_session(Ok(()), Ok(())).is_ok());
    }

    #[test]
    fn test_key_release_ignored() {
        let mut app = App::new(GameEngine::new());
        let mut key = KeyEvent::new(KeyCode::Char('5'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        handle_event(&mut app, Event::Key(key), Rect::new(0, 0, 80, 24));
        assert_eq!(app.engine().board().occupied_count(), 0);
    }
}
