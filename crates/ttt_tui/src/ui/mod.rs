//! Stateless UI rendering using ratatui.

mod board;

use crate::app::App;
use crate::palette::Palette;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::rc::Rc;
use ttt_engine::Player;

pub use board::render_board;

/// Draws the whole screen for the current application state.
pub fn draw(frame: &mut Frame, app: &App) {
    let engine = app.engine();
    let palette = Palette::for_theme(engine.theme());
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.foreground)),
        area,
    );

    let chunks = screen_layout(area);

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(palette.muted).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let score = engine.score();
    let scoreboard = Line::from(vec![
        Span::styled(
            format!("X: {}", score.wins(Player::X)),
            Style::default().fg(palette.mark(Player::X)).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" | ", Style::default().fg(palette.muted)),
        Span::styled(
            format!("O: {}", score.wins(Player::O)),
            Style::default().fg(palette.mark(Player::O)).add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(scoreboard).alignment(Alignment::Center), chunks[1]);

    let controls = format!(
        "[n] New Game   [r] Reset Scores   [t] {}",
        engine.theme().toggle_label()
    );
    frame.render_widget(
        Paragraph::new(controls)
            .style(Style::default().fg(palette.muted))
            .alignment(Alignment::Center),
        chunks[2],
    );

    let status_line = engine.status_line();
    let status_color = status_line
        .accent()
        .map_or(palette.muted, |player| palette.mark(player));
    let status = Paragraph::new(status_line.to_string())
        .style(Style::default().fg(status_color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, chunks[3]);

    render_board(frame, chunks[4], app, &palette);

    let cursor_cell = engine.cells()[app.cursor().to_index()];
    let footer = Paragraph::new(format!(
        "{} | Arrows + Enter or 1-9: play | q: quit",
        cursor_cell.label()
    ))
        .style(Style::default().fg(palette.muted))
        .alignment(Alignment::Center);
    frame.render_widget(footer, chunks[5]);
}

/// Screen areas of the nine cells (index order) for a frame of `area`.
///
/// Used to route mouse clicks to the cell under the pointer.
pub fn cell_areas(area: Rect) -> [Rect; 9] {
    board::cell_areas(screen_layout(area)[4])
}

fn screen_layout(area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(1), // Scoreboard
            Constraint::Length(1), // Controls
            Constraint::Length(3), // Status
            Constraint::Min(9),    // Board
            Constraint::Length(1), // Footer
        ])
        .split(area)
}
