//! Tic-tac-toe board rendering.

use crate::app::App;
use crate::palette::Palette;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use ttt_engine::{CellView, Position};

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;

/// Renders the 3x3 grid with the cursor cell highlighted.
pub fn render_board(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let areas = cell_areas(area);
    for cell in app.engine().cells() {
        let is_cursor = *cell.position() == app.cursor();
        render_cell(frame, areas[cell.index()], &cell, is_cursor, palette);
    }
}

fn render_cell(frame: &mut Frame, area: Rect, cell: &CellView, is_cursor: bool, palette: &Palette) {
    let (text, text_style) = match cell.mark() {
        Some(mark) => (
            mark.to_string(),
            Style::default().fg(palette.mark(*mark)).add_modifier(Modifier::BOLD),
        ),
        // Only cells that accept a move show their keypad digit.
        None if *cell.playable() => ((cell.index() + 1).to_string(), Style::default().fg(palette.muted)),
        None => (String::new(), Style::default()),
    };

    let border_style = if is_cursor {
        Style::default().fg(palette.foreground).add_modifier(Modifier::BOLD)
    } else if *cell.playable() {
        Style::default().fg(palette.muted)
    } else {
        Style::default().fg(palette.muted).add_modifier(Modifier::DIM)
    };
    let background = if is_cursor { palette.cursor } else { palette.background };

    let paragraph = Paragraph::new(Line::from(Span::styled(text, text_style)))
        .alignment(Alignment::Center)
        .style(Style::default().bg(background))
        .block(Block::default().borders(Borders::ALL).border_style(border_style));
    frame.render_widget(paragraph, area);
}

/// Lays the grid out centered in `area`, clipped to it.
pub(super) fn cell_areas(area: Rect) -> [Rect; 9] {
    let width = CELL_WIDTH * 3;
    let height = CELL_HEIGHT * 3;
    let left = area.x + area.width.saturating_sub(width) / 2;
    let top = area.y + area.height.saturating_sub(height) / 2;

    Position::ALL.map(|pos| {
        Rect::new(
            left + pos.col() as u16 * CELL_WIDTH,
            top + pos.row() as u16 * CELL_HEIGHT,
            CELL_WIDTH,
            CELL_HEIGHT,
        )
        .intersection(area)
    })
}
