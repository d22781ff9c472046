//! Colors for each theme.

use ratatui::style::Color;
use ttt_engine::{Player, ThemeMode};

const PRIMARY: Color = Color::Rgb(0x19, 0x76, 0xd2);
const ACCENT: Color = Color::Rgb(0xff, 0x40, 0x81);
const SECONDARY: Color = Color::Rgb(0x42, 0x42, 0x42);

/// Resolved colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Screen background.
    pub background: Color,
    /// Default text.
    pub foreground: Color,
    /// Borders, hints, and the draw message.
    pub muted: Color,
    /// Highlight behind the cursor cell.
    pub cursor: Color,
}

impl Palette {
    /// Palette for `theme`.
    pub fn for_theme(theme: ThemeMode) -> Self {
        match theme {
            ThemeMode::Light => Self {
                background: Color::Rgb(0xff, 0xff, 0xff),
                foreground: Color::Rgb(0x28, 0x2c, 0x34),
                muted: SECONDARY,
                cursor: Color::Rgb(0xe3, 0xf2, 0xfd),
            },
            ThemeMode::Dark => Self {
                background: Color::Rgb(0x1a, 0x1a, 0x1a),
                foreground: Color::Rgb(0xf5, 0xf5, 0xf5),
                muted: Color::Rgb(0x9e, 0x9e, 0x9e),
                cursor: Color::Rgb(0x33, 0x33, 0x33),
            },
        }
    }

    /// Mark colors are shared by both themes.
    pub fn mark(&self, player: Player) -> Color {
        match player {
            Player::X => PRIMARY,
            Player::O => ACCENT,
        }
    }
}
