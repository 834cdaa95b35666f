use ratatui::style::Color;
use ratatui::symbols::border;
use thiserror::Error;

use crate::grid::GridSize;

/// Default grid width in cells (the classic 640px screen at 20px cells).
pub const DEFAULT_GRID_WIDTH: u16 = 32;

/// Default grid height in cells (480px at 20px cells).
pub const DEFAULT_GRID_HEIGHT: u16 = 24;

/// Default starting tick rate in logical ticks per second.
pub const DEFAULT_INITIAL_SPEED: u32 = 8;

/// Default tick-rate gain per eaten food.
pub const DEFAULT_SPEED_INCREMENT: u32 = 1;

/// Floor for the tick interval so high speed levels stay playable.
pub const MIN_TICK_INTERVAL_MS: u64 = 40;

/// Validated gameplay configuration for one session.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GameConfig {
    pub grid: GridSize,
    /// Starting speed level, in logical ticks per second.
    pub initial_speed: u32,
    /// Speed-level gain applied on every eaten food.
    pub speed_increment: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid: GridSize {
                width: DEFAULT_GRID_WIDTH,
                height: DEFAULT_GRID_HEIGHT,
            },
            initial_speed: DEFAULT_INITIAL_SPEED,
            speed_increment: DEFAULT_SPEED_INCREMENT,
        }
    }
}

impl GameConfig {
    /// Checks the configuration before any tick runs.
    ///
    /// A degenerate grid or a zero tick rate would make the session
    /// unplayable, so both are rejected at construction time.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid.width == 0 || self.grid.height == 0 {
            return Err(ConfigError::EmptyGrid {
                width: self.grid.width,
                height: self.grid.height,
            });
        }

        // One food cell must always be spawnable next to a one-cell snake.
        if self.grid.total_cells() < 2 {
            return Err(ConfigError::GridTooSmall {
                cells: self.grid.total_cells(),
            });
        }

        if self.initial_speed == 0 {
            return Err(ConfigError::ZeroSpeed);
        }

        Ok(())
    }
}

/// Configuration precondition violations, rejected at session creation.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum ConfigError {
    #[error("grid must have non-zero dimensions, got {width}x{height}")]
    EmptyGrid { width: u16, height: u16 },
    #[error("grid needs at least 2 cells for a snake and a food, got {cells}")]
    GridTooSmall { cells: usize },
    #[error("initial speed must be at least 1 tick per second")]
    ZeroSpeed,
}

/// A color theme applied to all visual elements.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub snake_head: Color,
    pub snake_body: Color,
    pub snake_tail: Color,
    pub food: Color,
    pub play_bg: Color,
    pub border_fg: Color,
    pub hud_fg: Color,
    pub overlay_title: Color,
    pub overlay_footer: Color,
}

/// Classic palette: green snake, red food, cyan border on black.
pub const THEME_CLASSIC: Theme = Theme {
    name: "classic",
    snake_head: Color::White,
    snake_body: Color::Green,
    snake_tail: Color::DarkGray,
    food: Color::Red,
    play_bg: Color::Black,
    border_fg: Color::Cyan,
    hud_fg: Color::White,
    overlay_title: Color::Green,
    overlay_footer: Color::DarkGray,
};

/// Ocean cyan theme.
pub const THEME_OCEAN: Theme = Theme {
    name: "ocean",
    snake_head: Color::White,
    snake_body: Color::Cyan,
    snake_tail: Color::DarkGray,
    food: Color::Yellow,
    play_bg: Color::Black,
    border_fg: Color::Cyan,
    hud_fg: Color::Cyan,
    overlay_title: Color::Cyan,
    overlay_footer: Color::DarkGray,
};

/// Neon magenta/yellow theme.
pub const THEME_NEON: Theme = Theme {
    name: "neon",
    snake_head: Color::White,
    snake_body: Color::Magenta,
    snake_tail: Color::DarkGray,
    food: Color::Yellow,
    play_bg: Color::Black,
    border_fg: Color::Magenta,
    hud_fg: Color::Magenta,
    overlay_title: Color::Magenta,
    overlay_footer: Color::DarkGray,
};

/// All available themes, addressable by name.
pub const THEMES: &[Theme] = &[THEME_CLASSIC, THEME_OCEAN, THEME_NEON];

/// Looks up a theme by its name, case-insensitively.
#[must_use]
pub fn theme_by_name(name: &str) -> Option<&'static Theme> {
    THEMES
        .iter()
        .find(|theme| theme.name.eq_ignore_ascii_case(name))
}

/// Half-block border set: solid side faces the play area.
pub const BORDER_HALF_BLOCK: border::Set = border::Set {
    top_left: "▄",
    top_right: "▄",
    bottom_left: "▀",
    bottom_right: "▀",
    vertical_left: "█",
    vertical_right: "█",
    horizontal_top: "▄",
    horizontal_bottom: "▀",
};

pub const GLYPH_FOOD: &str = "●";
pub const GLYPH_SNAKE_BODY: &str = "█";
pub const GLYPH_SNAKE_TAIL: &str = "▓";
pub const GLYPH_SNAKE_HEAD_UP: &str = "▲";
pub const GLYPH_SNAKE_HEAD_DOWN: &str = "▼";
pub const GLYPH_SNAKE_HEAD_LEFT: &str = "◀";
pub const GLYPH_SNAKE_HEAD_RIGHT: &str = "▶";

#[cfg(test)]
mod tests {
    use crate::grid::GridSize;

    use super::{theme_by_name, ConfigError, GameConfig, THEME_OCEAN};

    #[test]
    fn default_config_is_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn zero_sized_grid_is_rejected() {
        let config = GameConfig {
            grid: GridSize {
                width: 0,
                height: 24,
            },
            ..GameConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(ConfigError::EmptyGrid {
                width: 0,
                height: 24
            })
        );
    }

    #[test]
    fn one_cell_grid_is_rejected() {
        let config = GameConfig {
            grid: GridSize {
                width: 1,
                height: 1,
            },
            ..GameConfig::default()
        };

        assert_eq!(config.validate(), Err(ConfigError::GridTooSmall { cells: 1 }));
    }

    #[test]
    fn zero_speed_is_rejected() {
        let config = GameConfig {
            initial_speed: 0,
            ..GameConfig::default()
        };

        assert_eq!(config.validate(), Err(ConfigError::ZeroSpeed));
    }

    #[test]
    fn theme_lookup_is_case_insensitive() {
        assert_eq!(theme_by_name("OCEAN"), Some(&THEME_OCEAN));
        assert_eq!(theme_by_name("no-such-theme"), None);
    }
}
