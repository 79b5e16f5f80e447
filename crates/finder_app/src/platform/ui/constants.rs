use ratatui::style::Color;

pub const TITLE: &str = "Movie Finder";
pub const INPUT_PLACEHOLDER: &str = "Search";
pub const SEARCH_GLYPH: &str = "\u{1F50D}";
pub const PROMPT_TEXT: &str = "Please enter at least 3 characters";
pub const ERROR_TEXT: &str = "An error has occurred.";

/// Widest the content column grows, in terminal cells.
pub const CONTENT_MAX_WIDTH: u16 = 120;
/// Viewport widths at which the grid gains a second and third column.
pub const TWO_COLUMN_MIN_WIDTH: u16 = 60;
pub const THREE_COLUMN_MIN_WIDTH: u16 = 100;
pub const GRID_GAP: u16 = 2;
pub const MAX_POSTER_ROWS: u16 = 12;

pub const ACCENT: Color = Color::Cyan;
pub const MUTED: Color = Color::DarkGray;
pub const SKELETON: Color = Color::Gray;
pub const SKELETON_PULSE: Color = Color::DarkGray;
