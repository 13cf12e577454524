//! Owned, serializable captures of the visible screen state.
//!
//! A [`Snapshot`] is a plain-data copy of everything a renderer needs to
//! paint one frame: dimensions, cells, cursor, scroll region, mode flags and
//! the window title. Given the same byte stream, a screen must produce
//! identical snapshots, which also makes them convenient golden-test
//! fixtures.

use serde::{Deserialize, Serialize};

use louver_escape::{Color, StdColor};

use crate::cell::{Cell, CellFlags};
use crate::screen::Screen;

/// A complete snapshot of the visible screen state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Screen dimensions.
    pub columns: usize,
    pub screen_lines: usize,
    /// Visible grid content, row-major.
    pub cells: Vec<Vec<CellSnapshot>>,
    /// Cursor state.
    pub cursor: CursorSnapshot,
    /// Scroll region, inclusive row indices.
    pub scroll_top: usize,
    pub scroll_bottom: usize,
    /// Window title, if one was set.
    pub title: Option<String>,
    /// Icon name, if one was set.
    pub icon_name: Option<String>,
}

/// Snapshot of a single cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellSnapshot {
    /// Character content.
    pub c: char,
    /// Foreground colour.
    pub fg: ColorSnapshot,
    /// Background colour.
    pub bg: ColorSnapshot,
    /// Style attributes.
    pub style: StyleSnapshot,
}

/// Snapshot of the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorSnapshot {
    pub x: usize,
    pub y: usize,
    pub visible: bool,
}

/// Snapshot of a colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ColorSnapshot {
    Default,
    Indexed { index: u8 },
    Rgb { r: u8, g: u8, b: u8 },
}

impl From<Color> for ColorSnapshot {
    fn from(color: Color) -> Self {
        match color {
            Color::Std(StdColor::Foreground | StdColor::Background) => {
                Self::Default
            },
            Color::Std(named) => Self::Indexed {
                index: named as u8,
            },
            Color::Indexed(index) => Self::Indexed { index },
            Color::TrueColor(rgb) => Self::Rgb {
                r: rgb.r,
                g: rgb.g,
                b: rgb.b,
            },
        }
    }
}

/// Snapshot of style attributes.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize,
)]
pub struct StyleSnapshot {
    #[serde(default, skip_serializing_if = "is_false")]
    pub bold: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub dim: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub italic: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub underline: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub blink: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub inverse: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub hidden: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub strike: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl From<&Cell> for CellSnapshot {
    fn from(cell: &Cell) -> Self {
        Self {
            c: cell.c,
            fg: cell.fg.into(),
            bg: cell.bg.into(),
            style: StyleSnapshot {
                bold: cell.flags.contains(CellFlags::BOLD),
                dim: cell.flags.contains(CellFlags::DIM),
                italic: cell.flags.contains(CellFlags::ITALIC),
                underline: cell.flags.contains(CellFlags::UNDERLINE),
                blink: cell.flags.contains(CellFlags::BLINK),
                inverse: cell.flags.contains(CellFlags::INVERSE),
                hidden: cell.flags.contains(CellFlags::HIDDEN),
                strike: cell.flags.contains(CellFlags::STRIKEOUT),
            },
        }
    }
}

impl Snapshot {
    pub(crate) fn capture(screen: &Screen) -> Self {
        let cells = (0..screen.height())
            .map(|y| screen.row(y).iter().map(CellSnapshot::from).collect())
            .collect();

        let (x, y) = screen.cursor();
        let region = screen.scroll_region();

        Self {
            cells,
            columns: screen.width(),
            screen_lines: screen.height(),
            cursor: CursorSnapshot {
                x,
                y,
                visible: screen.cursor_visible(),
            },
            scroll_top: region.start,
            scroll_bottom: region.end - 1,
            title: screen.title().map(str::to_owned),
            icon_name: screen.icon_name().map(str::to_owned),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use louver_escape::Parser;

    fn screen_with(bytes: &[u8], width: usize, height: usize) -> Screen {
        let mut screen = Screen::new(width, height);
        let mut parser = Parser::new();
        parser.advance(bytes, &mut screen);
        screen
    }

    #[test]
    fn captures_screen_state() {
        let screen = screen_with(
            b"\x1b[1;31mhi\x1b[2;4r\x1b]2;shell\x07\x1b[?25l",
            10,
            5,
        );
        let snapshot = screen.snapshot();

        assert_eq!(snapshot.columns, 10);
        assert_eq!(snapshot.screen_lines, 5);
        assert_eq!(snapshot.cells[0][0].c, 'h');
        assert_eq!(snapshot.cells[0][0].fg, ColorSnapshot::Indexed { index: 1 });
        assert!(snapshot.cells[0][0].style.bold);
        assert_eq!(snapshot.cells[0][2].fg, ColorSnapshot::Default);
        assert_eq!(snapshot.scroll_top, 1);
        assert_eq!(snapshot.scroll_bottom, 3);
        assert_eq!(snapshot.title.as_deref(), Some("shell"));
        assert!(!snapshot.cursor.visible);
        // DECSTBM homed the cursor.
        assert_eq!((snapshot.cursor.x, snapshot.cursor.y), (0, 0));
    }

    #[test]
    fn identical_streams_produce_identical_snapshots() {
        let bytes = b"\x1b[32mok\x1b[0m\r\ndone";
        let first = screen_with(bytes, 8, 4).snapshot();
        let second = screen_with(bytes, 8, 4).snapshot();
        assert_eq!(first, second);
    }

    #[test]
    fn snapshot_json_round_trip() {
        let snapshot = screen_with(b"\x1b[35;44;4mx", 4, 2).snapshot();

        let json = serde_json::to_string(&snapshot).unwrap();
        let parsed: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, snapshot);
    }
}
