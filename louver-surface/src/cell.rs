use bitflags::bitflags;
use louver_escape::{Color, StdColor};

bitflags! {
    /// Rendering attributes stored per cell and on the pen.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CellFlags: u16 {
        const BOLD      = 1;
        const DIM       = 1 << 1;
        const ITALIC    = 1 << 2;
        const UNDERLINE = 1 << 3;
        const BLINK     = 1 << 4;
        const INVERSE   = 1 << 5;
        const HIDDEN    = 1 << 6;
        const STRIKEOUT = 1 << 7;
    }
}

/// A single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// The character stored in this cell.
    pub c: char,
    /// Foreground colour.
    pub fg: Color,
    /// Background colour.
    pub bg: Color,
    /// Rendering attributes.
    pub flags: CellFlags,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            c: ' ',
            fg: Color::Std(StdColor::Foreground),
            bg: Color::Std(StdColor::Background),
            flags: CellFlags::empty(),
        }
    }
}

impl Cell {
    /// A blank cell carrying the colours and attributes of the given pen.
    ///
    /// Erase operations fill with this so that "clear with background
    /// colour" works.
    #[inline]
    pub(crate) fn blank(pen: Cell) -> Self {
        Self { c: ' ', ..pen }
    }
}
