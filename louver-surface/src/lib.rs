mod cell;
mod cursor;
mod grid;
mod mode;
mod screen;
mod snapshot;
mod tabs;

pub use cell::{Cell, CellFlags};
pub use cursor::{Charsets, Cursor};
pub use louver_escape as escape;
pub use mode::ScreenMode;
pub use screen::Screen;
pub use snapshot::{CellSnapshot, ColorSnapshot, CursorSnapshot, Snapshot, StyleSnapshot};
