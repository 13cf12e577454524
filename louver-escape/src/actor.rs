//! High-level escape sequence consumer interface.
//!
//! The [`Parser`](crate::Parser) translates the raw byte stream into semantic
//! events and relays them to an [`Actor`] implementation. Downstream crates
//! implement this trait to mutate their terminal model, update UI state or
//! collect metrics without re-implementing the escape sequence finite state
//! machine.

use crate::attrs::CharacterAttribute;
use crate::charset::{Charset, CharsetIndex};
use crate::mode::{
    ClearMode, LineClearMode, Mode, PrivateMode, TabClearMode,
};

/// Consumer of semantic terminal actions.
///
/// Each method corresponds to a high-level terminal operation (print a
/// character, scroll a region, clear part of the screen, toggle a mode).
/// All methods have a default empty implementation so that downstream crates
/// only need to override the variants they actually care about. The parser
/// invokes these callbacks synchronously while it walks through the input
/// byte stream.
pub trait Actor {
    /// Render a single Unicode scalar value at the current cursor position.
    fn print(&mut self, _c: char) {}

    /// Ring the terminal bell.
    fn bell(&mut self) {}

    /// Move the cursor one cell to the left, if possible.
    fn backspace(&mut self) {}

    /// Move the cursor to the first column of the current line.
    fn carriage_return(&mut self) {}

    /// Line feed: move to the first column of the next line, scrolling the
    /// region when the cursor sits on its bottom margin.
    fn linefeed(&mut self) {}

    /// Index (IND): move the cursor down one line keeping the column,
    /// scrolling the region when on its bottom margin.
    fn index(&mut self) {}

    /// Reverse index (RI): move the cursor up one line keeping the column,
    /// scrolling the region down when on its top margin.
    fn reverse_index(&mut self) {}

    /// A character was substituted for invalid input (SUB).
    fn substitute(&mut self) {}

    /// Move the cursor to the next tab stop, `count` times.
    fn move_forward_tabs(&mut self, _count: u16) {}

    /// Move the cursor to the previous tab stop, `count` times.
    fn move_backward_tabs(&mut self, _count: u16) {}

    /// Set a horizontal tab stop at the current cursor column.
    fn set_horizontal_tabstop(&mut self) {}

    /// Clear tab stops according to the provided clear mode.
    fn clear_tabs(&mut self, _mode: TabClearMode) {}

    /// Move the cursor to the given row and column.
    ///
    /// The row is interpreted relative to the scrolling region when origin
    /// mode is active.
    fn goto(&mut self, _line: i32, _col: usize) {}

    /// Move the cursor vertically to an absolute row.
    fn goto_line(&mut self, _line: i32) {}

    /// Move the cursor horizontally to an absolute column.
    fn goto_column(&mut self, _col: usize) {}

    /// Move the cursor up by `lines`, optionally returning to column 0.
    fn move_up(&mut self, _lines: usize, _carriage_return: bool) {}

    /// Move the cursor down by `lines`, optionally returning to column 0.
    fn move_down(&mut self, _lines: usize, _carriage_return: bool) {}

    /// Move the cursor forward (right) by `cols` columns.
    fn move_forward(&mut self, _cols: usize) {}

    /// Move the cursor backward (left) by `cols` columns.
    fn move_backward(&mut self, _cols: usize) {}

    /// Insert blank cells at the cursor column, shifting existing content
    /// to the right.
    fn insert_blank(&mut self, _count: usize) {}

    /// Insert blank lines at the cursor line within the scroll region.
    fn insert_blank_lines(&mut self, _count: usize) {}

    /// Delete lines starting at the cursor line within the scroll region.
    fn delete_lines(&mut self, _count: usize) {}

    /// Delete character cells starting at the cursor column.
    fn delete_chars(&mut self, _count: usize) {}

    /// Erase character cells in place starting at the cursor column.
    fn erase_chars(&mut self, _count: usize) {}

    /// Clear the screen according to the provided clear mode.
    fn clear_screen(&mut self, _mode: ClearMode) {}

    /// Clear the current line according to the provided clear mode.
    fn clear_line(&mut self, _mode: LineClearMode) {}

    /// Scroll the content up within the current scroll region.
    fn scroll_up(&mut self, _count: usize) {}

    /// Scroll the content down within the current scroll region.
    fn scroll_down(&mut self, _count: usize) {}

    /// Restrict scrolling to the given region, 1-indexed and inclusive.
    ///
    /// `bottom` defaults to the last line of the screen when absent.
    fn set_scrolling_region(&mut self, _top: usize, _bottom: Option<usize>) {}

    /// Save the cursor position, pen and charset state.
    fn save_cursor(&mut self) {}

    /// Restore the state captured by the last [`Actor::save_cursor`].
    fn restore_cursor(&mut self) {}

    /// Reset the terminal to its power-on state (RIS).
    fn reset_state(&mut self) {}

    /// Fill the screen with the `E` alignment pattern (DECALN).
    fn screen_alignment_display(&mut self) {}

    /// Apply a single Select Graphic Rendition attribute to the pen.
    fn terminal_attribute(&mut self, _attr: CharacterAttribute) {}

    /// Enable a public (non-private) terminal mode.
    fn set_mode(&mut self, _mode: Mode) {}

    /// Disable a public (non-private) terminal mode.
    fn unset_mode(&mut self, _mode: Mode) {}

    /// Enable a DEC private mode.
    fn set_private_mode(&mut self, _mode: PrivateMode) {}

    /// Disable a DEC private mode.
    fn unset_private_mode(&mut self, _mode: PrivateMode) {}

    /// Enable or disable the keypad application mode.
    fn set_keypad_application_mode(&mut self, _enabled: bool) {}

    /// Select which charset designation is active for printing (SO/SI).
    fn set_active_charset(&mut self, _index: CharsetIndex) {}

    /// Assign a character set to the given designation.
    fn configure_charset(&mut self, _index: CharsetIndex, _charset: Charset) {}

    /// Set the window title (OSC 0/2).
    fn set_window_title(&mut self, _title: Option<String>) {}

    /// Set the icon name (OSC 0/1).
    fn set_icon_name(&mut self, _name: Option<String>) {}
}
