//! In-memory terminal screen model.
//!
//! [`Screen`] owns the cell grid, cursor, pen, scrolling region, tab stops,
//! modes and charset state. It implements [`louver_escape::Actor`], meaning
//! it can consume the semantic actions produced by `louver-escape` and
//! update its state accordingly. Rendering frontends read the screen through
//! its accessors or capture an owned [`Snapshot`](crate::Snapshot); the
//! screen itself does not track dirtiness.
//!
//! No operation fails: out-of-range inputs are clamped or ignored, so the
//! screen stays well-formed after any byte sequence.

use std::ops::Range;

use log::{debug, trace};
use louver_escape::{
    Actor, CharacterAttribute, Charset, CharsetIndex, ClearMode, Color,
    LineClearMode, Mode, NamedMode, NamedPrivateMode, PrivateMode, StdColor,
    TabClearMode,
};
use unicode_width::UnicodeWidthChar;

use crate::cell::{Cell, CellFlags};
use crate::cursor::{Charsets, Cursor, SavedCursor};
use crate::grid::Grid;
use crate::mode::ScreenMode;
use crate::snapshot::Snapshot;
use crate::tabs::TabStops;

/// A terminal screen: a grid of styled cells plus the state that escape
/// sequences mutate.
#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    grid: Grid,
    cursor: Cursor,
    saved_cursor: SavedCursor,
    charsets: Charsets,
    active_charset: CharsetIndex,
    tabs: TabStops,
    mode: ScreenMode,
    /// Scroll region rows, top inclusive to bottom exclusive.
    scroll_region: Range<usize>,
    title: Option<String>,
    icon_name: Option<String>,
}

impl Screen {
    /// Create a screen of the given dimensions, all cells blank.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        let grid = Grid::new(width, height);
        let tabs = TabStops::new(grid.width());
        let scroll_region = 0..grid.height();

        Self {
            grid,
            tabs,
            scroll_region,
            cursor: Cursor::default(),
            saved_cursor: SavedCursor::default(),
            charsets: Charsets::default(),
            active_charset: CharsetIndex::default(),
            mode: ScreenMode::default(),
            title: None,
            icon_name: None,
        }
    }

    /// Number of columns.
    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    /// Number of rows.
    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// The whole cell buffer in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        self.grid.cells()
    }

    /// One row of cells.
    #[must_use]
    pub fn row(&self, y: usize) -> &[Cell] {
        self.grid.row(y)
    }

    /// The cell at the given coordinates, if in bounds.
    #[must_use]
    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        (x < self.width() && y < self.height())
            .then(|| self.grid.cell(x, y))
    }

    /// Cursor position as `(x, y)`.
    #[inline]
    #[must_use]
    pub fn cursor(&self) -> (usize, usize) {
        (self.cursor.x, self.cursor.y)
    }

    /// Whether the cursor should be painted (DECTCEM).
    #[inline]
    #[must_use]
    pub fn cursor_visible(&self) -> bool {
        self.mode.contains(ScreenMode::SHOW_CURSOR)
    }

    /// The pen stamped onto cells by print and erase operations.
    #[inline]
    #[must_use]
    pub fn pen(&self) -> Cell {
        self.cursor.template
    }

    /// Active screen modes.
    #[inline]
    #[must_use]
    pub fn mode(&self) -> ScreenMode {
        self.mode
    }

    /// Scroll region rows, top inclusive to bottom exclusive.
    #[inline]
    #[must_use]
    pub fn scroll_region(&self) -> Range<usize> {
        self.scroll_region.clone()
    }

    /// Window title set through OSC 0/2, if any.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Icon name set through OSC 0/1, if any.
    #[must_use]
    pub fn icon_name(&self) -> Option<&str> {
        self.icon_name.as_deref()
    }

    /// Capture an owned snapshot of the visible state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self)
    }

    /// Resize the screen, preserving content top-left aligned.
    ///
    /// The cursor is clamped into the new bounds and the scroll region is
    /// reset to cover the full screen.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.grid.resize(width, height);
        self.cursor.x = self.cursor.x.min(self.grid.width() - 1);
        self.cursor.y = self.cursor.y.min(self.grid.height() - 1);
        self.tabs.resize(self.grid.width());
        self.scroll_region = 0..self.grid.height();
    }

    /// The blank cell erase operations fill with.
    #[inline]
    fn blank(&self) -> Cell {
        Cell::blank(self.cursor.template)
    }

    /// Move the cursor down one line, scrolling when on the region's
    /// bottom margin.
    fn index_down(&mut self) {
        if self.cursor.y + 1 == self.scroll_region.end {
            let blank = self.blank();
            self.grid.scroll_up(self.scroll_region.clone(), 1, blank);
        } else if self.cursor.y + 1 < self.grid.height() {
            self.cursor.y += 1;
        }
    }
}

impl Actor for Screen {
    fn print(&mut self, c: char) {
        // Combining marks occupy no cell of their own.
        if c.width() == Some(0) {
            return;
        }

        let c = self.charsets[self.active_charset].map(c);
        let width = self.grid.width();
        let (x, y) = (self.cursor.x, self.cursor.y);

        if self.mode.contains(ScreenMode::INSERT) {
            self.grid.row_mut(y).copy_within(x..width - 1, x + 1);
        }

        let template = self.cursor.template;
        *self.grid.cell_mut(x, y) = Cell { c, ..template };

        if x + 1 < width {
            self.cursor.x += 1;
        } else if self.mode.contains(ScreenMode::LINE_WRAP) {
            self.cursor.x = 0;
            self.index_down();
        }
        // With auto wrap reset the cursor stays on the last column and
        // further prints overwrite it.
    }

    fn bell(&mut self) {
        trace!("Bell");
    }

    fn backspace(&mut self) {
        self.cursor.x = self.cursor.x.saturating_sub(1);
    }

    fn carriage_return(&mut self) {
        self.cursor.x = 0;
    }

    fn linefeed(&mut self) {
        self.cursor.x = 0;
        self.index_down();
    }

    fn index(&mut self) {
        self.index_down();
    }

    fn reverse_index(&mut self) {
        if self.cursor.y == self.scroll_region.start {
            let blank = self.blank();
            self.grid.scroll_down(self.scroll_region.clone(), 1, blank);
        } else {
            self.cursor.y = self.cursor.y.saturating_sub(1);
        }
    }

    fn substitute(&mut self) {
        trace!("Substitute");
    }

    fn move_forward_tabs(&mut self, count: u16) {
        for _ in 0..count {
            match self.tabs.next_stop(self.cursor.x) {
                Some(column) => self.cursor.x = column,
                None => {
                    self.cursor.x = self.grid.width() - 1;
                    break;
                },
            }
        }
    }

    fn move_backward_tabs(&mut self, count: u16) {
        for _ in 0..count {
            match self.tabs.prev_stop(self.cursor.x) {
                Some(column) => self.cursor.x = column,
                None => {
                    self.cursor.x = 0;
                    break;
                },
            }
        }
    }

    fn set_horizontal_tabstop(&mut self) {
        self.tabs.set(self.cursor.x);
    }

    fn clear_tabs(&mut self, mode: TabClearMode) {
        trace!("Clearing tabs: {mode:?}");
        match mode {
            TabClearMode::Current => self.tabs.clear(self.cursor.x),
            TabClearMode::All => self.tabs.clear_all(),
        }
    }

    fn goto(&mut self, line: i32, col: usize) {
        trace!("Going to: line={line}, col={col}");
        let (offset, max_y) = if self.mode.contains(ScreenMode::ORIGIN) {
            (self.scroll_region.start, self.scroll_region.end - 1)
        } else {
            (0, self.grid.height() - 1)
        };

        let line = (line.max(0) as usize) + offset;
        self.cursor.y = line.min(max_y);
        self.cursor.x = col.min(self.grid.width() - 1);
    }

    fn goto_line(&mut self, line: i32) {
        self.goto(line, self.cursor.x);
    }

    fn goto_column(&mut self, col: usize) {
        self.cursor.x = col.min(self.grid.width() - 1);
    }

    fn move_up(&mut self, lines: usize, carriage_return: bool) {
        self.cursor.y = self.cursor.y.saturating_sub(lines);
        if carriage_return {
            self.cursor.x = 0;
        }
    }

    fn move_down(&mut self, lines: usize, carriage_return: bool) {
        self.cursor.y =
            (self.cursor.y + lines).min(self.grid.height() - 1);
        if carriage_return {
            self.cursor.x = 0;
        }
    }

    fn move_forward(&mut self, cols: usize) {
        self.cursor.x =
            (self.cursor.x + cols).min(self.grid.width() - 1);
    }

    fn move_backward(&mut self, cols: usize) {
        self.cursor.x = self.cursor.x.saturating_sub(cols);
    }

    fn insert_blank(&mut self, count: usize) {
        let width = self.grid.width();
        let x = self.cursor.x;
        let count = count.min(width - x);

        let blank = self.blank();
        let row = self.grid.row_mut(self.cursor.y);
        row.copy_within(x..width - count, x + count);
        row[x..x + count].fill(blank);
    }

    fn insert_blank_lines(&mut self, count: usize) {
        trace!("Inserting {count} blank lines");
        if self.scroll_region.contains(&self.cursor.y) {
            let blank = self.blank();
            let region = self.cursor.y..self.scroll_region.end;
            self.grid.scroll_down(region, count, blank);
        }
    }

    fn delete_lines(&mut self, count: usize) {
        trace!("Deleting {count} lines");
        if self.scroll_region.contains(&self.cursor.y) {
            let blank = self.blank();
            let region = self.cursor.y..self.scroll_region.end;
            self.grid.scroll_up(region, count, blank);
        }
    }

    fn delete_chars(&mut self, count: usize) {
        let width = self.grid.width();
        let x = self.cursor.x;
        let count = count.min(width - x);

        let blank = self.blank();
        let row = self.grid.row_mut(self.cursor.y);
        row.copy_within(x + count..width, x);
        row[width - count..].fill(blank);
    }

    fn erase_chars(&mut self, count: usize) {
        trace!("Erasing {count} chars at column {}", self.cursor.x);
        let end = (self.cursor.x + count).min(self.grid.width());
        let blank = self.blank();
        self.grid.fill_row_range(self.cursor.y, self.cursor.x..end, blank);
    }

    fn clear_screen(&mut self, mode: ClearMode) {
        trace!("Clearing screen: {mode:?}");
        let blank = self.blank();
        let (x, y) = (self.cursor.x, self.cursor.y);
        let (width, height) = (self.grid.width(), self.grid.height());

        match mode {
            ClearMode::Below => {
                self.grid.fill_row_range(y, x..width, blank);
                self.grid.fill_rows(y + 1..height, blank);
            },
            ClearMode::Above => {
                self.grid.fill_rows(0..y, blank);
                self.grid.fill_row_range(y, 0..x + 1, blank);
            },
            ClearMode::All => self.grid.fill_rows(0..height, blank),
        }
    }

    fn clear_line(&mut self, mode: LineClearMode) {
        trace!("Clearing line: {mode:?}");
        let blank = self.blank();
        let (x, y) = (self.cursor.x, self.cursor.y);

        let range = match mode {
            LineClearMode::Right => x..self.grid.width(),
            LineClearMode::Left => 0..x + 1,
            LineClearMode::All => 0..self.grid.width(),
        };

        self.grid.fill_row_range(y, range, blank);
    }

    fn scroll_up(&mut self, count: usize) {
        let blank = self.blank();
        self.grid.scroll_up(self.scroll_region.clone(), count, blank);
    }

    fn scroll_down(&mut self, count: usize) {
        let blank = self.blank();
        self.grid.scroll_down(self.scroll_region.clone(), count, blank);
    }

    fn set_scrolling_region(&mut self, top: usize, bottom: Option<usize>) {
        let bottom = bottom.unwrap_or_else(|| self.grid.height());

        if top >= bottom || bottom > self.grid.height() {
            debug!("Invalid scrolling region: ({top};{bottom})");
            return;
        }

        trace!("Setting scrolling region: ({top};{bottom})");
        self.scroll_region = top.saturating_sub(1)..bottom;
        self.goto(0, 0);
    }

    fn save_cursor(&mut self) {
        trace!("Saving cursor position");
        self.saved_cursor = SavedCursor {
            cursor: self.cursor,
            charsets: self.charsets,
            active_charset: self.active_charset,
        };
    }

    fn restore_cursor(&mut self) {
        trace!("Restoring cursor position");
        self.cursor = self.saved_cursor.cursor;
        self.charsets = self.saved_cursor.charsets;
        self.active_charset = self.saved_cursor.active_charset;
        self.cursor.x = self.cursor.x.min(self.grid.width() - 1);
        self.cursor.y = self.cursor.y.min(self.grid.height() - 1);
    }

    fn reset_state(&mut self) {
        *self = Self::new(self.grid.width(), self.grid.height());
    }

    fn screen_alignment_display(&mut self) {
        let cell = Cell {
            c: 'E',
            ..Cell::default()
        };
        self.grid.fill_rows(0..self.grid.height(), cell);
    }

    fn terminal_attribute(&mut self, attr: CharacterAttribute) {
        trace!("Setting attribute: {attr:?}");
        let template = &mut self.cursor.template;
        match attr {
            CharacterAttribute::Reset => {
                template.fg = Color::Std(StdColor::Foreground);
                template.bg = Color::Std(StdColor::Background);
                template.flags = CellFlags::empty();
            },
            CharacterAttribute::Bold => template.flags.insert(CellFlags::BOLD),
            CharacterAttribute::Dim => template.flags.insert(CellFlags::DIM),
            CharacterAttribute::Italic => {
                template.flags.insert(CellFlags::ITALIC)
            },
            CharacterAttribute::Underline => {
                template.flags.insert(CellFlags::UNDERLINE)
            },
            CharacterAttribute::Blink => {
                template.flags.insert(CellFlags::BLINK)
            },
            CharacterAttribute::Reverse => {
                template.flags.insert(CellFlags::INVERSE)
            },
            CharacterAttribute::Hidden => {
                template.flags.insert(CellFlags::HIDDEN)
            },
            CharacterAttribute::Strike => {
                template.flags.insert(CellFlags::STRIKEOUT)
            },
            CharacterAttribute::CancelBold => {
                template.flags.remove(CellFlags::BOLD)
            },
            CharacterAttribute::CancelBoldDim => {
                template.flags.remove(CellFlags::BOLD | CellFlags::DIM)
            },
            CharacterAttribute::CancelItalic => {
                template.flags.remove(CellFlags::ITALIC)
            },
            CharacterAttribute::CancelUnderline => {
                template.flags.remove(CellFlags::UNDERLINE)
            },
            CharacterAttribute::CancelBlink => {
                template.flags.remove(CellFlags::BLINK)
            },
            CharacterAttribute::CancelReverse => {
                template.flags.remove(CellFlags::INVERSE)
            },
            CharacterAttribute::CancelHidden => {
                template.flags.remove(CellFlags::HIDDEN)
            },
            CharacterAttribute::CancelStrike => {
                template.flags.remove(CellFlags::STRIKEOUT)
            },
            CharacterAttribute::Foreground(color) => template.fg = color,
            CharacterAttribute::Background(color) => template.bg = color,
        }
    }

    fn set_mode(&mut self, mode: Mode) {
        trace!("Setting mode: {mode:?}");
        match mode {
            Mode::Named(NamedMode::Insert) => {
                self.mode.insert(ScreenMode::INSERT)
            },
            Mode::Named(NamedMode::LocalEcho) => {
                self.mode.insert(ScreenMode::LOCAL_ECHO)
            },
            Mode::Named(NamedMode::LineFeedNewLine) => {
                self.mode.insert(ScreenMode::LINE_FEED_NEW_LINE)
            },
            Mode::Unknown(mode) => {
                debug!("Ignoring unknown mode {mode} in set_mode")
            },
        }
    }

    fn unset_mode(&mut self, mode: Mode) {
        trace!("Unsetting mode: {mode:?}");
        match mode {
            Mode::Named(NamedMode::Insert) => {
                self.mode.remove(ScreenMode::INSERT)
            },
            Mode::Named(NamedMode::LocalEcho) => {
                self.mode.remove(ScreenMode::LOCAL_ECHO)
            },
            Mode::Named(NamedMode::LineFeedNewLine) => {
                self.mode.remove(ScreenMode::LINE_FEED_NEW_LINE)
            },
            Mode::Unknown(mode) => {
                debug!("Ignoring unknown mode {mode} in unset_mode")
            },
        }
    }

    fn set_private_mode(&mut self, mode: PrivateMode) {
        trace!("Setting private mode: {mode:?}");
        match mode {
            PrivateMode::Named(NamedPrivateMode::CursorKeys) => {
                self.mode.insert(ScreenMode::APP_CURSOR)
            },
            PrivateMode::Named(NamedPrivateMode::ReverseVideo) => {
                self.mode.insert(ScreenMode::REVERSE_VIDEO)
            },
            PrivateMode::Named(NamedPrivateMode::Origin) => {
                self.mode.insert(ScreenMode::ORIGIN);
                self.goto(0, 0);
            },
            PrivateMode::Named(NamedPrivateMode::LineWrap) => {
                self.mode.insert(ScreenMode::LINE_WRAP)
            },
            PrivateMode::Named(NamedPrivateMode::ShowCursor) => {
                self.mode.insert(ScreenMode::SHOW_CURSOR)
            },
            PrivateMode::Named(NamedPrivateMode::BracketedPaste) => {
                self.mode.insert(ScreenMode::BRACKETED_PASTE)
            },
            PrivateMode::Unknown(mode) => {
                debug!("Ignoring unknown mode {mode} in set_private_mode")
            },
        }
    }

    fn unset_private_mode(&mut self, mode: PrivateMode) {
        trace!("Unsetting private mode: {mode:?}");
        match mode {
            PrivateMode::Named(NamedPrivateMode::CursorKeys) => {
                self.mode.remove(ScreenMode::APP_CURSOR)
            },
            PrivateMode::Named(NamedPrivateMode::ReverseVideo) => {
                self.mode.remove(ScreenMode::REVERSE_VIDEO)
            },
            PrivateMode::Named(NamedPrivateMode::Origin) => {
                self.mode.remove(ScreenMode::ORIGIN);
                self.goto(0, 0);
            },
            PrivateMode::Named(NamedPrivateMode::LineWrap) => {
                self.mode.remove(ScreenMode::LINE_WRAP)
            },
            PrivateMode::Named(NamedPrivateMode::ShowCursor) => {
                self.mode.remove(ScreenMode::SHOW_CURSOR)
            },
            PrivateMode::Named(NamedPrivateMode::BracketedPaste) => {
                self.mode.remove(ScreenMode::BRACKETED_PASTE)
            },
            PrivateMode::Unknown(mode) => {
                debug!("Ignoring unknown mode {mode} in unset_private_mode")
            },
        }
    }

    fn set_keypad_application_mode(&mut self, enabled: bool) {
        trace!("Keypad application mode: {enabled}");
        self.mode.set(ScreenMode::APP_KEYPAD, enabled);
    }

    fn set_active_charset(&mut self, index: CharsetIndex) {
        self.active_charset = index;
    }

    fn configure_charset(&mut self, index: CharsetIndex, charset: Charset) {
        trace!("Configuring charset {index:?} as {charset:?}");
        self.charsets[index] = charset;
    }

    fn set_window_title(&mut self, title: Option<String>) {
        trace!("Setting window title: {title:?}");
        self.title = title;
    }

    fn set_icon_name(&mut self, name: Option<String>) {
        trace!("Setting icon name: {name:?}");
        self.icon_name = name;
    }
}
