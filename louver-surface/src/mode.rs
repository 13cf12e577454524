//! Bitflags describing active terminal modes.

use bitflags::bitflags;

bitflags! {
    /// Collection of public and private terminal modes active on the screen.
    ///
    /// These flags mirror xterm/DEC modes. Some of them only change how the
    /// embedder translates input or paints (application cursor keys,
    /// bracketed paste, reverse video, local echo); the screen records them
    /// and exposes them through [`crate::Screen::mode`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ScreenMode: u16 {
        const NONE               = 0;
        /// DECTCEM cursor visibility.
        const SHOW_CURSOR        = 1;
        /// DECCKM application cursor keys.
        const APP_CURSOR         = 1 << 1;
        /// DECKPAM application keypad.
        const APP_KEYPAD         = 1 << 2;
        /// DECAWM auto wrap.
        const LINE_WRAP          = 1 << 3;
        /// DECOM origin mode.
        const ORIGIN             = 1 << 4;
        /// IRM insert mode.
        const INSERT             = 1 << 5;
        /// Bracketed paste.
        const BRACKETED_PASTE    = 1 << 6;
        /// DECSCNM reverse video.
        const REVERSE_VIDEO      = 1 << 7;
        /// LNM line feed / new line mode.
        const LINE_FEED_NEW_LINE = 1 << 8;
        /// SRM style local echo.
        const LOCAL_ECHO         = 1 << 9;
    }
}

impl Default for ScreenMode {
    fn default() -> Self {
        Self::SHOW_CURSOR | Self::LINE_WRAP
    }
}
