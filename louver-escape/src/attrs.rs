use crate::color::Color;

/// A single Select Graphic Rendition attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterAttribute {
    /// Reset the pen to its default state.
    Reset,
    Bold,
    Dim,
    Italic,
    Underline,
    Blink,
    Reverse,
    Hidden,
    Strike,
    CancelBold,
    CancelBoldDim,
    CancelItalic,
    CancelUnderline,
    CancelBlink,
    CancelReverse,
    CancelHidden,
    CancelStrike,
    Foreground(Color),
    Background(Color),
}
