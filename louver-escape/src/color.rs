use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Std(StdColor),
    Indexed(u8),
    TrueColor(Rgb),
}

/// Standard colors.
#[derive(Debug, Copy, Clone, Eq, PartialEq, PartialOrd, Ord)]
pub enum StdColor {
    Black = 0,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
    Foreground = 256,
    Background,
}

#[derive(Debug, Eq, PartialEq, Copy, Clone, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Display for Rgb {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Error produced when parsing a colour from a string fails.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid color specification, expected `#rrggbb` or `0xRRGGBB`")]
pub struct ColorParseError;

impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, ColorParseError> {
        let chars = if s.starts_with("0x") && s.len() == 8 {
            &s[2..]
        } else if s.starts_with('#') && s.len() == 7 {
            &s[1..]
        } else {
            return Err(ColorParseError);
        };

        let parse =
            |slice| u8::from_str_radix(slice, 16).map_err(|_| ColorParseError);

        Ok(Self {
            r: parse(&chars[0..=1])?,
            g: parse(&chars[2..=3])?,
            b: parse(&chars[4..=5])?,
        })
    }
}

/// Parse the tail of an extended-colour SGR parameter list.
///
/// The iterator yields the values after the introducing 38/48: either
/// `5; index` or `2; r; g; b`.
pub(crate) fn parse_sgr_color<I>(iter: &mut I) -> Option<Color>
where
    I: Iterator<Item = u16>,
{
    match iter.next() {
        Some(5) => {
            let index = iter.next()?;
            (index <= u8::MAX as u16).then_some(Color::Indexed(index as u8))
        },
        Some(2) => {
            let r = iter.next()?;
            let g = iter.next()?;
            let b = iter.next()?;

            if r > u8::MAX as u16 || g > u8::MAX as u16 || b > u8::MAX as u16 {
                return None;
            }

            Some(Color::TrueColor(Rgb {
                r: r as u8,
                g: g as u8,
                b: b as u8,
            }))
        },
        _ => None,
    }
}
