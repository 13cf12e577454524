mod actor;
mod attrs;
mod charset;
mod color;
mod control;
mod csi;
mod esc;
mod mode;
mod osc;
mod parser;

pub use actor::Actor;
pub use attrs::CharacterAttribute;
pub use charset::{Charset, CharsetIndex};
pub use color::{Color, ColorParseError, Rgb, StdColor};
pub use louver_vte as vte;
pub use mode::{
    ClearMode, LineClearMode, Mode, NamedMode, NamedPrivateMode, PrivateMode,
    TabClearMode,
};
pub use parser::Parser;
