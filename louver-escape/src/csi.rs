use std::iter;

use log::debug;
use louver_vte::{Params, ParamsIter};

use crate::actor::Actor;
use crate::attrs::CharacterAttribute;
use crate::color::{Color, StdColor, parse_sgr_color};
use crate::mode::{
    ClearMode, LineClearMode, Mode, PrivateMode, TabClearMode,
};
use crate::parser::ParserState;

pub(crate) fn perform<A: Actor>(
    actor: &mut A,
    state: &mut ParserState,
    params: &Params,
    intermediates: &[u8],
    ignore: bool,
    byte: u8,
) {
    if ignore {
        return unexpected(params, intermediates, byte);
    }

    let mut params_iter = params.iter();
    let mut next_param_or = |default: u16| match params_iter.next() {
        Some(&[param, ..]) if param != 0 => param,
        _ => default,
    };

    match (byte, intermediates) {
        (b'@', []) => actor.insert_blank(next_param_or(1) as usize),
        (b'A', []) => actor.move_up(next_param_or(1) as usize, false),
        (b'B', []) | (b'e', []) => {
            actor.move_down(next_param_or(1) as usize, false)
        },
        (b'b', []) => match state.last_preceding_char {
            Some(c) => {
                for _ in 0..next_param_or(1) {
                    actor.print(c);
                }
            },
            None => debug!("tried to repeat with no preceding char"),
        },
        (b'C', []) | (b'a', []) => {
            actor.move_forward(next_param_or(1) as usize)
        },
        (b'D', []) => actor.move_backward(next_param_or(1) as usize),
        (b'E', []) => actor.move_down(next_param_or(1) as usize, true),
        (b'F', []) => actor.move_up(next_param_or(1) as usize, true),
        (b'G', []) | (b'`', []) => {
            actor.goto_column(next_param_or(1) as usize - 1)
        },
        (b'g', []) => {
            let mode = match next_param_or(0) {
                0 => TabClearMode::Current,
                3 => TabClearMode::All,
                _ => {
                    return unexpected(params, intermediates, byte);
                },
            };

            actor.clear_tabs(mode);
        },
        (b'H', []) | (b'f', []) => {
            let line = next_param_or(1) as i32;
            let column = next_param_or(1) as usize;
            actor.goto(line - 1, column - 1);
        },
        (b'I', []) => actor.move_forward_tabs(next_param_or(1)),
        (b'J', []) => {
            let mode = match next_param_or(0) {
                0 => ClearMode::Below,
                1 => ClearMode::Above,
                // There is no scrollback to clear, 3 behaves like 2.
                2 | 3 => ClearMode::All,
                _ => {
                    return unexpected(params, intermediates, byte);
                },
            };

            actor.clear_screen(mode);
        },
        (b'K', []) => {
            let mode = match next_param_or(0) {
                0 => LineClearMode::Right,
                1 => LineClearMode::Left,
                2 => LineClearMode::All,
                _ => {
                    return unexpected(params, intermediates, byte);
                },
            };

            actor.clear_line(mode);
        },
        (b'L', []) => actor.insert_blank_lines(next_param_or(1) as usize),
        (b'M', []) => actor.delete_lines(next_param_or(1) as usize),
        (b'P', []) => actor.delete_chars(next_param_or(1) as usize),
        (b'S', []) => actor.scroll_up(next_param_or(1) as usize),
        (b'T', []) => actor.scroll_down(next_param_or(1) as usize),
        (b'X', []) => actor.erase_chars(next_param_or(1) as usize),
        (b'Z', []) => actor.move_backward_tabs(next_param_or(1)),
        (b'd', []) => actor.goto_line(next_param_or(1) as i32 - 1),
        (b'h', []) => {
            for param in params.iter() {
                actor.set_mode(Mode::from_raw(param[0]));
            }
        },
        (b'h', [b'?']) => {
            for param in params.iter() {
                actor.set_private_mode(PrivateMode::from_raw(param[0]));
            }
        },
        (b'l', []) => {
            for param in params.iter() {
                actor.unset_mode(Mode::from_raw(param[0]));
            }
        },
        (b'l', [b'?']) => {
            for param in params.iter() {
                actor.unset_private_mode(PrivateMode::from_raw(param[0]));
            }
        },
        (b'm', []) => attrs_from_sgr_parameters(actor, &mut params_iter),
        (b'r', []) => {
            let top = next_param_or(1) as usize;
            let bottom = params_iter
                .next()
                .map(|param| param[0] as usize)
                .filter(|&bottom| bottom != 0);

            actor.set_scrolling_region(top, bottom);
        },
        (b's', []) => actor.save_cursor(),
        (b'u', []) => actor.restore_cursor(),
        _ => unexpected(params, intermediates, byte),
    }
}

#[inline]
fn attrs_from_sgr_parameters<A: Actor>(
    actor: &mut A,
    params: &mut ParamsIter<'_>,
) {
    while let Some(param) = params.next() {
        let attr = match param {
            [0] => Some(CharacterAttribute::Reset),
            [1] => Some(CharacterAttribute::Bold),
            [2] => Some(CharacterAttribute::Dim),
            [3] => Some(CharacterAttribute::Italic),
            // Underline styles collapse onto plain underline, except the
            // explicit `4:0` cancellation.
            [4, 0] => Some(CharacterAttribute::CancelUnderline),
            [4] | [4, ..] => Some(CharacterAttribute::Underline),
            [5] | [6] => Some(CharacterAttribute::Blink),
            [7] => Some(CharacterAttribute::Reverse),
            [8] => Some(CharacterAttribute::Hidden),
            [9] => Some(CharacterAttribute::Strike),
            [21] => Some(CharacterAttribute::CancelBold),
            [22] => Some(CharacterAttribute::CancelBoldDim),
            [23] => Some(CharacterAttribute::CancelItalic),
            [24] => Some(CharacterAttribute::CancelUnderline),
            [25] => Some(CharacterAttribute::CancelBlink),
            [27] => Some(CharacterAttribute::CancelReverse),
            [28] => Some(CharacterAttribute::CancelHidden),
            [29] => Some(CharacterAttribute::CancelStrike),
            [30] => fg(StdColor::Black),
            [31] => fg(StdColor::Red),
            [32] => fg(StdColor::Green),
            [33] => fg(StdColor::Yellow),
            [34] => fg(StdColor::Blue),
            [35] => fg(StdColor::Magenta),
            [36] => fg(StdColor::Cyan),
            [37] => fg(StdColor::White),
            [38] => {
                let mut iter = params.map(|param| param[0]);
                parse_sgr_color(&mut iter)
                    .map(CharacterAttribute::Foreground)
            },
            [38, params @ ..] => {
                handle_colon_rgb(params).map(CharacterAttribute::Foreground)
            },
            [39] => fg(StdColor::Foreground),
            [40] => bg(StdColor::Black),
            [41] => bg(StdColor::Red),
            [42] => bg(StdColor::Green),
            [43] => bg(StdColor::Yellow),
            [44] => bg(StdColor::Blue),
            [45] => bg(StdColor::Magenta),
            [46] => bg(StdColor::Cyan),
            [47] => bg(StdColor::White),
            [48] => {
                let mut iter = params.map(|param| param[0]);
                parse_sgr_color(&mut iter)
                    .map(CharacterAttribute::Background)
            },
            [48, params @ ..] => {
                handle_colon_rgb(params).map(CharacterAttribute::Background)
            },
            [49] => bg(StdColor::Background),
            [90] => fg(StdColor::BrightBlack),
            [91] => fg(StdColor::BrightRed),
            [92] => fg(StdColor::BrightGreen),
            [93] => fg(StdColor::BrightYellow),
            [94] => fg(StdColor::BrightBlue),
            [95] => fg(StdColor::BrightMagenta),
            [96] => fg(StdColor::BrightCyan),
            [97] => fg(StdColor::BrightWhite),
            [100] => bg(StdColor::BrightBlack),
            [101] => bg(StdColor::BrightRed),
            [102] => bg(StdColor::BrightGreen),
            [103] => bg(StdColor::BrightYellow),
            [104] => bg(StdColor::BrightBlue),
            [105] => bg(StdColor::BrightMagenta),
            [106] => bg(StdColor::BrightCyan),
            [107] => bg(StdColor::BrightWhite),
            _ => None,
        };

        match attr {
            Some(attr) => actor.terminal_attribute(attr),
            None => debug!("[unexpected sgr] param: {param:?}"),
        }
    }
}

#[inline]
fn fg(color: StdColor) -> Option<CharacterAttribute> {
    Some(CharacterAttribute::Foreground(Color::Std(color)))
}

#[inline]
fn bg(color: StdColor) -> Option<CharacterAttribute> {
    Some(CharacterAttribute::Background(Color::Std(color)))
}

/// Handle the colon-separated extended colour form.
///
/// Both the ITU-T T.416 variant with a colourspace slot (`38:2::r:g:b`) and
/// the shorter `38:2:r:g:b` variant are accepted.
fn handle_colon_rgb(params: &[u16]) -> Option<Color> {
    let rgb_start = if params.len() > 4 { 2 } else { 1 };
    let rgb_iter = params[rgb_start..].iter().copied();
    let mut iter = iter::once(params[0]).chain(rgb_iter);

    parse_sgr_color(&mut iter)
}

fn unexpected(params: &Params, intermediates: &[u8], byte: u8) {
    debug!(
        "[unexpected csi] params: {params:?}, intermediates: {intermediates:?}, final: {:?}",
        byte as char
    );
}
