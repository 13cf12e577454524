use log::debug;

use crate::actor::Actor;
use crate::charset::{Charset, CharsetIndex};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum EscSequence {
    /// IND - Index.
    Index,
    /// NEL - Next line.
    NextLine,
    /// HTS - Horizontal tab set.
    HorizontalTabSet,
    /// RI - Reverse index, moves the cursor up one line maintaining the
    /// horizontal position and scrolls the region if necessary.
    ReverseIndex,
    /// ST - String terminator.
    StringTerminator,
    /// RIS - Full reset.
    FullReset,
    /// DECSC - Save cursor position.
    SaveCursorPosition,
    /// DECRC - Restore saved cursor position.
    RestoreCursorPosition,
    /// DECPAM - Application keypad.
    ApplicationKeyPad,
    /// DECPNM - Normal keypad.
    NormalKeyPad,
    /// Designate a character set for G0 or G1.
    DesignateCharset(CharsetIndex, Charset),
    /// DECALN - Screen alignment display.
    ScreenAlignmentDisplay,
    Unspecified {
        control: u8,
        intermediates: Vec<u8>,
    },
}

impl From<(&[u8], u8)> for EscSequence {
    fn from(value: (&[u8], u8)) -> Self {
        let (intermediates, control) = value;

        let intermediate = if intermediates.len() == 1 {
            Some(intermediates[0])
        } else {
            None
        };

        let charset = |byte| match byte {
            b'0' => Some(Charset::DecSpecial),
            b'A' => Some(Charset::UnitedKingdom),
            b'B' => Some(Charset::Ascii),
            _ => None,
        };

        match (intermediate, control) {
            (None, b'D') => EscSequence::Index,
            (None, b'E') => EscSequence::NextLine,
            (None, b'H') => EscSequence::HorizontalTabSet,
            (None, b'M') => EscSequence::ReverseIndex,
            (None, b'\\') => EscSequence::StringTerminator,
            (None, b'c') => EscSequence::FullReset,
            (None, b'7') => EscSequence::SaveCursorPosition,
            (None, b'8') => EscSequence::RestoreCursorPosition,
            (None, b'=') => EscSequence::ApplicationKeyPad,
            (None, b'>') => EscSequence::NormalKeyPad,
            (Some(b'#'), b'8') => EscSequence::ScreenAlignmentDisplay,
            (Some(b'('), byte) => match charset(byte) {
                Some(charset) => {
                    EscSequence::DesignateCharset(CharsetIndex::G0, charset)
                },
                None => EscSequence::Unspecified {
                    control,
                    intermediates: intermediates.to_vec(),
                },
            },
            (Some(b')'), byte) => match charset(byte) {
                Some(charset) => {
                    EscSequence::DesignateCharset(CharsetIndex::G1, charset)
                },
                None => EscSequence::Unspecified {
                    control,
                    intermediates: intermediates.to_vec(),
                },
            },
            _ => EscSequence::Unspecified {
                control,
                intermediates: intermediates.to_vec(),
            },
        }
    }
}

pub(crate) fn perform<A: Actor>(
    actor: &mut A,
    intermediates: &[u8],
    ignore: bool,
    byte: u8,
) {
    if ignore {
        return debug!(
            "[ignored esc] intermediates: {intermediates:?}, control: {byte:?}"
        );
    }

    match EscSequence::from((intermediates, byte)) {
        EscSequence::Index => actor.index(),
        EscSequence::NextLine => actor.linefeed(),
        EscSequence::HorizontalTabSet => actor.set_horizontal_tabstop(),
        EscSequence::ReverseIndex => actor.reverse_index(),
        EscSequence::StringTerminator => {},
        EscSequence::FullReset => actor.reset_state(),
        EscSequence::SaveCursorPosition => actor.save_cursor(),
        EscSequence::RestoreCursorPosition => actor.restore_cursor(),
        EscSequence::ApplicationKeyPad => {
            actor.set_keypad_application_mode(true)
        },
        EscSequence::NormalKeyPad => actor.set_keypad_application_mode(false),
        EscSequence::DesignateCharset(index, charset) => {
            actor.configure_charset(index, charset)
        },
        EscSequence::ScreenAlignmentDisplay => {
            actor.screen_alignment_display()
        },
        EscSequence::Unspecified {
            control,
            intermediates,
        } => debug!(
            "[unexpected esc] intermediates: {intermediates:?}, control: {:?}",
            control as char
        ),
    }
}
