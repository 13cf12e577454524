use std::fmt;

use log::debug;

use crate::actor::Actor;
use crate::charset::CharsetIndex;

/// Enumeration of the C0/C1 control codes that may be observed outside of an
/// escape sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ControlCode {
    // C0
    /// (BEL, Caret = ^G, C = \a) Bell, triggers the bell, buzzer, or beeper on the terminal.
    Bell,
    /// (BS, Caret = ^H, C = \b) Backspace, can be used to define overstruck characters.
    Backspace,
    /// (HT, Caret = ^I, C = \t) Horizontal tabulation, move to next predetermined position.
    HorizontalTab,
    /// (LF, Caret = ^J, C = \n) Linefeed, move to same position on next line (see also NL).
    LineFeed,
    /// (VT, Caret = ^K, C = \v) Vertical tabulation, move to next predetermined line.
    VerticalTab,
    /// (FF, Caret = ^L, C = \f) Form feed, move to next form or page.
    FormFeed,
    /// (CR, Caret = ^M, C = \r) Carriage return, move to first character of current line.
    CarriageReturn,
    /// (SO, Caret = ^N) Shift out, switch to G1 (other half of character set).
    ShiftOut,
    /// (SI, Caret = ^O) Shift in, switch to G0 (normal half of character set).
    ShiftIn,
    /// (SUB, Caret = ^Z) A character has been substituted for one that was found invalid.
    Substitute,

    // C1
    /// (IND) Index.
    Index,
    /// (NEL) Next line.
    NextLine,
    /// (HTS) Horizontal tabulation set.
    HorizontalTabSet,
    /// (RI) Reverse index.
    ReverseIndex,

    // Misc
    /// Unexpected control code.
    Unexpected(u8),
}

impl From<u8> for ControlCode {
    fn from(byte: u8) -> Self {
        use ControlCode::*;
        match byte {
            // C0
            0x07 => Bell,
            0x08 => Backspace,
            0x09 => HorizontalTab,
            0x0a => LineFeed,
            0x0b => VerticalTab,
            0x0c => FormFeed,
            0x0d => CarriageReturn,
            0x0e => ShiftOut,
            0x0f => ShiftIn,
            0x1a => Substitute,

            // C1
            0x84 => Index,
            0x85 => NextLine,
            0x88 => HorizontalTabSet,
            0x8d => ReverseIndex,

            // Misc
            other => Unexpected(other),
        }
    }
}

impl fmt::Display for ControlCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ControlCode::*;
        let code = match self {
            Bell => "BEL",
            Backspace => "BS",
            HorizontalTab => "HT",
            LineFeed => "LF",
            VerticalTab => "VT",
            FormFeed => "FF",
            CarriageReturn => "CR",
            ShiftOut => "SO",
            ShiftIn => "SI",
            Substitute => "SUB",
            Index => "IND",
            NextLine => "NEL",
            HorizontalTabSet => "HTS",
            ReverseIndex => "RI",
            Unexpected(_) => "UNEXPECTED",
        };

        match self {
            Unexpected(b) => write!(f, "{code}: 0x{b:02X}"),
            _ => write!(f, "{code}"),
        }
    }
}

pub(crate) fn perform<A: Actor>(byte: u8, actor: &mut A) {
    let code = ControlCode::from(byte);
    match code {
        // C0
        ControlCode::Bell => actor.bell(),
        ControlCode::Backspace => actor.backspace(),
        ControlCode::HorizontalTab => actor.move_forward_tabs(1),
        ControlCode::LineFeed
        | ControlCode::VerticalTab
        | ControlCode::FormFeed => actor.linefeed(),
        ControlCode::CarriageReturn => actor.carriage_return(),
        ControlCode::ShiftOut => actor.set_active_charset(CharsetIndex::G1),
        ControlCode::ShiftIn => actor.set_active_charset(CharsetIndex::G0),
        ControlCode::Substitute => actor.substitute(),

        // C1
        ControlCode::Index => actor.index(),
        ControlCode::NextLine => actor.linefeed(),
        ControlCode::HorizontalTabSet => actor.set_horizontal_tabstop(),
        ControlCode::ReverseIndex => actor.reverse_index(),

        _ => debug!("[unexpected: control_code] {code}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Parser;

    #[derive(Debug, PartialEq, Eq)]
    enum Event {
        Print(char),
        Bell,
        Backspace,
        CarriageReturn,
        LineFeed,
        Index,
        ReverseIndex,
        Substitute,
        ForwardTabs(u16),
        SetTabStop,
        ActiveCharset(CharsetIndex),
    }

    #[derive(Default)]
    struct RecordingActor {
        events: Vec<Event>,
    }

    impl Actor for RecordingActor {
        fn print(&mut self, c: char) {
            self.events.push(Event::Print(c));
        }

        fn bell(&mut self) {
            self.events.push(Event::Bell);
        }

        fn backspace(&mut self) {
            self.events.push(Event::Backspace);
        }

        fn carriage_return(&mut self) {
            self.events.push(Event::CarriageReturn);
        }

        fn linefeed(&mut self) {
            self.events.push(Event::LineFeed);
        }

        fn index(&mut self) {
            self.events.push(Event::Index);
        }

        fn reverse_index(&mut self) {
            self.events.push(Event::ReverseIndex);
        }

        fn substitute(&mut self) {
            self.events.push(Event::Substitute);
        }

        fn move_forward_tabs(&mut self, count: u16) {
            self.events.push(Event::ForwardTabs(count));
        }

        fn set_horizontal_tabstop(&mut self) {
            self.events.push(Event::SetTabStop);
        }

        fn set_active_charset(&mut self, index: CharsetIndex) {
            self.events.push(Event::ActiveCharset(index));
        }
    }

    fn parse(bytes: &[u8]) -> Vec<Event> {
        let mut parser = Parser::new();
        let mut actor = RecordingActor::default();
        parser.advance(bytes, &mut actor);
        actor.events
    }

    #[test]
    fn perform_test() {
        let cases: Vec<(&[u8], Vec<Event>)> = vec![
            (b"\t", vec![Event::ForwardTabs(1)]),
            (b"\x08", vec![Event::Backspace]),
            (b"\r", vec![Event::CarriageReturn]),
            (
                &[0x0a, 0x0b, 0x0c],
                vec![Event::LineFeed, Event::LineFeed, Event::LineFeed],
            ),
            (b"\x07\x1a", vec![Event::Bell, Event::Substitute]),
            (
                b"\x0e\x0f",
                vec![
                    Event::ActiveCharset(CharsetIndex::G1),
                    Event::ActiveCharset(CharsetIndex::G0),
                ],
            ),
            (
                &[0x84, 0x85, 0x88, 0x8d],
                vec![
                    Event::Index,
                    Event::LineFeed,
                    Event::SetTabStop,
                    Event::ReverseIndex,
                ],
            ),
            (b"\x01", vec![]),
            (
                b"A\x08B\x0a",
                vec![
                    Event::Print('A'),
                    Event::Backspace,
                    Event::Print('B'),
                    Event::LineFeed,
                ],
            ),
        ];

        for (input, expected) in cases {
            assert_eq!(parse(input), expected);
        }
    }
}
