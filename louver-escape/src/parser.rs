use log::debug;
use louver_vte::{Actor as VtActor, Params, Parser as VtParser};

use crate::actor::Actor;
use crate::{control, csi, esc, osc};

/// Dispatch state that survives across individual escape sequences.
#[derive(Default)]
pub(crate) struct ParserState {
    /// Last printed character, replayed by REP.
    pub last_preceding_char: Option<char>,
}

/// Bridge between the low level state machine and an [`Actor`].
struct Performer<'a, A: Actor> {
    actor: &'a mut A,
    state: &'a mut ParserState,
}

impl<A: Actor> VtActor for Performer<'_, A> {
    fn print(&mut self, c: char) {
        self.actor.print(c);
        self.state.last_preceding_char = Some(c);
    }

    fn execute(&mut self, byte: u8) {
        control::perform(byte, self.actor);
    }

    fn hook(
        &mut self,
        params: &Params,
        intermediates: &[u8],
        ignore: bool,
        byte: u8,
    ) {
        // No device control handlers are wired up; the payload is consumed
        // and discarded without touching screen state.
        debug!(
            "[discarded dcs hook] params: {params:?}, intermediates: {intermediates:?}, \
             ignore: {ignore:?}, final: {:?}",
            byte as char
        );
    }

    fn put(&mut self, _byte: u8) {}

    fn unhook(&mut self) {}

    fn osc_dispatch(&mut self, params: &[&[u8]], bell_terminated: bool) {
        osc::perform(self.actor, params, bell_terminated);
    }

    fn csi_dispatch(
        &mut self,
        params: &Params,
        intermediates: &[u8],
        ignore: bool,
        byte: u8,
    ) {
        csi::perform(
            self.actor,
            self.state,
            params,
            intermediates,
            ignore,
            byte,
        );
    }

    fn esc_dispatch(&mut self, intermediates: &[u8], ignore: bool, byte: u8) {
        esc::perform(self.actor, intermediates, ignore, byte);
    }
}

/// High-level escape sequence parser that forwards semantic events to an
/// [`Actor`].
#[derive(Default)]
pub struct Parser {
    vt: VtParser,
    state: ParserState,
}

impl Parser {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the parser with a new chunk of bytes.
    pub fn advance<A: Actor>(&mut self, bytes: &[u8], actor: &mut A) {
        let mut performer = Performer {
            actor,
            state: &mut self.state,
        };
        self.vt.advance(bytes, &mut performer);
    }

    /// Drop any partially accumulated sequence and return to ground state.
    pub fn reset(&mut self) {
        self.vt.reset();
        self.state = ParserState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs::CharacterAttribute;
    use crate::charset::{Charset, CharsetIndex};
    use crate::color::{Color, Rgb, StdColor};
    use crate::mode::{
        ClearMode, LineClearMode, Mode, NamedMode, NamedPrivateMode,
        PrivateMode, TabClearMode,
    };

    #[derive(Debug, PartialEq)]
    enum Event {
        Print(char),
        Goto(i32, usize),
        GotoLine(i32),
        GotoColumn(usize),
        MoveUp(usize, bool),
        MoveDown(usize, bool),
        MoveForward(usize),
        MoveBackward(usize),
        InsertBlank(usize),
        InsertBlankLines(usize),
        DeleteLines(usize),
        DeleteChars(usize),
        EraseChars(usize),
        ClearScreen(ClearMode),
        ClearLine(LineClearMode),
        ScrollUp(usize),
        ScrollDown(usize),
        ScrollingRegion(usize, Option<usize>),
        SaveCursor,
        RestoreCursor,
        ResetState,
        Attribute(CharacterAttribute),
        SetMode(Mode),
        UnsetMode(Mode),
        SetPrivateMode(PrivateMode),
        UnsetPrivateMode(PrivateMode),
        KeypadApplicationMode(bool),
        ConfigureCharset(CharsetIndex, Charset),
        ForwardTabs(u16),
        BackwardTabs(u16),
        ClearTabs(TabClearMode),
        WindowTitle(Option<String>),
        IconName(Option<String>),
    }

    #[derive(Default)]
    struct RecordingActor {
        events: Vec<Event>,
    }

    impl Actor for RecordingActor {
        fn print(&mut self, c: char) {
            self.events.push(Event::Print(c));
        }

        fn goto(&mut self, line: i32, col: usize) {
            self.events.push(Event::Goto(line, col));
        }

        fn goto_line(&mut self, line: i32) {
            self.events.push(Event::GotoLine(line));
        }

        fn goto_column(&mut self, col: usize) {
            self.events.push(Event::GotoColumn(col));
        }

        fn move_up(&mut self, lines: usize, carriage_return: bool) {
            self.events.push(Event::MoveUp(lines, carriage_return));
        }

        fn move_down(&mut self, lines: usize, carriage_return: bool) {
            self.events.push(Event::MoveDown(lines, carriage_return));
        }

        fn move_forward(&mut self, cols: usize) {
            self.events.push(Event::MoveForward(cols));
        }

        fn move_backward(&mut self, cols: usize) {
            self.events.push(Event::MoveBackward(cols));
        }

        fn insert_blank(&mut self, count: usize) {
            self.events.push(Event::InsertBlank(count));
        }

        fn insert_blank_lines(&mut self, count: usize) {
            self.events.push(Event::InsertBlankLines(count));
        }

        fn delete_lines(&mut self, count: usize) {
            self.events.push(Event::DeleteLines(count));
        }

        fn delete_chars(&mut self, count: usize) {
            self.events.push(Event::DeleteChars(count));
        }

        fn erase_chars(&mut self, count: usize) {
            self.events.push(Event::EraseChars(count));
        }

        fn clear_screen(&mut self, mode: ClearMode) {
            self.events.push(Event::ClearScreen(mode));
        }

        fn clear_line(&mut self, mode: LineClearMode) {
            self.events.push(Event::ClearLine(mode));
        }

        fn scroll_up(&mut self, count: usize) {
            self.events.push(Event::ScrollUp(count));
        }

        fn scroll_down(&mut self, count: usize) {
            self.events.push(Event::ScrollDown(count));
        }

        fn set_scrolling_region(&mut self, top: usize, bottom: Option<usize>) {
            self.events.push(Event::ScrollingRegion(top, bottom));
        }

        fn save_cursor(&mut self) {
            self.events.push(Event::SaveCursor);
        }

        fn restore_cursor(&mut self) {
            self.events.push(Event::RestoreCursor);
        }

        fn reset_state(&mut self) {
            self.events.push(Event::ResetState);
        }

        fn terminal_attribute(&mut self, attr: CharacterAttribute) {
            self.events.push(Event::Attribute(attr));
        }

        fn set_mode(&mut self, mode: Mode) {
            self.events.push(Event::SetMode(mode));
        }

        fn unset_mode(&mut self, mode: Mode) {
            self.events.push(Event::UnsetMode(mode));
        }

        fn set_private_mode(&mut self, mode: PrivateMode) {
            self.events.push(Event::SetPrivateMode(mode));
        }

        fn unset_private_mode(&mut self, mode: PrivateMode) {
            self.events.push(Event::UnsetPrivateMode(mode));
        }

        fn set_keypad_application_mode(&mut self, enabled: bool) {
            self.events.push(Event::KeypadApplicationMode(enabled));
        }

        fn configure_charset(
            &mut self,
            index: CharsetIndex,
            charset: Charset,
        ) {
            self.events.push(Event::ConfigureCharset(index, charset));
        }

        fn move_forward_tabs(&mut self, count: u16) {
            self.events.push(Event::ForwardTabs(count));
        }

        fn move_backward_tabs(&mut self, count: u16) {
            self.events.push(Event::BackwardTabs(count));
        }

        fn clear_tabs(&mut self, mode: TabClearMode) {
            self.events.push(Event::ClearTabs(mode));
        }

        fn set_window_title(&mut self, title: Option<String>) {
            self.events.push(Event::WindowTitle(title));
        }

        fn set_icon_name(&mut self, name: Option<String>) {
            self.events.push(Event::IconName(name));
        }
    }

    fn parse(bytes: &[u8]) -> Vec<Event> {
        let mut parser = Parser::new();
        let mut actor = RecordingActor::default();
        parser.advance(bytes, &mut actor);
        actor.events
    }

    #[test]
    fn cursor_motion_sequences() {
        assert_eq!(parse(b"\x1b[A"), vec![Event::MoveUp(1, false)]);
        assert_eq!(parse(b"\x1b[3B"), vec![Event::MoveDown(3, false)]);
        assert_eq!(parse(b"\x1b[2E"), vec![Event::MoveDown(2, true)]);
        assert_eq!(parse(b"\x1b[2F"), vec![Event::MoveUp(2, true)]);
        assert_eq!(parse(b"\x1b[0C"), vec![Event::MoveForward(1)]);
        assert_eq!(parse(b"\x1b[5D"), vec![Event::MoveBackward(5)]);
        assert_eq!(parse(b"\x1b[7G"), vec![Event::GotoColumn(6)]);
        assert_eq!(parse(b"\x1b[7`"), vec![Event::GotoColumn(6)]);
        assert_eq!(parse(b"\x1b[4d"), vec![Event::GotoLine(3)]);
        assert_eq!(parse(b"\x1b[2;3H"), vec![Event::Goto(1, 2)]);
        assert_eq!(parse(b"\x1b[2;3f"), vec![Event::Goto(1, 2)]);
        assert_eq!(parse(b"\x1b[H"), vec![Event::Goto(0, 0)]);
    }

    #[test]
    fn editing_sequences() {
        assert_eq!(parse(b"\x1b[2@"), vec![Event::InsertBlank(2)]);
        assert_eq!(parse(b"\x1b[2L"), vec![Event::InsertBlankLines(2)]);
        assert_eq!(parse(b"\x1b[M"), vec![Event::DeleteLines(1)]);
        assert_eq!(parse(b"\x1b[3P"), vec![Event::DeleteChars(3)]);
        assert_eq!(parse(b"\x1b[4X"), vec![Event::EraseChars(4)]);
        assert_eq!(parse(b"\x1b[2S"), vec![Event::ScrollUp(2)]);
        assert_eq!(parse(b"\x1b[T"), vec![Event::ScrollDown(1)]);
    }

    #[test]
    fn erase_sequences() {
        assert_eq!(
            parse(b"\x1b[J"),
            vec![Event::ClearScreen(ClearMode::Below)]
        );
        assert_eq!(
            parse(b"\x1b[1J"),
            vec![Event::ClearScreen(ClearMode::Above)]
        );
        assert_eq!(
            parse(b"\x1b[2J"),
            vec![Event::ClearScreen(ClearMode::All)]
        );
        assert_eq!(
            parse(b"\x1b[3J"),
            vec![Event::ClearScreen(ClearMode::All)]
        );
        assert_eq!(
            parse(b"\x1b[0K"),
            vec![Event::ClearLine(LineClearMode::Right)]
        );
        assert_eq!(
            parse(b"\x1b[1K"),
            vec![Event::ClearLine(LineClearMode::Left)]
        );
        assert_eq!(
            parse(b"\x1b[2K"),
            vec![Event::ClearLine(LineClearMode::All)]
        );
    }

    #[test]
    fn sgr_basic_attributes() {
        assert_eq!(
            parse(b"\x1b[m"),
            vec![Event::Attribute(CharacterAttribute::Reset)]
        );
        assert_eq!(
            parse(b"\x1b[1;4;31m"),
            vec![
                Event::Attribute(CharacterAttribute::Bold),
                Event::Attribute(CharacterAttribute::Underline),
                Event::Attribute(CharacterAttribute::Foreground(Color::Std(
                    StdColor::Red
                ))),
            ]
        );
        assert_eq!(
            parse(b"\x1b[91m"),
            vec![Event::Attribute(CharacterAttribute::Foreground(
                Color::Std(StdColor::BrightRed)
            ))]
        );
        assert_eq!(
            parse(b"\x1b[22;24m"),
            vec![
                Event::Attribute(CharacterAttribute::CancelBoldDim),
                Event::Attribute(CharacterAttribute::CancelUnderline),
            ]
        );
    }

    #[test]
    fn sgr_extended_colors() {
        let rgb = Color::TrueColor(Rgb {
            r: 128,
            g: 64,
            b: 192,
        });

        assert_eq!(
            parse(b"\x1b[38;5;120m"),
            vec![Event::Attribute(CharacterAttribute::Foreground(
                Color::Indexed(120)
            ))]
        );
        assert_eq!(
            parse(b"\x1b[38;2;128;64;192m"),
            vec![Event::Attribute(CharacterAttribute::Foreground(rgb))]
        );
        assert_eq!(
            parse(b"\x1b[38:2::128:64:192m"),
            vec![Event::Attribute(CharacterAttribute::Foreground(rgb))]
        );
        assert_eq!(
            parse(b"\x1b[48:5:17m"),
            vec![Event::Attribute(CharacterAttribute::Background(
                Color::Indexed(17)
            ))]
        );
        // The extended colour swallows its arguments, later params apply.
        assert_eq!(
            parse(b"\x1b[38;2;1;2;3;1m"),
            vec![
                Event::Attribute(CharacterAttribute::Foreground(
                    Color::TrueColor(Rgb { r: 1, g: 2, b: 3 })
                )),
                Event::Attribute(CharacterAttribute::Bold),
            ]
        );
    }

    #[test]
    fn mode_sequences() {
        assert_eq!(
            parse(b"\x1b[4h"),
            vec![Event::SetMode(Mode::Named(NamedMode::Insert))]
        );
        assert_eq!(
            parse(b"\x1b[4l"),
            vec![Event::UnsetMode(Mode::Named(NamedMode::Insert))]
        );
        assert_eq!(
            parse(b"\x1b[?25l"),
            vec![Event::UnsetPrivateMode(PrivateMode::Named(
                NamedPrivateMode::ShowCursor
            ))]
        );
        assert_eq!(
            parse(b"\x1b[?1;2004h"),
            vec![
                Event::SetPrivateMode(PrivateMode::Named(
                    NamedPrivateMode::CursorKeys
                )),
                Event::SetPrivateMode(PrivateMode::Named(
                    NamedPrivateMode::BracketedPaste
                )),
            ]
        );
        assert_eq!(
            parse(b"\x1b[?997h"),
            vec![Event::SetPrivateMode(PrivateMode::Unknown(997))]
        );
    }

    #[test]
    fn scrolling_region_sequence() {
        assert_eq!(
            parse(b"\x1b[2;4r"),
            vec![Event::ScrollingRegion(2, Some(4))]
        );
        assert_eq!(parse(b"\x1b[r"), vec![Event::ScrollingRegion(1, None)]);
    }

    #[test]
    fn tab_sequences() {
        assert_eq!(parse(b"\x1b[2I"), vec![Event::ForwardTabs(2)]);
        assert_eq!(parse(b"\x1b[Z"), vec![Event::BackwardTabs(1)]);
        assert_eq!(
            parse(b"\x1b[g"),
            vec![Event::ClearTabs(TabClearMode::Current)]
        );
        assert_eq!(
            parse(b"\x1b[3g"),
            vec![Event::ClearTabs(TabClearMode::All)]
        );
    }

    #[test]
    fn cursor_save_restore_sequences() {
        assert_eq!(
            parse(b"\x1b7\x1b8\x1b[s\x1b[u"),
            vec![
                Event::SaveCursor,
                Event::RestoreCursor,
                Event::SaveCursor,
                Event::RestoreCursor,
            ]
        );
    }

    #[test]
    fn keypad_and_reset_sequences() {
        assert_eq!(
            parse(b"\x1b=\x1b>\x1bc"),
            vec![
                Event::KeypadApplicationMode(true),
                Event::KeypadApplicationMode(false),
                Event::ResetState,
            ]
        );
    }

    #[test]
    fn charset_designation_sequences() {
        assert_eq!(
            parse(b"\x1b(0\x1b)B"),
            vec![
                Event::ConfigureCharset(
                    CharsetIndex::G0,
                    Charset::DecSpecial
                ),
                Event::ConfigureCharset(CharsetIndex::G1, Charset::Ascii),
            ]
        );
    }

    #[test]
    fn repeat_preceding_character() {
        assert_eq!(
            parse(b"x\x1b[3b"),
            vec![
                Event::Print('x'),
                Event::Print('x'),
                Event::Print('x'),
                Event::Print('x'),
            ]
        );
        // Nothing to repeat at stream start.
        assert_eq!(parse(b"\x1b[3b"), vec![]);
    }

    #[test]
    fn window_title_sequences() {
        assert_eq!(
            parse(b"\x1b]2;hello world\x07"),
            vec![Event::WindowTitle(Some("hello world".into()))]
        );
        assert_eq!(
            parse(b"\x1b]0;dir: a;b\x07"),
            vec![
                Event::IconName(Some("dir: a;b".into())),
                Event::WindowTitle(Some("dir: a;b".into())),
            ]
        );
        assert_eq!(
            parse(b"\x1b]1;icon\x1b\\"),
            vec![Event::IconName(Some("icon".into()))]
        );
        // Unknown OSC commands are discarded.
        assert_eq!(parse(b"\x1b]777;ignored\x07"), vec![]);
    }

    #[test]
    fn dcs_payload_is_discarded() {
        assert_eq!(parse(b"\x1bPqsixel-data\x1b\\z"), vec![Event::Print('z')]);
    }

    #[test]
    fn truncated_csi_is_dropped() {
        // Three intermediates overflow the buffer and set the ignore flag.
        assert_eq!(parse(b"\x1b[1 !#p"), vec![]);
    }
}
