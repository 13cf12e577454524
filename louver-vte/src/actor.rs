//! Callbacks invoked by the virtual terminal parser.
//!
//! The [`Parser`](crate::Parser) walks through a byte stream and translates
//! it into low level terminal actions. Those actions are handed over to an
//! [`Actor`] implementation that is responsible for mutating the terminal
//! model, updating UI state, collecting a recording, or whatever else the
//! embedding application needs. The trait methods mirror the action set
//! defined by the ECMA-48 escape sequence state machine and DEC/xterm
//! conventions.

use crate::params::Params;

/// Consumer-facing interface for terminal actions emitted by the parser.
///
/// Each method corresponds to a particular class of escape sequence or
/// printable data encountered while decoding a stream of terminal bytes.
/// The semantics follow ECMA-48 where possible, with a few well-established
/// extensions.
///
/// All methods have a default empty implementation so that implementations
/// only need to override the variants they actually care about. The parser
/// invokes these callbacks synchronously while it walks through the input
/// byte stream; none of them may fail.
///
/// ## Terminology
///
/// An intermediate is a character in the range `0x20..=0x2F` that occurs
/// before the final character of an escape sequence. The private parameter
/// markers `<=>?` (`0x3C..=0x3F`) are reported through the same slice.
///
/// The `ignore` flag is set when a sequence overflowed one of the parser's
/// fixed-capacity buffers (more than two intermediates, more than 32
/// parameter slots). The dispatch still fires so that the consumer can
/// decide to drop the sequence.
pub trait Actor {
    /// Emits a single printable Unicode scalar value.
    fn print(&mut self, _c: char) {}

    /// Executes an immediate single-byte control function.
    ///
    /// This covers completed C0/C1 control characters that are *not* part of
    /// longer sequences (e.g. `BEL`, `BS`, `CR`, `IND`, `NEL`, `HTS`).
    fn execute(&mut self, _byte: u8) {}

    /// Signals the start of a Device Control String (DCS).
    ///
    /// A handler should be selected for the remaining characters of the
    /// string; it will subsequently receive one `put` call per payload byte.
    fn hook(
        &mut self,
        _params: &Params,
        _intermediates: &[u8],
        _ignore: bool,
        _byte: u8,
    ) {
    }

    /// Passes one payload byte of the current device control string. C0
    /// controls are passed to the handler as well.
    fn put(&mut self, _byte: u8) {}

    /// Marks the end of the current device control string.
    fn unhook(&mut self) {}

    /// Dispatches an Operating System Command (OSC).
    ///
    /// `bell_terminated` is `true` when the string was terminated by BEL
    /// rather than ST.
    fn osc_dispatch(&mut self, _params: &[&[u8]], _bell_terminated: bool) {}

    /// Dispatches a Control Sequence Introducer (CSI) escape.
    fn csi_dispatch(
        &mut self,
        _params: &Params,
        _intermediates: &[u8],
        _ignore: bool,
        _byte: u8,
    ) {
    }

    /// Dispatches a standard escape sequence.
    fn esc_dispatch(&mut self, _intermediates: &[u8], _ignore: bool, _byte: u8) {
    }
}
