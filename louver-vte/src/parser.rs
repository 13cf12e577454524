use crate::actor::Actor;
use crate::enums::{Action, State};
use crate::params::Params;
use crate::transitions;

const MAX_INTERMEDIATES: usize = 2;
const MAX_OSC_RAW: usize = 1024;
const MAX_OSC_PARAMS: usize = 16;

/// Parser for the raw VT protocol which delegates actions to an [`Actor`].
///
/// The parser is created in ground state with all scratch buffers empty and
/// lives for the full session. State persists across [`Parser::advance`]
/// calls, so escape sequences split across reads are handled correctly. All
/// scratch is fixed-capacity and inline; feeding bytes never allocates and
/// never fails.
pub struct Parser {
    state: State,
    intermediates: [u8; MAX_INTERMEDIATES],
    intermediate_idx: usize,
    params: Params,
    param: u16,
    osc_raw: [u8; MAX_OSC_RAW],
    osc_raw_len: usize,
    osc_params: [(usize, usize); MAX_OSC_PARAMS],
    osc_num_params: usize,
    ignoring: bool,
    utf8: utf8parse::Parser,
}

impl Default for Parser {
    fn default() -> Self {
        Self {
            state: State::Ground,
            intermediates: [0; MAX_INTERMEDIATES],
            intermediate_idx: 0,
            params: Params::default(),
            param: 0,
            osc_raw: [0; MAX_OSC_RAW],
            osc_raw_len: 0,
            osc_params: [(0, 0); MAX_OSC_PARAMS],
            osc_num_params: 0,
            ignoring: false,
            utf8: utf8parse::Parser::new(),
        }
    }
}

struct Utf8Receiver<'a, A: Actor> {
    actor: &'a mut A,
    state: &'a mut State,
}

impl<A: Actor> utf8parse::Receiver for Utf8Receiver<'_, A> {
    fn codepoint(&mut self, c: char) {
        self.actor.print(c);
        *self.state = State::Ground;
    }

    fn invalid_sequence(&mut self) {
        self.actor.print(char::REPLACEMENT_CHARACTER);
        *self.state = State::Ground;
    }
}

impl Parser {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the parser with a new chunk of bytes.
    ///
    /// Events are emitted to `actor` in strict byte order. Feeding a stream
    /// in arbitrary chunks produces the same events as feeding it at once.
    pub fn advance<A: Actor>(&mut self, bytes: &[u8], actor: &mut A) {
        for &byte in bytes {
            if self.state == State::Utf8 {
                self.advance_utf8(actor, byte);
                continue;
            }

            let (next_state, action) = transitions::transit(self.state, byte);

            // UTF-8 sequences are decoded out of band; the receiver restores
            // the ground state once a scalar value (or U+FFFD) is produced.
            if action == Action::BeginUtf8 {
                self.state = State::Utf8;
                self.advance_utf8(actor, byte);
                continue;
            }

            if next_state == self.state {
                self.perform(actor, action, byte);
                continue;
            }

            self.perform(actor, transitions::exit_action(self.state), byte);
            self.perform(actor, action, byte);
            self.perform(actor, transitions::entry_action(next_state), byte);
            self.state = next_state;
        }
    }

    /// Reset the parser to ground state with all scratch cleared.
    ///
    /// This is the caller-driven equivalent of CAN/SUB: any partially
    /// accumulated sequence is dropped without dispatch.
    pub fn reset(&mut self) {
        self.state = State::Ground;
        self.intermediate_idx = 0;
        self.params.clear();
        self.param = 0;
        self.osc_raw_len = 0;
        self.osc_num_params = 0;
        self.ignoring = false;
        self.utf8 = utf8parse::Parser::new();
    }

    fn advance_utf8<A: Actor>(&mut self, actor: &mut A, byte: u8) {
        let mut receiver = Utf8Receiver {
            actor,
            state: &mut self.state,
        };
        self.utf8.advance(&mut receiver, byte);
    }

    fn intermediates(&self) -> &[u8] {
        &self.intermediates[..self.intermediate_idx]
    }

    fn perform<A: Actor>(&mut self, actor: &mut A, action: Action, byte: u8) {
        use Action::*;

        match action {
            Print => actor.print(byte as char),
            Execute => actor.execute(byte),
            Put => actor.put(byte),
            Hook => {
                self.finish_param();
                actor.hook(
                    &self.params,
                    self.intermediates(),
                    self.ignoring,
                    byte,
                );
            },
            Unhook => actor.unhook(),
            CsiDispatch => {
                self.finish_param();
                actor.csi_dispatch(
                    &self.params,
                    self.intermediates(),
                    self.ignoring,
                    byte,
                );
            },
            EscDispatch => {
                actor.esc_dispatch(self.intermediates(), self.ignoring, byte);
            },
            Collect => {
                if self.intermediate_idx == MAX_INTERMEDIATES {
                    self.ignoring = true;
                } else {
                    self.intermediates[self.intermediate_idx] = byte;
                    self.intermediate_idx += 1;
                }
            },
            Param => {
                if self.params.is_full() {
                    self.ignoring = true;
                    return;
                }

                match byte {
                    b';' => {
                        self.params.push(self.param);
                        self.param = 0;
                    },
                    b':' => {
                        self.params.extend(self.param);
                        self.param = 0;
                    },
                    _ => {
                        // Values are saturated at 65535 rather than wrapped.
                        self.param = self.param.saturating_mul(10);
                        self.param =
                            self.param.saturating_add((byte - b'0') as u16);
                    },
                }
            },
            Clear => {
                self.intermediate_idx = 0;
                self.params.clear();
                self.param = 0;
                self.ignoring = false;
            },
            OscStart => {
                self.osc_raw_len = 0;
                self.osc_num_params = 0;
                self.ignoring = false;
            },
            OscPut => self.osc_put(byte),
            OscEnd => {
                self.osc_end_param();
                // An overflowed OSC is dropped as a whole.
                if !self.ignoring {
                    self.osc_dispatch(actor, byte);
                }
            },
            Ignore | None | BeginUtf8 => {},
        }
    }

    /// Commit the currently accumulating parameter before a dispatch.
    fn finish_param(&mut self) {
        if self.params.is_full() {
            self.ignoring = true;
        } else {
            self.params.push(self.param);
        }
    }

    fn osc_put(&mut self, byte: u8) {
        // Parameter separator; record the boundary of the previous slice.
        if byte == b';' {
            let idx = self.osc_raw_len;
            match self.osc_num_params {
                MAX_OSC_PARAMS => self.ignoring = true,
                0 => {
                    self.osc_params[0] = (0, idx);
                    self.osc_num_params = 1;
                },
                num => {
                    let prev_end = self.osc_params[num - 1].1;
                    self.osc_params[num] = (prev_end, idx);
                    self.osc_num_params = num + 1;
                },
            }
            return;
        }

        if self.osc_raw_len == MAX_OSC_RAW {
            self.ignoring = true;
            return;
        }

        self.osc_raw[self.osc_raw_len] = byte;
        self.osc_raw_len += 1;
    }

    /// Close the final OSC parameter slice at termination time.
    fn osc_end_param(&mut self) {
        let idx = self.osc_raw_len;
        match self.osc_num_params {
            MAX_OSC_PARAMS => {},
            // A completely empty OSC dispatches with no parameters.
            0 if idx == 0 => {},
            0 => {
                self.osc_params[0] = (0, idx);
                self.osc_num_params = 1;
            },
            num => {
                let prev_end = self.osc_params[num - 1].1;
                self.osc_params[num] = (prev_end, idx);
                self.osc_num_params = num + 1;
            },
        }
    }

    fn osc_dispatch<A: Actor>(&self, actor: &mut A, byte: u8) {
        let mut slices: [&[u8]; MAX_OSC_PARAMS] = [&[]; MAX_OSC_PARAMS];

        for (slice, &(start, end)) in slices
            .iter_mut()
            .zip(&self.osc_params[..self.osc_num_params])
        {
            *slice = &self.osc_raw[start..end];
        }

        actor.osc_dispatch(&slices[..self.osc_num_params], byte == 0x07);
    }
}
