//! Input decoder for terminal character sequences.
//!
//! Converts raw characters into the few logical events the shell reacts to.
//! ANSI escape sequences (arrow keys, function keys) are swallowed whole so
//! they never reach the input buffer; a double ESC clears the line.
//!
//! Pure state machine - no buffers, no I/O.

/// Decoder state for escape sequence handling.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InputState {
    /// Normal input mode
    Normal,

    /// Saw first ESC character
    EscapeStart,

    /// Inside ESC [ ... waiting for the final byte
    EscapeSequence,
}

/// Logical input event from terminal.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// No event (accumulating or discarded sequence)
    None,

    /// Regular character typed
    Char(char),

    /// Backspace key (ASCII BS or DEL)
    Backspace,

    /// Enter key (line feed or carriage return)
    Enter,

    /// Tab key
    Tab,

    /// Ctrl-D
    EndOfInput,

    /// Double ESC pressed
    DoubleEsc,
}

/// Terminal input decoder.
#[derive(Debug)]
pub struct InputDecoder {
    state: InputState,
}

impl InputDecoder {
    /// Create new decoder in Normal state.
    pub fn new() -> Self {
        Self {
            state: InputState::Normal,
        }
    }

    /// Decode a single character into an input event.
    ///
    /// ```rust,ignore
    /// assert_eq!(decoder.decode_char('h'), InputEvent::Char('h'));
    /// assert_eq!(decoder.decode_char('\x04'), InputEvent::EndOfInput);
    ///
    /// // Up arrow (ESC [ A) is consumed without an event
    /// decoder.decode_char('\x1b');
    /// decoder.decode_char('[');
    /// assert_eq!(decoder.decode_char('A'), InputEvent::None);
    /// ```
    pub fn decode_char(&mut self, c: char) -> InputEvent {
        match self.state {
            InputState::Normal => self.decode_normal(c),
            InputState::EscapeStart => self.decode_escape_start(c),
            InputState::EscapeSequence => self.decode_escape_sequence(c),
        }
    }

    fn decode_normal(&mut self, c: char) -> InputEvent {
        match c {
            '\x1b' => {
                self.state = InputState::EscapeStart;
                InputEvent::None
            }
            '\n' | '\r' => InputEvent::Enter,
            '\t' => InputEvent::Tab,
            '\x04' => InputEvent::EndOfInput,
            '\x08' | '\x7f' => InputEvent::Backspace,
            c if c.is_control() => InputEvent::None,
            _ => InputEvent::Char(c),
        }
    }

    fn decode_escape_start(&mut self, c: char) -> InputEvent {
        match c {
            '\x1b' => {
                self.state = InputState::Normal;
                InputEvent::DoubleEsc
            }
            '[' => {
                self.state = InputState::EscapeSequence;
                InputEvent::None
            }
            // ESC followed by anything else: keep the character
            _ => {
                self.state = InputState::Normal;
                InputEvent::Char(c)
            }
        }
    }

    fn decode_escape_sequence(&mut self, c: char) -> InputEvent {
        // Parameter bytes (digits, ';') continue the sequence, a letter or '~' ends it
        if c.is_ascii_digit() || c == ';' {
            return InputEvent::None;
        }
        self.state = InputState::Normal;
        InputEvent::None
    }

    /// Reset decoder state to Normal.
    pub fn reset(&mut self) {
        self.state = InputState::Normal;
    }

    /// Current decoder state.
    pub fn state(&self) -> InputState {
        self.state
    }
}

impl Default for InputDecoder {
    fn default() -> Self {
        Self::new()
    }
}
