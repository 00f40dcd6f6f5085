//! Shell orchestration and line processing.
//!
//! The `Shell` owns one session: the shared command tree, the embedder's
//! command handler, the terminal I/O, the prompt and last executed line, and
//! the completion adapter. Hosts either drive it a character at a time with
//! [`Shell::process_char`] / [`Shell::poll`], or bring their own line editor and
//! call [`Shell::execute`] on submit and [`Shell::complete`] on Tab.

use core::fmt::Write;
use core::marker::PhantomData;

use crate::config::{MAX_INPUT, MAX_RESPONSE, ShellConfig};
use crate::error::{CliError, truncated};
use crate::io::CharIo;
use crate::response::{Outcome, Response};
use crate::tree::completion::Candidate;
use crate::tree::path::split_head;
use crate::tree::{Branch, Builtin, EOF_SENTINEL};

pub mod completer;
pub mod decoder;
pub mod dispatch;
pub mod handler;
pub mod session;

pub use completer::CompletionSession;
pub use decoder::{InputDecoder, InputEvent};
pub use dispatch::{Resolution, dispatch, resolve};
pub use handler::CommandHandler;
pub use session::Session;

/// Shell lifecycle state.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ShellState {
    /// Not yet activated; character input is ignored
    Inactive,

    /// Reading and executing lines
    Active,

    /// A command ended the session; character input is ignored
    Terminated,
}

/// Interactive shell over a command tree.
///
/// Generic over:
/// - `IO`: CharIo implementation
/// - `H`: CommandHandler implementation
/// - `C`: ShellConfig implementation
pub struct Shell<IO, H, C>
where
    IO: CharIo,
    H: CommandHandler<C>,
    C: ShellConfig,
{
    /// Command tree root; its name is the shell name
    tree: &'static Branch,

    handler: H,

    io: IO,

    session: Session,

    completion: CompletionSession,

    decoder: InputDecoder,

    input_buffer: heapless::String<MAX_INPUT>,

    state: ShellState,

    _config: PhantomData<C>,
}

impl<IO, H, C> core::fmt::Debug for Shell<IO, H, C>
where
    IO: CharIo,
    H: CommandHandler<C>,
    C: ShellConfig,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Shell")
            .field("name", &self.tree.name)
            .field("state", &self.state)
            .field("session", &self.session)
            .field("input_buffer", &self.input_buffer.as_str())
            .finish_non_exhaustive()
    }
}

impl<IO, H, C> Shell<IO, H, C>
where
    IO: CharIo,
    H: CommandHandler<C>,
    C: ShellConfig,
{
    /// Create a shell over `tree`, named after the tree's root.
    ///
    /// Starts `Inactive`. Call `activate()` to show the intro and prompt.
    ///
    /// # Returns
    ///
    /// - `Err(CliError)` - the tree fails [`Branch::validate`], or the name
    ///   does not fit the prompt
    pub fn new(tree: &'static Branch, handler: H, io: IO) -> Result<Self, CliError> {
        tree.validate()?;
        Ok(Self {
            tree,
            handler,
            io,
            session: Session::new(tree.name)?,
            completion: CompletionSession::new(),
            decoder: InputDecoder::new(),
            input_buffer: heapless::String::new(),
            state: ShellState::Inactive,
            _config: PhantomData,
        })
    }

    /// Show the intro banner and first prompt, and start accepting input.
    pub fn activate(&mut self) -> Result<(), CliError> {
        self.state = ShellState::Active;
        if !C::MSG_INTRO.is_empty() {
            self.write_line(C::MSG_INTRO)?;
        }
        self.write_prompt()
    }

    /// Execute one input line.
    ///
    /// - `help [path]`: writes documentation or the no-help message
    /// - `exit`, `EOF`: terminate the session
    /// - empty line: replays the last line if `C::REPEAT_LAST_ON_EMPTY`
    /// - anything else: dispatched through the tree and the handler
    ///
    /// A handler error is returned unchanged; the session stays alive and
    /// the line is still remembered as the last one. A line that names
    /// nothing invocable is never remembered.
    pub fn execute(&mut self, line: &str) -> Result<Outcome, CliError> {
        let line = line.trim_end_matches(['\r', '\n']);

        if line.trim().is_empty() {
            return self.empty_line();
        }

        let outcome = self.run_line(line)?;
        if outcome.is_terminate() {
            self.state = ShellState::Terminated;
        }
        Ok(outcome)
    }

    fn empty_line(&mut self) -> Result<Outcome, CliError> {
        if !C::REPEAT_LAST_ON_EMPTY {
            return Ok(Outcome::Continue);
        }
        match self.session.last_line() {
            Some(last) => {
                let replay: heapless::String<MAX_INPUT> = truncated(last);
                log::debug!("replaying {:?}", replay.as_str());
                self.execute(&replay)
            }
            None => Ok(Outcome::Continue),
        }
    }

    fn run_line(&mut self, line: &str) -> Result<Outcome, CliError> {
        let (head, rest) = split_head(line);

        match Builtin::from_name(head) {
            Some(Builtin::EndOfInput) => {
                self.session.clear_last();
                Ok(Outcome::Terminate)
            }
            Some(Builtin::Help) => {
                self.session.record(line);
                self.show_help(rest)?;
                Ok(Outcome::Continue)
            }
            _ => {
                // Unknown lines leave the session untouched
                if resolve(self.tree, line) != Resolution::Unknown {
                    self.session.record(line);
                }
                let response = dispatch(self.tree, line, &mut self.handler)?;
                self.write_response(&response)?;
                Ok(response.outcome)
            }
        }
    }

    /// Documentation for `path`, without writing anything.
    pub fn help(&self, path: &str) -> Option<&'static str> {
        crate::tree::help::help(path, self.tree)
    }

    fn show_help(&mut self, path: &str) -> Result<(), CliError> {
        match self.help(path) {
            Some(text) => self.write_line(text),
            None => {
                let path = path.trim();
                let subject = if path.is_empty() { self.tree.name } else { path };
                let mut msg: heapless::String<MAX_RESPONSE> = heapless::String::new();
                let _ = write!(msg, "{}{}", C::MSG_NO_HELP, subject);
                self.write_line(&msg)
            }
        }
    }

    /// Completion candidate `index` for `buffer` with the cursor at byte `cursor`.
    ///
    /// Index 0 starts a fresh request; increasing indices walk its result;
    /// `None` signals exhaustion.
    pub fn complete(&mut self, buffer: &str, cursor: usize, index: usize) -> Option<Candidate> {
        self.completion.candidate(self.tree, buffer, cursor, index)
    }

    // ========================================
    // Character-driven loop
    // ========================================

    /// Process a single character of input.
    ///
    /// Handler errors from submitted lines are written as `Error: <error>`
    /// and the session continues. Only I/O errors are returned.
    pub fn process_char(&mut self, c: char) -> Result<(), CliError> {
        if self.state != ShellState::Active {
            return Ok(());
        }

        match self.decoder.decode_char(c) {
            InputEvent::None => Ok(()),

            InputEvent::Char(ch) => match self.input_buffer.push(ch) {
                Ok(()) => self.put(ch),
                Err(_) => self.put('\x07'),
            },

            InputEvent::Backspace => {
                if self.input_buffer.pop().is_some() {
                    self.write("\x08 \x08")?;
                }
                Ok(())
            }

            InputEvent::DoubleEsc => {
                self.input_buffer.clear();
                self.redraw_line()
            }

            InputEvent::Enter => {
                let line = self.input_buffer.clone();
                self.input_buffer.clear();
                self.write("\r\n")?;
                self.submit(&line)
            }

            InputEvent::Tab => self.handle_tab(),

            // Ctrl-D only ends the session on an empty line
            InputEvent::EndOfInput if self.input_buffer.is_empty() => {
                self.write("\r\n")?;
                self.submit(EOF_SENTINEL)
            }
            InputEvent::EndOfInput => Ok(()),
        }
    }

    /// Read one character from I/O, if available, and process it.
    pub fn poll(&mut self) -> Result<(), CliError> {
        match self.io.get_char() {
            Ok(Some(c)) => self.process_char(c),
            Ok(None) => Ok(()),
            Err(_) => Err(CliError::IoError),
        }
    }

    fn submit(&mut self, line: &str) -> Result<(), CliError> {
        match self.execute(line) {
            Ok(outcome) if outcome.is_terminate() => Ok(()),
            Ok(_) => self.write_prompt(),
            Err(CliError::IoError) => Err(CliError::IoError),
            Err(e) => {
                log::warn!("command {:?} failed: {}", line, e);
                let mut msg: heapless::String<MAX_RESPONSE> = heapless::String::new();
                let _ = write!(msg, "Error: {}", e);
                self.write_line(&msg)?;
                self.write_prompt()
            }
        }
    }

    /// Handle Tab: one candidate completes the token, several are listed.
    #[cfg(feature = "completion")]
    fn handle_tab(&mut self) -> Result<(), CliError> {
        let cursor = self.input_buffer.len();
        let mut matches = crate::tree::completion::Candidates::new();
        let mut index = 0;
        while let Some(candidate) =
            self.completion
                .candidate(self.tree, &self.input_buffer, cursor, index)
        {
            if matches.push(candidate).is_err() {
                self.completion.reset();
                break;
            }
            index += 1;
        }

        match matches.as_slice() {
            [] => self.put('\x07'),
            [single] => {
                let mut replacement: heapless::String<{ crate::config::MAX_NAME + 1 }> =
                    heapless::String::new();
                let _ = write!(replacement, "{}", single);
                self.replace_partial_token(&replacement)
            }
            several => {
                self.write("\r\n")?;
                for candidate in several {
                    self.write(candidate.as_str())?;
                    self.write("  ")?;
                }
                self.write("\r\n")?;

                // Extend the typed token to the shared prefix, if that adds anything
                let prefix = common_prefix(several);
                let partial = &self.input_buffer[self.partial_token_start()..];
                if prefix.len() > partial.len() && prefix.starts_with(partial) {
                    self.replace_partial_token(prefix)
                } else {
                    self.redraw_line()
                }
            }
        }
    }

    /// Stub when completion feature is disabled: ring the bell.
    #[cfg(not(feature = "completion"))]
    fn handle_tab(&mut self) -> Result<(), CliError> {
        self.put('\x07')
    }

    #[cfg_attr(not(feature = "completion"), allow(dead_code))]
    fn partial_token_start(&self) -> usize {
        self.input_buffer
            .trim_end_matches(|c: char| !c.is_whitespace())
            .len()
    }

    /// Swap the token being typed for `text` and redraw.
    #[cfg_attr(not(feature = "completion"), allow(dead_code))]
    fn replace_partial_token(&mut self, text: &str) -> Result<(), CliError> {
        let start = self.partial_token_start();

        let mut updated: heapless::String<MAX_INPUT> = heapless::String::new();
        if updated.push_str(&self.input_buffer[..start]).is_err() || updated.push_str(text).is_err() {
            return self.put('\x07');
        }
        self.input_buffer = updated;
        self.redraw_line()
    }

    // ========================================
    // Output helpers
    // ========================================

    fn write(&mut self, s: &str) -> Result<(), CliError> {
        self.io.write_str(s).map_err(|_| CliError::IoError)
    }

    fn write_line(&mut self, s: &str) -> Result<(), CliError> {
        self.io.write_line(s).map_err(|_| CliError::IoError)
    }

    fn put(&mut self, c: char) -> Result<(), CliError> {
        self.io.put_char(c).map_err(|_| CliError::IoError)
    }

    fn write_prompt(&mut self) -> Result<(), CliError> {
        self.io
            .write_str(self.session.prompt())
            .map_err(|_| CliError::IoError)
    }

    /// Clear current line and redraw with prompt and buffer.
    fn redraw_line(&mut self) -> Result<(), CliError> {
        self.write("\r\x1b[K")?;
        self.write_prompt()?;
        self.io
            .write_str(self.input_buffer.as_str())
            .map_err(|_| CliError::IoError)
    }

    /// Write a response, applying its formatting flags.
    fn write_response(&mut self, response: &Response<C>) -> Result<(), CliError> {
        if response.indent_message {
            for (i, line) in response.message.split("\r\n").enumerate() {
                if i > 0 {
                    self.write("\r\n")?;
                }
                self.write("  ")?;
                self.write(line)?;
            }
        } else {
            self.write(&response.message)?;
        }

        if response.postfix_newline {
            self.write("\r\n")?;
        }
        Ok(())
    }

    // ========================================
    // Accessors
    // ========================================

    /// Current lifecycle state.
    pub fn state(&self) -> ShellState {
        self.state
    }

    /// True once a command has ended the session.
    pub fn is_terminated(&self) -> bool {
        self.state == ShellState::Terminated
    }

    /// Session state (prompt, last line).
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Command tree root.
    pub fn tree(&self) -> &'static Branch {
        self.tree
    }

    /// Line being edited by `process_char()`.
    pub fn input(&self) -> &str {
        self.input_buffer.as_str()
    }

    /// Command handler.
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Command handler (mutable).
    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    /// I/O interface.
    pub fn io(&self) -> &IO {
        &self.io
    }

    /// I/O interface (mutable).
    pub fn io_mut(&mut self) -> &mut IO {
        &mut self.io
    }
}

/// Longest common prefix of candidate texts.
#[cfg_attr(not(feature = "completion"), allow(dead_code))]
fn common_prefix(candidates: &[Candidate]) -> &str {
    let Some(first) = candidates.first() else {
        return "";
    };
    let first = first.as_str();

    let mut len = first.len();
    for candidate in &candidates[1..] {
        len = first
            .char_indices()
            .zip(candidate.as_str().chars())
            .take_while(|((_, a), b)| a == b)
            .last()
            .map_or(0, |((i, a), _)| i + a.len_utf8())
            .min(len);
    }
    &first[..len]
}

// ============================================================================
// Tests
// ============================================================================
