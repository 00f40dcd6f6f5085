//! Response types for command execution.
//!
//! A `Response` is what a leaf action hands back: text for the terminal plus
//! the tri-state `Outcome` that decides whether the session keeps running.

use crate::config::{MAX_RESPONSE, ShellConfig};
use crate::error::truncated;
use core::marker::PhantomData;

/// Session verdict produced by a leaf action.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Keep the session alive
    Continue,

    /// End the session
    Terminate,

    /// The action produced no verdict; the session continues
    NotApplicable,
}

impl Outcome {
    /// True only for `Terminate`.
    pub fn is_terminate(self) -> bool {
        self == Outcome::Terminate
    }
}

/// Command execution response with message, outcome and formatting flags.
///
/// Command failures return `Err(CliError)`, not `Response`.
#[derive(Debug, Clone, PartialEq)]
pub struct Response<C: ShellConfig> {
    /// Message written to the terminal (truncated to `MAX_RESPONSE`)
    pub message: heapless::String<MAX_RESPONSE>,

    /// Session verdict
    pub outcome: Outcome,

    /// Indent every message line by 2 spaces
    pub indent_message: bool,

    /// Add newline after message
    pub postfix_newline: bool,

    _phantom: PhantomData<C>,
}

impl<C: ShellConfig> Response<C> {
    fn with_outcome(message: &str, outcome: Outcome) -> Self {
        Self {
            message: truncated(message),
            outcome,
            indent_message: false,
            postfix_newline: !message.is_empty(),
            _phantom: PhantomData,
        }
    }

    /// Message that keeps the session alive.
    pub fn success(message: &str) -> Self {
        Self::with_outcome(message, Outcome::Continue)
    }

    /// Message that ends the session.
    pub fn terminate(message: &str) -> Self {
        Self::with_outcome(message, Outcome::Terminate)
    }

    /// No output, session continues.
    pub fn silent() -> Self {
        Self::with_outcome("", Outcome::Continue)
    }

    /// No verdict from the action.
    pub fn not_applicable() -> Self {
        Self::with_outcome("", Outcome::NotApplicable)
    }

    /// Builder method to indent output (2 spaces per line).
    pub fn indented(mut self) -> Self {
        self.indent_message = true;
        self
    }

    /// Builder method to suppress the trailing newline.
    pub fn without_postfix_newline(mut self) -> Self {
        self.postfix_newline = false;
        self
    }
}
