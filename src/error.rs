//! Error types for CLI operations.
//!
//! `CliError` covers tree validation, bounded-buffer overflow and failures
//! reported by command handlers. Resolution misses (unknown command, unknown
//! help path) are not errors and never appear here.

use core::fmt;

/// CLI error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    /// Two siblings share a name
    DuplicateName(&'static str),

    /// A top-level node uses a name reserved for built-in commands
    ReservedName(&'static str),

    /// Node name exceeds `MAX_NAME`
    NameTooLong(&'static str),

    /// Node name is empty or contains whitespace
    InvalidName(&'static str),

    /// Buffer capacity exceeded
    BufferFull,

    /// Input has more tokens than `MAX_TOKENS`
    TooManyTokens,

    /// I/O error occurred
    IoError,

    /// Handler could not parse its argument string
    InvalidArgument(heapless::String<64>),

    /// Command executed but reported failure
    CommandFailed(heapless::String<128>),

    /// Generic error with message
    Other(heapless::String<128>),
}

impl CliError {
    /// Build a `CommandFailed` error, truncating the message to fit.
    pub fn failed(msg: &str) -> Self {
        CliError::CommandFailed(truncated(msg))
    }

    /// Build an `InvalidArgument` error, truncating the message to fit.
    pub fn invalid_argument(msg: &str) -> Self {
        CliError::InvalidArgument(truncated(msg))
    }
}

/// Copy as much of `s` as fits, never splitting a character.
pub(crate) fn truncated<const N: usize>(s: &str) -> heapless::String<N> {
    let mut out = heapless::String::new();
    for c in s.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::DuplicateName(name) => write!(f, "Duplicate command name: {}", name),
            CliError::ReservedName(name) => write!(f, "Reserved command name: {}", name),
            CliError::NameTooLong(name) => write!(f, "Command name too long: {}", name),
            CliError::InvalidName(name) => write!(f, "Invalid command name: {:?}", name),
            CliError::BufferFull => write!(f, "Buffer full"),
            CliError::TooManyTokens => write!(f, "Too many tokens"),
            CliError::IoError => write!(f, "I/O error"),
            CliError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            CliError::CommandFailed(msg) => write!(f, "{}", msg),
            CliError::Other(msg) => write!(f, "{}", msg),
        }
    }
}
