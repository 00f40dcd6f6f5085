//! Configuration traits and capacity constants.
//!
//! The `ShellConfig` trait selects user-facing messages and interactive
//! behavior at compile time without runtime overhead. Buffer capacities are
//! crate-wide constants because they size `heapless` types in public signatures.

/// Maximum input line length in bytes.
pub const MAX_INPUT: usize = 128;

/// Maximum prompt length in bytes.
pub const MAX_PROMPT: usize = 64;

/// Maximum response message length in bytes.
pub const MAX_RESPONSE: usize = 256;

/// Maximum length of a node name or a single completion candidate.
pub const MAX_NAME: usize = 64;

/// Maximum number of candidates produced by one completion request.
pub const MAX_CANDIDATES: usize = 32;

/// Maximum number of whitespace-delimited tokens considered for completion.
pub const MAX_TOKENS: usize = 16;

/// Shell configuration trait.
///
/// All values are const (zero runtime cost).
pub trait ShellConfig {
    /// Banner written by `Shell::activate()` before the first prompt.
    const MSG_INTRO: &'static str;

    /// Prefix of the default unknown-command message (followed by the line).
    const MSG_UNKNOWN: &'static str;

    /// Prefix of the "no help available" message (followed by the path).
    const MSG_NO_HELP: &'static str;

    /// Re-execute the last executed line when an empty line is submitted.
    const REPEAT_LAST_ON_EMPTY: bool;
}

/// Default configuration, mirroring classic line-oriented interpreters.
///
/// - Empty line repeats the last command
/// - `*** Unknown syntax: <line>` for unresolved input
/// - `*** No help for <path>` for help misses
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DefaultConfig;

impl ShellConfig for DefaultConfig {
    const MSG_INTRO: &'static str = "";
    const MSG_UNKNOWN: &'static str = "*** Unknown syntax: ";
    const MSG_NO_HELP: &'static str = "*** No help for ";
    const REPEAT_LAST_ON_EMPTY: bool = true;
}

/// Configuration for shells where replaying a command by accident is harmful.
///
/// Same messages as [`DefaultConfig`], but an empty line does nothing.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct QuietConfig;

impl ShellConfig for QuietConfig {
    const MSG_INTRO: &'static str = "";
    const MSG_UNKNOWN: &'static str = "*** Unknown syntax: ";
    const MSG_NO_HELP: &'static str = "*** No help for ";
    const REPEAT_LAST_ON_EMPTY: bool = false;
}
