//! # nested-shell
//!
//! Command dispatch, help and tab completion for nested line-based shells.
//!
//! Commands form a tree of named branches and leaves, and every input line is
//! a whitespace-separated path into it: `config set key value` walks branch
//! `config`, reaches leaf `set`, and hands it `"key value"`. The same walk
//! answers `help config set` and drives Tab completion.
//!
//! **Key features:**
//! - **Static trees** - const-initializable, validated once, never mutated
//! - **Explicit leaf/branch discriminator** - a failing action is never
//!   mistaken for an unknown command
//! - **Completion providers** - per-leaf argument completion, run in order
//! - **Index-addressed completion** - plugs into readline-style editors
//! - **Bounded memory** - `heapless` buffers, no heap
//!
//! ## Optional Features
//!
//! - `completion` - Tab completion (default). Without it the engine returns
//!   no candidates and Tab rings the bell.
//!
//! This library is `no_std` compatible.

#![no_std]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

// ============================================================================
// Module Declarations
// ============================================================================

pub mod config;
pub mod error;
pub mod io;
pub mod response;
pub mod shell;
pub mod tree;

// ============================================================================
// Re-exports - Public API
// ============================================================================

pub use config::{DefaultConfig, QuietConfig, ShellConfig};
pub use error::CliError;
pub use io::CharIo;
pub use response::{Outcome, Response};
pub use shell::handler::CommandHandler;
pub use shell::{CompletionSession, Session, Shell, ShellState};
pub use tree::completion::{Candidate, Candidates, complete, complete_from_list};
pub use tree::help::help;
pub use tree::{Branch, CompletionProvider, HelpTopic, Leaf, Node};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
