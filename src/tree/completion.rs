//! Tab completion for command paths and leaf arguments.
//!
//! The engine tokenizes the line left of the cursor and walks the tree with the
//! same one-token-per-level rule as dispatch. Interior tokens must name a child
//! exactly; the final token is the partial one being completed:
//!
//! - `help ...` lines complete node names only, never leaf arguments
//! - otherwise a leaf with completion providers gets their concatenated output
//! - otherwise child names starting with the partial token are offered
//!
//! Every request recomputes candidates from scratch.
//! Uses stub function pattern - module always exists, [`complete`] returns
//! nothing when the `completion` feature is disabled.

#![cfg_attr(not(feature = "completion"), allow(unused_variables, unused_imports))]

use core::fmt;

use super::path::completion_tokens;
use super::{Branch, Builtin, Leaf, Node, listed, lookup};
use crate::config::{MAX_CANDIDATES, MAX_NAME};
use crate::error::CliError;

/// One completion of the token under the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Replacement text for the partial token
    pub text: heapless::String<MAX_NAME>,

    /// Whole token: rendered with a trailing separator
    pub complete: bool,
}

impl Candidate {
    /// Candidate that finishes a token (rendered as `"text "`).
    pub fn token(text: &str) -> Result<Self, CliError> {
        Self::build(text, true)
    }

    /// Candidate that extends the token without finishing it (e.g. `"dir/"`).
    pub fn partial(text: &str) -> Result<Self, CliError> {
        Self::build(text, false)
    }

    fn build(text: &str, complete: bool) -> Result<Self, CliError> {
        let mut s = heapless::String::new();
        s.push_str(text).map_err(|_| CliError::BufferFull)?;
        Ok(Self { text: s, complete })
    }

    /// Candidate text without separator.
    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)?;
        if self.complete {
            f.write_str(" ")?;
        }
        Ok(())
    }
}

/// Ordered candidates from one completion request.
pub type Candidates = heapless::Vec<Candidate, MAX_CANDIDATES>;

/// Append every entry of `names` that starts with `partial` as a whole token.
///
/// Convenience for providers completing from a fixed set (enum values, modes).
pub fn complete_from_list(
    names: &[&str],
    partial: &str,
    out: &mut Candidates,
) -> Result<(), CliError> {
    for name in names.iter().filter(|name| name.starts_with(partial)) {
        out.push(Candidate::token(name)?)
            .map_err(|_| CliError::BufferFull)?;
    }
    Ok(())
}

// ============================================================================
// Feature-enabled implementation
// ============================================================================

/// Compute completion candidates for `buffer` with the cursor at byte `cursor`.
///
/// Never fails: overflow and provider errors shrink the result instead.
///
/// # Examples
///
/// ```rust,ignore
/// // Branch `a` with single leaf child `b`
/// let candidates = complete(&ROOT, "a ", 2);
/// assert_eq!(candidates[0].to_string(), "b ");
///
/// // Interior token mismatch stops the walk
/// assert!(complete(&ROOT, "a x ", 4).is_empty());
/// ```
#[cfg(feature = "completion")]
pub fn complete(root: &'static Branch, buffer: &str, cursor: usize) -> Candidates {
    let mut out = Candidates::new();

    let tokens = match completion_tokens(buffer, cursor) {
        Ok(tokens) => tokens,
        Err(e) => {
            log::warn!("completion skipped: {}", e);
            return out;
        }
    };

    let root = Node::Branch(root);
    let result = match tokens.as_slice() {
        [keyword, path @ ..]
            if !path.is_empty() && Builtin::from_name(keyword) == Some(Builtin::Help) =>
        {
            traverse_help(path, root, true, &mut out)
        }
        all => traverse_command(all, root, true, &mut out),
    };

    if let Err(e) = result {
        log::warn!("completion truncated at {} candidates: {}", out.len(), e);
    }

    out
}

/// Help mode: names only, at whatever depth the path reaches.
#[cfg(feature = "completion")]
fn traverse_help(
    tokens: &[&str],
    context: Node,
    at_root: bool,
    out: &mut Candidates,
) -> Result<(), CliError> {
    match tokens {
        [] => Ok(()),
        [partial] => list_names(context, at_root, partial, out),
        [head, rest @ ..] => match lookup(context, at_root, head) {
            Some(child) => traverse_help(rest, *child, false, out),
            None => {
                log::trace!("help completion stopped at {:?}", head);
                Ok(())
            }
        },
    }
}

/// Command mode: providers at a leaf, names elsewhere.
#[cfg(feature = "completion")]
fn traverse_command(
    tokens: &[&str],
    context: Node,
    at_root: bool,
    out: &mut Candidates,
) -> Result<(), CliError> {
    match tokens {
        [] => Ok(()),
        [partial] => match context {
            Node::Leaf(leaf) if !leaf.completers.is_empty() => run_providers(leaf, partial, out),
            _ => list_names(context, at_root, partial, out),
        },
        [head, rest @ ..] => match lookup(context, at_root, head) {
            Some(child) => traverse_command(rest, *child, false, out),
            None => {
                log::trace!("completion stopped at {:?}", head);
                Ok(())
            }
        },
    }
}

#[cfg(feature = "completion")]
fn list_names(
    context: Node,
    at_root: bool,
    partial: &str,
    out: &mut Candidates,
) -> Result<(), CliError> {
    for node in listed(context, at_root) {
        let name = node.name();
        if name.starts_with(partial) {
            out.push(Candidate::token(name)?)
                .map_err(|_| CliError::BufferFull)?;
        }
    }
    Ok(())
}

/// A failing provider contributes nothing; the others still run.
///
/// A full candidate list is not a provider failure: what was collected is
/// kept and the request ends with `BufferFull`.
#[cfg(feature = "completion")]
fn run_providers(leaf: &Leaf, partial: &str, out: &mut Candidates) -> Result<(), CliError> {
    for provider in leaf.completers {
        let mark = out.len();
        if let Err(e) = provider(partial, out) {
            if out.is_full() {
                return Err(CliError::BufferFull);
            }
            log::warn!("completion provider for {:?} failed: {}", leaf.name, e);
            out.truncate(mark);
        }
    }
    Ok(())
}

// ============================================================================
// Feature-disabled stub implementation
// ============================================================================

/// Stub implementation when completion feature is disabled.
///
/// Returns no candidates.
#[cfg(not(feature = "completion"))]
pub fn complete(_root: &'static Branch, _buffer: &str, _cursor: usize) -> Candidates {
    Candidates::new()
}

// ============================================================================
// Tests
// ============================================================================
