//! Line dispatch.
//!
//! Resolution and invocation are separate steps. [`resolve`] walks the tree
//! and returns plain data describing what the line names; a miss is a
//! [`Resolution::Unknown`], never an error. [`dispatch`] then invokes the
//! resolved leaf, so an error raised by a handler cannot be mistaken for a
//! missing command.

use crate::config::ShellConfig;
use crate::error::CliError;
use crate::response::{Outcome, Response};
use crate::shell::handler::CommandHandler;
use crate::tree::path::split_head;
use crate::tree::{Branch, Builtin, Leaf, Node};

/// What an input line names in the tree.
#[derive(Debug, Clone)]
pub enum Resolution<'a> {
    /// A built-in command with its argument string
    Builtin(Builtin, &'a str),

    /// A tree leaf with its argument string
    Leaf(&'static Leaf, &'a str),

    /// Nothing invocable: unknown token, or a path ending on a branch
    Unknown,
}

// Leaves compare by id; const-promoted nodes have no stable address.
impl PartialEq for Resolution<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Resolution::Builtin(a, x), Resolution::Builtin(b, y)) => a == b && x == y,
            (Resolution::Leaf(a, x), Resolution::Leaf(b, y)) => a.id == b.id && x == y,
            (Resolution::Unknown, Resolution::Unknown) => true,
            _ => false,
        }
    }
}

/// Resolve `line` against `root`.
///
/// Splits off one token per level. A leaf receives the remainder as its
/// argument string; a branch recurses into the remainder. Built-in names are
/// only recognized at top level.
pub fn resolve<'a>(root: &'static Branch, line: &'a str) -> Resolution<'a> {
    let (head, rest) = split_head(line);
    if let Some(builtin) = Builtin::from_name(head) {
        return Resolution::Builtin(builtin, rest);
    }
    resolve_in(root, head, rest)
}

fn resolve_in<'a>(context: &'static Branch, head: &str, rest: &'a str) -> Resolution<'a> {
    match context.find_child(head) {
        None => Resolution::Unknown,
        Some(Node::Leaf(leaf)) => Resolution::Leaf(leaf, rest),
        // A branch alone is not invocable
        Some(Node::Branch(_)) if rest.is_empty() => Resolution::Unknown,
        Some(Node::Branch(branch)) => {
            let (head, rest) = split_head(rest);
            resolve_in(branch, head, rest)
        }
    }
}

/// Resolve `line` and run whatever it names through `handler`.
///
/// - Leaf: the handler's response, outcome included; handler errors are
///   returned unchanged
/// - Unknown: `handler.unknown(line)` with the original line, outcome forced
///   to `Continue`
/// - `exit` / `EOF`: an empty response with `Terminate`
///
/// `help` is answered by the shell, not here; it resolves as `Unknown`
/// when this function is used on its own.
pub fn dispatch<C, H>(root: &'static Branch, line: &str, handler: &mut H) -> Result<Response<C>, CliError>
where
    C: ShellConfig,
    H: CommandHandler<C>,
{
    match resolve(root, line) {
        Resolution::Leaf(leaf, args) => {
            log::debug!("dispatch {:?} -> leaf {:?}", line, leaf.id);
            handler.execute(leaf.id, args)
        }
        Resolution::Builtin(Builtin::Exit | Builtin::EndOfInput, _) => {
            Ok(Response::terminate(""))
        }
        Resolution::Builtin(Builtin::Help, _) | Resolution::Unknown => {
            log::debug!("dispatch {:?} -> unknown", line);
            let mut response = handler.unknown(line);
            response.outcome = Outcome::Continue;
            Ok(response)
        }
    }
}
