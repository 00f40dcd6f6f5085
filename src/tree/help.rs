//! Help resolution.
//!
//! `help <path>` walks the tree exactly like dispatch, one token per level, and
//! returns documentation for the node the path ends on. An explicit
//! [`HelpTopic`](super::HelpTopic) registered on the parent wins over the
//! child's own documentation, and is the fallback when nothing deeper along
//! the path is documented. A topic need not name a child: help-only topics
//! are reachable by name. Unknown paths yield `None`; the caller renders the
//! "no help" message.

use super::path::split_head;
use super::{Branch, Node, lookup};

/// Resolve documentation for `path` below `root`.
///
/// - Empty path: the root's own documentation
/// - Path ending on a child: the parent's topic for it, else the child's doc
/// - Deeper path with no documentation: the nearest ancestor topic on the way
/// - Token naming a help-only topic: that topic
/// - Any other token not found at its level: `None`
///
/// Built-in commands (`help`, `exit`, `EOF`) resolve at top level.
pub fn help(path: &str, root: &'static Branch) -> Option<&'static str> {
    let text = help_at(path, Node::Branch(root), true);
    if text.is_none() {
        log::debug!("no help for {:?}", path);
    }
    text
}

fn help_at(path: &str, context: Node, at_root: bool) -> Option<&'static str> {
    let (head, rest) = split_head(path);
    if head.is_empty() {
        return context.doc();
    }

    let topic = match context {
        Node::Branch(branch) => branch.topic(head),
        Node::Leaf(_) => None,
    };

    let Some(child) = lookup(context, at_root, head) else {
        return topic;
    };

    if rest.is_empty() {
        return topic.or(child.doc());
    }

    help_at(rest, *child, false).or(topic)
}
