//! Command tree data structures.
//!
//! A tree is a root [`Branch`] whose children are further branches or invocable
//! [`Leaf`] nodes. Every node is const-initializable, so a tree is assembled once
//! (usually in a `const` item) and never mutated afterwards. The Leaf/Branch
//! discriminator is the [`Node`] variant, fixed when the tree is written.
//!
//! Leaves carry metadata only. Their action runs through
//! [`CommandHandler`](crate::shell::handler::CommandHandler), keyed by the
//! leaf's `id`, which keeps per-session state out of the shared tree.
//!
//! ```rust,ignore
//! const GET: Leaf = Leaf::new("get", "config_get")
//!     .doc("Read a configuration value")
//!     .completers(&[complete_keys]);
//! const CONFIG: Branch = Branch::new("config")
//!     .doc("Configuration commands")
//!     .children(&[Node::Leaf(&GET)]);
//! const ROOT: Branch = Branch::new("demo").children(&[Node::Branch(&CONFIG)]);
//! ```

use crate::config::MAX_NAME;
use crate::error::CliError;

pub mod completion;
pub mod help;
pub mod path;

pub use completion::{Candidate, Candidates};

/// Completion provider attached to a leaf.
///
/// Receives the partial token under the cursor and appends candidates to `out`.
/// Providers filter and transform as they see fit; their output is used as-is.
/// An `Err` discards whatever this provider appended.
pub type CompletionProvider = fn(partial: &str, out: &mut Candidates) -> Result<(), CliError>;

/// Invocable terminal node.
#[derive(Debug, Clone)]
pub struct Leaf {
    /// Name typed by the user (unique among siblings)
    pub name: &'static str,

    /// Identifier passed to the command handler
    pub id: &'static str,

    /// Documentation shown by `help`
    pub doc: Option<&'static str>,

    /// Completion providers, invoked in order
    pub completers: &'static [CompletionProvider],

    /// Leave this leaf out of completion listings
    pub hidden: bool,
}

impl Leaf {
    /// Leaf with no documentation and no completion providers.
    pub const fn new(name: &'static str, id: &'static str) -> Self {
        Self {
            name,
            id,
            doc: None,
            completers: &[],
            hidden: false,
        }
    }

    /// Attach documentation.
    pub const fn doc(mut self, doc: &'static str) -> Self {
        self.doc = Some(doc);
        self
    }

    /// Register the leaf's completion providers, in invocation order.
    ///
    /// One call sets the whole ordered list; a later call replaces it rather
    /// than appending. List every provider in a single slice:
    ///
    /// ```rust,ignore
    /// const SET: Leaf = Leaf::new("set", "set").completers(&[keys, values]);
    /// ```
    pub const fn completers(mut self, completers: &'static [CompletionProvider]) -> Self {
        self.completers = completers;
        self
    }

    /// Hide from completion listings. The leaf still dispatches.
    pub const fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }
}

/// Explicit help text for one child of a branch.
///
/// Takes precedence over the child's own documentation.
#[derive(Debug, Clone)]
pub struct HelpTopic {
    /// Child name this topic documents
    pub name: &'static str,

    /// Help text
    pub text: &'static str,
}

impl HelpTopic {
    /// Create a help topic.
    pub const fn new(name: &'static str, text: &'static str) -> Self {
        Self { name, text }
    }
}

/// Node grouping named children.
#[derive(Debug, Clone)]
pub struct Branch {
    /// Branch name (unused for the root)
    pub name: &'static str,

    /// Documentation shown by `help`
    pub doc: Option<&'static str>,

    /// Child nodes in listing order
    pub children: &'static [Node],

    /// Explicit help overrides for children
    pub topics: &'static [HelpTopic],
}

impl Branch {
    /// Empty branch.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            doc: None,
            children: &[],
            topics: &[],
        }
    }

    /// Attach documentation.
    pub const fn doc(mut self, doc: &'static str) -> Self {
        self.doc = Some(doc);
        self
    }

    /// Set children. Slice order is listing order.
    pub const fn children(mut self, children: &'static [Node]) -> Self {
        self.children = children;
        self
    }

    /// Set explicit help topics for children.
    pub const fn topics(mut self, topics: &'static [HelpTopic]) -> Self {
        self.topics = topics;
        self
    }

    /// Find child node by exact, case-sensitive name.
    pub fn find_child(&self, name: &str) -> Option<&'static Node> {
        self.children.iter().find(|child| child.name() == name)
    }

    /// Explicit help text registered for `name`.
    pub fn topic(&self, name: &str) -> Option<&'static str> {
        self.topics
            .iter()
            .find(|topic| topic.name == name)
            .map(|topic| topic.text)
    }

    /// Check this branch as a tree root.
    ///
    /// Rejects empty or whitespace-containing names, names longer than
    /// `MAX_NAME`, duplicate sibling names at any depth, and top-level names
    /// that shadow a built-in command.
    pub fn validate(&self) -> Result<(), CliError> {
        for child in self.children {
            if Builtin::from_name(child.name()).is_some() {
                return Err(CliError::ReservedName(child.name()));
            }
        }
        validate_level(self)
    }
}

fn validate_level(branch: &Branch) -> Result<(), CliError> {
    for (i, child) in branch.children.iter().enumerate() {
        let name = child.name();
        if name.is_empty() || name.chars().any(char::is_whitespace) {
            return Err(CliError::InvalidName(name));
        }
        if name.len() > MAX_NAME {
            return Err(CliError::NameTooLong(name));
        }
        if branch.children[..i].iter().any(|prev| prev.name() == name) {
            return Err(CliError::DuplicateName(name));
        }
        if let Node::Branch(sub) = child {
            validate_level(sub)?;
        }
    }
    Ok(())
}

/// Tree node: exactly one of leaf or branch.
#[derive(Debug, Copy, Clone)]
pub enum Node {
    /// Invocable leaf
    Leaf(&'static Leaf),

    /// Branch with children
    Branch(&'static Branch),
}

impl Node {
    /// Check if this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    /// Check if this node is a branch.
    pub fn is_branch(&self) -> bool {
        matches!(self, Node::Branch(_))
    }

    /// Get node name.
    pub fn name(&self) -> &'static str {
        match self {
            Node::Leaf(leaf) => leaf.name,
            Node::Branch(branch) => branch.name,
        }
    }

    /// Get node documentation.
    pub fn doc(&self) -> Option<&'static str> {
        match self {
            Node::Leaf(leaf) => leaf.doc,
            Node::Branch(branch) => branch.doc,
        }
    }

    /// Children of a branch; empty for a leaf.
    pub fn children(&self) -> &'static [Node] {
        match self {
            Node::Leaf(_) => &[],
            Node::Branch(branch) => branch.children,
        }
    }

    fn is_listed(&self) -> bool {
        match self {
            Node::Leaf(leaf) => !leaf.hidden,
            Node::Branch(_) => true,
        }
    }
}

// ============================================================================
// Built-in commands
// ============================================================================

/// Commands every shell answers at top level, ahead of the tree.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Builtin {
    /// `help [path]`
    Help,

    /// `exit`
    Exit,

    /// End-of-input sentinel (`EOF`), sent when the input stream closes
    EndOfInput,
}

/// Token the host submits when the input stream closes.
pub const EOF_SENTINEL: &str = "EOF";

impl Builtin {
    /// Match a top-level token against the reserved names.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "help" => Some(Builtin::Help),
            "exit" => Some(Builtin::Exit),
            EOF_SENTINEL => Some(Builtin::EndOfInput),
            _ => None,
        }
    }
}

const HELP_LEAF: Leaf = Leaf::new("help", "help")
    .doc("help [command ...]\r\nShow documentation for a command path.");

const EXIT_LEAF: Leaf = Leaf::new("exit", "exit").doc("Leave the shell.");

const EOF_LEAF: Leaf = Leaf::new(EOF_SENTINEL, EOF_SENTINEL)
    .doc("End of input; leaves the shell.")
    .hidden();

/// Built-in commands as tree nodes, for help and completion at top level.
pub const BUILTINS: &[Node] = &[
    Node::Leaf(&HELP_LEAF),
    Node::Leaf(&EXIT_LEAF),
    Node::Leaf(&EOF_LEAF),
];

/// Find `name` at one level. The root level answers built-ins first.
pub(crate) fn lookup(context: Node, at_root: bool, name: &str) -> Option<&'static Node> {
    if at_root && Builtin::from_name(name).is_some() {
        return BUILTINS.iter().find(|node| node.name() == name);
    }
    context.children().iter().find(|child| child.name() == name)
}

/// Names offered for completion at one level, in listing order.
pub(crate) fn listed(context: Node, at_root: bool) -> impl Iterator<Item = &'static Node> {
    let builtins: &'static [Node] = if at_root { BUILTINS } else { &[] };
    context
        .children()
        .iter()
        .chain(builtins.iter())
        .filter(|node| node.is_listed())
}
