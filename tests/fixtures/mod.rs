//! Test fixtures and utilities for nested-shell testing.
//!
//! Provides:
//! - `MockIo`: Test implementation of CharIo trait
//! - `MockHandler`: Command handler that records every invocation
//! - `TEST_TREE`: Nested command tree with topics and completion providers
//! - Helper functions for common test scenarios

#![allow(dead_code)]

use nested_shell::config::DefaultConfig;
use nested_shell::tree::{Branch, HelpTopic, Leaf, Node};
use nested_shell::{Candidate, Candidates, CharIo, CliError, CommandHandler, Response, complete_from_list};
use std::collections::VecDeque;

// ============================================================================
// MockIo - Test I/O Implementation
// ============================================================================

/// Mock I/O for testing.
///
/// Provides in-memory character I/O with input queue and output capture.
/// Uses `std` types (VecDeque, Vec) since tests run with std support.
#[derive(Debug, Default)]
pub struct MockIo {
    /// Input queue (simulates user typing)
    input: VecDeque<char>,

    /// Output capture (collects all output)
    output: Vec<char>,
}

impl MockIo {
    /// Create new MockIo with empty buffers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create MockIo with pre-loaded input string.
    pub fn with_input(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            output: Vec::new(),
        }
    }

    /// Add input to queue (simulates user typing).
    pub fn push_input(&mut self, s: &str) {
        self.input.extend(s.chars());
    }

    /// Get captured output as string.
    pub fn output(&self) -> String {
        self.output.iter().collect()
    }

    /// Clear output buffer.
    pub fn clear_output(&mut self) {
        self.output.clear();
    }

    /// Check if input queue is empty.
    pub fn input_empty(&self) -> bool {
        self.input.is_empty()
    }
}

impl CharIo for MockIo {
    type Error = ();

    fn get_char(&mut self) -> Result<Option<char>, Self::Error> {
        Ok(self.input.pop_front())
    }

    fn put_char(&mut self, c: char) -> Result<(), Self::Error> {
        self.output.push(c);
        Ok(())
    }

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        self.output.extend(s.chars());
        Ok(())
    }
}

// ============================================================================
// MockHandler - Recording Command Handler
// ============================================================================

/// Handler for TEST_TREE leaves. Records `(id, args)` for every call.
#[derive(Debug, Default)]
pub struct MockHandler {
    /// Leaf invocations in order
    pub calls: Vec<(String, String)>,

    /// Number of times the unknown-command fallback ran
    pub unknown_calls: usize,
}

impl MockHandler {
    /// Create handler with no recorded calls.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded leaf ids, in call order.
    pub fn ids(&self) -> Vec<&str> {
        self.calls.iter().map(|(id, _)| id.as_str()).collect()
    }
}

impl CommandHandler<DefaultConfig> for MockHandler {
    fn execute(&mut self, id: &str, args: &str) -> Result<Response<DefaultConfig>, CliError> {
        self.calls.push((id.to_string(), args.to_string()));

        match id {
            "echo" => Ok(Response::success(args)),
            "fail" => Err(CliError::failed("disk on fire")),
            "quit" => Ok(Response::terminate("bye")),
            "noop" => Ok(Response::not_applicable()),
            "sys_status" => Ok(Response::success("System OK")),
            "sys_start" => Ok(Response::success("Started")),
            "sys_stop" => Ok(Response::silent()),
            "config_get" => {
                if args.is_empty() {
                    Err(CliError::invalid_argument("expected key"))
                } else {
                    Ok(Response::success(args))
                }
            }
            "config_set" => Ok(Response::success("ok")),
            "net_show" => Ok(Response::success("eth0 up\r\nwlan0 down").indented()),
            _ => Ok(Response::not_applicable()),
        }
    }

    fn unknown(&mut self, line: &str) -> Response<DefaultConfig> {
        self.unknown_calls += 1;
        let msg = format!("*** Unknown syntax: {}", line);
        Response::success(&msg)
    }
}

// ============================================================================
// Completion providers
// ============================================================================

/// Configuration keys.
pub const KEYS: &[&str] = &["alpha", "baud", "beta"];

/// Offer configuration keys matching the partial token.
pub fn complete_keys(partial: &str, out: &mut Candidates) -> Result<(), CliError> {
    complete_from_list(KEYS, partial, out)
}

/// Offer a directory-style candidate that does not finish the token.
pub fn complete_paths(partial: &str, out: &mut Candidates) -> Result<(), CliError> {
    if "profiles/".starts_with(partial) {
        out.push(Candidate::partial("profiles/")?)
            .map_err(|_| CliError::BufferFull)?;
    }
    Ok(())
}

/// Appends a candidate, then fails.
pub fn complete_broken(_partial: &str, out: &mut Candidates) -> Result<(), CliError> {
    out.push(Candidate::token("garbage")?)
        .map_err(|_| CliError::BufferFull)?;
    Err(CliError::failed("backend unavailable"))
}

/// Transport modes, offered regardless of the partial token.
pub fn complete_modes(_partial: &str, out: &mut Candidates) -> Result<(), CliError> {
    complete_from_list(&["fast", "slow"], "", out)
}

// ============================================================================
// TEST_TREE
// ============================================================================

pub const ECHO: Leaf = Leaf::new("echo", "echo").doc("Echo arguments");
pub const FAIL: Leaf = Leaf::new("fail", "fail").doc("Always fails");
pub const QUIT: Leaf = Leaf::new("quit", "quit").doc("End the session with a message");
pub const NOOP: Leaf = Leaf::new("noop", "noop");
pub const SECRET: Leaf = Leaf::new("secret", "secret").hidden();

pub const SYS_STATUS: Leaf = Leaf::new("status", "sys_status").doc("Show system status");
pub const SYS_START: Leaf = Leaf::new("start", "sys_start").doc("Start the system");
pub const SYS_STOP: Leaf = Leaf::new("stop", "sys_stop");

pub const DIR_SYS: Branch = Branch::new("sys").doc("System commands").children(&[
    Node::Leaf(&SYS_STATUS),
    Node::Leaf(&SYS_START),
    Node::Leaf(&SYS_STOP),
]);

pub const CONFIG_GET: Leaf = Leaf::new("get", "config_get")
    .doc("Read a configuration value")
    .completers(&[complete_keys]);

pub const CONFIG_SET: Leaf = Leaf::new("set", "config_set")
    .doc("Write a configuration value")
    .completers(&[complete_keys, complete_broken, complete_modes]);

pub const CONFIG_LOAD: Leaf = Leaf::new("load", "config_load").completers(&[complete_paths]);

pub const NET_SHOW: Leaf = Leaf::new("show", "net_show").doc("Show network interfaces");

pub const DIR_NET: Branch = Branch::new("net")
    .doc("Network settings")
    .children(&[Node::Leaf(&NET_SHOW)]);

pub const DIR_CONFIG: Branch = Branch::new("config")
    .doc("Configuration commands")
    .children(&[
        Node::Leaf(&CONFIG_GET),
        Node::Leaf(&CONFIG_SET),
        Node::Leaf(&CONFIG_LOAD),
        Node::Branch(&DIR_NET),
    ])
    .topics(&[HelpTopic::new("get", "get <key>\r\nPrint the value stored under <key>.")]);

/// Root branch for testing.
///
/// Structure:
/// ```text
/// Test              (help-only topic `intro`)
/// ├── echo
/// ├── fail          (handler error)
/// ├── quit          (terminates)
/// ├── noop          (no verdict)
/// ├── secret        (hidden)
/// ├── sys/
/// │   ├── status
/// │   ├── start
/// │   └── stop      (undocumented, silent)
/// └── config/       (topic for `get`)
///     ├── get       [keys]
///     ├── set       [keys, broken, modes]
///     ├── load      [paths]
///     └── net/
///         └── show  (indented output)
/// ```
pub const TEST_TREE: Branch = Branch::new("Test")
    .doc("Test shell")
    .children(&[
        Node::Leaf(&ECHO),
        Node::Leaf(&FAIL),
        Node::Leaf(&QUIT),
        Node::Leaf(&NOOP),
        Node::Leaf(&SECRET),
        Node::Branch(&DIR_SYS),
        Node::Branch(&DIR_CONFIG),
    ])
    .topics(&[HelpTopic::new("intro", "About the test shell")]);

// ============================================================================
// Helper Functions
// ============================================================================

/// Create MockIo with input ending in newline.
pub fn io_with_command(cmd: &str) -> MockIo {
    let mut input = String::from(cmd);
    if !input.ends_with('\n') {
        input.push('\n');
    }
    MockIo::with_input(&input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_io_basic() {
        let mut io = MockIo::new();

        io.push_input("hi");
        assert_eq!(io.get_char().unwrap(), Some('h'));
        assert_eq!(io.get_char().unwrap(), Some('i'));
        assert_eq!(io.get_char().unwrap(), None);

        io.put_char('x').unwrap();
        io.write_str("yz").unwrap();
        assert_eq!(io.output(), "xyz");
    }

    #[test]
    fn test_tree_is_valid() {
        assert_eq!(TEST_TREE.validate(), Ok(()));
    }
}
