//! Shared test helpers to reduce duplication across integration tests.

#![allow(dead_code)]

#[allow(clippy::duplicate_mod)]
#[path = "fixtures/mod.rs"]
pub mod fixtures;

pub use fixtures::{MockHandler, MockIo, TEST_TREE};
use nested_shell::Shell;
use nested_shell::config::DefaultConfig;

pub type TestShell = Shell<MockIo, MockHandler, DefaultConfig>;

// ============================================================================
// Shell Creation Helpers
// ============================================================================

/// Create an activated shell with cleared output.
pub fn create_test_shell() -> TestShell {
    let mut shell = Shell::new(&TEST_TREE, MockHandler::new(), MockIo::new()).unwrap();
    shell.activate().unwrap();
    shell.io_mut().clear_output();
    shell
}

// ============================================================================
// Command Execution Helpers
// ============================================================================

/// Type a command, press Enter, and return the output.
pub fn execute_command(shell: &mut TestShell, cmd: &str) -> String {
    shell.io_mut().clear_output();

    for c in cmd.chars() {
        shell.process_char(c).unwrap();
    }

    if !cmd.ends_with('\n') {
        shell.process_char('\n').unwrap();
    }

    shell.io_mut().output()
}

/// Type input without executing (no trailing newline).
pub fn type_input(shell: &mut TestShell, input: &str) {
    for c in input.chars() {
        shell.process_char(c).unwrap();
    }
}

/// Press Tab and return the output it produced.
pub fn press_tab(shell: &mut TestShell) -> String {
    shell.io_mut().clear_output();
    shell.process_char('\t').unwrap();
    shell.io_mut().output()
}

/// Press Enter.
pub fn press_enter(shell: &mut TestShell) {
    shell.process_char('\n').unwrap();
}

/// Press Ctrl-D.
pub fn press_ctrl_d(shell: &mut TestShell) {
    shell.process_char('\x04').unwrap();
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Assert that output contains all expected strings.
pub fn assert_contains_all(output: &str, expected: &[&str]) {
    for exp in expected {
        assert!(
            output.contains(exp),
            "Expected '{}' in output, got: {:?}",
            exp,
            output
        );
    }
}

/// Assert that output does NOT contain any of the strings.
pub fn assert_contains_none(output: &str, forbidden: &[&str]) {
    for forbid in forbidden {
        assert!(
            !output.contains(forbid),
            "Did not expect '{}' in output, got: {:?}",
            forbid,
            output
        );
    }
}

/// Assert that output ends with the shell prompt.
pub fn assert_prompt(output: &str) {
    assert!(
        output.ends_with("(Test) "),
        "Expected output to end with prompt, got: {:?}",
        output
    );
}
