//! Per-run interactive state.
//!
//! A session lives as long as one shell instance: the prompt derived from the
//! shell's name and the last executed line (replayed on an empty line when the
//! config asks for it). The command tree itself is shared and never changes.

use crate::config::{MAX_INPUT, MAX_PROMPT};
use crate::error::CliError;

/// Prompt and last executed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    prompt: heapless::String<MAX_PROMPT>,
    last_line: heapless::String<MAX_INPUT>,
}

impl Session {
    /// Create a session with prompt `"(<name>) "`.
    ///
    /// # Returns
    ///
    /// - `Err(CliError::BufferFull)` - name does not fit in `MAX_PROMPT`
    pub fn new(name: &str) -> Result<Self, CliError> {
        let mut prompt = heapless::String::new();
        prompt.push('(').map_err(|_| CliError::BufferFull)?;
        prompt.push_str(name).map_err(|_| CliError::BufferFull)?;
        prompt.push_str(") ").map_err(|_| CliError::BufferFull)?;

        Ok(Self {
            prompt,
            last_line: heapless::String::new(),
        })
    }

    /// Current prompt.
    pub fn prompt(&self) -> &str {
        self.prompt.as_str()
    }

    /// Last executed line, if any.
    pub fn last_line(&self) -> Option<&str> {
        if self.last_line.is_empty() {
            None
        } else {
            Some(self.last_line.as_str())
        }
    }

    /// Remember `line` as the last executed line.
    ///
    /// Lines longer than `MAX_INPUT` are not remembered (the previous one is
    /// dropped, so a replay never runs a truncated command).
    pub fn record(&mut self, line: &str) {
        self.last_line.clear();
        if self.last_line.push_str(line).is_err() {
            self.last_line.clear();
        }
    }

    /// Forget the last executed line.
    pub fn clear_last(&mut self) {
        self.last_line.clear();
    }
}
