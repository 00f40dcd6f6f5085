//! Index-addressed completion requests.
//!
//! Line editors commonly ask for completions one at a time: "candidate 0",
//! "candidate 1", ... until told there are no more. `CompletionSession`
//! answers that protocol on top of the completion engine. Index 0 always
//! recomputes; later indices read the cached result of that computation.

use crate::tree::completion::{Candidate, Candidates, complete};
use crate::tree::Branch;

/// Cached candidates for the request in progress.
#[derive(Debug, Default)]
pub struct CompletionSession {
    cached: Option<Candidates>,
}

impl CompletionSession {
    /// Create an adapter with no request in progress.
    pub fn new() -> Self {
        Self { cached: None }
    }

    /// Return candidate `index` for `buffer` with the cursor at `cursor`.
    ///
    /// - `index == 0`: discard any cached result and compute afresh
    /// - `index > 0`: read from the cache built by the last index-0 request
    /// - past the end (or no request in progress): `None`, and the cache is
    ///   dropped
    ///
    /// `buffer` and `cursor` only matter for index 0.
    pub fn candidate(
        &mut self,
        root: &'static Branch,
        buffer: &str,
        cursor: usize,
        index: usize,
    ) -> Option<Candidate> {
        if index == 0 {
            self.cached = Some(complete(root, buffer, cursor));
        }

        let found = self
            .cached
            .as_ref()
            .and_then(|candidates| candidates.get(index))
            .cloned();

        if found.is_none() {
            self.cached = None;
        }
        found
    }

    /// Drop any cached candidates.
    pub fn reset(&mut self) {
        self.cached = None;
    }

    /// True while a request has cached candidates left to hand out.
    pub fn is_active(&self) -> bool {
        self.cached.is_some()
    }
}
