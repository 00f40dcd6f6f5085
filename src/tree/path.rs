//! Tokenizing input lines into tree paths.
//!
//! Dispatch and help consume a line one token at a time with [`split_head`]:
//! the first whitespace-delimited token selects a child, and the remainder is
//! either the next level's input or, at a leaf, the argument string. Completion
//! tokenizes everything left of the cursor at once with [`completion_tokens`].
//!
//! # Example
//!
//! ```rust,ignore
//! assert_eq!(split_head("config  set key value"), ("config", "set key value"));
//! assert_eq!(completion_tokens("config s", 8)?.as_slice(), &["config", "s"]);
//! assert_eq!(completion_tokens("config ", 7)?.as_slice(), &["config", ""]);
//! ```

use crate::config::MAX_TOKENS;
use crate::error::CliError;

/// Tokens left of the cursor. The last entry is the token being typed.
pub type Tokens<'a> = heapless::Vec<&'a str, MAX_TOKENS>;

/// Split `line` into its first token and the remainder.
///
/// Leading whitespace before the head and the whitespace separating head from
/// remainder are dropped; anything after that is returned untouched, trailing
/// whitespace included.
pub fn split_head(line: &str) -> (&str, &str) {
    let line = line.trim_start();
    match line.find(char::is_whitespace) {
        Some(idx) => (&line[..idx], line[idx..].trim_start()),
        None => (line, ""),
    }
}

/// Tokenize `buffer[..cursor]` for completion.
///
/// When the text is empty or ends in whitespace an empty token is appended:
/// the user is starting a new token rather than extending the previous one.
/// A cursor past the end, or inside a multi-byte character, is moved back to
/// the nearest character boundary.
///
/// # Returns
///
/// - `Ok(Tokens)` - at least one token
/// - `Err(CliError::TooManyTokens)` - more than `MAX_TOKENS` tokens
pub fn completion_tokens(buffer: &str, cursor: usize) -> Result<Tokens<'_>, CliError> {
    let typed = &buffer[..floor_char_boundary(buffer, cursor)];

    let mut tokens = Tokens::new();
    for token in typed.split_whitespace() {
        tokens.push(token).map_err(|_| CliError::TooManyTokens)?;
    }

    if typed.is_empty() || typed.ends_with(char::is_whitespace) {
        tokens.push("").map_err(|_| CliError::TooManyTokens)?;
    }

    Ok(tokens)
}

fn floor_char_boundary(s: &str, index: usize) -> usize {
    let mut index = index.min(s.len());
    while !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}
