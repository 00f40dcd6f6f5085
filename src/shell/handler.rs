//! Command handler trait for executing leaf actions.
//!
//! Implements the execution side of the metadata/execution separation pattern:
//! the tree names a leaf's `id`, the handler runs it. The handler is owned by
//! the shell, so it is the place for per-session mutable state.

use core::fmt::Write;

use crate::config::ShellConfig;
use crate::error::CliError;
use crate::response::Response;

/// Leaf action dispatcher.
///
/// # Example
///
/// ```rust,ignore
/// struct MyHandler { led: bool }
///
/// impl CommandHandler<DefaultConfig> for MyHandler {
///     fn execute(&mut self, id: &str, args: &str) -> Result<Response<DefaultConfig>, CliError> {
///         match id {
///             "led_on" => { self.led = true; Ok(Response::success("LED on")) }
///             "echo" => Ok(Response::success(args)),
///             "shutdown" => Ok(Response::terminate("Goodbye")),
///             _ => Ok(Response::not_applicable()),
///         }
///     }
/// }
/// ```
pub trait CommandHandler<C: ShellConfig> {
    /// Run the leaf identified by `id` with the rest of the line as `args`.
    ///
    /// `args` is everything after the leaf's name, minus the separating
    /// whitespace. An `Err` is a genuine failure and reaches the caller of
    /// [`Shell::execute`](crate::shell::Shell::execute) unchanged.
    fn execute(&mut self, id: &str, args: &str) -> Result<Response<C>, CliError>;

    /// Fallback for input that does not resolve to a leaf.
    ///
    /// Receives the original line. The session always continues afterwards,
    /// whatever outcome the returned response carries.
    fn unknown(&mut self, line: &str) -> Response<C> {
        let mut msg: heapless::String<{ crate::config::MAX_RESPONSE }> = heapless::String::new();
        // Overlong lines are cut off by the bounded buffer
        let _ = write!(msg, "{}{}", C::MSG_UNKNOWN, line);
        Response::success(&msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DefaultConfig;
    use crate::response::Outcome;

    #[derive(Default)]
    struct Counter {
        calls: usize,
    }

    impl CommandHandler<DefaultConfig> for Counter {
        fn execute(&mut self, id: &str, args: &str) -> Result<Response<DefaultConfig>, CliError> {
            self.calls += 1;
            match id {
                "echo" => Ok(Response::success(args)),
                "quit" => Ok(Response::terminate("")),
                "fail" => Err(CliError::failed("boom")),
                _ => Ok(Response::not_applicable()),
            }
        }
    }

    #[test]
    fn test_handler_dispatch_by_id() {
        let mut handler = Counter::default();

        let response = handler.execute("echo", "hi there").unwrap();
        assert_eq!(response.message.as_str(), "hi there");
        assert_eq!(response.outcome, Outcome::Continue);

        let response = handler.execute("quit", "").unwrap();
        assert_eq!(response.outcome, Outcome::Terminate);

        assert_eq!(handler.execute("fail", ""), Err(CliError::failed("boom")));
        assert_eq!(handler.calls, 3);
    }

    #[test]
    fn test_default_unknown_message() {
        let mut handler = Counter::default();
        let response = handler.unknown("bogus  line");
        assert_eq!(response.message.as_str(), "*** Unknown syntax: bogus  line");
        assert_eq!(response.outcome, Outcome::Continue);
        assert_eq!(handler.calls, 0);
    }
}
