//! Character I/O between the shell and its host terminal.
//!
//! The shell reads keystrokes and writes echo, prompts, help text and command
//! output through `CharIo`. Hosts wrap a UART, a pty or an in-memory buffer.

/// Character-level terminal I/O.
///
/// Output methods should buffer rather than block; the shell writes several
/// small fragments per keystroke.
pub trait CharIo {
    /// Platform-specific error type
    type Error;

    /// Read one character without blocking.
    ///
    /// `Ok(None)` means nothing is available yet.
    fn get_char(&mut self) -> Result<Option<char>, Self::Error>;

    /// Write a single character.
    fn put_char(&mut self, c: char) -> Result<(), Self::Error>;

    /// Write a string. Defaults to repeated `put_char()`.
    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        for c in s.chars() {
            self.put_char(c)?;
        }
        Ok(())
    }

    /// Write a string followed by CRLF.
    fn write_line(&mut self, s: &str) -> Result<(), Self::Error> {
        self.write_str(s)?;
        self.write_str("\r\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Capture {
        out: heapless::String<32>,
    }

    impl CharIo for Capture {
        type Error = ();

        fn get_char(&mut self) -> Result<Option<char>, ()> {
            Ok(None)
        }

        fn put_char(&mut self, c: char) -> Result<(), ()> {
            self.out.push(c).map_err(|_| ())
        }
    }

    #[test]
    fn test_default_write_methods() {
        let mut io = Capture {
            out: heapless::String::new(),
        };
        io.write_str("ab").unwrap();
        io.write_line("c").unwrap();
        assert_eq!(io.out.as_str(), "abc\r\n");
        assert_eq!(io.get_char(), Ok(None));
    }
}
