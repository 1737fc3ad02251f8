//! Token and secret reader

use std::collections::VecDeque;
use std::fmt::Display;
use std::io::{BufRead, Write};

use crate::error::{BankError, BankResult};

/// Where masked secrets (passwords) are read from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretSource {
    /// Read from the controlling terminal without echo
    Terminal,
    /// Read the next token from the regular input stream
    Inline,
}

/// Line-oriented token reader paired with an output sink
///
/// A line holding several tokens is split and the extra tokens are served to
/// the following reads. A blank line yields one empty token.
pub struct Console<R, W> {
    reader: R,
    writer: W,
    pending: VecDeque<String>,
    secrets: SecretSource,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W, secrets: SecretSource) -> Self {
        Self {
            reader,
            writer,
            pending: VecDeque::new(),
            secrets,
        }
    }

    /// Read the next token
    ///
    /// # Errors
    ///
    /// `InputClosed` at end of input, `Input` when the stream fails.
    pub fn read_token(&mut self) -> BankResult<String> {
        if let Some(token) = self.pending.pop_front() {
            return Ok(token);
        }

        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .map_err(|e| BankError::Input(e.to_string()))?;
        if read == 0 {
            return Err(BankError::InputClosed);
        }

        let mut tokens = line.split_whitespace().map(str::to_string);
        match tokens.next() {
            Some(first) => {
                self.pending.extend(tokens);
                Ok(first)
            }
            None => Ok(String::new()),
        }
    }

    /// Print a label without a newline, then read a token
    pub fn prompt(&mut self, label: impl Display) -> BankResult<String> {
        write!(self.writer, "{}", label)?;
        self.writer.flush()?;
        self.read_token()
    }

    /// Read a secret, masked when reading from the terminal
    pub fn prompt_secret(&mut self, label: &str) -> BankResult<String> {
        match self.secrets {
            SecretSource::Terminal => {
                // Typed on the same line as the previous answer
                if let Some(secret) = self.pending.pop_front() {
                    return Ok(secret);
                }
                self.writer.flush()?;
                rpassword::prompt_password(label)
                    .map(|secret| secret.trim().to_string())
                    .map_err(|e| BankError::Input(e.to_string()))
            }
            SecretSource::Inline => self.prompt(label),
        }
    }

    /// Write a line of output
    pub fn say(&mut self, text: impl Display) -> BankResult<()> {
        writeln!(self.writer, "{}", text)?;
        Ok(())
    }

    /// Write output without a trailing newline
    pub fn write(&mut self, text: impl Display) -> BankResult<()> {
        write!(self.writer, "{}", text)?;
        Ok(())
    }

    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
            SecretSource::Inline,
        )
    }

    #[test]
    fn test_tokens_are_trimmed() {
        let mut c = console("  1  \nq\n");
        assert_eq!(c.read_token().unwrap(), "1");
        assert_eq!(c.read_token().unwrap(), "q");
    }

    #[test]
    fn test_several_tokens_on_one_line() {
        let mut c = console("alice secret123\n1\n");
        assert_eq!(c.read_token().unwrap(), "alice");
        assert_eq!(c.read_token().unwrap(), "secret123");
        assert_eq!(c.read_token().unwrap(), "1");
    }

    #[test]
    fn test_blank_line_is_empty_token() {
        let mut c = console("   \n");
        assert_eq!(c.read_token().unwrap(), "");
    }

    #[test]
    fn test_end_of_input_is_fatal() {
        let mut c = console("q\n");
        c.read_token().unwrap();
        let err = c.read_token().unwrap_err();
        assert!(matches!(err, BankError::InputClosed));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_inline_secret_and_prompt_output() {
        let mut c = console("hunter2\n");
        assert_eq!(c.prompt_secret("Password: ").unwrap(), "hunter2");

        let (_, out) = c.into_parts();
        assert_eq!(String::from_utf8(out).unwrap(), "Password: ");
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut c = console("q");
        assert_eq!(c.read_token().unwrap(), "q");
    }

    #[test]
    fn test_queued_secret_served_before_terminal() {
        let mut c = Console::new(
            Cursor::new(b"alice secret123\n".to_vec()),
            Vec::new(),
            SecretSource::Terminal,
        );

        assert_eq!(c.read_token().unwrap(), "alice");
        assert_eq!(c.prompt_secret("Password: ").unwrap(), "secret123");
        assert!(matches!(c.read_token(), Err(BankError::InputClosed)));
    }
}
