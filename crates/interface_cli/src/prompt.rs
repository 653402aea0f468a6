//! Console prompt/retry loop
//!
//! Generic over the input and output streams so a session can run against
//! stdin/stdout in production and scripted buffers in tests. All reads
//! block until a line arrives; there is no timeout or cancellation.

use std::io::{self, BufRead, Write};

use crate::rules::Rule;

/// A line-oriented console
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over an input and output stream
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the console and returns its output stream
    ///
    /// Lets scripted tests inspect the transcript.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes a line of output
    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")?;
        self.output.flush()
    }

    /// Prints a prompt (no newline) and reads one line of input
    ///
    /// The trailing newline is stripped. EOF on the input stream is an
    /// error: the session cannot continue without a console.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        let bytes = self.input.read_line(&mut line)?;
        if bytes == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "console input closed",
            ));
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }

    /// Prompts until `rule` accepts the input, printing `error` on each miss
    ///
    /// When a `seed` candidate is supplied and valid it is returned without
    /// prompting; when supplied and invalid, the error message is printed
    /// once and the loop falls through to interactive prompting.
    pub fn prompt_validated(
        &mut self,
        prompt: &str,
        rule: Rule,
        error: &str,
        seed: Option<&str>,
    ) -> io::Result<String> {
        if let Some(candidate) = seed {
            if rule.accepts(candidate) {
                return Ok(candidate.to_string());
            }
            self.say(error)?;
        }
        loop {
            let line = self.read_line(prompt)?;
            if rule.accepts(&line) {
                return Ok(line);
            }
            self.say(error)?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(script: &str) -> Console<Cursor<String>, Vec<u8>> {
        Console::new(Cursor::new(script.to_string()), Vec::new())
    }

    #[test]
    fn test_read_line_strips_newline() {
        let mut c = console("hello\n");
        assert_eq!(c.read_line("> ").unwrap(), "hello");
    }

    #[test]
    fn test_eof_is_an_error() {
        let mut c = console("");
        assert!(c.read_line("> ").is_err());
    }

    #[test]
    fn test_retries_until_valid() {
        let mut c = console("zero\n0\n4\n");
        let value = c
            .prompt_validated("Cars: ", Rule::PositiveInteger, "Bad count", None)
            .unwrap();
        assert_eq!(value, "4");

        let transcript = String::from_utf8(c.output).unwrap();
        assert_eq!(transcript.matches("Bad count").count(), 2);
    }

    #[test]
    fn test_valid_seed_skips_prompting() {
        let mut c = console("");
        let value = c
            .prompt_validated("Claim: ", Rule::PositiveInteger, "Bad claim", Some("17"))
            .unwrap();
        assert_eq!(value, "17");
        assert!(c.output.is_empty(), "no prompt should have been printed");
    }

    #[test]
    fn test_invalid_seed_shows_error_once_then_prompts() {
        let mut c = console("21\n");
        let value = c
            .prompt_validated("Claim: ", Rule::PositiveInteger, "Bad claim", Some("abc"))
            .unwrap();
        assert_eq!(value, "21");

        let transcript = String::from_utf8(c.output).unwrap();
        assert_eq!(transcript.matches("Bad claim").count(), 1);
        assert!(transcript.contains("Claim: "));
    }
}
