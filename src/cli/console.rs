//! Line-oriented console I/O for the interactive session.

use chrono::{Local, NaiveDateTime};
use std::io::{self, BufRead, Stdout, StdinLock, Write};

/// Line printed before every result block.
pub const SEPARATOR: &str = "--------------------";

/// A line consisting of only this ends multi-line note text.
pub const TEXT_TERMINATOR: &str = ".";

/// Trait for the session's console (allows scripting in tests).
///
/// Reads return `Ok(None)` once input is exhausted.
pub trait Console {
    /// Shows the menu and reads one command token.
    fn read_command(&mut self, menu: &str) -> io::Result<Option<String>>;

    /// Shows `prompt` and reads one line.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Shows `prompt` and reads lines until [`TEXT_TERMINATOR`] or end of input.
    fn read_text(&mut self, prompt: &str) -> io::Result<String>;

    /// Prints each result preceded by [`SEPARATOR`].
    fn print_results(&mut self, results: &[String]) -> io::Result<()>;

    fn print_message(&mut self, message: &str) -> io::Result<()>;

    /// Timestamp given to newly created notes.
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Console over any buffered reader and writer.
pub struct StdConsole<R, W> {
    input: R,
    output: W,
}

impl StdConsole<StdinLock<'static>, Stdout> {
    /// Console bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> StdConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the console, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

impl<R: BufRead, W: Write> Console for StdConsole<R, W> {
    fn read_command(&mut self, menu: &str) -> io::Result<Option<String>> {
        write!(self.output, "{menu}")?;
        self.output.flush()?;
        self.next_line()
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        self.next_line()
    }

    fn read_text(&mut self, prompt: &str) -> io::Result<String> {
        writeln!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut lines = Vec::new();
        while let Some(line) = self.next_line()? {
            if line == TEXT_TERMINATOR {
                break;
            }
            lines.push(line);
        }
        Ok(lines.join("\n"))
    }

    fn print_results(&mut self, results: &[String]) -> io::Result<()> {
        for result in results {
            writeln!(self.output, "{SEPARATOR}")?;
            writeln!(self.output, "{result}")?;
        }
        self.output.flush()
    }

    fn print_message(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{message}")?;
        self.output.flush()
    }
}
