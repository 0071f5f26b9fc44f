use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Line-oriented terminal the menu talks through.
///
/// Reads return `None` once the input is exhausted.
pub trait Console {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;

    fn print(&mut self, text: &str) -> Result<()>;

    /// Prompt until a whole number is entered.
    fn read_integer(&mut self, prompt: &str) -> Result<Option<i64>> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };
            match line.trim().parse() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => self.print("Please enter a whole number.")?,
            }
        }
    }
}

/// [`Console`] over any buffered reader and writer.
pub struct LineConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt).context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush output")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            return Ok(None);
        }

        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn print(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text).context("Failed to write output")?;
        Ok(())
    }
}
