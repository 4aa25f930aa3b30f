use crate::domain::ports::Console;
use crate::utils::error::{CalcError, Result};
use std::io::{self, BufRead, Write};

/// [`Console`] over any reader/writer pair.
#[derive(Debug)]
pub struct StdioConsole<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> StdioConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl StdioConsole<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console for StdioConsole<R, W> {
    fn prompt(&mut self, prompt: &str) -> Result<String> {
        self.writer.write_all(prompt.as_bytes())?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(CalcError::UnexpectedEof {
                prompt: prompt.trim_end().to_string(),
            });
        }

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    fn print_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{}", line)?;
        self.writer.flush()?;
        Ok(())
    }
}
