//! Line output for selection strategies.

use crate::line::{LineError, Result};
use std::io::Write;

/// Line output writer.
///
/// Every write appends exactly one `\n` and goes straight to the sink, so a
/// failing sink stops the strategy at the line that could not be written.
/// Buffering is left to whoever owns the sink. I/O failures surface as
/// [`LineError::Write`].
pub struct LineWriter<W: Write> {
    writer: W,
    lines_written: u64,
}

impl<W: Write> LineWriter<W> {
    pub fn new(output: W) -> Self {
        Self {
            writer: output,
            lines_written: 0,
        }
    }

    /// Write a line followed by a newline.
    #[inline]
    pub fn write_line(&mut self, line: &[u8]) -> Result<()> {
        self.writer.write_all(line).map_err(LineError::Write)?;
        self.writer.write_all(b"\n").map_err(LineError::Write)?;
        self.lines_written += 1;
        Ok(())
    }

    /// Number of lines the sink accepted so far.
    #[inline]
    pub fn lines_written(&self) -> u64 {
        self.lines_written
    }

    /// Flush the sink.
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush().map_err(LineError::Write)
    }
}
