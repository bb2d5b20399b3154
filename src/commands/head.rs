//! Head selection: print the first N lines, then stop reading.

use crate::commands::SelectStats;
use crate::line::{LineError, LineReader, Result};
use crate::streaming::LineWriter;
use std::io::{Read, Write};

/// Print only the initial `count` lines.
#[derive(Debug, Clone)]
pub struct HeadCommand {
    /// Number of lines to print; must be non-zero
    pub count: usize,
}

impl HeadCommand {
    pub fn new(count: usize) -> Self {
        Self { count }
    }

    pub fn validate(&self) -> Result<()> {
        if self.count == 0 {
            return Err(LineError::EmptyRequest("initial"));
        }
        Ok(())
    }

    /// Copy the initial lines from `reader` to `output`.
    ///
    /// Work is bounded by `count`, not by the input size.
    pub fn run_reader<R: Read, W: Write>(
        &self,
        reader: R,
        output: &mut W,
    ) -> Result<SelectStats> {
        self.validate()?;

        let mut stats = SelectStats::default();
        let mut lines = LineReader::new(reader);
        let mut writer = LineWriter::new(output);
        let mut remaining = self.count;

        while let Some(line) = lines.next_line()? {
            stats.lines_read += 1;
            writer.write_line(line)?;

            remaining -= 1;
            if remaining == 0 {
                stats.stopped_early = true;
                break;
            }
        }

        writer.flush()?;
        stats.lines_written = writer.lines_written();
        Ok(stats)
    }
}
