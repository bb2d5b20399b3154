//! Tail selection: print the last N lines.
//!
//! Requires a full pass over the input, but only the final `count` lines are
//! ever held, in a [`LookbackBuffer`].
//!
//! Memory: O(count).

use crate::commands::SelectStats;
use crate::line::{LineError, LineReader, Result};
use crate::lookback::LookbackBuffer;
use crate::streaming::LineWriter;
use std::io::{Read, Write};

/// Print only the final `count` lines.
#[derive(Debug, Clone)]
pub struct TailCommand {
    /// Number of lines to print; must be non-zero
    pub count: usize,
}

impl TailCommand {
    pub fn new(count: usize) -> Self {
        Self { count }
    }

    pub fn validate(&self) -> Result<()> {
        if self.count == 0 {
            return Err(LineError::EmptyRequest("final"));
        }
        Ok(())
    }

    /// Copy the final lines from `reader` to `output`.
    ///
    /// Nothing is written until the input is exhausted.
    pub fn run_reader<R: Read, W: Write>(
        &self,
        reader: R,
        output: &mut W,
    ) -> Result<SelectStats> {
        self.validate()?;

        let mut stats = SelectStats::default();
        let mut lines = LineReader::new(reader);
        let mut window = LookbackBuffer::new(self.count);
        let mut line = Vec::new();

        while lines.read_line_into(&mut line)? {
            if let Some(evicted) = window.insert_and_evict(std::mem::take(&mut line)) {
                line = evicted;
            }
        }
        stats.lines_read = lines.line_number();

        let mut writer = LineWriter::new(output);
        for held in window.drain() {
            writer.write_line(&held)?;
        }

        writer.flush()?;
        stats.lines_written = writer.lines_written();
        Ok(stats)
    }
}
