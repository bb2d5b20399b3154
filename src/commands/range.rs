//! Range selection: print lines START through END.
//!
//! Lines before START are read and dropped. Reading stops as soon as line END
//! has been written; the rest of the input is never consumed.
//!
//! Memory: O(1) - only the current line is held.

use crate::commands::SelectStats;
use crate::line::{LineError, LineReader, Result};
use crate::streaming::LineWriter;
use std::io::{Read, Write};

/// Range selection command.
///
/// Both bounds are 1-based and inclusive; 0 leaves a bound open.
#[derive(Debug, Clone, Default)]
pub struct RangeCommand {
    /// First line to print (0 = from the beginning)
    pub start: u64,
    /// Last line to print (0 = through the end)
    pub end: u64,
}

impl RangeCommand {
    pub fn new() -> Self {
        Self { start: 0, end: 0 }
    }

    pub fn with_start(mut self, start: u64) -> Self {
        self.start = start;
        self
    }

    pub fn with_end(mut self, end: u64) -> Self {
        self.end = end;
        self
    }

    /// Reject `start > end` when both bounds are set.
    pub fn validate(&self) -> Result<()> {
        if self.start > 0 && self.end > 0 && self.start > self.end {
            return Err(LineError::InvertedRange {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    /// Copy the selected range from `reader` to `output`.
    ///
    /// Assumes the bounds already passed [`RangeCommand::validate`].
    pub fn run_reader<R: Read, W: Write>(
        &self,
        reader: R,
        output: &mut W,
    ) -> Result<SelectStats> {
        let mut stats = SelectStats::default();
        let mut lines = LineReader::new(reader);
        let mut writer = LineWriter::new(output);
        let mut line_number: u64 = 0;

        while let Some(line) = lines.next_line()? {
            line_number += 1;

            if self.start > 0 && line_number < self.start {
                continue;
            }

            writer.write_line(line)?;

            if self.end > 0 && line_number == self.end {
                stats.stopped_early = true;
                break;
            }
        }

        writer.flush()?;
        stats.lines_read = lines.line_number();
        stats.lines_written = writer.lines_written();
        Ok(stats)
    }
}
