//! Skip-bounds selection: drop the first N and the last M lines.
//!
//! The top skip is a simple counter that switches itself off once passed.
//! The bottom skip routes every remaining line through a [`LookbackBuffer`]
//! of capacity M: a line only comes back out once M newer lines exist after
//! it, so the final M lines are never emitted.
//!
//! Memory: O(M).

use crate::commands::SelectStats;
use crate::line::{LineReader, Result};
use crate::lookback::LookbackBuffer;
use crate::streaming::LineWriter;
use std::io::{Read, Write};

/// Print everything except a header and a footer.
#[derive(Debug, Clone, Default)]
pub struct SkipCommand {
    /// Initial lines to omit
    pub skip_top: usize,
    /// Final lines to omit
    pub skip_bottom: usize,
}

impl SkipCommand {
    pub fn new() -> Self {
        Self {
            skip_top: 0,
            skip_bottom: 0,
        }
    }

    pub fn with_skip_top(mut self, n: usize) -> Self {
        self.skip_top = n;
        self
    }

    pub fn with_skip_bottom(mut self, n: usize) -> Self {
        self.skip_bottom = n;
        self
    }

    /// Copy `reader` to `output` without the skipped header and footer.
    pub fn run_reader<R: Read, W: Write>(
        &self,
        reader: R,
        output: &mut W,
    ) -> Result<SelectStats> {
        let mut stats = SelectStats::default();
        let mut lines = LineReader::new(reader);
        let mut writer = LineWriter::new(output);
        let mut window = LookbackBuffer::new(self.skip_bottom);
        let mut skip_top = self.skip_top as u64;
        let mut line = Vec::new();

        while lines.read_line_into(&mut line)? {
            if skip_top > 0 {
                if lines.line_number() <= skip_top {
                    continue;
                }
                // Header passed; no need to compare any longer
                skip_top = 0;
            }

            if let Some(ready) = window.insert_and_evict(std::mem::take(&mut line)) {
                writer.write_line(&ready)?;
                line = ready;
            }
        }

        writer.flush()?;
        stats.lines_read = lines.line_number();
        stats.lines_written = writer.lines_written();
        Ok(stats)
    }
}
