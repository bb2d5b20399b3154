//! Multi-input orchestration.
//!
//! Applies one [`Window`] to each input independently: every input gets a
//! fresh strategy and lookback buffer, and nothing carries over between them.

use crate::commands::SelectStats;
use crate::line::{LineError, Result};
use crate::report;
use crate::window::Window;
use std::io::Write;
use std::path::Path;

/// Totals across all inputs of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Inputs processed successfully
    pub inputs: usize,
    /// Inputs skipped because of a failure (only with `force`)
    pub failed: usize,
    pub lines_read: u64,
    pub lines_written: u64,
}

impl RunStats {
    fn record(&mut self, stats: &SelectStats) {
        self.inputs += 1;
        self.lines_read += stats.lines_read;
        self.lines_written += stats.lines_written;
    }
}

impl std::fmt::Display for RunStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Inputs: {}, Failed: {}, Read: {}, Written: {}",
            self.inputs, self.failed, self.lines_read, self.lines_written
        )
    }
}

/// Runs a window over stdin or a list of files.
#[derive(Debug, Clone, Default)]
pub struct Runner {
    pub window: Window,
    /// Report per-input failures as warnings and keep going
    pub force: bool,
}

impl Runner {
    pub fn new(window: Window) -> Self {
        Self {
            window,
            force: false,
        }
    }

    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    /// Process each input in order, or stdin when `inputs` is empty.
    ///
    /// A path of `-` also means stdin. Without `force` the first failure
    /// ends the run. With `force`, failures to open or read an input are
    /// reported and skipped; output failures always end the run.
    pub fn run<P: AsRef<Path>, W: Write>(
        &self,
        inputs: &[P],
        output: &mut W,
    ) -> Result<RunStats> {
        self.window.validate()?;

        let mut totals = RunStats::default();

        if inputs.is_empty() {
            let stats = self.window.run_stdin(output)?;
            report::verbose(format_args!("<stdin>: {}", stats));
            totals.record(&stats);
            return Ok(totals);
        }

        for input in inputs {
            let path = input.as_ref();
            match self.run_input(path, output) {
                Ok(stats) => {
                    report::verbose(format_args!("{}: {}", path.display(), stats));
                    totals.record(&stats);
                }
                Err(e) if self.force && e.is_input_failure() => {
                    report::warning(format_args!("{}", e));
                    totals.failed += 1;
                }
                Err(e) => return Err(e),
            }
        }

        Ok(totals)
    }

    fn run_input<W: Write>(&self, path: &Path, output: &mut W) -> Result<SelectStats> {
        if path.as_os_str() == "-" {
            return self.window.run_stdin(output);
        }
        self.window.run(path, output).map_err(|e| match e {
            LineError::Read(_) => e.for_input(path),
            e => e,
        })
    }
}
