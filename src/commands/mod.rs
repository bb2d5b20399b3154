//! Line selection strategies.
//!
//! Each strategy reads one input forward, once, and writes the selected
//! lines in their original order.

pub mod head;
pub mod range;
pub mod skip;
pub mod tail;

pub use head::HeadCommand;
pub use range::RangeCommand;
pub use skip::SkipCommand;
pub use tail::TailCommand;

/// Statistics for a single strategy run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectStats {
    /// Lines consumed from the input
    pub lines_read: u64,
    /// Lines written to the output
    pub lines_written: u64,
    /// Reading ended before the end of input was seen
    pub stopped_early: bool,
}

impl std::fmt::Display for SelectStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Read: {}, Written: {}{}",
            self.lines_read,
            self.lines_written,
            if self.stopped_early {
                " (stopped early)"
            } else {
                ""
            }
        )
    }
}
