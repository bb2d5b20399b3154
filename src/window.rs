//! Window specifications: which lines a run should print.
//!
//! A [`Window`] picks exactly one selection strategy and carries its
//! parameters. [`RangeSpec`] parses the `--range` argument forms
//! `N`, `START-END`, `START-` and `-END`.

use crate::commands::{HeadCommand, RangeCommand, SelectStats, SkipCommand, TailCommand};
use crate::line::{LineError, Result};
use std::fmt;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;
use std::str::FromStr;

/// One of the four mutually exclusive selection modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Window {
    /// Lines `start..=end`; 0 leaves a bound open.
    Range { start: u64, end: u64 },
    /// The first `count` lines.
    Head { count: usize },
    /// The last `count` lines.
    Tail { count: usize },
    /// Everything except the first `skip_top` and last `skip_bottom` lines.
    SkipBounds { skip_top: usize, skip_bottom: usize },
}

impl Default for Window {
    /// Copy input to output unchanged.
    fn default() -> Self {
        Window::SkipBounds {
            skip_top: 0,
            skip_bottom: 0,
        }
    }
}

impl Window {
    /// Check the parameters before any input is opened.
    pub fn validate(&self) -> Result<()> {
        match *self {
            Window::Range { start, end } => {
                RangeCommand::new().with_start(start).with_end(end).validate()
            }
            Window::Head { count } => HeadCommand::new(count).validate(),
            Window::Tail { count } => TailCommand::new(count).validate(),
            Window::SkipBounds { .. } => Ok(()),
        }
    }

    /// Number of lines the strategy holds back (the lookback capacity).
    pub fn lookback(&self) -> usize {
        match *self {
            Window::Range { .. } | Window::Head { .. } => 0,
            Window::Tail { count } => count,
            Window::SkipBounds { skip_bottom, .. } => skip_bottom,
        }
    }

    /// Run the selected strategy over one input.
    pub fn run_reader<R: Read, W: Write>(
        &self,
        reader: R,
        output: &mut W,
    ) -> Result<SelectStats> {
        match *self {
            Window::Range { start, end } => RangeCommand::new()
                .with_start(start)
                .with_end(end)
                .run_reader(reader, output),
            Window::Head { count } => HeadCommand::new(count).run_reader(reader, output),
            Window::Tail { count } => TailCommand::new(count).run_reader(reader, output),
            Window::SkipBounds {
                skip_top,
                skip_bottom,
            } => SkipCommand::new()
                .with_skip_top(skip_top)
                .with_skip_bottom(skip_bottom)
                .run_reader(reader, output),
        }
    }

    /// Run the selected strategy over a file.
    pub fn run<P: AsRef<Path>, W: Write>(
        &self,
        path: P,
        output: &mut W,
    ) -> Result<SelectStats> {
        let file = File::open(path.as_ref()).map_err(LineError::Read)?;
        self.run_reader(file, output)
    }

    /// Run the selected strategy over stdin.
    pub fn run_stdin<W: Write>(&self, output: &mut W) -> Result<SelectStats> {
        let stdin = io::stdin();
        self.run_reader(stdin.lock(), output)
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Window::Range { start, end } => match (start, end) {
                (0, 0) => write!(f, "all lines"),
                (0, end) => write!(f, "lines 1-{}", end),
                (start, 0) => write!(f, "lines {}-", start),
                (start, end) => write!(f, "lines {}-{}", start, end),
            },
            Window::Head { count } => write!(f, "first {} lines", count),
            Window::Tail { count } => write!(f, "last {} lines", count),
            Window::SkipBounds {
                skip_top,
                skip_bottom,
            } => write!(
                f,
                "all but first {} and last {} lines",
                skip_top, skip_bottom
            ),
        }
    }
}

/// Parsed `--range` argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RangeSpec {
    /// First line (0 = unset)
    pub start: u64,
    /// Last line (0 = unset)
    pub end: u64,
}

impl FromStr for RangeSpec {
    type Err = LineError;

    /// Parse `N`, `START-END`, `START-` or `-END`.
    ///
    /// ```
    /// use lines::RangeSpec;
    ///
    /// let spec: RangeSpec = "4-7".parse().unwrap();
    /// assert_eq!((spec.start, spec.end), (4, 7));
    ///
    /// let spec: RangeSpec = "3".parse().unwrap();
    /// assert_eq!((spec.start, spec.end), (3, 3));
    ///
    /// assert!("7-4".parse::<RangeSpec>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split('-').collect();
        let spec = match parts.as_slice() {
            [single] => {
                if single.is_empty() {
                    return Err(LineError::MalformedRange(s.to_string()));
                }
                // A single number prints just that line
                let line = parse_bound(single, s)?;
                RangeSpec {
                    start: line,
                    end: line,
                }
            }
            [start, end] => RangeSpec {
                start: parse_bound(start, s)?,
                end: parse_bound(end, s)?,
            },
            _ => return Err(LineError::MalformedRange(s.to_string())),
        };

        if spec.end > 0 && spec.start > spec.end {
            return Err(LineError::InvertedRange {
                start: spec.start,
                end: spec.end,
            });
        }
        Ok(spec)
    }
}

/// Parse one side of a range; empty means unset.
fn parse_bound(text: &str, whole: &str) -> Result<u64> {
    if text.is_empty() {
        return Ok(0);
    }
    text.parse()
        .map_err(|_| LineError::MalformedRange(whole.to_string()))
}

impl From<RangeSpec> for Window {
    fn from(spec: RangeSpec) -> Self {
        Window::Range {
            start: spec.start,
            end: spec.end,
        }
    }
}
