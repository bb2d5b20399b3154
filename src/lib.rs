//! lines: print a range of lines from standard input or files.
//!
//! This library provides streaming line-window selection.
//!
//! # Features
//!
//! - **Single pass**: every input is read forward once, never seeked
//! - **Bounded memory**: trailing windows hold at most the requested number
//!   of lines in a [`LookbackBuffer`]
//! - **Early exit**: range and head selection stop reading once done
//!
//! # Example
//!
//! ```rust
//! use lines::Window;
//!
//! let input = "a\nb\nc\nd\ne\n";
//! let mut output = Vec::new();
//!
//! Window::Range { start: 2, end: 4 }
//!     .run_reader(input.as_bytes(), &mut output)
//!     .unwrap();
//!
//! assert_eq!(output, b"b\nc\nd\n");
//! ```

pub mod commands;
pub mod config;
pub mod line;
pub mod lookback;
pub mod report;
pub mod runner;
pub mod streaming;
pub mod window;

// Re-export commonly used types
pub use commands::SelectStats;
pub use line::{LineError, LineReader};
pub use lookback::LookbackBuffer;
pub use runner::{RunStats, Runner};
pub use window::{RangeSpec, Window};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::commands::{HeadCommand, RangeCommand, SelectStats, SkipCommand, TailCommand};
    pub use crate::line::{LineError, LineReader};
    pub use crate::lookback::LookbackBuffer;
    pub use crate::runner::{RunStats, Runner};
    pub use crate::streaming::LineWriter;
    pub use crate::window::{RangeSpec, Window};
}
