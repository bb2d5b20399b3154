//! Shared streaming utilities.
//!
//! Strategies keep O(1) memory except tail and skip-bottom, which hold at most
//! the requested number of lines.

pub mod output;

pub use output::LineWriter;
