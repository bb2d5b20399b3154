//! Global configuration for diagnostic output.
//!
//! Verbosity is process-wide: it is set once at startup and read only on the
//! diagnostic path, never inside the per-line loops.

use std::sync::atomic::{AtomicU8, Ordering};

/// How much the tool reports on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Verbosity {
    /// Only fatal errors.
    Quiet,
    /// Fatal errors and warnings about skipped inputs.
    #[default]
    Normal,
    /// Everything above plus per-input statistics.
    Verbose,
}

impl Verbosity {
    fn from_u8(value: u8) -> Self {
        match value {
            0 => Verbosity::Quiet,
            2 => Verbosity::Verbose,
            _ => Verbosity::Normal,
        }
    }

    fn as_u8(self) -> u8 {
        match self {
            Verbosity::Quiet => 0,
            Verbosity::Normal => 1,
            Verbosity::Verbose => 2,
        }
    }
}

static VERBOSITY: AtomicU8 = AtomicU8::new(1);

/// Set the process-wide verbosity.
///
/// # Example
///
/// ```
/// use lines::config::{self, Verbosity};
///
/// config::set_verbosity(Verbosity::Quiet);
/// assert!(config::is_quiet());
/// config::set_verbosity(Verbosity::Normal);
/// ```
#[inline]
pub fn set_verbosity(level: Verbosity) {
    VERBOSITY.store(level.as_u8(), Ordering::Release);
}

/// Current process-wide verbosity.
#[inline]
pub fn verbosity() -> Verbosity {
    Verbosity::from_u8(VERBOSITY.load(Ordering::Acquire))
}

#[inline]
pub fn is_quiet() -> bool {
    verbosity() == Verbosity::Quiet
}

#[inline]
pub fn is_verbose() -> bool {
    verbosity() == Verbosity::Verbose
}

/// Derive verbosity from the `--quiet` / `--verbose` flags.
///
/// The CLI rejects both at once; if both are set anyway quiet wins.
pub fn verbosity_from_flags(quiet: bool, verbose: bool) -> Verbosity {
    if quiet {
        Verbosity::Quiet
    } else if verbose {
        Verbosity::Verbose
    } else {
        Verbosity::Normal
    }
}
