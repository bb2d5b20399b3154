//! Diagnostics written to stderr, gated by [`crate::config`] verbosity.

use crate::config;
use std::fmt;

/// Print a warning unless running quiet.
pub fn warning(args: fmt::Arguments<'_>) {
    if !config::is_quiet() {
        eprintln!("WARNING: {}", args);
    }
}

/// Print an informational line only when running verbose.
pub fn verbose(args: fmt::Arguments<'_>) {
    if config::is_verbose() {
        eprintln!("{}", args);
    }
}

/// Print a fatal error. Always shown.
pub fn error(args: fmt::Arguments<'_>) {
    eprintln!("ERROR: {}", args);
}
