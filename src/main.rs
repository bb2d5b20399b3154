//! lines: print a range of lines.
//!
//! Usage: lines [OPTIONS] [FILE]...

use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process;

use lines::config::{self, verbosity_from_flags};
use lines::line::LineError;
use lines::report;
use lines::{RangeSpec, Runner, Window};

const EXAMPLES: &str = "\
EXAMPLES:
    lines < sample.txt
    lines sample.txt --range 4-7
    lines sample.txt --range -3
    lines sample.txt --range 7-
    lines sample.txt --range 3
    lines sample.txt --skip-top 2
    lines sample.txt --skip-bottom 2
    lines sample.txt --skip-top 3 --skip-bottom 2
    lines sample.txt --head 3
    lines sample.txt --tail 3";

#[derive(Parser)]
#[command(name = "lines")]
#[command(version)]
#[command(about = "Print a range of lines from standard input or one or more files")]
#[command(long_about = "Print a range of lines from standard input or one or more files.\n\n\
Without file arguments, reads from standard input and writes to standard output. \
With file arguments, reads each file in sequence and applies the selection \
independently to each file.")]
#[command(after_help = EXAMPLES)]
struct Cli {
    /// Only print lines START-END (also N, START-, -END); START must not exceed END
    #[arg(
        short = 'r',
        long,
        value_name = "RANGE",
        allow_hyphen_values = true,
        conflicts_with_all = ["head", "tail", "skip_top", "skip_bottom"]
    )]
    range: Option<RangeSpec>,

    /// Only print the initial N lines, like 'head -n N'
    #[arg(
        short = 't',
        long,
        visible_alias = "top",
        value_name = "N",
        conflicts_with_all = ["tail", "skip_top", "skip_bottom"]
    )]
    head: Option<usize>,

    /// Only print the final N lines, like 'tail -n N'
    #[arg(
        short = 'b',
        long,
        visible_alias = "bottom",
        value_name = "N",
        conflicts_with_all = ["skip_top", "skip_bottom"]
    )]
    tail: Option<usize>,

    /// Skip printing the initial N lines, handy for removing a header
    #[arg(long, visible_alias = "header", value_name = "N")]
    skip_top: Option<usize>,

    /// Skip printing the final N lines, handy for removing a footer
    #[arg(long, visible_alias = "footer", value_name = "N")]
    skip_bottom: Option<usize>,

    /// Do not print warnings about unreadable inputs
    #[arg(short, long, conflicts_with_all = ["force", "verbose"])]
    quiet: bool,

    /// Print per-input statistics to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Warn about unreadable inputs and continue with the rest
    #[arg(long)]
    force: bool,

    /// Print run statistics to stderr
    #[arg(long)]
    stats: bool,

    /// Input files (use - for stdin; default: stdin)
    files: Vec<PathBuf>,
}

impl Cli {
    /// The single selection mode the flags ask for.
    ///
    /// A head or tail count of 0 reads as the flag being absent.
    fn window(&self) -> Window {
        if let Some(range) = self.range {
            range.into()
        } else if let Some(count) = self.head.filter(|&n| n > 0) {
            Window::Head { count }
        } else if let Some(count) = self.tail.filter(|&n| n > 0) {
            Window::Tail { count }
        } else {
            Window::SkipBounds {
                skip_top: self.skip_top.unwrap_or(0),
                skip_bottom: self.skip_bottom.unwrap_or(0),
            }
        }
    }
}

fn main() {
    let cli = Cli::parse();
    config::set_verbosity(verbosity_from_flags(cli.quiet, cli.verbose));

    if let Err(e) = run(cli) {
        if e.is_broken_pipe() {
            // Downstream stopped reading; nothing left to report
            process::exit(0);
        }
        report::error(format_args!("{}", e));
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), LineError> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    let window = cli.window();
    report::verbose(format_args!(
        "Selecting {} (holding back up to {} lines)",
        window,
        window.lookback()
    ));

    let runner = Runner::new(window).with_force(cli.force);
    let stats = runner.run(&cli.files, &mut handle)?;

    if cli.stats {
        eprintln!("Run stats: {}", stats);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("lines").chain(args.iter().copied()))
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_window_copies_everything() {
        assert_eq!(parse(&[]).unwrap().window(), Window::default());
    }

    #[test]
    fn test_window_from_flags() {
        assert_eq!(
            parse(&["--range", "4-7"]).unwrap().window(),
            Window::Range { start: 4, end: 7 }
        );
        assert_eq!(
            parse(&["-r", "-3"]).unwrap().window(),
            Window::Range { start: 0, end: 3 }
        );
        assert_eq!(
            parse(&["--top", "2"]).unwrap().window(),
            Window::Head { count: 2 }
        );
        assert_eq!(
            parse(&["-b", "2"]).unwrap().window(),
            Window::Tail { count: 2 }
        );
        assert_eq!(
            parse(&["--header", "1", "--footer", "2"]).unwrap().window(),
            Window::SkipBounds {
                skip_top: 1,
                skip_bottom: 2
            }
        );
    }

    #[test]
    fn test_zero_count_is_flag_absent() {
        assert_eq!(parse(&["--head", "0"]).unwrap().window(), Window::default());
        assert_eq!(parse(&["--tail", "0"]).unwrap().window(), Window::default());
    }

    #[test]
    fn test_exclusive_modes_rejected() {
        assert!(parse(&["--head", "1", "--tail", "1"]).is_err());
        assert!(parse(&["--head", "1", "--range", "1-2"]).is_err());
        assert!(parse(&["--tail", "1", "--skip-top", "1"]).is_err());
        assert!(parse(&["--range", "1-2", "--skip-bottom", "1"]).is_err());
        assert!(parse(&["--quiet", "--force"]).is_err());
        assert!(parse(&["--quiet", "--verbose"]).is_err());
    }

    #[test]
    fn test_bad_range_is_usage_error() {
        assert!(parse(&["--range", "7-4"]).is_err());
        assert!(parse(&["--range", "x"]).is_err());
    }

    #[test]
    fn test_files_collected() {
        let cli = parse(&["--head", "1", "a.txt", "-", "b.txt"]).unwrap();
        assert_eq!(cli.files.len(), 3);
    }
}
