//! Streaming line reader and the crate error type.

use memchr::memchr;
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Input buffer size (256 KB).
const DEFAULT_INPUT_BUFFER: usize = 256 * 1024;

/// Starting capacity of the reader's line buffer; longer lines grow it.
const DEFAULT_LINE_BUFFER: usize = 1024;

/// Errors that can occur while selecting lines.
#[derive(Error, Debug)]
pub enum LineError {
    #[error("cannot create buffer with negative item count: {0}")]
    InvalidCapacity(i64),

    #[error("cannot print the {0} 0 lines")]
    EmptyRequest(&'static str),

    #[error("cannot print invalid range of lines: {0:?}")]
    MalformedRange(String),

    #[error("cannot print lines {start} thru {end} because they are out of order")]
    InvertedRange { start: u64, end: u64 },

    #[error("read error: {0}")]
    Read(#[source] io::Error),

    #[error("write error: {0}")]
    Write(#[source] io::Error),

    #[error("cannot read {path:?}: {source}")]
    Input {
        path: PathBuf,
        #[source]
        source: Box<LineError>,
    },
}

impl LineError {
    /// True when the output side went away (e.g. `lines big.txt | head -1`).
    pub fn is_broken_pipe(&self) -> bool {
        match self {
            LineError::Write(e) => e.kind() == io::ErrorKind::BrokenPipe,
            LineError::Input { source, .. } => source.is_broken_pipe(),
            _ => false,
        }
    }

    /// True for failures tied to one input rather than the whole run.
    pub fn is_input_failure(&self) -> bool {
        matches!(self, LineError::Read(_) | LineError::Input { .. })
    }

    /// Attach the input path to an error.
    pub fn for_input<P: AsRef<Path>>(self, path: P) -> Self {
        LineError::Input {
            path: path.as_ref().to_path_buf(),
            source: Box::new(self),
        }
    }
}

pub type Result<T> = std::result::Result<T, LineError>;

/// Forward-only reader yielding newline-delimited lines as raw bytes.
///
/// Lines are returned without their trailing `\n`. A final line lacking a
/// newline is still returned. No other bytes are stripped.
pub struct LineReader<R: Read> {
    reader: BufReader<R>,
    line_number: u64,
    buffer: Vec<u8>,
}

impl<R: Read> LineReader<R> {
    /// Create a line reader from any readable source.
    pub fn new(reader: R) -> Self {
        Self::with_capacity(reader, DEFAULT_INPUT_BUFFER)
    }

    /// Create a line reader with a custom input buffer size.
    pub fn with_capacity(reader: R, capacity: usize) -> Self {
        Self {
            reader: BufReader::with_capacity(capacity, reader),
            line_number: 0,
            buffer: Vec::with_capacity(DEFAULT_LINE_BUFFER),
        }
    }

    /// 1-based number of the line most recently returned (0 before the first).
    #[inline]
    pub fn line_number(&self) -> u64 {
        self.line_number
    }

    /// Read the next line, borrowing the reader's internal buffer.
    ///
    /// Returns `Ok(None)` at end of input.
    pub fn next_line(&mut self) -> Result<Option<&[u8]>> {
        self.buffer.clear();
        if !fill_line(&mut self.reader, &mut self.buffer)? {
            return Ok(None);
        }
        self.line_number += 1;
        Ok(Some(self.buffer.as_slice()))
    }

    /// Read the next line into a caller-owned buffer, replacing its contents.
    ///
    /// Returns false at end of input. Strategies that hold lines back hand in
    /// the allocation of an evicted line so it gets reused.
    pub fn read_line_into(&mut self, line: &mut Vec<u8>) -> Result<bool> {
        line.clear();
        if !fill_line(&mut self.reader, line)? {
            return Ok(false);
        }
        self.line_number += 1;
        Ok(true)
    }
}

/// Append bytes up to the next newline to `out`, returning false at end of input.
fn fill_line<R: Read>(reader: &mut BufReader<R>, out: &mut Vec<u8>) -> Result<bool> {
    let mut saw_bytes = false;
    loop {
        let (done, used) = {
            let available = match reader.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(LineError::Read(e)),
            };
            if available.is_empty() {
                // EOF: a trailing partial line still counts
                (true, 0)
            } else {
                saw_bytes = true;
                match memchr(b'\n', available) {
                    Some(i) => {
                        out.extend_from_slice(&available[..i]);
                        (true, i + 1)
                    }
                    None => {
                        out.extend_from_slice(available);
                        (false, available.len())
                    }
                }
            }
        };
        reader.consume(used);
        if done {
            return Ok(saw_bytes);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(input: &[u8]) -> Vec<Vec<u8>> {
        let mut reader = LineReader::new(input);
        let mut lines = Vec::new();
        let mut line = Vec::new();
        while reader.read_line_into(&mut line).unwrap() {
            lines.push(line.clone());
        }
        lines
    }

    #[test]
    fn test_reads_lines_without_delimiter() {
        assert_eq!(collect(b"a\nb\nc\n"), vec![b"a".to_vec(), b"b".to_vec(), b"c".to_vec()]);
    }

    #[test]
    fn test_final_line_without_newline() {
        assert_eq!(collect(b"a\nb"), vec![b"a".to_vec(), b"b".to_vec()]);
    }

    #[test]
    fn test_empty_input_has_no_lines() {
        assert!(collect(b"").is_empty());
    }

    #[test]
    fn test_blank_lines_preserved() {
        assert_eq!(collect(b"\n\nx\n"), vec![Vec::new(), Vec::new(), b"x".to_vec()]);
    }

    #[test]
    fn test_carriage_return_kept() {
        assert_eq!(collect(b"a\r\nb\r\n"), vec![b"a\r".to_vec(), b"b\r".to_vec()]);
    }

    #[test]
    fn test_lines_longer_than_buffer() {
        let long = "x".repeat(100);
        let input = format!("{}\nshort\n{}", long, long);
        let mut reader = LineReader::with_capacity(input.as_bytes(), 8);

        assert_eq!(reader.next_line().unwrap(), Some(long.as_bytes()));
        assert_eq!(reader.next_line().unwrap(), Some(&b"short"[..]));
        assert_eq!(reader.next_line().unwrap(), Some(long.as_bytes()));
        assert_eq!(reader.next_line().unwrap(), None);
        assert_eq!(reader.line_number(), 3);
    }

    #[test]
    fn test_non_utf8_bytes() {
        assert_eq!(collect(b"\xff\xfe\n"), vec![vec![0xff, 0xfe]]);
    }

    #[test]
    fn test_read_error_is_distinguishable() {
        struct Failing;
        impl Read for Failing {
            fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::Other, "disk on fire"))
            }
        }

        let mut reader = LineReader::new(Failing);
        let err = reader.next_line().unwrap_err();
        assert!(matches!(err, LineError::Read(_)));
        assert!(err.is_input_failure());
    }

    #[test]
    fn test_broken_pipe_detection() {
        let err = LineError::Write(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        assert!(err.is_broken_pipe());
        assert!(err.for_input("a.txt").is_broken_pipe());
        assert!(!LineError::EmptyRequest("initial").is_broken_pipe());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            LineError::EmptyRequest("final").to_string(),
            "cannot print the final 0 lines"
        );
        assert_eq!(
            LineError::InvertedRange { start: 7, end: 3 }.to_string(),
            "cannot print lines 7 thru 3 because they are out of order"
        );
    }
}
