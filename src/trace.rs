//! Trace input - one key per line.
//!
//! The [`TraceReader`] turns any buffered reader into a lazy sequence of
//! [`Key`]s:
//! - One key per line
//! - Trailing `\n` / `\r\n` stripped, nothing else touched
//! - Empty lines are keys too
//! - Bytes are taken as-is; keys need not be UTF-8

use std::fs::File;
use std::io::{self, BufRead, BufReader, StdinLock};
use std::path::Path;

use crate::common::{Key, Result};

/// A finite stream of keys read line by line.
///
/// # Example
/// ```
/// use cachesim::{Key, TraceReader};
///
/// let keys: Vec<Key> = TraceReader::new("A\r\nB\n\nC".as_bytes())
///     .collect::<cachesim::Result<_>>()
///     .unwrap();
/// assert_eq!(keys, ["A", "B", "", "C"].map(Key::from));
/// ```
pub struct TraceReader<R> {
    reader: R,
    line: Vec<u8>,
    line_number: u64,
}

impl<R: BufRead> TraceReader<R> {
    /// Read keys from `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: Vec::new(),
            line_number: 0,
        }
    }

    /// Number of lines read so far.
    pub fn line_number(&self) -> u64 {
        self.line_number
    }
}

impl TraceReader<BufReader<File>> {
    /// Open a trace file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl TraceReader<StdinLock<'static>> {
    /// Read the trace from standard input.
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> Iterator for TraceReader<R> {
    type Item = Result<Key>;

    fn next(&mut self) -> Option<Self::Item> {
        self.line.clear();
        match self.reader.read_until(b'\n', &mut self.line) {
            Ok(0) => None,
            Ok(_) => {
                self.line_number += 1;
                Some(Ok(Key::from(strip_line_terminator(&self.line))))
            }
            Err(e) => Some(Err(e.into())),
        }
    }
}

fn strip_line_terminator(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
