// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Line-oriented record format used to persist a dictionary.
//!
//! A dictionary file is a flat sequence of two-line records:
//!
//! ```text
//! cat
//! feline
//! car
//! vehicle
//! ```
//!
//! The first line of a record is the word and the second is its meaning.
//! There is no header, no record count and no escaping, so neither line may
//! contain a line break. A trailing word line without a meaning is ignored.
//!
//! Lines are handled as raw bytes. Files written in UTF-8 or in a
//! single-byte encoding such as Latin-1 round-trip unchanged.

use std::io::{self, BufRead, Write};

/// Returns `true` if `text` cannot be stored on a single record line.
pub fn contains_line_break(text: &[u8]) -> bool {
    text.iter().any(|&b| b == b'\n' || b == b'\r')
}

/// Writes `(word, meaning)` records to an underlying writer.
#[derive(Debug)]
pub struct RecordWriter<W: Write> {
    inner: W,
    written: usize,
}

impl<W: Write> RecordWriter<W> {
    /// Creates a record writer over `inner`.
    pub fn new(inner: W) -> Self {
        Self { inner, written: 0 }
    }

    /// Writes one record.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidInput` error, without writing anything, if the word
    /// or meaning contains a line break. Otherwise propagates write errors.
    pub fn write_record(&mut self, word: &[u8], meaning: &[u8]) -> io::Result<()> {
        if contains_line_break(word) || contains_line_break(meaning) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "record for {:?} contains a line break",
                    String::from_utf8_lossy(word)
                ),
            ));
        }

        self.inner.write_all(word)?;
        self.inner.write_all(b"\n")?;
        self.inner.write_all(meaning)?;
        self.inner.write_all(b"\n")?;
        self.written += 1;
        Ok(())
    }

    /// Flushes the writer and returns the number of records written.
    pub fn finish(mut self) -> io::Result<usize> {
        self.inner.flush()?;
        Ok(self.written)
    }
}

/// Reads `(word, meaning)` records from a buffered reader.
///
/// Yields records until end of input. An I/O error is yielded once and ends
/// the sequence.
#[derive(Debug)]
pub struct RecordReader<R: BufRead> {
    inner: R,
    done: bool,
}

impl<R: BufRead> RecordReader<R> {
    /// Creates a record reader over `inner`.
    pub fn new(inner: R) -> Self {
        Self { inner, done: false }
    }

    /// Reads one line without its terminator. `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<Vec<u8>>> {
        let mut line = Vec::new();
        if self.inner.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        if line.last() == Some(&b'\n') {
            line.pop();
            if line.last() == Some(&b'\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    fn read_record(&mut self) -> io::Result<Option<(Vec<u8>, Vec<u8>)>> {
        let Some(word) = self.read_line()? else {
            return Ok(None);
        };
        match self.read_line()? {
            Some(meaning) => Ok(Some((word, meaning))),
            None => {
                tracing::debug!(
                    word = %String::from_utf8_lossy(&word),
                    "Discarding dangling word line at end of input"
                );
                Ok(None)
            }
        }
    }
}

impl<R: BufRead> Iterator for RecordReader<R> {
    type Item = io::Result<(Vec<u8>, Vec<u8>)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.read_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
