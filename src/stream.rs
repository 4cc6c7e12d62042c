//! Incremental card stream.
//!
//! Bulk card data arrives as one very large JSON array (or as
//! newline-delimited objects). `CardStream` pulls one element at a
//! time: a byte scanner finds the next balanced top-level `{...}`
//! and only that slice is handed to the JSON parser, so memory stays
//! bounded by the largest single card rather than the document.
//!
//! A malformed element surfaces as an `Err` item and scanning
//! continues with the next element; I/O failures and bytes that
//! cannot start an element end the stream.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::card::printing::CardPrinting;
use crate::error::{Error, Result};

/// Pull-based iterator over card printings in a JSON stream.
pub struct CardStream<R: BufRead> {
    reader: R,
    offset: u64,
    element: Vec<u8>,
    done: bool,
}

impl CardStream<BufReader<File>> {
    /// Open a card stream over a file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> CardStream<R> {
    /// Wrap any buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            offset: 0,
            element: Vec::new(),
            done: false,
        }
    }

    fn next_byte(&mut self) -> std::io::Result<Option<u8>> {
        let buf = self.reader.fill_buf()?;
        if buf.is_empty() {
            return Ok(None);
        }
        let byte = buf[0];
        self.reader.consume(1);
        self.offset += 1;
        Ok(Some(byte))
    }

    /// Scan to the start of the next object, then capture it whole
    /// into `self.element`. Returns false at end of input.
    ///
    /// Array brackets, commas, and whitespace between elements are
    /// separators in both accepted input shapes, so they are skipped
    /// uniformly.
    fn next_element(&mut self) -> Result<bool> {
        loop {
            let Some(byte) = self.next_byte()? else {
                return Ok(false);
            };
            match byte {
                b'{' => break,
                b'[' | b']' | b',' => {}
                _ if byte.is_ascii_whitespace() => {}
                _ => {
                    return Err(Error::Stream {
                        byte,
                        offset: self.offset - 1,
                    });
                }
            }
        }

        self.element.clear();
        self.element.push(b'{');
        let mut depth = 1u32;
        let mut in_string = false;
        let mut escaped = false;

        while depth > 0 {
            let Some(byte) = self.next_byte()? else {
                // Truncated element at end of input.
                return Err(Error::Io(std::io::Error::new(
                    std::io::ErrorKind::UnexpectedEof,
                    "card stream ended inside an element",
                )));
            };
            self.element.push(byte);

            if in_string {
                if escaped {
                    escaped = false;
                } else if byte == b'\\' {
                    escaped = true;
                } else if byte == b'"' {
                    in_string = false;
                }
                continue;
            }
            match byte {
                b'"' => in_string = true,
                b'{' => depth += 1,
                b'}' => depth -= 1,
                _ => {}
            }
        }

        Ok(true)
    }
}

impl<R: BufRead> Iterator for CardStream<R> {
    type Item = Result<CardPrinting>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_element() {
            Ok(true) => {
                // Parse failures on one element leave the scanner
                // positioned at the next, so iteration continues.
                match serde_json::from_slice(&self.element) {
                    Ok(card) => Some(Ok(card)),
                    Err(err) => Some(Err(Error::Json(err))),
                }
            }
            Ok(false) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}
