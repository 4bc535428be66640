//! Resilient delimited-record reader
//!
//! The corpus file is comma-delimited with the schema
//! `index,label,message,flag`, but the message field may contain commas,
//! quote characters and literal newlines, and nothing marks where one
//! record ends and the next begins. Logical records are therefore
//! reassembled from the physical line stream with a completion heuristic:
//! the trailing numeric flag only has the spellings `,0` and `,1`, and a
//! record cannot end while a quote is still open.

use std::io::{BufRead, BufReader, Read};

use crate::error::Result;

/// The two legal spellings of the trailing numeric field.
const RECORD_SUFFIXES: [&str; 2] = [",0", ",1"];

/// Whether a physical line can open a new logical record.
///
/// Records start with a decimal index; anything else seen between records
/// is a stray fragment from a malformed record and gets skipped.
fn starts_record(line: &str) -> bool {
    line.chars().next().is_some_and(|c| c.is_ascii_digit())
}

/// Completion test for a buffered logical record.
///
/// True when the just-appended physical line ends in `,0` or `,1` and the
/// quote characters accumulated in the buffer are balanced. Misfires when a
/// quoted message happens to end a physical line with `,0`/`,1` while the
/// buffer is quote-balanced; the format offers nothing stronger to key on,
/// so that limitation is accepted and covered by a test.
pub fn record_complete(buffer: &str, last_line: &str) -> bool {
    let looks_complete = RECORD_SUFFIXES
        .iter()
        .any(|suffix| last_line.ends_with(suffix));

    looks_complete && buffer.matches('"').count() % 2 == 0
}

/// Split one logical record into fields on unquoted commas.
///
/// A quote toggles quoted mode; a doubled quote inside a quoted field
/// decodes to one literal quote. The final field is emitted even without a
/// trailing delimiter.
pub fn split_fields(record: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = record.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                if in_quotes && chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut field));
            }
            _ => field.push(c),
        }
    }
    fields.push(field);

    fields
}

/// Streaming reader that yields complete logical records.
pub struct RecordReader<R: Read> {
    reader: BufReader<R>,
    /// Physical lines of the record being assembled
    buffer: String,
    /// Scratch for the current physical line
    line: String,
    header_skipped: bool,
    record_count: u64,
    eof: bool,
}

impl<R: Read> RecordReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            buffer: String::new(),
            line: String::new(),
            header_skipped: false,
            record_count: 0,
            eof: false,
        }
    }

    /// Read the next complete logical record, or `None` at end of input.
    ///
    /// The first physical line is the header and is discarded. Records
    /// splitting into fewer than 3 fields are dropped without comment, and
    /// a trailing record that never satisfies the completion test is
    /// discarded rather than recovered.
    pub fn read_record(&mut self) -> Result<Option<Vec<String>>> {
        if self.eof {
            return Ok(None);
        }

        if !self.header_skipped {
            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                self.eof = true;
                return Ok(None);
            }
            self.header_skipped = true;
        }

        loop {
            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                self.eof = true;
                self.buffer.clear();
                return Ok(None);
            }

            let line = self.line.trim_end_matches('\n');
            let line = line.strip_suffix('\r').unwrap_or(line);

            if self.buffer.is_empty() && !starts_record(line) {
                continue;
            }

            self.buffer.push_str(line);
            self.buffer.push('\n');

            if record_complete(&self.buffer, line) {
                let fields = split_fields(self.buffer.trim());
                self.buffer.clear();

                if fields.len() >= 3 {
                    self.record_count += 1;
                    return Ok(Some(fields));
                }
            }
        }
    }

    /// Number of records yielded so far.
    pub fn record_count(&self) -> u64 {
        self.record_count
    }
}
