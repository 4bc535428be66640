//! Corpus loading
//!
//! Maps assembled records onto labeled training examples.

use std::fs::File;
use std::path::Path;
use tracing::warn;

use crate::classifier::types::{Label, LabeledMessage};
use crate::error::Result;

use super::reader::RecordReader;

/// Field positions within an assembled record: `index,label,message,flag`.
const LABEL_FIELD: usize = 1;
const MESSAGE_FIELD: usize = 2;

/// Load every labeled message the corpus file yields.
///
/// Failing to open the file is an error. A failure mid-stream logs a
/// warning and returns the messages assembled up to that point; callers
/// must treat an empty result as fatal.
pub fn load_corpus<P: AsRef<Path>>(path: P) -> Result<Vec<LabeledMessage>> {
    let file = File::open(path)?;
    let mut reader = RecordReader::new(file);
    let mut messages = Vec::new();

    loop {
        match reader.read_record() {
            Ok(Some(fields)) => {
                messages.push(LabeledMessage::new(
                    fields[MESSAGE_FIELD].clone(),
                    Label::parse(&fields[LABEL_FIELD]),
                ));
            }
            Ok(None) => break,
            Err(e) => {
                warn!(
                    "corpus read aborted after {} records: {}",
                    messages.len(),
                    e
                );
                break;
            }
        }
    }

    Ok(messages)
}
