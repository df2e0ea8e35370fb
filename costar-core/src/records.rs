//! Line-oriented record stream reader.
//!
//! A record stream is a sequence of blocks separated by one or more blank
//! lines. The first line of a block is the event label, every following line
//! is one entity name:
//!
//! ```text
//! Movie One
//! Alice
//! Bob
//!
//! Movie Two
//! Bob
//! Carol
//! ```
//!
//! Lines are trimmed; there is no quoting or escaping. The reader yields every
//! block it sees, including ones too small to connect anything. Deciding what
//! to drop is the builder's job.

use std::io::{self, BufRead, Lines};

/// One parsed block: an event label and its participants in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordGroup {
    pub event: String,
    pub entities: Vec<String>,
}

impl RecordGroup {
    pub fn new<I, S>(event: impl Into<String>, entities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            event: event.into(),
            entities: entities.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether this group produces any edges: a non-empty label and at least
    /// two participants.
    pub fn is_connectable(&self) -> bool {
        !self.event.is_empty() && self.entities.len() >= 2
    }
}

/// Streams [`RecordGroup`]s out of any buffered reader.
///
/// I/O errors are yielded once and end the stream.
pub struct RecordReader<R> {
    lines: Lines<R>,
    finished: bool,
}

impl<R: BufRead> RecordReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            finished: false,
        }
    }
}

impl<R: BufRead> Iterator for RecordReader<R> {
    type Item = io::Result<RecordGroup>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let mut current: Option<RecordGroup> = None;

        loop {
            match self.lines.next() {
                Some(Ok(line)) => {
                    let line = line.trim();

                    if line.is_empty() {
                        // Blank line closes the open block, if any
                        if let Some(group) = current.take() {
                            return Some(Ok(group));
                        }
                        continue;
                    }

                    match current.as_mut() {
                        None => {
                            current = Some(RecordGroup {
                                event: line.to_string(),
                                entities: Vec::new(),
                            })
                        }
                        Some(group) => group.entities.push(line.to_string()),
                    }
                }
                Some(Err(e)) => {
                    self.finished = true;
                    return Some(Err(e));
                }
                None => {
                    // Trailing block without a closing blank line
                    self.finished = true;
                    return current.map(Ok);
                }
            }
        }
    }
}
