//! Line-delimited JSON record reader.

use crate::error::{Error, Result};
use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};

/// Splits an async byte stream into JSON records, one per line.
///
/// Dropping the reader drops the underlying source, which closes the stream.
pub struct RecordReader<R> {
    lines: Lines<R>,
    records: u64,
}

impl<R: AsyncBufRead + Unpin> RecordReader<R> {
    /// Wrap a buffered source.
    pub fn new(source: R) -> Self {
        Self {
            lines: source.lines(),
            records: 0,
        }
    }

    /// Number of records read so far.
    pub fn records(&self) -> u64 {
        self.records
    }

    /// Read the next record.
    ///
    /// Returns `Ok(None)` at end of stream. Blank lines are skipped. This method
    /// is cancel safe: a pending call can be dropped inside `tokio::select!`
    /// without losing a partially read line.
    pub async fn next_record(&mut self) -> Result<Option<Value>> {
        loop {
            let line = match self.lines.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => return Ok(None),
                Err(e) => return Err(Error::Decode(e.to_string())),
            };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let value = serde_json::from_str(line).map_err(|e| Error::Decode(e.to_string()))?;
            self.records += 1;
            return Ok(Some(value));
        }
    }
}
