//! Replaying a recorded progress stream.
//!
//! A recorded stream is the raw engine body saved to a file, one JSON record
//! per line. With a delay the records are fed through a pipe one at a time,
//! which makes a replay look like a live pull.

use super::RecordSource;
use crate::error::{Error, Result};

use std::path::Path;
use std::time::Duration;
use tokio::fs::File;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::debug;

/// Pipe capacity for paced replays.
const PIPE_CAPACITY: usize = 64 * 1024;

/// Open a recorded stream. `-` reads standard input.
pub async fn open_replay(path: &Path, delay: Option<Duration>) -> Result<RecordSource> {
    let source: RecordSource = if path == Path::new("-") {
        Box::new(BufReader::new(tokio::io::stdin()))
    } else {
        let file = File::open(path).await.map_err(|e| {
            Error::source_construction(format!("cannot open replay {}: {}", path.display(), e))
        })?;
        Box::new(BufReader::new(file))
    };

    Ok(match delay {
        Some(delay) if !delay.is_zero() => paced(source, delay),
        _ => source,
    })
}

/// Re-emit `source` one line per `delay`.
///
/// The feeding task stops as soon as the returned reader is dropped.
pub fn paced<R>(source: R, delay: Duration) -> RecordSource
where
    R: AsyncBufRead + Send + Unpin + 'static,
{
    let (reader, mut writer) = tokio::io::duplex(PIPE_CAPACITY);

    tokio::spawn(async move {
        let mut lines = source.lines();
        loop {
            let line = match lines.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(e) => {
                    debug!("replay source failed: {}", e);
                    break;
                }
            };
            if writer.write_all(line.as_bytes()).await.is_err()
                || writer.write_all(b"\n").await.is_err()
            {
                debug!("replay reader closed");
                break;
            }
            tokio::time::sleep(delay).await;
        }
    });

    Box::new(BufReader::new(reader))
}
