//! JSON-lines signal source
//!
//! Reads one [`SignalRecord`] per line from any async reader (stdin in the
//! binary) and forwards them, in order, to the shortcut state machine.

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use super::signal::SignalRecord;

/// Errors that can occur while reading raw signals
#[derive(Debug, thiserror::Error)]
pub enum SignalError {
    #[error("failed to read signal stream: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed signal: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parse one line of input. Blank lines yield `None`.
pub fn parse_line(line: &str) -> Result<Option<SignalRecord>, SignalError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    Ok(Some(serde_json::from_str(line)?))
}

/// Line-oriented reader of raw key signals
pub struct SignalSource<R> {
    reader: R,
}

impl<R> SignalSource<R>
where
    R: AsyncBufRead + Unpin,
{
    /// Wrap a buffered reader of JSON lines
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Forward signals until the reader hits EOF or the receiver is dropped.
    ///
    /// Malformed lines are logged and skipped. Returns the number of
    /// signals forwarded.
    pub async fn run(self, signal_tx: mpsc::Sender<SignalRecord>) -> Result<usize, SignalError> {
        let mut lines = self.reader.lines();
        let mut forwarded = 0;
        let mut line_no = 0usize;

        info!("signal source started");

        while let Some(line) = lines.next_line().await? {
            line_no += 1;
            let record = match parse_line(&line) {
                Ok(Some(record)) => record,
                Ok(None) => continue,
                Err(e) => {
                    warn!(line = line_no, error = %e, "skipping malformed signal");
                    continue;
                }
            };

            debug!(?record, "raw signal");
            if signal_tx.send(record).await.is_err() {
                warn!("signal receiver closed, stopping source");
                break;
            }
            forwarded += 1;
        }

        info!(forwarded, "signal source stopped");
        Ok(forwarded)
    }
}
