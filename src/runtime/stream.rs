//! Live forwarding of a child's output, one line at a time

use crate::runtime::host::OutputSink;
use std::io;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

/// Receiving half of a line stream
pub type LineReceiver = mpsc::UnboundedReceiver<String>;

/// Read `source` on its own task, sending each line (ending included) down a channel
///
/// The channel closes when `source` reaches end of file, which for a child's
/// stdout happens when the process exits. There is no other way to stop the
/// task early.
pub fn stream_lines<R>(source: R) -> (LineReceiver, JoinHandle<io::Result<()>>)
where
    R: AsyncRead + Unpin + Send + 'static,
{
    let (tx, rx) = mpsc::unbounded_channel();

    let handle = tokio::spawn(async move {
        let mut reader = BufReader::new(source);
        let mut buf = Vec::new();
        let mut count = 0usize;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf).await? == 0 {
                break;
            }
            // A lone `\r` inside the chunk ends a line too
            let chunk = normalize_newlines(&String::from_utf8_lossy(&buf));
            for line in chunk.split_inclusive('\n') {
                trace!("streamed line: {:?}", line);
                if tx.send(line.to_string()).is_err() {
                    debug!("Line receiver dropped, stopping output stream");
                    return Ok(());
                }
                count += 1;
            }
        }

        debug!("Output stream closed after {} lines", count);
        Ok(())
    });

    (rx, handle)
}

/// Append every received line to `sink` until the channel closes
///
/// Returns the concatenation of all lines.
pub async fn forward_lines(mut lines: LineReceiver, sink: &mut dyn OutputSink) -> String {
    let mut captured = String::new();
    while let Some(line) = lines.recv().await {
        sink.append(&line);
        captured.push_str(&line);
    }
    captured
}

/// Translate `\r\n` and lone `\r` line endings to `\n`
pub fn normalize_newlines(text: &str) -> String {
    if !text.contains('\r') {
        return text.to_string();
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}
