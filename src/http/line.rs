use bytes::BytesMut;
use tokio::io::AsyncReadExt;

/// Read buffer growth increment.
const BUFFER_SIZE: usize = 4096;

#[derive(Debug, thiserror::Error)]
pub enum LineError {
    /// The peer closed the stream cleanly at a line boundary.
    #[error("end of stream")]
    Eof,
    /// The stream ended in the middle of a line.
    #[error("stream ended mid-line")]
    IncompleteLine,
    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Reads CRLF-terminated lines from a byte stream.
///
/// Buffers only what the socket delivers while hunting for the next `\n`,
/// so peers may send one line at a time with arbitrary delays between lines.
/// Partial data survives cancellation (a timed-out read future), and the
/// per-request `bytes_received` flag is tracked here at byte granularity so
/// the connection handler can classify a timeout even after the read future
/// was dropped.
pub struct LineReader<R> {
    stream: R,
    buf: BytesMut,
    bytes_seen: bool,
}

impl<R: AsyncReadExt + Unpin> LineReader<R> {
    pub fn new(stream: R) -> Self {
        Self {
            stream,
            buf: BytesMut::with_capacity(BUFFER_SIZE),
            bytes_seen: false,
        }
    }

    /// Resets the byte tracking for the next request cycle.
    pub fn begin_request(&mut self) {
        self.bytes_seen = !self.buf.is_empty();
    }

    /// Whether any bytes have arrived since `begin_request`.
    pub fn bytes_received(&self) -> bool {
        self.bytes_seen
    }

    /// Returns the next line with its trailing CRLF stripped.
    pub async fn read_line(&mut self) -> Result<String, LineError> {
        loop {
            if let Some(pos) = self.buf.iter().position(|&b| b == b'\n') {
                let mut line = self.buf.split_to(pos + 1);
                line.truncate(pos);
                if line.last() == Some(&b'\r') {
                    line.truncate(line.len() - 1);
                }
                return Ok(String::from_utf8_lossy(&line).into_owned());
            }

            let n = self.stream.read_buf(&mut self.buf).await?;
            if n == 0 {
                if self.buf.is_empty() {
                    return Err(LineError::Eof);
                }
                // Leftover bytes with no terminator; consume them so a
                // subsequent read reports a clean EOF.
                self.buf.clear();
                return Err(LineError::IncompleteLine);
            }
            self.bytes_seen = true;
        }
    }
}
