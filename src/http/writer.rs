use crate::http::response::{PROTOCOL, Response};
use tokio::io::{AsyncWrite, AsyncWriteExt};

#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
    /// The body file could not be read back at write time. Fails only the
    /// offending connection; the response status line and headers may have
    /// already been sent.
    #[error("reading body file {path:?} failed: {source}")]
    BodyRead {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
}

/// Serializes responses onto an output stream.
///
/// Writing happens in three ordered phases, each flushed and each
/// independently fallible: the status line, the sorted headers, then the
/// body. A failure in any phase aborts the write.
pub struct ResponseWriter<W> {
    stream: W,
}

impl<W: AsyncWrite + Unpin> ResponseWriter<W> {
    pub fn new(stream: W) -> Self {
        Self { stream }
    }

    pub async fn write(&mut self, res: &Response) -> Result<(), WriteError> {
        self.write_status_line(res).await?;
        self.write_sorted_headers(res).await?;
        self.write_body(res).await?;
        Ok(())
    }

    /// Phase 1: `"HTTP/1.1 200 OK\r\n"`.
    async fn write_status_line(&mut self, res: &Response) -> Result<(), WriteError> {
        let line = format!(
            "{} {} {}\r\n",
            PROTOCOL,
            res.status.as_u16(),
            res.status.reason_phrase()
        );
        self.stream.write_all(line.as_bytes()).await?;
        self.stream.flush().await?;
        Ok(())
    }

    /// Phase 2: every header as `"Key: value\r\n"` in sorted key order,
    /// then the terminating blank line. Sorted output keeps serialization
    /// deterministic regardless of insertion order.
    async fn write_sorted_headers(&mut self, res: &Response) -> Result<(), WriteError> {
        let mut buf = String::new();
        for (key, value) in res.headers.iter() {
            buf.push_str(key);
            buf.push_str(": ");
            buf.push_str(value);
            buf.push_str("\r\n");
        }
        buf.push_str("\r\n");

        self.stream.write_all(buf.as_bytes()).await?;
        self.stream.flush().await?;
        Ok(())
    }

    /// Phase 3: the file's bytes, verbatim. Writes nothing when the
    /// response has no file to serve.
    async fn write_body(&mut self, res: &Response) -> Result<(), WriteError> {
        let Some(path) = &res.file_path else {
            return Ok(());
        };

        let data = tokio::fs::read(path).await.map_err(|source| WriteError::BodyRead {
            path: path.clone(),
            source,
        })?;

        self.stream.write_all(&data).await?;
        self.stream.flush().await?;
        Ok(())
    }
}
