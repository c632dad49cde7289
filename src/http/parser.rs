use crate::http::headers::{HeaderMap, canonical_key};
use crate::http::line::{LineError, LineReader};
use crate::http::request::Request;
use tokio::io::AsyncReadExt;

/// Characters that may not appear in a header key.
const INVALID_KEY_CHARS: &str = " !#$%&'*+@{}[]:;.^_`|~";

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The start line did not split into exactly three fields.
    #[error("malformed start line: {0:?}")]
    MalformedStartLine(String),
    /// Method, version, or url failed validation.
    #[error("invalid request line: {0}")]
    InvalidRequestLine(String),
    /// A header line had no colon separator.
    #[error("invalid header line: {0:?}")]
    InvalidHeaderLine(String),
    /// A header key contained a forbidden character.
    #[error("invalid header key: {0:?}")]
    InvalidHeaderKey(String),
    /// No Host header was present.
    #[error("missing Host header")]
    MissingHost,
    /// The peer closed the stream at a request boundary.
    #[error("connection closed")]
    ConnectionClosed,
    /// The stream ended mid-line or failed at the transport level.
    #[error(transparent)]
    Transport(std::io::Error),
}

impl From<LineError> for ParseError {
    fn from(e: LineError) -> Self {
        match e {
            LineError::Eof => ParseError::ConnectionClosed,
            LineError::IncompleteLine => ParseError::Transport(
                std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "stream ended mid-line"),
            ),
            LineError::Io(e) => ParseError::Transport(e),
        }
    }
}

impl ParseError {
    /// Transport errors (EOF, timeout, socket failure) are handled by the
    /// connection state machine; everything else is a malformed request.
    pub fn is_transport(&self) -> bool {
        matches!(self, ParseError::ConnectionClosed | ParseError::Transport(_))
    }
}

/// Reads the next request from the stream.
///
/// Whether any bytes arrived before a failure is tracked on the reader
/// itself (`reader.bytes_received()`), so it stays observable even when the
/// read future is cancelled by a timeout.
pub async fn read_request<R: AsyncReadExt + Unpin>(
    reader: &mut LineReader<R>,
) -> Result<Request, ParseError> {
    let start_line = reader.read_line().await?;
    let (method, url, version) = parse_start_line(&start_line)?;

    if method != "GET" || version != "HTTP/1.1" {
        return Err(ParseError::InvalidRequestLine(start_line));
    }
    if !url.starts_with('/') {
        return Err(ParseError::InvalidRequestLine(start_line));
    }

    let mut headers = HeaderMap::new();
    let mut host = String::new();
    let mut close = false;

    loop {
        let line = reader.read_line().await?;
        let line = line.trim();
        if line.is_empty() {
            break;
        }

        // Host and Connection drive protocol behavior; match them by prefix
        // on the raw line rather than through the generic splitter.
        if line.starts_with("Host") {
            host = rest_after_space(line)?.to_string();
            continue;
        }
        if line.starts_with("Connection") {
            close = rest_after_space(line)? == "close";
            continue;
        }

        let (key, value) = line
            .split_once(':')
            .ok_or_else(|| ParseError::InvalidHeaderLine(line.to_string()))?;

        let key = canonical_key(key.trim());
        if key.contains(|c| INVALID_KEY_CHARS.contains(c)) {
            return Err(ParseError::InvalidHeaderKey(key));
        }

        // A repeated key silently overwrites the earlier value.
        headers.insert(key, value.trim().to_string());
    }

    if host.is_empty() {
        return Err(ParseError::MissingHost);
    }

    Ok(Request {
        method: method.to_string(),
        url: url.to_string(),
        version: version.to_string(),
        headers,
        host,
        close,
    })
}

/// Splits the start line into exactly three space-separated fields.
fn parse_start_line(line: &str) -> Result<(&str, &str, &str), ParseError> {
    let fields: Vec<&str> = line.split(' ').collect();
    match fields[..] {
        [method, url, version] => Ok((method, url, version)),
        _ => Err(ParseError::MalformedStartLine(line.to_string())),
    }
}

fn rest_after_space(line: &str) -> Result<&str, ParseError> {
    line.split_once(' ')
        .map(|(_, rest)| rest)
        .ok_or_else(|| ParseError::InvalidHeaderLine(line.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn parse_simple_get() {
        let input = &b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n"[..];
        let mut reader = LineReader::new(input);

        let req = read_request(&mut reader).await.unwrap();

        assert_eq!(req.url, "/");
        assert_eq!(req.host, "example.com");
        assert!(!req.close);
    }
}
