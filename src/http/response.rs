use crate::http::headers::HeaderMap;
use crate::http::mime;
use crate::http::request::Request;
use std::fs::Metadata;
use std::path::PathBuf;
use std::time::SystemTime;

/// Protocol version written on every response.
pub const PROTOCOL: &str = "HTTP/1.1";

/// HTTP status codes the server can emit.
///
/// The numeric codes and reason phrases live here as static data; the
/// writer looks the phrase up through [`StatusCode::reason_phrase`], so the
/// set of producible codes and the reason-phrase table can never drift
/// apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 400 Bad Request
    BadRequest,
    /// 404 Not Found
    NotFound,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use slate::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::BadRequest => 400,
            StatusCode::NotFound => 404,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "Not Found",
        }
    }
}

/// A complete HTTP response ready to be serialized.
///
/// Created fresh for each request/response cycle and never reused. The body,
/// when present, is identified by `file_path` and read at write time rather
/// than held in memory on the response itself.
#[derive(Debug)]
pub struct Response {
    /// The HTTP status code.
    pub status: StatusCode,
    /// Response headers; serialized in sorted key order.
    pub headers: HeaderMap,
    /// Local path of the file to serve as the body; `None` means no body.
    pub file_path: Option<PathBuf>,
    /// The valid request that led to this response. `None` for responses
    /// to requests that could not be parsed.
    pub request: Option<Request>,
}

impl Response {
    /// Builds a 200 OK response serving the file at `path`.
    ///
    /// `Content-Type` comes from the resolved path's extension,
    /// `Content-Length` and `Last-Modified` from the file metadata gathered
    /// by the resolver.
    pub fn ok(req: &Request, path: PathBuf, meta: &Metadata) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert("Date", httpdate::fmt_http_date(SystemTime::now()));
        let mtime = meta.modified().unwrap_or_else(|_| SystemTime::now());
        headers.insert("Last-Modified", httpdate::fmt_http_date(mtime));
        headers.insert("Content-Type", mime::for_path(&path));
        headers.insert("Content-Length", meta.len().to_string());
        if req.close {
            headers.insert("Connection", "close");
        }

        Self {
            status: StatusCode::Ok,
            headers,
            file_path: Some(path),
            request: Some(req.clone()),
        }
    }

    /// Builds a 404 Not Found response. No body.
    pub fn not_found(req: &Request) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert("Date", httpdate::fmt_http_date(SystemTime::now()));
        if req.close {
            headers.insert("Connection", "close");
        }

        Self {
            status: StatusCode::NotFound,
            headers,
            file_path: None,
            request: Some(req.clone()),
        }
    }

    /// Builds a 400 Bad Request response. No body, no associated request.
    ///
    /// Always carries `Connection: close`: once a request fails to parse,
    /// the stream framing can no longer be trusted.
    pub fn bad_request() -> Self {
        let mut headers = HeaderMap::new();
        headers.insert("Date", httpdate::fmt_http_date(SystemTime::now()));
        headers.insert("Connection", "close");

        Self {
            status: StatusCode::BadRequest,
            headers,
            file_path: None,
            request: None,
        }
    }
}
