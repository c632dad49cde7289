use crate::http::headers::HeaderMap;

/// A parsed, validated HTTP request.
///
/// Values of this type only exist in complete, valid form: the parser either
/// produces a `Request` with every invariant satisfied or a classified
/// [`ParseError`](crate::http::parser::ParseError), never a partial value.
///
/// `Host` and `Connection` do not appear in `headers`; they are promoted to
/// the dedicated `host` and `close` fields because they drive protocol-level
/// behavior.
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method; only `GET` is accepted.
    pub method: String,
    /// The request target (e.g. "/index.html"); always starts with `/`.
    /// Stored as received; trailing-slash expansion happens in the resolver.
    pub url: String,
    /// HTTP version; only `HTTP/1.1` is accepted.
    pub version: String,
    /// Remaining headers, keys stored in canonical capitalization.
    pub headers: HeaderMap,
    /// Value of the required `Host` header.
    pub host: String,
    /// True iff a `Connection` header was present with the value `close`.
    pub close: bool,
}

impl Request {
    /// Retrieves a header value by name (case-insensitive).
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key)
    }

    /// Whether the connection should remain open after the response.
    /// HTTP/1.1 defaults to keep-alive unless the client sent
    /// `Connection: close`.
    pub fn keep_alive(&self) -> bool {
        !self.close
    }
}
