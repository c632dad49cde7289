//! HTTP protocol implementation.
//!
//! A strict subset of HTTP/1.1: GET only, no request bodies, persistent
//! connections with a per-request read timeout.
//!
//! # Architecture
//!
//! - **`connection`**: the per-connection state machine
//! - **`line`**: CRLF line reading, the substrate every parsing step builds on
//! - **`parser`**: turns lines into a validated request or a classified failure
//! - **`request`** / **`response`**: the protocol value types
//! - **`headers`**: canonicalizing, sorted header storage
//! - **`writer`**: deterministic response serialization
//! - **`mime`**: extension-based content-type lookup
//!
//! # Connection state machine
//!
//! ```text
//!        ┌──────────────────┐
//!        │ AwaitingRequest  │ ← timeout-bounded read of the next request
//!        └──────┬───────────┘
//!               │ parsed, or failure classified
//!               ▼
//!        ┌──────────────────┐
//!        │    Responding    │ ← write status line, headers, body
//!        └──────┬───────────┘
//!               │ Response sent
//!               ├─ Keep-Alive → AwaitingRequest (same connection)
//!               └─ Close / 400 / timeout → Closing (terminal)
//! ```
//!
//! Timeouts and peer closes before any byte arrives skip `Responding` and
//! close silently; after partial data they answer 400 first.

pub mod connection;
pub mod headers;
pub mod line;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
