//! TCP listener and document-root resolution.

pub mod listener;
pub mod resolve;
