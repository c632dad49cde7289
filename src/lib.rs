//! Slate - Minimal HTTP/1.1 static file server
//!
//! Core library for the protocol engine and connection lifecycle.

pub mod config;
pub mod http;
pub mod server;
