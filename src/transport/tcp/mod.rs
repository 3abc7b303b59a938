//! TCP transport implementation for the search connection
//!
//! This module provides a transport implementation that maintains a
//! persistent TCP connection to the search server and exchanges
//! newline-delimited JSON event frames over it.

mod config;
mod lifecycle;
mod reader;
mod transport;

// Re-export public types
pub use config::TcpConfig;
pub use transport::TcpTransport;
