//! Configuration constants and types for the TCP transport

use std::time::Duration;

/// Default server address
pub const DEFAULT_SERVER_ADDR: &str = "127.0.0.1:3000";

/// Maximum length of one event frame in bytes (1MB)
pub const MAX_FRAME_BYTES: usize = 1024 * 1024;

/// Delay between reconnection attempts
pub const RECONNECT_DELAY: Duration = Duration::from_secs(2);

/// TCP transport configuration
#[derive(Debug, Clone)]
pub struct TcpConfig {
    /// Server address to connect to (host:port)
    pub addr: String,
}

impl TcpConfig {
    /// Create a configuration for the given server address
    pub fn new(addr: impl Into<String>) -> Self {
        Self { addr: addr.into() }
    }
}

impl Default for TcpConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SERVER_ADDR)
    }
}

impl From<String> for TcpConfig {
    fn from(addr: String) -> Self {
        Self::new(addr)
    }
}

impl From<&str> for TcpConfig {
    fn from(addr: &str) -> Self {
        Self::new(addr)
    }
}
