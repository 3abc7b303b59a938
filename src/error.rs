//! Error types for the search client

use thiserror::Error;

/// Main error type for the search client
#[derive(Error, Debug)]
pub enum SearchError {
    /// Connection error on the event stream
    #[error("Connection error: {0}")]
    Connection(String),

    /// JSON decode error when parsing a wire frame
    #[error("JSON decode error: {0}")]
    JsonDecode(#[from] serde_json::Error),

    /// Reply parse error with the raw payload that failed to parse
    #[error("Reply parse error: {message}")]
    ReplyParse {
        /// Error message
        message: String,
        /// Raw payload that failed to parse
        data: Option<serde_json::Value>,
    },

    /// Transport layer error
    #[error("Transport error: {0}")]
    Transport(String),

    /// Line framing error on the connection
    #[error("Framing error: {0}")]
    Frame(#[from] tokio_util::codec::LinesCodecError),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for search client operations
pub type Result<T> = std::result::Result<T, SearchError>;

impl SearchError {
    /// Create a connection error
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// Create a transport error
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create a reply parse error
    pub fn reply_parse(msg: impl Into<String>, data: Option<serde_json::Value>) -> Self {
        Self::ReplyParse {
            message: msg.into(),
            data,
        }
    }
}
