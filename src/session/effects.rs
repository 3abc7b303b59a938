//! Effects returned by the session state machine
//!
//! The machine never performs I/O. Each transition returns a list of
//! effects describing what the controller must do next, in order.

use crate::types::events::SearchQuery;

/// One user-visible line of output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Connection to the server established
    Connected,
    /// Connection to the server lost
    Disconnected,
    /// Connection attempt or emission failed
    ConnectionError(String),
    /// A query was admitted and is about to be emitted
    Searching {
        /// Admitted query text
        query: String,
    },
    /// First response event arrived and the session initialized
    SearchStarted {
        /// Query the session belongs to
        query: String,
        /// Expected total page count
        expected: i64,
    },
    /// One result page arrived
    Result {
        /// 1-based index of this page
        page: i64,
        /// Total page count carried by this event
        total: i64,
        /// Character name
        name: String,
        /// Films the character appears in
        films: Vec<String>,
    },
    /// The session completed
    SearchComplete {
        /// Query the session belonged to
        query: String,
        /// Elapsed time in seconds, one decimal place
        duration: String,
    },
    /// The server terminated the search with an error
    ServerError(String),
    /// The submitted query was empty after trimming
    InvalidQuery,
    /// A query was rejected because one is in progress
    SearchInProgress,
    /// An inbound payload matched neither reply shape
    InvalidResponse,
    /// The transport handed up a frame it could not decode
    ProcessingError(String),
    /// The client is shutting down
    Closing,
}

impl Notice {
    /// Whether this notice belongs on stderr rather than stdout
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(
            self,
            Self::ConnectionError(_)
                | Self::ServerError(_)
                | Self::InvalidResponse
                | Self::ProcessingError(_)
        )
    }
}

/// Side effect requested by a state transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Emit a search query on the transport
    Emit(SearchQuery),
    /// Print one notice line
    Notice(Notice),
    /// Write the input prompt
    Prompt,
    /// Stop the event loop and shut down
    Shutdown,
}
