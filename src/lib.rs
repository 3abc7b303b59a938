//! # Star Wars Character Search Client
//!
//! An interactive command-line client that searches for Star Wars
//! characters over a persistent, event-driven connection. Each query is
//! answered by an unbounded stream of paginated response events; the
//! client reassembles them into a completed search session before
//! prompting for the next query.
//!
//! ## Quick Start
//!
//! ```no_run
//! use swsearch::{SearchClient, TcpConfig, TcpTransport};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let transport = TcpTransport::new(TcpConfig::new("127.0.0.1:3000"));
//!     let mut client = SearchClient::new(transport);
//!     client.run().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! The crate is organized around one owned session value and a pure
//! transition function:
//!
//! - [`session`]: the search-session state machine. [`session::handle`]
//!   consumes the current [`SearchState`] and one [`SessionEvent`] and
//!   returns the next state plus effect descriptions; it performs no I/O
//! - [`client`]: the session controller. Owns the state and the
//!   transport, multiplexes transport events, stdin lines, and signals
//!   on a single `select!` loop, and executes the returned effects
//! - [`transport`]: the connection boundary. [`TcpTransport`] keeps a
//!   persistent connection to the server, reconnects after losses, and
//!   exchanges newline-delimited JSON event frames
//! - [`console`]: every user-visible line of output
//! - [`types`]: wire envelope, query, and reply types
//! - [`error`]: error types and handling
//!
//! ## Session Model
//!
//! At most one search is outstanding at a time. A query moves the
//! session from idle to pending; the first response event initializes
//! the running session with the expected page count; the session
//! completes when an event's page index equals its result count. Server
//! errors, disconnects, and malformed responses all collapse the
//! session back to idle and re-prompt, keeping the client alive.
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T, SearchError>`](Result).
//! Errors use `thiserror` with full context; anomalies on the session
//! path degrade to a user-visible notice plus a reset rather than
//! terminating the process.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod console;
pub mod error;
pub mod session;
pub mod transport;
pub mod types;

// Re-export commonly used types for external API
pub use client::SearchClient;
pub use error::{Result, SearchError};
pub use session::{Effect, Notice, SearchState, SessionEvent};
pub use transport::{TcpConfig, TcpTransport, Transport, TransportEvent};
pub use types::events::{
    EVENT_SEARCH, ErrorReply, EventFrame, PageReply, SearchQuery, SearchReply, parse_reply,
};

/// Version of the client
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
