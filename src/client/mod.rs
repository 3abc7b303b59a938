//! `SearchClient` for the interactive search session
//!
//! This module provides the controller that drives the search session:
//! it owns the transport and the session state, multiplexes transport
//! events, user input lines, and termination signals into the state
//! machine, and executes the effects each transition returns.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────┐
//! │                     SearchClient                      │
//! │                                                       │
//! │   stdin lines ──┐                                     │
//! │   signals ──────┼──▶ select! ──▶ machine::handle ──┐  │
//! │   transport ────┘                                  │  │
//! │   events                 ┌─────────────────────────┘  │
//! │                          ▼                            │
//! │               effects: notice / prompt /              │
//! │                        emit / shutdown                │
//! └───────────────────────────────────────────────────────┘
//! ```
//!
//! **Key Design Points:**
//! - The state machine is pure; the client is the only component that
//!   performs I/O side effects
//! - `SearchState` is owned exclusively by the event loop, so handlers
//!   run to completion without synchronization
//! - Effects execute in the order the machine returns them
//! - A failed emission re-enters the machine as a connect-error event,
//!   so every recovery path is a machine transition
//!
//! # Example
//!
//! ```no_run
//! use swsearch::{SearchClient, TcpConfig, TcpTransport};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let transport = TcpTransport::new(TcpConfig::default());
//!     let mut client = SearchClient::new(transport);
//!     client.run().await?;
//!     Ok(())
//! }
//! ```

mod client_impl;

use crate::session::SearchState;
use crate::transport::TcpTransport;

/// Interactive client driving the search session
///
/// Owns the transport and the single [`SearchState`] value. [`run`]
/// connects the transport and loops until a quit directive, input EOF,
/// or a termination signal.
///
/// [`run`]: SearchClient::run
pub struct SearchClient {
    /// Transport layer
    transport: TcpTransport,
    /// Session state, owned exclusively by the event loop
    state: SearchState,
}
