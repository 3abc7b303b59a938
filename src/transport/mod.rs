//! Transport layer for the persistent search connection
//!
//! This module provides the transport abstraction and the TCP
//! implementation used to reach the search server.

pub mod tcp;

use tokio::sync::mpsc;

use crate::error::Result;

/// Connection-level event delivered by a transport
#[derive(Debug, Clone, PartialEq)]
pub enum TransportEvent {
    /// The connection was established
    Connected,
    /// The connection was lost
    Disconnected,
    /// A connection attempt failed
    ConnectError(String),
    /// A named event arrived from the server
    Event {
        /// Event name from the envelope
        name: String,
        /// Event payload
        data: serde_json::Value,
    },
}

/// Transport trait for the search server connection
///
/// This trait defines the interface for emitting named events to the
/// server and receiving connection-level events back.
pub trait Transport: Send + Sync {
    /// Connect to the transport
    ///
    /// # Errors
    /// Returns error if the connection task cannot be started
    fn connect(&mut self) -> impl std::future::Future<Output = Result<()>> + Send;

    /// Emit a named event with a JSON payload
    ///
    /// # Arguments
    /// * `event` - Event name to emit
    /// * `data` - Event payload
    ///
    /// # Errors
    /// Returns error if serialization fails or the transport is not ready
    fn emit(
        &mut self,
        event: &str,
        data: serde_json::Value,
    ) -> impl std::future::Future<Output = Result<()>> + Send;

    /// Receive transport events
    ///
    /// Returns a receiver that yields connection events and inbound named
    /// events. Frames that cannot be decoded are delivered in-band as
    /// errors. The receiver is closed when the transport is closed.
    fn events(&mut self) -> mpsc::UnboundedReceiver<Result<TransportEvent>>;

    /// Check if the transport is ready for emission
    fn is_ready(&self) -> bool;

    /// Close the transport and clean up resources
    ///
    /// # Errors
    /// Returns error if cleanup fails
    fn close(&mut self) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub use tcp::{TcpConfig, TcpTransport};
