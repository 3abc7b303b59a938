//! Lifecycle management for the TCP transport (connect, close)

use std::sync::atomic::Ordering;

use crate::error::{Result, SearchError};

use super::transport::TcpTransport;

impl TcpTransport {
    /// Start the background connection task
    ///
    /// Idempotent: a second call while the task is running does nothing.
    ///
    /// # Errors
    /// Returns error if the transport was already closed
    pub(super) fn connect_impl(&mut self) -> Result<()> {
        if self.closed.load(Ordering::SeqCst) {
            return Err(SearchError::transport("transport is closed"));
        }
        if self.conn_task.is_some() {
            return Ok(());
        }

        self.conn_task = Some(self.spawn_connection_task());
        Ok(())
    }

    /// Close the transport and clean up resources
    pub(super) async fn close_impl(&mut self) -> Result<()> {
        self.closed.store(true, Ordering::SeqCst);
        self.ready.store(false, Ordering::SeqCst);

        if let Some(task) = self.conn_task.take() {
            task.abort();
        }

        // Dropping the writer closes the connection.
        *self.writer.lock().await = None;

        Ok(())
    }

    /// Handle Drop cleanup
    pub(super) fn drop_impl(&mut self) {
        self.closed.store(true, Ordering::SeqCst);
        self.ready.store(false, Ordering::SeqCst);

        if let Some(task) = self.conn_task.take() {
            task.abort();
        }
    }
}
