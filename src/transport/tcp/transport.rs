//! TCP transport for the search server connection

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use futures::SinkExt;
use tokio::net::tcp::OwnedWriteHalf;
use tokio::sync::{Mutex, mpsc};
use tokio::task::JoinHandle;
use tokio_util::codec::{FramedWrite, LinesCodec};

use crate::error::{Result, SearchError};
use crate::transport::{Transport, TransportEvent};
use crate::types::events::EventFrame;

use super::config::TcpConfig;

/// Framed writer half of the active connection
pub(super) type FrameWriter = FramedWrite<OwnedWriteHalf, LinesCodec>;

/// TCP transport for the search server
///
/// One background task owns the connection lifecycle: it dials the
/// server, reads inbound frames, and redials after a lost connection.
/// The writer half is shared with this handle so events can be emitted
/// while the task reads.
pub struct TcpTransport {
    pub(super) config: TcpConfig,
    pub(super) writer: Arc<Mutex<Option<FrameWriter>>>,
    pub(super) ready: Arc<AtomicBool>,
    pub(super) closed: Arc<AtomicBool>,
    pub(super) events_tx: mpsc::UnboundedSender<Result<TransportEvent>>,
    pub(super) events_rx: Option<mpsc::UnboundedReceiver<Result<TransportEvent>>>,
    pub(super) conn_task: Option<JoinHandle<()>>,
}

impl TcpTransport {
    /// Create a new TCP transport
    ///
    /// # Arguments
    /// * `config` - Server address configuration
    #[must_use]
    pub fn new(config: TcpConfig) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            config,
            writer: Arc::new(Mutex::new(None)),
            ready: Arc::new(AtomicBool::new(false)),
            closed: Arc::new(AtomicBool::new(false)),
            events_tx,
            events_rx: Some(events_rx),
            conn_task: None,
        }
    }
}

impl Transport for TcpTransport {
    async fn connect(&mut self) -> Result<()> {
        self.connect_impl()
    }

    async fn emit(&mut self, event: &str, data: serde_json::Value) -> Result<()> {
        if !self.is_ready() {
            return Err(SearchError::transport(
                "Transport is not ready for emission",
            ));
        }

        let frame = EventFrame {
            event: event.to_string(),
            data,
        };
        let line = serde_json::to_string(&frame)?;

        let mut writer = self.writer.lock().await;
        let writer = writer
            .as_mut()
            .ok_or_else(|| SearchError::transport("connection writer not available"))?;

        writer
            .send(line)
            .await
            .map_err(|e| SearchError::transport(format!("Failed to write frame: {e}")))?;

        Ok(())
    }

    fn events(&mut self) -> mpsc::UnboundedReceiver<Result<TransportEvent>> {
        self.events_impl()
    }

    fn is_ready(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }

    async fn close(&mut self) -> Result<()> {
        self.close_impl().await
    }
}

impl Drop for TcpTransport {
    fn drop(&mut self) {
        self.drop_impl();
    }
}
