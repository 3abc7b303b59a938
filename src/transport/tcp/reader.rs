//! Connection task for the TCP transport
//!
//! One background task owns the read half of the connection: it dials
//! the server, delivers inbound frames as transport events, and redials
//! after a lost connection until the transport is closed.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use futures::StreamExt;
use tokio::net::TcpStream;
use tokio::sync::{Mutex, mpsc};
use tokio::task::JoinHandle;
use tokio_util::codec::{FramedRead, FramedWrite, LinesCodec};

use crate::error::{Result, SearchError};
use crate::transport::TransportEvent;
use crate::types::events::EventFrame;

use super::config::{MAX_FRAME_BYTES, RECONNECT_DELAY, TcpConfig};
use super::transport::{FrameWriter, TcpTransport};

impl TcpTransport {
    /// Take the transport event receiver
    ///
    /// The receiver can be taken once; later calls yield a stream that
    /// reports the misuse as an in-band error.
    pub(super) fn events_impl(&mut self) -> mpsc::UnboundedReceiver<Result<TransportEvent>> {
        if let Some(rx) = self.events_rx.take() {
            return rx;
        }

        let (tx, rx) = mpsc::unbounded_channel();
        let _ = tx.send(Err(SearchError::connection("event stream already taken")));
        rx
    }

    /// Spawn the background connection task
    pub(super) fn spawn_connection_task(&self) -> JoinHandle<()> {
        let config = self.config.clone();
        let writer = self.writer.clone();
        let ready = self.ready.clone();
        let closed = self.closed.clone();
        let events = self.events_tx.clone();

        tokio::spawn(async move {
            run_connection(&config, &writer, &ready, &closed, &events).await;
        })
    }
}

/// Dial, read, and redial until the transport is closed
async fn run_connection(
    config: &TcpConfig,
    writer: &Arc<Mutex<Option<FrameWriter>>>,
    ready: &AtomicBool,
    closed: &AtomicBool,
    events: &mpsc::UnboundedSender<Result<TransportEvent>>,
) {
    loop {
        if closed.load(Ordering::SeqCst) {
            return;
        }

        match TcpStream::connect(&config.addr).await {
            Ok(stream) => {
                let (read_half, write_half) = stream.into_split();
                *writer.lock().await = Some(FramedWrite::new(
                    write_half,
                    LinesCodec::new_with_max_length(MAX_FRAME_BYTES),
                ));
                ready.store(true, Ordering::SeqCst);

                if events.send(Ok(TransportEvent::Connected)).is_err() {
                    // Receiver dropped, stop the task
                    return;
                }

                let mut frames = FramedRead::new(
                    read_half,
                    LinesCodec::new_with_max_length(MAX_FRAME_BYTES),
                );

                while let Some(frame) = frames.next().await {
                    match frame {
                        Ok(line) => {
                            let line = line.trim();
                            if line.is_empty() {
                                continue;
                            }

                            let delivered = match serde_json::from_str::<EventFrame>(line) {
                                Ok(frame) => events.send(Ok(TransportEvent::Event {
                                    name: frame.event,
                                    data: frame.data,
                                })),
                                Err(e) => events.send(Err(SearchError::JsonDecode(e))),
                            };
                            if delivered.is_err() {
                                return;
                            }
                        }
                        Err(e) => {
                            let _ = events.send(Err(e.into()));
                            break;
                        }
                    }
                }

                // Connection ended: EOF or frame error
                ready.store(false, Ordering::SeqCst);
                *writer.lock().await = None;

                if closed.load(Ordering::SeqCst) {
                    return;
                }
                if events.send(Ok(TransportEvent::Disconnected)).is_err() {
                    return;
                }
            }
            Err(e) => {
                if closed.load(Ordering::SeqCst) {
                    return;
                }
                if events
                    .send(Ok(TransportEvent::ConnectError(e.to_string())))
                    .is_err()
                {
                    return;
                }
            }
        }

        tokio::time::sleep(RECONNECT_DELAY).await;
    }
}
