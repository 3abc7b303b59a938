//! `SearchClient` implementation
//!
//! Constructor, event loop, and effect execution for `SearchClient`.

use tokio::io::AsyncBufReadExt;
use tokio::signal::unix::{SignalKind, signal};

use crate::console;
use crate::error::{Result, SearchError};
use crate::session::{Effect, SearchState, SessionEvent, handle};
use crate::transport::{TcpTransport, Transport, TransportEvent};
use crate::types::events::{EVENT_SEARCH, SearchQuery};

impl super::SearchClient {
    /// Create a new client over the given transport
    #[must_use]
    pub fn new(transport: TcpTransport) -> Self {
        Self {
            transport,
            state: SearchState::Idle,
        }
    }

    /// Current session state
    #[must_use]
    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Run the interactive session until quit, input EOF, or a signal
    ///
    /// Connects the transport, then multiplexes transport events, user
    /// input lines, and termination signals into the session state
    /// machine, executing the effects each transition returns. The
    /// transport is closed before returning.
    ///
    /// # Errors
    /// Returns error if the transport cannot start or signal handlers
    /// cannot be installed
    pub async fn run(&mut self) -> Result<()> {
        let mut events = self.transport.events();
        self.transport.connect().await?;

        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        let mut lines = stdin.lines();

        let mut sigint = signal(SignalKind::interrupt())?;
        let mut sigterm = signal(SignalKind::terminate())?;

        loop {
            let event = tokio::select! {
                received = events.recv() => match received {
                    Some(Ok(event)) => match Self::classify(event) {
                        Some(event) => event,
                        None => continue,
                    },
                    Some(Err(e)) => SessionEvent::DeliveryError(e.to_string()),
                    None => SessionEvent::Terminate,
                },
                line = lines.next_line() => match line {
                    Ok(Some(line)) => SessionEvent::Line(line),
                    Ok(None) => SessionEvent::Terminate,
                    Err(e) => {
                        log::error!("Input error: {e}");
                        SessionEvent::Terminate
                    }
                },
                _ = sigint.recv() => SessionEvent::Terminate,
                _ = sigterm.recv() => SessionEvent::Terminate,
            };

            if self.dispatch(event).await {
                break;
            }
        }

        self.shutdown().await
    }

    /// Map a transport event onto a session event
    ///
    /// Unknown named events are ignored.
    fn classify(event: TransportEvent) -> Option<SessionEvent> {
        match event {
            TransportEvent::Connected => Some(SessionEvent::Connected),
            TransportEvent::Disconnected => Some(SessionEvent::Disconnected),
            TransportEvent::ConnectError(detail) => Some(SessionEvent::ConnectError(detail)),
            TransportEvent::Event { name, data } => {
                if name == EVENT_SEARCH {
                    Some(SessionEvent::Reply(data))
                } else {
                    log::debug!("Ignoring unknown event: {name}");
                    None
                }
            }
        }
    }

    /// Feed one event through the state machine and execute the effects
    ///
    /// A failed emission re-enters the machine as a connect-error event,
    /// so the recovery is the same transition a failed dial takes.
    /// Returns true when the event loop should stop.
    async fn dispatch(&mut self, event: SessionEvent) -> bool {
        let mut queued = Some(event);
        let mut stop = false;

        while let Some(event) = queued.take() {
            let state = std::mem::take(&mut self.state);
            let (next, effects) = handle(state, event);
            self.state = next;

            for effect in effects {
                match effect {
                    Effect::Notice(notice) => console::render(&notice),
                    Effect::Prompt => console::prompt(),
                    Effect::Emit(query) => {
                        if let Err(e) = self.send_query(query).await {
                            // The connect-error transition emits nothing,
                            // so this settles on the next pass.
                            queued = Some(SessionEvent::ConnectError(
                                Self::emission_failure_detail(e),
                            ));
                        }
                    }
                    Effect::Shutdown => stop = true,
                }
            }
        }

        stop
    }

    /// Bare message for the connection-error notice on a failed emission
    ///
    /// The notice already carries the "Connection error:" prefix, so the
    /// transport variant's own display prefix is stripped.
    fn emission_failure_detail(error: SearchError) -> String {
        match error {
            SearchError::Transport(detail) => detail,
            other => other.to_string(),
        }
    }

    /// Serialize and emit one search query
    async fn send_query(&mut self, query: SearchQuery) -> Result<()> {
        let data = serde_json::to_value(&query)?;
        self.transport.emit(EVENT_SEARCH, data).await
    }

    /// Close the transport and discard any session in progress
    ///
    /// # Errors
    /// Returns error if transport cleanup fails
    pub async fn shutdown(&mut self) -> Result<()> {
        self.state = SearchState::Idle;
        self.transport.close().await
    }
}
