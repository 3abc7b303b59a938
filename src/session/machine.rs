//! Pure transition function for the search session
//!
//! [`handle`] is the single dispatch point: it consumes the current
//! [`SearchState`] and one [`SessionEvent`] and returns the next state
//! together with the [`Effect`]s the controller must execute. Every
//! anomaly degrades to a full reset plus a user-visible notice; the
//! machine itself never fails and never performs I/O.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use crate::session::effects::{Effect, Notice};
use crate::session::state::SearchState;
use crate::types::events::{PageReply, SearchQuery, SearchReply, parse_reply};

/// One input to the session state machine
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// Transport established the connection
    Connected,
    /// Transport lost the connection
    Disconnected,
    /// Transport failed to establish the connection or deliver an emission
    ConnectError(String),
    /// Inbound payload of a `search` event
    Reply(serde_json::Value),
    /// The transport could not decode an inbound frame
    DeliveryError(String),
    /// One line typed by the user
    Line(String),
    /// Quit directive, input EOF, or termination signal
    Terminate,
}

/// Advance the session by one event
///
/// # Arguments
/// * `state` - Current session state, consumed
/// * `event` - The event to apply
///
/// # Returns
/// The next state and the effects to execute, in order
#[must_use]
pub fn handle(state: SearchState, event: SessionEvent) -> (SearchState, Vec<Effect>) {
    match event {
        SessionEvent::Connected => (
            SearchState::Idle,
            vec![Effect::Notice(Notice::Connected), Effect::Prompt],
        ),
        SessionEvent::Disconnected => (
            SearchState::Idle,
            vec![Effect::Notice(Notice::Disconnected)],
        ),
        SessionEvent::ConnectError(detail) => (
            SearchState::Idle,
            vec![
                Effect::Notice(Notice::ConnectionError(detail)),
                Effect::Prompt,
            ],
        ),
        SessionEvent::Line(line) => admit(state, &line),
        SessionEvent::Reply(payload) => match parse_reply(payload) {
            Ok(SearchReply::Error(reply)) => (
                SearchState::Idle,
                vec![
                    Effect::Notice(Notice::ServerError(reply.error)),
                    Effect::Prompt,
                ],
            ),
            Ok(SearchReply::Page(reply)) => accumulate(state, reply),
            Err(_) => (
                SearchState::Idle,
                vec![Effect::Notice(Notice::InvalidResponse), Effect::Prompt],
            ),
        },
        SessionEvent::DeliveryError(detail) => (
            SearchState::Idle,
            vec![
                Effect::Notice(Notice::ProcessingError(detail)),
                Effect::Prompt,
            ],
        ),
        SessionEvent::Terminate => (
            SearchState::Idle,
            vec![Effect::Notice(Notice::Closing), Effect::Shutdown],
        ),
    }
}

/// Admit or reject one line of user input
fn admit(state: SearchState, line: &str) -> (SearchState, Vec<Effect>) {
    // The quit directive matches the raw line, before trimming.
    if line.eq_ignore_ascii_case("quit") {
        return (
            SearchState::Idle,
            vec![Effect::Notice(Notice::Closing), Effect::Shutdown],
        );
    }

    let query = line.trim();
    if query.is_empty() {
        return (
            state,
            vec![Effect::Notice(Notice::InvalidQuery), Effect::Prompt],
        );
    }

    if state.is_searching() {
        return (
            state,
            vec![Effect::Notice(Notice::SearchInProgress), Effect::Prompt],
        );
    }

    // A pending query without a response yet is not in progress; a new
    // submission replaces it.
    let query = query.to_string();
    (
        SearchState::Pending {
            query: query.clone(),
        },
        vec![
            Effect::Notice(Notice::Searching {
                query: query.clone(),
            }),
            Effect::Emit(SearchQuery { query }),
        ],
    )
}

/// Fold one result page into the session
fn accumulate(state: SearchState, reply: PageReply) -> (SearchState, Vec<Effect>) {
    let mut effects = Vec::new();

    // The first page of a session derives the tracking fields from the
    // event itself; later pages reuse them.
    let (query, total, mut received, since) = match state {
        SearchState::InProgress {
            query,
            total,
            received,
            since,
        } => (query, total, received, since),
        SearchState::Pending { query } => {
            effects.push(Effect::Notice(Notice::SearchStarted {
                query: query.clone(),
                expected: reply.result_count,
            }));
            (query, reply.result_count, BTreeSet::new(), Utc::now())
        }
        SearchState::Idle => {
            effects.push(Effect::Notice(Notice::SearchStarted {
                query: String::new(),
                expected: reply.result_count,
            }));
            (String::new(), reply.result_count, BTreeSet::new(), Utc::now())
        }
    };

    received.insert(reply.page);
    effects.push(Effect::Notice(Notice::Result {
        page: reply.page,
        total: reply.result_count,
        name: reply.name,
        films: reply.films,
    }));

    // Completion is decided by the event's own page fields, never by
    // how many pages have been collected.
    if reply.page == reply.result_count {
        effects.push(Effect::Notice(Notice::SearchComplete {
            query,
            duration: format_duration(Some(since)),
        }));
        effects.push(Effect::Prompt);
        (SearchState::Idle, effects)
    } else {
        (
            SearchState::InProgress {
                query,
                total,
                received,
                since,
            },
            effects,
        )
    }
}

/// Render an elapsed session duration in seconds with one decimal place
///
/// Returns `"0.0"` when no session start is known. Negative elapsed
/// time clamps to zero.
#[must_use]
pub fn format_duration(started: Option<DateTime<Utc>>) -> String {
    match started {
        None => "0.0".to_string(),
        Some(start) => {
            let millis = Utc::now().signed_duration_since(start).num_milliseconds();
            let seconds = (millis as f64 / 1000.0).max(0.0);
            format!("{seconds:.1}")
        }
    }
}
