//! Search session state

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

/// State of the single search session
///
/// Exactly one session exists at a time. The state starts [`Idle`],
/// moves to [`Pending`] when a query is admitted and emitted, becomes
/// [`InProgress`] on the first response event, and collapses back to
/// [`Idle`] on completion, error, or disconnect.
///
/// [`Idle`]: SearchState::Idle
/// [`Pending`]: SearchState::Pending
/// [`InProgress`]: SearchState::InProgress
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SearchState {
    /// No query submitted and nothing outstanding
    #[default]
    Idle,
    /// A query has been emitted; no response event has arrived yet
    Pending {
        /// Normalized query text
        query: String,
    },
    /// A session is running
    InProgress {
        /// Query the session belongs to
        query: String,
        /// Expected total page count, from the first response event
        total: i64,
        /// Page indices observed so far, kept for visibility only
        received: BTreeSet<i64>,
        /// Wall-clock session start, set once at initialization
        since: DateTime<Utc>,
    },
}

impl SearchState {
    /// Whether a session is currently in progress
    ///
    /// A pending query that has not produced a response event yet does
    /// not count as in progress.
    #[must_use]
    pub const fn is_searching(&self) -> bool {
        matches!(self, Self::InProgress { .. })
    }

    /// Query text of the pending or running session, empty when idle
    #[must_use]
    pub fn query(&self) -> &str {
        match self {
            Self::Idle => "",
            Self::Pending { query } | Self::InProgress { query, .. } => query,
        }
    }

    /// Expected page count of the running session, zero otherwise
    #[must_use]
    pub fn total_results(&self) -> i64 {
        match self {
            Self::InProgress { total, .. } => *total,
            _ => 0,
        }
    }

    /// Number of distinct pages received by the running session
    #[must_use]
    pub fn pages_received(&self) -> usize {
        match self {
            Self::InProgress { received, .. } => received.len(),
            _ => 0,
        }
    }

    /// Whether the given page index has been received
    #[must_use]
    pub fn has_page(&self, page: i64) -> bool {
        match self {
            Self::InProgress { received, .. } => received.contains(&page),
            _ => false,
        }
    }

    /// Wall-clock start of the running session
    #[must_use]
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::InProgress { since, .. } => Some(*since),
            _ => None,
        }
    }
}
