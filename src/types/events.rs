//! Wire types for the search event protocol
//!
//! Every frame on the connection is one JSON envelope carrying a named
//! event. The `search` event flows in both directions: outbound with a
//! [`SearchQuery`] payload, inbound with a [`SearchReply`] payload.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SearchError};

/// Name of the search event on the wire, both directions
pub const EVENT_SEARCH: &str = "search";

/// Envelope for one named event, serialized onto a single line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventFrame {
    /// Event name
    pub event: String,
    /// Event payload
    pub data: serde_json::Value,
}

/// Outbound search query payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Character name to search for
    pub query: String,
}

/// One page of results for a running search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageReply {
    /// Character name
    pub name: String,
    /// Films the character appears in
    pub films: Vec<String>,
    /// 1-based index of this page
    pub page: i64,
    /// Total number of pages for the whole query
    pub result_count: i64,
}

/// Error reply terminating a search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorReply {
    /// Human-readable error text from the server
    pub error: String,
    /// Page marker, -1 on errors
    pub page: i64,
    /// Result count marker, -1 on errors
    pub result_count: i64,
}

/// Classified inbound search reply
///
/// Untagged: the error shape is tried first, so a payload carrying an
/// `error` field classifies as an error even when result fields are
/// also present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SearchReply {
    /// Terminal error reply
    Error(ErrorReply),
    /// One page of results
    Page(PageReply),
}

/// Parse a raw event payload into a typed search reply
///
/// # Arguments
/// * `data` - Raw JSON payload of a `search` event
///
/// # Errors
/// Returns `SearchError::ReplyParse` if the payload matches neither the
/// page nor the error shape
pub fn parse_reply(data: serde_json::Value) -> Result<SearchReply> {
    serde_json::from_value(data.clone()).map_err(|e| {
        SearchError::reply_parse(format!("Failed to parse search reply: {e}"), Some(data))
    })
}
