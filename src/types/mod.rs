//! Type definitions for the search client
//!
//! - [`events`] - wire envelope, query, and reply types

pub mod events;

// Re-export commonly used types
pub use events::{EVENT_SEARCH, ErrorReply, EventFrame, PageReply, SearchQuery, SearchReply};
