//! Search session core
//!
//! The session is modeled as a pure state machine: [`machine::handle`]
//! consumes the current [`SearchState`] and one [`SessionEvent`] and
//! returns the next state plus the [`Effect`]s to execute. All I/O
//! stays in the controller that owns the state.
//!
//! - [`state`] - the tagged session state and its accessors
//! - [`effects`] - effect and notice descriptions
//! - [`machine`] - the transition function

pub mod effects;
pub mod machine;
pub mod state;

pub use effects::{Effect, Notice};
pub use machine::{SessionEvent, format_duration, handle};
pub use state::SearchState;
