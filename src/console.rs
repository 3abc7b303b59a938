//! Console output for the interactive prompt
//!
//! All user-visible lines live here: [`line`] renders a [`Notice`] to
//! its exact text, [`render`] writes it to the terminal, and [`prompt`]
//! writes the input prompt without a trailing newline.

use std::io::Write;

use crate::session::Notice;

/// Banner printed at startup
pub const BANNER: &str = "Star Wars Character Search";

/// Input prompt, written without a trailing newline
pub const PROMPT: &str = "Enter character name to search (or \"quit\" to exit): ";

/// Render a notice to its display text
#[must_use]
pub fn line(notice: &Notice) -> String {
    match notice {
        Notice::Connected => "Connected to server".to_string(),
        Notice::Disconnected => "Disconnected from server".to_string(),
        Notice::ConnectionError(detail) => format!("Connection error: {detail}"),
        Notice::Searching { query } => format!("Searching for: '{query}'..."),
        Notice::SearchStarted { query, expected } => {
            format!("\nStarting search for '{query}' (expecting {expected} results)...")
        }
        Notice::Result {
            page,
            total,
            name,
            films,
        } => format!("{page}/{total} {name} - [{}]", films.join(", ")),
        Notice::SearchComplete { query, duration } => {
            format!("\nSearch complete for '{query}' (took {duration}s)\n")
        }
        Notice::ServerError(message) => format!("Error: {message}"),
        Notice::InvalidQuery => "Please enter a valid character name".to_string(),
        Notice::SearchInProgress => "Previous search still in progress...".to_string(),
        Notice::InvalidResponse => "Invalid response format from server".to_string(),
        Notice::ProcessingError(detail) => {
            format!("Error processing search response: {detail}")
        }
        Notice::Closing => "Closing connection...".to_string(),
    }
}

/// Write a notice to the terminal
///
/// Informational notices go to stdout, error notices to stderr.
pub fn render(notice: &Notice) {
    let text = line(notice);
    if notice.is_error() {
        eprintln!("{text}");
    } else {
        println!("{text}");
    }
}

/// Print the startup banner
pub fn banner() {
    println!("{BANNER}");
}

/// Write the input prompt and flush, leaving the cursor on the line
pub fn prompt() {
    let mut out = std::io::stdout();
    let _ = write!(out, "{PROMPT}");
    let _ = out.flush();
}
