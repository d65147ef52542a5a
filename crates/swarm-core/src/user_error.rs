//! User-facing error messages
//!
//! Collaborator failures never reach the user verbatim. When a raw error
//! carries an HTTP status code, it is mapped to a short explanation.

use regex::Regex;
use std::sync::LazyLock;

static STATUS_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([1-5]\d{2})\b").expect("static status code pattern"));

/// First HTTP error status (400-599) mentioned in an error string
pub fn extract_status_code(raw: &str) -> Option<u16> {
    STATUS_CODE
        .captures_iter(raw)
        .filter_map(|captures| captures[1].parse::<u16>().ok())
        .find(|code| (400..600).contains(code))
}

/// Friendly message for a raw collaborator error
pub fn user_facing_error_message(raw: &str) -> String {
    let message = match extract_status_code(raw) {
        Some(401) | Some(403) => {
            "The data provider rejected our credentials. Please try again later."
        }
        Some(404) => "The requested data could not be found.",
        Some(408) | Some(504) => "The request timed out. Please try again.",
        Some(429) => {
            "We're receiving too many requests right now. Please wait a moment and try again."
        }
        Some(code) if code >= 500 => {
            "An upstream service is temporarily unavailable. Please try again shortly."
        }
        _ => "Something went wrong while processing your request. Please try again.",
    };
    message.to_string()
}
