use std::fmt;

use async_trait::async_trait;

/// Errors that can occur while fetching the daily fact.
/// None of these are retried; the page falls back to a static message.
#[derive(Debug)]
pub enum FactError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The API answered with a non-success status.
    Api { status: u16, message: String },
    /// The body was not the JSON shape we expect.
    Parse(String),
    /// The API answered with an empty fact.
    Empty,
}

impl fmt::Display for FactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FactError::Network(msg) => write!(f, "network error: {msg}"),
            FactError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            FactError::Parse(msg) => write!(f, "parse error: {msg}"),
            FactError::Empty => write!(f, "empty fact"),
        }
    }
}

impl std::error::Error for FactError {}

/// Anything that can produce one short cat fact.
#[async_trait]
pub trait FactSource: Send + Sync {
    /// Returns the name of the source, for logging.
    fn name(&self) -> &str;

    /// Fetch a single fact. Called at most once per page lifetime.
    async fn fetch_fact(&self) -> Result<String, FactError>;
}
