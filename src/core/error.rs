use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
///
/// The collector never surfaces these to its caller; they show up in the
/// typed outcomes ([`crate::QuoteOutcome`], [`crate::ArchiveLoad`]) and in
/// the logs.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server returned an unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error, with the API key masked.
        url: String,
    },

    /// The response parsed as JSON but did not carry a usable `05. price`.
    #[error("no price in Global Quote response for {symbol}: {detail}")]
    MissingPrice {
        /// The symbol that was requested.
        symbol: String,
        /// What was wrong with the response.
        detail: String,
    },

    /// JSON (de)serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The archive file holds JSON that is not a top-level object.
    #[error("malformed archive: {0}")]
    Archive(String),

    /// A filesystem operation on the archive failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A builder was given incomplete or invalid parameters.
    #[error("invalid parameters: {0}")]
    InvalidParams(String),
}
