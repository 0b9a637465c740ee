use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
///
/// Note that the public fetchers degrade most failures to sentinel values
/// (empty event list, zero-valued price record) instead of surfacing this
/// type; see the module docs for the exact policy.
#[derive(Debug, Error)]
pub enum FeedError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The data received from a provider was in an unexpected format or was
    /// missing a required field.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),
}
