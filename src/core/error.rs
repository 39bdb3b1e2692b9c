use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
///
/// An upstream "not found" answer is not an error; it is reported through
/// [`LookupResult::found`](crate::LookupResult) instead.
#[derive(Debug, Error)]
pub enum PeopleError {
    /// The requested detail level does not exist for the endpoint.
    #[error("template `{template}` is not registered for endpoint `{endpoint}`")]
    UnknownTemplate {
        /// The endpoint name (e.g. `people_lookup`).
        endpoint: String,
        /// The detail level that was asked for.
        template: String,
    },

    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The response body was not valid JSON.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The server rejected the request because of rate limiting (HTTP 429).
    #[error("Rate limited at {url}")]
    RateLimited {
        /// The URL that was rate limited.
        url: String,
    },

    /// The server failed to process the request (HTTP 5xx).
    #[error("Server error {status} at {url}")]
    ServerError {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The decoded payload did not have the expected shape.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// The caller supplied an invalid configuration or argument.
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),
}
