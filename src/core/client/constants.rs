//! Centralized constants for the default host and UA.

/// Default desktop UA, matching what browser sessions present to the API.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (X11; Linux x86_64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/122.0.0.0 Safari/537.36"
);

/// people-pa API base (endpoint paths are joined onto it).
pub(crate) const DEFAULT_BASE_URL: &str = "https://people-pa.clients6.google.com";

/// Query parameter carrying the API key, when one is configured.
pub(crate) const API_KEY_PARAM: &str = "key";
