use thiserror::Error;

/// Failures surfaced by the fetch operations, split so callers can tell
/// "could not fetch" apart from "could not save".
#[derive(Debug, Error)]
pub enum FetchError {
    /// The GET request never completed (DNS, connection, TLS).
    #[error("failed to fetch {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered, but with a non-success status code.
    #[error("server returned {status} for {url}")]
    UnsuccessfulStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Directory creation or the file write failed.
    #[error("failed to save image: {0}")]
    Filesystem(#[from] std::io::Error),
}
