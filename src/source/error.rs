use thiserror::Error;

/// Why a movie lookup failed. The game treats every variant the same way;
/// the detail only ends up in the log.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to movie lookup service failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("movie lookup service answered with status {0}")]
    Status(u16),

    #[error("malformed movie payload: {0}")]
    Decode(#[from] serde_json::Error),
}
