use thiserror::Error;

/// Errors surfaced by the throwing fetch operations
///
/// The degrading operations (`evolution_stages`, `ability_details`,
/// `weaknesses`) never return these; they log and fall back instead.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {status} fetching {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("could not decode {url}: {source}")]
    Decode {
        url: String,
        source: serde_json::Error,
    },
}
