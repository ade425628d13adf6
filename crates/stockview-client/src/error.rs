use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Transport and decoding failures.
///
/// An `{"error": "..."}` body from the backend is not an [`Error`]; it arrives
/// as [`SearchResult::Failed`](crate::schema::SearchResult::Failed).
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid backend url: {0}")]
    Url(#[from] url::ParseError),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}
