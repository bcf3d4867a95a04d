use thiserror::Error;

/// Errors surfaced by [`ApiClient`](crate::ApiClient) calls.
///
/// HTTP 401 is deliberately absent: an expired session is not an error.
/// The gateway hands control to the login flow and resolves with `Ok(None)`.
#[derive(Debug, Error)]
pub enum Error {
    /// Non-2xx server response, reduced to its human-readable message.
    #[error("{message}")]
    Api { message: String },

    /// Network-level failure before or while reading a response.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// A 2xx body that could not be decoded as the expected JSON shape.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    #[must_use]
    pub fn api(message: impl Into<String>) -> Self {
        Self::Api {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
