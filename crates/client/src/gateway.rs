//! The request gateway: every DataHub API call goes through here.
//!
//! The gateway issues one HTTP exchange per call and translates the outcome
//! into the three-way contract described in the crate docs. It never retries,
//! never caches, and holds no state beyond the base URL and the cookie store.

use std::sync::Arc;

use {
    reqwest::{Method, StatusCode, header},
    serde::{Serialize, de::DeserializeOwned},
    tracing::debug,
};

use crate::{
    error::{Error, Result},
    navigator::Navigator,
};

/// Path prefix appended to the origin when a client is built with
/// [`ApiClient::new`].
pub const DEFAULT_BASE_PATH: &str = "/api/v1";

/// Shown when a server error carries no readable message.
pub const FALLBACK_ERROR_MESSAGE: &str = "エラーが発生しました";

/// Standard `{ "message": … }` acknowledgement body.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Message {
    pub message: String,
}

/// HTTP access layer for the DataHub API.
///
/// Owns a cookie-enabled [`reqwest::Client`] — the session credential is a
/// cookie attached automatically to every request and never read by this
/// layer — plus an immutable base URL and the [`Navigator`] used when the
/// session has expired.
///
/// Construct one at application startup and pass it to every consumer;
/// clones share the connection pool and cookie store.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    navigator: Arc<dyn Navigator>,
}

impl ApiClient {
    /// Client for `{origin}/api/v1`.
    pub fn new(origin: impl Into<String>, navigator: Arc<dyn Navigator>) -> Result<Self> {
        let origin = origin.into();
        Self::with_base_url(
            format!("{}{DEFAULT_BASE_PATH}", origin.trim_end_matches('/')),
            navigator,
        )
    }

    /// Client with a fully spelled-out base URL, fixed for its lifetime.
    pub fn with_base_url(base_url: impl Into<String>, navigator: Arc<dyn Navigator>) -> Result<Self> {
        let http = reqwest::Client::builder().cookie_store(true).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
            navigator,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn navigator(&self) -> &dyn Navigator {
        self.navigator.as_ref()
    }

    /// Issue a bodyless request and normalize the response.
    ///
    /// Resolves to `Ok(Some(decoded))` on 2xx, `Ok(None)` after a 401 (the
    /// navigator has been pointed at the login page), or `Err(_)` for every
    /// other outcome. An empty 2xx body decodes as JSON `null`, so pick a
    /// `T` that tolerates it (`serde_json::Value`, `()`) for endpoints that
    /// may answer without content.
    pub async fn send<T>(&self, method: Method, path: &str) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        debug!(%method, path, "datahub api request");
        self.dispatch(self.request(method, path)).await
    }

    /// Same as [`send`](Self::send), with `body` serialized as JSON.
    pub async fn send_with_body<B, T>(&self, method: Method, path: &str, body: &B) -> Result<Option<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!(%method, path, "datahub api request");
        self.dispatch(self.request(method, path).json(body)).await
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        self.http
            .request(method, format!("{}{path}", self.base_url))
            .header(header::CONTENT_TYPE, "application/json")
    }

    async fn dispatch<T>(&self, request: reqwest::RequestBuilder) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        let response = request.send().await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            // Expired session: the login flow takes over and the caller's
            // continuation is unreachable in normal use. Not an error.
            self.navigator.go_to_login();
            return Ok(None);
        }

        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            return Err(Error::Api {
                message: error_message(&bytes),
            });
        }

        let value = if bytes.is_empty() {
            serde_json::from_slice(b"null")?
        } else {
            serde_json::from_slice(&bytes)?
        };
        Ok(Some(value))
    }
}

/// Pull `error.message` out of a non-2xx body, falling back to the fixed
/// message when the body is not the expected envelope.
fn error_message(bytes: &[u8]) -> String {
    let body: serde_json::Value = match serde_json::from_slice(bytes) {
        Ok(value) => value,
        Err(_) => return FALLBACK_ERROR_MESSAGE.to_owned(),
    };
    body.get("error")
        .and_then(|e| e.get("message"))
        .and_then(|m| m.as_str())
        .map(str::to_owned)
        .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_owned())
}
