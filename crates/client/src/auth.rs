//! Account endpoints: register, login, logout, current user.

use {
    reqwest::Method,
    serde::{Deserialize, Serialize},
};

use crate::{
    error::Result,
    gateway::{ApiClient, Message},
};

/// Body for `POST /auth/register`.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// Body for `POST /auth/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// A DataHub account.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: String,
}

/// `{ "user": … }` body returned by the auth endpoints.
///
/// Registration may succeed with a provisioning warning attached.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    #[serde(default)]
    pub warning: Option<String>,
}

impl ApiClient {
    /// `POST /auth/register`
    pub async fn register(&self, req: &RegisterRequest) -> Result<Option<AuthResponse>> {
        self.send_with_body(Method::POST, "/auth/register", req).await
    }

    /// `POST /auth/login` — a 2xx response means the server has set the
    /// session cookie on this client.
    pub async fn login(&self, req: &LoginRequest) -> Result<Option<AuthResponse>> {
        self.send_with_body(Method::POST, "/auth/login", req).await
    }

    /// `POST /auth/logout`
    pub async fn logout(&self) -> Result<Option<Message>> {
        self.send(Method::POST, "/auth/logout").await
    }

    /// `GET /auth/me`
    pub async fn me(&self) -> Result<Option<AuthResponse>> {
        self.send(Method::GET, "/auth/me").await
    }
}
