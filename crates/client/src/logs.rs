//! Retrieval of the per-user API request log.

use {reqwest::Method, serde::Deserialize};

use crate::{
    error::Result,
    gateway::{ApiClient, Message},
};

/// Default page size for log retrieval.
pub const DEFAULT_LOG_LIMIT: u32 = 50;

/// Paging parameters for `GET /api-logs`.
#[derive(Debug, Clone, Copy)]
pub struct ApiLogQuery {
    pub limit: u32,
    pub offset: u32,
}

impl Default for ApiLogQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LOG_LIMIT,
            offset: 0,
        }
    }
}

impl ApiLogQuery {
    pub(crate) fn query_string(&self) -> String {
        format!("limit={}&offset={}", self.limit, self.offset)
    }
}

/// One logged API exchange.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiLogEntry {
    pub id: i64,
    /// RFC 3339 timestamp of the request.
    pub timestamp: String,
    pub method: String,
    pub endpoint: String,
    pub status_code: u16,
    pub elapsed_ms: i64,
    pub request_body: Option<String>,
    pub response_body: Option<String>,
}

/// `GET /api-logs` response.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiLogPage {
    pub logs: Vec<ApiLogEntry>,
    pub total: i64,
    pub limit: u32,
    pub offset: u32,
}

impl ApiClient {
    /// `GET /api-logs`
    pub async fn api_logs(&self, query: ApiLogQuery) -> Result<Option<ApiLogPage>> {
        let path = format!("/api-logs?{}", query.query_string());
        self.send(Method::GET, &path).await
    }

    /// `DELETE /api-logs`
    pub async fn clear_api_logs(&self) -> Result<Option<Message>> {
        self.send(Method::DELETE, "/api-logs").await
    }
}
