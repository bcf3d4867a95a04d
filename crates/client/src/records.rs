//! Record CRUD against a connected table.

use std::collections::BTreeMap;

use {
    reqwest::Method,
    serde::{Deserialize, Serialize},
    serde_json::Value,
};

use crate::{
    error::Result,
    gateway::{ApiClient, Message},
};

/// Default page size for record listing.
pub const DEFAULT_RECORD_LIMIT: u32 = 20;

/// Parameters for `GET /data/records`.
#[derive(Debug, Clone)]
pub struct RecordQuery {
    pub connection_id: String,
    pub catalog: String,
    pub schema_name: String,
    pub table: String,
    pub limit: u32,
    pub offset: u32,
}

impl RecordQuery {
    /// First page of the given table with the default page size.
    pub fn new(
        connection_id: impl Into<String>,
        catalog: impl Into<String>,
        schema_name: impl Into<String>,
        table: impl Into<String>,
    ) -> Self {
        Self {
            connection_id: connection_id.into(),
            catalog: catalog.into(),
            schema_name: schema_name.into(),
            table: table.into(),
            limit: DEFAULT_RECORD_LIMIT,
            offset: 0,
        }
    }

    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    #[must_use]
    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    /// Query string with stable parameter order and percent-encoded values.
    pub(crate) fn query_string(&self) -> String {
        format!(
            "connection_id={}&catalog={}&schema_name={}&table={}&limit={}&offset={}",
            urlencoding::encode(&self.connection_id),
            urlencoding::encode(&self.catalog),
            urlencoding::encode(&self.schema_name),
            urlencoding::encode(&self.table),
            self.limit,
            self.offset,
        )
    }
}

/// One page of table records.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordPage {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
    /// Total row count, or `-1` when the server's count query failed.
    pub total: i64,
    pub limit: u32,
    pub offset: u32,
}

/// Body for `POST /data/records`.
#[derive(Debug, Clone, Serialize)]
pub struct RecordWriteRequest {
    pub connection_id: String,
    pub catalog: String,
    pub schema_name: String,
    pub table: String,
    /// Column name → value pairs to insert.
    pub data: BTreeMap<String, String>,
}

/// Body for `PUT /data/records`.
#[derive(Debug, Clone, Serialize)]
pub struct RecordUpdateRequest {
    pub connection_id: String,
    pub catalog: String,
    pub schema_name: String,
    pub table: String,
    pub data: BTreeMap<String, String>,
    /// Equality conditions selecting the rows to update.
    #[serde(rename = "where")]
    pub where_clause: BTreeMap<String, String>,
}

/// Body for `DELETE /data/records`.
#[derive(Debug, Clone, Serialize)]
pub struct RecordDeleteRequest {
    pub connection_id: String,
    pub catalog: String,
    pub schema_name: String,
    pub table: String,
    #[serde(rename = "where")]
    pub where_clause: BTreeMap<String, String>,
}

impl ApiClient {
    /// `GET /data/records`
    pub async fn list_records(&self, query: &RecordQuery) -> Result<Option<RecordPage>> {
        let path = format!("/data/records?{}", query.query_string());
        self.send(Method::GET, &path).await
    }

    /// `POST /data/records`
    pub async fn create_record(&self, req: &RecordWriteRequest) -> Result<Option<Message>> {
        self.send_with_body(Method::POST, "/data/records", req).await
    }

    /// `PUT /data/records`
    pub async fn update_record(&self, req: &RecordUpdateRequest) -> Result<Option<Message>> {
        self.send_with_body(Method::PUT, "/data/records", req).await
    }

    /// `DELETE /data/records`
    pub async fn delete_record(&self, req: &RecordDeleteRequest) -> Result<Option<Message>> {
        self.send_with_body(Method::DELETE, "/data/records", req).await
    }
}
