//! Ad-hoc query execution against a connected table.

use {
    reqwest::Method,
    serde::{Deserialize, Serialize},
    serde_json::Value,
};

use crate::{error::Result, gateway::ApiClient};

/// Comparison operator in a query condition.
///
/// Serializes to the literal operator string the server validates against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConditionOperator {
    #[serde(rename = "=")]
    Eq,
    #[serde(rename = "<>")]
    Ne,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = "<=")]
    Le,
    #[serde(rename = ">=")]
    Ge,
    #[serde(rename = "LIKE")]
    Like,
    /// `value` holds a comma-separated list of candidates.
    #[serde(rename = "IN")]
    In,
    /// `value` and `value2` hold the range bounds.
    #[serde(rename = "BETWEEN")]
    Between,
}

/// One entry of the query's `WHERE` clause.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Condition {
    pub column: String,
    pub operator: ConditionOperator,
    pub value: String,
    /// Upper bound for `BETWEEN`; ignored by every other operator.
    #[serde(default)]
    pub value2: String,
}

/// Body for `POST /query`.
#[derive(Debug, Clone, Serialize)]
pub struct QueryRequest {
    pub connection_id: String,
    pub catalog_name: String,
    pub schema_name: String,
    pub table_name: String,
    /// Projection; empty selects every column.
    pub columns: Vec<String>,
    pub conditions: Vec<Condition>,
}

impl QueryRequest {
    /// Full-table query with no projection and no conditions.
    pub fn new(
        connection_id: impl Into<String>,
        catalog_name: impl Into<String>,
        schema_name: impl Into<String>,
        table_name: impl Into<String>,
    ) -> Self {
        Self {
            connection_id: connection_id.into(),
            catalog_name: catalog_name.into(),
            schema_name: schema_name.into(),
            table_name: table_name.into(),
            columns: Vec::new(),
            conditions: Vec::new(),
        }
    }
}

/// `POST /query` response.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryResult {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
    pub total: i64,
    pub elapsed_ms: i64,
}

impl ApiClient {
    /// `POST /query`
    pub async fn execute_query(&self, req: &QueryRequest) -> Result<Option<QueryResult>> {
        self.send_with_body(Method::POST, "/query", req).await
    }
}
