//! Metadata discovery: catalogs, schemas, tables, and columns.
//!
//! Entry shapes come from the upstream connectivity provider and are passed
//! through untyped. Query parameter names, order, and percent-encoding are
//! part of the wire contract.

use {reqwest::Method, serde::Deserialize, serde_json::Value};

use crate::{error::Result, gateway::ApiClient};

/// `GET /metadata/catalogs` response.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogList {
    pub catalogs: Vec<Value>,
}

/// `GET /metadata/schemas` response.
#[derive(Debug, Clone, Deserialize)]
pub struct SchemaList {
    pub schemas: Vec<Value>,
}

/// `GET /metadata/tables` response.
#[derive(Debug, Clone, Deserialize)]
pub struct TableList {
    pub tables: Vec<Value>,
}

/// `GET /metadata/columns` response.
#[derive(Debug, Clone, Deserialize)]
pub struct ColumnList {
    pub columns: Vec<Value>,
}

impl ApiClient {
    /// `GET /metadata/catalogs`
    pub async fn catalogs(&self) -> Result<Option<CatalogList>> {
        self.send(Method::GET, "/metadata/catalogs").await
    }

    /// `GET /metadata/schemas?catalog_name=…`
    pub async fn schemas(&self, catalog_name: &str) -> Result<Option<SchemaList>> {
        let path = format!(
            "/metadata/schemas?catalog_name={}",
            urlencoding::encode(catalog_name)
        );
        self.send(Method::GET, &path).await
    }

    /// `GET /metadata/tables?catalog_name=…&schema_name=…`
    pub async fn tables(&self, catalog_name: &str, schema_name: &str) -> Result<Option<TableList>> {
        let path = format!(
            "/metadata/tables?catalog_name={}&schema_name={}",
            urlencoding::encode(catalog_name),
            urlencoding::encode(schema_name)
        );
        self.send(Method::GET, &path).await
    }

    /// `GET /metadata/columns?catalog_name=…&schema_name=…&table_name=…`
    pub async fn columns(
        &self,
        catalog_name: &str,
        schema_name: &str,
        table_name: &str,
    ) -> Result<Option<ColumnList>> {
        let path = format!(
            "/metadata/columns?catalog_name={}&schema_name={}&table_name={}",
            urlencoding::encode(catalog_name),
            urlencoding::encode(schema_name),
            urlencoding::encode(table_name)
        );
        self.send(Method::GET, &path).await
    }
}
