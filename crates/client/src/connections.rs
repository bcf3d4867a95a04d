//! Connection management: available datasources and the user's connections.

use {
    reqwest::Method,
    serde::{Deserialize, Serialize},
    serde_json::Value,
};

use crate::{
    error::Result,
    gateway::{ApiClient, Message},
};

/// Body for `POST /connections`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateConnectionRequest {
    pub name: String,
    pub data_source: String,
}

/// `GET /datasources` response. Entries are defined by the upstream
/// connectivity provider and passed through untyped.
#[derive(Debug, Clone, Deserialize)]
pub struct DatasourceList {
    pub datasources: Vec<Value>,
}

/// `GET /connections` response.
#[derive(Debug, Clone, Deserialize)]
pub struct ConnectionList {
    pub connections: Vec<Value>,
}

/// `POST /connections` response: where to send the user to finish the
/// provider-side setup.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateConnectionResponse {
    #[serde(rename = "redirectURL")]
    pub redirect_url: String,
}

impl ApiClient {
    /// `GET /datasources`
    pub async fn datasources(&self) -> Result<Option<DatasourceList>> {
        self.send(Method::GET, "/datasources").await
    }

    /// `GET /connections`
    pub async fn connections(&self) -> Result<Option<ConnectionList>> {
        self.send(Method::GET, "/connections").await
    }

    /// `POST /connections`
    pub async fn create_connection(
        &self,
        req: &CreateConnectionRequest,
    ) -> Result<Option<CreateConnectionResponse>> {
        self.send_with_body(Method::POST, "/connections", req).await
    }

    /// `DELETE /connections/{id}`
    pub async fn delete_connection(&self, connection_id: &str) -> Result<Option<Message>> {
        let path = format!("/connections/{}", urlencoding::encode(connection_id));
        self.send(Method::DELETE, &path).await
    }
}
