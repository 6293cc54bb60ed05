//! Remote gateway: thin HTTP client over the API envelope.
//!
//! Every method returns the full [`ApiResponse`]. A non-2xx status or
//! `success=false` is NOT an `Err` here: the caller branches on `success`.
//! `Err` means the exchange itself failed (transport, unreadable body).

use super::api_utils::{api_base, join_url};
use contracts::shared::api_response::ApiResponse;
use contracts::shared::page::{ListQuery, PageResult};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error("Failed to serialize request: {0}")]
    Encode(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteGateway {
    base_url: String,
}

impl RemoteGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(api_base())
    }

    pub fn endpoint_url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    pub fn list_url(&self, path: &str, query: &ListQuery) -> String {
        format!("{}?{}", self.endpoint_url(path), query.to_query_string())
    }

    /// `GET {path}?name=&page=&pageSize=`
    pub async fn list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &ListQuery,
    ) -> Result<ApiResponse<PageResult<T>>, GatewayError> {
        let url = self.list_url(path, query);
        log::debug!("GET {}", url);
        let request = json_headers(Request::get(&url))
            .build()
            .map_err(|e| GatewayError::Encode(e.to_string()))?;
        send(request).await
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<ApiResponse<T>, GatewayError> {
        let url = self.endpoint_url(path);
        log::debug!("GET {}", url);
        let request = json_headers(Request::get(&url))
            .build()
            .map_err(|e| GatewayError::Encode(e.to_string()))?;
        send(request).await
    }

    pub async fn create<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse<T>, GatewayError> {
        let url = self.endpoint_url(path);
        log::debug!("POST {}", url);
        let request = json_headers(Request::post(&url))
            .json(body)
            .map_err(|e| GatewayError::Encode(e.to_string()))?;
        send(request).await
    }

    pub async fn update<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse<T>, GatewayError> {
        let url = self.endpoint_url(path);
        log::debug!("PUT {}", url);
        let request = json_headers(Request::put(&url))
            .json(body)
            .map_err(|e| GatewayError::Encode(e.to_string()))?;
        send(request).await
    }

    /// `DELETE {path}`; the envelope usually carries no data.
    pub async fn remove(&self, path: &str) -> Result<ApiResponse<serde_json::Value>, GatewayError> {
        let url = self.endpoint_url(path);
        log::debug!("DELETE {}", url);
        let request = json_headers(Request::delete(&url))
            .build()
            .map_err(|e| GatewayError::Encode(e.to_string()))?;
        send(request).await
    }
}

/// `{path}/{id}`
pub fn item_path(path: &str, id: i64) -> String {
    format!("{}/{}", path.trim_end_matches('/'), id)
}

fn json_headers(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    builder.header("Content-Type", "application/json")
}

async fn send<T: DeserializeOwned>(request: Request) -> Result<ApiResponse<T>, GatewayError> {
    let response = request.send().await.map_err(|e| {
        log::warn!("request failed: {}", e);
        GatewayError::Network(e.to_string())
    })?;
    decode(response).await
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<ApiResponse<T>, GatewayError> {
    let status = response.status();
    let envelope = response.json::<ApiResponse<T>>().await.map_err(|e| {
        log::warn!("unreadable response body (HTTP {}): {}", status, e);
        GatewayError::Decode(e.to_string())
    })?;
    if !envelope.is_success() {
        log::debug!("HTTP {} rejected: {}", status, envelope.message);
    }
    Ok(envelope)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_url_with_filter() {
        let gateway = RemoteGateway::new("http://api.local");
        assert_eq!(
            gateway.list_url("/materials", &ListQuery::new("bolt", 0, 10)),
            "http://api.local/materials?name=bolt&page=0&pageSize=10"
        );
    }

    #[test]
    fn test_list_url_without_filter() {
        let gateway = RemoteGateway::new("http://api.local");
        let url = gateway.list_url("/products/production", &ListQuery::new("", 1, 10));
        assert_eq!(url, "http://api.local/products/production?page=1&pageSize=10");
        assert!(!url.contains("name="));
    }

    #[test]
    fn test_item_path() {
        assert_eq!(item_path("/products", 7), "/products/7");
        assert_eq!(item_path("/materials/", 12), "/materials/12");
    }

    #[test]
    fn test_error_messages_name_the_failure_kind() {
        assert_eq!(
            GatewayError::Network("connection refused".to_string()).to_string(),
            "Network error: connection refused"
        );
        assert!(GatewayError::Decode("eof".to_string())
            .to_string()
            .starts_with("Failed to parse response"));
    }
}
