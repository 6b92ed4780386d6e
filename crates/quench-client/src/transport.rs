//! Authenticated HTTP transport.
//!
//! [`Transport`] is the seam between the typed resources and the wire: it
//! performs one authenticated round trip against a resource-scoped base URL
//! and hands back the decoded JSON body. Resources stay generic over it so
//! tests can inject doubles.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};

/// One authenticated request/response round trip against a scoped base URL.
///
/// Paths given to the methods are relative to the resource scope composed
/// at construction (e.g. `problems/`). Implementations raise only for
/// request-level failures; response bodies come back as untyped JSON for
/// the resource layer to decode.
#[async_trait]
pub trait Transport: Send + Sync {
    /// GET with query parameters.
    async fn get(&self, path: &str, params: &[(String, String)]) -> ApiResult<Value>;

    /// POST a JSON value.
    async fn post_json(&self, path: &str, body: &Value) -> ApiResult<Value>;

    /// POST a pre-serialized JSON body verbatim.
    ///
    /// Used where the caller has already encoded the body piecewise and a
    /// uniform re-encoding would not be faithful.
    async fn post_raw(&self, path: &str, body: String) -> ApiResult<Value>;

    /// DELETE with an optional JSON body.
    async fn delete(&self, path: &str, body: Option<&Value>) -> ApiResult<Value>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    async fn get(&self, path: &str, params: &[(String, String)]) -> ApiResult<Value> {
        (**self).get(path, params).await
    }

    async fn post_json(&self, path: &str, body: &Value) -> ApiResult<Value> {
        (**self).post_json(path, body).await
    }

    async fn post_raw(&self, path: &str, body: String) -> ApiResult<Value> {
        (**self).post_raw(path, body).await
    }

    async fn delete(&self, path: &str, body: Option<&Value>) -> ApiResult<Value> {
        (**self).delete(path, body).await
    }
}

/// `reqwest`-backed transport.
///
/// The base URL (endpoint + resource scope) is resolved once here and never
/// mutated afterwards; a `Problems` and a `Solvers` resource built from the
/// same configuration share nothing but the connection pool.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
    token: String,
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl HttpTransport {
    /// Build a transport scoped to one resource path (e.g. `problems/`).
    pub fn new(config: &ClientConfig, resource_path: &str) -> ApiResult<Self> {
        config.check()?;

        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(ApiError::Http)?;

        let base_url = format!(
            "{}/{}",
            config.endpoint.trim_end_matches('/'),
            resource_path
        );

        Ok(Self {
            client,
            base_url,
            token: config.token.clone(),
        })
    }

    /// The resolved base URL this transport is scoped to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn handle_response(&self, response: reqwest::Response) -> ApiResult<Value> {
        let status = response.status();

        if status.is_success() {
            let body = response.json().await?;
            Ok(body)
        } else {
            let message = response.text().await.unwrap_or_default();

            match status {
                StatusCode::NOT_FOUND => Err(ApiError::NotFound(message)),
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    Err(ApiError::AuthFailed(message))
                }
                _ => Err(ApiError::Api {
                    status: status.as_u16(),
                    message,
                }),
            }
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, path: &str, params: &[(String, String)]) -> ApiResult<Value> {
        let url = self.url(path);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header("X-Auth-Token", &self.token)
            .query(params)
            .send()
            .await?;

        self.handle_response(response).await
    }

    async fn post_json(&self, path: &str, body: &Value) -> ApiResult<Value> {
        let url = self.url(path);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .header("X-Auth-Token", &self.token)
            .json(body)
            .send()
            .await?;

        self.handle_response(response).await
    }

    async fn post_raw(&self, path: &str, body: String) -> ApiResult<Value> {
        let url = self.url(path);
        debug!("POST {} ({} bytes, pre-serialized)", url, body.len());

        let response = self
            .client
            .post(&url)
            .header("X-Auth-Token", &self.token)
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await?;

        self.handle_response(response).await
    }

    async fn delete(&self, path: &str, body: Option<&Value>) -> ApiResult<Value> {
        let url = self.url(path);
        debug!("DELETE {}", url);

        let mut request = self
            .client
            .delete(&url)
            .header("X-Auth-Token", &self.token);
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await?;

        self.handle_response(response).await
    }
}
