//! Timeplus REST API client and the generic resource verbs.
//!
//! This module provides [`TimeplusClient`], a thin HTTP client bound to a
//! versioned base URL (`{endpoint}/{workspace}/api/v1beta2`) and fixed
//! credentials. It exposes five verbs over any [`ApiResource`]:
//!
//! | verb     | request                       | response              |
//! |----------|-------------------------------|-----------------------|
//! | `get`    | `GET {base}/{path}/{id}`      | decoded               |
//! | `post`   | `POST {base}/{path}` + body   | decoded               |
//! | `put`    | `PUT {base}/{path}/{id}` + body   | decoded           |
//! | `patch`  | `PATCH {base}/{path}/{id}` + body | decoded           |
//! | `delete` | `DELETE {base}/{path}/{id}`   | discarded             |
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - one module per collection with typed convenience methods
//!
//! # What this module does NOT handle:
//! - Retries and overall deadlines (owned by the caller)
//! - Drift suppression (owned by the provider crate)
//!
//! # Invariants
//! - The client holds no per-request state; it is immutable after `build()`
//!   and may be shared across tasks behind an `Arc`
//! - `put` and `patch` fall back to the request value when the server answers
//!   with an empty body

pub mod builder;

mod alerts;
mod dashboards;
mod sinks;
mod sources;
mod streams;
mod udfs;
mod views;

use std::time::Duration;

use reqwest::Method;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use tracing::debug;

use crate::auth::AuthStrategy;
use crate::endpoints::{self, resource_url};
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::ApiResource;

const JSON: &str = "application/json";

/// Timeplus REST API client.
///
/// ```rust,ignore
/// use timeplus_client::{TimeplusClient, AuthStrategy};
/// use secrecy::SecretString;
///
/// let client = TimeplusClient::builder()
///     .endpoint("https://us.timeplus.cloud".to_string())
///     .workspace("my-workspace".to_string())
///     .auth_strategy(AuthStrategy::ApiKey {
///         api_key: SecretString::new("my-key".to_string().into()),
///     })
///     .build()?;
/// let stream = client.get_stream("orders").await?;
/// ```
#[derive(Debug, Clone)]
pub struct TimeplusClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) auth: AuthStrategy,
    pub(crate) timeout: Duration,
    pub(crate) metrics: Option<MetricsCollector>,
}

impl TimeplusClient {
    pub fn builder() -> builder::TimeplusClientBuilder {
        builder::TimeplusClientBuilder::new()
    }

    /// The versioned API base URL every resource path is joined to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn is_api_key_auth(&self) -> bool {
        self.auth.is_api_key()
    }

    /// Fetch `resource` by its identifier.
    pub async fn get<T: ApiResource + Clone>(&self, resource: &T) -> Result<T> {
        let url = resource_url(&self.base_url, resource.path(), Some(resource.id()))?;
        let response = self
            .execute(Method::GET, &url, resource.path(), None::<&T>)
            .await?;
        endpoints::decode_json(response, resource.path(), None, self.metrics.as_ref()).await
    }

    /// Create `resource`; the server's echo carries assigned fields such as `id`.
    pub async fn post<T: ApiResource + Clone>(&self, resource: &T) -> Result<T> {
        let url = resource_url(&self.base_url, resource.path(), None)?;
        let response = self
            .execute(Method::POST, &url, resource.path(), Some(resource))
            .await?;
        endpoints::decode_json(
            response,
            resource.path(),
            Some(resource),
            self.metrics.as_ref(),
        )
        .await
    }

    /// Replace `resource` in full.
    pub async fn put<T: ApiResource + Clone>(&self, resource: &T) -> Result<T> {
        let url = resource_url(&self.base_url, resource.path(), Some(resource.id()))?;
        let response = self
            .execute(Method::PUT, &url, resource.path(), Some(resource))
            .await?;
        endpoints::decode_json(
            response,
            resource.path(),
            Some(resource),
            self.metrics.as_ref(),
        )
        .await
    }

    /// Partially update `resource`; fields omitted from its serialization are untouched.
    pub async fn patch<T: ApiResource + Clone>(&self, resource: &T) -> Result<T> {
        let url = resource_url(&self.base_url, resource.path(), Some(resource.id()))?;
        let response = self
            .execute(Method::PATCH, &url, resource.path(), Some(resource))
            .await?;
        endpoints::decode_json(
            response,
            resource.path(),
            Some(resource),
            self.metrics.as_ref(),
        )
        .await
    }

    /// Delete `resource`; the response body is discarded.
    pub async fn delete<T: ApiResource>(&self, resource: &T) -> Result<()> {
        let url = resource_url(&self.base_url, resource.path(), Some(resource.id()))?;
        self.execute(Method::DELETE, &url, resource.path(), None::<&T>)
            .await?;
        Ok(())
    }

    async fn execute<B: serde::Serialize>(
        &self,
        method: Method,
        url: &str,
        endpoint: &str,
        body: Option<&B>,
    ) -> Result<reqwest::Response> {
        debug!(method = %method, url, "Sending Timeplus API request");

        let mut builder = self
            .http
            .request(method.clone(), url)
            .header(ACCEPT, JSON);
        if let Some(body) = body {
            let payload = serde_json::to_vec(body)?;
            builder = builder.header(CONTENT_TYPE, JSON).body(payload);
        }
        let builder = self.auth.apply(builder);

        endpoints::send_request(
            builder,
            endpoint,
            method.as_str(),
            self.timeout,
            self.metrics.as_ref(),
        )
        .await
    }
}
