//! Request execution and response decoding.
//!
//! This module sends one HTTP request, records metrics for it, and maps any
//! non-2xx status to [`ClientError::ApiError`] carrying the body verbatim.
//!
//! # What this module does NOT handle:
//! - Retries. The caller (the host runtime) owns retry policy.
//! - Cancellation. Dropping the returned future aborts the request.

use std::time::{Duration, Instant};

use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;

/// Send a request and return the response if its status is 2xx.
///
/// `endpoint` is the collection name used as the metrics label.
///
/// # Errors
///
/// - [`ClientError::ApiError`] for any non-2xx status
/// - [`ClientError::Timeout`] when the request exceeded `timeout`
/// - [`ClientError::HttpError`] for other transport failures
pub async fn send_request(
    builder: RequestBuilder,
    endpoint: &str,
    method: &str,
    timeout: Duration,
    metrics: Option<&MetricsCollector>,
) -> Result<Response> {
    if let Some(m) = metrics {
        m.record_request(endpoint, method);
    }
    let started = Instant::now();

    let result = match builder.send().await {
        Ok(response) => check_status(response, method).await,
        Err(e) if e.is_timeout() => Err(ClientError::Timeout(timeout)),
        Err(e) => Err(ClientError::from(e)),
    };

    if let Some(m) = metrics {
        let status = match &result {
            Ok(response) => Some(response.status().as_u16()),
            Err(e) => e.status(),
        };
        m.record_request_duration(endpoint, method, started.elapsed(), status);
        if let Err(e) = &result {
            m.record_client_error(endpoint, method, e);
        }
    }

    result
}

async fn check_status(response: Response, method: &str) -> Result<Response> {
    let status = response.status();
    debug!(method, url = %response.url(), status = status.as_u16(), "Timeplus API response");

    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().to_string();
    let message = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    Err(ClientError::ApiError {
        status: status.as_u16(),
        method: method.to_string(),
        url,
        message,
    })
}

/// Decode a JSON response body into `T`.
///
/// An empty body yields `fallback` when one is supplied; the server answers
/// some updates with `204 No Content`.
pub async fn decode_json<T>(
    response: Response,
    endpoint: &str,
    fallback: Option<&T>,
    metrics: Option<&MetricsCollector>,
) -> Result<T>
where
    T: DeserializeOwned + Clone,
{
    let body = response.text().await?;

    if body.trim().is_empty()
        && let Some(fallback) = fallback
    {
        return Ok(fallback.clone());
    }

    serde_json::from_str(&body).map_err(|e| {
        if let Some(m) = metrics {
            m.record_deserialization_failure(endpoint, std::any::type_name::<T>());
        }
        ClientError::InvalidResponse(format!("unable to decode response body {:?}: {}", body, e))
    })
}
