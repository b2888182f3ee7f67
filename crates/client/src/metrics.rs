//! Metrics collection for Timeplus API calls.
//!
//! This module records, through the `metrics` facade:
//! - Request latency histograms
//! - Request counters
//! - Error counters by category
//!
//! # What this module does NOT handle:
//! - Metrics exposition/export (install a recorder in the host process)
//! - Alerting or threshold monitoring
//!
//! # Invariants
//! - All metrics use consistent label names: `endpoint`, `method`, `status`, `error_category`
//! - Metric recording is infallible and a no-op when no recorder is installed

use crate::error::ClientError;
use std::time::Duration;

/// Metric name for request duration histogram.
pub const METRIC_REQUEST_DURATION: &str = "timeplus_api_request_duration_seconds";

/// Metric name for total request counter.
pub const METRIC_REQUESTS_TOTAL: &str = "timeplus_api_requests_total";

/// Metric name for error counter.
pub const METRIC_ERRORS_TOTAL: &str = "timeplus_api_errors_total";

/// Metric name for response decode failures.
pub const METRIC_DESERIALIZATION_FAILURES: &str = "timeplus_api_deserialization_failures_total";

/// Error categories for metrics labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Transport-level errors (connection refused, DNS, etc.)
    Transport,
    /// HTTP 4xx client errors
    Http4xx,
    /// HTTP 5xx server errors
    Http5xx,
    /// Undecodable response or unencodable request
    Decode,
    /// Request timeout
    Timeout,
    /// Unknown/unclassified errors
    Unknown,
}

impl ErrorCategory {
    /// Returns the string label for this error category.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Transport => "transport",
            ErrorCategory::Http4xx => "http_4xx",
            ErrorCategory::Http5xx => "http_5xx",
            ErrorCategory::Decode => "decode",
            ErrorCategory::Timeout => "timeout",
            ErrorCategory::Unknown => "unknown",
        }
    }
}

impl From<&ClientError> for ErrorCategory {
    fn from(error: &ClientError) -> Self {
        match error {
            ClientError::Timeout(_) => ErrorCategory::Timeout,
            ClientError::ApiError { status, .. } => {
                if (400..500).contains(status) {
                    ErrorCategory::Http4xx
                } else if (500..600).contains(status) {
                    ErrorCategory::Http5xx
                } else {
                    ErrorCategory::Unknown
                }
            }
            ClientError::HttpError(e) if e.is_timeout() => ErrorCategory::Timeout,
            ClientError::HttpError(e) if e.is_connect() || e.is_request() => {
                ErrorCategory::Transport
            }
            ClientError::InvalidResponse(_) | ClientError::Serialization(_) => {
                ErrorCategory::Decode
            }
            _ => ErrorCategory::Unknown,
        }
    }
}

/// Metrics collector for Timeplus API calls.
///
/// A thin wrapper around the `metrics` crate macros with consistent labels.
///
/// ```rust,ignore
/// use timeplus_client::metrics::MetricsCollector;
///
/// let collector = MetricsCollector::new();
/// collector.record_request_duration("streams", "POST", Duration::from_millis(150), Some(200));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MetricsCollector {
    enabled: bool,
}

impl MetricsCollector {
    /// Create an enabled collector.
    pub fn new() -> Self {
        Self { enabled: true }
    }

    /// Create a collector that records nothing.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record the duration of an API request.
    ///
    /// `status` is `None` when the request failed before a response arrived.
    pub fn record_request_duration(
        &self,
        endpoint: &str,
        method: &str,
        duration: Duration,
        status: Option<u16>,
    ) {
        if !self.enabled {
            return;
        }

        let status_label = status.map_or("error".to_string(), |s| s.to_string());

        metrics::histogram!(METRIC_REQUEST_DURATION,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
            "status" => status_label,
        )
        .record(duration.as_secs_f64());
    }

    /// Record a request attempt.
    pub fn record_request(&self, endpoint: &str, method: &str) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_REQUESTS_TOTAL,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
        )
        .increment(1);
    }

    pub fn record_error(&self, endpoint: &str, method: &str, category: ErrorCategory) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_ERRORS_TOTAL,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
            "error_category" => category.as_str(),
        )
        .increment(1);
    }

    /// Record an error, categorizing it automatically.
    pub fn record_client_error(&self, endpoint: &str, method: &str, error: &ClientError) {
        self.record_error(endpoint, method, ErrorCategory::from(error));
    }

    /// Record a response body that could not be decoded into `model_type`.
    pub fn record_deserialization_failure(&self, endpoint: &str, model_type: &'static str) {
        if !self.enabled {
            return;
        }
        metrics::counter!(METRIC_DESERIALIZATION_FAILURES,
            "endpoint" => endpoint.to_string(),
            "model_type" => model_type.to_string(),
        )
        .increment(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_category_as_str() {
        assert_eq!(ErrorCategory::Transport.as_str(), "transport");
        assert_eq!(ErrorCategory::Http4xx.as_str(), "http_4xx");
        assert_eq!(ErrorCategory::Http5xx.as_str(), "http_5xx");
        assert_eq!(ErrorCategory::Decode.as_str(), "decode");
        assert_eq!(ErrorCategory::Timeout.as_str(), "timeout");
        assert_eq!(ErrorCategory::Unknown.as_str(), "unknown");
    }

    #[test]
    fn test_error_categorization() {
        let err = ClientError::ApiError {
            status: 404,
            method: "GET".to_string(),
            url: "http://localhost/api/v1beta2/streams/x".to_string(),
            message: "not found".to_string(),
        };
        assert_eq!(ErrorCategory::from(&err), ErrorCategory::Http4xx);

        let err = ClientError::ApiError {
            status: 503,
            method: "GET".to_string(),
            url: "http://localhost/api/v1beta2/streams/x".to_string(),
            message: "unavailable".to_string(),
        };
        assert_eq!(ErrorCategory::from(&err), ErrorCategory::Http5xx);

        let err = ClientError::Timeout(Duration::from_secs(30));
        assert_eq!(ErrorCategory::from(&err), ErrorCategory::Timeout);

        let err = ClientError::InvalidResponse("bad json".to_string());
        assert_eq!(ErrorCategory::from(&err), ErrorCategory::Decode);
    }

    #[test]
    fn test_metrics_collector_enabled() {
        assert!(MetricsCollector::new().is_enabled());
        assert!(!MetricsCollector::disabled().is_enabled());
    }

    #[test]
    fn test_disabled_collector_records_nothing() {
        let collector = MetricsCollector::disabled();
        collector.record_request("streams", "GET");
        collector.record_request_duration("streams", "GET", Duration::from_millis(5), Some(200));
        collector.record_error("streams", "GET", ErrorCategory::Transport);
        collector.record_deserialization_failure("streams", "Stream");
    }
}
