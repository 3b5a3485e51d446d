//! Unified SDK error types.

use thiserror::Error;

use crate::envelope::Failure;

/// Top-level SDK error.
///
/// Endpoint methods never return this directly: they always produce an
/// [`ApiResponse`](crate::envelope::ApiResponse). `SdkError` covers client
/// construction, configuration, storage access, and callers that convert a
/// response with `into_result()?`.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("API error: {0}")]
    Api(#[from] Failure),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Failures raised by a [`Transport`](crate::http::Transport) before an HTTP
/// status is available.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// DNS failure, refused connection, or the host is offline.
    #[error("Server unreachable: {0}")]
    Unreachable(String),

    /// Any other network-level failure (reset, timeout, CORS rejection, body read).
    #[error("Network error: {0}")]
    Network(String),

    /// The request could not be constructed (bad header, bad multipart part).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// Text browsers put on a rejected `fetch()`: Chromium, Firefox, Safari.
const FETCH_REJECTION_MARKERS: [&str; 3] = ["Failed to fetch", "NetworkError", "Load failed"];

impl TransportError {
    /// Classify a failure from its rendered error chain.
    ///
    /// A rejected browser `fetch()` carries no structured cause, only the
    /// message of the JS `TypeError`.
    pub fn from_message(detail: String) -> Self {
        if FETCH_REJECTION_MARKERS.iter().any(|m| detail.contains(m)) {
            TransportError::Unreachable(detail)
        } else {
            TransportError::Network(detail)
        }
    }
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        let detail = error_chain(&err);
        if err.is_builder() {
            return TransportError::InvalidRequest(detail);
        }
        #[cfg(not(target_arch = "wasm32"))]
        if err.is_connect() {
            return TransportError::Unreachable(detail);
        }
        // In the browser every fetch rejection (offline, DNS, refused, CORS)
        // surfaces as a request error.
        #[cfg(target_arch = "wasm32")]
        if err.is_request() && !err.is_timeout() {
            return TransportError::Unreachable(detail);
        }
        TransportError::from_message(detail)
    }
}

/// `err` followed by each `source()`, joined with `": "`.
#[cfg(feature = "http")]
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut detail = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !detail.contains(&text) {
            detail.push_str(": ");
            detail.push_str(&text);
        }
        source = cause.source();
    }
    detail
}

/// Key/value store errors.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt store contents: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_error_display_names_the_cause() {
        let err = TransportError::Unreachable("connection refused".to_string());
        assert_eq!(err.to_string(), "Server unreachable: connection refused");
    }

    #[test]
    fn fetch_rejections_count_as_unreachable() {
        for detail in [
            "error sending request for url (http://api.local/api/v1/orders): TypeError: Failed to fetch",
            "TypeError: NetworkError when attempting to fetch resource.",
            "TypeError: Load failed",
        ] {
            assert_eq!(
                TransportError::from_message(detail.to_string()),
                TransportError::Unreachable(detail.to_string())
            );
        }
    }

    #[test]
    fn other_messages_stay_network_errors() {
        let err = TransportError::from_message("error decoding response body".to_string());
        assert!(matches!(err, TransportError::Network(_)));
    }

    #[test]
    fn storage_error_wraps_into_sdk_error() {
        let err: SdkError = StorageError::Unavailable("no window".to_string()).into();
        assert!(matches!(err, SdkError::Storage(_)));
        assert_eq!(err.to_string(), "Storage error: Storage unavailable: no window");
    }
}
