//! Response envelope, the single shape every call resolves to.
//!
//! The backend answers with `{success, data, message, timestamp}`. The SDK
//! lifts that into [`ApiResponse<T>`]: a success variant carrying a typed
//! payload, or a failure variant carrying a message and a [`FailureKind`].
//! Transport failures, HTTP errors, and unparseable bodies are all folded
//! into the failure variant by the dispatcher; nothing is thrown past it.
//!
//! [`ApiResponse::into_envelope`] goes back to the wire shape, with the
//! invariant that a failure never carries `data`.

mod convert;
pub mod wire;

pub use wire::{Envelope, ErrorBody};

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ─── User-facing messages ────────────────────────────────────────────────────

/// Connection-level failure: nothing answered.
pub const MSG_SERVER_UNREACHABLE: &str = "无法连接到服务器，请检查后端服务是否运行";
/// Network failure with no further detail.
pub const MSG_NETWORK_FAILED: &str = "网络请求失败";
/// A 2xx response whose body is not a valid envelope.
pub const MSG_INVALID_RESPONSE: &str = "响应数据解析失败";
/// A request that could not be built.
pub const MSG_INVALID_REQUEST: &str = "请求参数错误";
/// Login succeeded but the session could not be persisted.
pub const MSG_SESSION_NOT_SAVED: &str = "登录状态保存失败";

/// ISO-8601 timestamp with millisecond precision, as locally synthesized
/// envelopes carry.
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

// ─── Failure ─────────────────────────────────────────────────────────────────

/// Why a call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FailureKind {
    /// Nothing answered (DNS, refused connection, offline).
    Unreachable,
    /// Other network failure before a status was received.
    Network,
    /// The request could not be built.
    InvalidRequest,
    /// Non-2xx other than the 401 cases below.
    Http { status: u16 },
    /// 401 because the token expired or is invalid. The session was cleared.
    SessionExpired,
    /// 401 because the request carried no token. The session was kept.
    MissingToken,
    /// Any other 401, such as wrong login credentials. The session was kept.
    Unauthorized,
    /// 2xx with `success: false`: the server rejected the operation.
    Rejected,
    /// The response body could not be decoded.
    Decode,
    /// The session store could not be written.
    Storage,
}

impl FailureKind {
    /// HTTP status, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status } => Some(*status),
            Self::SessionExpired | Self::MissingToken | Self::Unauthorized => Some(401),
            _ => None,
        }
    }

    /// Whether the failure happened below HTTP.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Unreachable | Self::Network | Self::InvalidRequest)
    }
}

/// Failure variant of [`ApiResponse`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct Failure {
    pub kind: FailureKind,
    pub message: String,
    pub timestamp: String,
}

impl Failure {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            timestamp: now_timestamp(),
        }
    }
}

// ─── Success ─────────────────────────────────────────────────────────────────

/// Success variant of [`ApiResponse`].
#[derive(Debug, Clone, PartialEq)]
pub struct Success<T> {
    pub data: T,
    pub message: String,
    pub timestamp: String,
}

// ─── ApiResponse ─────────────────────────────────────────────────────────────

/// Outcome of one API call.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse<T> {
    Success(Success<T>),
    Failure(Failure),
}

/// Response whose payload is left as untyped JSON.
pub type JsonResponse = ApiResponse<serde_json::Value>;

impl<T> ApiResponse<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self::Success(Success {
            data,
            message: message.into(),
            timestamp: now_timestamp(),
        })
    }

    pub fn failure(kind: FailureKind, message: impl Into<String>) -> Self {
        Self::Failure(Failure::new(kind, message))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Success(s) => &s.message,
            Self::Failure(f) => &f.message,
        }
    }

    pub fn timestamp(&self) -> &str {
        match self {
            Self::Success(s) => &s.timestamp,
            Self::Failure(f) => &f.timestamp,
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(s) => Some(&s.data),
            Self::Failure(_) => None,
        }
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            Self::Success(_) => None,
            Self::Failure(f) => Some(f.kind),
        }
    }

    pub fn into_result(self) -> Result<T, Failure> {
        match self {
            Self::Success(s) => Ok(s.data),
            Self::Failure(f) => Err(f),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        match self {
            Self::Success(s) => ApiResponse::Success(Success {
                data: f(s.data),
                message: s.message,
                timestamp: s.timestamp,
            }),
            Self::Failure(fail) => ApiResponse::Failure(fail),
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    /// Back to the wire shape. A failure always has `data: null`.
    pub fn into_envelope(self) -> Envelope<serde_json::Value> {
        match self {
            Self::Success(s) => Envelope {
                success: true,
                data: serde_json::to_value(s.data).ok(),
                message: s.message,
                timestamp: s.timestamp,
            },
            Self::Failure(f) => Envelope {
                success: false,
                data: None,
                message: f.message,
                timestamp: f.timestamp,
            },
        }
    }
}

impl<T: Serialize + Clone> Serialize for ApiResponse<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.clone().into_envelope().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn failure_envelope_has_null_data() {
        let resp: JsonResponse = ApiResponse::failure(FailureKind::Rejected, "余额不足");
        let env = resp.into_envelope();
        assert!(!env.success);
        assert!(env.data.is_none());
        assert_eq!(env.message, "余额不足");
        assert!(!env.timestamp.is_empty());
    }

    #[test]
    fn success_serializes_as_wire_envelope() {
        let resp = ApiResponse::success(json!({"balance": 10}), "");
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["data"]["balance"], 10);
        assert_eq!(value["message"], "");
    }

    #[test]
    fn into_result_surfaces_failure() {
        let resp: ApiResponse<u32> =
            ApiResponse::failure(FailureKind::Http { status: 500 }, "HTTP 500: Internal Server Error");
        let err = resp.into_result().unwrap_err();
        assert_eq!(err.kind.status(), Some(500));
        assert_eq!(err.to_string(), "HTTP 500: Internal Server Error");
    }

    #[test]
    fn map_keeps_message() {
        let resp = ApiResponse::success(2u32, "ok").map(|n| n * 21);
        assert_eq!(resp.data(), Some(&42));
        assert_eq!(resp.message(), "ok");
    }

    #[test]
    fn transport_kinds() {
        assert!(FailureKind::Unreachable.is_transport());
        assert!(!FailureKind::MissingToken.is_transport());
        assert_eq!(FailureKind::MissingToken.status(), Some(401));
        assert_eq!(FailureKind::Unauthorized.status(), Some(401));
        assert!(!FailureKind::Unauthorized.is_transport());
    }

    #[test]
    fn timestamp_is_rfc3339() {
        let ts = now_timestamp();
        assert!(chrono::DateTime::parse_from_rfc3339(&ts).is_ok());
        assert!(ts.ends_with('Z'));
    }
}
