//! Wire envelope → [`ApiResponse`] conversion.

use serde::de::DeserializeOwned;

use super::{now_timestamp, ApiResponse, Envelope, Failure, FailureKind, Success};

impl<T: DeserializeOwned> From<Envelope<serde_json::Value>> for ApiResponse<T> {
    /// `success: true` decodes `data` into `T` (a missing `data` decodes from
    /// JSON `null`). `success: false` becomes a [`FailureKind::Rejected`].
    fn from(env: Envelope<serde_json::Value>) -> Self {
        let timestamp = if env.timestamp.is_empty() {
            now_timestamp()
        } else {
            env.timestamp
        };

        if !env.success {
            return ApiResponse::Failure(Failure {
                kind: FailureKind::Rejected,
                message: env.message,
                timestamp,
            });
        }

        let raw = env.data.unwrap_or(serde_json::Value::Null);
        match serde_json::from_value::<T>(raw) {
            Ok(data) => ApiResponse::Success(Success {
                data,
                message: env.message,
                timestamp,
            }),
            Err(e) => {
                tracing::warn!(error = %e, "response data does not match the expected shape");
                ApiResponse::Failure(Failure {
                    kind: FailureKind::Decode,
                    message: format!("{}: {}", super::MSG_INVALID_RESPONSE, e),
                    timestamp,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Balance {
        points: i64,
    }

    fn envelope(value: serde_json::Value) -> Envelope {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn success_decodes_typed_data() {
        let env = envelope(json!({
            "success": true,
            "data": {"points": 1500},
            "message": "",
            "timestamp": "2024-01-15T10:30:00.000Z"
        }));
        let resp: ApiResponse<Balance> = env.into();
        assert_eq!(resp.data(), Some(&Balance { points: 1500 }));
        assert_eq!(resp.timestamp(), "2024-01-15T10:30:00.000Z");
    }

    #[test]
    fn rejected_keeps_server_message_and_drops_data() {
        let env = envelope(json!({
            "success": false,
            "data": {"points": 1},
            "message": "支付密码错误"
        }));
        let resp: ApiResponse<Balance> = env.into();
        assert_eq!(resp.failure_kind(), Some(FailureKind::Rejected));
        assert_eq!(resp.message(), "支付密码错误");
        assert!(resp.data().is_none());
    }

    #[test]
    fn mismatched_data_is_decode_failure() {
        let env = envelope(json!({"success": true, "data": {"points": "many"}}));
        let resp: ApiResponse<Balance> = env.into();
        assert_eq!(resp.failure_kind(), Some(FailureKind::Decode));
    }

    #[test]
    fn missing_data_decodes_as_null() {
        let env = envelope(json!({"success": true, "message": "删除成功"}));
        let resp: ApiResponse<serde_json::Value> = env.into();
        assert_eq!(resp.data(), Some(&serde_json::Value::Null));
        assert!(!resp.timestamp().is_empty());
    }
}
