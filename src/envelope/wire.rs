//! Wire shape of the response envelope.

use serde::{Deserialize, Serialize};

/// `{success, data, message, timestamp}` exactly as the backend sends it.
///
/// Every field is defaulted on the way in: error bodies frequently omit
/// `data` and `timestamp`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T = serde_json::Value> {
    #[serde(default)]
    pub success: bool,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub timestamp: String,
}

/// Error body of a non-2xx response.
///
/// `code` is optional and only used for 401 classification when the server
/// provides it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<serde_json::Value>,
    #[serde(default)]
    pub code: Option<String>,
}

impl ErrorBody {
    /// The message, when the server sent it as a string.
    pub fn message(&self) -> Option<&str> {
        self.message.as_ref().and_then(|m| m.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_tolerates_missing_fields() {
        let env: Envelope = serde_json::from_str(r#"{"success":false,"message":"x"}"#).unwrap();
        assert!(!env.success);
        assert!(env.data.is_none());
        assert_eq!(env.message, "x");
        assert_eq!(env.timestamp, "");
    }

    #[test]
    fn envelope_null_data_is_none() {
        let env: Envelope = serde_json::from_str(r#"{"success":true,"data":null}"#).unwrap();
        assert!(env.success);
        assert!(env.data.is_none());
    }

    #[test]
    fn error_body_ignores_non_string_message() {
        let body: ErrorBody = serde_json::from_str(r#"{"message":{"field":"bad"}}"#).unwrap();
        assert_eq!(body.message(), None);

        let body: ErrorBody = serde_json::from_str(r#"{"message":"缺少Token，请先登录"}"#).unwrap();
        assert_eq!(body.message(), Some("缺少Token，请先登录"));
    }
}
