//! Request dispatcher: `ApiHttp`.
//!
//! Turns a [`RequestSpec`] into an [`HttpRequest`], sends it through the
//! configured [`Transport`], and folds every outcome into an
//! [`ApiResponse`]:
//!
//! | Outcome                          | Result                                 |
//! |----------------------------------|----------------------------------------|
//! | 2xx, `success: true`             | `Success` with decoded `data`          |
//! | 2xx, `success: false`            | `Failure(Rejected)`                    |
//! | 2xx, unparseable body            | `Failure(Decode)`                      |
//! | 401, token expired/invalid       | session cleared, `Failure(SessionExpired)` |
//! | 401, token missing               | session kept, `Failure(MissingToken)`  |
//! | 401, anything else               | session kept, `Failure(Unauthorized)`  |
//! | other non-2xx                    | `Failure(Http { status })`             |
//! | transport error                  | `Failure(Unreachable \| Network)`      |

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::envelope::{
    ApiResponse, Envelope, ErrorBody, FailureKind, MSG_INVALID_REQUEST, MSG_INVALID_RESPONSE,
    MSG_NETWORK_FAILED, MSG_SERVER_UNREACHABLE,
};
use crate::error::TransportError;
use crate::http::request::{Body, HttpRequest, HttpResponse, Payload, RequestSpec};
use crate::http::transport::Transport;
use crate::session::SessionManager;

const CONTENT_TYPE: &str = "Content-Type";
const AUTHORIZATION: &str = "Authorization";
const JSON_CONTENT_TYPE: &str = "application/json";

/// Message fragments that mark the stored token as expired or invalid.
const INVALID_TOKEN_MARKERS: [&str; 3] = ["Token已过期", "无效的Token", "重新登录"];

/// Why a 401 was returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnauthorizedReason {
    /// The request reached the server without a token.
    MissingToken,
    /// The token was rejected: expired, malformed, or otherwise invalid.
    InvalidToken,
    /// Any other 401, e.g. wrong credentials on a login call.
    Other,
}

/// Classify a 401 from its structured `code`, falling back to the message.
///
/// Only [`UnauthorizedReason::InvalidToken`] tears the session down. Bad
/// credentials come back as 401 too and must not sign anyone out.
pub fn classify_unauthorized(code: Option<&str>, message: &str) -> UnauthorizedReason {
    match code {
        Some("token_missing") => UnauthorizedReason::MissingToken,
        Some("token_expired") | Some("token_invalid") => UnauthorizedReason::InvalidToken,
        _ if message.contains("缺少Token") => UnauthorizedReason::MissingToken,
        _ if INVALID_TOKEN_MARKERS.iter().any(|m| message.contains(m)) => {
            UnauthorizedReason::InvalidToken
        }
        _ => UnauthorizedReason::Other,
    }
}

/// Low-level dispatcher shared by every sub-client.
#[derive(Clone)]
pub struct ApiHttp {
    base_url: String,
    transport: Arc<dyn Transport>,
    session: SessionManager,
}

impl std::fmt::Debug for ApiHttp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiHttp")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ApiHttp {
    pub fn new(base_url: &str, transport: Arc<dyn Transport>, session: SessionManager) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
            session,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &SessionManager {
        &self.session
    }

    /// Resolve a spec against the API root and the current token.
    ///
    /// Fails with [`TransportError::InvalidRequest`] when the body could not
    /// be serialized.
    pub fn build(&self, spec: RequestSpec, token: &str) -> Result<HttpRequest, TransportError> {
        if let Some(detail) = spec.body_error {
            return Err(TransportError::InvalidRequest(detail));
        }

        let mut url = format!("{}{}", self.base_url, spec.path);
        if let Some(query) = spec.params.encode() {
            url.push('?');
            url.push_str(&query);
        }

        let is_multipart = spec.body.as_ref().is_some_and(Body::is_multipart);
        let mut headers: Vec<(String, String)> = Vec::new();
        if !is_multipart {
            set_header(&mut headers, CONTENT_TYPE, JSON_CONTENT_TYPE);
        }
        if !token.is_empty() {
            set_header(&mut headers, AUTHORIZATION, &format!("Bearer {}", token));
        }
        for (name, value) in &spec.headers {
            set_header(&mut headers, name, value);
        }

        let body = match spec.body {
            None => None,
            Some(Body::Text(text)) => Some(Payload::Text(text)),
            Some(Body::Json(value)) => Some(Payload::Text(
                serde_json::to_string(&value).map_err(|e| TransportError::InvalidRequest(e.to_string()))?,
            )),
            Some(Body::Multipart(form)) => Some(Payload::Multipart(form)),
        };

        Ok(HttpRequest {
            method: spec.method,
            url,
            headers,
            body,
        })
    }

    /// Dispatch one request. Never fails: every outcome is an `ApiResponse`.
    pub async fn request<T: DeserializeOwned>(&self, spec: RequestSpec) -> ApiResponse<T> {
        let token = self.session.token().await;
        let request = match self.build(spec, &token) {
            Ok(request) => request,
            Err(e) => {
                tracing::error!(error = %e, "failed to encode request body; not sent");
                return ApiResponse::failure(FailureKind::InvalidRequest, MSG_INVALID_REQUEST);
            }
        };

        tracing::debug!(
            method = %request.method,
            url = %request.url,
            has_token = !token.is_empty(),
            "API request"
        );

        let url = request.url.clone();
        match self.transport.send(request).await {
            Ok(response) => self.interpret(&url, response).await,
            Err(e) => {
                tracing::error!(url = %url, error = %e, "API request failed");
                transport_failure(e)
            }
        }
    }

    async fn interpret<T: DeserializeOwned>(&self, url: &str, response: HttpResponse) -> ApiResponse<T> {
        if response.is_success() {
            return match serde_json::from_str::<Envelope>(&response.body) {
                Ok(envelope) => envelope.into(),
                Err(e) => {
                    tracing::warn!(url, status = response.status, error = %e, "response is not an envelope");
                    ApiResponse::failure(FailureKind::Decode, MSG_INVALID_RESPONSE)
                }
            };
        }

        let error_body = serde_json::from_str::<ErrorBody>(&response.body).ok();
        let message = error_body
            .as_ref()
            .and_then(ErrorBody::message)
            .map(str::to_string)
            .unwrap_or_else(|| format!("HTTP {}: {}", response.status, response.status_text));

        tracing::warn!(url, status = response.status, message = %message, "API request rejected");

        if response.status != 401 {
            return ApiResponse::failure(FailureKind::Http { status: response.status }, message);
        }

        let code = error_body.as_ref().and_then(|b| b.code.as_deref());
        match classify_unauthorized(code, &message) {
            UnauthorizedReason::MissingToken => {
                tracing::warn!("request reached the server without a token; keeping stored session");
                ApiResponse::failure(FailureKind::MissingToken, message)
            }
            UnauthorizedReason::InvalidToken => {
                tracing::warn!("token expired or invalid; clearing session");
                self.session.clear().await;
                ApiResponse::failure(FailureKind::SessionExpired, message)
            }
            UnauthorizedReason::Other => ApiResponse::failure(FailureKind::Unauthorized, message),
        }
    }
}

fn transport_failure<T>(error: TransportError) -> ApiResponse<T> {
    match error {
        TransportError::Unreachable(_) => {
            ApiResponse::failure(FailureKind::Unreachable, MSG_SERVER_UNREACHABLE)
        }
        TransportError::Network(detail) => {
            let message = if detail.is_empty() {
                MSG_NETWORK_FAILED.to_string()
            } else {
                detail
            };
            ApiResponse::failure(FailureKind::Network, message)
        }
        TransportError::InvalidRequest(detail) => {
            ApiResponse::failure(FailureKind::InvalidRequest, format!("{}: {}", MSG_INVALID_REQUEST, detail))
        }
    }
}

/// Insert or replace a header, comparing names case-insensitively.
fn set_header(headers: &mut Vec<(String, String)>, name: &str, value: &str) {
    match headers.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case(name)) {
        Some(slot) => *slot = (name.to_string(), value.to_string()),
        None => headers.push((name.to_string(), value.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::request::{FilePart, Method, MultipartForm};
    use crate::session::MemoryStore;
    use crate::shared::{QueryParams, Role};
    use async_trait::async_trait;
    use serde_json::json;

    struct Unused;

    #[async_trait]
    impl Transport for Unused {
        async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, TransportError> {
            Err(TransportError::Network("unused".to_string()))
        }
    }

    fn http() -> ApiHttp {
        let session = SessionManager::restore(Role::Member, Arc::new(MemoryStore::new()), false);
        ApiHttp::new("http://localhost:5000/api/v1/", Arc::new(Unused), session)
    }

    #[test]
    fn build_filters_query_and_sets_json_header() {
        let spec = RequestSpec::get("/orders").params(
            QueryParams::new()
                .with("page", 1)
                .with("pageSize", "")
                .with("status", None::<&str>),
        );
        let req = http().build(spec, "").unwrap();
        assert_eq!(req.url, "http://localhost:5000/api/v1/orders?page=1");
        assert_eq!(req.header("content-type"), Some("application/json"));
        assert_eq!(req.header("authorization"), None);
        assert!(req.body.is_none());
    }

    #[test]
    fn build_attaches_bearer_token() {
        let req = http().build(RequestSpec::get("/user/profile"), "abc").unwrap();
        assert_eq!(req.header("Authorization"), Some("Bearer abc"));
    }

    #[test]
    fn caller_headers_override_defaults() {
        let spec = RequestSpec::post("/orders")
            .body(Body::Text("raw".to_string()))
            .header("content-type", "text/plain");
        let req = http().build(spec, "").unwrap();
        let content_types: Vec<_> = req
            .headers
            .iter()
            .filter(|(k, _)| k.eq_ignore_ascii_case("content-type"))
            .collect();
        assert_eq!(content_types.len(), 1);
        assert_eq!(req.header("Content-Type"), Some("text/plain"));
    }

    #[test]
    fn string_body_passes_through_unchanged() {
        let raw = r#"{"a": 1,   "b":[ ]}"#;
        let spec = RequestSpec::post("/orders").body(Body::Text(raw.to_string()));
        let req = http().build(spec, "").unwrap();
        assert_eq!(req.body, Some(Payload::Text(raw.to_string())));
    }

    #[test]
    fn json_body_round_trips() {
        let value = json!({"nonMemberIds": [1, 2], "quantity": 3, "settlementDate": "2024-01-15"});
        let spec = RequestSpec::post("/orders").json(&value);
        let req = http().build(spec, "").unwrap();
        match req.body {
            Some(Payload::Text(text)) => {
                let back: serde_json::Value = serde_json::from_str(&text).unwrap();
                assert_eq!(back, value);
            }
            other => panic!("unexpected body: {:?}", other),
        }
    }

    #[test]
    fn multipart_leaves_content_type_to_transport() {
        let form = MultipartForm::new()
            .text("orderId", "9")
            .file("images", FilePart::new("x.jpg", "image/jpeg", vec![0xff]));
        let spec = RequestSpec::new(Method::Post, "/exception-orders").body(Body::Multipart(form.clone()));
        let req = http().build(spec, "tok").unwrap();
        assert_eq!(req.header("content-type"), None);
        assert_eq!(req.header("authorization"), Some("Bearer tok"));
        assert_eq!(req.body, Some(Payload::Multipart(form)));
    }

    struct Unserializable;

    impl serde::Serialize for Unserializable {
        fn serialize<S: serde::Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("cannot encode"))
        }
    }

    #[test]
    fn unserializable_body_fails_to_build() {
        let spec = RequestSpec::post("/orders").json(&Unserializable);
        assert!(spec.body.is_none());
        let err = http().build(spec, "").unwrap_err();
        assert!(matches!(err, TransportError::InvalidRequest(ref detail) if detail.contains("cannot encode")));
    }

    #[tokio::test]
    async fn unserializable_body_is_never_sent() {
        // `Unused` answers every send with a network error, so reaching it
        // would surface as `Network`.
        let resp: ApiResponse<serde_json::Value> =
            http().request(RequestSpec::post("/orders").json(&Unserializable)).await;
        assert_eq!(resp.failure_kind(), Some(FailureKind::InvalidRequest));
        assert_eq!(resp.message(), MSG_INVALID_REQUEST);
    }

    #[test]
    fn classify_prefers_structured_code() {
        assert_eq!(
            classify_unauthorized(Some("token_missing"), "Token已过期，请重新登录"),
            UnauthorizedReason::MissingToken
        );
        assert_eq!(
            classify_unauthorized(Some("token_expired"), ""),
            UnauthorizedReason::InvalidToken
        );
    }

    #[test]
    fn classify_falls_back_to_message() {
        assert_eq!(
            classify_unauthorized(None, "缺少Token，请先登录"),
            UnauthorizedReason::MissingToken
        );
        assert_eq!(
            classify_unauthorized(None, "Token已过期，请重新登录"),
            UnauthorizedReason::InvalidToken
        );
        assert_eq!(
            classify_unauthorized(None, "无效的Token，请重新登录: Signature verification failed"),
            UnauthorizedReason::InvalidToken
        );
        assert_eq!(
            classify_unauthorized(None, "登录已失效，请重新登录"),
            UnauthorizedReason::InvalidToken
        );
    }

    #[test]
    fn unrecognised_401s_keep_the_session() {
        assert_eq!(
            classify_unauthorized(None, "手机号或密码错误"),
            UnauthorizedReason::Other
        );
        assert_eq!(
            classify_unauthorized(None, "用户名或密码错误"),
            UnauthorizedReason::Other
        );
        assert_eq!(
            classify_unauthorized(None, "HTTP 401: Unauthorized"),
            UnauthorizedReason::Other
        );
        assert_eq!(
            classify_unauthorized(Some("bad_credentials"), "Token需要刷新"),
            UnauthorizedReason::Other
        );
    }

    #[tokio::test]
    async fn transport_errors_become_failures() {
        let resp: ApiResponse<serde_json::Value> =
            transport_failure(TransportError::Unreachable("dns".to_string()));
        assert_eq!(resp.failure_kind(), Some(FailureKind::Unreachable));
        assert_eq!(resp.message(), MSG_SERVER_UNREACHABLE);

        let resp: ApiResponse<serde_json::Value> = transport_failure(TransportError::Network(String::new()));
        assert_eq!(resp.message(), MSG_NETWORK_FAILED);
    }
}
