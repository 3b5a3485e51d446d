//! Request and response types.
//!
//! [`RequestSpec`] is what endpoint methods produce: a path relative to the
//! API root plus method, query, body, and extra headers. The dispatcher
//! resolves it into an [`HttpRequest`], plain data a [`Transport`] can
//! execute, and the transport hands back an [`HttpResponse`].
//!
//! [`Transport`]: crate::http::Transport

use serde::Serialize;

use crate::shared::QueryParams;

/// HTTP method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── Multipart ───────────────────────────────────────────────────────────────

/// One file attached to a multipart form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl FilePart {
    pub fn new(file_name: &str, mime_type: &str, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.to_string(),
            mime_type: mime_type.to_string(),
            bytes,
        }
    }
}

/// Value of one multipart field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    File(FilePart),
}

/// `multipart/form-data` body. Field order is preserved and names may repeat.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartForm {
    pub fields: Vec<(String, FieldValue)>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: impl Into<String>) -> Self {
        self.fields
            .push((name.to_string(), FieldValue::Text(value.into())));
        self
    }

    pub fn file(mut self, name: &str, part: FilePart) -> Self {
        self.fields.push((name.to_string(), FieldValue::File(part)));
        self
    }
}

// ─── Body ────────────────────────────────────────────────────────────────────

/// Request body as supplied by an endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// Serialized with `serde_json`.
    Json(serde_json::Value),
    /// Sent byte-for-byte.
    Text(String),
    /// Sent as multipart; the transport sets content type and boundary.
    Multipart(MultipartForm),
}

impl Body {
    pub fn json(value: &impl Serialize) -> Result<Self, serde_json::Error> {
        Ok(Self::Json(serde_json::to_value(value)?))
    }

    pub fn is_multipart(&self) -> bool {
        matches!(self, Self::Multipart(_))
    }
}

/// Body of a resolved request.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Text(String),
    Multipart(MultipartForm),
}

// ─── RequestSpec ─────────────────────────────────────────────────────────────

/// Everything an endpoint needs to say about one call.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSpec {
    pub method: Method,
    /// Path relative to the API root, starting with `/`.
    pub path: String,
    pub params: QueryParams,
    pub body: Option<Body>,
    /// Extra headers; these override defaults with the same name.
    pub headers: Vec<(String, String)>,
    /// Set when [`RequestSpec::json`] could not serialize its value. A spec
    /// carrying an error is never sent.
    pub body_error: Option<String>,
}

impl RequestSpec {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            params: QueryParams::new(),
            body: None,
            headers: Vec::new(),
            body_error: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    pub fn params(mut self, params: QueryParams) -> Self {
        self.params = params;
        self
    }

    pub fn body(mut self, body: Body) -> Self {
        self.body = Some(body);
        self
    }

    /// Attach a serializable value as a JSON body.
    ///
    /// A serialization failure is kept in [`body_error`](Self::body_error)
    /// and reported when the spec is dispatched.
    pub fn json(mut self, value: &impl Serialize) -> Self {
        match Body::json(value) {
            Ok(body) => self.body(body),
            Err(e) => {
                self.body = None;
                self.body_error = Some(e.to_string());
                self
            }
        }
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }
}

// ─── Resolved request / response ─────────────────────────────────────────────

/// A fully resolved request: absolute URL, final headers, encoded body.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Payload>,
}

impl HttpRequest {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// What came back from the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    /// Reason phrase, e.g. `"Not Found"`. May be empty.
    pub status_text: String,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, status_text: &str, body: impl Into<String>) -> Self {
        Self {
            status,
            status_text: status_text.to_string(),
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn spec_builder_collects_parts() {
        let spec = RequestSpec::post("/points/transfer")
            .json(&json!({"toPhone": "13800000000"}))
            .header("X-Trace", "1");
        assert_eq!(spec.method, Method::Post);
        assert_eq!(spec.path, "/points/transfer");
        assert_eq!(spec.body, Some(Body::Json(json!({"toPhone": "13800000000"}))));
        assert_eq!(spec.headers, vec![("X-Trace".to_string(), "1".to_string())]);
    }

    #[test]
    fn json_body_error_is_kept() {
        let mut bad = std::collections::HashMap::new();
        bad.insert(vec![1u8], 1);
        let spec = RequestSpec::post("/orders").json(&bad);
        assert_eq!(spec.body, None);
        assert!(spec.body_error.is_some());
    }

    #[test]
    fn multipart_keeps_repeated_names_in_order() {
        let form = MultipartForm::new()
            .text("orderId", "42")
            .file("images", FilePart::new("a.png", "image/png", vec![1]))
            .file("images", FilePart::new("b.png", "image/png", vec![2]));
        let names: Vec<&str> = form.fields.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["orderId", "images", "images"]);
    }

    #[test]
    fn header_lookup_ignores_case() {
        let req = HttpRequest {
            method: Method::Get,
            url: "http://x/api/v1/orders".to_string(),
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body: None,
        };
        assert_eq!(req.header("content-type"), Some("application/json"));
        assert_eq!(req.header("authorization"), None);
    }

    #[test]
    fn response_success_range() {
        assert!(HttpResponse::new(204, "No Content", "").is_success());
        assert!(!HttpResponse::new(401, "Unauthorized", "").is_success());
    }
}
