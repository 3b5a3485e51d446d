//! Fixture response source: a [`Transport`] that answers from canned data.
//!
//! Lets the whole client run without a backend: demos, UI development, and
//! tests. Requests are routed by URL substring in a fixed order (`/login`,
//! `/members`, `/agents`, `/orders`, `/transactions`, `/exceptions`,
//! `/settings`); anything else succeeds with an empty object.
//!
//! Only `admin` / `admin123` logs in.

mod fixtures;

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::envelope::{now_timestamp, Envelope};
use crate::error::TransportError;
use crate::http::request::{HttpRequest, HttpResponse, Payload};
use crate::http::Transport;

/// Login credentials the fixture accepts.
pub const FIXTURE_USERNAME: &str = "admin";
pub const FIXTURE_PASSWORD: &str = "admin123";
/// Message for any other credential pair.
pub const MSG_BAD_CREDENTIALS: &str = "用户名或密码错误";

/// Canned-data transport.
#[derive(Debug, Clone, Default)]
pub struct FixtureTransport {
    latency: Option<Duration>,
}

impl FixtureTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay every response, to exercise loading states.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Build the envelope for a request without the simulated delay.
    pub fn respond(&self, request: &HttpRequest) -> Envelope<Value> {
        let url = request.url.as_str();
        if url.contains("/login") {
            login(request)
        } else if url.contains("/members") {
            ok(fixtures::members())
        } else if url.contains("/agents") {
            ok(fixtures::agents())
        } else if url.contains("/orders") {
            ok(fixtures::orders())
        } else if url.contains("/transactions") {
            ok(fixtures::transactions())
        } else if url.contains("/exceptions") {
            ok(fixtures::exceptions())
        } else if url.contains("/settings") {
            ok(fixtures::settings())
        } else {
            ok(json!({}))
        }
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl Transport for FixtureTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        if let Some(latency) = self.latency {
            futures_timer::Delay::new(latency).await;
        }
        let envelope = self.respond(&request);
        tracing::debug!(url = %request.url, success = envelope.success, "fixture response");
        let body = serde_json::to_string(&envelope)
            .map_err(|e| TransportError::InvalidRequest(e.to_string()))?;
        Ok(HttpResponse::new(200, "OK", body))
    }
}

fn ok(data: Value) -> Envelope<Value> {
    Envelope {
        success: true,
        data: Some(data),
        message: String::new(),
        timestamp: now_timestamp(),
    }
}

#[derive(Deserialize, Default)]
struct Credentials {
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
}

fn login(request: &HttpRequest) -> Envelope<Value> {
    let credentials = match &request.body {
        Some(Payload::Text(text)) => serde_json::from_str(text).unwrap_or_default(),
        _ => Credentials::default(),
    };

    if credentials.username == FIXTURE_USERNAME && credentials.password == FIXTURE_PASSWORD {
        return ok(json!({
            "token": format!("mock_token_{}", Utc::now().timestamp_millis()),
            "user": {
                "id": 1,
                "username": "admin",
                "name": "管理员",
                "role": "super_admin"
            }
        }));
    }

    Envelope {
        success: false,
        data: None,
        message: MSG_BAD_CREDENTIALS.to_string(),
        timestamp: now_timestamp(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::Method;

    fn request(method: Method, path: &str, body: Option<&str>) -> HttpRequest {
        HttpRequest {
            method,
            url: format!("http://localhost:5000/api/v1{}", path),
            headers: Vec::new(),
            body: body.map(|b| Payload::Text(b.to_string())),
        }
    }

    #[test]
    fn admin_credentials_log_in() {
        let env = FixtureTransport::new().respond(&request(
            Method::Post,
            "/admin/login",
            Some(r#"{"username":"admin","password":"admin123"}"#),
        ));
        assert!(env.success);
        let data = env.data.unwrap();
        assert!(data["token"].as_str().unwrap().starts_with("mock_token_"));
        assert_eq!(data["user"]["role"], "super_admin");
    }

    #[test]
    fn wrong_credentials_are_rejected() {
        let env = FixtureTransport::new().respond(&request(
            Method::Post,
            "/admin/login",
            Some(r#"{"username":"admin","password":"nope"}"#),
        ));
        assert!(!env.success);
        assert!(env.data.is_none());
        assert_eq!(env.message, MSG_BAD_CREDENTIALS);
    }

    #[test]
    fn routes_by_substring_in_order() {
        let fixture = FixtureTransport::new();
        let members = fixture.respond(&request(Method::Get, "/admin/members?page=1", None));
        assert_eq!(members.data.unwrap()["total"], 100);

        let agents = fixture.respond(&request(Method::Get, "/admin/agents", None));
        assert_eq!(agents.data.unwrap()["list"][0]["type"], "代理");

        let settings = fixture.respond(&request(Method::Get, "/admin/settings", None));
        assert_eq!(settings.data.unwrap()["rewardRates"]["direct"], 3);

        let other = fixture.respond(&request(Method::Get, "/points/balance", None));
        assert_eq!(other.data.unwrap(), json!({}));
    }

    #[tokio::test]
    async fn send_wraps_envelope_in_200() {
        let resp = FixtureTransport::new()
            .with_latency(Duration::from_millis(1))
            .send(request(Method::Get, "/admin/transactions", None))
            .await
            .unwrap();
        assert_eq!(resp.status, 200);
        let env: Envelope = serde_json::from_str(&resp.body).unwrap();
        assert_eq!(env.data.unwrap()["stats"]["monthRecharge"], 50000);
    }
}
