//! Transport seam, where a resolved [`HttpRequest`] meets the network.
//!
//! The dispatcher never talks to the network directly. It hands a request to
//! a [`Transport`] and interprets whatever comes back, so a live client and
//! the fixture source share all of the header, session, and error handling.

use async_trait::async_trait;

use crate::error::TransportError;
use crate::http::request::{HttpRequest, HttpResponse};

/// Executes one HTTP round-trip.
///
/// Implementations return `Ok` for every response that has a status, 4xx
/// and 5xx included; `Err` is reserved for failures below HTTP.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait Transport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

#[cfg(feature = "http")]
pub use live::ReqwestTransport;

#[cfg(feature = "http")]
mod live {
    use std::time::Duration;

    use async_trait::async_trait;
    use reqwest::multipart::{Form, Part};
    use reqwest::Client;

    use super::Transport;
    use crate::error::TransportError;
    use crate::http::request::{FieldValue, HttpRequest, HttpResponse, Method, MultipartForm, Payload};

    /// Live transport over `reqwest`.
    #[derive(Debug, Clone)]
    pub struct ReqwestTransport {
        client: Client,
    }

    impl ReqwestTransport {
        /// Build a transport. `timeout` is ignored on WASM, where the
        /// browser owns request lifetimes.
        pub fn new(timeout: Option<Duration>) -> Result<Self, TransportError> {
            #[allow(unused_mut)]
            let mut builder = Client::builder();
            #[cfg(not(target_arch = "wasm32"))]
            {
                builder = builder.pool_max_idle_per_host(10);
                if let Some(t) = timeout {
                    builder = builder.timeout(t);
                }
            }
            #[cfg(target_arch = "wasm32")]
            let _ = timeout;

            let client = builder
                .build()
                .map_err(|e| TransportError::InvalidRequest(e.to_string()))?;
            Ok(Self { client })
        }

        /// Wrap an existing `reqwest::Client`.
        pub fn with_client(client: Client) -> Self {
            Self { client }
        }
    }

    fn method(m: Method) -> reqwest::Method {
        match m {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }

    fn form(multipart: MultipartForm) -> Result<Form, TransportError> {
        let mut form = Form::new();
        for (name, value) in multipart.fields {
            form = match value {
                FieldValue::Text(text) => form.text(name, text),
                FieldValue::File(file) => {
                    let part = Part::bytes(file.bytes)
                        .file_name(file.file_name)
                        .mime_str(&file.mime_type)
                        .map_err(|e| TransportError::InvalidRequest(e.to_string()))?;
                    form.part(name, part)
                }
            };
        }
        Ok(form)
    }

    #[cfg_attr(not(target_arch = "wasm32"), async_trait)]
    #[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
    impl Transport for ReqwestTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
            let mut req = self.client.request(method(request.method), &request.url);
            for (name, value) in &request.headers {
                req = req.header(name.as_str(), value.as_str());
            }
            req = match request.body {
                Some(Payload::Text(text)) => req.body(text),
                Some(Payload::Multipart(multipart)) => req.multipart(form(multipart)?),
                None => req,
            };

            let resp = req.send().await?;
            let status = resp.status();
            let body = resp.text().await?;

            Ok(HttpResponse {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
                body,
            })
        }
    }
}
