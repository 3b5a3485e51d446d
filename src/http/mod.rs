//! HTTP layer: request types, the transport seam and the `ApiHttp` dispatcher.

pub mod client;
pub mod request;
pub mod transport;

pub use client::{classify_unauthorized, ApiHttp, UnauthorizedReason};
pub use request::{
    Body, FieldValue, FilePart, HttpRequest, HttpResponse, Method, MultipartForm, Payload,
    RequestSpec,
};
#[cfg(feature = "http")]
pub use transport::ReqwestTransport;
pub use transport::Transport;
