//! Notifications sub-client.

use crate::client::OrderDeskClient;
use crate::envelope::JsonResponse;
use crate::http::RequestSpec;

/// Sub-client for notifications. Requires an admin session.
pub struct Notifications<'a> {
    pub(crate) client: &'a OrderDeskClient,
}

impl<'a> Notifications<'a> {
    /// `POST /admin/notifications`. The payload is passed through as JSON.
    pub async fn send(&self, notification: &impl serde::Serialize) -> JsonResponse {
        let spec = RequestSpec::post("/admin/notifications").json(notification);
        self.client.http.request(spec).await
    }

    /// `GET /admin/notifications`.
    pub async fn list(&self) -> JsonResponse {
        self.client.http.request(RequestSpec::get("/admin/notifications")).await
    }
}
