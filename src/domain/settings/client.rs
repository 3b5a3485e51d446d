//! Settings sub-client.

use crate::client::OrderDeskClient;
use crate::domain::settings::SystemSettings;
use crate::envelope::{ApiResponse, JsonResponse};
use crate::http::RequestSpec;

/// Sub-client for system settings. Requires an admin session.
pub struct Settings<'a> {
    pub(crate) client: &'a OrderDeskClient,
}

impl<'a> Settings<'a> {
    /// `GET /admin/settings`.
    pub async fn get(&self) -> ApiResponse<SystemSettings> {
        self.client.http.request(RequestSpec::get("/admin/settings")).await
    }

    /// `PUT /admin/settings`. Sections left as `None` are not sent and keep
    /// their stored values.
    pub async fn update(&self, settings: &SystemSettings) -> JsonResponse {
        let spec = RequestSpec::put("/admin/settings").json(settings);
        self.client.http.request(spec).await
    }
}
