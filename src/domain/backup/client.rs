//! Backups sub-client.

use crate::client::OrderDeskClient;
use crate::envelope::JsonResponse;
use crate::http::RequestSpec;
use crate::shared::path_segment;

/// Sub-client for database backups. Requires an admin session.
pub struct Backups<'a> {
    pub(crate) client: &'a OrderDeskClient,
}

impl<'a> Backups<'a> {
    /// `POST /admin/backup`. Note the singular path.
    pub async fn create(&self) -> JsonResponse {
        self.client.http.request(RequestSpec::post("/admin/backup")).await
    }

    /// `GET /admin/backups`.
    pub async fn list(&self) -> JsonResponse {
        self.client.http.request(RequestSpec::get("/admin/backups")).await
    }

    /// `POST /admin/backups/{id}/restore`.
    pub async fn restore(&self, id: &str) -> JsonResponse {
        let path = format!("/admin/backups/{}/restore", path_segment(id));
        self.client.http.request(RequestSpec::post(path)).await
    }

    /// `DELETE /admin/backups/{id}`.
    pub async fn delete(&self, id: &str) -> JsonResponse {
        let path = format!("/admin/backups/{}", path_segment(id));
        self.client.http.request(RequestSpec::delete(path)).await
    }
}
