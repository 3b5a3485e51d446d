//! Admin sub-client for the back office.

use crate::client::OrderDeskClient;
use crate::domain::admin::{
    AdminOrderRow, AdminTransactionRow, AdminUserRow, ChangeParentRequest, CreateAgentRequest,
    CreatedAgent, ExceptionRow, ExportExceptionsRequest, ExportOrdersRequest, RechargeRequest,
    RechargeResult, SetPayPasswordRequest, StatisticsKind, Subordinates,
};
use crate::envelope::{ApiResponse, JsonResponse};
use crate::http::RequestSpec;
use crate::shared::{path_segment, Page, QueryParams};

/// Sub-client for back-office operations. Requires an admin session.
pub struct Admin<'a> {
    pub(crate) client: &'a OrderDeskClient,
}

impl<'a> Admin<'a> {
    // ── Members and agents ───────────────────────────────────────────────

    /// `GET /admin/members`.
    pub async fn members(&self, filter: impl Into<QueryParams>) -> ApiResponse<Page<AdminUserRow>> {
        let spec = RequestSpec::get("/admin/members").params(filter.into());
        self.client.http.request(spec).await
    }

    /// `DELETE /admin/members/{promoCode}`.
    pub async fn delete_member(&self, promo_code: &str) -> JsonResponse {
        let path = format!("/admin/members/{}", path_segment(promo_code));
        self.client.http.request(RequestSpec::delete(path)).await
    }

    /// `GET /admin/agents`.
    pub async fn agents(&self, filter: impl Into<QueryParams>) -> ApiResponse<Page<AdminUserRow>> {
        let spec = RequestSpec::get("/admin/agents").params(filter.into());
        self.client.http.request(spec).await
    }

    /// `POST /admin/agents`. The response carries the generated default
    /// passwords.
    pub async fn create_agent(&self, request: &CreateAgentRequest) -> ApiResponse<CreatedAgent> {
        let spec = RequestSpec::post("/admin/agents").json(request);
        self.client.http.request(spec).await
    }

    /// `DELETE /admin/agents/{promoCode}`.
    pub async fn delete_agent(&self, promo_code: &str) -> JsonResponse {
        let path = format!("/admin/agents/{}", path_segment(promo_code));
        self.client.http.request(RequestSpec::delete(path)).await
    }

    /// `GET /admin/agents/{promoCode}/subordinates`.
    pub async fn subordinates(&self, promo_code: &str) -> ApiResponse<Subordinates> {
        let path = format!("/admin/agents/{}/subordinates", path_segment(promo_code));
        self.client.http.request(RequestSpec::get(path)).await
    }

    // ── Individual users ─────────────────────────────────────────────────

    /// `PUT /admin/users/{promoCode}/change-parent`.
    pub async fn change_parent(&self, promo_code: &str, parent_promo_code: &str) -> JsonResponse {
        let path = format!("/admin/users/{}/change-parent", path_segment(promo_code));
        let spec = RequestSpec::put(path).json(&ChangeParentRequest { parent_promo_code });
        self.client.http.request(spec).await
    }

    /// `GET /admin/users/{promoCode}/orders`.
    pub async fn user_orders(&self, promo_code: &str, filter: impl Into<QueryParams>) -> JsonResponse {
        let path = format!("/admin/users/{}/orders", path_segment(promo_code));
        let spec = RequestSpec::get(path).params(filter.into());
        self.client.http.request(spec).await
    }

    /// `PUT /admin/users/{promoCode}/reset-password`. Resets the login
    /// password to the backend default.
    pub async fn reset_password(&self, promo_code: &str) -> JsonResponse {
        let path = format!("/admin/users/{}/reset-password", path_segment(promo_code));
        self.client.http.request(RequestSpec::put(path)).await
    }

    /// `PUT /admin/users/{promoCode}/reset-pay-password`.
    pub async fn reset_pay_password(&self, promo_code: &str) -> JsonResponse {
        let path = format!("/admin/users/{}/reset-pay-password", path_segment(promo_code));
        self.client.http.request(RequestSpec::put(path)).await
    }

    /// `PUT /admin/users/{userId}/pay-password`. Addressed by numeric id.
    pub async fn set_pay_password(&self, user_id: i64, pay_password: &str) -> JsonResponse {
        let path = format!("/admin/users/{}/pay-password", user_id);
        let spec = RequestSpec::put(path).json(&SetPayPasswordRequest { pay_password });
        self.client.http.request(spec).await
    }

    /// `POST /admin/recharge`.
    pub async fn recharge(&self, request: &RechargeRequest) -> ApiResponse<RechargeResult> {
        let spec = RequestSpec::post("/admin/recharge").json(request);
        self.client.http.request(spec).await
    }

    // ── Orders, transactions, exceptions ─────────────────────────────────

    /// `GET /admin/orders`.
    pub async fn orders(&self, filter: impl Into<QueryParams>) -> ApiResponse<Page<AdminOrderRow>> {
        let spec = RequestSpec::get("/admin/orders").params(filter.into());
        self.client.http.request(spec).await
    }

    /// `POST /admin/orders/export`. Marks the orders exported.
    pub async fn export_orders(&self, order_ids: &[i64]) -> JsonResponse {
        let spec = RequestSpec::post("/admin/orders/export").json(&ExportOrdersRequest { order_ids });
        self.client.http.request(spec).await
    }

    /// `GET /admin/transactions`.
    pub async fn transactions(
        &self,
        filter: impl Into<QueryParams>,
    ) -> ApiResponse<Page<AdminTransactionRow>> {
        let spec = RequestSpec::get("/admin/transactions").params(filter.into());
        self.client.http.request(spec).await
    }

    /// `GET /admin/exceptions`.
    pub async fn exceptions(&self, filter: impl Into<QueryParams>) -> ApiResponse<Page<ExceptionRow>> {
        let spec = RequestSpec::get("/admin/exceptions").params(filter.into());
        self.client.http.request(spec).await
    }

    /// `POST /admin/exceptions/export`.
    pub async fn export_exceptions(&self, exception_ids: &[i64]) -> JsonResponse {
        let spec = RequestSpec::post("/admin/exceptions/export")
            .json(&ExportExceptionsRequest { exception_ids });
        self.client.http.request(spec).await
    }

    /// `PUT /admin/exceptions/{id}/process`.
    pub async fn process_exception(&self, id: i64) -> JsonResponse {
        let path = format!("/admin/exceptions/{}/process", id);
        self.client.http.request(RequestSpec::put(path)).await
    }

    // ── Dashboard ────────────────────────────────────────────────────────

    /// `GET /admin/statistics/{orders|transactions|exceptions}`.
    pub async fn statistics(&self, kind: StatisticsKind) -> JsonResponse {
        let path = format!("/admin/statistics/{}", kind.as_str());
        self.client.http.request(RequestSpec::get(path)).await
    }
}
