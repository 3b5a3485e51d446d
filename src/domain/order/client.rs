//! Orders sub-client.

use crate::client::OrderDeskClient;
use crate::domain::order::{ExceptionReport, OrderList, OrderStatistics, SubmitOrderRequest, SubmitOrderResult};
use crate::envelope::{ApiResponse, JsonResponse};
use crate::http::{Body, RequestSpec};
use crate::shared::QueryParams;

/// Sub-client for the signed-in member's orders.
pub struct Orders<'a> {
    pub(crate) client: &'a OrderDeskClient,
}

impl<'a> Orders<'a> {
    /// `POST /orders`.
    pub async fn submit(&self, request: &SubmitOrderRequest) -> ApiResponse<SubmitOrderResult> {
        let spec = RequestSpec::post("/orders").json(request);
        self.client.http.request(spec).await
    }

    /// `GET /orders`. Blank filter values are dropped from the query.
    pub async fn list(&self, filter: impl Into<QueryParams>) -> ApiResponse<OrderList> {
        let spec = RequestSpec::get("/orders").params(filter.into());
        self.client.http.request(spec).await
    }

    /// `GET /orders/statistics`.
    pub async fn statistics(&self) -> ApiResponse<OrderStatistics> {
        self.client.http.request(RequestSpec::get("/orders/statistics")).await
    }

    /// `POST /exception-orders` as `multipart/form-data`.
    pub async fn report_exception(&self, report: ExceptionReport) -> JsonResponse {
        let spec = RequestSpec::post("/exception-orders").body(Body::Multipart(report.into_form()));
        self.client.http.request(spec).await
    }
}
