//! Points sub-client.

use crate::client::OrderDeskClient;
use crate::domain::points::{Balance, TransferRequest, TransferResult};
use crate::envelope::{ApiResponse, JsonResponse};
use crate::http::RequestSpec;
use crate::shared::QueryParams;

pub struct Points<'a> {
    pub(crate) client: &'a OrderDeskClient,
}

impl<'a> Points<'a> {
    /// `GET /points/balance`.
    pub async fn balance(&self) -> ApiResponse<Balance> {
        self.client.http.request(RequestSpec::get("/points/balance")).await
    }

    /// `GET /points/history`.
    pub async fn history(&self, params: impl Into<QueryParams>) -> JsonResponse {
        let spec = RequestSpec::get("/points/history").params(params.into());
        self.client.http.request(spec).await
    }

    /// `POST /points/transfer`.
    ///
    /// A unit price below the sender's purchase price is rejected with a 400
    /// until resent with [`TransferRequest::confirm_low_price`].
    pub async fn transfer(&self, request: &TransferRequest) -> ApiResponse<TransferResult> {
        let spec = RequestSpec::post("/points/transfer").json(request);
        let resp = self.client.http.request(spec).await;
        if !resp.is_success() {
            tracing::debug!(to = %request.to_phone, message = resp.message(), "transfer rejected");
        }
        resp
    }
}
