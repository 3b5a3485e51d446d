//! Rewards sub-client.

use crate::client::OrderDeskClient;
use crate::domain::reward::RewardStatistics;
use crate::domain::transaction::Transaction;
use crate::envelope::{ApiResponse, JsonResponse};
use crate::http::RequestSpec;
use crate::shared::{Page, QueryParams};

/// Sub-client for the signed-in member's referral rewards.
pub struct Rewards<'a> {
    pub(crate) client: &'a OrderDeskClient,
}

impl<'a> Rewards<'a> {
    /// `GET /rewards`. Rows are `reward` ledger entries.
    pub async fn list(&self, filter: impl Into<QueryParams>) -> ApiResponse<Page<Transaction>> {
        let spec = RequestSpec::get("/rewards").params(filter.into());
        self.client.http.request(spec).await
    }

    /// `GET /rewards/statistics`.
    pub async fn statistics(&self) -> ApiResponse<RewardStatistics> {
        self.client.http.request(RequestSpec::get("/rewards/statistics")).await
    }

    /// `GET /rewards/summary`.
    pub async fn summary(&self) -> JsonResponse {
        self.client.http.request(RequestSpec::get("/rewards/summary")).await
    }

    /// `GET /rewards/details`.
    pub async fn details(&self, params: impl Into<QueryParams>) -> JsonResponse {
        let spec = RequestSpec::get("/rewards/details").params(params.into());
        self.client.http.request(spec).await
    }
}
