//! Transactions sub-client.

use crate::client::OrderDeskClient;
use crate::domain::transaction::{CashProfitList, Transaction, TransactionStatistics};
use crate::envelope::ApiResponse;
use crate::http::RequestSpec;
use crate::shared::{Page, QueryParams};

/// Sub-client for the signed-in member's point ledger.
pub struct Transactions<'a> {
    pub(crate) client: &'a OrderDeskClient,
}

impl<'a> Transactions<'a> {
    /// `GET /transactions`.
    pub async fn list(&self, filter: impl Into<QueryParams>) -> ApiResponse<Page<Transaction>> {
        let spec = RequestSpec::get("/transactions").params(filter.into());
        self.client.http.request(spec).await
    }

    /// `GET /transactions/statistics`.
    pub async fn statistics(&self) -> ApiResponse<TransactionStatistics> {
        self.client.http.request(RequestSpec::get("/transactions/statistics")).await
    }

    /// `GET /transactions/cash-profit`. Agents only.
    pub async fn cash_profit(&self) -> ApiResponse<CashProfitList> {
        self.client.http.request(RequestSpec::get("/transactions/cash-profit")).await
    }
}
