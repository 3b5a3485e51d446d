//! Wire types for the member's point ledger.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::shared::serde_util::local_datetime_opt;
use crate::shared::QueryParams;

/// One ledger entry. Also the row type of the reward list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    /// `recharge`, `order_deduction`, `transfer_out`, `transfer_in`, `reward`.
    pub transaction_type: String,
    /// Signed: negative for deductions and outgoing transfers.
    pub points_change: Decimal,
    /// Balance after this entry.
    pub balance: Decimal,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub related_user_id: Option<i64>,
    #[serde(default)]
    pub unit_price: Option<Decimal>,
    #[serde(default)]
    pub actual_cash_amount: Option<Decimal>,
    #[serde(default, with = "local_datetime_opt")]
    pub created_at: Option<NaiveDateTime>,
}

/// Query for `GET /transactions`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionFilter {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub transaction_type: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl From<TransactionFilter> for QueryParams {
    fn from(f: TransactionFilter) -> Self {
        QueryParams::new()
            .with("page", f.page)
            .with("pageSize", f.page_size)
            .with("transactionType", f.transaction_type)
            .with("startDate", f.start_date)
            .with("endDate", f.end_date)
    }
}

/// Recharge and order-deduction totals for one period.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodTotals {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recharge: Option<Decimal>,
    #[serde(default)]
    pub order_deduction: Decimal,
}

/// `data` of `GET /transactions/statistics`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionStatistics {
    #[serde(default)]
    pub today: PeriodTotals,
    #[serde(default)]
    pub yesterday: PeriodTotals,
    #[serde(default)]
    pub month: PeriodTotals,
    #[serde(default)]
    pub last_month: PeriodTotals,
}

/// `data` of `GET /transactions/cash-profit`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashProfitList {
    /// Per-transfer breakdown; the shape varies with pricing history.
    #[serde(default)]
    pub list: Vec<serde_json::Value>,
    #[serde(default)]
    pub total_profit: Decimal,
}
