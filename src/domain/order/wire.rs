//! Wire types for member order submission and history.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::shared::serde_util::{date_opt, local_datetime_opt};
use crate::shared::QueryParams;

/// Body of `POST /orders`: one order per non-member, all for the same day.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitOrderRequest {
    pub non_member_ids: Vec<i64>,
    pub settlement_date: NaiveDate,
    pub quantity: u32,
}

/// `data` of `POST /orders`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitOrderResult {
    pub order_ids: Vec<i64>,
    pub total_points: Decimal,
    pub remaining_points: Decimal,
    pub base_price: Decimal,
    pub discount_rate: Decimal,
    pub final_price: Decimal,
}

/// Query for `GET /orders`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderFilter {
    /// Day the orders were submitted.
    pub query_date: Option<NaiveDate>,
    pub settlement_date: Option<NaiveDate>,
    /// `pending`, `approved` or `rejected`.
    pub status: Option<String>,
    pub keyword: Option<String>,
}

impl From<OrderFilter> for QueryParams {
    fn from(f: OrderFilter) -> Self {
        QueryParams::new()
            .with("queryDate", f.query_date)
            .with("settlementDate", f.settlement_date)
            .with("status", f.status)
            .with("keyword", f.keyword)
    }
}

/// One order as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub non_member_id: Option<i64>,
    #[serde(default)]
    pub non_member_name: Option<String>,
    #[serde(default)]
    pub non_member_link: Option<String>,
    #[serde(default, with = "date_opt")]
    pub settlement_date: Option<NaiveDate>,
    #[serde(default)]
    pub base_price: Decimal,
    #[serde(default)]
    pub discount_rate: Decimal,
    #[serde(default)]
    pub final_price: Decimal,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub total_points: Decimal,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub exported: bool,
    #[serde(default, with = "local_datetime_opt")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub has_exception: bool,
    #[serde(default)]
    pub exception_status: Option<String>,
}

/// Orders submitted together, grouped by submission time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSubmission {
    #[serde(default, with = "local_datetime_opt")]
    pub submission_time: Option<NaiveDateTime>,
    #[serde(default, with = "date_opt")]
    pub settlement_date: Option<NaiveDate>,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub total_points: Decimal,
    #[serde(default)]
    pub avg_discount_price: Decimal,
    #[serde(default)]
    pub order_count: u32,
    #[serde(default)]
    pub orders: Vec<Order>,
}

/// Totals for a filtered day, present only when a date filter was given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionTotals {
    pub submission_count: u32,
    pub total_quantity: u32,
    pub total_points: Decimal,
}

/// `data` of `GET /orders`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderList {
    #[serde(default)]
    pub list: Vec<OrderSubmission>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub statistics: Option<SubmissionTotals>,
}

/// `data` of `GET /orders/statistics`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatistics {
    pub today_order_count: u32,
    pub month_order_count: u32,
}
