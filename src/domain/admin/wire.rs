//! Wire types for the admin back-office endpoints.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::shared::serde_util::{date_opt, local_datetime_opt};
use crate::shared::{PromoCode, QueryParams};

// ── Filters ──────────────────────────────────────────────────────────────────

/// Query for `GET /admin/members` and `GET /admin/agents`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserFilter {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    /// Exact promo code (`id` on the wire).
    pub promo_code: Option<String>,
    pub phone: Option<String>,
    /// Registration day.
    pub date: Option<NaiveDate>,
}

impl From<UserFilter> for QueryParams {
    fn from(f: UserFilter) -> Self {
        QueryParams::new()
            .with("page", f.page)
            .with("pageSize", f.page_size)
            .with("id", f.promo_code)
            .with("phone", f.phone)
            .with("date", f.date)
    }
}

/// Query for `GET /admin/orders`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdminOrderFilter {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub settlement_date: Option<NaiveDate>,
    pub promo_code: Option<String>,
    pub phone: Option<String>,
    pub exported: Option<bool>,
}

impl From<AdminOrderFilter> for QueryParams {
    fn from(f: AdminOrderFilter) -> Self {
        QueryParams::new()
            .with("page", f.page)
            .with("pageSize", f.page_size)
            .with("settlementDate", f.settlement_date)
            .with("id", f.promo_code)
            .with("phone", f.phone)
            .with("exported", f.exported)
    }
}

/// Query for `GET /admin/transactions`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdminTransactionFilter {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub promo_code: Option<String>,
    pub phone: Option<String>,
    /// `recharge`, `order_deduction`, `transfer_out`, `transfer_in`, `reward`.
    pub transaction_type: Option<String>,
}

impl From<AdminTransactionFilter> for QueryParams {
    fn from(f: AdminTransactionFilter) -> Self {
        QueryParams::new()
            .with("page", f.page)
            .with("pageSize", f.page_size)
            .with("id", f.promo_code)
            .with("phone", f.phone)
            .with("type", f.transaction_type)
    }
}

/// Query for `GET /admin/exceptions`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExceptionFilter {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub date: Option<NaiveDate>,
    /// `pending` or `processed`.
    pub status: Option<String>,
}

impl From<ExceptionFilter> for QueryParams {
    fn from(f: ExceptionFilter) -> Self {
        QueryParams::new()
            .with("page", f.page)
            .with("pageSize", f.page_size)
            .with("date", f.date)
            .with("status", f.status)
    }
}

/// Query for `GET /admin/users/{promoCode}/orders`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserOrderFilter {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: Option<String>,
}

impl From<UserOrderFilter> for QueryParams {
    fn from(f: UserOrderFilter) -> Self {
        QueryParams::new()
            .with("startDate", f.start_date)
            .with("endDate", f.end_date)
            .with("status", f.status)
    }
}

// ── Request bodies ───────────────────────────────────────────────────────────

/// Body of `POST /admin/agents`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateAgentRequest {
    pub name: String,
    pub phone: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ChangeParentRequest<'a> {
    pub parent_promo_code: &'a str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SetPayPasswordRequest<'a> {
    pub pay_password: &'a str,
}

/// Body of `POST /admin/recharge`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RechargeRequest {
    pub promo_code: PromoCode,
    #[serde(with = "rust_decimal::serde::float")]
    pub points: Decimal,
    /// The acting admin's own password, re-entered to confirm.
    pub admin_password: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ExportOrdersRequest<'a> {
    pub order_ids: &'a [i64],
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ExportExceptionsRequest<'a> {
    pub exception_ids: &'a [i64],
}

// ── Responses ────────────────────────────────────────────────────────────────

/// Row of the member and agent lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUserRow {
    /// Promo code; the admin API addresses users by it.
    pub id: PromoCode,
    pub name: String,
    pub phone: String,
    /// Display label, e.g. `普通会员` or `代理`.
    #[serde(rename = "type", default)]
    pub user_type: Option<String>,
    #[serde(default)]
    pub parent_id: Option<PromoCode>,
    #[serde(default)]
    pub points: Decimal,
    #[serde(default, with = "date_opt")]
    pub register_date: Option<NaiveDate>,
    #[serde(default)]
    pub today_orders: u32,
    #[serde(default)]
    pub month_orders: u32,
    #[serde(default)]
    pub nonmember_count: u32,
    /// Agents only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_agents: Option<u32>,
    /// Agents only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_members: Option<u32>,
}

/// `data` of `POST /admin/agents`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedAgent {
    pub id: i64,
    pub promo_code: PromoCode,
    pub name: String,
    pub phone: String,
    pub default_password: String,
    pub default_pay_password: String,
}

/// Row of `GET /admin/orders`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminOrderRow {
    pub id: i64,
    #[serde(default)]
    pub promo_code: Option<PromoCode>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default, with = "date_opt")]
    pub settlement_date: Option<NaiveDate>,
    #[serde(default)]
    pub non_member_name: Option<String>,
    #[serde(default)]
    pub non_member_link: Option<String>,
    #[serde(default)]
    pub points: Decimal,
    #[serde(default, with = "local_datetime_opt")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub exported: bool,
}

/// Row of `GET /admin/transactions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminTransactionRow {
    #[serde(default)]
    pub promo_code: Option<PromoCode>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    pub transaction_type: String,
    pub points_change: Decimal,
    pub balance: Decimal,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, with = "local_datetime_opt")]
    pub created_at: Option<NaiveDateTime>,
}

/// Row of `GET /admin/exceptions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExceptionRow {
    pub id: i64,
    pub order_id: i64,
    #[serde(default)]
    pub promo_code: Option<PromoCode>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub non_member_name: Option<String>,
    #[serde(default)]
    pub non_member_link: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_urls: Vec<String>,
    /// `pending` or `exported`.
    pub status: String,
    #[serde(default)]
    pub status_text: Option<String>,
    #[serde(default, with = "local_datetime_opt")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, with = "date_opt")]
    pub order_settlement_date: Option<NaiveDate>,
}

/// Downline summary of one user, from `GET /admin/agents/{promoCode}/subordinates`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subordinates {
    #[serde(default)]
    pub nonmembers: Vec<serde_json::Value>,
    #[serde(default)]
    pub ordinary_members: Vec<serde_json::Value>,
    #[serde(default)]
    pub agent_members: Vec<serde_json::Value>,
}

/// `data` of `POST /admin/recharge`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RechargeResult {
    /// Balance after the recharge.
    pub points: Decimal,
    pub recharge_amount: Decimal,
}
