//! Wire types for system settings.
//!
//! Every section is optional: `PUT /admin/settings` merges only the
//! sections present, and `GET /user/settings` omits `contact`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// System settings document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceConfig>,
    /// Order-count discounts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_rules: Option<Vec<DiscountRule>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recharge_discount_rules: Option<Vec<RechargeDiscountRule>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reward_rates: Option<RewardRates>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transfer_limits: Option<TransferLimits>,
    /// Cash per point.
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub coin_exchange_rate: Option<Decimal>,
}

/// Customer-service contact details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub wechat: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub qq: Option<String>,
}

/// Per-order base price. Fridays use `friday_price`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceConfig {
    #[serde(with = "rust_decimal::serde::float")]
    pub base_price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub friday_price: Decimal,
}

/// Discount applied once a user reaches `min_orders` in a submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountRule {
    pub min_orders: u32,
    /// Fraction taken off, e.g. `0.25`.
    #[serde(with = "rust_decimal::serde::float")]
    pub discount: Decimal,
}

/// Discount on recharges of at least `min_amount`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RechargeDiscountRule {
    #[serde(with = "rust_decimal::serde::float")]
    pub min_amount: Decimal,
    /// Percentage paid, e.g. `95`.
    #[serde(with = "rust_decimal::serde::float")]
    pub discount: Decimal,
}

/// Referral reward rates for direct and indirect downlines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardRates {
    #[serde(with = "rust_decimal::serde::float")]
    pub direct: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub indirect: Decimal,
}

/// Bounds on member-to-member point transfers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferLimits {
    pub min_quantity: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub max_unit_price: Decimal,
}
