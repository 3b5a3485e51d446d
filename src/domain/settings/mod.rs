//! Settings domain: pricing, discounts and referral reward rates.

pub mod client;
pub mod wire;

pub use wire::{
    Contact, DiscountRule, PriceConfig, RechargeDiscountRule, RewardRates, SystemSettings,
    TransferLimits,
};

use rust_decimal::Decimal;

impl SystemSettings {
    /// Discount for a submission of `order_count` orders: the rule with the
    /// highest `min_orders` not above the count, or zero.
    pub fn order_discount(&self, order_count: u32) -> Decimal {
        self.discount_rules
            .iter()
            .flatten()
            .filter(|rule| order_count >= rule.min_orders)
            .max_by_key(|rule| rule.min_orders)
            .map(|rule| rule.discount)
            .unwrap_or(Decimal::ZERO)
    }
}
