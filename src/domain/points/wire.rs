//! Wire types for point balance and transfers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// `data` of `GET /points/balance`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    pub points: Decimal,
}

/// Body of `POST /points/transfer`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    pub to_phone: String,
    pub quantity: u32,
    /// Price per point; sent as a JSON number.
    #[serde(with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
    pub pay_password: String,
    /// Acknowledges a unit price below the sender's purchase price.
    pub confirmed_low_price: bool,
}

impl TransferRequest {
    pub fn new(
        to_phone: impl Into<String>,
        quantity: u32,
        unit_price: Decimal,
        pay_password: impl Into<String>,
    ) -> Self {
        Self {
            to_phone: to_phone.into(),
            quantity,
            unit_price,
            pay_password: pay_password.into(),
            confirmed_low_price: false,
        }
    }

    pub fn confirm_low_price(mut self) -> Self {
        self.confirmed_low_price = true;
        self
    }

    /// Points leaving the sender's balance.
    pub fn total(&self) -> Decimal {
        Decimal::from(self.quantity) * self.unit_price
    }
}

/// `data` of a successful transfer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferResult {
    /// Sender's balance after the transfer.
    pub points: Decimal,
    pub to_user_name: String,
}
