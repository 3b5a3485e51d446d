//! Wire types for the signed-in member's own account.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::auth::MemberUser;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PromoCodeRequest<'a> {
    pub promo_code: &'a str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ChangePasswordRequest<'a> {
    pub old_password: &'a str,
    pub new_password: &'a str,
}

/// `data` of `GET /user/profile`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberProfile {
    #[serde(flatten)]
    pub user: MemberUser,
    /// Upline, when there is one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<ParentInfo>,
    /// Agents only: cash earned on points sold.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cash_profit: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParentInfo {
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
}

/// `data` of `POST /user/validate-promo-code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromoCodeCheck {
    /// Despite the name, `true` means the code exists and can be used as
    /// an upline.
    pub is_unique: bool,
}
