//! Wire types for referral rewards.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::shared::QueryParams;

/// Direct or indirect referral reward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RewardType {
    Direct,
    Indirect,
}

impl RewardType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Indirect => "indirect",
        }
    }
}

/// Query for `GET /rewards`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RewardFilter {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub reward_type: Option<RewardType>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl From<RewardFilter> for QueryParams {
    fn from(f: RewardFilter) -> Self {
        QueryParams::new()
            .with("page", f.page)
            .with("pageSize", f.page_size)
            .with("rewardType", f.reward_type.map(|t| t.as_str()))
            .with("startDate", f.start_date)
            .with("endDate", f.end_date)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardTotals {
    #[serde(default)]
    pub direct_reward: Decimal,
    #[serde(default)]
    pub indirect_reward: Decimal,
}

impl RewardTotals {
    pub fn sum(&self) -> Decimal {
        self.direct_reward + self.indirect_reward
    }
}

/// `data` of `GET /rewards/statistics`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RewardStatistics {
    #[serde(default)]
    pub today: RewardTotals,
    #[serde(default)]
    pub total: RewardTotals,
}
