//! Reward domain.

pub mod client;
pub mod wire;

pub use wire::{RewardFilter, RewardStatistics, RewardTotals, RewardType};
