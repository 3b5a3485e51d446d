//! Referral domain: non-members and the member's downline.

pub mod client;
pub mod wire;

pub use wire::{NonMember, NonMemberList};
pub(crate) use wire::{AddNonMemberRequest, UpgradeToOrdinaryRequest};
