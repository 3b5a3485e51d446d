//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs`: domain types and helpers
//! - `wire.rs`: serde structs matching backend payloads
//! - `client.rs`: sub-client with one method per endpoint

pub mod account;
pub mod admin;
pub mod backup;
pub mod notification;
pub mod order;
pub mod points;
pub mod referral;
pub mod reward;
pub mod settings;
pub mod transaction;
