//! Points domain: balance, history and member-to-member transfers.

pub mod client;
pub mod wire;

pub use wire::{Balance, TransferRequest, TransferResult};
