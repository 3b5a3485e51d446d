//! Notification domain: broadcast messages from the back office.

pub mod client;
