//! Backup domain: database snapshots managed from the back office.

pub mod client;
