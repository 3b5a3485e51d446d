//! Transaction domain: the member's point ledger.

pub mod client;
pub mod wire;

pub use wire::{CashProfitList, PeriodTotals, Transaction, TransactionFilter, TransactionStatistics};

impl Transaction {
    /// Whether the entry took points away.
    pub fn is_debit(&self) -> bool {
        self.points_change.is_sign_negative() && !self.points_change.is_zero()
    }
}
