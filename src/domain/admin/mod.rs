//! Admin domain: back-office management of members, agents, orders,
//! transactions and exception reports.

pub mod client;
pub mod wire;

pub use wire::{
    AdminOrderFilter, AdminOrderRow, AdminTransactionFilter, AdminTransactionRow, AdminUserRow,
    CreateAgentRequest, CreatedAgent, ExceptionFilter, ExceptionRow, RechargeRequest,
    RechargeResult, Subordinates, UserFilter, UserOrderFilter,
};
pub(crate) use wire::{
    ChangeParentRequest, ExportExceptionsRequest, ExportOrdersRequest, SetPayPasswordRequest,
};

/// Dashboard statistics group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatisticsKind {
    Orders,
    Transactions,
    Exceptions,
}

impl StatisticsKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Orders => "orders",
            Self::Transactions => "transactions",
            Self::Exceptions => "exceptions",
        }
    }
}
