mod account;
mod game;
mod operator;
mod platform;
mod transaction;

use serde::{Deserialize, Serialize};

pub use account::Account;
pub use game::Game;
pub use operator::Operator;
pub use platform::Platform;
pub use transaction::{Source, Transaction, TransactionRequest};

/// Direction of a cash movement. The stored amount is always positive;
/// direction carries the sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Deposit,
    Withdraw
}

/// Which kind of funding source a movement draws on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    Account,
    Platform
}

/// Role a capped account plays in the cash flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    Holding,
    Paying
}

/// Lifecycle status of reference records. Inactive records stay readable for
/// historical reporting but are rejected as transaction targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityStatus {
    Active,
    Inactive
}

/// Subtype of a withdrawal against a capped account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WithdrawSubtype {
    Normal,
    Atm
}

/// Role of an operator. Governs which back-office screens are reachable;
/// ledger admission only requires the operator to resolve at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperatorRole {
    Admin,
    Operator
}
