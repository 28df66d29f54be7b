use rust_decimal::Decimal;
use thiserror::Error;

use crate::limits;
use crate::models::Direction;
use crate::registry::GatewayError;

/// Why a proposed movement was not admitted.
///
/// Every outcome of `record_transaction` is a value; the engine never panics
/// across its boundary. Limit rejections carry the headroom numbers the client
/// renders inline on the source card.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("Amount must be a positive value")]
    InvalidAmount,
    #[error("Source reference does not match the declared source type")]
    InvalidSource,
    #[error("Funding source does not exist")]
    SourceNotFound,
    #[error("Funding source is inactive")]
    SourceInactive,
    #[error("ATM withdrawals are not enabled for this account")]
    AtmNotEnabled,
    #[error("Monthly deposit limit exceeded: {requested} requested with {remaining} remaining of {limit}")]
    MonthlyInLimitExceeded {
        current_total: Decimal,
        limit: Decimal,
        remaining: Decimal,
        requested: Decimal
    },
    #[error("Monthly withdrawal limit exceeded: {requested} requested with {remaining} remaining of {limit}")]
    MonthlyOutLimitExceeded {
        current_total: Decimal,
        limit: Decimal,
        remaining: Decimal,
        requested: Decimal
    },
    #[error("Operator is not a known authenticated actor")]
    Unauthorized,
    #[error("Backing store unavailable: {0}")]
    Database(String)
}

impl Rejection {
    pub fn over_limit(direction: Direction, current_total: Decimal, limit: Decimal, requested: Decimal) -> Self {
        let remaining = limits::remaining(current_total, limit);

        match direction {
            Direction::Deposit => Self::MonthlyInLimitExceeded {
                current_total,
                limit,
                remaining,
                requested
            },
            Direction::Withdraw => Self::MonthlyOutLimitExceeded {
                current_total,
                limit,
                remaining,
                requested
            }
        }
    }

    /// Stable wire code for the RPC boundary.
    pub fn code(&self) -> &'static str {
        match self {
            Rejection::InvalidAmount => "INVALID_AMOUNT",
            Rejection::InvalidSource => "INVALID_SOURCE",
            Rejection::SourceNotFound => "SOURCE_NOT_FOUND",
            Rejection::SourceInactive => "SOURCE_INACTIVE",
            Rejection::AtmNotEnabled => "ATM_NOT_ENABLED",
            Rejection::MonthlyInLimitExceeded { .. } => "MONTHLY_IN_LIMIT_EXCEEDED",
            Rejection::MonthlyOutLimitExceeded { .. } => "MONTHLY_OUT_LIMIT_EXCEEDED",
            Rejection::Unauthorized => "UNAUTHORIZED",
            Rejection::Database(_) => "DATABASE_ERROR"
        }
    }
}

impl From<GatewayError> for Rejection {
    fn from(error: GatewayError) -> Self {
        match error {
            GatewayError::Unavailable(message) => Rejection::Database(message)
        }
    }
}

/// Failure of the read and maintenance operations (`monthly_aggregate`,
/// `soft_delete_transaction`, `update_notes`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("Account does not exist")]
    AccountNotFound,
    #[error("Transaction does not exist")]
    TransactionNotFound,
    #[error("Transaction has been deleted")]
    TransactionDeleted,
    #[error("Backing store unavailable: {0}")]
    Database(String)
}

impl LedgerError {
    /// Stable wire code for the RPC boundary.
    pub fn code(&self) -> &'static str {
        match self {
            LedgerError::AccountNotFound => "ACCOUNT_NOT_FOUND",
            LedgerError::TransactionNotFound => "TRANSACTION_NOT_FOUND",
            LedgerError::TransactionDeleted => "TRANSACTION_DELETED",
            LedgerError::Database(_) => "DATABASE_ERROR"
        }
    }
}

impl From<GatewayError> for LedgerError {
    fn from(error: GatewayError) -> Self {
        match error {
            GatewayError::Unavailable(message) => LedgerError::Database(message)
        }
    }
}
