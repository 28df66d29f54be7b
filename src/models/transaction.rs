use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::{Direction, SourceType, WithdrawSubtype};
use crate::types::{AccountId, GameId, OperatorId, PlatformId, TransactionId};

/// Where a movement draws its funds from.
///
/// The raw request shape (a source type plus two nullable ids) is validated
/// into this enum once, at the engine boundary, so everything past that point
/// handles a reference that is known to be shaped correctly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Account(AccountId),
    Platform(PlatformId)
}

impl Source {
    pub fn source_type(&self) -> SourceType {
        match self {
            Source::Account(_) => SourceType::Account,
            Source::Platform(_) => SourceType::Platform
        }
    }

    pub fn account_id(&self) -> Option<AccountId> {
        match self {
            Source::Account(id) => Some(*id),
            Source::Platform(_) => None
        }
    }

    pub fn platform_id(&self) -> Option<PlatformId> {
        match self {
            Source::Account(_) => None,
            Source::Platform(id) => Some(*id)
        }
    }
}

/// A single ledger entry.
///
/// Append-mostly: rows are soft-deleted via the tombstone pair, never removed,
/// and never updated in place for amount, direction or source. `created_at` is
/// the authoritative ordering and month-bucketing timestamp.
#[derive(Debug, Clone)]
pub struct Transaction {
    pub id: TransactionId,
    pub direction: Direction,
    /// Always positive; `direction` encodes the sign.
    pub amount: Decimal,
    pub source: Source,
    pub game_id: Option<GameId>,
    /// `Some` only for withdrawals; defaults to `Normal`.
    pub withdraw_subtype: Option<WithdrawSubtype>,
    pub notes: Option<String>,
    pub operator_id: OperatorId,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub deleted_by: Option<OperatorId>
}

impl Transaction {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    pub fn is_atm_withdrawal(&self) -> bool {
        self.direction == Direction::Withdraw && self.withdraw_subtype == Some(WithdrawSubtype::Atm)
    }
}

/// A proposed movement as assembled by the client, before validation.
///
/// Exactly one of `account_id`/`platform_id` must be present and must match
/// `source_type`; the engine rejects anything else up front.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionRequest {
    pub direction: Direction,
    pub amount: Decimal,
    pub source_type: SourceType,
    #[serde(default)]
    pub account_id: Option<AccountId>,
    #[serde(default)]
    pub platform_id: Option<PlatformId>,
    #[serde(default)]
    pub game_id: Option<GameId>,
    #[serde(default)]
    pub withdraw_subtype: Option<WithdrawSubtype>,
    #[serde(default)]
    pub notes: Option<String>,
    pub operator_id: OperatorId
}
