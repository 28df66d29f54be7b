mod memory_ledger;

use chrono::{DateTime, Utc};

use crate::aggregate::MonthWindow;
use crate::models::{Direction, SourceType, Transaction};
use crate::types::{AccountId, GameId, OperatorId, PlatformId, TransactionId};

pub use memory_ledger::MemoryLedger;

/// Optional criteria for history queries; absent fields match everything.
/// Time bounds are half-open: `from` inclusive, `until` exclusive.
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    pub direction: Option<Direction>,
    pub source_type: Option<SourceType>,
    pub account_id: Option<AccountId>,
    pub platform_id: Option<PlatformId>,
    pub game_id: Option<GameId>,
    pub from: Option<DateTime<Utc>>,
    pub until: Option<DateTime<Utc>>
}

impl TransactionFilter {
    pub fn matches(&self, transaction: &Transaction) -> bool {
        if self.direction.is_some_and(|direction| transaction.direction != direction) {
            return false;
        }

        if self.source_type.is_some_and(|source_type| transaction.source.source_type() != source_type) {
            return false;
        }

        if self.account_id.is_some_and(|id| transaction.source.account_id() != Some(id)) {
            return false;
        }

        if self.platform_id.is_some_and(|id| transaction.source.platform_id() != Some(id)) {
            return false;
        }

        if self.game_id.is_some_and(|id| transaction.game_id != Some(id)) {
            return false;
        }

        if self.from.is_some_and(|from| transaction.created_at < from) {
            return false;
        }

        if self.until.is_some_and(|until| transaction.created_at >= until) {
            return false;
        }

        true
    }
}

/// Backing store for the transaction ledger.
///
/// Query methods only ever return live rows: the soft-delete filter lives
/// here, in one place, so callers cannot forget it. `get` is the single
/// exception: it also returns tombstoned rows, for audit lookups.
pub trait LedgerStore: Send + Sync + 'static {
    /// Persists a new transaction row.
    fn insert(&self, transaction: Transaction);

    /// Fetches a row by id, tombstoned or not.
    fn get(&self, id: TransactionId) -> Option<Transaction>;

    /// Marks the row deleted if it is still live, then returns it. Returns
    /// `None` for an unknown id. An already-deleted row is left untouched,
    /// keeping its original tombstone metadata.
    fn soft_delete(&self, id: TransactionId, actor: OperatorId, at: DateTime<Utc>) -> Option<Transaction>;

    /// Replaces the notes on a live row. Returns `false` when the row is
    /// missing or tombstoned.
    fn update_notes(&self, id: TransactionId, notes: Option<String>) -> bool;

    /// Live transactions for one account whose `created_at` falls in `window`.
    fn account_transactions_in(&self, account_id: AccountId, window: MonthWindow) -> Vec<Transaction>;

    /// Live transactions matching `filter`, newest first.
    fn scan(&self, filter: &TransactionFilter) -> Vec<Transaction>;
}
