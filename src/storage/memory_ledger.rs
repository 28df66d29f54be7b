use chrono::{DateTime, Utc};
use dashmap::DashMap;
use std::cmp::Reverse;

use crate::aggregate::MonthWindow;
use crate::models::Transaction;
use crate::storage::{LedgerStore, TransactionFilter};
use crate::types::{AccountId, OperatorId, TransactionId};

/// In-memory ledger store.
///
/// The engine is the sole writer, so a sharded concurrent map is all the
/// durability model this store needs; a database-backed implementation would
/// satisfy the same trait.
pub struct MemoryLedger {
    rows: DashMap<TransactionId, Transaction>
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self {
            rows: DashMap::new()
        }
    }

    /// Number of rows, tombstoned ones included.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl LedgerStore for MemoryLedger {
    fn insert(&self, transaction: Transaction) {
        self.rows.insert(transaction.id, transaction);
    }

    fn get(&self, id: TransactionId) -> Option<Transaction> {
        self.rows.get(&id).map(|row| row.value().clone())
    }

    fn soft_delete(&self, id: TransactionId, actor: OperatorId, at: DateTime<Utc>) -> Option<Transaction> {
        let mut row = self.rows.get_mut(&id)?;

        if row.deleted_at.is_none() {
            row.deleted_at = Some(at);
            row.deleted_by = Some(actor);
        }

        Some(row.value().clone())
    }

    fn update_notes(&self, id: TransactionId, notes: Option<String>) -> bool {
        match self.rows.get_mut(&id) {
            Some(mut row) if row.deleted_at.is_none() => {
                row.notes = notes;
                true
            }
            _ => false
        }
    }

    fn account_transactions_in(&self, account_id: AccountId, window: MonthWindow) -> Vec<Transaction> {
        self.rows
            .iter()
            .filter(|row| !row.is_deleted())
            .filter(|row| row.source.account_id() == Some(account_id))
            .filter(|row| window.contains(row.created_at))
            .map(|row| row.value().clone())
            .collect()
    }

    fn scan(&self, filter: &TransactionFilter) -> Vec<Transaction> {
        let mut rows: Vec<Transaction> = self
            .rows
            .iter()
            .filter(|row| !row.is_deleted())
            .filter(|row| filter.matches(row))
            .map(|row| row.value().clone())
            .collect();

        rows.sort_by_key(|row| Reverse(row.created_at));
        rows
    }
}
