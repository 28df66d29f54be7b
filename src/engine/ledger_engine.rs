use std::sync::Arc;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use rust_decimal::Decimal;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::aggregate::{self, MonthlyTotals};
use crate::engine::rejection::{LedgerError, Rejection};
use crate::models::{Direction, Source, SourceType, Transaction, TransactionRequest, WithdrawSubtype};
use crate::registry::ReferenceData;
use crate::storage::LedgerStore;
use crate::types::{AccountId, OperatorId, PlatformId, TransactionId};

/// The transactional write path of the ledger.
///
/// `record_transaction` is the one place the system enforces its invariants:
/// conservation of limit usage, no double counting, and no lost updates under
/// concurrent submission. Everything else in the crate is reference data or
/// read-only reporting around it.
pub struct LedgerEngine<R, S> {
    reference: Arc<R>,
    store: Arc<S>,
    /// One admission lock per account, created on demand. Held across the
    /// aggregate read and the insert so two submissions against the same
    /// account can never both observe the pre-insert total and both pass the
    /// cap check. Different accounts never contend.
    admission_locks: DashMap<AccountId, Arc<Mutex<()>>>
}

impl<R: ReferenceData, S: LedgerStore> LedgerEngine<R, S> {
    pub fn new(reference: Arc<R>, store: Arc<S>) -> Self {
        Self {
            reference,
            store,
            admission_locks: DashMap::new()
        }
    }

    /// Validates and atomically records a proposed movement.
    ///
    /// Checks run in a fixed order and the first failure wins: amount, source
    /// shape, source state, ATM gate, monthly cap, operator. Account sources
    /// hold the account's admission lock from the cap check through the
    /// insert; platform sources are uncapped and take no lock.
    pub async fn record_transaction(&self, request: TransactionRequest) -> Result<TransactionId, Rejection> {
        if request.amount <= Decimal::ZERO {
            return Err(Rejection::InvalidAmount);
        }

        let source = resolve_source(&request)?;

        match source {
            Source::Account(account_id) => self.record_against_account(request, account_id).await,
            Source::Platform(platform_id) => self.record_against_platform(request, platform_id)
        }
    }

    async fn record_against_account(
        &self,
        request: TransactionRequest,
        account_id: AccountId
    ) -> Result<TransactionId, Rejection> {
        let account = self
            .reference
            .get_account(account_id)?
            .ok_or(Rejection::SourceNotFound)?;

        if !account.is_active() {
            return Err(Rejection::SourceInactive);
        }

        if request.direction == Direction::Withdraw
            && request.withdraw_subtype == Some(WithdrawSubtype::Atm)
            && !account.atm_withdrawal_enabled
        {
            return Err(Rejection::AtmNotEnabled);
        }

        let lock = self.admission_lock(account_id);
        let _guard = lock.lock().await;

        // `now` is pinned before the aggregate read so the month checked is
        // the month the row lands in. No rollover mid-admission.
        let now = Utc::now();
        let totals = aggregate::monthly_totals(self.store.as_ref(), account_id, now);
        let current = totals.for_direction(request.direction);
        let limit = account.limit_for(request.direction);

        // Boundary is inclusive: filling the cap exactly is admitted.
        if current + request.amount > limit {
            warn!(
                "Monthly {:?} cap rejected for account [{account_id}]: {current} + {} > {limit}",
                request.direction, request.amount
            );
            return Err(Rejection::over_limit(request.direction, current, limit, request.amount));
        }

        self.authorize(request.operator_id)?;

        let transaction = build_row(request, Source::Account(account_id), now);
        let id = transaction.id;
        self.store.insert(transaction);

        debug!("Transaction [{id}] recorded against account [{account_id}]");

        Ok(id)
    }

    fn record_against_platform(
        &self,
        request: TransactionRequest,
        platform_id: PlatformId
    ) -> Result<TransactionId, Rejection> {
        let platform = self
            .reference
            .get_platform(platform_id)?
            .ok_or(Rejection::SourceNotFound)?;

        if !platform.is_active() {
            return Err(Rejection::SourceInactive);
        }

        self.authorize(request.operator_id)?;

        // Platforms are uncapped: no aggregate to protect, no lock to take.
        let transaction = build_row(request, Source::Platform(platform_id), Utc::now());
        let id = transaction.id;
        self.store.insert(transaction);

        debug!("Transaction [{id}] recorded against platform [{platform_id}]");

        Ok(id)
    }

    /// Tombstones a transaction with an audit trail.
    ///
    /// Idempotent: deleting an already-deleted row reports success and leaves
    /// the original marker in place. Deletion only ever frees headroom, so no
    /// limit re-validation and no cross-account coordination is needed.
    pub fn soft_delete_transaction(&self, transaction_id: TransactionId, actor: OperatorId) -> Result<(), LedgerError> {
        match self.store.soft_delete(transaction_id, actor, Utc::now()) {
            Some(_) => {
                debug!("Transaction [{transaction_id}] deleted by operator [{actor}]");
                Ok(())
            }
            None => Err(LedgerError::TransactionNotFound)
        }
    }

    /// Current-month totals for an account. The account must exist but may be
    /// inactive or soft-deleted, since historical reporting is allowed.
    pub fn monthly_aggregate(
        &self,
        account_id: AccountId,
        reference: DateTime<Utc>
    ) -> Result<MonthlyTotals, LedgerError> {
        if self.reference.get_account(account_id)?.is_none() {
            return Err(LedgerError::AccountNotFound);
        }

        Ok(aggregate::monthly_totals(self.store.as_ref(), account_id, reference))
    }

    /// Narrow correction path: replaces the notes on a live transaction.
    /// Cannot touch amount, direction or source, so no limit re-check runs.
    pub fn update_notes(&self, transaction_id: TransactionId, notes: Option<String>) -> Result<(), LedgerError> {
        if self.store.update_notes(transaction_id, notes) {
            return Ok(());
        }

        match self.store.get(transaction_id) {
            Some(_) => Err(LedgerError::TransactionDeleted),
            None => Err(LedgerError::TransactionNotFound)
        }
    }

    fn authorize(&self, operator_id: OperatorId) -> Result<(), Rejection> {
        match self.reference.get_operator(operator_id)? {
            Some(_) => Ok(()),
            None => Err(Rejection::Unauthorized)
        }
    }

    fn admission_lock(&self, account_id: AccountId) -> Arc<Mutex<()>> {
        self.admission_locks.entry(account_id).or_default().value().clone()
    }
}

fn resolve_source(request: &TransactionRequest) -> Result<Source, Rejection> {
    match (request.source_type, request.account_id, request.platform_id) {
        (SourceType::Account, Some(account_id), None) => Ok(Source::Account(account_id)),
        (SourceType::Platform, None, Some(platform_id)) => Ok(Source::Platform(platform_id)),
        _ => Err(Rejection::InvalidSource)
    }
}

fn build_row(request: TransactionRequest, source: Source, created_at: DateTime<Utc>) -> Transaction {
    // The subtype is meaningful for withdrawals only; deposits drop it.
    let withdraw_subtype = match request.direction {
        Direction::Withdraw => Some(request.withdraw_subtype.unwrap_or(WithdrawSubtype::Normal)),
        Direction::Deposit => None
    };

    Transaction {
        id: TransactionId::new(),
        direction: request.direction,
        amount: request.amount,
        source,
        game_id: request.game_id,
        withdraw_subtype,
        notes: request.notes,
        operator_id: request.operator_id,
        created_at,
        deleted_at: None,
        deleted_by: None
    }
}
