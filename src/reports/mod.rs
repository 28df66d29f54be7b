//! Read-only rollups over the ledger for the dashboard and report screens.
//!
//! Nothing here is safety-critical: every function derives from the store's
//! live (non-deleted) view and can be recomputed at will. Deleted rows are
//! excluded by the store itself, so a row can never be counted twice or
//! counted after deletion.

#[cfg(test)]
mod tests;

use chrono::{DateTime, Datelike, Duration, TimeZone, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::aggregate::{self, MonthWindow, MonthlyTotals};
use crate::limits::LimitStatus;
use crate::models::{Account, AccountKind, Direction, EntityStatus};
use crate::storage::{LedgerStore, TransactionFilter};
use crate::types::AccountId;

/// Totals for the calendar day containing `now`, shown on the dashboard
/// header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodaySummary {
    pub today_deposits: Decimal,
    pub today_withdrawals: Decimal,
    pub today_net: Decimal,
    pub transaction_count: usize,
    /// Day label such as `2026-08-07`.
    pub date: String
}

pub fn today_summary<S: LedgerStore + ?Sized>(store: &S, now: DateTime<Utc>) -> TodaySummary {
    let start = Utc
        .with_ymd_and_hms(now.year(), now.month(), now.day(), 0, 0, 0)
        .single()
        .expect("midnight of an existing day is always a valid UTC instant");
    let end = start + Duration::days(1);

    let rows = store.scan(&TransactionFilter {
        from: Some(start),
        until: Some(end),
        ..Default::default()
    });

    let mut deposits = Decimal::ZERO;
    let mut withdrawals = Decimal::ZERO;

    for row in &rows {
        match row.direction {
            Direction::Deposit => deposits += row.amount,
            Direction::Withdraw => withdrawals += row.amount
        }
    }

    TodaySummary {
        today_deposits: deposits,
        today_withdrawals: withdrawals,
        today_net: deposits - withdrawals,
        transaction_count: rows.len(),
        date: start.format("%Y-%m-%d").to_string()
    }
}

/// Month-level rollup with the ATM withdrawal split broken out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyReport {
    /// Month label such as `2026-08`.
    pub month: String,
    pub total_deposits: Decimal,
    pub total_withdrawals: Decimal,
    pub total_atm_withdrawals: Decimal,
    pub net_flow: Decimal,
    pub transaction_count: usize
}

pub fn monthly_report<S: LedgerStore + ?Sized>(store: &S, reference: DateTime<Utc>) -> MonthlyReport {
    let window = MonthWindow::containing(reference);
    let rows = store.scan(&TransactionFilter {
        from: Some(window.start),
        until: Some(window.end),
        ..Default::default()
    });

    let mut deposits = Decimal::ZERO;
    let mut withdrawals = Decimal::ZERO;
    let mut atm_withdrawals = Decimal::ZERO;

    for row in &rows {
        match row.direction {
            Direction::Deposit => deposits += row.amount,
            Direction::Withdraw => {
                withdrawals += row.amount;
                if row.is_atm_withdrawal() {
                    atm_withdrawals += row.amount;
                }
            }
        }
    }

    MonthlyReport {
        month: window.label(),
        total_deposits: deposits,
        total_withdrawals: withdrawals,
        total_atm_withdrawals: atm_withdrawals,
        net_flow: deposits - withdrawals,
        transaction_count: rows.len()
    }
}

/// One account's month at a glance: totals plus limit posture per direction.
#[derive(Debug, Clone, Serialize)]
pub struct AccountMonthlySummary {
    pub account_id: AccountId,
    pub name: String,
    pub kind: AccountKind,
    pub status: EntityStatus,
    pub monthly_in_limit: Decimal,
    pub monthly_out_limit: Decimal,
    pub atm_withdrawal_enabled: bool,
    pub totals: MonthlyTotals,
    pub in_status: LimitStatus,
    pub out_status: LimitStatus
}

impl AccountMonthlySummary {
    pub fn is_near_any_limit(&self) -> bool {
        self.in_status.is_near || self.out_status.is_near
    }
}

/// Builds the per-account monthly summary for the given accounts. Callers
/// pass whichever account set the screen wants (typically the registry's
/// non-deleted listing).
pub fn account_monthly_summary<S: LedgerStore + ?Sized>(
    accounts: &[Account],
    store: &S,
    reference: DateTime<Utc>
) -> Vec<AccountMonthlySummary> {
    accounts
        .iter()
        .map(|account| {
            let totals = aggregate::monthly_totals(store, account.id, reference);

            AccountMonthlySummary {
                account_id: account.id,
                name: account.name.clone(),
                kind: account.kind,
                status: account.status,
                monthly_in_limit: account.monthly_in_limit,
                monthly_out_limit: account.monthly_out_limit,
                atm_withdrawal_enabled: account.atm_withdrawal_enabled,
                totals,
                in_status: LimitStatus::of(totals.current_month_in, account.monthly_in_limit),
                out_status: LimitStatus::of(totals.current_month_out, account.monthly_out_limit)
            }
        })
        .collect()
}

/// Active accounts running hot on either cap, for the dashboard warning list.
pub fn near_limit_accounts(summaries: &[AccountMonthlySummary]) -> Vec<&AccountMonthlySummary> {
    summaries
        .iter()
        .filter(|summary| summary.status == EntityStatus::Active && summary.is_near_any_limit())
        .collect()
}
