//! Calendar-month aggregation over the ledger.
//!
//! The aggregator reads the same store view the engine admits against; the
//! engine invokes it while holding the account's admission lock, which is what
//! makes read-check-insert atomic per account.


use chrono::{DateTime, Datelike, TimeZone, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::Direction;
use crate::storage::LedgerStore;
use crate::types::AccountId;

/// Half-open UTC interval `[start, end)` covering one calendar month, so no
/// instant ever falls into two buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>
}

impl MonthWindow {
    /// The calendar month containing `reference`.
    pub fn containing(reference: DateTime<Utc>) -> Self {
        let start = first_instant_of(reference.year(), reference.month());
        let end = if reference.month() == 12 {
            first_instant_of(reference.year() + 1, 1)
        } else {
            first_instant_of(reference.year(), reference.month() + 1)
        };

        Self { start, end }
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }

    /// Label such as `2026-08`, as used by the monthly report.
    pub fn label(&self) -> String {
        self.start.format("%Y-%m").to_string()
    }
}

fn first_instant_of(year: i32, month: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, 1, 0, 0, 0)
        .single()
        .expect("midnight on the first of a month is always a valid UTC instant")
}

/// Per-direction sums of non-deleted movements for one account over one
/// calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct MonthlyTotals {
    pub current_month_in: Decimal,
    pub current_month_out: Decimal
}

impl MonthlyTotals {
    /// The total a movement in `direction` would count toward.
    pub fn for_direction(&self, direction: Direction) -> Decimal {
        match direction {
            Direction::Deposit => self.current_month_in,
            Direction::Withdraw => self.current_month_out
        }
    }
}

/// Sums the account's live transactions for the month containing `reference`.
///
/// Platforms have no monthly aggregate; `PlatformId` does not convert into
/// `AccountId`, so there is no way to ask for one.
pub fn monthly_totals<S: LedgerStore + ?Sized>(
    store: &S,
    account_id: AccountId,
    reference: DateTime<Utc>
) -> MonthlyTotals {
    let window = MonthWindow::containing(reference);
    let mut totals = MonthlyTotals::default();

    for transaction in store.account_transactions_in(account_id, window) {
        match transaction.direction {
            Direction::Deposit => totals.current_month_in += transaction.amount,
            Direction::Withdraw => totals.current_month_out += transaction.amount
        }
    }

    totals
}
