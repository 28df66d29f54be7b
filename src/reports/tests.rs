use super::{account_monthly_summary, monthly_report, near_limit_accounts, today_summary};

use anyhow::Result;
use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::models::{AccountKind, Direction, EntityStatus, Source, Transaction, WithdrawSubtype};
use crate::registry::MemoryRegistry;
use crate::storage::{LedgerStore, MemoryLedger};
use crate::types::{AccountId, OperatorId, TransactionId};

fn instant(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0).unwrap()
}

fn seed_row(
    store: &MemoryLedger,
    source: Source,
    direction: Direction,
    amount: &str,
    subtype: Option<WithdrawSubtype>,
    created_at: DateTime<Utc>
) -> Result<TransactionId> {
    let row = Transaction {
        id: TransactionId::new(),
        direction,
        amount: Decimal::from_str(amount)?,
        source,
        game_id: None,
        withdraw_subtype: subtype,
        notes: None,
        operator_id: OperatorId::new(),
        created_at,
        deleted_at: None,
        deleted_by: None
    };
    let id = row.id;
    store.insert(row);

    Ok(id)
}

#[test]
fn test_today_summary_counts_only_the_reference_day() -> Result<()> {
    let store = MemoryLedger::new();
    let account = AccountId::new();
    let source = Source::Account(account);

    seed_row(&store, source, Direction::Deposit, "100", None, instant(2026, 8, 7, 9))?;
    seed_row(&store, source, Direction::Withdraw, "30", Some(WithdrawSubtype::Normal), instant(2026, 8, 7, 15))?;
    seed_row(&store, source, Direction::Deposit, "999", None, instant(2026, 8, 6, 9))?;

    let summary = today_summary(&store, instant(2026, 8, 7, 18));

    assert_eq!(summary.today_deposits, Decimal::from(100));
    assert_eq!(summary.today_withdrawals, Decimal::from(30));
    assert_eq!(summary.today_net, Decimal::from(70));
    assert_eq!(summary.transaction_count, 2);
    assert_eq!(summary.date, "2026-08-07");

    Ok(())
}

#[test]
fn test_monthly_report_breaks_out_atm_withdrawals() -> Result<()> {
    let store = MemoryLedger::new();
    let source = Source::Account(AccountId::new());

    seed_row(&store, source, Direction::Deposit, "500", None, instant(2026, 8, 2, 9))?;
    seed_row(&store, source, Direction::Withdraw, "120", Some(WithdrawSubtype::Normal), instant(2026, 8, 10, 9))?;
    seed_row(&store, source, Direction::Withdraw, "80", Some(WithdrawSubtype::Atm), instant(2026, 8, 12, 9))?;
    seed_row(&store, source, Direction::Deposit, "77", None, instant(2026, 7, 30, 9))?;

    let report = monthly_report(&store, instant(2026, 8, 15, 0));

    assert_eq!(report.month, "2026-08");
    assert_eq!(report.total_deposits, Decimal::from(500));
    assert_eq!(report.total_withdrawals, Decimal::from(200));
    assert_eq!(report.total_atm_withdrawals, Decimal::from(80));
    assert_eq!(report.net_flow, Decimal::from(300));
    assert_eq!(report.transaction_count, 3);

    Ok(())
}

#[test]
fn test_reports_exclude_soft_deleted_rows() -> Result<()> {
    let store = MemoryLedger::new();
    let source = Source::Account(AccountId::new());
    let reference = instant(2026, 8, 15, 0);

    seed_row(&store, source, Direction::Deposit, "100", None, instant(2026, 8, 2, 9))?;
    let doomed = seed_row(&store, source, Direction::Deposit, "50", None, instant(2026, 8, 3, 9))?;
    store.soft_delete(doomed, OperatorId::new(), Utc::now());

    let report = monthly_report(&store, reference);

    assert_eq!(report.total_deposits, Decimal::from(100));
    assert_eq!(report.transaction_count, 1);

    Ok(())
}

#[test]
fn test_account_summary_joins_totals_with_limit_policy() -> Result<()> {
    let registry = MemoryRegistry::new();
    let store = MemoryLedger::new();
    let reference = instant(2026, 8, 15, 0);

    let hot = registry.create_account("Hot Desk", AccountKind::Holding, Decimal::from(100), Decimal::from(100), false);
    let cold = registry.create_account("Cold Desk", AccountKind::Holding, Decimal::from(1000), Decimal::from(1000), false);

    seed_row(&store, Source::Account(hot.id), Direction::Deposit, "96", None, instant(2026, 8, 3, 9))?;
    seed_row(&store, Source::Account(cold.id), Direction::Deposit, "96", None, instant(2026, 8, 3, 9))?;

    let summaries = account_monthly_summary(&registry.accounts(), &store, reference);

    assert_eq!(summaries.len(), 2);

    // Sorted by name: Cold Desk first.
    assert_eq!(summaries[0].name, "Cold Desk");
    assert_eq!(summaries[0].in_status.percentage, 10);
    assert!(!summaries[0].in_status.is_near);

    assert_eq!(summaries[1].name, "Hot Desk");
    assert_eq!(summaries[1].totals.current_month_in, Decimal::from(96));
    assert_eq!(summaries[1].in_status.percentage, 96);
    assert!(summaries[1].in_status.is_critical);
    assert_eq!(summaries[1].in_status.remaining, Decimal::from(4));

    let hot_list = near_limit_accounts(&summaries);

    assert_eq!(hot_list.len(), 1);
    assert_eq!(hot_list[0].name, "Hot Desk");

    Ok(())
}

#[test]
fn test_near_limit_list_skips_inactive_accounts() -> Result<()> {
    let registry = MemoryRegistry::new();
    let store = MemoryLedger::new();
    let reference = instant(2026, 8, 15, 0);

    let account = registry.create_account("Parked", AccountKind::Paying, Decimal::from(100), Decimal::from(100), false);
    seed_row(&store, Source::Account(account.id), Direction::Deposit, "99", None, instant(2026, 8, 3, 9))?;

    registry.update_account_limits(
        account.id,
        Decimal::from(100),
        Decimal::from(100),
        false,
        Some(EntityStatus::Inactive)
    );

    let summaries = account_monthly_summary(&registry.accounts(), &store, reference);

    assert!(near_limit_accounts(&summaries).is_empty());

    Ok(())
}
