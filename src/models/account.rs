use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::models::{AccountKind, Direction, EntityStatus};
use crate::types::{AccountId, OperatorId};

/// A capped funding account.
///
/// Accounts carry configurable monthly in/out caps enforced by the ledger
/// engine. A limit of zero means no headroom at all, not "unlimited".
#[derive(Debug, Clone)]
pub struct Account {
    pub id: AccountId,
    pub name: String,
    /// Short display tag for source cards.
    pub tag: Option<String>,
    pub kind: AccountKind,
    pub status: EntityStatus,
    pub monthly_in_limit: Decimal,
    pub monthly_out_limit: Decimal,
    /// Gate for the ATM withdrawal subtype, checked once at submission time.
    pub atm_withdrawal_enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub deleted_by: Option<OperatorId>
}

impl Account {
    pub fn new(
        name: impl Into<String>,
        kind: AccountKind,
        monthly_in_limit: Decimal,
        monthly_out_limit: Decimal
    ) -> Self {
        let now = Utc::now();

        Self {
            id: AccountId::new(),
            name: name.into(),
            tag: None,
            kind,
            status: EntityStatus::Active,
            monthly_in_limit,
            monthly_out_limit,
            atm_withdrawal_enabled: false,
            created_at: now,
            updated_at: now,
            deleted_at: None,
            deleted_by: None
        }
    }

    /// Whether the account may be targeted by new movements. Inactive and
    /// soft-deleted accounts remain readable for reporting only.
    pub fn is_active(&self) -> bool {
        self.status == EntityStatus::Active && self.deleted_at.is_none()
    }

    /// The cap that applies to movements in the given direction.
    pub fn limit_for(&self, direction: Direction) -> Decimal {
        match direction {
            Direction::Deposit => self.monthly_in_limit,
            Direction::Withdraw => self.monthly_out_limit
        }
    }
}
