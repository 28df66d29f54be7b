use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::models::EntityStatus;
use crate::types::{OperatorId, PlatformId};

/// An uncapped third-party payment platform.
///
/// Platforms have no monthly caps and no monthly aggregation; the `balance`
/// field is informational for the selection screens and is never maintained
/// by the ledger.
#[derive(Debug, Clone)]
pub struct Platform {
    pub id: PlatformId,
    pub name: String,
    pub tag: Option<String>,
    pub deposit_url: Option<String>,
    pub withdraw_url: Option<String>,
    pub balance: Decimal,
    pub status: EntityStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub deleted_by: Option<OperatorId>
}

impl Platform {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();

        Self {
            id: PlatformId::new(),
            name: name.into(),
            tag: None,
            deposit_url: None,
            withdraw_url: None,
            balance: Decimal::ZERO,
            status: EntityStatus::Active,
            created_at: now,
            updated_at: now,
            deleted_at: None,
            deleted_by: None
        }
    }

    /// Whether the platform may be targeted by new movements.
    pub fn is_active(&self) -> bool {
        self.status == EntityStatus::Active && self.deleted_at.is_none()
    }
}
