use chrono::{DateTime, Utc};

use crate::models::EntityStatus;
use crate::types::{GameId, OperatorId};

/// A game/channel movements are attributed to. Purely categorical: attached
/// to transactions for reporting, never checked against limits.
#[derive(Debug, Clone)]
pub struct Game {
    pub id: GameId,
    pub name: String,
    pub tag: String,
    pub status: EntityStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub deleted_by: Option<OperatorId>
}

impl Game {
    pub fn new(name: impl Into<String>, tag: impl Into<String>) -> Self {
        let now = Utc::now();

        Self {
            id: GameId::new(),
            name: name.into(),
            tag: tag.into(),
            status: EntityStatus::Active,
            created_at: now,
            updated_at: now,
            deleted_at: None,
            deleted_by: None
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == EntityStatus::Active && self.deleted_at.is_none()
    }
}
