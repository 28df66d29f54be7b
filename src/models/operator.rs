use chrono::{DateTime, Utc};

use crate::models::OperatorRole;
use crate::types::OperatorId;

/// The actor of record on a transaction. Resolved from the external identity
/// provider at the API boundary and passed into the engine explicitly; the
/// engine never reads ambient session state.
#[derive(Debug, Clone)]
pub struct Operator {
    pub id: OperatorId,
    pub name: String,
    pub role: OperatorRole,
    pub created_at: DateTime<Utc>
}

impl Operator {
    pub fn new(name: impl Into<String>, role: OperatorRole) -> Self {
        Self {
            id: OperatorId::new(),
            name: name.into(),
            role,
            created_at: Utc::now()
        }
    }
}
