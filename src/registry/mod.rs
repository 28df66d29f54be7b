mod memory;

use thiserror::Error;

use crate::models::{Account, Game, Operator, Platform};
use crate::types::{AccountId, GameId, OperatorId, PlatformId};

pub use memory::MemoryRegistry;

/// Failure of the reference-data backend.
///
/// `Unavailable` is transient and must never be conflated with "not found":
/// the engine surfaces it as a database error the caller may retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    #[error("Reference data backend unavailable: {0}")]
    Unavailable(String)
}

/// Read access to the mutable reference records the ledger validates against.
///
/// Soft-deleted records are still returned here (history screens join
/// against them); it is the caller's job to check `is_active` before
/// admitting new movements.
pub trait ReferenceData: Send + Sync + 'static {
    fn get_account(&self, id: AccountId) -> Result<Option<Account>, GatewayError>;

    fn get_platform(&self, id: PlatformId) -> Result<Option<Platform>, GatewayError>;

    fn get_game(&self, id: GameId) -> Result<Option<Game>, GatewayError>;

    fn get_operator(&self, id: OperatorId) -> Result<Option<Operator>, GatewayError>;
}
