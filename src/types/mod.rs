//! Identifier types shared across the crate.
//!
//! Every entity gets its own UUID-backed newtype so references cannot be
//! crossed: a `PlatformId` does not fit where an `AccountId` is expected,
//! which is what keeps platforms out of the monthly aggregation path at
//! compile time.


use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Identifier of a capped funding account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(Uuid);

/// Identifier of an uncapped payment platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlatformId(Uuid);

/// Identifier of a game/channel a movement is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(Uuid);

/// Identifier of the operator acting on the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OperatorId(Uuid);

/// Identifier of a single ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(Uuid);

macro_rules! id_impls {
    ($($name:ident),+) => {
        $(
            impl $name {
                /// Generates a fresh time-ordered (UUIDv7) identifier.
                pub fn new() -> Self {
                    Self(Uuid::now_v7())
                }

                pub fn as_uuid(&self) -> Uuid {
                    self.0
                }
            }

            impl Default for $name {
                fn default() -> Self {
                    Self::new()
                }
            }

            impl Display for $name {
                fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
                    write!(formatter, "{}", self.0)
                }
            }

            impl From<Uuid> for $name {
                fn from(value: Uuid) -> Self {
                    Self(value)
                }
            }
        )+
    };
}

id_impls!(AccountId, PlatformId, GameId, OperatorId, TransactionId);
