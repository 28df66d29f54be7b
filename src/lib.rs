//! Back-office cash-movement ledger with per-account monthly cap enforcement.
//!
//! Deposits and withdrawals are recorded against capped funding accounts or
//! uncapped payment platforms, attributed to a game and an operator. The one
//! safety-critical operation lives in [`engine::LedgerEngine`]: validating a
//! proposed movement, checking it against the account's rolling calendar-month
//! usage, and persisting it atomically with respect to other submissions
//! against the same account.
//!
//! The crate exposes no HTTP or CLI surface; the embedding service wraps the
//! engine and maps its typed outcomes onto whatever boundary it serves.

pub mod aggregate;
pub mod engine;
pub mod limits;
pub mod models;
pub mod registry;
pub mod reports;
pub mod storage;
pub mod types;

pub use engine::{DeleteReply, LedgerEngine, LedgerError, Rejection, TransactionReply};
pub use models::TransactionRequest;
pub use registry::MemoryRegistry;
pub use storage::MemoryLedger;
