mod ledger_engine;
mod rejection;
mod reply;

pub use ledger_engine::LedgerEngine;
pub use rejection::{LedgerError, Rejection};
pub use reply::{DeleteReply, TransactionReply};
