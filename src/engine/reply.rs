use rust_decimal::Decimal;
use serde::Serialize;

use crate::engine::rejection::{LedgerError, Rejection};
use crate::types::TransactionId;

/// Submission reply in the JSON shape the back-office client consumes.
#[derive(Debug, Clone, Serialize)]
pub struct TransactionReply {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<TransactionId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_total: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested: Option<Decimal>
}

impl TransactionReply {
    pub fn from_outcome(outcome: &Result<TransactionId, Rejection>) -> Self {
        match outcome {
            Ok(transaction_id) => Self {
                success: true,
                transaction_id: Some(*transaction_id),
                error: None,
                message: "Transaction recorded".to_string(),
                current_total: None,
                limit: None,
                remaining: None,
                requested: None
            },
            Err(rejection) => {
                let mut reply = Self {
                    success: false,
                    transaction_id: None,
                    error: Some(rejection.code()),
                    message: rejection.to_string(),
                    current_total: None,
                    limit: None,
                    remaining: None,
                    requested: None
                };

                if let Rejection::MonthlyInLimitExceeded { current_total, limit, remaining, requested }
                | Rejection::MonthlyOutLimitExceeded { current_total, limit, remaining, requested } = rejection
                {
                    reply.current_total = Some(*current_total);
                    reply.limit = Some(*limit);
                    reply.remaining = Some(*remaining);
                    reply.requested = Some(*requested);
                }

                reply
            }
        }
    }
}

/// Deletion reply in the JSON shape the back-office client consumes.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteReply {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
    pub message: String
}

impl DeleteReply {
    pub fn from_outcome(outcome: &Result<(), LedgerError>) -> Self {
        match outcome {
            Ok(()) => Self {
                success: true,
                error: None,
                message: "Transaction deleted".to_string()
            },
            Err(error) => Self {
                success: false,
                error: Some(error.code()),
                message: error.to_string()
            }
        }
    }
}
