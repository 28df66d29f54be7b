//! Pure limit-policy computations. No I/O, no state.
//!
//! The policy is direction-agnostic: callers pass whichever
//! (current usage, cap) pair corresponds to the movement's direction.


use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

/// Usage at or above this share of the cap is flagged as near the limit.
pub const NEAR_LIMIT_PERCENT: u32 = 80;

/// Usage at or above this share of the cap is flagged as critical.
pub const CRITICAL_PERCENT: u32 = 95;

/// Share of the cap already used, rounded half-away-from-zero to a whole
/// percent. A cap of zero reports 0. Values over 100 are not clamped.
pub fn percentage_of(current: Decimal, limit: Decimal) -> u32 {
    if limit <= Decimal::ZERO {
        return 0;
    }

    (current / limit * Decimal::from(100))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
        .unwrap_or(u32::MAX)
}

pub fn is_near(current: Decimal, limit: Decimal) -> bool {
    percentage_of(current, limit) >= NEAR_LIMIT_PERCENT
}

pub fn is_critical(current: Decimal, limit: Decimal) -> bool {
    percentage_of(current, limit) >= CRITICAL_PERCENT
}

/// Headroom left under the cap. Negative once the cap is already breached.
pub fn remaining(current: Decimal, limit: Decimal) -> Decimal {
    limit - current
}

/// Point-in-time view of one cap, as rendered on the source cards and the
/// monthly account summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LimitStatus {
    pub percentage: u32,
    pub is_near: bool,
    pub is_critical: bool,
    pub remaining: Decimal
}

impl LimitStatus {
    pub fn of(current: Decimal, limit: Decimal) -> Self {
        let percentage = percentage_of(current, limit);

        Self {
            percentage,
            is_near: percentage >= NEAR_LIMIT_PERCENT,
            is_critical: percentage >= CRITICAL_PERCENT,
            remaining: remaining(current, limit)
        }
    }
}
