//! Pure reward arithmetic. Nothing here touches storage.
//!
//! ```text
//! locked   = deposit × price
//! bonus    = locked × extra_reward_percent / 100
//! referral = locked × referral_reward_percent / 100
//! ```
//!
//! Divisions truncate toward zero. Every multiplication is checked so an
//! oversized deposit fails with `Overflow` instead of wrapping or clamping.

use crate::config::PERCENT_DENOMINATOR;
use crate::errors::ContractError;

/// Reward-token amount locked for a deposit of `deposit_amount` at `price`.
pub fn compute_lock(deposit_amount: i128, price: i128) -> Result<i128, ContractError> {
    if deposit_amount <= 0 {
        return Err(ContractError::InvalidAmount);
    }
    if price <= 0 {
        return Err(ContractError::InvalidPrice);
    }
    deposit_amount
        .checked_mul(price)
        .ok_or(ContractError::Overflow)
}

/// Bonus paid to the staker immediately at deposit time.
pub fn compute_instant_bonus(
    locked_amount: i128,
    extra_reward_percent: i128,
) -> Result<i128, ContractError> {
    percent_of(locked_amount, extra_reward_percent)
}

/// Bonus paid once to a referrer when the relationship is first established.
pub fn compute_referral_bonus(
    locked_amount: i128,
    referral_reward_percent: i128,
) -> Result<i128, ContractError> {
    percent_of(locked_amount, referral_reward_percent)
}

fn percent_of(amount: i128, percent: i128) -> Result<i128, ContractError> {
    amount
        .checked_mul(percent)
        .and_then(|scaled| scaled.checked_div(PERCENT_DENOMINATOR))
        .ok_or(ContractError::Overflow)
}

// ── Unit tests ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    extern crate std;
    use super::*;
    use crate::config::{DEFAULT_TOKEN_PRICE, EXTRA_REWARD_PERCENT, REFERRAL_REWARD_PERCENT};

    #[test]
    fn lock_is_deposit_times_price() {
        assert_eq!(compute_lock(10, DEFAULT_TOKEN_PRICE), Ok(740));
        assert_eq!(compute_lock(1, 1), Ok(1));
    }

    #[test]
    fn lock_rejects_non_positive_deposit() {
        assert_eq!(compute_lock(0, 74), Err(ContractError::InvalidAmount));
        assert_eq!(compute_lock(-5, 74), Err(ContractError::InvalidAmount));
    }

    #[test]
    fn lock_rejects_non_positive_price() {
        assert_eq!(compute_lock(10, 0), Err(ContractError::InvalidPrice));
    }

    #[test]
    fn lock_overflow_is_reported() {
        assert_eq!(compute_lock(i128::MAX, 2), Err(ContractError::Overflow));
    }

    #[test]
    fn instant_bonus_is_thirty_percent() {
        // 740 × 30 / 100 = 222
        assert_eq!(compute_instant_bonus(740, EXTRA_REWARD_PERCENT), Ok(222));
    }

    #[test]
    fn referral_bonus_is_ten_percent() {
        // 5 × 74 = 370; 370 × 10 / 100 = 37
        assert_eq!(compute_referral_bonus(370, REFERRAL_REWARD_PERCENT), Ok(37));
    }

    #[test]
    fn percentages_truncate_toward_zero() {
        // 7 × 30 / 100 = 2.1 → 2
        assert_eq!(compute_instant_bonus(7, 30), Ok(2));
        // 9 × 10 / 100 = 0.9 → 0
        assert_eq!(compute_referral_bonus(9, 10), Ok(0));
    }

    #[test]
    fn bonus_overflow_is_reported() {
        let huge = i128::MAX / 2;
        assert_eq!(
            compute_instant_bonus(huge, EXTRA_REWARD_PERCENT),
            Err(ContractError::Overflow)
        );
    }
}
