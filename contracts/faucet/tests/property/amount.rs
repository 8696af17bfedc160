#![allow(clippy::unwrap_used, clippy::expect_used, clippy::arithmetic_side_effects)]
//! Property-based tests for payout arithmetic.
//!
//! Invariants tested:
//! - The reserve multiplier is always one of the five tier values
//! - More reserve never yields a smaller multiplier
//! - The time multiplier only depends on the hour of the day
//! - Neutral multipliers pay exactly the base amount
//! - Bonuses are bounded fractions of the payout

use faucet::amount::{
    final_amount, new_user_bonus, referrer_reward, reserve_multiplier, time_multiplier,
    BPS_DENOM,
};
use proptest::prelude::*;

const TIERS: [u32; 5] = [1_000, 3_000, 5_000, 8_000, 10_000];
const DAY: u64 = 86_400;

proptest! {
    #[test]
    fn prop_reserve_multiplier_is_a_tier(
        reserve in -1_000_000i128..=10_000_000_000i128,
        max in 1i128..=10_000_000_000i128,
    ) {
        prop_assert!(TIERS.contains(&reserve_multiplier(reserve, max)));
    }

    #[test]
    fn prop_reserve_multiplier_monotonic(
        a in 0i128..=1_000_000_000i128,
        b in 0i128..=1_000_000_000i128,
        max in 1i128..=1_000_000_000i128,
    ) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(reserve_multiplier(low, max) <= reserve_multiplier(high, max));
    }

    /// Without a configured maximum the reserve never scales the payout.
    #[test]
    fn prop_unconfigured_max_is_neutral(
        reserve in any::<i64>(),
        max in -1_000i128..=0i128,
    ) {
        prop_assert_eq!(reserve_multiplier(reserve as i128, max), BPS_DENOM);
    }

    #[test]
    fn prop_time_multiplier_repeats_daily(ts in 0u64..=4_000_000_000u64, days in 0u64..=1_000u64) {
        prop_assert_eq!(time_multiplier(ts), time_multiplier(ts + days * DAY));
        prop_assert!([8_000, 10_000, 12_000].contains(&time_multiplier(ts)));
    }

    #[test]
    fn prop_neutral_multipliers_pay_base(base in 0i128..=1_000_000_000_000i128) {
        prop_assert_eq!(final_amount(base, BPS_DENOM, BPS_DENOM), base);
    }

    #[test]
    fn prop_final_amount_bounded(
        base in 0i128..=1_000_000_000_000i128,
        r in prop::sample::select(TIERS.to_vec()),
        t in prop::sample::select(vec![8_000u32, 10_000, 12_000]),
    ) {
        let amount = final_amount(base, r, t);
        prop_assert!(amount >= 0);
        prop_assert!(amount <= base * 12 / 10);
    }

    #[test]
    fn prop_bonuses_are_bounded(base in 0i128..=1_000_000_000_000i128) {
        let bonus = new_user_bonus(base);
        let reward = referrer_reward(base);
        prop_assert!(bonus * 5 <= base);
        prop_assert!(reward * 10 <= base);
        prop_assert!(reward <= bonus);
    }
}
