//! Payout arithmetic.
//!
//! Everything here is pure and works in basis points (`BPS_DENOM` = 100 %).
//! Every division truncates toward zero; callers rely on that rounding, so
//! intermediate products are never reordered to "improve" precision.

/// 100 % in basis points.
pub const BPS_DENOM: u32 = 10_000;

pub const SECONDS_PER_HOUR: u64 = 3_600;
const HOURS_PER_DAY: u64 = 24;

/// Signup bonus paid to a referred identity, in bp of the payout.
pub const NEW_USER_BONUS_BPS: i128 = 2_000;
/// Reward paid to the referrer, in bp of the referee's payout.
pub const REFERRER_REWARD_BPS: i128 = 1_000;

// ── Reserve tiers (inclusive lower bounds, highest first) ────────────────────

const RESERVE_TIERS: [(i128, u32); 4] = [
    (7_500, 10_000),
    (5_000, 8_000),
    (2_500, 5_000),
    (1_000, 3_000),
];
const RESERVE_FLOOR_BPS: u32 = 1_000;

/// Multiplier for the current reserve level relative to `max_reserve`.
///
/// A zero (or negative) `max_reserve` means reserve scaling is not
/// configured and yields the neutral multiplier.
pub fn reserve_multiplier(current_reserve: i128, max_reserve: i128) -> u32 {
    if max_reserve <= 0 {
        return BPS_DENOM;
    }
    let ratio = current_reserve.max(0).saturating_mul(BPS_DENOM as i128) / max_reserve;
    RESERVE_TIERS
        .iter()
        .find(|(threshold, _)| ratio >= *threshold)
        .map(|(_, bps)| *bps)
        .unwrap_or(RESERVE_FLOOR_BPS)
}

/// Multiplier for the UTC hour of `timestamp`.
///
/// | hours     | bp     |
/// |-----------|--------|
/// | 00 – 07   | 12 000 |
/// | 08 – 15   | 10 000 |
/// | 16 – 23   |  8 000 |
pub fn time_multiplier(timestamp: u64) -> u32 {
    match (timestamp / SECONDS_PER_HOUR) % HOURS_PER_DAY {
        0..=7 => 12_000,
        8..=15 => 10_000,
        _ => 8_000,
    }
}

/// `base * reserve_bps * time_bps / 10000²`, truncated once.
pub fn final_amount(base: i128, reserve_bps: u32, time_bps: u32) -> i128 {
    let denom = (BPS_DENOM as i128) * (BPS_DENOM as i128);
    base.saturating_mul(reserve_bps as i128)
        .saturating_mul(time_bps as i128)
        / denom
}

pub fn new_user_bonus(base: i128) -> i128 {
    base.saturating_mul(NEW_USER_BONUS_BPS) / BPS_DENOM as i128
}

pub fn referrer_reward(base: i128) -> i128 {
    base.saturating_mul(REFERRER_REWARD_BPS) / BPS_DENOM as i128
}
