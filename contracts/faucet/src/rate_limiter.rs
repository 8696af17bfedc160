//! Per-identity cooldowns and the global hourly request buckets.

use common::extend_persistent;
use soroban_sdk::{Address, Env};

use crate::amount::SECONDS_PER_HOUR;
use crate::storage::DataKey;

/// Upper bound on the buckets summed by [`recent_request_count`].
pub const MAX_WINDOW_HOURS: u64 = 168;

// ── Cooldown tiers: (max requests this hour, cooldown multiplier) ────────────

const COOLDOWN_TIERS: [(u32, u64); 3] = [(10, 1), (50, 2), (100, 4)];
const PEAK_MULTIPLIER: u64 = 8;

pub fn current_hour_index(timestamp: u64) -> u64 {
    timestamp / SECONDS_PER_HOUR
}

/// Scales `base_cooldown` by how busy the current hour already is.
///
/// `current_hour_count` must be read before the in-flight request is
/// counted, so a request never lengthens its own cooldown.
pub fn effective_cooldown(base_cooldown: u64, current_hour_count: u32) -> u64 {
    let multiplier = COOLDOWN_TIERS
        .iter()
        .find(|(max_count, _)| current_hour_count <= *max_count)
        .map(|(_, m)| *m)
        .unwrap_or(PEAK_MULTIPLIER);
    base_cooldown.saturating_mul(multiplier)
}

// ── Request records ──────────────────────────────────────────────────────────

/// Timestamp of the identity's last committed request, 0 if none.
pub fn last_request(env: &Env, identity: &Address) -> u64 {
    env.storage()
        .persistent()
        .get(&DataKey::LastRequest(identity.clone()))
        .unwrap_or(0)
}

pub(crate) fn set_last_request(env: &Env, identity: &Address, timestamp: u64) {
    let key = DataKey::LastRequest(identity.clone());
    env.storage().persistent().set(&key, &timestamp);
    extend_persistent(env, &key);
}

/// An identity that never requested is always eligible.
pub fn is_eligible(env: &Env, identity: &Address, now: u64, cooldown: u64) -> bool {
    let last = last_request(env, identity);
    last == 0 || now >= last.saturating_add(cooldown)
}

/// Seconds left before `identity` clears `cooldown`; 0 when eligible.
pub fn time_until_eligible(env: &Env, identity: &Address, now: u64, cooldown: u64) -> u64 {
    let last = last_request(env, identity);
    if last == 0 {
        return 0;
    }
    last.saturating_add(cooldown).saturating_sub(now)
}

// ── Hourly buckets ───────────────────────────────────────────────────────────

pub fn hourly_count(env: &Env, hour_index: u64) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::HourlyCount(hour_index))
        .unwrap_or(0)
}

/// Counts one committed request in the bucket of `now`'s hour.
pub(crate) fn record_request(env: &Env, now: u64) -> u32 {
    let key = DataKey::HourlyCount(current_hour_index(now));
    let count: u32 = env.storage().persistent().get(&key).unwrap_or(0);
    let next = count.saturating_add(1);
    env.storage().persistent().set(&key, &next);
    extend_persistent(env, &key);
    next
}

/// Administrative override: drops one bucket. Returns the discarded count.
pub(crate) fn reset_hour(env: &Env, hour_index: u64) -> u32 {
    let key = DataKey::HourlyCount(hour_index);
    let previous: u32 = env.storage().persistent().get(&key).unwrap_or(0);
    env.storage().persistent().remove(&key);
    previous
}

/// Requests committed in the hours overlapping the last `window_seconds`,
/// the current hour included.
pub fn recent_request_count(env: &Env, now: u64, window_seconds: u64) -> u64 {
    let hours = window_seconds
        .div_ceil(SECONDS_PER_HOUR)
        .clamp(1, MAX_WINDOW_HOURS);
    let current = current_hour_index(now);
    let first = current.saturating_sub(hours - 1);
    (first..=current)
        .map(|hour| hourly_count(env, hour) as u64)
        .sum()
}
