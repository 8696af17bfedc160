#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, Address, BytesN, Env};

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the faucet is wired to its collaborators.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
    pub token: Address,
    pub admin_contract: Address,
    pub stats_contract: Address,
    pub timestamp: u64,
}

/// Fired for every committed request.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RequestFulfilledEvent {
    pub identity: Address,
    pub amount: i128,
    pub reserve_multiplier: u32,
    pub time_multiplier: u32,
    pub first_time: bool,
    pub timestamp: u64,
}

/// Fired when a referrer is paid for a referee's request.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReferralRewardPaidEvent {
    pub referrer: Address,
    pub referee: Address,
    pub amount: i128,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CodeIssuedEvent {
    pub identity: Address,
    pub code: BytesN<32>,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReferralRegisteredEvent {
    pub referrer: Address,
    pub referee: Address,
    pub timestamp: u64,
}

/// Fired when a supplied referral code could not be used and the identity
/// was issued its own code instead.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReferralFallbackEvent {
    pub identity: Address,
    pub code: BytesN<32>,
    pub reason: u32,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HourlyCountResetEvent {
    pub admin: Address,
    pub hour_index: u64,
    pub discarded: u32,
    pub timestamp: u64,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_initialized(
    env: &Env,
    admin: Address,
    token: Address,
    admin_contract: Address,
    stats_contract: Address,
) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            admin,
            token,
            admin_contract,
            stats_contract,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_request_fulfilled(
    env: &Env,
    identity: Address,
    amount: i128,
    reserve_multiplier: u32,
    time_multiplier: u32,
    first_time: bool,
) {
    let topics = (symbol_short!("FULFILL"), identity.clone());
    let data = RequestFulfilledEvent {
        identity,
        amount,
        reserve_multiplier,
        time_multiplier,
        first_time,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_referral_reward_paid(env: &Env, referrer: Address, referee: Address, amount: i128) {
    let topics = (symbol_short!("REF_PAID"), referrer.clone(), referee.clone());
    let data = ReferralRewardPaidEvent {
        referrer,
        referee,
        amount,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_code_issued(env: &Env, identity: Address, code: BytesN<32>) {
    let topics = (symbol_short!("CODE_ISS"), identity.clone());
    let data = CodeIssuedEvent {
        identity,
        code,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_referral_registered(env: &Env, referrer: Address, referee: Address) {
    let topics = (symbol_short!("REF_REG"), referrer.clone(), referee.clone());
    let data = ReferralRegisteredEvent {
        referrer,
        referee,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_referral_fallback(env: &Env, identity: Address, code: BytesN<32>, reason: u32) {
    let topics = (symbol_short!("REF_FALL"), identity.clone());
    let data = ReferralFallbackEvent {
        identity,
        code,
        reason,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_hourly_count_reset(env: &Env, admin: Address, hour_index: u64, discarded: u32) {
    let topics = (symbol_short!("HR_RESET"), admin.clone());
    let data = HourlyCountResetEvent {
        admin,
        hour_index,
        discarded,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}
