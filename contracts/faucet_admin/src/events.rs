#![allow(deprecated)] // events().publish migration tracked separately

use common::admin_tiers::AdminTier;
use common::DynamicConfig;
use soroban_sdk::{symbol_short, Address, Env};

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
    pub base_amount: i128,
    pub base_cooldown: u64,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PauseChangedEvent {
    pub caller: Address,
    pub paused: bool,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BlacklistUpdatedEvent {
    pub caller: Address,
    pub identity: Address,
    pub blacklisted: bool,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BaseAmountSetEvent {
    pub caller: Address,
    pub amount: i128,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BaseCooldownSetEvent {
    pub caller: Address,
    pub cooldown: u64,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DynamicConfigSetEvent {
    pub caller: Address,
    pub config: DynamicConfig,
    pub timestamp: u64,
}

/// `tier` is the new tier's rank, 0 when the target was demoted.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TierChangedEvent {
    pub caller: Address,
    pub target: Address,
    pub tier: u32,
    pub timestamp: u64,
}

pub fn publish_initialized(env: &Env, admin: Address, base_amount: i128, base_cooldown: u64) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            admin,
            base_amount,
            base_cooldown,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_pause_changed(env: &Env, caller: Address, paused: bool) {
    let topic = if paused {
        symbol_short!("PAUSED")
    } else {
        symbol_short!("UNPAUSED")
    };
    env.events().publish(
        (topic, caller.clone()),
        PauseChangedEvent {
            caller,
            paused,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_blacklist_updated(env: &Env, caller: Address, identity: Address, blacklisted: bool) {
    env.events().publish(
        (symbol_short!("BLACKLST"), identity.clone()),
        BlacklistUpdatedEvent {
            caller,
            identity,
            blacklisted,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_base_amount_set(env: &Env, caller: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("BASE_AMT"), caller.clone()),
        BaseAmountSetEvent {
            caller,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_base_cooldown_set(env: &Env, caller: Address, cooldown: u64) {
    env.events().publish(
        (symbol_short!("BASE_CD"), caller.clone()),
        BaseCooldownSetEvent {
            caller,
            cooldown,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_dynamic_config_set(env: &Env, caller: Address, config: DynamicConfig) {
    env.events().publish(
        (symbol_short!("DYN_CFG"), caller.clone()),
        DynamicConfigSetEvent {
            caller,
            config,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_tier_changed(env: &Env, caller: Address, target: Address, tier: Option<AdminTier>) {
    env.events().publish(
        (symbol_short!("ADM_TIER"), target.clone()),
        TierChangedEvent {
            caller,
            target,
            tier: tier.map_or(0, |t| t.rank()),
            timestamp: env.ledger().timestamp(),
        },
    );
}
