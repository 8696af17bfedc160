//! Capability interfaces of the faucet's collaborators.
//!
//! The faucet only ever talks to its admin and stats contracts through the
//! clients generated here, never through the concrete contract crates. The
//! token ledger is reached through `soroban_sdk::token::Client`.

use soroban_sdk::{contractclient, Address, Env};

use crate::{CommonError, CooldownConfig, DynamicConfig, UserStats};

/// Read-only policy surface of the admin contract.
#[contractclient(name = "AdminClient")]
pub trait AdminInterface {
    fn is_paused(env: Env) -> bool;
    fn is_blacklisted(env: Env, identity: Address) -> bool;
    fn base_amount(env: Env) -> i128;
    fn cooldown_config(env: Env) -> CooldownConfig;
    fn dynamic_config(env: Env) -> DynamicConfig;
}

/// Bookkeeping surface of the stats contract.
#[contractclient(name = "StatsClient")]
pub trait StatsInterface {
    fn record_request(
        env: Env,
        caller: Address,
        identity: Address,
        amount: i128,
        is_first_time: bool,
    ) -> Result<(), CommonError>;
    fn get_user_stats(env: Env, identity: Address) -> UserStats;
}
