use soroban_sdk::{contracttype, symbol_short, Address, BytesN, Env, Symbol};

use crate::FaucetError;

// ── Instance keys ────────────────────────────────────────────────────────────

pub(crate) const ADMIN: Symbol = symbol_short!("ADMIN");
pub(crate) const INITIALIZED: Symbol = symbol_short!("INIT");
pub(crate) const TOKEN: Symbol = symbol_short!("TOKEN");
pub(crate) const ADMIN_CONTRACT: Symbol = symbol_short!("ADM_CTR");
pub(crate) const STATS_CONTRACT: Symbol = symbol_short!("STS_CTR");

// ── Per-entry keys ───────────────────────────────────────────────────────────

/// Keys of every persistent and temporary entry the faucet owns.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// identity → last successful request timestamp
    LastRequest(Address),
    /// hour index → requests committed in that hour
    HourlyCount(u64),
    /// identity → ReferralRecord
    Referral(Address),
    /// referral code → owning identity
    CodeOwner(BytesN<32>),
    /// identity → in-flight request marker (temporary storage)
    RequestLock(Address),
}

pub(crate) fn token(env: &Env) -> Result<Address, FaucetError> {
    env.storage()
        .instance()
        .get(&TOKEN)
        .ok_or(FaucetError::NotInitialized)
}

pub(crate) fn admin_contract(env: &Env) -> Result<Address, FaucetError> {
    env.storage()
        .instance()
        .get(&ADMIN_CONTRACT)
        .ok_or(FaucetError::NotInitialized)
}

pub(crate) fn stats_contract(env: &Env) -> Result<Address, FaucetError> {
    env.storage()
        .instance()
        .get(&STATS_CONTRACT)
        .ok_or(FaucetError::NotInitialized)
}
