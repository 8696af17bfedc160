#![no_std]


use common::{extend_persistent, CommonError, GlobalStats, UserStats};
use soroban_sdk::{contract, contractimpl, contracttype, symbol_short, Address, Env, Symbol};

// ── Storage keys ────────────────────────────────────────────────────────────────

const ADMIN: Symbol = symbol_short!("ADMIN");
const FAUCET: Symbol = symbol_short!("FAUCET");
const GLOBAL: Symbol = symbol_short!("GLOBAL");

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
enum StatsKey {
    User(Address),
}

// ── Helpers ────────────────────────────────────────────────────────────────────

fn load_admin(env: &Env) -> Result<Address, CommonError> {
    env.storage()
        .instance()
        .get(&ADMIN)
        .ok_or(CommonError::NotInitialized)
}

fn load_user(env: &Env, identity: &Address) -> UserStats {
    env.storage()
        .persistent()
        .get(&StatsKey::User(identity.clone()))
        .unwrap_or_default()
}

fn load_global(env: &Env) -> GlobalStats {
    env.storage().instance().get(&GLOBAL).unwrap_or_default()
}

// ── Contract ───────────────────────────────────────────────────────────────────

/// Passive counters fed by the faucet after each committed request.
#[contract]
pub struct FaucetStatsContract;

#[contractimpl]
impl FaucetStatsContract {
    /// `faucet` is the only address allowed to record requests.
    pub fn initialize(env: Env, admin: Address, faucet: Address) -> Result<(), CommonError> {
        if env.storage().instance().has(&ADMIN) {
            return Err(CommonError::AlreadyInitialized);
        }
        env.storage().instance().set(&ADMIN, &admin);
        env.storage().instance().set(&FAUCET, &faucet);
        Ok(())
    }

    pub fn set_faucet(env: Env, caller: Address, faucet: Address) -> Result<(), CommonError> {
        caller.require_auth();
        if caller != load_admin(&env)? {
            return Err(CommonError::AccessDenied);
        }
        env.storage().instance().set(&FAUCET, &faucet);
        Ok(())
    }

    pub fn get_faucet(env: Env) -> Result<Address, CommonError> {
        env.storage()
            .instance()
            .get(&FAUCET)
            .ok_or(CommonError::NotInitialized)
    }

    // ── Ingestion ─────────────────────────────────────────────────────────────

    /// Adds one committed request to the per-user and global counters.
    pub fn record_request(
        env: Env,
        caller: Address,
        identity: Address,
        amount: i128,
        is_first_time: bool,
    ) -> Result<(), CommonError> {
        caller.require_auth();
        if caller != Self::get_faucet(env.clone())? {
            return Err(CommonError::UnknownCaller);
        }
        if amount < 0 {
            return Err(CommonError::InvalidInput);
        }

        let now = env.ledger().timestamp();
        let mut user = load_user(&env, &identity);
        if user.request_count == 0 {
            user.first_request_at = now;
        }
        user.total_received = user.total_received.saturating_add(amount);
        user.request_count = user.request_count.saturating_add(1);
        user.last_request_at = now;

        let key = StatsKey::User(identity);
        env.storage().persistent().set(&key, &user);
        extend_persistent(&env, &key);

        let mut global = load_global(&env);
        global.total_distributed = global.total_distributed.saturating_add(amount);
        global.total_requests = global.total_requests.saturating_add(1);
        if is_first_time {
            global.unique_users = global.unique_users.saturating_add(1);
        }
        env.storage().instance().set(&GLOBAL, &global);

        Ok(())
    }

    // ── Queries ───────────────────────────────────────────────────────────────

    pub fn get_user_stats(env: Env, identity: Address) -> UserStats {
        load_user(&env, &identity)
    }

    pub fn get_global_stats(env: Env) -> GlobalStats {
        load_global(&env)
    }
}
