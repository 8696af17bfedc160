#![no_std]

pub mod events;

use common::admin_tiers::{self, AdminTier};
use common::{CommonError, CooldownConfig, DynamicConfig};
use soroban_sdk::{contract, contractimpl, contracttype, symbol_short, Address, Env, Symbol};

// ── Storage key constants ────────────────────────────────────────────────────

const ADMIN: Symbol = symbol_short!("ADMIN");
const INITIALIZED: Symbol = symbol_short!("INIT");
const PAUSED: Symbol = symbol_short!("PAUSED");
const BASE_AMOUNT: Symbol = symbol_short!("BASE_AMT");
const BASE_COOLDOWN: Symbol = symbol_short!("BASE_CD");
const DYNAMIC: Symbol = symbol_short!("DYN_CFG");

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
enum AdminKey {
    Blacklisted(Address),
}

/// Counting window used until an admin configures one.
pub const DEFAULT_COUNTING_WINDOW: u64 = 3_600;

// ── Contract ─────────────────────────────────────────────────────────────────

/// Policy store read by the faucet on every request.
#[contract]
pub struct FaucetAdminContract;

#[contractimpl]
impl FaucetAdminContract {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Bootstrap the policy.
    ///
    /// * `base_amount`   – payout before multipliers, must be positive.
    /// * `base_cooldown` – seconds between requests at low traffic.
    /// * `dynamic`       – reserve/time scaling and the counting window.
    pub fn initialize(
        env: Env,
        admin: Address,
        base_amount: i128,
        base_cooldown: u64,
        dynamic: DynamicConfig,
    ) -> Result<(), CommonError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(CommonError::AlreadyInitialized);
        }
        if base_amount <= 0 {
            return Err(CommonError::InvalidInput);
        }
        Self::validate_dynamic(&dynamic)?;

        env.storage().instance().set(&ADMIN, &admin);
        env.storage().instance().set(&INITIALIZED, &true);
        env.storage().instance().set(&PAUSED, &false);
        env.storage().instance().set(&BASE_AMOUNT, &base_amount);
        env.storage().instance().set(&BASE_COOLDOWN, &base_cooldown);
        env.storage().instance().set(&DYNAMIC, &dynamic);

        admin_tiers::bootstrap(&env, &admin);

        events::publish_initialized(&env, admin, base_amount, base_cooldown);

        Ok(())
    }

    // ── Capability surface read by the faucet ───────────────────────────────

    pub fn is_paused(env: Env) -> bool {
        env.storage().instance().get(&PAUSED).unwrap_or(false)
    }

    pub fn is_blacklisted(env: Env, identity: Address) -> bool {
        env.storage()
            .persistent()
            .get(&AdminKey::Blacklisted(identity))
            .unwrap_or(false)
    }

    pub fn base_amount(env: Env) -> i128 {
        env.storage().instance().get(&BASE_AMOUNT).unwrap_or(0)
    }

    pub fn cooldown_config(env: Env) -> CooldownConfig {
        let dynamic = Self::dynamic_config(env.clone());
        CooldownConfig {
            base_cooldown: env.storage().instance().get(&BASE_COOLDOWN).unwrap_or(0),
            dynamic_enabled: dynamic.enabled,
            max_reserve: dynamic.max_reserve,
        }
    }

    pub fn dynamic_config(env: Env) -> DynamicConfig {
        env.storage()
            .instance()
            .get(&DYNAMIC)
            .unwrap_or(DynamicConfig {
                enabled: false,
                max_reserve: 0,
                counting_window_seconds: DEFAULT_COUNTING_WINDOW,
            })
    }

    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&INITIALIZED)
    }

    pub fn get_admin(env: Env) -> Result<Address, CommonError> {
        env.storage()
            .instance()
            .get(&ADMIN)
            .ok_or(CommonError::NotInitialized)
    }

    // ── Circuit breaker ─────────────────────────────────────────────────────

    /// Requires at least `OperatorAdmin`.
    pub fn pause(env: Env, caller: Address) -> Result<(), CommonError> {
        Self::set_paused(&env, caller, true)
    }

    /// Requires at least `OperatorAdmin`.
    pub fn unpause(env: Env, caller: Address) -> Result<(), CommonError> {
        Self::set_paused(&env, caller, false)
    }

    // ── Policy setters (ContractAdmin) ──────────────────────────────────────

    pub fn set_blacklisted(
        env: Env,
        caller: Address,
        identity: Address,
        blacklisted: bool,
    ) -> Result<(), CommonError> {
        Self::require_caller(&env, &caller, &AdminTier::ContractAdmin)?;

        let key = AdminKey::Blacklisted(identity.clone());
        if blacklisted {
            env.storage().persistent().set(&key, &true);
            common::extend_persistent(&env, &key);
        } else {
            env.storage().persistent().remove(&key);
        }

        events::publish_blacklist_updated(&env, caller, identity, blacklisted);
        Ok(())
    }

    pub fn set_base_amount(env: Env, caller: Address, amount: i128) -> Result<(), CommonError> {
        Self::require_caller(&env, &caller, &AdminTier::ContractAdmin)?;
        if amount <= 0 {
            return Err(CommonError::InvalidInput);
        }

        env.storage().instance().set(&BASE_AMOUNT, &amount);

        events::publish_base_amount_set(&env, caller, amount);
        Ok(())
    }

    pub fn set_base_cooldown(env: Env, caller: Address, cooldown: u64) -> Result<(), CommonError> {
        Self::require_caller(&env, &caller, &AdminTier::ContractAdmin)?;

        env.storage().instance().set(&BASE_COOLDOWN, &cooldown);

        events::publish_base_cooldown_set(&env, caller, cooldown);
        Ok(())
    }

    pub fn set_dynamic_config(
        env: Env,
        caller: Address,
        config: DynamicConfig,
    ) -> Result<(), CommonError> {
        Self::require_caller(&env, &caller, &AdminTier::ContractAdmin)?;
        Self::validate_dynamic(&config)?;

        env.storage().instance().set(&DYNAMIC, &config);

        events::publish_dynamic_config_set(&env, caller, config);
        Ok(())
    }

    // ── Admin tier management ────────────────────────────────────────────────

    /// Only a `SuperAdmin` may call this.
    pub fn promote_admin(
        env: Env,
        caller: Address,
        target: Address,
        tier: AdminTier,
    ) -> Result<(), CommonError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        admin_tiers::promote(&env, &caller, &target, tier.clone())?;
        events::publish_tier_changed(&env, caller, target, Some(tier));
        Ok(())
    }

    /// Only a `SuperAdmin` may call this.
    pub fn demote_admin(env: Env, caller: Address, target: Address) -> Result<(), CommonError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        admin_tiers::demote(&env, &caller, &target)?;
        events::publish_tier_changed(&env, caller, target, None);
        Ok(())
    }

    pub fn get_admin_tier(env: Env, admin: Address) -> Option<AdminTier> {
        admin_tiers::get_tier(&env, &admin)
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    fn require_initialized(env: &Env) -> Result<(), CommonError> {
        if !env.storage().instance().has(&INITIALIZED) {
            return Err(CommonError::NotInitialized);
        }
        Ok(())
    }

    fn require_caller(env: &Env, caller: &Address, min_tier: &AdminTier) -> Result<(), CommonError> {
        Self::require_initialized(env)?;
        caller.require_auth();
        admin_tiers::require_tier(env, caller, min_tier)
    }

    fn set_paused(env: &Env, caller: Address, paused: bool) -> Result<(), CommonError> {
        Self::require_caller(env, &caller, &AdminTier::OperatorAdmin)?;
        env.storage().instance().set(&PAUSED, &paused);
        events::publish_pause_changed(env, caller, paused);
        Ok(())
    }

    fn validate_dynamic(config: &DynamicConfig) -> Result<(), CommonError> {
        if config.max_reserve < 0 || config.counting_window_seconds == 0 {
            return Err(CommonError::InvalidInput);
        }
        Ok(())
    }
}
