use soroban_sdk::{contracttype, Address, Env};

use crate::{extend_persistent, CommonError};

// ── Storage Keys ─────────────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
enum TierKey {
    Tier(Address),
    SuperAdmin,
}

// ── Admin Tier Enum ──────────────────────────────────────────────────────────

/// Three-tier admin hierarchy used by the faucet admin contract.
///
/// - `SuperAdmin`    – Everything below, plus promoting and demoting admins.
/// - `ContractAdmin` – Changes payout policy: base amount, cooldown,
///                     dynamic configuration and the blacklist.
/// - `OperatorAdmin` – Can only pause and unpause distribution.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum AdminTier {
    OperatorAdmin = 1,
    ContractAdmin = 2,
    SuperAdmin = 3,
}

impl AdminTier {
    pub fn rank(&self) -> u32 {
        match self {
            AdminTier::OperatorAdmin => 1,
            AdminTier::ContractAdmin => 2,
            AdminTier::SuperAdmin => 3,
        }
    }

    /// Returns true if this tier is at least as high as `min_tier`.
    pub fn has_at_least(&self, min_tier: &AdminTier) -> bool {
        self.rank() >= min_tier.rank()
    }
}

// ── Core Functions ───────────────────────────────────────────────────────────

/// Assigns a tier. Callers must have checked authorisation beforehand.
pub fn set_tier(env: &Env, admin: &Address, tier: AdminTier) {
    let key = TierKey::Tier(admin.clone());
    env.storage().persistent().set(&key, &tier);
    extend_persistent(env, &key);
}

pub fn get_tier(env: &Env, admin: &Address) -> Option<AdminTier> {
    let key = TierKey::Tier(admin.clone());
    let tier: Option<AdminTier> = env.storage().persistent().get(&key);
    if tier.is_some() {
        extend_persistent(env, &key);
    }
    tier
}

/// Fails with [`CommonError::AccessDenied`] unless `caller` holds at least
/// `min_tier`.
pub fn require_tier(env: &Env, caller: &Address, min_tier: &AdminTier) -> Result<(), CommonError> {
    match get_tier(env, caller) {
        Some(tier) if tier.has_at_least(min_tier) => Ok(()),
        _ => Err(CommonError::AccessDenied),
    }
}

// ── SuperAdmin Registry ──────────────────────────────────────────────────────

/// Records the bootstrap admin and grants it `SuperAdmin`.
pub fn bootstrap(env: &Env, admin: &Address) {
    env.storage().instance().set(&TierKey::SuperAdmin, admin);
    set_tier(env, admin, AdminTier::SuperAdmin);
}

pub fn bootstrap_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&TierKey::SuperAdmin)
}

// ── Promote / Demote ─────────────────────────────────────────────────────────

/// Assigns `tier` to `target`. `caller` must be a `SuperAdmin` and must
/// already have been authenticated.
pub fn promote(
    env: &Env,
    caller: &Address,
    target: &Address,
    tier: AdminTier,
) -> Result<(), CommonError> {
    require_tier(env, caller, &AdminTier::SuperAdmin)?;
    set_tier(env, target, tier);
    Ok(())
}

/// Removes any tier from `target`. The bootstrap admin cannot be demoted,
/// so the registry always keeps one `SuperAdmin`.
pub fn demote(env: &Env, caller: &Address, target: &Address) -> Result<(), CommonError> {
    require_tier(env, caller, &AdminTier::SuperAdmin)?;
    if bootstrap_admin(env).as_ref() == Some(target) {
        return Err(CommonError::InvalidInput);
    }
    env.storage()
        .persistent()
        .remove(&TierKey::Tier(target.clone()));
    Ok(())
}
