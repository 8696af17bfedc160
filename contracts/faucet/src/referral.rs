//! Referral codes and the referrer → referee graph.
//!
//! Per identity the registry moves through three states:
//!
//! ```text
//! NoCode ──generate_code──▶ HasCode
//!    │
//!    └──register_referral──▶ Registered (referrer fixed, signup bonus claimed)
//! ```
//!
//! A registered identity receives its own code right after registration, so
//! it can refer others in turn.

use common::extend_persistent;
use soroban_sdk::{contracttype, xdr::ToXdr, Address, BytesN, Env};

use crate::amount;
use crate::events;
use crate::storage::DataKey;
use crate::FaucetError;

// ── Types ────────────────────────────────────────────────────────────────────

/// Everything the registry knows about one identity.
///
/// `referrer` is `Some` exactly when `has_claimed_signup_bonus` is true.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ReferralRecord {
    pub referrer: Option<Address>,
    pub referral_count: u32,
    pub total_rewards_paid: i128,
    pub has_claimed_signup_bonus: bool,
    pub code: Option<BytesN<32>>,
}

/// Public projection returned by `referral_info_of`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReferralInfo {
    pub code: Option<BytesN<32>>,
    pub referral_count: u32,
    pub total_rewards_paid: i128,
}

// ── Storage ──────────────────────────────────────────────────────────────────

pub fn load(env: &Env, identity: &Address) -> ReferralRecord {
    env.storage()
        .persistent()
        .get(&DataKey::Referral(identity.clone()))
        .unwrap_or_default()
}

fn store(env: &Env, identity: &Address, record: &ReferralRecord) {
    let key = DataKey::Referral(identity.clone());
    env.storage().persistent().set(&key, record);
    extend_persistent(env, &key);
}

pub fn code_of(env: &Env, identity: &Address) -> Option<BytesN<32>> {
    load(env, identity).code
}

pub fn owner_of(env: &Env, code: &BytesN<32>) -> Option<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::CodeOwner(code.clone()))
}

pub fn referrer_of(env: &Env, identity: &Address) -> Option<Address> {
    load(env, identity).referrer
}

pub fn info_of(env: &Env, identity: &Address) -> ReferralInfo {
    let record = load(env, identity);
    ReferralInfo {
        code: record.code,
        referral_count: record.referral_count,
        total_rewards_paid: record.total_rewards_paid,
    }
}

// ── Code issuance ────────────────────────────────────────────────────────────

/// `sha256(xdr(identity) ‖ entropy ‖ nonce)`.
pub(crate) fn derive_code(
    env: &Env,
    identity: &Address,
    entropy: &BytesN<32>,
    nonce: u32,
) -> BytesN<32> {
    let mut preimage = identity.clone().to_xdr(env);
    preimage.extend_from_array(&entropy.to_array());
    preimage.extend_from_array(&nonce.to_be_bytes());
    env.crypto().sha256(&preimage).into()
}

/// Issues `identity` a fresh code seeded from the host PRNG.
pub fn generate_code(env: &Env, identity: &Address) -> Result<BytesN<32>, FaucetError> {
    let entropy: BytesN<32> = env.prng().gen();
    assign_code(env, identity, &entropy)
}

/// Claims the first free candidate for `entropy`, rehashing with an
/// incrementing nonce on collision. Existing owners are never overwritten.
pub(crate) fn assign_code(
    env: &Env,
    identity: &Address,
    entropy: &BytesN<32>,
) -> Result<BytesN<32>, FaucetError> {
    let mut record = load(env, identity);
    if record.code.is_some() {
        return Err(FaucetError::CodeAlreadyAssigned);
    }

    let mut nonce: u32 = 0;
    let code = loop {
        let candidate = derive_code(env, identity, entropy, nonce);
        if !env
            .storage()
            .persistent()
            .has(&DataKey::CodeOwner(candidate.clone()))
        {
            break candidate;
        }
        nonce = nonce.wrapping_add(1);
    };

    let owner_key = DataKey::CodeOwner(code.clone());
    env.storage().persistent().set(&owner_key, identity);
    extend_persistent(env, &owner_key);

    record.code = Some(code.clone());
    store(env, identity, &record);

    events::publish_code_issued(env, identity.clone(), code.clone());

    Ok(code)
}

// ── Registration ─────────────────────────────────────────────────────────────

/// Links `new_identity` to the owner of `code`. Nothing is written unless
/// every precondition holds. Returns the referrer.
pub fn register_referral(
    env: &Env,
    new_identity: &Address,
    code: &BytesN<32>,
) -> Result<Address, FaucetError> {
    let referrer = owner_of(env, code).ok_or(FaucetError::ReferralCodeNotFound)?;
    if referrer == *new_identity {
        return Err(FaucetError::SelfReferral);
    }

    let mut referrer_record = load(env, &referrer);
    if referrer_record.code.as_ref() != Some(code) {
        return Err(FaucetError::ReferrerNotEligible);
    }

    let mut record = load(env, new_identity);
    if record.referrer.is_some() || record.has_claimed_signup_bonus {
        return Err(FaucetError::AlreadyReferred);
    }

    record.referrer = Some(referrer.clone());
    record.has_claimed_signup_bonus = true;
    store(env, new_identity, &record);

    referrer_record.referral_count = referrer_record.referral_count.saturating_add(1);
    store(env, &referrer, &referrer_record);

    events::publish_referral_registered(env, referrer.clone(), new_identity.clone());

    Ok(referrer)
}

// ── Bonuses ──────────────────────────────────────────────────────────────────

/// `(user_bonus, referrer_bonus)` for a payout of `base` to `identity`.
///
/// Only computes; paying the referrer is the coordinator's job.
pub fn compute_bonuses(env: &Env, identity: &Address, base: i128) -> (i128, i128) {
    let record = load(env, identity);
    if record.referrer.is_none() {
        return (0, 0);
    }
    let user_bonus = if record.has_claimed_signup_bonus {
        amount::new_user_bonus(base)
    } else {
        0
    };
    (user_bonus, amount::referrer_reward(base))
}

/// Credits `amount` to the referrer's lifetime total. Call only after the
/// reward transfer succeeded.
pub(crate) fn record_reward_paid(env: &Env, referrer: &Address, amount: i128) {
    let mut record = load(env, referrer);
    record.total_rewards_paid = record.total_rewards_paid.saturating_add(amount);
    store(env, referrer, &record);
}
