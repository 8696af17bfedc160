//! Per-identity request lock.
//!
//! Held from before the access checks until every write of the request is
//! done, so the cooldown check and the `last_request` update can never be
//! interleaved with a nested request for the same identity. The marker lives
//! in temporary storage; an aborted request rolls it back with everything
//! else.

use soroban_sdk::{Address, Env};

use crate::storage::DataKey;
use crate::FaucetError;

/// Ledgers a stranded marker may survive. Markers are always removed before
/// a request returns, this only bounds rent.
const LOCK_TTL: u32 = 16;

pub(crate) fn acquire(env: &Env, identity: &Address) -> Result<(), FaucetError> {
    let key = DataKey::RequestLock(identity.clone());
    if env.storage().temporary().has(&key) {
        return Err(FaucetError::RequestInFlight);
    }
    env.storage().temporary().set(&key, &true);
    env.storage().temporary().extend_ttl(&key, LOCK_TTL, LOCK_TTL);
    Ok(())
}

pub(crate) fn release(env: &Env, identity: &Address) {
    env.storage()
        .temporary()
        .remove(&DataKey::RequestLock(identity.clone()));
}

pub fn is_locked(env: &Env, identity: &Address) -> bool {
    env.storage()
        .temporary()
        .has(&DataKey::RequestLock(identity.clone()))
}
