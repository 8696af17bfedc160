//! Shared types, error codes and collaborator interfaces for the faucet suite.
//!
//! This crate provides:
//! - [`CommonError`]: error codes returned by the collaborator contracts.
//! - [`admin_tiers`]: the tiered admin registry used for parameter setters.
//! - [`interfaces`]: `#[contractclient]` capability traits the faucet core
//!   depends on (Admin, Stats), so each collaborator can be swapped or mocked.
//! - [`types`]: configuration and statistics payloads crossing contracts.
//!
//! Contract-specific errors start at code **100** so they never collide with
//! the common set.

#![no_std]

use soroban_sdk::{contracterror, Env, IntoVal, Val};

// ── Modules ──────────────────────────────────────────────────────────────────

pub mod admin_tiers;
pub mod interfaces;
pub mod types;

pub use interfaces::*;
pub use types::*;

// ── Storage TTL convention ───────────────────────────────────────────────────

/// Persistent entries are bumped once their TTL drops below this many ledgers.
pub const TTL_THRESHOLD: u32 = 5_184_000;
/// Target TTL, in ledgers, after a bump.
pub const TTL_EXTEND_TO: u32 = 10_368_000;

/// Extends the TTL of a persistent entry using the suite-wide thresholds.
pub fn extend_persistent<K>(env: &Env, key: &K)
where
    K: IntoVal<Env, Val>,
{
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

// ── Shared error enum ────────────────────────────────────────────────────────

/// Error codes shared by the collaborator contracts.
///
/// # Code ranges
/// | Range   | Purpose                        |
/// |---------|--------------------------------|
/// | 1 – 9   | Lifecycle / initialisation     |
/// | 10 – 19 | Authentication & authorisation |
/// | 30 – 39 | Validation / input             |
/// | 100+    | Reserved for contract-specific |
#[contracterror]
#[derive(Clone, Debug, Eq, PartialEq, Copy)]
#[repr(u32)]
pub enum CommonError {
    // ── Lifecycle (1–9) ──────────────────────────────────────
    /// The contract has not been initialised yet.
    NotInitialized = 1,

    /// `initialize` was called more than once.
    AlreadyInitialized = 2,

    // ── Auth (10–19) ─────────────────────────────────────────
    /// The caller lacks the admin tier required for the operation.
    AccessDenied = 10,

    /// The caller is not the contract allowed to push data here.
    UnknownCaller = 11,

    // ── Validation (30–39) ───────────────────────────────────
    /// A parameter is out of range (zero base amount, zero window, ...).
    InvalidInput = 30,
}
