#![no_std]

pub mod amount;
pub mod errors;
pub mod events;
pub mod guard;
pub mod rate_limiter;
pub mod referral;
mod storage;

pub use errors::FaucetError;
pub use referral::{ReferralInfo, ReferralRecord};

use common::{AdminClient, CooldownConfig, StatsClient};
use soroban_sdk::{contract, contractimpl, contracttype, log, token, Address, BytesN, Env};

use storage::{ADMIN, ADMIN_CONTRACT, INITIALIZED, STATS_CONTRACT, TOKEN};

// ── Public-facing types ──────────────────────────────────────────────────────

/// Snapshot returned by `status_of`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserStatus {
    pub can_request: bool,
    pub time_until_eligible: u64,
    pub estimated_amount: i128,
    pub total_received: i128,
    pub request_count: u32,
}

/// Collaborator wiring fixed at initialisation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FaucetConfig {
    pub admin: Address,
    pub token: Address,
    pub admin_contract: Address,
    pub stats_contract: Address,
}

/// Payout for one request before referral bonuses.
struct Quote {
    amount: i128,
    reserve_bps: u32,
    time_bps: u32,
}

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct FaucetContract;

#[contractimpl]
impl FaucetContract {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Wire the faucet to its collaborators.
    ///
    /// * `token`          – SEP-41 token the faucet holds and distributes.
    /// * `admin_contract` – policy store (pause, blacklist, amounts, cooldown).
    /// * `stats_contract` – passive counters; must list this faucet as writer.
    pub fn initialize(
        env: Env,
        admin: Address,
        token: Address,
        admin_contract: Address,
        stats_contract: Address,
    ) -> Result<(), FaucetError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(FaucetError::AlreadyInitialized);
        }

        env.storage().instance().set(&ADMIN, &admin);
        env.storage().instance().set(&TOKEN, &token);
        env.storage().instance().set(&ADMIN_CONTRACT, &admin_contract);
        env.storage().instance().set(&STATS_CONTRACT, &stats_contract);
        env.storage().instance().set(&INITIALIZED, &true);

        events::publish_initialized(&env, admin, token, admin_contract, stats_contract);

        Ok(())
    }

    // ── Requests ────────────────────────────────────────────────────────────

    /// Pay `identity` its current allowance.
    ///
    /// The whole request is one unit of work: any returned error leaves no
    /// trace in storage. A referral code is only considered on the
    /// identity's first request, and an unusable code never fails the
    /// request; the identity simply receives its own code instead.
    pub fn request_tokens(
        env: Env,
        identity: Address,
        referral_code: Option<BytesN<32>>,
    ) -> Result<i128, FaucetError> {
        Self::require_initialized(&env)?;
        identity.require_auth();

        guard::acquire(&env, &identity)?;
        let result = Self::process_request(&env, &identity, referral_code);
        guard::release(&env, &identity);
        result
    }

    // ── View functions ───────────────────────────────────────────────────────

    /// Payout `identity` would receive right now, ignoring eligibility.
    ///
    /// Includes the signup bonus when the identity is referred and has not
    /// been paid yet.
    pub fn estimate_amount(env: Env, identity: Address) -> Result<i128, FaucetError> {
        let admin = AdminClient::new(&env, &storage::admin_contract(&env)?);
        let config = admin.cooldown_config();
        let quote = Self::quote(&env, &admin, &config, env.ledger().timestamp())?;
        Ok(Self::with_signup_bonus(&env, &identity, quote.amount))
    }

    /// Seconds until `identity` may request again under the current
    /// traffic-scaled cooldown; 0 when it may request now.
    pub fn time_until_eligible(env: Env, identity: Address) -> Result<u64, FaucetError> {
        let admin = AdminClient::new(&env, &storage::admin_contract(&env)?);
        let now = env.ledger().timestamp();
        let cooldown = Self::cooldown_for(&env, &admin.cooldown_config(), now);
        Ok(rate_limiter::time_until_eligible(&env, &identity, now, cooldown))
    }

    /// Eligibility, expected payout and lifetime totals for `identity`.
    ///
    /// `can_request` also reflects the pause flag and the blacklist, so it
    /// is false whenever `request_tokens` would return `AccessDenied` or
    /// `RateLimited`. Totals come from the stats contract.
    pub fn status_of(env: Env, identity: Address) -> Result<UserStatus, FaucetError> {
        let admin = AdminClient::new(&env, &storage::admin_contract(&env)?);
        let stats = StatsClient::new(&env, &storage::stats_contract(&env)?);

        let now = env.ledger().timestamp();
        let config = admin.cooldown_config();
        let cooldown = Self::cooldown_for(&env, &config, now);
        let wait = rate_limiter::time_until_eligible(&env, &identity, now, cooldown);
        let quote = Self::quote(&env, &admin, &config, now)?;
        let user_stats = stats.get_user_stats(&identity);

        Ok(UserStatus {
            can_request: wait == 0 && !admin.is_paused() && !admin.is_blacklisted(&identity),
            time_until_eligible: wait,
            estimated_amount: Self::with_signup_bonus(&env, &identity, quote.amount),
            total_received: user_stats.total_received,
            request_count: user_stats.request_count,
        })
    }

    pub fn referral_code_of(env: Env, identity: Address) -> Option<BytesN<32>> {
        referral::code_of(&env, &identity)
    }

    pub fn referral_info_of(env: Env, identity: Address) -> ReferralInfo {
        referral::info_of(&env, &identity)
    }

    pub fn code_owner(env: Env, code: BytesN<32>) -> Option<Address> {
        referral::owner_of(&env, &code)
    }

    pub fn referrer_of(env: Env, identity: Address) -> Option<Address> {
        referral::referrer_of(&env, &identity)
    }

    pub fn last_request_of(env: Env, identity: Address) -> u64 {
        rate_limiter::last_request(&env, &identity)
    }

    pub fn hourly_count(env: Env, hour_index: u64) -> u32 {
        rate_limiter::hourly_count(&env, hour_index)
    }

    /// Requests committed within the admin-configured counting window.
    pub fn get_recent_requests(env: Env) -> Result<u64, FaucetError> {
        let admin = AdminClient::new(&env, &storage::admin_contract(&env)?);
        let window = admin.dynamic_config().counting_window_seconds;
        Ok(rate_limiter::recent_request_count(
            &env,
            env.ledger().timestamp(),
            window,
        ))
    }

    /// Token balance available for distribution.
    pub fn reserve(env: Env) -> Result<i128, FaucetError> {
        let token = token::Client::new(&env, &storage::token(&env)?);
        Ok(token.balance(&env.current_contract_address()))
    }

    pub fn get_config(env: Env) -> Result<FaucetConfig, FaucetError> {
        Ok(FaucetConfig {
            admin: Self::get_admin(env.clone())?,
            token: storage::token(&env)?,
            admin_contract: storage::admin_contract(&env)?,
            stats_contract: storage::stats_contract(&env)?,
        })
    }

    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&INITIALIZED)
    }

    pub fn get_admin(env: Env) -> Result<Address, FaucetError> {
        env.storage()
            .instance()
            .get(&ADMIN)
            .ok_or(FaucetError::NotInitialized)
    }

    // ── Admin functions ──────────────────────────────────────────────────────

    /// Clear one hourly bucket. Returns the discarded count.
    pub fn reset_hourly_count(
        env: Env,
        caller: Address,
        hour_index: u64,
    ) -> Result<u32, FaucetError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        let discarded = rate_limiter::reset_hour(&env, hour_index);
        events::publish_hourly_count_reset(&env, caller, hour_index, discarded);

        Ok(discarded)
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    fn require_initialized(env: &Env) -> Result<(), FaucetError> {
        if !env.storage().instance().has(&INITIALIZED) {
            return Err(FaucetError::NotInitialized);
        }
        Ok(())
    }

    fn require_admin(env: &Env, caller: &Address) -> Result<(), FaucetError> {
        let admin: Address = env
            .storage()
            .instance()
            .get(&ADMIN)
            .ok_or(FaucetError::NotInitialized)?;
        if *caller != admin {
            return Err(FaucetError::Unauthorized);
        }
        Ok(())
    }

    /// Steps of one request, run while the identity's lock is held.
    fn process_request(
        env: &Env,
        identity: &Address,
        referral_code: Option<BytesN<32>>,
    ) -> Result<i128, FaucetError> {
        let admin = AdminClient::new(env, &storage::admin_contract(env)?);

        // 1. Access.
        if admin.is_paused() || admin.is_blacklisted(identity) {
            return Err(FaucetError::AccessDenied);
        }

        // 2. Cooldown, scaled by this hour's traffic before it is counted.
        let now = env.ledger().timestamp();
        let config = admin.cooldown_config();
        let cooldown = Self::cooldown_for(env, &config, now);
        if !rate_limiter::is_eligible(env, identity, now, cooldown) {
            return Err(FaucetError::RateLimited);
        }

        // 3–5. First request: settle referral, issue a code.
        let first_time = rate_limiter::last_request(env, identity) == 0;
        // A request at ledger time 0 leaves `last_request` at 0; the bonus
        // then waits for the first request that actually starts a cooldown.
        let bonus_due = first_time && now > 0;
        if first_time {
            Self::settle_referral(env, identity, referral_code)?;
        }

        // 6. Payout.
        let quote = Self::quote(env, &admin, &config, now)?;
        let (user_bonus, referrer_bonus) = referral::compute_bonuses(env, identity, quote.amount);
        let payout = if bonus_due {
            quote.amount.saturating_add(user_bonus)
        } else {
            quote.amount
        };

        // 7. Reserve.
        let token = token::Client::new(env, &storage::token(env)?);
        let faucet = env.current_contract_address();
        if token.balance(&faucet) < payout {
            return Err(FaucetError::InsufficientReserve);
        }

        // 8. Cooldown starts now.
        rate_limiter::set_last_request(env, identity, now);

        // 9. Pay out.
        if payout > 0 {
            match token.try_transfer(&faucet, identity, &payout) {
                Ok(Ok(())) => {}
                _ => return Err(FaucetError::TransferFailed),
            }
        }

        // 10. Referrer reward, skipped rather than failing the request.
        if let Some(referrer) = referral::referrer_of(env, identity) {
            Self::pay_referrer(env, &token, &referrer, identity, referrer_bonus);
        }

        // 11. Bookkeeping.
        Self::record_stats(env, identity, payout, first_time);
        rate_limiter::record_request(env, now);

        events::publish_request_fulfilled(
            env,
            identity.clone(),
            payout,
            quote.reserve_bps,
            quote.time_bps,
            first_time,
        );

        Ok(payout)
    }

    /// Registers the supplied referral if it is usable, then makes sure the
    /// identity owns a code. A rejected referral only emits a fallback event.
    fn settle_referral(
        env: &Env,
        identity: &Address,
        referral_code: Option<BytesN<32>>,
    ) -> Result<(), FaucetError> {
        if let Some(code) = referral_code {
            match referral::register_referral(env, identity, &code) {
                Ok(_) => {}
                Err(err) if err.is_referral_failure() => {
                    log!(env, "referral rejected, issuing own code", identity.clone(), err as u32);
                    events::publish_referral_fallback(env, identity.clone(), code, err as u32);
                }
                Err(err) => return Err(err),
            }
        }
        if referral::code_of(env, identity).is_none() {
            referral::generate_code(env, identity)?;
        }
        Ok(())
    }

    fn pay_referrer(
        env: &Env,
        token: &token::Client,
        referrer: &Address,
        referee: &Address,
        reward: i128,
    ) {
        if reward <= 0 {
            return;
        }
        let faucet = env.current_contract_address();
        if token.balance(&faucet) < reward {
            log!(env, "referral reward skipped: reserve exhausted", referrer.clone(), reward);
            return;
        }
        match token.try_transfer(&faucet, referrer, &reward) {
            Ok(Ok(())) => {
                referral::record_reward_paid(env, referrer, reward);
                events::publish_referral_reward_paid(env, referrer.clone(), referee.clone(), reward);
            }
            _ => log!(env, "referral reward transfer failed", referrer.clone(), reward),
        }
    }

    fn record_stats(env: &Env, identity: &Address, amount: i128, first_time: bool) {
        let Ok(stats_contract) = storage::stats_contract(env) else {
            return;
        };
        let stats = StatsClient::new(env, &stats_contract);
        let recorded = stats.try_record_request(
            &env.current_contract_address(),
            identity,
            &amount,
            &first_time,
        );
        if !matches!(recorded, Ok(Ok(()))) {
            log!(env, "stats recording failed", identity.clone(), amount);
        }
    }

    fn cooldown_for(env: &Env, config: &CooldownConfig, now: u64) -> u64 {
        if !config.dynamic_enabled {
            return config.base_cooldown;
        }
        let count = rate_limiter::hourly_count(env, rate_limiter::current_hour_index(now));
        rate_limiter::effective_cooldown(config.base_cooldown, count)
    }

    /// Base amount scaled by reserve level and time of day. Both multipliers
    /// are neutral when dynamic policy is off.
    fn quote(
        env: &Env,
        admin: &AdminClient,
        config: &CooldownConfig,
        now: u64,
    ) -> Result<Quote, FaucetError> {
        let base = admin.base_amount();
        let (reserve_bps, time_bps) = if config.dynamic_enabled {
            let token = token::Client::new(env, &storage::token(env)?);
            let reserve = token.balance(&env.current_contract_address());
            (
                amount::reserve_multiplier(reserve, config.max_reserve),
                amount::time_multiplier(now),
            )
        } else {
            (amount::BPS_DENOM, amount::BPS_DENOM)
        };
        Ok(Quote {
            amount: amount::final_amount(base, reserve_bps, time_bps),
            reserve_bps,
            time_bps,
        })
    }

    /// Adds the signup bonus for an identity that has never been paid but is
    /// already registered under a referrer.
    fn with_signup_bonus(env: &Env, identity: &Address, amount: i128) -> i128 {
        if rate_limiter::last_request(env, identity) != 0 || env.ledger().timestamp() == 0 {
            return amount;
        }
        let (user_bonus, _) = referral::compute_bonuses(env, identity, amount);
        amount.saturating_add(user_bonus)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────


#[cfg(test)]
mod test_referral;
