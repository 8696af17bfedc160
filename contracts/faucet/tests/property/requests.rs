#![allow(clippy::unwrap_used, clippy::expect_used, clippy::arithmetic_side_effects)]
//! Property-based state machine tests for `request_tokens`.
//!
//! Invariants tested:
//! - A request succeeds exactly when the identity's cooldown has elapsed
//! - A rejected request changes neither the ledger nor the faucet's records
//! - Tokens are conserved: reserve + everything paid out == initial funding
//! - A referred signup always pays the referee 120 % and the referrer 10 %

use common::DynamicConfig;
use faucet::{FaucetContract, FaucetContractClient, FaucetError};
use faucet_admin::{FaucetAdminContract, FaucetAdminContractClient};
use faucet_stats::{FaucetStatsContract, FaucetStatsContractClient};
use proptest::prelude::*;
use soroban_sdk::testutils::{Address as _, Ledger as _};
use soroban_sdk::token::{Client as TokenClient, StellarAssetClient};
use soroban_sdk::{Address, Env};

const T0: u64 = 20_000 * 86_400 + 9 * 3_600;
const BASE: i128 = 100;
const COOLDOWN: u64 = 600;
const FUNDING: i128 = 1_000_000_000;

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Static policy so payouts and cooldowns are predictable.
fn setup() -> (Env, FaucetContractClient<'static>, TokenClient<'static>) {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(T0);

    let admin = Address::generate(&env);
    let sac = env.register_stellar_asset_contract_v2(Address::generate(&env));

    let policy_id = env.register(FaucetAdminContract, ());
    FaucetAdminContractClient::new(&env, &policy_id).initialize(
        &admin,
        &BASE,
        &COOLDOWN,
        &DynamicConfig {
            enabled: false,
            max_reserve: 0,
            counting_window_seconds: 3_600,
        },
    );

    let faucet_id = env.register(FaucetContract, ());
    let stats_id = env.register(FaucetStatsContract, ());
    FaucetStatsContractClient::new(&env, &stats_id).initialize(&admin, &faucet_id);

    let client = FaucetContractClient::new(&env, &faucet_id);
    client.initialize(&admin, &sac.address(), &policy_id, &stats_id);
    StellarAssetClient::new(&env, &sac.address()).mint(&faucet_id, &FUNDING);

    let token = TokenClient::new(&env, &sac.address());
    (env, client, token)
}

// ── proptest! blocks ──────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Random interleavings of identities and clock advances match a simple
    /// model of per-identity cooldowns.
    #[test]
    fn prop_requests_follow_cooldown_model(
        steps in prop::collection::vec((0usize..4, 0u64..(2 * COOLDOWN)), 1..24),
    ) {
        let (env, client, token) = setup();
        let users: Vec<Address> = (0..4).map(|_| Address::generate(&env)).collect();
        let mut last: Vec<Option<u64>> = vec![None; users.len()];
        let mut now = T0;

        for (who, advance) in steps {
            now += advance;
            env.ledger().set_timestamp(now);
            let user = &users[who];
            let balance_before = token.balance(user);

            let eligible = last[who].map_or(true, |at| now >= at + COOLDOWN);
            let result = client.try_request_tokens(user, &None);

            if eligible {
                prop_assert_eq!(result.unwrap().unwrap(), BASE);
                prop_assert_eq!(token.balance(user), balance_before + BASE);
                last[who] = Some(now);
            } else {
                prop_assert_eq!(result.unwrap_err().unwrap(), FaucetError::RateLimited);
                prop_assert_eq!(token.balance(user), balance_before);
            }
            prop_assert_eq!(client.last_request_of(user), last[who].unwrap_or(0));
        }

        let paid: i128 = users.iter().map(|u| token.balance(u)).sum();
        prop_assert_eq!(client.reserve() + paid, FUNDING);
    }

    /// Any request inside the cooldown window is rejected without mutation.
    #[test]
    fn prop_early_request_never_mutates(gap in 0u64..COOLDOWN) {
        let (env, client, token) = setup();
        let user = Address::generate(&env);
        client.request_tokens(&user, &None);
        let hour = T0 / 3_600;

        env.ledger().set_timestamp(T0 + gap);
        let result = client.try_request_tokens(&user, &None);

        prop_assert_eq!(result.unwrap_err().unwrap(), FaucetError::RateLimited);
        prop_assert_eq!(client.last_request_of(&user), T0);
        prop_assert_eq!(client.hourly_count(&hour), 1);
        prop_assert_eq!(token.balance(&user), BASE);
        prop_assert_eq!(client.time_until_eligible(&user), COOLDOWN - gap);
    }

    /// Chains of referrals: each referee gets the signup bonus and each
    /// referrer is credited exactly once per referee request.
    #[test]
    fn prop_referral_chain_pays_bonus_and_reward(len in 1usize..6) {
        let (env, client, token) = setup();
        let mut chain = vec![Address::generate(&env)];
        client.request_tokens(&chain[0], &None);

        for i in 0..len {
            let code = client.referral_code_of(&chain[i]).unwrap();
            let next = Address::generate(&env);
            prop_assert_eq!(client.request_tokens(&next, &Some(code)), BASE * 12 / 10);
            prop_assert_eq!(client.referrer_of(&next), Some(chain[i].clone()));
            chain.push(next);
        }

        for (i, user) in chain.iter().enumerate() {
            let info = client.referral_info_of(user);
            let referred = i < len;
            prop_assert_eq!(info.referral_count, referred as u32);
            prop_assert_eq!(info.total_rewards_paid, if referred { BASE / 10 } else { 0 });
        }

        let paid: i128 = chain.iter().map(|u| token.balance(u)).sum();
        prop_assert_eq!(client.reserve() + paid, FUNDING);
    }
}
