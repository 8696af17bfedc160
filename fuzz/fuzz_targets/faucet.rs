#![no_main]

use arbitrary::Arbitrary;
use common::DynamicConfig;
use faucet::{FaucetContract, FaucetContractClient};
use faucet_admin::{FaucetAdminContract, FaucetAdminContractClient};
use faucet_stats::{FaucetStatsContract, FaucetStatsContractClient};
use libfuzzer_sys::fuzz_target;
use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    token::{Client as TokenClient, StellarAssetClient},
    Address, BytesN, Env,
};

const USERS: usize = 6;

#[derive(Arbitrary, Debug)]
pub struct Policy {
    base_amount: u32,
    base_cooldown: u16,
    dynamic: bool,
    max_reserve: u32,
    funding: u32,
}

#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    Request { user: u8 },
    RequestWithCode { user: u8, referrer: u8 },
    RequestWithGarbage { user: u8, code: [u8; 32] },
    Advance { seconds: u16 },
    Pause,
    Unpause,
    Blacklist { user: u8, on: bool },
    ResetHour,
}

fuzz_target!(|input: (Policy, Vec<FuzzAction>)| {
    let (policy, actions) = input;
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(1_700_000_000);

    let admin = Address::generate(&env);
    let sac = env.register_stellar_asset_contract_v2(Address::generate(&env));

    let policy_id = env.register(FaucetAdminContract, ());
    let policy_client = FaucetAdminContractClient::new(&env, &policy_id);
    let config = DynamicConfig {
        enabled: policy.dynamic,
        max_reserve: policy.max_reserve as i128,
        counting_window_seconds: 3_600,
    };
    if policy_client
        .try_initialize(
            &admin,
            &(policy.base_amount as i128),
            &(policy.base_cooldown as u64),
            &config,
        )
        .is_err()
    {
        return;
    }

    let faucet_id = env.register(FaucetContract, ());
    let stats_id = env.register(FaucetStatsContract, ());
    FaucetStatsContractClient::new(&env, &stats_id).initialize(&admin, &faucet_id);

    let client = FaucetContractClient::new(&env, &faucet_id);
    client.initialize(&admin, &sac.address(), &policy_id, &stats_id);
    let funding = policy.funding as i128;
    if funding > 0 {
        StellarAssetClient::new(&env, &sac.address()).mint(&faucet_id, &funding);
    }
    let token = TokenClient::new(&env, &sac.address());

    let users: Vec<Address> = (0..USERS).map(|_| Address::generate(&env)).collect();
    let pick = |i: u8| &users[i as usize % USERS];

    for action in actions {
        match action {
            FuzzAction::Request { user } => {
                let _ = client.try_request_tokens(pick(user), &None);
            }
            FuzzAction::RequestWithCode { user, referrer } => {
                let code = client.referral_code_of(pick(referrer));
                let _ = client.try_request_tokens(pick(user), &code);
            }
            FuzzAction::RequestWithGarbage { user, code } => {
                let code = BytesN::from_array(&env, &code);
                let _ = client.try_request_tokens(pick(user), &Some(code));
            }
            FuzzAction::Advance { seconds } => {
                let now = env.ledger().timestamp();
                env.ledger().set_timestamp(now + seconds as u64);
            }
            FuzzAction::Pause => policy_client.pause(&admin),
            FuzzAction::Unpause => policy_client.unpause(&admin),
            FuzzAction::Blacklist { user, on } => {
                policy_client.set_blacklisted(&admin, pick(user), &on);
            }
            FuzzAction::ResetHour => {
                let hour = env.ledger().timestamp() / 3_600;
                let _ = client.try_reset_hourly_count(&admin, &hour);
            }
        }

        // Tokens only ever move from the reserve to users.
        let paid: i128 = users.iter().map(|u| token.balance(u)).sum();
        assert_eq!(client.reserve() + paid, funding);

        for user in &users {
            if let Some(referrer) = client.referrer_of(user) {
                assert_ne!(&referrer, user);
            }
        }
    }
});
