extern crate std;

use soroban_sdk::{
    testutils::{Address as _, BytesN as _},
    Address, BytesN, Env,
};
use std::collections::BTreeSet;

use crate::referral::{self, ReferralRecord};
use crate::storage::DataKey;
use crate::{FaucetContract, FaucetError};

fn setup() -> (Env, Address) {
    let env = Env::default();
    let faucet = env.register(FaucetContract, ());
    (env, faucet)
}

#[test]
fn test_generated_codes_are_unique() {
    let (env, faucet) = setup();
    let mut seen = BTreeSet::new();

    // One frame per issuance, as each lands in its own request.
    for _ in 0..25 {
        let identity = Address::generate(&env);
        let code = env.as_contract(&faucet, || referral::generate_code(&env, &identity).unwrap());

        assert!(seen.insert(code.to_array()));
        env.as_contract(&faucet, || {
            assert_eq!(referral::owner_of(&env, &code), Some(identity.clone()));
            assert_eq!(referral::code_of(&env, &identity), Some(code.clone()));
        });
    }
}

#[test]
fn test_second_code_for_same_identity_rejected() {
    let (env, faucet) = setup();
    let alice = Address::generate(&env);

    env.as_contract(&faucet, || {
        let code = referral::generate_code(&env, &alice).unwrap();
        assert_eq!(
            referral::generate_code(&env, &alice),
            Err(FaucetError::CodeAlreadyAssigned)
        );
        assert_eq!(referral::code_of(&env, &alice), Some(code));
    });
}

#[test]
fn test_collision_rehashes_without_overwriting_owner() {
    let (env, faucet) = setup();
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    let entropy = BytesN::<32>::random(&env);

    env.as_contract(&faucet, || {
        // Occupy bob's first candidate.
        let taken = referral::derive_code(&env, &bob, &entropy, 0);
        env.storage()
            .persistent()
            .set(&DataKey::CodeOwner(taken.clone()), &alice);

        let code = referral::assign_code(&env, &bob, &entropy).unwrap();

        assert_eq!(code, referral::derive_code(&env, &bob, &entropy, 1));
        assert_eq!(referral::owner_of(&env, &taken), Some(alice.clone()));
        assert_eq!(referral::owner_of(&env, &code), Some(bob.clone()));
    });
}

#[test]
fn test_register_links_referee_to_code_owner() {
    let (env, faucet) = setup();
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);

    env.as_contract(&faucet, || {
        let code = referral::generate_code(&env, &alice).unwrap();
        let referrer = referral::register_referral(&env, &bob, &code).unwrap();

        assert_eq!(referrer, alice);
        assert_eq!(referral::referrer_of(&env, &bob), Some(alice.clone()));
        assert!(referral::load(&env, &bob).has_claimed_signup_bonus);
        assert_eq!(referral::info_of(&env, &alice).referral_count, 1);
        // Registration alone does not issue the referee a code.
        assert_eq!(referral::code_of(&env, &bob), None);
    });
}

#[test]
fn test_unknown_code_rejected() {
    let (env, faucet) = setup();
    let bob = Address::generate(&env);

    env.as_contract(&faucet, || {
        let result = referral::register_referral(&env, &bob, &BytesN::random(&env));
        assert_eq!(result, Err(FaucetError::ReferralCodeNotFound));
        assert_eq!(referral::load(&env, &bob), ReferralRecord::default());
    });
}

#[test]
fn test_self_referral_rejected() {
    let (env, faucet) = setup();
    let alice = Address::generate(&env);

    env.as_contract(&faucet, || {
        let code = referral::generate_code(&env, &alice).unwrap();
        assert_eq!(
            referral::register_referral(&env, &alice, &code),
            Err(FaucetError::SelfReferral)
        );
        assert_eq!(referral::referrer_of(&env, &alice), None);
        assert_eq!(referral::info_of(&env, &alice).referral_count, 0);
    });
}

#[test]
fn test_owner_without_matching_code_is_not_eligible() {
    let (env, faucet) = setup();
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    let orphan = BytesN::<32>::random(&env);

    env.as_contract(&faucet, || {
        env.storage()
            .persistent()
            .set(&DataKey::CodeOwner(orphan.clone()), &alice);

        assert_eq!(
            referral::register_referral(&env, &bob, &orphan),
            Err(FaucetError::ReferrerNotEligible)
        );
        assert_eq!(referral::referrer_of(&env, &bob), None);
    });
}

#[test]
fn test_double_registration_rejected_without_side_effects() {
    let (env, faucet) = setup();
    let alice = Address::generate(&env);
    let carol = Address::generate(&env);
    let bob = Address::generate(&env);

    env.as_contract(&faucet, || {
        let alice_code = referral::generate_code(&env, &alice).unwrap();
        let carol_code = referral::generate_code(&env, &carol).unwrap();
        referral::register_referral(&env, &bob, &alice_code).unwrap();

        assert_eq!(
            referral::register_referral(&env, &bob, &carol_code),
            Err(FaucetError::AlreadyReferred)
        );
        assert_eq!(
            referral::register_referral(&env, &bob, &alice_code),
            Err(FaucetError::AlreadyReferred)
        );

        assert_eq!(referral::referrer_of(&env, &bob), Some(alice.clone()));
        assert_eq!(referral::info_of(&env, &alice).referral_count, 1);
        assert_eq!(referral::info_of(&env, &carol).referral_count, 0);
    });
}

#[test]
fn test_bonuses_only_for_referred_identities() {
    let (env, faucet) = setup();
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);

    env.as_contract(&faucet, || {
        assert_eq!(referral::compute_bonuses(&env, &alice, 100), (0, 0));

        let code = referral::generate_code(&env, &alice).unwrap();
        referral::register_referral(&env, &bob, &code).unwrap();

        assert_eq!(referral::compute_bonuses(&env, &bob, 100), (20, 10));
        // Truncated toward zero.
        assert_eq!(referral::compute_bonuses(&env, &bob, 9), (1, 0));
        assert_eq!(referral::compute_bonuses(&env, &alice, 100), (0, 0));
    });
}

#[test]
fn test_reward_totals_accumulate() {
    let (env, faucet) = setup();
    let alice = Address::generate(&env);

    env.as_contract(&faucet, || {
        referral::record_reward_paid(&env, &alice, 10);
        referral::record_reward_paid(&env, &alice, 12);
        assert_eq!(referral::info_of(&env, &alice).total_rewards_paid, 22);
    });
}

