extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events, Ledger},
    token, vec, Address, Env, IntoVal, TryIntoVal,
};

use crate::events::{Contributed, PayoutClaimed, PoolCreated, Refunded, Resolved};
use crate::{AssetKind, CapPolicy, Phase, Potluck, PotluckClient};

const DEADLINE: u64 = 1_000;

fn create_token<'a>(env: &Env, admin: &Address) -> token::Client<'a> {
    let addr = env.register_stellar_asset_contract_v2(admin.clone());
    token::Client::new(env, &addr.address())
}

fn setup(
    cap: i128,
) -> (
    Env,
    PotluckClient<'static>,
    Address,
    token::Client<'static>,
    token::Client<'static>,
) {
    let env = Env::default();
    env.mock_all_auths();
    let beneficiary = Address::generate(&env);
    let asset_admin = Address::generate(&env);
    let token = create_token(&env, &asset_admin);
    let native = create_token(&env, &asset_admin);
    let contract_id = env.register(
        Potluck,
        (
            beneficiary.clone(),
            token.address.clone(),
            native.address.clone(),
            cap,
            DEADLINE,
            CapPolicy::Target,
        ),
    );
    let client = PotluckClient::new(&env, &contract_id);
    (env, client, beneficiary, token, native)
}

#[test]
fn test_pool_created_event() {
    let env = Env::default();
    env.mock_all_auths();
    let beneficiary = Address::generate(&env);
    let asset_admin = Address::generate(&env);
    let token = create_token(&env, &asset_admin);
    let native = create_token(&env, &asset_admin);

    let contract_id = env.register(
        Potluck,
        (
            beneficiary.clone(),
            token.address.clone(),
            native.address.clone(),
            500i128,
            DEADLINE,
            CapPolicy::HardCap,
        ),
    );

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("created"),)
    assert_eq!(last_event.0, contract_id);
    let expected_topics = vec![&env, symbol_short!("created").into_val(&env)];
    assert_eq!(last_event.1, expected_topics);

    let event_data: PoolCreated = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        PoolCreated {
            beneficiary,
            token: token.address.clone(),
            native: native.address.clone(),
            cap: 500,
            deadline: DEADLINE,
        }
    );
}

#[test]
fn test_contributed_event() {
    let (env, client, _, token, _) = setup(1_000);
    let contributor = Address::generate(&env);
    token::StellarAssetClient::new(&env, &token.address).mint(&contributor, &300);

    client.contribute(&contributor, &AssetKind::Token, &120);
    client.contribute(&contributor, &AssetKind::Token, &80);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("contrib"), contributor)
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("contrib").into_val(&env),
        contributor.clone().into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: Contributed = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        Contributed {
            contributor: contributor.clone(),
            asset: AssetKind::Token,
            amount: 80,
            total_raised: 200,
        }
    );
}

#[test]
fn test_resolved_event() {
    let (env, client, _, _, native) = setup(100);
    let contributor = Address::generate(&env);
    token::StellarAssetClient::new(&env, &native.address).mint(&contributor, &100);
    client.contribute(&contributor, &AssetKind::Native, &100);

    env.ledger().with_mut(|li| li.timestamp = DEADLINE);
    client.resolve();

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![&env, symbol_short!("resolved").into_val(&env)];
    assert_eq!(last_event.1, expected_topics);

    let event_data: Resolved = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        Resolved {
            phase: Phase::Succeeded,
            total_raised: 100,
        }
    );
}

#[test]
fn test_payout_claimed_event() {
    let (env, client, beneficiary, token, native) = setup(100);
    let contributor = Address::generate(&env);
    token::StellarAssetClient::new(&env, &token.address).mint(&contributor, &75);
    token::StellarAssetClient::new(&env, &native.address).mint(&contributor, &25);
    client.contribute(&contributor, &AssetKind::Token, &75);
    client.contribute(&contributor, &AssetKind::Native, &25);

    env.ledger().with_mut(|li| li.timestamp = DEADLINE);
    client.resolve();
    client.claim(&beneficiary);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("payout"), beneficiary)
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("payout").into_val(&env),
        beneficiary.clone().into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: PayoutClaimed = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        PayoutClaimed {
            beneficiary: beneficiary.clone(),
            native: 25,
            token: 75,
            total: 100,
        }
    );
}

#[test]
fn test_refunded_event() {
    let (env, client, _, token, _) = setup(100);
    let contributor = Address::generate(&env);
    token::StellarAssetClient::new(&env, &token.address).mint(&contributor, &40);
    client.contribute(&contributor, &AssetKind::Token, &40);

    env.ledger().with_mut(|li| li.timestamp = DEADLINE + 1);
    client.resolve();
    client.claim(&contributor);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("refunded"), contributor)
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("refunded").into_val(&env),
        contributor.clone().into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: Refunded = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        Refunded {
            contributor: contributor.clone(),
            native: 0,
            token: 40,
            total: 40,
        }
    );
}
