extern crate std;

use soroban_sdk::{testutils::Address as _, token, Address, Env};

use crate::invariants::assert_contributor_count_monotonic;
use crate::{AssetKind, CapPolicy, Potluck, PotluckClient};

fn setup() -> (
    Env,
    PotluckClient<'static>,
    token::StellarAssetClient<'static>,
    token::StellarAssetClient<'static>,
) {
    let env = Env::default();
    env.mock_all_auths();
    let beneficiary = Address::generate(&env);
    let asset_admin = Address::generate(&env);
    let token = env.register_stellar_asset_contract_v2(asset_admin.clone());
    let native = env.register_stellar_asset_contract_v2(asset_admin);
    let contract_id = env.register(
        Potluck,
        (
            beneficiary,
            token.address(),
            native.address(),
            10_000i128,
            env.ledger().timestamp() + 86_400,
            CapPolicy::Target,
        ),
    );
    let client = PotluckClient::new(&env, &contract_id);
    let token_sac = token::StellarAssetClient::new(&env, &token.address());
    let native_sac = token::StellarAssetClient::new(&env, &native.address());
    (env, client, token_sac, native_sac)
}

#[test]
fn test_contributor_count_initialized_to_zero() {
    let (_env, client, _, _) = setup();
    assert_eq!(client.contributor_count(), 0);
    assert_eq!(client.get_pool().contributor_count, 0);
}

#[test]
fn test_contributor_count_increments_for_new_contributor() {
    let (env, client, token_sac, _) = setup();
    let contributor = Address::generate(&env);
    token_sac.mint(&contributor, &1_000i128);

    client.contribute(&contributor, &AssetKind::Token, &500i128);

    assert_eq!(client.contributor_count(), 1);
}

#[test]
fn test_contributor_count_stays_same_for_repeat_contributor() {
    let (env, client, token_sac, _) = setup();
    let contributor = Address::generate(&env);
    token_sac.mint(&contributor, &2_000i128);

    client.contribute(&contributor, &AssetKind::Token, &500i128);
    assert_eq!(client.contributor_count(), 1);

    client.contribute(&contributor, &AssetKind::Token, &300i128);
    assert_eq!(client.contributor_count(), 1);
}

#[test]
fn test_contributor_count_same_contributor_both_assets() {
    let (env, client, token_sac, native_sac) = setup();
    let contributor = Address::generate(&env);
    token_sac.mint(&contributor, &1_000i128);
    native_sac.mint(&contributor, &1_000i128);

    client.contribute(&contributor, &AssetKind::Token, &500i128);
    client.contribute(&contributor, &AssetKind::Native, &300i128);

    // Accounts are counted, not (account, asset) pairs.
    assert_eq!(client.contributor_count(), 1);
}

#[test]
fn test_contributor_count_ignores_rejected_contributions() {
    let (env, client, _, _) = setup();
    let contributor = Address::generate(&env);

    assert!(client
        .try_contribute(&contributor, &AssetKind::Token, &0i128)
        .is_err());
    assert!(client
        .try_contribute(&contributor, &AssetKind::Native, &100i128)
        .is_err());

    assert_eq!(client.contributor_count(), 0);
}

#[test]
fn test_contributor_count_complex_scenario() {
    let (env, client, token_sac, native_sac) = setup();
    let c1 = Address::generate(&env);
    let c2 = Address::generate(&env);
    let c3 = Address::generate(&env);

    for c in [&c1, &c2, &c3] {
        token_sac.mint(c, &5_000i128);
        native_sac.mint(c, &5_000i128);
    }

    let steps: [(&Address, AssetKind, u32); 7] = [
        (&c1, AssetKind::Token, 1),
        (&c1, AssetKind::Token, 1),
        (&c2, AssetKind::Token, 2),
        (&c1, AssetKind::Native, 2),
        (&c3, AssetKind::Native, 3),
        (&c2, AssetKind::Native, 3),
        (&c3, AssetKind::Token, 3),
    ];

    let mut previous = 0;
    for (contributor, asset, expected) in steps {
        client.contribute(contributor, &asset, &100i128);
        let count = client.contributor_count();
        assert_contributor_count_monotonic(previous, count);
        assert_eq!(count, expected);
        previous = count;
    }

    assert_eq!(client.total_raised(), 700);
}
