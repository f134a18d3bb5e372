//! # Events
//!
//! Every state change is published under a short symbol topic. Rejected
//! calls publish nothing.
//!
//! | Topic      | Extra topic | Data             |
//! |------------|-------------|------------------|
//! | `created`  | —           | [`PoolCreated`]   |
//! | `contrib`  | contributor | [`Contributed`]   |
//! | `resolved` | —           | [`Resolved`]      |
//! | `payout`   | beneficiary | [`PayoutClaimed`] |
//! | `refunded` | contributor | [`Refunded`]      |

use soroban_sdk::{contracttype, symbol_short, Address, Env};

use crate::pool::Release;
use crate::types::{AssetKind, Phase, PoolConfig};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolCreated {
    pub beneficiary: Address,
    pub token: Address,
    pub native: Address,
    pub cap: i128,
    pub deadline: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Contributed {
    pub contributor: Address,
    pub asset: AssetKind,
    pub amount: i128,
    pub total_raised: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Resolved {
    pub phase: Phase,
    pub total_raised: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PayoutClaimed {
    pub beneficiary: Address,
    pub native: i128,
    pub token: i128,
    pub total: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Refunded {
    pub contributor: Address,
    pub native: i128,
    pub token: i128,
    pub total: i128,
}

pub fn pool_created(env: &Env, config: &PoolConfig) {
    env.events().publish(
        (symbol_short!("created"),),
        PoolCreated {
            beneficiary: config.beneficiary.clone(),
            token: config.token.clone(),
            native: config.native.clone(),
            cap: config.cap,
            deadline: config.deadline,
        },
    );
}

pub fn contributed(
    env: &Env,
    contributor: &Address,
    asset: AssetKind,
    amount: i128,
    total_raised: i128,
) {
    env.events().publish(
        (symbol_short!("contrib"), contributor.clone()),
        Contributed {
            contributor: contributor.clone(),
            asset,
            amount,
            total_raised,
        },
    );
}

pub fn resolved(env: &Env, phase: Phase, total_raised: i128) {
    env.events().publish(
        (symbol_short!("resolved"),),
        Resolved {
            phase,
            total_raised,
        },
    );
}

pub fn payout_claimed(env: &Env, beneficiary: &Address, release: &Release) {
    env.events().publish(
        (symbol_short!("payout"), beneficiary.clone()),
        PayoutClaimed {
            beneficiary: beneficiary.clone(),
            native: release.native,
            token: release.token,
            total: release.total(),
        },
    );
}

pub fn refunded(env: &Env, contributor: &Address, release: &Release) {
    env.events().publish(
        (symbol_short!("refunded"), contributor.clone()),
        Refunded {
            contributor: contributor.clone(),
            native: release.native,
            token: release.token,
            total: release.total(),
        },
    );
}
