//! # Potluck Contract
//!
//! A fixed-term collective funding pool. Contributions in the native asset
//! and one designated token are accepted until a deadline; afterwards anyone
//! may resolve the pool into exactly one terminal outcome:
//!
//! | Phase     | Entry Point(s)                                     |
//! |-----------|----------------------------------------------------|
//! | Creation  | `__constructor`                                    |
//! | Funding   | [`Potluck::contribute`]                            |
//! | Decision  | [`Potluck::resolve`]                               |
//! | Release   | [`Potluck::claim`]                                 |
//! | Queries   | `get_pool`, `phase`, `total_raised`, `raised`, `contribution_of`, `get_contribution`, `is_claimed`, `contributor_count` |
//!
//! On success the beneficiary pulls everything raised; on failure each
//! contributor pulls back exactly what they put in.
//!
//! ## Architecture
//!
//! Phase rules and accounting live in [`pool`] as pure transitions. Storage
//! access is delegated to [`storage`], token movement to [`asset`]. This file
//! contains only the public entry points: load, transition, persist, then
//! call out. State is always saved before an outbound transfer; a returned
//! `Err` discards every write of the call.

#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, panic_with_error, Address, Env};

pub mod asset;
mod events;
pub mod pool;
mod storage;
mod types;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_contributor_count;
#[cfg(test)]
mod test_events;

use asset::{Asset, AssetAdapter};
use storage::{
    init_pool, load_config, load_contribution, load_pool, load_state, save_contribution,
    save_state,
};
pub use events::{Contributed, PayoutClaimed, PoolCreated, Refunded, Resolved};
pub use types::{AssetKind, CapPolicy, Contribution, Phase, Pool, PoolConfig, PoolState};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    OutOfPhase      = 1,
    InvalidAmount   = 2,
    TooEarly        = 3,
    AlreadyResolved = 4,
    NotBeneficiary  = 5,
    NothingToClaim  = 6,
    AlreadyClaimed  = 7,
    TransferFailed  = 8,
    CapExceeded     = 9,
    Overflow        = 10,
}

#[contract]
pub struct Potluck;

#[contractimpl]
impl Potluck {
    // ─────────────────────────────────────────────────────────
    // Creation
    // ─────────────────────────────────────────────────────────

    /// Fix the pool's parameters for the lifetime of the instance.
    ///
    /// - `native` is the asset contract of the chain's native currency.
    /// - `cap` may be zero (the pool then always succeeds) but not negative.
    /// - A `deadline` already in the past makes the pool immediately resolvable.
    pub fn __constructor(
        env: Env,
        beneficiary: Address,
        token: Address,
        native: Address,
        cap: i128,
        deadline: u64,
        cap_policy: CapPolicy,
    ) {
        if cap < 0 {
            panic_with_error!(&env, Error::InvalidAmount);
        }

        let config = PoolConfig {
            beneficiary,
            token,
            native,
            cap,
            deadline,
            cap_policy,
        };
        init_pool(&env, &config);
        events::pool_created(&env, &config);
    }

    // ─────────────────────────────────────────────────────────
    // Funding
    // ─────────────────────────────────────────────────────────

    /// Contribute `amount` of `asset` while the pool is open.
    ///
    /// The transfer is pulled first and the ledger credited only once it has
    /// landed. Returns the new `total_raised`.
    pub fn contribute(
        env: Env,
        contributor: Address,
        asset: AssetKind,
        amount: i128,
    ) -> Result<i128, Error> {
        contributor.require_auth();

        let config = load_config(&env);
        let now = env.ledger().timestamp();
        pool::check_contribution(&config, &load_state(&env), now, amount)?;

        Asset::for_kind(&env, &config, asset).transfer_in(&contributor, amount)?;

        // Re-read after the external call.
        let mut state = load_state(&env);
        let mut record = load_contribution(&env, &contributor);
        pool::check_contribution(&config, &state, now, amount)?;
        pool::credit(&mut state, &mut record, asset, amount)?;

        save_contribution(&env, &contributor, &record);
        save_state(&env, &state);

        events::contributed(&env, &contributor, asset, amount, state.total_raised);
        Ok(state.total_raised)
    }

    // ─────────────────────────────────────────────────────────
    // Decision
    // ─────────────────────────────────────────────────────────

    /// Freeze the pool into `Succeeded` or `Failed`. Callable by anyone at or
    /// after the deadline, exactly once.
    pub fn resolve(env: Env) -> Result<Phase, Error> {
        let config = load_config(&env);
        let mut state = load_state(&env);

        let phase = pool::resolve(&config, &mut state, env.ledger().timestamp())?;
        save_state(&env, &state);

        events::resolved(&env, phase, state.total_raised);
        Ok(phase)
    }

    // ─────────────────────────────────────────────────────────
    // Release
    // ─────────────────────────────────────────────────────────

    /// Pull the caller's entitlement once the pool is resolved.
    ///
    /// - `Succeeded`: only the beneficiary, once, for everything raised.
    /// - `Failed`: any contributor, once, for their own deposits.
    ///
    /// Returns the total value released.
    pub fn claim(env: Env, caller: Address) -> Result<i128, Error> {
        caller.require_auth();

        let config = load_config(&env);
        let mut state = load_state(&env);

        match state.phase {
            Phase::Open => Err(Error::OutOfPhase),
            Phase::Succeeded => {
                let release = pool::take_payout(&config, &mut state, &caller)?;
                save_state(&env, &state);

                asset::release_to(&env, &config, &caller, &release)?;

                events::payout_claimed(&env, &caller, &release);
                Ok(release.total())
            }
            Phase::Failed => {
                let mut record = load_contribution(&env, &caller);
                let release = pool::take_refund(&state, &mut record)?;
                save_contribution(&env, &caller, &record);

                asset::release_to(&env, &config, &caller, &release)?;

                events::refunded(&env, &caller, &release);
                Ok(release.total())
            }
        }
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    /// Configuration and current state in one view.
    pub fn get_pool(env: Env) -> Pool {
        load_pool(&env)
    }

    pub fn phase(env: Env) -> Phase {
        load_state(&env).phase
    }

    pub fn total_raised(env: Env) -> i128 {
        load_state(&env).total_raised
    }

    /// Amount raised in a single asset.
    pub fn raised(env: Env, asset: AssetKind) -> i128 {
        load_state(&env).raised(asset)
    }

    /// Amount `contributor` has put in with `asset`; zero if none.
    pub fn contribution_of(env: Env, contributor: Address, asset: AssetKind) -> i128 {
        load_contribution(&env, &contributor).amount(asset)
    }

    pub fn get_contribution(env: Env, contributor: Address) -> Contribution {
        load_contribution(&env, &contributor)
    }

    /// Whether `contributor`'s claim has been paid out: the pot for the
    /// beneficiary of a succeeded pool, the refund for everyone else.
    pub fn is_claimed(env: Env, contributor: Address) -> bool {
        let state = load_state(&env);
        if state.phase == Phase::Succeeded && contributor == load_config(&env).beneficiary {
            return state.payout_claimed;
        }
        load_contribution(&env, &contributor).claimed
    }

    /// Distinct accounts with at least one accepted contribution.
    pub fn contributor_count(env: Env) -> u32 {
        load_state(&env).contributor_count
    }
}
