//! # Storage
//!
//! Provides typed helpers over Soroban's two storage tiers used by Potluck:
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key      | Type         | Description                        |
//! |----------|--------------|------------------------------------|
//! | `Config` | `PoolConfig` | Immutable constructor parameters   |
//! | `State`  | `PoolState`  | Phase, totals, payout flag         |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                     | Type           | Description                  |
//! |-------------------------|----------------|------------------------------|
//! | `Contribution(address)` | `Contribution` | Per-contributor ledger entry |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days remaining.

use soroban_sdk::{contracttype, Address, Env};

use crate::types::{Contribution, Pool, PoolConfig, PoolState};

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage: bump by 7 days when below 1 day remaining.
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

/// Persistent storage: bump by 30 days when below 7 days remaining.
const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

/// All contract storage keys.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Immutable pool configuration (Instance).
    Config,
    /// Mutable pool state (Instance).
    State,
    /// Ledger entry keyed by contributor (Persistent).
    Contribution(Address),
}

// ── Instance Storage Helpers ─────────────────────────────────────────

/// Extend instance storage TTL if it falls below the threshold.
fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

/// Write the configuration and the initial open state. Called once, by the constructor.
pub fn init_pool(env: &Env, config: &PoolConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    env.storage()
        .instance()
        .set(&DataKey::State, &PoolState::open());
    bump_instance(env);
}

/// Load the immutable configuration.
/// Panics if the contract was never constructed.
pub fn load_config(env: &Env) -> PoolConfig {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .expect("pool not initialised")
}

/// Load the mutable state.
pub fn load_state(env: &Env) -> PoolState {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::State)
        .expect("pool not initialised")
}

pub fn save_state(env: &Env, state: &PoolState) {
    env.storage().instance().set(&DataKey::State, state);
    bump_instance(env);
}

/// Load the full `Pool` by combining config and state.
pub fn load_pool(env: &Env) -> Pool {
    let config = load_config(env);
    let state = load_state(env);
    Pool {
        beneficiary: config.beneficiary,
        token: config.token,
        native: config.native,
        cap: config.cap,
        deadline: config.deadline,
        cap_policy: config.cap_policy,
        phase: state.phase,
        total_raised: state.total_raised,
        raised_native: state.raised_native,
        raised_token: state.raised_token,
        contributor_count: state.contributor_count,
        payout_claimed: state.payout_claimed,
    }
}

// ── Persistent Storage Helpers ───────────────────────────────────────

/// Extend the TTL for a persistent storage key.
fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

/// Load a contributor's ledger entry; an account that never contributed
/// reads as an empty record.
pub fn load_contribution(env: &Env, contributor: &Address) -> Contribution {
    let key = DataKey::Contribution(contributor.clone());
    match env.storage().persistent().get::<_, Contribution>(&key) {
        Some(record) => {
            bump_persistent(env, &key);
            record
        }
        None => Contribution::default(),
    }
}

pub fn save_contribution(env: &Env, contributor: &Address, record: &Contribution) {
    let key = DataKey::Contribution(contributor.clone());
    env.storage().persistent().set(&key, record);
    bump_persistent(env, &key);
}
