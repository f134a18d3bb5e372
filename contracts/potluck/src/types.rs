//! # Types
//!
//! Shared data structures used across all modules of the Potluck contract.
//!
//! ## Config / State split
//!
//! The pool is stored as two instance entries:
//!
//! - [`PoolConfig`] — written once by the constructor; never mutated.
//! - [`PoolState`] — written on every accepted contribution, on resolution
//!   and on the beneficiary payout.
//!
//! Per-contributor [`Contribution`] records live in persistent storage, one
//! entry per account. The public API exposes the reconstructed [`Pool`].
//!
//! ## Phase as a Finite-State Machine
//!
//! ```text
//! Open ──► Succeeded
//!   └────► Failed
//! ```
//!
//! The transition happens exactly once, in `resolve`. Both terminal phases
//! are absorbing.

use soroban_sdk::{contracttype, Address};

/// Lifecycle phase of the pool.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    /// Accepting contributions until the deadline.
    Open,
    /// Cap reached at resolution; funds belong to the beneficiary.
    Succeeded,
    /// Cap missed at resolution; contributors are refunded.
    Failed,
}

/// The two assets a pool accepts.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AssetKind {
    /// The chain's native asset, reached through its asset contract.
    Native,
    /// The designated fungible token.
    Token,
}

/// How the cap is applied while the pool is open.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CapPolicy {
    /// Accept any amount; compare `total_raised >= cap` at resolution.
    Target,
    /// Reject a contribution that would push `total_raised` past `cap`.
    HardCap,
}

/// Immutable pool configuration, written once at construction.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolConfig {
    pub beneficiary: Address,
    pub token: Address,
    pub native: Address,
    pub cap: i128,
    pub deadline: u64,
    pub cap_policy: CapPolicy,
}

/// Mutable pool state.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolState {
    pub phase: Phase,
    /// Sum of both per-asset totals.
    pub total_raised: i128,
    pub raised_native: i128,
    pub raised_token: i128,
    /// Number of distinct accounts with an accepted contribution.
    pub contributor_count: u32,
    /// Set once the beneficiary payout has been released.
    pub payout_claimed: bool,
}

/// Per-contributor ledger record.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Contribution {
    pub native: i128,
    pub token: i128,
    /// Set once the refund has been released.
    pub claimed: bool,
}

/// Full view of the pool.
///
/// Used as the public API return type; reconstructed internally from
/// the split `PoolConfig` + `PoolState` storage entries.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Pool {
    /// Recipient of the funds on success.
    pub beneficiary: Address,
    /// Address of the designated token contract.
    pub token: Address,
    /// Address of the native asset contract.
    pub native: Address,
    /// Funding target compared against `total_raised` at resolution.
    pub cap: i128,
    /// Ledger timestamp at which contributions close and resolution opens.
    pub deadline: u64,
    pub cap_policy: CapPolicy,
    pub phase: Phase,
    pub total_raised: i128,
    pub raised_native: i128,
    pub raised_token: i128,
    pub contributor_count: u32,
    pub payout_claimed: bool,
}

impl PoolState {
    /// State of a freshly constructed pool.
    pub fn open() -> Self {
        PoolState {
            phase: Phase::Open,
            total_raised: 0,
            raised_native: 0,
            raised_token: 0,
            contributor_count: 0,
            payout_claimed: false,
        }
    }

    pub fn raised(&self, asset: AssetKind) -> i128 {
        match asset {
            AssetKind::Native => self.raised_native,
            AssetKind::Token => self.raised_token,
        }
    }
}

impl Contribution {
    pub fn amount(&self, asset: AssetKind) -> i128 {
        match asset {
            AssetKind::Native => self.native,
            AssetKind::Token => self.token,
        }
    }

    /// Value across both assets, in the pool's single accounting unit.
    pub fn total(&self) -> i128 {
        self.native + self.token
    }

    pub fn is_empty(&self) -> bool {
        self.native == 0 && self.token == 0
    }
}
