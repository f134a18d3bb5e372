//! # Pool state machine
//!
//! Pure transition functions over [`PoolConfig`], [`PoolState`] and
//! [`Contribution`]. Nothing here touches storage or calls another contract;
//! the entry points in `lib.rs` load values, run a transition, persist the
//! result and only then talk to the asset adapter.
//!
//! Every function either returns an error without having mutated its
//! arguments, or applies its whole effect.

use soroban_sdk::Address;

use crate::types::{AssetKind, CapPolicy, Contribution, Phase, PoolConfig, PoolState};
use crate::Error;

/// Amounts released by a claim, per asset.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Release {
    pub native: i128,
    pub token: i128,
}

impl Release {
    pub fn total(&self) -> i128 {
        self.native + self.token
    }
}

/// Validate a contribution without applying it.
///
/// `now` is the ledger timestamp read once for the call; any call observed at
/// or after the deadline is rejected.
pub fn check_contribution(
    config: &PoolConfig,
    state: &PoolState,
    now: u64,
    amount: i128,
) -> Result<(), Error> {
    if state.phase != Phase::Open || now >= config.deadline {
        return Err(Error::OutOfPhase);
    }
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }
    let new_total = state
        .total_raised
        .checked_add(amount)
        .ok_or(Error::Overflow)?;
    if config.cap_policy == CapPolicy::HardCap && new_total > config.cap {
        return Err(Error::CapExceeded);
    }
    Ok(())
}

/// Credit an accepted contribution to the pool totals and the contributor's record.
pub fn credit(
    state: &mut PoolState,
    record: &mut Contribution,
    asset: AssetKind,
    amount: i128,
) -> Result<(), Error> {
    let total_raised = state
        .total_raised
        .checked_add(amount)
        .ok_or(Error::Overflow)?;
    let raised = state
        .raised(asset)
        .checked_add(amount)
        .ok_or(Error::Overflow)?;
    let recorded = record
        .amount(asset)
        .checked_add(amount)
        .ok_or(Error::Overflow)?;
    let first_contribution = record.is_empty();
    let contributor_count = if first_contribution {
        state
            .contributor_count
            .checked_add(1)
            .ok_or(Error::Overflow)?
    } else {
        state.contributor_count
    };

    state.total_raised = total_raised;
    state.contributor_count = contributor_count;
    match asset {
        AssetKind::Native => {
            state.raised_native = raised;
            record.native = recorded;
        }
        AssetKind::Token => {
            state.raised_token = raised;
            record.token = recorded;
        }
    }
    Ok(())
}

/// The single irrevocable decision point.
pub fn resolve(config: &PoolConfig, state: &mut PoolState, now: u64) -> Result<Phase, Error> {
    if state.phase != Phase::Open {
        return Err(Error::AlreadyResolved);
    }
    if now < config.deadline {
        return Err(Error::TooEarly);
    }
    state.phase = outcome(state.total_raised, config.cap);
    Ok(state.phase)
}

/// Terminal phase for a given total. `cap == 0` always succeeds.
pub fn outcome(total_raised: i128, cap: i128) -> Phase {
    if total_raised >= cap {
        Phase::Succeeded
    } else {
        Phase::Failed
    }
}

/// Release the whole pool to the beneficiary on success, marking it paid.
pub fn take_payout(
    config: &PoolConfig,
    state: &mut PoolState,
    caller: &Address,
) -> Result<Release, Error> {
    match state.phase {
        Phase::Succeeded => {}
        Phase::Open | Phase::Failed => return Err(Error::OutOfPhase),
    }
    if *caller != config.beneficiary {
        return Err(Error::NotBeneficiary);
    }
    if state.payout_claimed {
        return Err(Error::AlreadyClaimed);
    }
    if state.total_raised == 0 {
        return Err(Error::NothingToClaim);
    }
    state.payout_claimed = true;
    Ok(Release {
        native: state.raised_native,
        token: state.raised_token,
    })
}

/// Release a contributor's own deposits on failure, marking the record claimed.
///
/// The record's amounts are left in place so the ledger still sums to
/// `total_raised` after refunds.
pub fn take_refund(state: &PoolState, record: &mut Contribution) -> Result<Release, Error> {
    match state.phase {
        Phase::Failed => {}
        Phase::Open | Phase::Succeeded => return Err(Error::OutOfPhase),
    }
    if record.is_empty() {
        return Err(Error::NothingToClaim);
    }
    if record.claimed {
        return Err(Error::AlreadyClaimed);
    }
    record.claimed = true;
    Ok(Release {
        native: record.native,
        token: record.token,
    })
}
