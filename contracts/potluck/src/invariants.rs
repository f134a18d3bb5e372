#![allow(dead_code)]

extern crate std;

use crate::types::{Contribution, Phase, Pool};

/// INV-1: Running totals are never negative and `total_raised` is the sum
/// of the two per-asset totals.
pub fn assert_totals_consistent(pool: &Pool) {
    assert!(
        pool.raised_native >= 0 && pool.raised_token >= 0,
        "INV-1 violated: negative per-asset total (native {}, token {})",
        pool.raised_native,
        pool.raised_token
    );
    assert_eq!(
        pool.total_raised,
        pool.raised_native + pool.raised_token,
        "INV-1 violated: total_raised {} != native {} + token {}",
        pool.total_raised,
        pool.raised_native,
        pool.raised_token
    );
}

/// INV-2: The ledger balances. Per asset, the contribution records sum to
/// the pool's recorded amount. `records` must cover every contributor.
pub fn assert_ledger_balanced(pool: &Pool, records: &[Contribution]) {
    let native: i128 = records.iter().map(|r| r.native).sum();
    let token: i128 = records.iter().map(|r| r.token).sum();
    assert_eq!(
        native, pool.raised_native,
        "INV-2 violated: native records sum to {}, pool recorded {}",
        native, pool.raised_native
    );
    assert_eq!(
        token, pool.raised_token,
        "INV-2 violated: token records sum to {}, pool recorded {}",
        token, pool.raised_token
    );
}

/// INV-3: `total_raised` never decreases.
pub fn assert_total_monotonic(before: i128, after: i128) {
    assert!(
        after >= before,
        "INV-3 violated: total_raised decreased from {} to {}",
        before,
        after
    );
}

/// INV-4: Only forward transitions, and only out of `Open`:
///   Open -> Open | Succeeded | Failed
///   Succeeded -> Succeeded
///   Failed -> Failed
pub fn assert_valid_phase_transition(from: &Phase, to: &Phase) {
    let valid = from == to
        || matches!(
            (from, to),
            (Phase::Open, Phase::Succeeded) | (Phase::Open, Phase::Failed)
        );

    assert!(
        valid,
        "INV-4 violated: invalid phase transition from {:?} to {:?}",
        from, to
    );
}

/// INV-5: Fields fixed at construction never change.
pub fn assert_pool_immutable_fields(original: &Pool, current: &Pool) {
    assert_eq!(
        original.beneficiary, current.beneficiary,
        "INV-5 violated: beneficiary changed"
    );
    assert_eq!(original.token, current.token, "INV-5 violated: token changed");
    assert_eq!(
        original.native, current.native,
        "INV-5 violated: native changed"
    );
    assert_eq!(original.cap, current.cap, "INV-5 violated: cap changed");
    assert_eq!(
        original.deadline, current.deadline,
        "INV-5 violated: deadline changed"
    );
    assert_eq!(
        original.cap_policy, current.cap_policy,
        "INV-5 violated: cap_policy changed"
    );
}

/// INV-6: Once terminal, nothing but the payout flag moves.
pub fn assert_terminal_frozen(before: &Pool, after: &Pool) {
    if before.phase == Phase::Open {
        return;
    }
    assert_eq!(before.phase, after.phase, "INV-6 violated: phase changed");
    assert_eq!(
        before.total_raised, after.total_raised,
        "INV-6 violated: total_raised changed after resolution"
    );
    assert_eq!(
        before.raised_native, after.raised_native,
        "INV-6 violated: native total changed after resolution"
    );
    assert_eq!(
        before.raised_token, after.raised_token,
        "INV-6 violated: token total changed after resolution"
    );
    assert_eq!(
        before.contributor_count, after.contributor_count,
        "INV-6 violated: contributor_count changed after resolution"
    );
    assert!(
        !before.payout_claimed || after.payout_claimed,
        "INV-6 violated: payout flag was cleared"
    );
}

/// INV-7: The phase agrees with the cap comparison once resolved.
pub fn assert_outcome_matches_cap(pool: &Pool) {
    match pool.phase {
        Phase::Open => {}
        Phase::Succeeded => assert!(
            pool.total_raised >= pool.cap,
            "INV-7 violated: succeeded with {} < cap {}",
            pool.total_raised,
            pool.cap
        ),
        Phase::Failed => assert!(
            pool.total_raised < pool.cap,
            "INV-7 violated: failed with {} >= cap {}",
            pool.total_raised,
            pool.cap
        ),
    }
}

/// INV-8: A refund never exceeds the contributor's own deposits.
pub fn assert_refund_bounded(refunded: i128, record: &Contribution) {
    assert!(
        refunded <= record.total(),
        "INV-8 violated: refunded {} exceeds contribution {}",
        refunded,
        record.total()
    );
}

/// INV-9: contributor_count never decreases.
pub fn assert_contributor_count_monotonic(count_before: u32, count_after: u32) {
    assert!(
        count_after >= count_before,
        "INV-9 violated: contributor_count decreased from {} to {}",
        count_before,
        count_after
    );
}

/// Run all stateless pool invariants.
pub fn assert_all_pool_invariants(pool: &Pool) {
    assert_totals_consistent(pool);
    assert_outcome_matches_cap(pool);
    assert!(pool.cap >= 0, "cap is negative ({})", pool.cap);
    if pool.phase != Phase::Succeeded {
        assert!(!pool.payout_claimed, "payout claimed outside Succeeded");
    }
}
