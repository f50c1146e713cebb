// ============================================================================
// INVARIANTS MODULE - For Formal Verification
// ============================================================================
//
// Pure predicates over gauge state. The contract checks them with
// debug_assert! after every mutation and the Certora rules restate them.
//
// INVARIANT CATEGORIES:
//
// 1. SHARE INVARIANTS
//    - Balances and total supply are non-negative
//    - Total supply moves by exactly the minted/burned amount
//
// 2. COLLATERAL INVARIANTS
//    - Held staking asset covers convert(total_supply)
//
// 3. SCALING INVARIANTS
//    - An installed factor is strictly positive
//    - Conversions round down
//
// ============================================================================

// ============================================================================
// SHARE INVARIANTS
// ============================================================================

/// Invariant: a share balance is never negative
pub fn balance_non_negative(balance: i128) -> bool {
    balance >= 0
}

/// Invariant: total supply moved by exactly the balance delta
///
/// Property:
///   supply_after - supply_before == balance_after - balance_before
pub fn supply_tracks_balance(
    supply_before: i128,
    supply_after: i128,
    balance_before: i128,
    balance_after: i128,
) -> bool {
    supply_after - supply_before == balance_after - balance_before
}

/// Invariant: a single balance never exceeds the total supply
pub fn balance_within_supply(balance: i128, total_supply: i128) -> bool {
    balance_non_negative(balance) && balance <= total_supply
}

// ============================================================================
// COLLATERAL INVARIANTS
// ============================================================================

/// Invariant: the gauge holds at least what depositors can redeem
///
/// Property:
///   held >= convert(total_supply, scaling_factor)
pub fn collateralized(held: i128, redeemable: i128) -> bool {
    held >= redeemable
}

// ============================================================================
// SCALING INVARIANTS
// ============================================================================

/// Invariant: an installed scaling factor is strictly positive
pub fn scaling_factor_valid(scaling_factor: i128) -> bool {
    scaling_factor > 0
}

/// Invariant: a payout never exceeds what the burned shares are worth
///
/// Property:
///   payout * scaling_factor <= shares * unit
///
/// Checked in the 256-bit domain by gauge_math::is_floor_conversion.
pub fn payout_rounded_down(
    env: &soroban_sdk::Env,
    shares: i128,
    scaling_factor: i128,
    payout: i128,
) -> bool {
    gauge_math::is_floor_conversion(env, shares, scaling_factor, gauge_types::SCALING_UNIT, payout)
}

// ============================================================================
// TESTS
// ============================================================================
