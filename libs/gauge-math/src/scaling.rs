//! Share <-> staking asset conversion across a migration.
//!
//! A gauge records balances in the share unit that was current when it was
//! deployed. Once a migration installs a scaling factor `f`, one share is
//! worth `UNIT / f` raw units of the new staking asset:
//!
//! ```text
//! convert(shares, f)   = floor(shares * UNIT / f)     payout on withdraw
//! to_shares(amount, f) = floor(amount * f / UNIT)     shares minted on deposit
//! ```
//!
//! Both directions round down so a depositor is never credited more than
//! what the gauge holds. The factor itself is derived rounding up.
//!
//! The i128 fixed-point path handles everyday magnitudes; products that do
//! not fit fall back to a 256-bit intermediate.

use crate::full_math::{mul_div, mul_div_rounding_up};
use gauge_types::SCALING_UNIT;
use soroban_fixed_point_math::FixedPoint;
use soroban_sdk::Env;

/// Convert `old_amount` shares into new staking asset units using the
/// default 1e18 unit
pub fn convert(env: &Env, old_amount: i128, scaling_factor: i128) -> Option<i128> {
    convert_with_unit(env, old_amount, scaling_factor, SCALING_UNIT)
}

/// floor(old_amount * unit / scaling_factor)
///
/// Returns None for a non-positive factor or unit, a negative amount, or a
/// result that does not fit in i128.
pub fn convert_with_unit(
    env: &Env,
    old_amount: i128,
    scaling_factor: i128,
    unit: i128,
) -> Option<i128> {
    if old_amount < 0 || scaling_factor <= 0 || unit <= 0 {
        return None;
    }

    old_amount
        .fixed_div_floor(scaling_factor, unit)
        .or_else(|| wide(env, old_amount, unit, scaling_factor, false))
}

/// Shares minted for a deposit of `amount` new staking asset units
///
/// floor(amount * scaling_factor / UNIT). With the default factor this is
/// the identity.
pub fn to_shares(env: &Env, amount: i128, scaling_factor: i128) -> Option<i128> {
    if amount < 0 || scaling_factor <= 0 {
        return None;
    }

    amount
        .fixed_mul_floor(scaling_factor, SCALING_UNIT)
        .or_else(|| wide(env, amount, scaling_factor, SCALING_UNIT, false))
}

/// Factor that maps `old_amount` shares onto `new_amount` units
///
/// ceil(old_amount * UNIT / new_amount). Rounding up guarantees
/// `convert(old_amount, factor) <= new_amount`.
pub fn scaling_factor_for(env: &Env, old_amount: i128, new_amount: i128) -> Option<i128> {
    if old_amount <= 0 || new_amount <= 0 {
        return None;
    }

    old_amount
        .fixed_div_ceil(new_amount, SCALING_UNIT)
        .or_else(|| wide(env, old_amount, SCALING_UNIT, new_amount, true))
}

/// Floor property: convert(old_amount, f) * f <= old_amount * unit
///
/// Evaluated with 256-bit intermediates so it holds for every input.
pub fn is_floor_conversion(
    env: &Env,
    old_amount: i128,
    scaling_factor: i128,
    unit: i128,
    converted: i128,
) -> bool {
    if old_amount < 0 || scaling_factor <= 0 || unit <= 0 || converted < 0 {
        return false;
    }

    // converted <= old_amount * unit / f  <=>  converted <= floor(old_amount * unit / f)
    match mul_div(env, old_amount as u128, unit as u128, scaling_factor as u128) {
        Some(max) => (converted as u128) <= max,
        // The exact quotient exceeds u128, so any i128 is below it
        None => true,
    }
}

fn wide(env: &Env, a: i128, b: i128, denominator: i128, round_up: bool) -> Option<i128> {
    let result = if round_up {
        mul_div_rounding_up(env, a as u128, b as u128, denominator as u128)?
    } else {
        mul_div(env, a as u128, b as u128, denominator as u128)?
    };
    i128::try_from(result).ok()
}
