// ============================================================================
// SCALING CONVERSION SPECIFICATIONS
// ============================================================================
//
// KEY INVARIANTS:
// 1. convert never pays more than the shares are worth
// 2. The identity factor leaves amounts unchanged
// 3. A derived factor never over-credits the migrated shares
// 4. convert is monotonic in the share amount
//
// ============================================================================

#[cfg(feature = "certora")]
use soroban_sdk::Env;

#[cfg(feature = "certora")]
use cvlr_soroban_derive::rule;

#[cfg(feature = "certora")]
use cvlr::asserts::{cvlr_assert, cvlr_assume, cvlr_satisfy};

#[cfg(feature = "certora")]
use gauge_types::SCALING_UNIT;

/// RULE: Sanity check - conversion is reachable
#[cfg(feature = "certora")]
#[rule]
pub fn sanity_convert(env: Env, shares: i128, scaling_factor: i128) {
    cvlr_assume!(shares >= 0 && scaling_factor > 0);
    let converted = gauge_math::convert(&env, shares, scaling_factor);
    cvlr_satisfy!(converted.is_some());
}

/// RULE: convert rounds down
#[cfg(feature = "certora")]
#[rule]
pub fn convert_never_over_credits(env: Env, shares: i128, scaling_factor: i128) {
    cvlr_assume!(shares >= 0 && scaling_factor > 0);

    if let Some(converted) = gauge_math::convert(&env, shares, scaling_factor) {
        cvlr_assert!(gauge_math::is_floor_conversion(
            &env,
            shares,
            scaling_factor,
            SCALING_UNIT,
            converted
        ));
    }
}

/// RULE: The default factor is the identity
#[cfg(feature = "certora")]
#[rule]
pub fn identity_factor(env: Env, amount: i128) {
    cvlr_assume!(amount >= 0);

    cvlr_assert!(gauge_math::convert(&env, amount, SCALING_UNIT) == Some(amount));
    cvlr_assert!(gauge_math::to_shares(&env, amount, SCALING_UNIT) == Some(amount));
}

/// RULE: A non-positive factor never converts
#[cfg(feature = "certora")]
#[rule]
pub fn non_positive_factor_rejected(env: Env, shares: i128, scaling_factor: i128) {
    cvlr_assume!(scaling_factor <= 0);
    cvlr_assert!(gauge_math::convert(&env, shares, scaling_factor).is_none());
}

/// RULE: Migrated shares redeem for at most what the new pool minted
#[cfg(feature = "certora")]
#[rule]
pub fn derived_factor_bounded_by_minted(env: Env, migrated: i128, minted: i128) {
    cvlr_assume!(migrated > 0 && minted > 0);

    if let Some(factor) = gauge_math::scaling_factor_for(&env, migrated, minted) {
        if let Some(payout) = gauge_math::convert(&env, migrated, factor) {
            cvlr_assert!(payout <= minted);
        }
    }
}

/// RULE: More shares never convert to less
#[cfg(feature = "certora")]
#[rule]
pub fn convert_monotonic(env: Env, a: i128, b: i128, scaling_factor: i128) {
    cvlr_assume!(a >= 0 && a <= b && scaling_factor > 0);

    let converted_a = gauge_math::convert(&env, a, scaling_factor);
    let converted_b = gauge_math::convert(&env, b, scaling_factor);
    cvlr_assume!(converted_a.is_some() && converted_b.is_some());

    cvlr_assert!(converted_a <= converted_b);
}
