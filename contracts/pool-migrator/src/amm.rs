//! Calls into pair-style AMM pools.
//!
//! Pools follow the transfer-then-call convention: tokens or shares are
//! sent to the pool first and the pool settles against its own balance.

use soroban_sdk::{Address, Env, IntoVal, Symbol, Vec};

pub fn share_token(env: &Env, pool: &Address) -> Address {
    env.invoke_contract(pool, &Symbol::new(env, "share_token"), Vec::new(env))
}

/// (token_a, token_b) in the pool's own order
pub fn tokens(env: &Env, pool: &Address) -> (Address, Address) {
    env.invoke_contract(pool, &Symbol::new(env, "tokens"), Vec::new(env))
}

/// Token amounts returned for burning `shares`
pub fn preview_remove(env: &Env, pool: &Address, shares: i128) -> (i128, i128) {
    env.invoke_contract(
        pool,
        &Symbol::new(env, "preview_remove"),
        (shares,).into_val(env),
    )
}

/// (shares, used_a, used_b) for providing `amount_a` and `amount_b`
pub fn preview_add(env: &Env, pool: &Address, amount_a: i128, amount_b: i128) -> (i128, i128, i128) {
    env.invoke_contract(
        pool,
        &Symbol::new(env, "preview_add"),
        (amount_a, amount_b).into_val(env),
    )
}

/// Burn the shares previously sent to the pool, paying both tokens to `to`
pub fn remove_liquidity(
    env: &Env,
    pool: &Address,
    to: &Address,
    min_a: i128,
    min_b: i128,
) -> (i128, i128) {
    env.invoke_contract(
        pool,
        &Symbol::new(env, "remove_liquidity"),
        (to.clone(), min_a, min_b).into_val(env),
    )
}

/// Provide the tokens previously sent to the pool
///
/// Shares go to `to`, the unused part of either token to `refund_to`.
pub fn add_liquidity(
    env: &Env,
    pool: &Address,
    to: &Address,
    refund_to: &Address,
) -> (i128, i128, i128) {
    env.invoke_contract(
        pool,
        &Symbol::new(env, "add_liquidity"),
        (to.clone(), refund_to.clone()).into_val(env),
    )
}
