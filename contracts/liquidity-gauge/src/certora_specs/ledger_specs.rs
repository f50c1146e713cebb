// ============================================================================
// LEDGER SPECIFICATIONS
// ============================================================================
//
// Rules that call the contract entry points directly. State is seeded
// through the storage module so no token contract is needed.
//
// ============================================================================

#[cfg(feature = "certora")]
use soroban_sdk::{Address, Env};

#[cfg(feature = "certora")]
use cvlr_soroban_derive::rule;

#[cfg(feature = "certora")]
use cvlr::asserts::{cvlr_assert, cvlr_assume};

#[cfg(feature = "certora")]
use crate::{storage, GaugeError, LiquidityGauge};

/// RULE: Withdrawing more than the balance fails and changes nothing
#[cfg(feature = "certora")]
#[rule]
pub fn withdraw_bounded_by_balance(env: Env, from: Address, balance: i128, amount: i128) {
    cvlr_assume!(balance >= 0 && amount > balance);

    storage::set_balance(&env, &from, balance);
    storage::set_total_supply(&env, balance);

    let result = LiquidityGauge::withdraw(env.clone(), from.clone(), amount);

    cvlr_assert!(result == Err(GaugeError::InsufficientFunds));
    cvlr_assert!(storage::get_balance(&env, &from) == balance);
    cvlr_assert!(storage::get_total_supply(&env) == balance);
}

/// RULE: Only the admin can commit a new admin
#[cfg(feature = "certora")]
#[rule]
pub fn commit_requires_admin(env: Env, admin: Address, caller: Address, candidate: Address) {
    cvlr_assume!(caller != admin);

    storage::set_admin(&env, &admin);

    let result = LiquidityGauge::commit_transfer_ownership(env.clone(), caller, candidate);

    cvlr_assert!(result == Err(GaugeError::AccessDenied));
    cvlr_assert!(storage::get_future_admin(&env).is_none());
}

/// RULE: Accepting hands over the role and clears the pending slot
#[cfg(feature = "certora")]
#[rule]
pub fn accept_installs_candidate(env: Env, admin: Address, candidate: Address) {
    storage::set_admin(&env, &admin);

    let committed = LiquidityGauge::commit_transfer_ownership(env.clone(), admin, candidate.clone());
    cvlr_assume!(committed.is_ok());

    let accepted = LiquidityGauge::accept_transfer_ownership(env.clone(), candidate.clone());

    cvlr_assert!(accepted.is_ok());
    cvlr_assert!(storage::get_admin(&env) == Some(candidate));
    cvlr_assert!(storage::get_future_admin(&env).is_none());
}

/// RULE: Nobody but the committed candidate can accept
#[cfg(feature = "certora")]
#[rule]
pub fn accept_requires_candidate(env: Env, admin: Address, candidate: Address, caller: Address) {
    cvlr_assume!(caller != candidate);

    storage::set_admin(&env, &admin);
    storage::set_future_admin(&env, &candidate);

    let result = LiquidityGauge::accept_transfer_ownership(env.clone(), caller);

    cvlr_assert!(result == Err(GaugeError::AccessDenied));
    cvlr_assert!(storage::get_admin(&env) == Some(admin));
}

/// RULE: A non-admin cannot re-point the staking asset
#[cfg(feature = "certora")]
#[rule]
pub fn set_staking_token_requires_admin(
    env: Env,
    admin: Address,
    caller: Address,
    token: Address,
    scaling_factor: i128,
) {
    cvlr_assume!(caller != admin);

    storage::set_admin(&env, &admin);

    let result =
        LiquidityGauge::set_staking_token_and_scaling(env.clone(), caller, token, scaling_factor);

    cvlr_assert!(result == Err(GaugeError::AccessDenied));
}

/// RULE: A non-admin cannot sweep tokens
#[cfg(feature = "certora")]
#[rule]
pub fn recover_requires_admin(
    env: Env,
    admin: Address,
    caller: Address,
    token: Address,
    to: Address,
    amount: i128,
) {
    cvlr_assume!(caller != admin);

    storage::set_admin(&env, &admin);

    let result = LiquidityGauge::recover_foreign_asset(env.clone(), caller, token, to, amount);

    cvlr_assert!(result == Err(GaugeError::AccessDenied));
}
