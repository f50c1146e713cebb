//! Calls into a liquidity gauge administered by this contract.
//!
//! Every admin call passes the migrator's own address as caller, which
//! the host authorizes because the migrator is the direct invoker.

use soroban_sdk::{Address, Env, IntoVal, Symbol, Vec};

pub fn admin(env: &Env, gauge: &Address) -> Address {
    env.invoke_contract(gauge, &Symbol::new(env, "admin"), Vec::new(env))
}

pub fn future_admin(env: &Env, gauge: &Address) -> Option<Address> {
    env.invoke_contract(gauge, &Symbol::new(env, "future_admin"), Vec::new(env))
}

pub fn total_supply(env: &Env, gauge: &Address) -> i128 {
    env.invoke_contract(gauge, &Symbol::new(env, "total_supply"), Vec::new(env))
}

/// Share -> staking asset factor currently installed
pub fn scaling_factor(env: &Env, gauge: &Address) -> i128 {
    env.invoke_contract(gauge, &Symbol::new(env, "scaling_factor"), Vec::new(env))
}

pub fn staking_token(env: &Env, gauge: &Address) -> Address {
    env.invoke_contract(gauge, &Symbol::new(env, "staking_token"), Vec::new(env))
}

pub fn accept_transfer_ownership(env: &Env, gauge: &Address) {
    env.invoke_contract::<()>(
        gauge,
        &Symbol::new(env, "accept_transfer_ownership"),
        (env.current_contract_address(),).into_val(env),
    );
}

pub fn commit_transfer_ownership(env: &Env, gauge: &Address, candidate: &Address) {
    env.invoke_contract::<()>(
        gauge,
        &Symbol::new(env, "commit_transfer_ownership"),
        (env.current_contract_address(), candidate.clone()).into_val(env),
    );
}

pub fn set_staking_token_and_scaling(env: &Env, gauge: &Address, token: &Address, scaling_factor: i128) {
    env.invoke_contract::<()>(
        gauge,
        &Symbol::new(env, "set_staking_token_and_scaling"),
        (env.current_contract_address(), token.clone(), scaling_factor).into_val(env),
    );
}

/// Pull `amount` of `token` out of the gauge into this contract
pub fn recover_foreign_asset(env: &Env, gauge: &Address, token: &Address, amount: i128) {
    let this = env.current_contract_address();
    env.invoke_contract::<()>(
        gauge,
        &Symbol::new(env, "recover_foreign_asset"),
        (this.clone(), token.clone(), this, amount).into_val(env),
    );
}
