//! Constant-product pair used as migration source and target in tests.
//!
//! Reserves are tracked explicitly; whatever the pool holds above them was
//! sent in for the next `add_liquidity`. The first provision mints `a + b`
//! shares, later ones mint in proportion to the scarcer side.

use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{contract, contractimpl, contracttype, Address, Env};

#[contracttype]
#[derive(Clone)]
enum PoolKey {
    TokenA,
    TokenB,
    ShareToken,
    ReserveA,
    ReserveB,
    TotalShares,
    MintPenalty,
}

#[contract]
pub struct MockPool;

#[contractimpl]
impl MockPool {
    /// `share_token` must be a stellar asset administered by this pool
    pub fn init(env: Env, token_a: Address, token_b: Address, share_token: Address) {
        let storage = env.storage().instance();
        storage.set(&PoolKey::TokenA, &token_a);
        storage.set(&PoolKey::TokenB, &token_b);
        storage.set(&PoolKey::ShareToken, &share_token);
        storage.set(&PoolKey::ReserveA, &0i128);
        storage.set(&PoolKey::ReserveB, &0i128);
        storage.set(&PoolKey::TotalShares, &0i128);
    }

    /// Mint this many shares fewer than quoted on every provision
    pub fn set_mint_penalty(env: Env, shares: i128) {
        env.storage().instance().set(&PoolKey::MintPenalty, &shares);
    }

    pub fn share_token(env: Env) -> Address {
        env.storage().instance().get(&PoolKey::ShareToken).unwrap()
    }

    pub fn tokens(env: Env) -> (Address, Address) {
        let storage = env.storage().instance();
        (
            storage.get(&PoolKey::TokenA).unwrap(),
            storage.get(&PoolKey::TokenB).unwrap(),
        )
    }

    pub fn reserves(env: Env) -> (i128, i128) {
        let storage = env.storage().instance();
        (
            storage.get(&PoolKey::ReserveA).unwrap(),
            storage.get(&PoolKey::ReserveB).unwrap(),
        )
    }

    pub fn total_shares(env: Env) -> i128 {
        env.storage().instance().get(&PoolKey::TotalShares).unwrap()
    }

    pub fn preview_remove(env: Env, shares: i128) -> (i128, i128) {
        let (reserve_a, reserve_b) = Self::reserves(env.clone());
        quote_remove(reserve_a, reserve_b, Self::total_shares(env), shares)
    }

    pub fn preview_add(env: Env, amount_a: i128, amount_b: i128) -> (i128, i128, i128) {
        let (reserve_a, reserve_b) = Self::reserves(env.clone());
        quote_add(reserve_a, reserve_b, Self::total_shares(env), amount_a, amount_b)
    }

    pub fn remove_liquidity(env: Env, to: Address, min_a: i128, min_b: i128) -> (i128, i128) {
        let this = env.current_contract_address();
        let share_token = TokenClient::new(&env, &Self::share_token(env.clone()));
        let (token_a, token_b) = Self::tokens(env.clone());
        let (reserve_a, reserve_b) = Self::reserves(env.clone());
        let total = Self::total_shares(env.clone());

        let shares = share_token.balance(&this);
        let (amount_a, amount_b) = quote_remove(reserve_a, reserve_b, total, shares);
        assert!(amount_a >= min_a && amount_b >= min_b, "insufficient output");

        share_token.burn(&this, &shares);
        write_state(&env, reserve_a - amount_a, reserve_b - amount_b, total - shares);

        TokenClient::new(&env, &token_a).transfer(&this, &to, &amount_a);
        TokenClient::new(&env, &token_b).transfer(&this, &to, &amount_b);
        (amount_a, amount_b)
    }

    pub fn add_liquidity(env: Env, to: Address, refund_to: Address) -> (i128, i128, i128) {
        let this = env.current_contract_address();
        let (token_a, token_b) = Self::tokens(env.clone());
        let (reserve_a, reserve_b) = Self::reserves(env.clone());
        let total = Self::total_shares(env.clone());
        let token_a = TokenClient::new(&env, &token_a);
        let token_b = TokenClient::new(&env, &token_b);

        let in_a = token_a.balance(&this) - reserve_a;
        let in_b = token_b.balance(&this) - reserve_b;
        let (quoted, used_a, used_b) = quote_add(reserve_a, reserve_b, total, in_a, in_b);
        let penalty: i128 = env
            .storage()
            .instance()
            .get(&PoolKey::MintPenalty)
            .unwrap_or(0);
        let shares = quoted - penalty;
        assert!(shares > 0, "insufficient liquidity minted");

        write_state(&env, reserve_a + used_a, reserve_b + used_b, total + shares);
        StellarAssetClient::new(&env, &Self::share_token(env.clone())).mint(&to, &shares);

        if in_a > used_a {
            token_a.transfer(&this, &refund_to, &(in_a - used_a));
        }
        if in_b > used_b {
            token_b.transfer(&this, &refund_to, &(in_b - used_b));
        }
        (shares, used_a, used_b)
    }
}

fn write_state(env: &Env, reserve_a: i128, reserve_b: i128, total: i128) {
    let storage = env.storage().instance();
    storage.set(&PoolKey::ReserveA, &reserve_a);
    storage.set(&PoolKey::ReserveB, &reserve_b);
    storage.set(&PoolKey::TotalShares, &total);
}

fn quote_remove(reserve_a: i128, reserve_b: i128, total: i128, shares: i128) -> (i128, i128) {
    if total == 0 {
        return (0, 0);
    }
    (shares * reserve_a / total, shares * reserve_b / total)
}

fn quote_add(reserve_a: i128, reserve_b: i128, total: i128, amount_a: i128, amount_b: i128) -> (i128, i128, i128) {
    if total == 0 {
        return (amount_a + amount_b, amount_a, amount_b);
    }

    let by_a = amount_a * total / reserve_a;
    let by_b = amount_b * total / reserve_b;
    if by_a <= by_b {
        let used_b = ceil_div(by_a * reserve_b, total).min(amount_b);
        (by_a, amount_a, used_b)
    } else {
        let used_a = ceil_div(by_b * reserve_a, total).min(amount_a);
        (by_b, used_a, amount_b)
    }
}

fn ceil_div(numerator: i128, denominator: i128) -> i128 {
    (numerator + denominator - 1) / denominator
}
