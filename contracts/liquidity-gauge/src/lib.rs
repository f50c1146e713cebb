#![no_std]

mod error;
mod invariants;
mod ownership;
mod storage;

#[cfg(feature = "certora")]
mod certora_specs;

pub use error::GaugeError;

use gauge_types::{AssetDescriptor, RewardData, SCALING_UNIT};
use soroban_sdk::{contract, contractimpl, token, Address, Env, Symbol};
use storage::{
    get_admin, get_balance, get_future_admin, get_reward_count, get_reward_data,
    get_reward_token_at, get_scaling_factor, get_staking_asset, get_total_supply, is_initialized,
    push_reward_token, set_admin, set_balance, set_reward_data, set_staking_asset,
    set_total_supply,
};

#[contract]
pub struct LiquidityGauge;

#[contractimpl]
impl LiquidityGauge {
    /// Initialize the gauge with its admin and the token it accepts
    ///
    /// Starts at the identity scaling factor, so shares are 1:1 with raw
    /// units until a migration installs another one.
    pub fn initialize(env: Env, admin: Address, staking_token: Address) -> Result<(), GaugeError> {
        if is_initialized(&env) {
            return Err(GaugeError::AlreadyInitialized);
        }

        let decimals = token::Client::new(&env, &staking_token).decimals();
        let asset = AssetDescriptor {
            address: staking_token,
            decimals,
        };

        set_admin(&env, &admin);
        set_staking_asset(&env, &asset, SCALING_UNIT);
        set_total_supply(&env, 0);
        Ok(())
    }

    /// Stake `amount` units of the current staking asset
    ///
    /// # Arguments
    /// * `from` - Address paying the tokens, must authorize
    /// * `amount` - Raw units of the current staking asset
    /// * `receiver` - Address credited with the shares, defaults to `from`
    ///
    /// # Returns
    /// Shares minted
    pub fn deposit(
        env: Env,
        from: Address,
        amount: i128,
        receiver: Option<Address>,
    ) -> Result<i128, GaugeError> {
        from.require_auth();

        if amount <= 0 {
            return Err(GaugeError::InvalidAmount);
        }

        let (asset, scaling_factor) = current_asset(&env)?;
        let shares = to_shares(&env, amount, scaling_factor)?;
        if shares == 0 {
            return Err(GaugeError::InvalidAmount);
        }

        let receiver = receiver.unwrap_or_else(|| from.clone());
        let balance_before = get_balance(&env, &receiver);
        let supply_before = get_total_supply(&env);

        let balance_after = balance_before
            .checked_add(shares)
            .ok_or(GaugeError::ArithmeticOverflow)?;
        let supply_after = supply_before
            .checked_add(shares)
            .ok_or(GaugeError::ArithmeticOverflow)?;

        set_balance(&env, &receiver, balance_after);
        set_total_supply(&env, supply_after);

        debug_assert!(invariants::supply_tracks_balance(
            supply_before,
            supply_after,
            balance_before,
            balance_after
        ));

        token::Client::new(&env, &asset.address).transfer(
            &from,
            &env.current_contract_address(),
            &amount,
        );

        env.events().publish(
            (Symbol::new(&env, "deposit"),),
            (from, receiver, amount, shares),
        );
        Ok(shares)
    }

    /// Burn `amount` shares and pay out their value in the current asset
    ///
    /// # Returns
    /// Raw units of the current staking asset paid to `from`
    pub fn withdraw(env: Env, from: Address, amount: i128) -> Result<i128, GaugeError> {
        from.require_auth();

        if amount <= 0 {
            return Err(GaugeError::InvalidAmount);
        }

        let balance_before = get_balance(&env, &from);
        if balance_before < amount {
            return Err(GaugeError::InsufficientFunds);
        }

        let (asset, scaling_factor) = current_asset(&env)?;
        let payout = convert(&env, amount, scaling_factor)?;
        if payout == 0 {
            return Err(GaugeError::InvalidAmount);
        }

        let supply_before = get_total_supply(&env);
        let balance_after = balance_before - amount;
        let supply_after = supply_before - amount;

        set_balance(&env, &from, balance_after);
        set_total_supply(&env, supply_after);

        debug_assert!(invariants::balance_non_negative(balance_after));
        debug_assert!(invariants::balance_within_supply(balance_after, supply_after));
        debug_assert!(invariants::supply_tracks_balance(
            supply_before,
            supply_after,
            balance_before,
            balance_after
        ));
        debug_assert!(invariants::payout_rounded_down(
            &env,
            amount,
            scaling_factor,
            payout
        ));

        token::Client::new(&env, &asset.address).transfer(
            &env.current_contract_address(),
            &from,
            &payout,
        );

        env.events().publish(
            (Symbol::new(&env, "withdraw"),),
            (from, amount, payout),
        );
        Ok(payout)
    }

    // === Ownership ===

    /// Nominate `candidate` as the next admin
    pub fn commit_transfer_ownership(
        env: Env,
        caller: Address,
        candidate: Address,
    ) -> Result<(), GaugeError> {
        ownership::commit(&env, &caller, &candidate)
    }

    /// Complete a handover started with `commit_transfer_ownership`
    pub fn accept_transfer_ownership(env: Env, caller: Address) -> Result<(), GaugeError> {
        ownership::accept(&env, &caller)
    }

    // === Admin ===

    /// Re-point the gauge at a new staking asset
    ///
    /// Existing balances keep their share count; from now on they are
    /// redeemed through `scaling_factor`. Reward data is left as is.
    pub fn set_staking_token_and_scaling(
        env: Env,
        caller: Address,
        token: Address,
        scaling_factor: i128,
    ) -> Result<(), GaugeError> {
        ownership::require_admin(&env, &caller)?;

        if !invariants::scaling_factor_valid(scaling_factor) {
            return Err(GaugeError::InvalidScalingFactor);
        }

        let decimals = token::Client::new(&env, &token).decimals();
        let asset = AssetDescriptor {
            address: token,
            decimals,
        };
        set_staking_asset(&env, &asset, scaling_factor);

        env.events().publish(
            (Symbol::new(&env, "staking_token_set"),),
            (asset.address, decimals, scaling_factor),
        );
        Ok(())
    }

    /// Sweep tokens held by the gauge to `to`
    ///
    /// The current staking asset can only be swept down to what depositors
    /// are owed.
    pub fn recover_foreign_asset(
        env: Env,
        caller: Address,
        token: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), GaugeError> {
        ownership::require_admin(&env, &caller)?;

        if amount <= 0 {
            return Err(GaugeError::InvalidAmount);
        }

        let client = token::Client::new(&env, &token);
        let held = client.balance(&env.current_contract_address());
        if amount > held {
            return Err(GaugeError::InsufficientFunds);
        }

        let (asset, scaling_factor) = current_asset(&env)?;
        if token == asset.address {
            let owed = convert(&env, get_total_supply(&env), scaling_factor)?;
            if !invariants::collateralized(held - amount, owed) {
                return Err(GaugeError::Undercollateralized);
            }
        }

        client.transfer(&env.current_contract_address(), &to, &amount);

        env.events().publish(
            (Symbol::new(&env, "recover"),),
            (token, to, amount),
        );
        Ok(())
    }

    // === Reward registry ===

    /// Register a reward token and the address allowed to fund it
    pub fn add_reward(
        env: Env,
        caller: Address,
        reward_token: Address,
        distributor: Address,
    ) -> Result<(), GaugeError> {
        ownership::require_admin(&env, &caller)?;

        let (asset, _) = current_asset(&env)?;
        if reward_token == asset.address || get_reward_data(&env, &reward_token).is_some() {
            return Err(GaugeError::RewardAlreadyRegistered);
        }

        set_reward_data(&env, &reward_token, &RewardData::new(distributor.clone()));
        push_reward_token(&env, &reward_token);

        env.events().publish(
            (Symbol::new(&env, "reward_added"),),
            (reward_token, distributor),
        );
        Ok(())
    }

    /// Change the distributor of a registered reward token
    ///
    /// Allowed for the admin and for the current distributor.
    pub fn set_reward_distributor(
        env: Env,
        caller: Address,
        reward_token: Address,
        distributor: Address,
    ) -> Result<(), GaugeError> {
        caller.require_auth();

        let mut data = get_reward_data(&env, &reward_token).ok_or(GaugeError::UnknownReward)?;
        let admin = get_admin(&env).ok_or(GaugeError::NotInitialized)?;
        if caller != admin && caller != data.distributor {
            return Err(GaugeError::AccessDenied);
        }

        data.distributor = distributor.clone();
        set_reward_data(&env, &reward_token, &data);

        env.events().publish(
            (Symbol::new(&env, "reward_distributor"),),
            (reward_token, distributor),
        );
        Ok(())
    }

    // === View Functions ===

    pub fn balance_of(env: Env, owner: Address) -> i128 {
        get_balance(&env, &owner)
    }

    pub fn total_supply(env: Env) -> i128 {
        get_total_supply(&env)
    }

    /// Staking asset units `owner` would receive for their whole balance
    pub fn staked_amount_of(env: Env, owner: Address) -> Result<i128, GaugeError> {
        let (_, scaling_factor) = current_asset(&env)?;
        convert(&env, get_balance(&env, &owner), scaling_factor)
    }

    pub fn staking_token(env: Env) -> Result<Address, GaugeError> {
        Ok(current_asset(&env)?.0.address)
    }

    pub fn staking_asset(env: Env) -> Result<AssetDescriptor, GaugeError> {
        Ok(current_asset(&env)?.0)
    }

    pub fn decimal_staking_token(env: Env) -> Result<u32, GaugeError> {
        Ok(current_asset(&env)?.0.decimals)
    }

    pub fn scaling_factor(env: Env) -> Result<i128, GaugeError> {
        Ok(current_asset(&env)?.1)
    }

    pub fn admin(env: Env) -> Result<Address, GaugeError> {
        get_admin(&env).ok_or(GaugeError::NotInitialized)
    }

    pub fn future_admin(env: Env) -> Option<Address> {
        get_future_admin(&env)
    }

    pub fn reward_count(env: Env) -> u32 {
        get_reward_count(&env)
    }

    pub fn reward_tokens(env: Env, index: u32) -> Result<Address, GaugeError> {
        get_reward_token_at(&env, index).ok_or(GaugeError::UnknownReward)
    }

    pub fn reward_data(env: Env, reward_token: Address) -> Result<RewardData, GaugeError> {
        get_reward_data(&env, &reward_token).ok_or(GaugeError::UnknownReward)
    }
}

// === Internal Helpers ===

fn current_asset(env: &Env) -> Result<(AssetDescriptor, i128), GaugeError> {
    let asset = get_staking_asset(env).ok_or(GaugeError::NotInitialized)?;
    let scaling_factor = get_scaling_factor(env).ok_or(GaugeError::NotInitialized)?;
    Ok((asset, scaling_factor))
}

fn convert(env: &Env, shares: i128, scaling_factor: i128) -> Result<i128, GaugeError> {
    if !invariants::scaling_factor_valid(scaling_factor) {
        return Err(GaugeError::ZeroScalingFactor);
    }
    gauge_math::convert(env, shares, scaling_factor).ok_or(GaugeError::ArithmeticOverflow)
}

fn to_shares(env: &Env, amount: i128, scaling_factor: i128) -> Result<i128, GaugeError> {
    if !invariants::scaling_factor_valid(scaling_factor) {
        return Err(GaugeError::ZeroScalingFactor);
    }
    gauge_math::to_shares(env, amount, scaling_factor).ok_or(GaugeError::ArithmeticOverflow)
}
