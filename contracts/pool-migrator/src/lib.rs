#![no_std]

mod amm;
mod error;
mod gauge;
mod storage;

#[cfg(test)]
mod testutils;

pub use error::MigratorError;

use gauge_types::{MigrationRoute, MigrationState, PendingMigration, PoolKind};
use soroban_sdk::{contract, contractimpl, log, token, Address, Env, Symbol};
use storage::{get_governor, get_route, get_state, is_initialized, set_governor, set_route, set_state};

#[contract]
pub struct PoolMigrator;

#[contractimpl]
impl PoolMigrator {
    /// Initialize the migrator with the address allowed to drive it
    pub fn initialize(env: Env, governor: Address) -> Result<(), MigratorError> {
        if is_initialized(&env) {
            return Err(MigratorError::AlreadyInitialized);
        }
        set_governor(&env, &governor);
        Ok(())
    }

    /// Register (or replace, while still idle) the gauge and pools of a route
    pub fn register_route(
        env: Env,
        caller: Address,
        kind: PoolKind,
        gauge: Address,
        old_pool: Address,
        new_pool: Address,
    ) -> Result<(), MigratorError> {
        require_governor(&env, &caller)?;

        if old_pool == new_pool {
            return Err(MigratorError::InvalidRoute);
        }
        if let Some(state) = get_state(&env, kind) {
            if !state.is_idle() {
                return Err(MigratorError::InvalidState);
            }
        }

        let route = MigrationRoute {
            gauge,
            old_pool,
            new_pool,
        };
        set_route(&env, kind, &route);
        set_state(&env, kind, &MigrationState::Idle);

        env.events().publish(
            (Symbol::new(&env, "route_registered"), kind),
            (route.gauge, route.old_pool, route.new_pool),
        );
        Ok(())
    }

    /// Accept the admin role the gauge committed to this contract
    pub fn accept_gauge_ownership(env: Env, caller: Address, kind: PoolKind) -> Result<(), MigratorError> {
        require_governor(&env, &caller)?;
        let route = get_route(&env, kind).ok_or(MigratorError::UnknownRoute)?;

        if gauge::future_admin(&env, &route.gauge) != Some(env.current_contract_address()) {
            return Err(MigratorError::GaugeNotHandedOver);
        }
        gauge::accept_transfer_ownership(&env, &route.gauge);
        Ok(())
    }

    /// Phase 1: move the gauge's liquidity from the old pool to the new one
    ///
    /// Installs the new pool's share token on the gauge with the factor that
    /// maps the gauge's total supply onto the new shares, then pulls the
    /// old shares out, removes that liquidity and provides it to the new
    /// pool with the gauge as recipient. Leftover tokens stay here until
    /// `finish_pool_migration` sweeps them.
    ///
    /// # Arguments
    /// * `min_out_a` - Minimum token A to get back from the old pool
    /// * `min_out_b` - Minimum token B to get back from the old pool
    ///
    /// # Returns
    /// The new pool
    pub fn migrate_pool(
        env: Env,
        caller: Address,
        kind: PoolKind,
        min_out_a: i128,
        min_out_b: i128,
    ) -> Result<Address, MigratorError> {
        require_governor(&env, &caller)?;
        let route = get_route(&env, kind).ok_or(MigratorError::UnknownRoute)?;

        match load_state(&env, kind) {
            MigrationState::Idle => {}
            MigrationState::LiquidityWithdrawn(_) | MigrationState::Completed => {
                return Err(MigratorError::InvalidState)
            }
        }

        let this = env.current_contract_address();
        if gauge::admin(&env, &route.gauge) != this {
            return Err(MigratorError::GaugeNotHandedOver);
        }

        let old_token = gauge::staking_token(&env, &route.gauge);
        if old_token != amm::share_token(&env, &route.old_pool) {
            return Err(MigratorError::InvalidRoute);
        }
        let (token_a, token_b) = amm::tokens(&env, &route.old_pool);
        if amm::tokens(&env, &route.new_pool) != (token_a.clone(), token_b.clone()) {
            return Err(MigratorError::InvalidRoute);
        }
        let new_token = amm::share_token(&env, &route.new_pool);

        let migrated_shares = gauge::total_supply(&env, &route.gauge);
        if migrated_shares <= 0 {
            return Err(MigratorError::NothingToMigrate);
        }

        // Shares are denominated in the gauge's original unit; what it
        // holds of the old token is their value at the installed factor
        let current_factor = gauge::scaling_factor(&env, &route.gauge);
        let withdrawn = gauge_math::convert(&env, migrated_shares, current_factor)
            .ok_or(MigratorError::ArithmeticOverflow)?;
        if withdrawn <= 0 {
            return Err(MigratorError::NothingToMigrate);
        }

        // Quote both legs before touching the gauge
        let (quoted_a, quoted_b) = amm::preview_remove(&env, &route.old_pool, withdrawn);
        check_min_out(quoted_a, quoted_b, min_out_a, min_out_b)?;

        let (expected, _, _) = amm::preview_add(&env, &route.new_pool, quoted_a, quoted_b);
        if expected <= 0 {
            return Err(MigratorError::SlippageExceeded);
        }
        let scaling_factor = gauge_math::scaling_factor_for(&env, migrated_shares, expected)
            .ok_or(MigratorError::ArithmeticOverflow)?;

        // The old share token stops being the staking asset here, so the
        // gauge lets it go
        gauge::set_staking_token_and_scaling(&env, &route.gauge, &new_token, scaling_factor);
        gauge::recover_foreign_asset(&env, &route.gauge, &old_token, withdrawn);

        token::Client::new(&env, &old_token).transfer(&this, &route.old_pool, &withdrawn);
        let (amount_a, amount_b) =
            amm::remove_liquidity(&env, &route.old_pool, &this, min_out_a, min_out_b);
        check_min_out(amount_a, amount_b, min_out_a, min_out_b)?;

        token::Client::new(&env, &token_a).transfer(&this, &route.new_pool, &amount_a);
        token::Client::new(&env, &token_b).transfer(&this, &route.new_pool, &amount_b);
        let (minted, _, _) = amm::add_liquidity(&env, &route.new_pool, &route.gauge, &this);
        if minted < expected {
            return Err(MigratorError::SlippageExceeded);
        }

        log!(&env, "pool migrated", migrated_shares, withdrawn, minted, scaling_factor);

        let pending = PendingMigration {
            old_token,
            new_token,
            scaling_factor,
            migrated_shares,
            withdrawn,
            minted,
        };
        set_state(&env, kind, &MigrationState::LiquidityWithdrawn(pending));

        env.events().publish(
            (Symbol::new(&env, "pool_migrated"), kind),
            (migrated_shares, withdrawn, minted, scaling_factor),
        );
        Ok(route.new_pool)
    }

    /// Phase 2: clear the old shares left in the gauge and pay out leftovers
    ///
    /// Old shares that reached the gauge outside of deposits (or after
    /// phase 1) are removed from the old pool. Everything this contract
    /// holds of either pool token then goes to the governor.
    pub fn finish_pool_migration(
        env: Env,
        caller: Address,
        kind: PoolKind,
        min_a: i128,
        min_b: i128,
    ) -> Result<(), MigratorError> {
        let governor = require_governor(&env, &caller)?;
        let route = get_route(&env, kind).ok_or(MigratorError::UnknownRoute)?;

        let pending = match load_state(&env, kind) {
            MigrationState::LiquidityWithdrawn(pending) => pending,
            MigrationState::Idle | MigrationState::Completed => {
                return Err(MigratorError::InvalidState)
            }
        };

        let this = env.current_contract_address();
        let old_token = token::Client::new(&env, &pending.old_token);

        let residual = old_token.balance(&route.gauge);
        if residual > 0 {
            let (quoted_a, quoted_b) = amm::preview_remove(&env, &route.old_pool, residual);
            check_min_out(quoted_a, quoted_b, min_a, min_b)?;

            gauge::recover_foreign_asset(&env, &route.gauge, &pending.old_token, residual);
            old_token.transfer(&this, &route.old_pool, &residual);

            let (amount_a, amount_b) = amm::remove_liquidity(&env, &route.old_pool, &this, min_a, min_b);
            check_min_out(amount_a, amount_b, min_a, min_b)?;
        }

        let (token_a, token_b) = amm::tokens(&env, &route.old_pool);
        let swept_a = sweep(&env, &token_a, &governor);
        let swept_b = sweep(&env, &token_b, &governor);

        set_state(&env, kind, &MigrationState::Completed);

        env.events().publish(
            (Symbol::new(&env, "migration_finished"), kind),
            (residual, swept_a, swept_b),
        );
        Ok(())
    }

    /// Commit `new_admin` as the gauge's next admin
    ///
    /// Not available between the two phases.
    pub fn transfer_gauge_ownership(
        env: Env,
        caller: Address,
        kind: PoolKind,
        new_admin: Address,
    ) -> Result<(), MigratorError> {
        require_governor(&env, &caller)?;
        let route = get_route(&env, kind).ok_or(MigratorError::UnknownRoute)?;

        if load_state(&env, kind).pending().is_some() {
            return Err(MigratorError::InvalidState);
        }
        if gauge::admin(&env, &route.gauge) != env.current_contract_address() {
            return Err(MigratorError::GaugeNotHandedOver);
        }

        gauge::commit_transfer_ownership(&env, &route.gauge, &new_admin);
        Ok(())
    }

    // === View Functions ===

    pub fn governor(env: Env) -> Result<Address, MigratorError> {
        get_governor(&env).ok_or(MigratorError::NotInitialized)
    }

    pub fn route(env: Env, kind: PoolKind) -> Result<MigrationRoute, MigratorError> {
        get_route(&env, kind).ok_or(MigratorError::UnknownRoute)
    }

    pub fn state(env: Env, kind: PoolKind) -> Result<MigrationState, MigratorError> {
        get_state(&env, kind).ok_or(MigratorError::UnknownRoute)
    }

    /// True once at least one route is registered and every registered
    /// route is completed
    pub fn is_completed(env: Env) -> bool {
        let mut registered = 0u32;
        for kind in PoolKind::ALL {
            if let Some(state) = get_state(&env, kind) {
                if !state.is_completed() {
                    return false;
                }
                registered += 1;
            }
        }
        registered > 0
    }
}

// === Internal Helpers ===

fn require_governor(env: &Env, caller: &Address) -> Result<Address, MigratorError> {
    caller.require_auth();

    let governor = get_governor(env).ok_or(MigratorError::NotInitialized)?;
    if *caller != governor {
        return Err(MigratorError::AccessDenied);
    }
    Ok(governor)
}

fn load_state(env: &Env, kind: PoolKind) -> MigrationState {
    get_state(env, kind).unwrap_or(MigrationState::Idle)
}

fn check_min_out(amount_a: i128, amount_b: i128, min_a: i128, min_b: i128) -> Result<(), MigratorError> {
    if amount_a < min_a || amount_b < min_b {
        return Err(MigratorError::SlippageExceeded);
    }
    Ok(())
}

/// Send this contract's whole balance of `token` to `to`
fn sweep(env: &Env, token: &Address, to: &Address) -> i128 {
    let client = token::Client::new(env, token);
    let this = env.current_contract_address();
    let balance = client.balance(&this);
    if balance > 0 {
        client.transfer(&this, to, &balance);
    }
    balance
}
