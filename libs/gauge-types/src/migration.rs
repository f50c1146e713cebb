use soroban_sdk::{contracttype, Address};

/// External pool a migration route targets
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum PoolKind {
    /// agEUR paired with a USD stablecoin
    UsdPegged = 1,
    /// agEUR paired with wrapped ETH
    EthPegged = 2,
}

impl PoolKind {
    pub const ALL: [PoolKind; 2] = [PoolKind::UsdPegged, PoolKind::EthPegged];
}

/// Gauge and pools involved in one migration
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MigrationRoute {
    /// Gauge whose staking token is replaced
    pub gauge: Address,
    /// Pool whose shares the gauge currently holds
    pub old_pool: Address,
    /// Pool receiving the liquidity
    pub new_pool: Address,
}

/// What the first phase did, kept for the second phase
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PendingMigration {
    /// Staking token before the migration (old pool share token)
    pub old_token: Address,
    /// Staking token after the migration (new pool share token)
    pub new_token: Address,
    /// Factor installed on the gauge
    pub scaling_factor: i128,
    /// Gauge total supply when phase 1 ran, in gauge share units
    pub migrated_shares: i128,
    /// Old pool shares moved out of the gauge in phase 1
    pub withdrawn: i128,
    /// New pool shares minted to the gauge in phase 1
    pub minted: i128,
}

/// Per-route migration state
///
/// Idle -> LiquidityWithdrawn -> Completed. There is no way back.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MigrationState {
    Idle,
    LiquidityWithdrawn(PendingMigration),
    Completed,
}

impl MigrationState {
    pub fn is_idle(&self) -> bool {
        matches!(self, MigrationState::Idle)
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, MigrationState::Completed)
    }

    pub fn pending(&self) -> Option<&PendingMigration> {
        match self {
            MigrationState::LiquidityWithdrawn(pending) => Some(pending),
            MigrationState::Idle | MigrationState::Completed => None,
        }
    }
}
