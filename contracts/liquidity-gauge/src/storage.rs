use gauge_types::{AssetDescriptor, RewardData};
use soroban_sdk::{contracttype, Address, Env};

// ============================================================================
// STORAGE LAYOUT
// ============================================================================
// - Instance: admin, pending admin, staking asset, scaling factor,
//   total supply, reward count. Read on almost every call.
// - Persistent: one entry per depositor balance, one per reward token.
//   Zero balances are removed rather than stored.
// ============================================================================

/// Storage keys for the gauge contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Admin address (Instance storage)
    Admin,
    /// Committed but not yet accepted admin (Instance storage)
    FutureAdmin,
    /// Token currently accepted for staking (Instance storage)
    StakingAsset,
    /// Share -> staking asset scaling factor (Instance storage)
    ScalingFactor,
    /// Sum of all balances (Instance storage)
    TotalSupply,
    /// Number of registered reward tokens (Instance storage)
    RewardCount,
    /// Depositor -> share balance (Persistent storage)
    Balance(Address),
    /// Index -> reward token (Persistent storage)
    RewardTokenAt(u32),
    /// Reward token -> reward data (Persistent storage)
    RewardData(Address),
}

// TTL constants
const INSTANCE_TTL_THRESHOLD: u32 = 17280; // ~1 day
const INSTANCE_TTL_EXTEND: u32 = 518400; // ~30 days
const PERSISTENT_TTL_THRESHOLD: u32 = 17280;
const PERSISTENT_TTL_EXTEND: u32 = 518400;

/// Extend instance storage TTL
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

/// Extend persistent storage TTL for a key
pub fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

// === Admin ===

pub fn get_admin(env: &Env) -> Option<Address> {
    extend_instance_ttl(env);
    env.storage().instance().get(&DataKey::Admin)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
    extend_instance_ttl(env);
}

pub fn get_future_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::FutureAdmin)
}

pub fn set_future_admin(env: &Env, candidate: &Address) {
    env.storage().instance().set(&DataKey::FutureAdmin, candidate);
}

pub fn clear_future_admin(env: &Env) {
    env.storage().instance().remove(&DataKey::FutureAdmin);
}

// === Staking asset ===

pub fn get_staking_asset(env: &Env) -> Option<AssetDescriptor> {
    extend_instance_ttl(env);
    env.storage().instance().get(&DataKey::StakingAsset)
}

pub fn get_scaling_factor(env: &Env) -> Option<i128> {
    env.storage().instance().get(&DataKey::ScalingFactor)
}

/// Staking asset and scaling factor are only ever written together
pub fn set_staking_asset(env: &Env, asset: &AssetDescriptor, scaling_factor: i128) {
    env.storage().instance().set(&DataKey::StakingAsset, asset);
    env.storage()
        .instance()
        .set(&DataKey::ScalingFactor, &scaling_factor);
    extend_instance_ttl(env);
}

// === Shares ===

pub fn get_total_supply(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

pub fn set_total_supply(env: &Env, total_supply: i128) {
    env.storage()
        .instance()
        .set(&DataKey::TotalSupply, &total_supply);
}

pub fn get_balance(env: &Env, owner: &Address) -> i128 {
    let key = DataKey::Balance(owner.clone());
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn set_balance(env: &Env, owner: &Address, balance: i128) {
    let key = DataKey::Balance(owner.clone());
    if balance == 0 {
        // Remove empty balance
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &balance);
        extend_persistent_ttl(env, &key);
    }
}

// === Rewards ===

pub fn get_reward_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::RewardCount)
        .unwrap_or(0)
}

pub fn get_reward_token_at(env: &Env, index: u32) -> Option<Address> {
    env.storage().persistent().get(&DataKey::RewardTokenAt(index))
}

pub fn get_reward_data(env: &Env, token: &Address) -> Option<RewardData> {
    env.storage()
        .persistent()
        .get(&DataKey::RewardData(token.clone()))
}

pub fn set_reward_data(env: &Env, token: &Address, data: &RewardData) {
    let key = DataKey::RewardData(token.clone());
    env.storage().persistent().set(&key, data);
    extend_persistent_ttl(env, &key);
}

/// Append a reward token to the indexed registry - O(1)
pub fn push_reward_token(env: &Env, token: &Address) {
    let count = get_reward_count(env);

    let key = DataKey::RewardTokenAt(count);
    env.storage().persistent().set(&key, token);
    extend_persistent_ttl(env, &key);

    env.storage()
        .instance()
        .set(&DataKey::RewardCount, &(count + 1));
}
