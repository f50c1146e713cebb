use gauge_types::{MigrationRoute, MigrationState, PoolKind};
use soroban_sdk::{contracttype, Address, Env};

/// Storage keys for the migrator contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Governor address (Instance storage)
    Governor,
    /// Pool kind -> gauge and pools (Persistent storage)
    Route(PoolKind),
    /// Pool kind -> migration progress (Persistent storage)
    State(PoolKind),
}

// TTL constants
const INSTANCE_TTL_THRESHOLD: u32 = 17280; // ~1 day
const INSTANCE_TTL_EXTEND: u32 = 518400; // ~30 days
const PERSISTENT_TTL_THRESHOLD: u32 = 17280;
const PERSISTENT_TTL_EXTEND: u32 = 518400;

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

pub fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Governor)
}

pub fn get_governor(env: &Env) -> Option<Address> {
    extend_instance_ttl(env);
    env.storage().instance().get(&DataKey::Governor)
}

pub fn set_governor(env: &Env, governor: &Address) {
    env.storage().instance().set(&DataKey::Governor, governor);
    extend_instance_ttl(env);
}

pub fn get_route(env: &Env, kind: PoolKind) -> Option<MigrationRoute> {
    env.storage().persistent().get(&DataKey::Route(kind))
}

pub fn set_route(env: &Env, kind: PoolKind, route: &MigrationRoute) {
    let key = DataKey::Route(kind);
    env.storage().persistent().set(&key, route);
    extend_persistent_ttl(env, &key);
}

pub fn get_state(env: &Env, kind: PoolKind) -> Option<MigrationState> {
    env.storage().persistent().get(&DataKey::State(kind))
}

pub fn set_state(env: &Env, kind: PoolKind, state: &MigrationState) {
    let key = DataKey::State(kind);
    env.storage().persistent().set(&key, state);
    extend_persistent_ttl(env, &key);
}
