//! Storage tiers shared by the storefront contracts.
//!
//! Contract configuration lives in instance storage. Escrow records,
//! listings, pending orders and balances are persistent entries, since
//! funds and sale terms must outlive any single contract instance TTL.

use soroban_sdk::{Env, IntoVal, TryFromVal, Val};

const LEDGERS_PER_DAY: u32 = 60 * 60 * 24 / 5;
const INSTANCE_BUMP_THRESHOLD: u32 = 7 * LEDGERS_PER_DAY;
// Records holding custody of funds are refreshed well before they lapse.
const RECORD_BUMP_THRESHOLD: u32 = 30 * LEDGERS_PER_DAY;

fn extend_instance(env: &Env) {
    let max_ttl: u32 = env.storage().max_ttl();
    env.storage()
        .instance()
        .extend_ttl(max_ttl - INSTANCE_BUMP_THRESHOLD, max_ttl);
}

fn extend_record<K>(env: &Env, key: &K)
where
    K: IntoVal<Env, Val>,
{
    let max_ttl: u32 = env.storage().max_ttl();
    env.storage()
        .persistent()
        .extend_ttl::<K>(key, max_ttl - RECORD_BUMP_THRESHOLD, max_ttl);
}

// PERSISTENT RECORDS
pub fn store_persistent<K, V>(env: &Env, key: &K, val: &V)
where
    K: IntoVal<Env, Val>,
    V: IntoVal<Env, Val>,
{
    env.storage().persistent().set(key, val);
    extend_record(env, key);
}

/// Reads a record and keeps it alive while it is still being used.
pub fn get_persistent<K, V>(env: &Env, key: &K) -> Option<V>
where
    K: IntoVal<Env, Val>,
    V: TryFromVal<Env, Val>,
{
    let value: Option<V> = env.storage().persistent().get(key);
    if value.is_some() {
        extend_record(env, key);
    }
    value
}

/// Applies `update` to the stored value (or `default` when absent), stores
/// the result and returns it.
pub fn update_persistent<K, V, F>(env: &Env, key: &K, default: V, update: F) -> V
where
    K: IntoVal<Env, Val>,
    V: IntoVal<Env, Val> + TryFromVal<Env, Val>,
    F: FnOnce(V) -> V,
{
    let current: V = env.storage().persistent().get(key).unwrap_or(default);
    let next: V = update(current);
    store_persistent(env, key, &next);
    next
}

pub fn remove_persistent<K>(env: &Env, key: &K)
where
    K: IntoVal<Env, Val>,
{
    env.storage().persistent().remove(key)
}

pub fn has_persistent<K>(env: &Env, key: &K) -> bool
where
    K: IntoVal<Env, Val>,
{
    env.storage().persistent().has(key)
}

// INSTANCE CONFIGURATION
pub fn store_data<K, V>(env: &Env, key: &K, val: &V)
where
    K: IntoVal<Env, Val>,
    V: IntoVal<Env, Val>,
{
    env.storage().instance().set(key, val);
    extend_instance(env);
}

pub fn get_data<K, V>(env: &Env, key: &K) -> Option<V>
where
    K: IntoVal<Env, Val>,
    V: TryFromVal<Env, Val>,
{
    env.storage().instance().get(key)
}

pub fn has_data<K>(env: &Env, key: &K) -> bool
where
    K: IntoVal<Env, Val>,
{
    env.storage().instance().has(key)
}
