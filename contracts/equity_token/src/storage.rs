//! Typed storage helpers for the issuer.
//!
//! Instance tier holds the admin and the minter set (contract-lifetime
//! config); persistent tier holds per-campaign metadata, balances, and
//! supply, each entry with its own TTL.

use soroban_sdk::{contracttype, panic_with_error, Address, Env, String};

use crate::Error;

const DAY_IN_LEDGERS: u32 = 17_280;

const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

/// Name and symbol of a campaign-scoped token.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenMeta {
    pub name: String,
    pub symbol: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Issuer admin (Instance).
    Admin,
    /// Authorised minter flag per address (Instance).
    Minter(Address),
    /// Token metadata keyed by campaign id (Persistent).
    Meta(u64),
    /// Holder balance keyed by (campaign id, holder) (Persistent).
    Balance(u64, Address),
    /// Total minted supply keyed by campaign id (Persistent).
    Supply(u64),
}

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Admin)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
    bump_instance(env);
}

pub fn is_minter(env: &Env, address: &Address) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Minter(address.clone()))
        .unwrap_or(false)
}

pub fn set_minter(env: &Env, address: &Address, allowed: bool) {
    if allowed {
        env.storage()
            .instance()
            .set(&DataKey::Minter(address.clone()), &true);
    } else {
        env.storage()
            .instance()
            .remove(&DataKey::Minter(address.clone()));
    }
    bump_instance(env);
}

pub fn has_meta(env: &Env, campaign_id: u64) -> bool {
    env.storage().persistent().has(&DataKey::Meta(campaign_id))
}

pub fn load_meta(env: &Env, campaign_id: u64) -> Option<TokenMeta> {
    let key = DataKey::Meta(campaign_id);
    let meta: Option<TokenMeta> = env.storage().persistent().get(&key);
    if meta.is_some() {
        bump_persistent(env, &key);
    }
    meta
}

pub fn set_meta(env: &Env, campaign_id: u64, meta: &TokenMeta) {
    let key = DataKey::Meta(campaign_id);
    env.storage().persistent().set(&key, meta);
    bump_persistent(env, &key);
}

pub fn get_balance(env: &Env, campaign_id: u64, holder: &Address) -> i128 {
    let key = DataKey::Balance(campaign_id, holder.clone());
    let balance: i128 = env.storage().persistent().get(&key).unwrap_or(0);
    if balance != 0 {
        bump_persistent(env, &key);
    }
    balance
}

pub fn set_balance(env: &Env, campaign_id: u64, holder: &Address, balance: i128) {
    let key = DataKey::Balance(campaign_id, holder.clone());
    if balance == 0 {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &balance);
        bump_persistent(env, &key);
    }
}

/// Add `amount` to `holder`'s balance with overflow checking.
pub fn add_balance(env: &Env, campaign_id: u64, holder: &Address, amount: i128) {
    let current = get_balance(env, campaign_id, holder);
    let updated = current
        .checked_add(amount)
        .unwrap_or_else(|| panic_with_error!(env, Error::Overflow));
    set_balance(env, campaign_id, holder, updated);
}

pub fn get_supply(env: &Env, campaign_id: u64) -> i128 {
    let key = DataKey::Supply(campaign_id);
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn set_supply(env: &Env, campaign_id: u64, supply: i128) {
    let key = DataKey::Supply(campaign_id);
    env.storage().persistent().set(&key, &supply);
    bump_persistent(env, &key);
}
