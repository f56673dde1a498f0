//! # Equity Token Issuer
//!
//! Mints the per-campaign voting/equity tokens consumed by the crowdfund
//! escrow and governance contracts. One deployed issuer serves every
//! campaign: balances and supply are keyed by `(campaign_id, holder)`, so a
//! campaign id doubles as the token reference the escrow hands out.
//!
//! Minting is restricted to registered minter addresses (in production, the
//! escrow contract). Transfers are open to holders — governance reads live
//! balances at vote time, so holders moving tokens around mid-vote is an
//! accepted property of the protocol, not something the issuer prevents.

#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, panic_with_error, Address, Env, String,
};

mod events;
mod storage;


use storage::{
    add_balance, get_admin, get_balance, get_supply, has_meta, is_minter, load_meta, set_admin,
    set_balance, set_meta, set_minter, set_supply,
};
pub use storage::TokenMeta;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotMinter = 3,
    TokenAlreadyRegistered = 4,
    TokenNotRegistered = 5,
    InvalidAmount = 6,
    InsufficientBalance = 7,
    Overflow = 8,
}

#[contract]
pub struct EquityToken;

#[contractimpl]
impl EquityToken {
    /// Initialise the issuer and set its admin. Exactly once.
    pub fn initialize(env: Env, admin: Address) {
        if get_admin(&env).is_some() {
            panic_with_error!(&env, Error::AlreadyInitialized);
        }
        admin.require_auth();
        set_admin(&env, &admin);
    }

    /// Authorise `minter` to register tokens and mint. Admin only.
    pub fn add_minter(env: Env, minter: Address) {
        let admin = require_admin(&env);
        admin.require_auth();
        set_minter(&env, &minter, true);
    }

    /// Revoke a minter. Admin only.
    pub fn remove_minter(env: Env, minter: Address) {
        let admin = require_admin(&env);
        admin.require_auth();
        set_minter(&env, &minter, false);
    }

    /// Bind a fresh token (name, symbol, zero supply) to `campaign_id`.
    ///
    /// Called by the escrow while creating the campaign. One token per
    /// campaign; re-registration fails.
    pub fn register_token(env: Env, minter: Address, campaign_id: u64, name: String, symbol: String) {
        minter.require_auth();
        require_minter(&env, &minter);
        if has_meta(&env, campaign_id) {
            panic_with_error!(&env, Error::TokenAlreadyRegistered);
        }
        let meta = TokenMeta {
            name: name.clone(),
            symbol: symbol.clone(),
        };
        set_meta(&env, campaign_id, &meta);
        set_supply(&env, campaign_id, 0);
        events::emit_token_registered(&env, campaign_id, name, symbol);
    }

    /// Mint `amount` of campaign `campaign_id`'s token to `to`. Minter only.
    pub fn mint(env: Env, minter: Address, campaign_id: u64, to: Address, amount: i128) {
        minter.require_auth();
        require_minter(&env, &minter);
        if !has_meta(&env, campaign_id) {
            panic_with_error!(&env, Error::TokenNotRegistered);
        }
        if amount <= 0 {
            panic_with_error!(&env, Error::InvalidAmount);
        }

        add_balance(&env, campaign_id, &to, amount);

        let supply = get_supply(&env, campaign_id)
            .checked_add(amount)
            .unwrap_or_else(|| panic_with_error!(&env, Error::Overflow));
        set_supply(&env, campaign_id, supply);

        events::emit_minted(&env, campaign_id, to, amount, supply);
    }

    /// Move `amount` of campaign `campaign_id`'s token between holders.
    pub fn transfer(env: Env, campaign_id: u64, from: Address, to: Address, amount: i128) {
        from.require_auth();
        if amount <= 0 {
            panic_with_error!(&env, Error::InvalidAmount);
        }

        let from_balance = get_balance(&env, campaign_id, &from);
        if from_balance < amount {
            panic_with_error!(&env, Error::InsufficientBalance);
        }
        set_balance(&env, campaign_id, &from, from_balance - amount);
        add_balance(&env, campaign_id, &to, amount);

        events::emit_transferred(&env, campaign_id, from, to, amount);
    }

    /// Balance of `holder` in campaign `campaign_id`'s token.
    pub fn balance(env: Env, campaign_id: u64, holder: Address) -> i128 {
        get_balance(&env, campaign_id, &holder)
    }

    /// Total minted supply of campaign `campaign_id`'s token.
    pub fn total_supply(env: Env, campaign_id: u64) -> i128 {
        get_supply(&env, campaign_id)
    }

    /// Name and symbol bound to `campaign_id`.
    pub fn get_token_meta(env: Env, campaign_id: u64) -> TokenMeta {
        load_meta(&env, campaign_id)
            .unwrap_or_else(|| panic_with_error!(&env, Error::TokenNotRegistered))
    }

    pub fn is_minter(env: Env, address: Address) -> bool {
        is_minter(&env, &address)
    }
}

fn require_admin(env: &Env) -> Address {
    get_admin(env).unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized))
}

fn require_minter(env: &Env, address: &Address) {
    if !is_minter(env, address) {
        panic_with_error!(env, Error::NotMinter);
    }
}
