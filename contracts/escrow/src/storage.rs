//! Typed storage helpers over the two Soroban storage tiers.
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key              | Type      | Description                          |
//! |------------------|-----------|--------------------------------------|
//! | `PlatformWallet` | `Address` | Receives the platform fee            |
//! | `PaymentToken`   | `Address` | SAC token pledges are denominated in |
//! | `Governance`     | `Address` | The bound governance contract        |
//! | `EquityToken`    | `Address` | The bound token issuer               |
//! | `PlatformFeeBps` | `u32`     | Fee on creator-bound payouts         |
//! | `CampaignCount`  | `u64`     | Auto-increment campaign id counter   |
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                      | Type             | Description                |
//! |--------------------------|------------------|----------------------------|
//! | `Config(id)`             | `CampaignConfig` | Immutable campaign config  |
//! | `State(id)`              | `CampaignState`  | Mutable campaign state     |
//! | `Milestone(id, idx)`     | `Milestone`      | Per-milestone record       |
//! | `Pledge(id, investor)`   | `i128`           | Outstanding pledge ledger  |
//! | `TokensClaimed(id, inv)` | `bool`           | Equity-claim guard         |

use soroban_sdk::{contracttype, panic_with_error, Address, Env, Vec};

use crate::types::{Campaign, CampaignConfig, CampaignState, Milestone};
use crate::Error;

const DAY_IN_LEDGERS: u32 = 17_280;

const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Fee recipient (Instance).
    PlatformWallet,
    /// Pledge denomination token (Instance).
    PaymentToken,
    /// Bound governance contract (Instance).
    Governance,
    /// Bound equity token issuer (Instance).
    EquityToken,
    /// Platform fee in basis points (Instance).
    PlatformFeeBps,
    /// Global auto-increment counter for campaign ids (Instance).
    CampaignCount,
    /// Immutable campaign configuration keyed by id (Persistent).
    Config(u64),
    /// Mutable campaign state keyed by id (Persistent).
    State(u64),
    /// Milestone keyed by (campaign id, index) (Persistent).
    Milestone(u64, u32),
    /// Outstanding pledge keyed by (campaign id, investor) (Persistent).
    Pledge(u64, Address),
    /// Equity-token claim guard keyed by (campaign id, investor) (Persistent).
    TokensClaimed(u64, Address),
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

// ─────────────────────────────────────────────────────────
// Contract configuration
// ─────────────────────────────────────────────────────────

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::PaymentToken)
}

pub fn set_contract_config(
    env: &Env,
    platform_wallet: &Address,
    payment_token: &Address,
    governance: &Address,
    equity_token: &Address,
    platform_fee_bps: u32,
) {
    let storage = env.storage().instance();
    storage.set(&DataKey::PlatformWallet, platform_wallet);
    storage.set(&DataKey::PaymentToken, payment_token);
    storage.set(&DataKey::Governance, governance);
    storage.set(&DataKey::EquityToken, equity_token);
    storage.set(&DataKey::PlatformFeeBps, &platform_fee_bps);
    bump_instance(env);
}

fn instance_address(env: &Env, key: &DataKey) -> Address {
    env.storage()
        .instance()
        .get(key)
        .unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized))
}

pub fn get_platform_wallet(env: &Env) -> Address {
    instance_address(env, &DataKey::PlatformWallet)
}

pub fn get_payment_token(env: &Env) -> Address {
    instance_address(env, &DataKey::PaymentToken)
}

pub fn get_governance(env: &Env) -> Address {
    instance_address(env, &DataKey::Governance)
}

pub fn get_equity_token(env: &Env) -> Address {
    instance_address(env, &DataKey::EquityToken)
}

pub fn get_platform_fee_bps(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::PlatformFeeBps)
        .unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized))
}

/// Atomically read and increment the campaign counter.
pub fn next_campaign_id(env: &Env) -> u64 {
    bump_instance(env);
    let current: u64 = env
        .storage()
        .instance()
        .get(&DataKey::CampaignCount)
        .unwrap_or(0);
    env.storage()
        .instance()
        .set(&DataKey::CampaignCount, &(current + 1));
    current
}

// ─────────────────────────────────────────────────────────
// Campaigns
// ─────────────────────────────────────────────────────────

/// Save both the immutable config and the initial mutable state.
pub fn save_new_campaign(env: &Env, config: &CampaignConfig) {
    let config_key = DataKey::Config(config.id);
    let state_key = DataKey::State(config.id);
    let state = CampaignState {
        pledged: 0,
        released_amount: 0,
        claimed: false,
        founder_tokens_claimed: false,
    };
    env.storage().persistent().set(&config_key, config);
    env.storage().persistent().set(&state_key, &state);
    bump_persistent(env, &config_key);
    bump_persistent(env, &state_key);
}

pub fn load_config(env: &Env, id: u64) -> CampaignConfig {
    let key = DataKey::Config(id);
    let config: CampaignConfig = env
        .storage()
        .persistent()
        .get(&key)
        .unwrap_or_else(|| panic_with_error!(env, Error::CampaignNotFound));
    bump_persistent(env, &key);
    config
}

pub fn load_state(env: &Env, id: u64) -> CampaignState {
    let key = DataKey::State(id);
    let state: CampaignState = env
        .storage()
        .persistent()
        .get(&key)
        .unwrap_or_else(|| panic_with_error!(env, Error::CampaignNotFound));
    bump_persistent(env, &key);
    state
}

/// Read both entries with a single pair of TTL bumps.
pub fn load_campaign_pair(env: &Env, id: u64) -> (CampaignConfig, CampaignState) {
    (load_config(env, id), load_state(env, id))
}

pub fn save_state(env: &Env, id: u64, state: &CampaignState) {
    let key = DataKey::State(id);
    env.storage().persistent().set(&key, state);
    bump_persistent(env, &key);
}

/// Full public `Campaign` view from the split entries.
pub fn load_campaign(env: &Env, id: u64) -> Campaign {
    let (config, state) = load_campaign_pair(env, id);
    Campaign {
        id: config.id,
        creator: config.creator,
        name: config.name,
        goal: config.goal,
        pledged: state.pledged,
        start_at: config.start_at,
        end_at: config.end_at,
        claimed: state.claimed,
        founder_share_bps: config.founder_share_bps,
        founder_tokens_claimed: state.founder_tokens_claimed,
        has_milestones: config.has_milestones,
        milestone_count: config.milestone_count,
        released_amount: state.released_amount,
    }
}

// ─────────────────────────────────────────────────────────
// Milestones
// ─────────────────────────────────────────────────────────

pub fn save_milestone(env: &Env, campaign_id: u64, index: u32, milestone: &Milestone) {
    let key = DataKey::Milestone(campaign_id, index);
    env.storage().persistent().set(&key, milestone);
    bump_persistent(env, &key);
}

pub fn load_milestone(env: &Env, campaign_id: u64, index: u32) -> Milestone {
    let key = DataKey::Milestone(campaign_id, index);
    let milestone: Milestone = env
        .storage()
        .persistent()
        .get(&key)
        .unwrap_or_else(|| panic_with_error!(env, Error::MilestoneNotFound));
    bump_persistent(env, &key);
    milestone
}

pub fn load_milestones(env: &Env, config: &CampaignConfig) -> Vec<Milestone> {
    let mut milestones = Vec::new(env);
    for index in 0..config.milestone_count {
        milestones.push_back(load_milestone(env, config.id, index));
    }
    milestones
}

// ─────────────────────────────────────────────────────────
// Pledge ledger
// ─────────────────────────────────────────────────────────

pub fn get_pledge(env: &Env, campaign_id: u64, investor: &Address) -> i128 {
    let key = DataKey::Pledge(campaign_id, investor.clone());
    let pledge: i128 = env.storage().persistent().get(&key).unwrap_or(0);
    if pledge != 0 {
        bump_persistent(env, &key);
    }
    pledge
}

pub fn set_pledge(env: &Env, campaign_id: u64, investor: &Address, amount: i128) {
    let key = DataKey::Pledge(campaign_id, investor.clone());
    if amount == 0 {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &amount);
        bump_persistent(env, &key);
    }
}

// ─────────────────────────────────────────────────────────
// Claim guards
// ─────────────────────────────────────────────────────────

pub fn tokens_claimed(env: &Env, campaign_id: u64, investor: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::TokensClaimed(campaign_id, investor.clone()))
        .unwrap_or(false)
}

pub fn set_tokens_claimed(env: &Env, campaign_id: u64, investor: &Address) {
    let key = DataKey::TokensClaimed(campaign_id, investor.clone());
    env.storage().persistent().set(&key, &true);
    bump_persistent(env, &key);
}
