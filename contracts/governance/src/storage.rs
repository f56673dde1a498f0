//! Typed storage helpers.
//!
//! Instance tier: collaborator addresses and the proposal counter.
//! Persistent tier: proposals, vote records, and the one-outstanding-proposal
//! binding per `(campaign, milestone)` pair.

use soroban_sdk::{contracttype, panic_with_error, Address, Env};

use crate::types::{Proposal, VoteRecord};
use crate::Error;

const DAY_IN_LEDGERS: u32 = 17_280;

const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// The one escrow allowed to open milestone proposals (Instance).
    Escrow,
    /// Equity token issuer queried for weights and supply (Instance).
    VotingToken,
    /// Global auto-increment proposal id counter (Instance).
    ProposalCount,
    /// Proposal keyed by id (Persistent).
    Proposal(u64),
    /// Vote record keyed by (proposal id, voter) (Persistent).
    Vote(u64, Address),
    /// Outstanding milestone proposal id keyed by
    /// (campaign id, milestone index) (Persistent).
    MilestoneProposal(u64, u32),
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

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Escrow)
}

pub fn set_collaborators(env: &Env, escrow: &Address, voting_token: &Address) {
    env.storage().instance().set(&DataKey::Escrow, escrow);
    env.storage().instance().set(&DataKey::VotingToken, voting_token);
    bump_instance(env);
}

pub fn get_escrow(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::Escrow)
        .unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized))
}

pub fn get_voting_token(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::VotingToken)
        .unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized))
}

/// Atomically read and increment the proposal counter.
pub fn next_proposal_id(env: &Env) -> u64 {
    bump_instance(env);
    let current: u64 = env
        .storage()
        .instance()
        .get(&DataKey::ProposalCount)
        .unwrap_or(0);
    env.storage()
        .instance()
        .set(&DataKey::ProposalCount, &(current + 1));
    current
}

pub fn save_proposal(env: &Env, proposal: &Proposal) {
    let key = DataKey::Proposal(proposal.id);
    env.storage().persistent().set(&key, proposal);
    bump_persistent(env, &key);
}

pub fn load_proposal(env: &Env, id: u64) -> Proposal {
    let key = DataKey::Proposal(id);
    let proposal: Proposal = env
        .storage()
        .persistent()
        .get(&key)
        .unwrap_or_else(|| panic_with_error!(env, Error::ProposalNotFound));
    bump_persistent(env, &key);
    proposal
}

pub fn get_vote(env: &Env, proposal_id: u64, voter: &Address) -> Option<VoteRecord> {
    env.storage()
        .persistent()
        .get(&DataKey::Vote(proposal_id, voter.clone()))
}

pub fn save_vote(env: &Env, proposal_id: u64, record: &VoteRecord) {
    let key = DataKey::Vote(proposal_id, record.voter.clone());
    env.storage().persistent().set(&key, record);
    bump_persistent(env, &key);
}

/// Id of the outstanding proposal for `(campaign_id, milestone_index)`,
/// if one is neither executed nor canceled.
pub fn get_milestone_binding(env: &Env, campaign_id: u64, milestone_index: u32) -> Option<u64> {
    env.storage()
        .persistent()
        .get(&DataKey::MilestoneProposal(campaign_id, milestone_index))
}

pub fn set_milestone_binding(env: &Env, campaign_id: u64, milestone_index: u32, proposal_id: u64) {
    let key = DataKey::MilestoneProposal(campaign_id, milestone_index);
    env.storage().persistent().set(&key, &proposal_id);
    bump_persistent(env, &key);
}

pub fn clear_milestone_binding(env: &Env, campaign_id: u64, milestone_index: u32) {
    env.storage()
        .persistent()
        .remove(&DataKey::MilestoneProposal(campaign_id, milestone_index));
}
