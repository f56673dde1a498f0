use soroban_sdk::{contracttype, symbol_short, Address, Env};

use crate::types::ProposalKind;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalCreated {
    pub proposal_id: u64,
    pub campaign_id: u64,
    pub proposer: Address,
    pub kind: ProposalKind,
    pub milestone_index: Option<u32>,
    pub end_time: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Voted {
    pub proposal_id: u64,
    pub voter: Address,
    pub support: bool,
    pub weight: i128,
    pub for_votes: i128,
    pub against_votes: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalExecuted {
    pub proposal_id: u64,
    pub campaign_id: u64,
    pub passed: bool,
    pub for_votes: i128,
    pub against_votes: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MilestoneProposalExecuted {
    pub proposal_id: u64,
    pub campaign_id: u64,
    pub milestone_index: u32,
    pub approved: bool,
    pub for_votes: i128,
    pub against_votes: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalCanceled {
    pub proposal_id: u64,
    pub campaign_id: u64,
    pub proposer: Address,
}

pub fn emit_proposal_created(env: &Env, proposal_id: u64, campaign_id: u64, proposer: Address, kind: ProposalKind, milestone_index: Option<u32>, end_time: u64) {
    let topics = (symbol_short!("prop_new"), proposal_id);
    env.events().publish(
        topics,
        ProposalCreated {
            proposal_id,
            campaign_id,
            proposer,
            kind,
            milestone_index,
            end_time,
        },
    );
}

pub fn emit_voted(env: &Env, proposal_id: u64, voter: Address, support: bool, weight: i128, for_votes: i128, against_votes: i128) {
    let topics = (symbol_short!("voted"), proposal_id);
    env.events().publish(
        topics,
        Voted {
            proposal_id,
            voter,
            support,
            weight,
            for_votes,
            against_votes,
        },
    );
}

pub fn emit_proposal_executed(env: &Env, proposal_id: u64, campaign_id: u64, passed: bool, for_votes: i128, against_votes: i128) {
    let topics = (symbol_short!("prop_exec"), proposal_id);
    env.events().publish(
        topics,
        ProposalExecuted {
            proposal_id,
            campaign_id,
            passed,
            for_votes,
            against_votes,
        },
    );
}

pub fn emit_milestone_proposal_executed(env: &Env, proposal_id: u64, campaign_id: u64, milestone_index: u32, approved: bool, for_votes: i128, against_votes: i128) {
    let topics = (symbol_short!("ms_exec"), proposal_id);
    env.events().publish(
        topics,
        MilestoneProposalExecuted {
            proposal_id,
            campaign_id,
            milestone_index,
            approved,
            for_votes,
            against_votes,
        },
    );
}

pub fn emit_proposal_canceled(env: &Env, proposal_id: u64, campaign_id: u64, proposer: Address) {
    let topics = (symbol_short!("prop_canc"), proposal_id);
    env.events().publish(
        topics,
        ProposalCanceled {
            proposal_id,
            campaign_id,
            proposer,
        },
    );
}
