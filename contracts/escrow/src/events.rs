use soroban_sdk::{contracttype, symbol_short, Address, Env};

use crate::types::MilestoneStatus;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignCreated {
    pub campaign_id: u64,
    pub creator: Address,
    pub goal: i128,
    pub end_at: u64,
    pub has_milestones: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Pledged {
    pub campaign_id: u64,
    pub investor: Address,
    pub amount: i128,
    pub total_pledged: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Unpledged {
    pub campaign_id: u64,
    pub investor: Address,
    pub amount: i128,
    pub total_pledged: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundsClaimed {
    pub campaign_id: u64,
    pub creator: Address,
    pub net_amount: i128,
    pub fee: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokensClaimed {
    pub campaign_id: u64,
    pub investor: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FounderTokensClaimed {
    pub campaign_id: u64,
    pub creator: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Refunded {
    pub campaign_id: u64,
    pub investor: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MilestoneSubmitted {
    pub campaign_id: u64,
    pub milestone_index: u32,
    pub proposal_id: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MilestoneStatusUpdated {
    pub campaign_id: u64,
    pub milestone_index: u32,
    pub status: MilestoneStatus,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MilestoneFundsReleased {
    pub campaign_id: u64,
    pub milestone_index: u32,
    pub amount: i128,
    pub net_amount: i128,
    pub fee: i128,
    pub total_released: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EmergencyRefund {
    pub campaign_id: u64,
    pub investor: Address,
    pub amount: i128,
}

pub fn emit_campaign_created(env: &Env, campaign_id: u64, creator: Address, goal: i128, end_at: u64, has_milestones: bool) {
    let topics = (symbol_short!("created"), campaign_id);
    env.events().publish(
        topics,
        CampaignCreated {
            campaign_id,
            creator,
            goal,
            end_at,
            has_milestones,
        },
    );
}

pub fn emit_pledged(env: &Env, campaign_id: u64, investor: Address, amount: i128, total_pledged: i128) {
    let topics = (symbol_short!("pledged"), campaign_id);
    env.events().publish(
        topics,
        Pledged {
            campaign_id,
            investor,
            amount,
            total_pledged,
        },
    );
}

pub fn emit_unpledged(env: &Env, campaign_id: u64, investor: Address, amount: i128, total_pledged: i128) {
    let topics = (symbol_short!("unpledged"), campaign_id);
    env.events().publish(
        topics,
        Unpledged {
            campaign_id,
            investor,
            amount,
            total_pledged,
        },
    );
}

pub fn emit_funds_claimed(env: &Env, campaign_id: u64, creator: Address, net_amount: i128, fee: i128) {
    let topics = (symbol_short!("claimed"), campaign_id);
    env.events().publish(
        topics,
        FundsClaimed {
            campaign_id,
            creator,
            net_amount,
            fee,
        },
    );
}

pub fn emit_tokens_claimed(env: &Env, campaign_id: u64, investor: Address, amount: i128) {
    let topics = (symbol_short!("tok_claim"), campaign_id);
    env.events().publish(
        topics,
        TokensClaimed {
            campaign_id,
            investor,
            amount,
        },
    );
}

pub fn emit_founder_tokens_claimed(env: &Env, campaign_id: u64, creator: Address, amount: i128) {
    let topics = (symbol_short!("fnd_claim"), campaign_id);
    env.events().publish(
        topics,
        FounderTokensClaimed {
            campaign_id,
            creator,
            amount,
        },
    );
}

pub fn emit_refunded(env: &Env, campaign_id: u64, investor: Address, amount: i128) {
    let topics = (symbol_short!("refunded"), campaign_id);
    env.events().publish(
        topics,
        Refunded {
            campaign_id,
            investor,
            amount,
        },
    );
}

pub fn emit_milestone_submitted(env: &Env, campaign_id: u64, milestone_index: u32, proposal_id: u64) {
    let topics = (symbol_short!("ms_submit"), campaign_id);
    env.events().publish(
        topics,
        MilestoneSubmitted {
            campaign_id,
            milestone_index,
            proposal_id,
        },
    );
}

pub fn emit_milestone_status_updated(env: &Env, campaign_id: u64, milestone_index: u32, status: MilestoneStatus) {
    let topics = (symbol_short!("ms_status"), campaign_id);
    env.events().publish(
        topics,
        MilestoneStatusUpdated {
            campaign_id,
            milestone_index,
            status,
        },
    );
}

pub fn emit_milestone_funds_released(env: &Env, campaign_id: u64, milestone_index: u32, amount: i128, net_amount: i128, fee: i128, total_released: i128) {
    let topics = (symbol_short!("ms_funds"), campaign_id);
    env.events().publish(
        topics,
        MilestoneFundsReleased {
            campaign_id,
            milestone_index,
            amount,
            net_amount,
            fee,
            total_released,
        },
    );
}

pub fn emit_emergency_refund(env: &Env, campaign_id: u64, investor: Address, amount: i128) {
    let topics = (symbol_short!("em_refund"), campaign_id);
    env.events().publish(
        topics,
        EmergencyRefund {
            campaign_id,
            investor,
            amount,
        },
    );
}
