//! # Crowdfund Escrow Contract
//!
//! Holds investor pledges for fundraising campaigns and disburses them to
//! creators either as a lump sum or in governance-gated milestone tranches.
//!
//! | Phase         | Entry Point(s)                                         |
//! |---------------|--------------------------------------------------------|
//! | Bootstrap     | [`CrowdfundEscrow::init`]                              |
//! | Creation      | `create_campaign`, `create_campaign_with_milestones`   |
//! | Funding       | `pledge`, `unpledge`                                   |
//! | Settlement    | `claim`, `claim_tokens`, `claim_founder_tokens`, `refund` |
//! | Milestones    | `submit_milestone_for_approval`, `release_milestone_funds`, `emergency_refund` |
//! | Governance    | `record_milestone_outcome` (callback, governance-only) |
//! | Queries       | `get_campaign`, `get_pledge`, `get_milestone`, ...     |
//!
//! ## Architecture
//!
//! Storage access is delegated to [`storage`], fee math to [`fees`], event
//! emission to [`events`], and the governance / token-issuer collaborators
//! are reached through the trait clients in [`interfaces`] — both addresses
//! injected once at [`CrowdfundEscrow::init`]. This file holds only entry
//! points and the transition rules.
//!
//! Every entry point runs atomically: a failed check reverts the whole
//! invocation, including any cross-contract sub-call, so a rejected
//! operation has zero effect. Payout paths still zero the owed balance
//! before the token transfer so no path ever observes a balance it could
//! double-spend.

#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, panic_with_error, token, Address, Env, String, Vec,
};

pub mod events;
pub mod fees;
pub mod interfaces;
mod storage;
mod types;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod fuzz_test;
#[cfg(test)]
mod test_events;

use interfaces::{GovernanceClient, IssuerClient};
use storage::{
    get_equity_token, get_governance, get_payment_token, get_pledge, get_platform_fee_bps,
    get_platform_wallet, is_initialized, load_campaign, load_campaign_pair, load_config,
    load_milestone, load_milestones, load_state, next_campaign_id, save_milestone,
    save_new_campaign, save_state, set_contract_config, set_pledge, set_tokens_claimed,
    tokens_claimed,
};
pub use types::{Campaign, CampaignConfig, CampaignState, Milestone, MilestoneStatus};

const SECONDS_PER_DAY: u64 = 86_400;

/// Campaign duration bounds in days (upper bound is the regulatory cap).
pub const MIN_DURATION_DAYS: u64 = 1;
pub const MAX_DURATION_DAYS: u64 = 90;

/// Hard cap on the milestone schedule length.
pub const MAX_MILESTONES: u32 = 3;

/// Upper bound on the creator's share of the equity token supply.
pub const MAX_FOUNDER_SHARE_BPS: u32 = 3_000;

/// Furthest a milestone deadline may sit past the campaign end (5 years).
pub const MAX_MILESTONE_OFFSET_DAYS: u64 = 1_825;

const BPS_DENOM: u32 = 10_000;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    CampaignNotFound = 3,
    MilestoneNotFound = 4,
    InvalidAmount = 5,
    InvalidGoal = 6,
    InvalidDuration = 7,
    InvalidFounderShare = 8,
    InvalidFeeBps = 9,
    InvalidMilestoneCount = 10,
    PercentagesMustSumTo100 = 11,
    InvalidMilestonePercentage = 12,
    InvalidMilestoneSchedule = 13,
    CampaignEnded = 14,
    CampaignNotEnded = 15,
    CampaignNotSuccessful = 16,
    CampaignSuccessful = 17,
    NotCampaignCreator = 18,
    NotGovernance = 19,
    AlreadyClaimed = 20,
    TokensAlreadyClaimed = 21,
    FounderTokensAlreadyClaimed = 22,
    NothingPledged = 23,
    InsufficientPledge = 24,
    CampaignHasMilestones = 25,
    NoMilestones = 26,
    PreviousMilestoneNotCompleted = 27,
    MilestoneNotPending = 28,
    MilestoneNotVoting = 29,
    MilestoneNotApproved = 30,
    NoRejectedMilestone = 31,
    Overflow = 32,
}

#[contract]
pub struct CrowdfundEscrow;

#[contractimpl]
impl CrowdfundEscrow {
    // ─────────────────────────────────────────────────────────
    // Initialisation
    // ─────────────────────────────────────────────────────────

    /// Wire the contract to its collaborators and fix the fee policy.
    /// Exactly once, immediately after deployment.
    ///
    /// - `platform_wallet` receives the platform fee on every creator-bound
    ///   payout.
    /// - `payment_token` is the SAC token pledges are denominated in.
    /// - `governance` / `equity_token` are the bound collaborator contracts.
    /// - `platform_fee_bps` must be below 10_000 (a 2% fee is 200).
    pub fn init(
        env: Env,
        platform_wallet: Address,
        payment_token: Address,
        governance: Address,
        equity_token: Address,
        platform_fee_bps: u32,
    ) {
        if is_initialized(&env) {
            panic_with_error!(&env, Error::AlreadyInitialized);
        }
        if platform_fee_bps >= BPS_DENOM {
            panic_with_error!(&env, Error::InvalidFeeBps);
        }
        set_contract_config(
            &env,
            &platform_wallet,
            &payment_token,
            &governance,
            &equity_token,
            platform_fee_bps,
        );
    }

    // ─────────────────────────────────────────────────────────
    // Campaign creation
    // ─────────────────────────────────────────────────────────

    /// Create a lump-sum campaign: if the goal is met by the deadline the
    /// creator withdraws everything at once via `claim`.
    pub fn create_campaign(
        env: Env,
        creator: Address,
        name: String,
        token_name: String,
        token_symbol: String,
        goal: i128,
        duration_days: u64,
        founder_share_bps: u32,
    ) -> u64 {
        creator.require_auth();
        Self::create_campaign_inner(
            &env,
            creator,
            name,
            token_name,
            token_symbol,
            goal,
            duration_days,
            founder_share_bps,
            0,
        )
    }

    /// Create a milestone campaign: funds are partitioned into percentage
    /// tranches released one by one, each gated by an investor vote.
    ///
    /// The four schedule vectors must have equal non-zero length (at most
    /// [`MAX_MILESTONES`]); percentages must sum to exactly 10_000 bps; the
    /// deadline offsets must be strictly increasing. Deadlines are
    /// informational — release order is enforced by status, not by time.
    pub fn create_campaign_with_milestones(
        env: Env,
        creator: Address,
        name: String,
        token_name: String,
        token_symbol: String,
        goal: i128,
        duration_days: u64,
        founder_share_bps: u32,
        titles: Vec<String>,
        descriptions: Vec<String>,
        percentages_bps: Vec<u32>,
        days_after_end: Vec<u64>,
    ) -> u64 {
        creator.require_auth();

        let count = titles.len();
        if count == 0
            || count > MAX_MILESTONES
            || descriptions.len() != count
            || percentages_bps.len() != count
            || days_after_end.len() != count
        {
            panic_with_error!(&env, Error::InvalidMilestoneCount);
        }

        let mut total_bps: u32 = 0;
        for bps in percentages_bps.iter() {
            if bps == 0 {
                panic_with_error!(&env, Error::InvalidMilestonePercentage);
            }
            total_bps = total_bps
                .checked_add(bps)
                .unwrap_or_else(|| panic_with_error!(&env, Error::PercentagesMustSumTo100));
        }
        if total_bps != BPS_DENOM {
            panic_with_error!(&env, Error::PercentagesMustSumTo100);
        }

        let mut previous_offset: u64 = 0;
        for offset in days_after_end.iter() {
            // Strictly increasing, at least a day out, within the 5-year cap.
            if offset <= previous_offset || offset > MAX_MILESTONE_OFFSET_DAYS {
                panic_with_error!(&env, Error::InvalidMilestoneSchedule);
            }
            previous_offset = offset;
        }

        let campaign_id = Self::create_campaign_inner(
            &env,
            creator,
            name,
            token_name,
            token_symbol,
            goal,
            duration_days,
            founder_share_bps,
            count,
        );

        let end_at = load_config(&env, campaign_id).end_at;
        for index in 0..count {
            let milestone = Milestone {
                title: titles.get(index).unwrap(),
                description: descriptions.get(index).unwrap(),
                percentage_bps: percentages_bps.get(index).unwrap(),
                deadline: end_at + days_after_end.get(index).unwrap() * SECONDS_PER_DAY,
                status: MilestoneStatus::Pending,
                proposal_id: None,
            };
            save_milestone(&env, campaign_id, index, &milestone);
        }

        campaign_id
    }

    // ─────────────────────────────────────────────────────────
    // Funding
    // ─────────────────────────────────────────────────────────

    /// Escrow `amount` of the payment token toward the campaign goal.
    /// Only while the campaign is running.
    pub fn pledge(env: Env, campaign_id: u64, investor: Address, amount: i128) {
        investor.require_auth();
        if amount <= 0 {
            panic_with_error!(&env, Error::InvalidAmount);
        }

        let (config, mut state) = load_campaign_pair(&env, campaign_id);
        if env.ledger().timestamp() >= config.end_at {
            panic_with_error!(&env, Error::CampaignEnded);
        }

        let payment = token::Client::new(&env, &get_payment_token(&env));
        payment.transfer(&investor, &env.current_contract_address(), &amount);

        state.pledged = state
            .pledged
            .checked_add(amount)
            .unwrap_or_else(|| panic_with_error!(&env, Error::Overflow));
        save_state(&env, campaign_id, &state);

        let pledge = get_pledge(&env, campaign_id, &investor)
            .checked_add(amount)
            .unwrap_or_else(|| panic_with_error!(&env, Error::Overflow));
        set_pledge(&env, campaign_id, &investor, pledge);

        events::emit_pledged(&env, campaign_id, investor, amount, state.pledged);
    }

    /// Take back part or all of a pledge. Only while the campaign is
    /// running — after the deadline the refund/claim paths take over.
    pub fn unpledge(env: Env, campaign_id: u64, investor: Address, amount: i128) {
        investor.require_auth();
        if amount <= 0 {
            panic_with_error!(&env, Error::InvalidAmount);
        }

        let (config, mut state) = load_campaign_pair(&env, campaign_id);
        if env.ledger().timestamp() >= config.end_at {
            panic_with_error!(&env, Error::CampaignEnded);
        }

        let pledge = get_pledge(&env, campaign_id, &investor);
        if pledge < amount {
            panic_with_error!(&env, Error::InsufficientPledge);
        }

        state.pledged -= amount;
        save_state(&env, campaign_id, &state);
        set_pledge(&env, campaign_id, &investor, pledge - amount);

        let payment = token::Client::new(&env, &get_payment_token(&env));
        payment.transfer(&env.current_contract_address(), &investor, &amount);

        events::emit_unpledged(&env, campaign_id, investor, amount, state.pledged);
    }

    /// `true` once the deadline has passed with the goal met. Recomputed on
    /// every call; never cached.
    pub fn is_campaign_successful(env: Env, campaign_id: u64) -> bool {
        let (config, state) = load_campaign_pair(&env, campaign_id);
        Self::successful(&env, &config, &state)
    }

    // ─────────────────────────────────────────────────────────
    // Settlement
    // ─────────────────────────────────────────────────────────

    /// Creator lump-sum withdrawal for campaigns without milestones.
    /// Pays `pledged` minus the platform fee, once.
    pub fn claim(env: Env, campaign_id: u64, creator: Address) {
        creator.require_auth();

        let (config, mut state) = load_campaign_pair(&env, campaign_id);
        if config.creator != creator {
            panic_with_error!(&env, Error::NotCampaignCreator);
        }
        if config.has_milestones {
            panic_with_error!(&env, Error::CampaignHasMilestones);
        }
        if !Self::successful(&env, &config, &state) {
            panic_with_error!(&env, Error::CampaignNotSuccessful);
        }
        if state.claimed {
            panic_with_error!(&env, Error::AlreadyClaimed);
        }

        let amount = state.pledged;
        let fee = fees::platform_fee(amount, get_platform_fee_bps(&env))
            .unwrap_or_else(|| panic_with_error!(&env, Error::Overflow));
        let net = amount - fee;

        state.claimed = true;
        save_state(&env, campaign_id, &state);

        Self::pay_out(&env, &creator, net, fee);

        events::emit_funds_claimed(&env, campaign_id, creator, net, fee);
    }

    /// Mint the investor's equity tokens, 1:1 with the pledge. Any
    /// successful campaign; once per investor. The pledge record itself is
    /// untouched — it remains the escrow's liability for the refund paths.
    pub fn claim_tokens(env: Env, campaign_id: u64, investor: Address) {
        investor.require_auth();

        let (config, state) = load_campaign_pair(&env, campaign_id);
        if !Self::successful(&env, &config, &state) {
            panic_with_error!(&env, Error::CampaignNotSuccessful);
        }
        let pledge = get_pledge(&env, campaign_id, &investor);
        if pledge == 0 {
            panic_with_error!(&env, Error::NothingPledged);
        }
        if tokens_claimed(&env, campaign_id, &investor) {
            panic_with_error!(&env, Error::TokensAlreadyClaimed);
        }

        set_tokens_claimed(&env, campaign_id, &investor);

        let issuer = IssuerClient::new(&env, &get_equity_token(&env));
        issuer.mint(
            &env.current_contract_address(),
            &campaign_id,
            &investor,
            &pledge,
        );

        events::emit_tokens_claimed(&env, campaign_id, investor, pledge);
    }

    /// Mint the creator's reserved share of the equity supply
    /// (`pledged * founder_share_bps / 10_000`). Once.
    pub fn claim_founder_tokens(env: Env, campaign_id: u64, creator: Address) {
        creator.require_auth();

        let (config, mut state) = load_campaign_pair(&env, campaign_id);
        if config.creator != creator {
            panic_with_error!(&env, Error::NotCampaignCreator);
        }
        if !Self::successful(&env, &config, &state) {
            panic_with_error!(&env, Error::CampaignNotSuccessful);
        }
        if state.founder_tokens_claimed {
            panic_with_error!(&env, Error::FounderTokensAlreadyClaimed);
        }

        let amount = fees::share_of(state.pledged, config.founder_share_bps)
            .unwrap_or_else(|| panic_with_error!(&env, Error::Overflow));

        state.founder_tokens_claimed = true;
        save_state(&env, campaign_id, &state);

        if amount > 0 {
            let issuer = IssuerClient::new(&env, &get_equity_token(&env));
            issuer.mint(
                &env.current_contract_address(),
                &campaign_id,
                &creator,
                &amount,
            );
        }

        events::emit_founder_tokens_claimed(&env, campaign_id, creator, amount);
    }

    /// Return a failed campaign's pledge in full. Only after the deadline,
    /// only while the goal was missed; zeroes the pledge record.
    pub fn refund(env: Env, campaign_id: u64, investor: Address) {
        investor.require_auth();

        let (config, state) = load_campaign_pair(&env, campaign_id);
        if env.ledger().timestamp() < config.end_at {
            panic_with_error!(&env, Error::CampaignNotEnded);
        }
        if Self::successful(&env, &config, &state) {
            panic_with_error!(&env, Error::CampaignSuccessful);
        }
        let pledge = get_pledge(&env, campaign_id, &investor);
        if pledge == 0 {
            panic_with_error!(&env, Error::NothingPledged);
        }

        set_pledge(&env, campaign_id, &investor, 0);

        let payment = token::Client::new(&env, &get_payment_token(&env));
        payment.transfer(&env.current_contract_address(), &investor, &pledge);

        events::emit_refunded(&env, campaign_id, investor, pledge);
    }

    // ─────────────────────────────────────────────────────────
    // Milestones
    // ─────────────────────────────────────────────────────────

    /// Put the next milestone up for an investor vote. Creator only, after a
    /// successful deadline, strictly in schedule order: every earlier
    /// milestone must already be `Released`.
    ///
    /// Opens a Milestone proposal in the governance contract and binds its
    /// id to the milestone.
    pub fn submit_milestone_for_approval(env: Env, campaign_id: u64, creator: Address, index: u32) {
        creator.require_auth();

        let (config, state) = load_campaign_pair(&env, campaign_id);
        if config.creator != creator {
            panic_with_error!(&env, Error::NotCampaignCreator);
        }
        if !config.has_milestones {
            panic_with_error!(&env, Error::NoMilestones);
        }
        if env.ledger().timestamp() < config.end_at {
            panic_with_error!(&env, Error::CampaignNotEnded);
        }
        if !Self::successful(&env, &config, &state) {
            panic_with_error!(&env, Error::CampaignNotSuccessful);
        }
        if index >= config.milestone_count {
            panic_with_error!(&env, Error::MilestoneNotFound);
        }
        for earlier in 0..index {
            if load_milestone(&env, campaign_id, earlier).status != MilestoneStatus::Released {
                panic_with_error!(&env, Error::PreviousMilestoneNotCompleted);
            }
        }

        let mut milestone = load_milestone(&env, campaign_id, index);
        if milestone.status != MilestoneStatus::Pending {
            panic_with_error!(&env, Error::MilestoneNotPending);
        }

        let governance = GovernanceClient::new(&env, &get_governance(&env));
        let proposal_id = governance.create_milestone_proposal(
            &env.current_contract_address(),
            &creator,
            &campaign_id,
            &index,
            &milestone.title,
            &milestone.description,
        );

        milestone.status = MilestoneStatus::Voting;
        milestone.proposal_id = Some(proposal_id);
        save_milestone(&env, campaign_id, index, &milestone);

        events::emit_milestone_submitted(&env, campaign_id, index, proposal_id);
    }

    /// Governance execution callback: move a `Voting` milestone to
    /// `Approved` or `Rejected`. Only the bound governance contract.
    pub fn record_milestone_outcome(
        env: Env,
        governance: Address,
        campaign_id: u64,
        milestone_index: u32,
        approved: bool,
    ) {
        governance.require_auth();
        if governance != get_governance(&env) {
            panic_with_error!(&env, Error::NotGovernance);
        }

        let config = load_config(&env, campaign_id);
        if milestone_index >= config.milestone_count {
            panic_with_error!(&env, Error::MilestoneNotFound);
        }
        let mut milestone = load_milestone(&env, campaign_id, milestone_index);
        if milestone.status != MilestoneStatus::Voting {
            panic_with_error!(&env, Error::MilestoneNotVoting);
        }

        milestone.status = if approved {
            MilestoneStatus::Approved
        } else {
            MilestoneStatus::Rejected
        };
        save_milestone(&env, campaign_id, milestone_index, &milestone);

        events::emit_milestone_status_updated(&env, campaign_id, milestone_index, milestone.status);
    }

    /// Disburse an approved milestone's tranche: `pledged * bps / 10_000`
    /// minus the platform fee to the creator, the fee to the platform.
    /// Creator only; requires a passed vote, never just a submission.
    pub fn release_milestone_funds(env: Env, campaign_id: u64, creator: Address, index: u32) {
        creator.require_auth();

        let (config, mut state) = load_campaign_pair(&env, campaign_id);
        if config.creator != creator {
            panic_with_error!(&env, Error::NotCampaignCreator);
        }
        if index >= config.milestone_count {
            panic_with_error!(&env, Error::MilestoneNotFound);
        }
        let mut milestone = load_milestone(&env, campaign_id, index);
        if milestone.status != MilestoneStatus::Approved {
            panic_with_error!(&env, Error::MilestoneNotApproved);
        }

        let amount = fees::share_of(state.pledged, milestone.percentage_bps)
            .unwrap_or_else(|| panic_with_error!(&env, Error::Overflow));
        let fee = fees::platform_fee(amount, get_platform_fee_bps(&env))
            .unwrap_or_else(|| panic_with_error!(&env, Error::Overflow));
        let net = amount - fee;

        milestone.status = MilestoneStatus::Released;
        save_milestone(&env, campaign_id, index, &milestone);
        state.released_amount = state
            .released_amount
            .checked_add(amount)
            .unwrap_or_else(|| panic_with_error!(&env, Error::Overflow));
        save_state(&env, campaign_id, &state);

        Self::pay_out(&env, &creator, net, fee);

        events::emit_milestone_funds_released(
            &env,
            campaign_id,
            index,
            amount,
            net,
            fee,
            state.released_amount,
        );
    }

    /// Whole-campaign escape hatch once any milestone vote has failed:
    /// returns the investor's share of the still-escrowed funds
    /// (`pledge * unreleased / pledged` — the full pledge while nothing has
    /// been released) and zeroes their pledge.
    pub fn emergency_refund(env: Env, campaign_id: u64, investor: Address) {
        investor.require_auth();

        let (config, state) = load_campaign_pair(&env, campaign_id);
        let mut any_rejected = false;
        for index in 0..config.milestone_count {
            if load_milestone(&env, campaign_id, index).status == MilestoneStatus::Rejected {
                any_rejected = true;
                break;
            }
        }
        if !any_rejected {
            panic_with_error!(&env, Error::NoRejectedMilestone);
        }

        let pledge = get_pledge(&env, campaign_id, &investor);
        if pledge == 0 {
            panic_with_error!(&env, Error::NothingPledged);
        }

        let unreleased = state.pledged - state.released_amount;
        let amount = pledge
            .checked_mul(unreleased)
            .and_then(|v| v.checked_div(state.pledged))
            .unwrap_or_else(|| panic_with_error!(&env, Error::Overflow));

        set_pledge(&env, campaign_id, &investor, 0);

        let payment = token::Client::new(&env, &get_payment_token(&env));
        payment.transfer(&env.current_contract_address(), &investor, &amount);

        events::emit_emergency_refund(&env, campaign_id, investor, amount);
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    pub fn get_campaign(env: Env, campaign_id: u64) -> Campaign {
        load_campaign(&env, campaign_id)
    }

    pub fn get_pledge(env: Env, campaign_id: u64, investor: Address) -> i128 {
        load_config(&env, campaign_id);
        get_pledge(&env, campaign_id, &investor)
    }

    pub fn get_milestone(env: Env, campaign_id: u64, index: u32) -> Milestone {
        let config = load_config(&env, campaign_id);
        if index >= config.milestone_count {
            panic_with_error!(&env, Error::MilestoneNotFound);
        }
        load_milestone(&env, campaign_id, index)
    }

    pub fn get_campaign_milestones(env: Env, campaign_id: u64) -> Vec<Milestone> {
        let config = load_config(&env, campaign_id);
        load_milestones(&env, &config)
    }

    /// Escrow still held for the campaign: `pledged - released_amount`.
    pub fn get_unreleased_funds(env: Env, campaign_id: u64) -> i128 {
        let state = load_state(&env, campaign_id);
        state.pledged - state.released_amount
    }

    pub fn get_platform_fee_bps(env: Env) -> u32 {
        get_platform_fee_bps(&env)
    }

    // ─────────────────────────────────────────────────────────
    // Internal Helpers
    // ─────────────────────────────────────────────────────────

    fn successful(env: &Env, config: &CampaignConfig, state: &CampaignState) -> bool {
        env.ledger().timestamp() >= config.end_at && state.pledged >= config.goal
    }

    fn create_campaign_inner(
        env: &Env,
        creator: Address,
        name: String,
        token_name: String,
        token_symbol: String,
        goal: i128,
        duration_days: u64,
        founder_share_bps: u32,
        milestone_count: u32,
    ) -> u64 {
        if !is_initialized(env) {
            panic_with_error!(env, Error::NotInitialized);
        }
        if goal <= 0 {
            panic_with_error!(env, Error::InvalidGoal);
        }
        if !(MIN_DURATION_DAYS..=MAX_DURATION_DAYS).contains(&duration_days) {
            panic_with_error!(env, Error::InvalidDuration);
        }
        if founder_share_bps > MAX_FOUNDER_SHARE_BPS {
            panic_with_error!(env, Error::InvalidFounderShare);
        }

        let id = next_campaign_id(env);
        let start_at = env.ledger().timestamp();
        let config = CampaignConfig {
            id,
            creator: creator.clone(),
            name,
            goal,
            start_at,
            end_at: start_at + duration_days * SECONDS_PER_DAY,
            founder_share_bps,
            has_milestones: milestone_count > 0,
            milestone_count,
        };
        save_new_campaign(env, &config);

        let issuer = IssuerClient::new(env, &get_equity_token(env));
        issuer.register_token(
            &env.current_contract_address(),
            &id,
            &token_name,
            &token_symbol,
        );

        events::emit_campaign_created(
            env,
            id,
            creator,
            goal,
            config.end_at,
            config.has_milestones,
        );
        id
    }

    /// Send a creator-bound payout and its fee. The caller has already
    /// zeroed / flagged the source balance.
    fn pay_out(env: &Env, creator: &Address, net: i128, fee: i128) {
        let payment = token::Client::new(env, &get_payment_token(env));
        if net > 0 {
            payment.transfer(&env.current_contract_address(), creator, &net);
        }
        if fee > 0 {
            payment.transfer(&env.current_contract_address(), &get_platform_wallet(env), &fee);
        }
    }
}
