//! # Crowdfund Governance Contract
//!
//! Token-weighted voting for crowdfund campaigns. Proposals come in two
//! kinds: **General** (advisory, opened by any sufficiently large token
//! holder) and **Milestone** (opened exclusively by the bound escrow
//! contract when a campaign creator submits a milestone for approval).
//! Executing a milestone proposal reports the outcome back to the escrow,
//! which moves the milestone to Approved or Rejected.
//!
//! ## Architecture
//!
//! The escrow and the equity token issuer are injected at [`CrowdfundGovernance::init`]
//! and reached through the narrow trait clients in [`interfaces`]; this
//! contract holds no other external references. Storage access lives in
//! [`storage`], event emission in [`events`].
//!
//! ## Voting weight
//!
//! A vote weighs the voter's equity-token balance *at the moment of voting*,
//! not a snapshot taken at proposal creation. A holder can therefore acquire
//! more weight mid-window, or vote and then transfer the tokens away without
//! losing the already-cast weight. This is a documented protocol property,
//! not an oversight; deployments that need snapshot determinism must put a
//! non-transferable token behind the issuer interface.

#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, panic_with_error, Address, Env, String,
};

pub mod events;
pub mod interfaces;
mod storage;
mod types;


use interfaces::{EscrowClient, VotingTokenClient};
use storage::{
    clear_milestone_binding, get_escrow, get_milestone_binding, get_vote, get_voting_token,
    is_initialized, load_proposal, next_proposal_id, save_proposal, save_vote,
    set_collaborators, set_milestone_binding,
};
pub use types::{Proposal, ProposalKind, ProposalStatus, VoteRecord, VotingResults};

/// Fixed voting window for every proposal.
pub const VOTING_PERIOD: u64 = 3 * 86_400;

/// Share of a campaign's token supply (in bps) required to open a General
/// proposal. Re-checked fresh on every call, never cached.
pub const PROPOSAL_THRESHOLD_BPS: i128 = 100;

const BPS_DENOM: i128 = 10_000;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    ProposalNotFound = 3,
    InsufficientTokens = 4,
    NotEscrow = 5,
    MilestoneProposalExists = 6,
    VotingClosed = 7,
    VotingStillActive = 8,
    AlreadyVoted = 9,
    AlreadyExecuted = 10,
    ProposalCanceled = 11,
    NotProposer = 12,
    NoVotingPower = 13,
    Overflow = 14,
}

#[contract]
pub struct CrowdfundGovernance;

#[contractimpl]
impl CrowdfundGovernance {
    // ─────────────────────────────────────────────────────────
    // Initialisation
    // ─────────────────────────────────────────────────────────

    /// Bind the one authorized escrow and the voting-token issuer.
    /// Exactly once, immediately after deployment.
    pub fn init(env: Env, escrow: Address, voting_token: Address) {
        if is_initialized(&env) {
            panic_with_error!(&env, Error::AlreadyInitialized);
        }
        set_collaborators(&env, &escrow, &voting_token);
    }

    // ─────────────────────────────────────────────────────────
    // Proposal creation
    // ─────────────────────────────────────────────────────────

    /// Open a General proposal scoped to `campaign_id`.
    ///
    /// The proposer must hold at least 1% of the campaign's equity-token
    /// supply at call time; a campaign with no minted tokens cannot host
    /// proposals at all.
    pub fn create_proposal(
        env: Env,
        proposer: Address,
        campaign_id: u64,
        title: String,
        description: String,
    ) -> u64 {
        proposer.require_auth();

        let token = VotingTokenClient::new(&env, &get_voting_token(&env));
        let supply = token.total_supply(&campaign_id);
        let balance = token.balance(&campaign_id, &proposer);

        // balance / supply >= threshold_bps / 10_000, in integers.
        let scaled_balance = balance
            .checked_mul(BPS_DENOM)
            .unwrap_or_else(|| panic_with_error!(&env, Error::Overflow));
        let required = supply
            .checked_mul(PROPOSAL_THRESHOLD_BPS)
            .unwrap_or_else(|| panic_with_error!(&env, Error::Overflow));
        if supply == 0 || scaled_balance < required {
            panic_with_error!(&env, Error::InsufficientTokens);
        }

        Self::open_proposal(
            &env,
            campaign_id,
            proposer,
            title,
            description,
            ProposalKind::General,
            None,
        )
    }

    /// Open a Milestone proposal. Only the bound escrow may call this;
    /// `proposer` is the campaign creator on whose behalf it acts.
    ///
    /// At most one outstanding proposal may exist per
    /// `(campaign, milestone)` pair; the binding is released on execution or
    /// cancellation.
    pub fn create_milestone_proposal(
        env: Env,
        escrow: Address,
        proposer: Address,
        campaign_id: u64,
        milestone_index: u32,
        title: String,
        description: String,
    ) -> u64 {
        escrow.require_auth();
        if escrow != get_escrow(&env) {
            panic_with_error!(&env, Error::NotEscrow);
        }
        if get_milestone_binding(&env, campaign_id, milestone_index).is_some() {
            panic_with_error!(&env, Error::MilestoneProposalExists);
        }

        let id = Self::open_proposal(
            &env,
            campaign_id,
            proposer,
            title,
            description,
            ProposalKind::Milestone,
            Some(milestone_index),
        );
        set_milestone_binding(&env, campaign_id, milestone_index, id);
        id
    }

    // ─────────────────────────────────────────────────────────
    // Voting
    // ─────────────────────────────────────────────────────────

    /// Cast a vote. One vote per `(proposal, voter)` — a second attempt
    /// fails and leaves the tallies untouched.
    pub fn vote(env: Env, voter: Address, proposal_id: u64, support: bool) {
        voter.require_auth();

        let mut proposal = load_proposal(&env, proposal_id);
        if proposal.canceled {
            panic_with_error!(&env, Error::ProposalCanceled);
        }
        let now = env.ledger().timestamp();
        if now < proposal.start_time || now >= proposal.end_time {
            panic_with_error!(&env, Error::VotingClosed);
        }
        if get_vote(&env, proposal_id, &voter).is_some() {
            panic_with_error!(&env, Error::AlreadyVoted);
        }

        // Live balance at vote time; see the module docs for the
        // transfer-timing caveat this carries.
        let token = VotingTokenClient::new(&env, &get_voting_token(&env));
        let weight = token.balance(&proposal.campaign_id, &voter);
        if weight <= 0 {
            panic_with_error!(&env, Error::NoVotingPower);
        }

        if support {
            proposal.for_votes = proposal
                .for_votes
                .checked_add(weight)
                .unwrap_or_else(|| panic_with_error!(&env, Error::Overflow));
        } else {
            proposal.against_votes = proposal
                .against_votes
                .checked_add(weight)
                .unwrap_or_else(|| panic_with_error!(&env, Error::Overflow));
        }

        save_vote(
            &env,
            proposal_id,
            &VoteRecord {
                voter: voter.clone(),
                support,
                weight,
            },
        );
        save_proposal(&env, &proposal);

        events::emit_voted(
            &env,
            proposal_id,
            voter,
            support,
            weight,
            proposal.for_votes,
            proposal.against_votes,
        );
    }

    // ─────────────────────────────────────────────────────────
    // Execution & cancellation
    // ─────────────────────────────────────────────────────────

    /// Finalize a proposal once its window has elapsed. Callable by anyone,
    /// strictly once. Passing means `for_votes > against_votes`; ties fail.
    ///
    /// Milestone proposals additionally report the outcome to the escrow,
    /// which flips the milestone to Approved or Rejected.
    pub fn execute_proposal(env: Env, proposal_id: u64) {
        let mut proposal = load_proposal(&env, proposal_id);
        if proposal.canceled {
            panic_with_error!(&env, Error::ProposalCanceled);
        }
        if proposal.executed {
            panic_with_error!(&env, Error::AlreadyExecuted);
        }
        if env.ledger().timestamp() < proposal.end_time {
            panic_with_error!(&env, Error::VotingStillActive);
        }

        let passed = proposal.passed();
        // Local state is final before the cross-contract callback runs.
        proposal.executed = true;
        save_proposal(&env, &proposal);

        match proposal.kind {
            ProposalKind::General => {
                events::emit_proposal_executed(
                    &env,
                    proposal_id,
                    proposal.campaign_id,
                    passed,
                    proposal.for_votes,
                    proposal.against_votes,
                );
            }
            ProposalKind::Milestone => {
                // Unwrap is safe: milestone proposals always carry an index.
                let index = proposal.milestone_index.unwrap_or_else(|| {
                    panic_with_error!(&env, Error::ProposalNotFound)
                });
                clear_milestone_binding(&env, proposal.campaign_id, index);

                let escrow = EscrowClient::new(&env, &get_escrow(&env));
                escrow.record_milestone_outcome(
                    &env.current_contract_address(),
                    &proposal.campaign_id,
                    &index,
                    &passed,
                );

                events::emit_milestone_proposal_executed(
                    &env,
                    proposal_id,
                    proposal.campaign_id,
                    index,
                    passed,
                    proposal.for_votes,
                    proposal.against_votes,
                );
            }
        }
    }

    /// Withdraw a proposal before execution. Proposer only.
    ///
    /// Canceling a Milestone proposal releases the 1:1 binding but performs
    /// no milestone transition — the milestone stays in Voting on the escrow
    /// side with no recovery path.
    pub fn cancel_proposal(env: Env, proposer: Address, proposal_id: u64) {
        proposer.require_auth();

        let mut proposal = load_proposal(&env, proposal_id);
        if proposal.proposer != proposer {
            panic_with_error!(&env, Error::NotProposer);
        }
        if proposal.executed {
            panic_with_error!(&env, Error::AlreadyExecuted);
        }
        if proposal.canceled {
            panic_with_error!(&env, Error::ProposalCanceled);
        }

        proposal.canceled = true;
        save_proposal(&env, &proposal);

        if let Some(index) = proposal.milestone_index {
            clear_milestone_binding(&env, proposal.campaign_id, index);
        }

        events::emit_proposal_canceled(&env, proposal_id, proposal.campaign_id, proposer);
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    pub fn get_proposal(env: Env, proposal_id: u64) -> Proposal {
        load_proposal(&env, proposal_id)
    }

    /// Percentages of cast weight plus the total. All zeroes when no vote
    /// has been cast.
    pub fn get_voting_results(env: Env, proposal_id: u64) -> VotingResults {
        let proposal = load_proposal(&env, proposal_id);
        let total = proposal.for_votes + proposal.against_votes;
        if total == 0 {
            return VotingResults {
                for_percent: 0,
                against_percent: 0,
                total_votes: 0,
            };
        }
        VotingResults {
            for_percent: ((proposal.for_votes * 100) / total) as u32,
            against_percent: ((proposal.against_votes * 100) / total) as u32,
            total_votes: total,
        }
    }

    pub fn get_proposal_status(env: Env, proposal_id: u64) -> ProposalStatus {
        let proposal = load_proposal(&env, proposal_id);
        proposal.status_at(env.ledger().timestamp())
    }

    /// Seconds left in the voting window, 0 once it has elapsed.
    pub fn get_time_remaining(env: Env, proposal_id: u64) -> u64 {
        let proposal = load_proposal(&env, proposal_id);
        let now = env.ledger().timestamp();
        proposal.end_time.saturating_sub(now)
    }

    pub fn get_vote(env: Env, proposal_id: u64, voter: Address) -> Option<VoteRecord> {
        get_vote(&env, proposal_id, &voter)
    }

    pub fn has_voted(env: Env, proposal_id: u64, voter: Address) -> bool {
        get_vote(&env, proposal_id, &voter).is_some()
    }

    // ─────────────────────────────────────────────────────────
    // Internal Helpers
    // ─────────────────────────────────────────────────────────

    fn open_proposal(
        env: &Env,
        campaign_id: u64,
        proposer: Address,
        title: String,
        description: String,
        kind: ProposalKind,
        milestone_index: Option<u32>,
    ) -> u64 {
        let id = next_proposal_id(env);
        let now = env.ledger().timestamp();
        let proposal = Proposal {
            id,
            campaign_id,
            proposer: proposer.clone(),
            title,
            description,
            for_votes: 0,
            against_votes: 0,
            start_time: now,
            end_time: now + VOTING_PERIOD,
            executed: false,
            canceled: false,
            kind: kind.clone(),
            milestone_index,
        };
        save_proposal(env, &proposal);

        events::emit_proposal_created(
            env,
            id,
            campaign_id,
            proposer,
            kind,
            milestone_index,
            proposal.end_time,
        );
        id
    }
}
