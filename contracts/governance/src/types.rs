//! Shared data structures of the governance contract.
//!
//! ## Status as a pure function
//!
//! A proposal's lifecycle position is never stored. [`Proposal::status_at`]
//! derives it from `(now, start_time, end_time, executed, canceled)`:
//!
//! ```text
//! Pending ──► Active ──► Ended ──► Executed
//!               └──────► Canceled
//! ```
//!
//! `Executed` and `Canceled` are terminal. Storing the status alongside the
//! timestamps would let the two views drift; deriving it cannot.

use soroban_sdk::{contracttype, Address, String};

/// What a proposal decides.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ProposalKind {
    /// Advisory, campaign-scoped vote with no on-execution side effect.
    General,
    /// Opened by the escrow for a specific milestone; execution reports the
    /// outcome back and moves the milestone to Approved or Rejected.
    Milestone,
}

/// Derived lifecycle position, see [`Proposal::status_at`].
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ProposalStatus {
    Pending,
    Active,
    Ended,
    Executed,
    Canceled,
}

/// A time-boxed, token-weighted vote.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    /// Global sequential id.
    pub id: u64,
    /// Campaign whose equity token carries the voting weight.
    pub campaign_id: u64,
    /// General proposals: the token holder who opened it.
    /// Milestone proposals: the campaign creator, on whose behalf the escrow
    /// opened it (and the only address allowed to cancel it).
    pub proposer: Address,
    pub title: String,
    pub description: String,
    /// Token-weight sum of supporting votes.
    pub for_votes: i128,
    /// Token-weight sum of opposing votes.
    pub against_votes: i128,
    pub start_time: u64,
    /// `start_time` + the fixed voting period.
    pub end_time: u64,
    pub executed: bool,
    pub canceled: bool,
    pub kind: ProposalKind,
    /// Set only for `ProposalKind::Milestone`.
    pub milestone_index: Option<u32>,
}

impl Proposal {
    /// Lifecycle position at `now`. Pure; never persisted.
    pub fn status_at(&self, now: u64) -> ProposalStatus {
        if self.canceled {
            ProposalStatus::Canceled
        } else if self.executed {
            ProposalStatus::Executed
        } else if now < self.start_time {
            ProposalStatus::Pending
        } else if now < self.end_time {
            ProposalStatus::Active
        } else {
            ProposalStatus::Ended
        }
    }

    /// Simple majority of cast votes; ties fail.
    pub fn passed(&self) -> bool {
        self.for_votes > self.against_votes
    }
}

/// One address's recorded vote on one proposal.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoteRecord {
    pub voter: Address,
    pub support: bool,
    /// Equity-token balance at the moment the vote was cast.
    pub weight: i128,
}

/// Tally snapshot returned by `get_voting_results`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VotingResults {
    /// Percent of cast weight in favour, 0 when nothing was cast.
    pub for_percent: u32,
    /// Percent of cast weight against, 0 when nothing was cast.
    pub against_percent: u32,
    pub total_votes: i128,
}
