//! Shared data structures of the escrow contract.
//!
//! ## Config / State split
//!
//! A `Campaign` is internally stored as two separate ledger entries:
//!
//! - [`CampaignConfig`] — written once at creation; never mutated.
//! - [`CampaignState`] — written on every pledge, claim, and release.
//!
//! Pledges and milestone releases are the high-frequency writes; keeping the
//! mutable entry down to four fields keeps those writes cheap. The public
//! API exposes the reconstructed [`Campaign`] struct.
//!
//! ## Milestone status as a Finite-State Machine
//!
//! ```text
//! Pending ──► Voting ──► Approved ──► Released
//!                └──────► Rejected
//! ```
//!
//! `Released` and `Rejected` are terminal. A `Rejected` milestone acts as a
//! whole-campaign circuit breaker: it unlocks the emergency refund path for
//! every investor's remaining pledge, not just this tranche.

use soroban_sdk::{contracttype, Address, String};

/// Lifecycle state of a single milestone.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MilestoneStatus {
    /// Not yet submitted for approval.
    Pending,
    /// Submitted; a governance proposal is (or was) collecting votes.
    Voting,
    /// Vote passed; the creator may release the tranche.
    Approved,
    /// Vote failed; emergency refunds are unlocked campaign-wide.
    Rejected,
    /// Tranche disbursed to the creator.
    Released,
}

/// A percentage-sized tranche of a campaign's escrow, index-addressed within
/// the campaign and released strictly in order.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Milestone {
    pub title: String,
    pub description: String,
    /// Tranche size in basis points of total *pledged* (not of goal) — an
    /// overfunded campaign scales every tranche up proportionally.
    pub percentage_bps: u32,
    /// Informational target date (campaign end + offset). Never consulted by
    /// the release logic.
    pub deadline: u64,
    pub status: MilestoneStatus,
    /// Governance proposal bound at submission.
    pub proposal_id: Option<u64>,
}

/// Immutable campaign configuration, written once at creation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignConfig {
    pub id: u64,
    pub creator: Address,
    pub name: String,
    pub goal: i128,
    pub start_at: u64,
    pub end_at: u64,
    /// Basis points of the investor token supply mintable by the creator.
    pub founder_share_bps: u32,
    /// Selects the disbursement path: lump-sum claim or staged tranches.
    pub has_milestones: bool,
    pub milestone_count: u32,
}

/// Mutable campaign state, updated on pledges, claims, and releases.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignState {
    /// Sum of outstanding pledges. Frozen at the deadline; after it, only
    /// per-investor pledge records shrink (refund paths).
    pub pledged: i128,
    /// Cumulative amount disbursed across released milestones.
    pub released_amount: i128,
    /// Creator has taken the non-milestone lump sum.
    pub claimed: bool,
    pub founder_tokens_claimed: bool,
}

/// Full public view of a campaign, reconstructed from the split entries.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Campaign {
    pub id: u64,
    pub creator: Address,
    pub name: String,
    pub goal: i128,
    pub pledged: i128,
    pub start_at: u64,
    pub end_at: u64,
    pub claimed: bool,
    pub founder_share_bps: u32,
    pub founder_tokens_claimed: bool,
    pub has_milestones: bool,
    pub milestone_count: u32,
    pub released_amount: i128,
}
