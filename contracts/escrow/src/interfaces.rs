//! Client interfaces of the two collaborators this contract calls into.
//!
//! Declared locally as `#[contractclient]` traits so the mutual
//! escrow↔governance callback pair stays a pair of narrow interfaces rather
//! than a crate cycle. Signatures must match the deployed contracts' entry
//! points exactly.

use soroban_sdk::{contractclient, Address, Env, String};

/// The governance contract's escrow-facing surface.
#[contractclient(name = "GovernanceClient")]
pub trait Governance {
    /// Open a Milestone-type proposal. The governance side only accepts this
    /// from the one escrow address bound at its construction.
    fn create_milestone_proposal(
        env: Env,
        escrow: Address,
        proposer: Address,
        campaign_id: u64,
        milestone_index: u32,
        title: String,
        description: String,
    ) -> u64;
}

/// The equity token issuer's mint surface.
#[contractclient(name = "IssuerClient")]
pub trait Issuer {
    fn register_token(env: Env, minter: Address, campaign_id: u64, name: String, symbol: String);

    fn mint(env: Env, minter: Address, campaign_id: u64, to: Address, amount: i128);
}
