//! Client interfaces of the two collaborators this contract calls into.
//!
//! Declared locally as `#[contractclient]` traits so the dependency between
//! the escrow and governance contracts stays a pair of narrow interfaces
//! rather than a crate cycle. Signatures must match the deployed contracts'
//! entry points exactly.

use soroban_sdk::{contractclient, Address, Env};

/// The escrow's governance-facing callback surface.
#[contractclient(name = "EscrowClient")]
pub trait Escrow {
    /// Report a finished milestone vote. Only the bound governance address
    /// may call this on the escrow side.
    fn record_milestone_outcome(
        env: Env,
        governance: Address,
        campaign_id: u64,
        milestone_index: u32,
        approved: bool,
    );
}

/// The equity token issuer's read surface used for weights and thresholds.
#[contractclient(name = "VotingTokenClient")]
pub trait VotingToken {
    fn balance(env: Env, campaign_id: u64, holder: Address) -> i128;

    fn total_supply(env: Env, campaign_id: u64) -> i128;
}
