#![allow(dead_code)]

extern crate std;

use crate::types::{Campaign, Milestone, MilestoneStatus};

/// INV-1: released and still-escrowed funds always partition the pledged
/// total: `released_amount + unreleased == pledged`.
pub fn assert_conservation(campaign: &Campaign, unreleased: i128) {
    assert_eq!(
        campaign.released_amount + unreleased,
        campaign.pledged,
        "INV-1 violated: campaign {}: {} released + {} unreleased != {} pledged",
        campaign.id,
        campaign.released_amount,
        unreleased,
        campaign.pledged
    );
}

/// INV-2: the pledged total never goes negative and always covers what has
/// been released.
pub fn assert_released_within_pledged(campaign: &Campaign) {
    assert!(
        campaign.pledged >= 0,
        "INV-2 violated: campaign {} has negative pledged ({})",
        campaign.id,
        campaign.pledged
    );
    assert!(
        campaign.released_amount <= campaign.pledged,
        "INV-2 violated: campaign {} released {} of only {} pledged",
        campaign.id,
        campaign.released_amount,
        campaign.pledged
    );
}

/// INV-3: a lump-sum claim and a milestone schedule are mutually exclusive.
pub fn assert_claim_excludes_milestones(campaign: &Campaign) {
    if campaign.claimed {
        assert!(
            !campaign.has_milestones,
            "INV-3 violated: campaign {} claimed despite a milestone schedule",
            campaign.id
        );
    }
}

/// INV-4: milestone percentages sum to exactly 100% (10_000 bps).
pub fn assert_percentages_sum(milestones: &[Milestone]) {
    let total: u32 = milestones.iter().map(|m| m.percentage_bps).sum();
    assert_eq!(
        total, 10_000,
        "INV-4 violated: milestone percentages sum to {} bps",
        total
    );
}

/// INV-5: milestone status transition validity. Only forward transitions:
///   Pending -> Voting
///   Voting  -> Approved | Rejected
///   Approved -> Released
///   Released, Rejected -> (none)
pub fn assert_valid_milestone_transition(from: &MilestoneStatus, to: &MilestoneStatus) {
    let valid = matches!(
        (from, to),
        (MilestoneStatus::Pending, MilestoneStatus::Voting)
            | (MilestoneStatus::Voting, MilestoneStatus::Approved)
            | (MilestoneStatus::Voting, MilestoneStatus::Rejected)
            | (MilestoneStatus::Approved, MilestoneStatus::Released)
    );
    assert!(
        valid,
        "INV-5 violated: invalid milestone transition from {:?} to {:?}",
        from, to
    );
}

/// INV-6: sequential release — no milestone may leave Pending while an
/// earlier one has not been Released.
pub fn assert_sequential_progress(milestones: &[Milestone]) {
    let mut earlier_all_released = true;
    for (i, milestone) in milestones.iter().enumerate() {
        if !earlier_all_released {
            assert_eq!(
                milestone.status,
                MilestoneStatus::Pending,
                "INV-6 violated: milestone {} progressed before its predecessor released",
                i
            );
        }
        if milestone.status != MilestoneStatus::Released {
            earlier_all_released = false;
        }
    }
}

/// INV-7: fields fixed at creation never change.
pub fn assert_campaign_immutable_fields(original: &Campaign, current: &Campaign) {
    assert_eq!(original.id, current.id, "INV-7 violated: id changed");
    assert_eq!(
        original.creator, current.creator,
        "INV-7 violated: creator changed"
    );
    assert_eq!(original.goal, current.goal, "INV-7 violated: goal changed");
    assert_eq!(
        original.start_at, current.start_at,
        "INV-7 violated: start_at changed"
    );
    assert_eq!(
        original.end_at, current.end_at,
        "INV-7 violated: end_at changed"
    );
    assert_eq!(
        original.has_milestones, current.has_milestones,
        "INV-7 violated: has_milestones changed"
    );
    assert_eq!(
        original.founder_share_bps, current.founder_share_bps,
        "INV-7 violated: founder_share_bps changed"
    );
}

/// Run every stateless campaign invariant.
pub fn assert_all_campaign_invariants(campaign: &Campaign, unreleased: i128) {
    assert_conservation(campaign, unreleased);
    assert_released_within_pledged(campaign);
    assert_claim_excludes_milestones(campaign);
}
