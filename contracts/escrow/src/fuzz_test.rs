extern crate std;

use proptest::prelude::*;
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token, vec, Address, Env, String,
};

use crowdfund_governance::{CrowdfundGovernance, CrowdfundGovernanceClient, VOTING_PERIOD};
use equity_token::{EquityToken, EquityTokenClient};

use crate::fees;
use crate::invariants::*;
use crate::{CrowdfundEscrow, CrowdfundEscrowClient, MilestoneStatus};

const START: u64 = 1_700_000_000;
const DURATION_DAYS: u64 = 30;
const FEE_BPS: u32 = 200;

// ── Helpers ─────────────────────────────────────────────────────────

struct Fixture<'a> {
    env: Env,
    escrow: CrowdfundEscrowClient<'a>,
    escrow_addr: Address,
    gov: CrowdfundGovernanceClient<'a>,
    payment: token::Client<'a>,
    payment_sac: token::StellarAssetClient<'a>,
    platform: Address,
}

fn setup<'a>() -> Fixture<'a> {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().with_mut(|li| li.timestamp = START);

    let payment_admin = Address::generate(&env);
    let payment_contract = env.register_stellar_asset_contract_v2(payment_admin);
    let payment = token::Client::new(&env, &payment_contract.address());
    let payment_sac = token::StellarAssetClient::new(&env, &payment_contract.address());

    let issuer_id = env.register(EquityToken, ());
    let issuer = EquityTokenClient::new(&env, &issuer_id);
    issuer.initialize(&Address::generate(&env));

    let gov_id = env.register(CrowdfundGovernance, ());
    let gov = CrowdfundGovernanceClient::new(&env, &gov_id);

    let escrow_addr = env.register(CrowdfundEscrow, ());
    let escrow = CrowdfundEscrowClient::new(&env, &escrow_addr);

    gov.init(&escrow_addr, &issuer_id);
    let platform = Address::generate(&env);
    escrow.init(
        &platform,
        &payment_contract.address(),
        &gov_id,
        &issuer_id,
        &FEE_BPS,
    );
    issuer.add_minter(&escrow_addr);

    Fixture {
        env,
        escrow,
        escrow_addr,
        gov,
        payment,
        payment_sac,
        platform,
    }
}

fn create_lump(f: &Fixture, creator: &Address, goal: i128) -> u64 {
    f.escrow.create_campaign(
        creator,
        &String::from_str(&f.env, "c"),
        &String::from_str(&f.env, "Equity"),
        &String::from_str(&f.env, "EQT"),
        &goal,
        &DURATION_DAYS,
        &0,
    )
}

fn pass_deadline(env: &Env) {
    env.ledger().with_mut(|li| li.timestamp += DURATION_DAYS * 86_400);
}

// ── 1. Pure fee math ────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn fuzz_fee_and_net_partition(
        amount in 0i128..=1_000_000_000_000_000i128,
        fee_bps in 0u32..=10_000u32,
    ) {
        let fee = fees::platform_fee(amount, fee_bps).unwrap();
        let net = fees::net_of_fee(amount, fee_bps).unwrap();
        prop_assert_eq!(fee + net, amount);
        prop_assert!(fee >= 0);
        prop_assert!(fee <= amount);
    }

    #[test]
    fn fuzz_tranche_partition_loses_at_most_dust(
        a in 1u32..=9_998u32,
        b in 1u32..=9_998u32,
        pledged in 1i128..=1_000_000_000_000i128,
    ) {
        prop_assume!(a + b < 10_000);
        let c = 10_000 - a - b;

        let tranches = [
            fees::share_of(pledged, a).unwrap(),
            fees::share_of(pledged, b).unwrap(),
            fees::share_of(pledged, c).unwrap(),
        ];
        let total: i128 = tranches.iter().sum();

        // Integer division can only strand less than one unit per tranche.
        prop_assert!(total <= pledged);
        prop_assert!(pledged - total < 3);
    }
}

// ── 2. Pledge ledger conservation ───────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn fuzz_pledge_unpledge_conservation(
        amounts in prop::collection::vec(1i128..=10_000i128, 1..=6),
    ) {
        let f = setup();
        let creator = Address::generate(&f.env);
        let id = create_lump(&f, &creator, 1_000_000);

        let mut expected_total: i128 = 0;
        for amount in &amounts {
            let investor = Address::generate(&f.env);
            f.payment_sac.mint(&investor, amount);
            f.escrow.pledge(&id, &investor, amount);

            // Everyone takes a third back while the window is open.
            let back = amount / 3;
            if back > 0 {
                f.escrow.unpledge(&id, &investor, &back);
            }
            expected_total += amount - back;

            let campaign = f.escrow.get_campaign(&id);
            prop_assert_eq!(campaign.pledged, expected_total);
            assert_all_campaign_invariants(&campaign, f.escrow.get_unreleased_funds(&id));
        }

        // The escrow's token balance is exactly the outstanding pledges.
        prop_assert_eq!(f.payment.balance(&f.escrow_addr), expected_total);
    }

    #[test]
    fn fuzz_failed_campaigns_refund_exactly_the_pledges(
        goal in 10_000i128..=100_000i128,
        amounts in prop::collection::vec(1i128..=3_000i128, 1..=3),
    ) {
        let total: i128 = amounts.iter().sum();
        prop_assume!(total < goal);

        let f = setup();
        let creator = Address::generate(&f.env);
        let id = create_lump(&f, &creator, goal);

        let mut investors = std::vec::Vec::new();
        for amount in &amounts {
            let investor = Address::generate(&f.env);
            f.payment_sac.mint(&investor, amount);
            f.escrow.pledge(&id, &investor, amount);
            investors.push((investor, *amount));
        }

        pass_deadline(&f.env);
        prop_assert!(!f.escrow.is_campaign_successful(&id));

        for (investor, amount) in &investors {
            f.escrow.refund(&id, investor);
            prop_assert_eq!(f.payment.balance(investor), *amount);
            prop_assert!(f.escrow.try_refund(&id, investor).is_err());
        }
        prop_assert_eq!(f.payment.balance(&f.escrow_addr), 0);
    }
}

// ── 3. Full milestone lifecycle stress ──────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn fuzz_milestone_schedule_conserves_escrow(
        a in 1u32..=9_998u32,
        b in 1u32..=9_998u32,
        pledge_amount in 1_000i128..=1_000_000i128,
    ) {
        prop_assume!(a + b < 10_000);
        let c = 10_000 - a - b;

        let f = setup();
        let creator = Address::generate(&f.env);
        let id = f.escrow.create_campaign_with_milestones(
            &creator,
            &String::from_str(&f.env, "c"),
            &String::from_str(&f.env, "Equity"),
            &String::from_str(&f.env, "EQT"),
            &pledge_amount,
            &DURATION_DAYS,
            &0,
            &vec![
                &f.env,
                String::from_str(&f.env, "one"),
                String::from_str(&f.env, "two"),
                String::from_str(&f.env, "three"),
            ],
            &vec![
                &f.env,
                String::from_str(&f.env, "d1"),
                String::from_str(&f.env, "d2"),
                String::from_str(&f.env, "d3"),
            ],
            &vec![&f.env, a, b, c],
            &vec![&f.env, 10u64, 20u64, 30u64],
        );

        let investor = Address::generate(&f.env);
        f.payment_sac.mint(&investor, &pledge_amount);
        f.escrow.pledge(&id, &investor, &pledge_amount);
        pass_deadline(&f.env);
        f.escrow.claim_tokens(&id, &investor);

        let mut expected_released: i128 = 0;
        for index in 0..3u32 {
            f.escrow.submit_milestone_for_approval(&id, &creator, &index);
            let proposal_id = f.escrow.get_milestone(&id, &index).proposal_id.unwrap();
            f.gov.vote(&investor, &proposal_id, &true);
            f.env.ledger().with_mut(|li| li.timestamp += VOTING_PERIOD);
            f.gov.execute_proposal(&proposal_id);
            f.escrow.release_milestone_funds(&id, &creator, &index);

            let milestone = f.escrow.get_milestone(&id, &index);
            prop_assert_eq!(milestone.status, MilestoneStatus::Released);

            expected_released += fees::share_of(pledge_amount, milestone.percentage_bps).unwrap();
            let campaign = f.escrow.get_campaign(&id);
            prop_assert_eq!(campaign.released_amount, expected_released);
            assert_all_campaign_invariants(&campaign, f.escrow.get_unreleased_funds(&id));
        }

        // Creator + platform together received exactly what was released,
        // and the rounding dust is all that remains in escrow.
        let paid_out = f.payment.balance(&creator) + f.payment.balance(&f.platform);
        prop_assert_eq!(paid_out, expected_released);
        prop_assert_eq!(
            f.payment.balance(&f.escrow_addr),
            pledge_amount - expected_released
        );
        prop_assert!(pledge_amount - expected_released < 3);
    }
}
