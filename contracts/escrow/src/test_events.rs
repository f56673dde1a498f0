extern crate std;

use soroban_sdk::{
    testutils::{Address as _, Events, Ledger},
    token, vec, Address, Env, IntoVal, String, TryIntoVal,
};

use crowdfund_governance::{CrowdfundGovernance, CrowdfundGovernanceClient, VOTING_PERIOD};
use equity_token::{EquityToken, EquityTokenClient};

use crate::events::{EmergencyRefund, MilestoneStatusUpdated, Pledged};
use crate::{CrowdfundEscrow, CrowdfundEscrowClient, MilestoneStatus};

const START: u64 = 1_700_000_000;
const DURATION_DAYS: u64 = 30;

struct Fixture<'a> {
    env: Env,
    escrow: CrowdfundEscrowClient<'a>,
    escrow_addr: Address,
    gov: CrowdfundGovernanceClient<'a>,
    payment_sac: token::StellarAssetClient<'a>,
}

fn setup<'a>() -> Fixture<'a> {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().with_mut(|li| li.timestamp = START);

    let payment_contract = env.register_stellar_asset_contract_v2(Address::generate(&env));
    let payment_sac = token::StellarAssetClient::new(&env, &payment_contract.address());

    let issuer_id = env.register(EquityToken, ());
    let issuer = EquityTokenClient::new(&env, &issuer_id);
    issuer.initialize(&Address::generate(&env));

    let gov_id = env.register(CrowdfundGovernance, ());
    let gov = CrowdfundGovernanceClient::new(&env, &gov_id);

    let escrow_addr = env.register(CrowdfundEscrow, ());
    let escrow = CrowdfundEscrowClient::new(&env, &escrow_addr);

    gov.init(&escrow_addr, &issuer_id);
    escrow.init(
        &Address::generate(&env),
        &payment_contract.address(),
        &gov_id,
        &issuer_id,
        &200,
    );
    issuer.add_minter(&escrow_addr);

    Fixture {
        env,
        escrow,
        escrow_addr,
        gov,
        payment_sac,
    }
}

fn create_staged(f: &Fixture, creator: &Address) -> u64 {
    f.escrow.create_campaign_with_milestones(
        creator,
        &String::from_str(&f.env, "Solar Farm"),
        &String::from_str(&f.env, "Solar Equity"),
        &String::from_str(&f.env, "SOL"),
        &1_000,
        &DURATION_DAYS,
        &0,
        &vec![&f.env, String::from_str(&f.env, "Prototype")],
        &vec![&f.env, String::from_str(&f.env, "Working prototype")],
        &vec![&f.env, 10_000u32],
        &vec![&f.env, 30u64],
    )
}

#[test]
fn pledge_emits_amount_and_running_total() {
    let f = setup();
    let creator = Address::generate(&f.env);
    let id = create_staged(&f, &creator);
    let investor = Address::generate(&f.env);
    f.payment_sac.mint(&investor, &1_000);

    f.escrow.pledge(&id, &investor, &600);

    let all_events = f.env.events().all();
    let last_event = all_events.last().unwrap();
    assert_eq!(last_event.0, f.escrow_addr);

    let expected_topics = vec![
        &f.env,
        soroban_sdk::symbol_short!("pledged").into_val(&f.env),
        id.into_val(&f.env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let data: Pledged = last_event.2.try_into_val(&f.env).unwrap();
    assert_eq!(
        data,
        Pledged {
            campaign_id: id,
            investor,
            amount: 600,
            total_pledged: 600,
        }
    );
}

#[test]
fn milestone_outcome_emits_resulting_status() {
    let f = setup();
    let creator = Address::generate(&f.env);
    let id = create_staged(&f, &creator);
    let investor = Address::generate(&f.env);
    f.payment_sac.mint(&investor, &1_000);
    f.escrow.pledge(&id, &investor, &1_000);
    f.env
        .ledger()
        .with_mut(|li| li.timestamp += DURATION_DAYS * 86_400);
    f.escrow.claim_tokens(&id, &investor);

    f.escrow.submit_milestone_for_approval(&id, &creator, &0);
    let proposal_id = f.escrow.get_milestone(&id, &0).proposal_id.unwrap();
    f.gov.vote(&investor, &proposal_id, &false);
    f.env.ledger().with_mut(|li| li.timestamp += VOTING_PERIOD);
    f.gov.execute_proposal(&proposal_id);

    // The executing invocation publishes the escrow's status event before
    // governance's own execution event; pick it out by topic.
    let expected_topics = vec![
        &f.env,
        soroban_sdk::symbol_short!("ms_status").into_val(&f.env),
        id.into_val(&f.env),
    ];
    let all_events = f.env.events().all();
    let mut found = false;
    for event in all_events.iter() {
        if event.0 == f.escrow_addr && event.1 == expected_topics {
            let data: MilestoneStatusUpdated = event.2.try_into_val(&f.env).unwrap();
            assert_eq!(
                data,
                MilestoneStatusUpdated {
                    campaign_id: id,
                    milestone_index: 0,
                    status: MilestoneStatus::Rejected,
                }
            );
            found = true;
        }
    }
    assert!(found, "no ms_status event emitted by the escrow");
}

#[test]
fn emergency_refund_emits_the_paid_amount() {
    let f = setup();
    let creator = Address::generate(&f.env);
    let id = create_staged(&f, &creator);
    let investor = Address::generate(&f.env);
    f.payment_sac.mint(&investor, &1_000);
    f.escrow.pledge(&id, &investor, &1_000);
    f.env
        .ledger()
        .with_mut(|li| li.timestamp += DURATION_DAYS * 86_400);
    f.escrow.claim_tokens(&id, &investor);

    f.escrow.submit_milestone_for_approval(&id, &creator, &0);
    let proposal_id = f.escrow.get_milestone(&id, &0).proposal_id.unwrap();
    f.gov.vote(&investor, &proposal_id, &false);
    f.env.ledger().with_mut(|li| li.timestamp += VOTING_PERIOD);
    f.gov.execute_proposal(&proposal_id);

    f.escrow.emergency_refund(&id, &investor);

    let all_events = f.env.events().all();
    let last_event = all_events.last().unwrap();
    let data: EmergencyRefund = last_event.2.try_into_val(&f.env).unwrap();
    assert_eq!(
        data,
        EmergencyRefund {
            campaign_id: id,
            investor,
            amount: 1_000,
        }
    );
}
