extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events, Ledger},
    token, vec, Address, Env, IntoVal, String, TryIntoVal, Val,
};

use crate::events::{CampaignCreated, CampaignFunded, CampaignRefunded, FundsWithdrawn};
use crate::{CampaignLedger, CampaignLedgerClient};

const BEGIN: u64 = 10_000;
const END: u64 = 20_000;

fn setup() -> (Env, CampaignLedgerClient<'static>, Address, token::Client<'static>) {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(BEGIN + 1);
    let contract_id = env.register(CampaignLedger, ());
    let client = CampaignLedgerClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    let sac = env.register_stellar_asset_contract_v2(Address::generate(&env));
    let token = token::Client::new(&env, &sac.address());
    client.init(&admin, &token.address);
    (env, client, admin, token)
}

fn create_campaign(env: &Env, client: &CampaignLedgerClient, identifier: u64, goal: i128) -> Address {
    let owner = Address::generate(env);
    let label = String::from_str(env, "event");
    client.create_event(&owner, &identifier, &label, &label, &goal, &BEGIN, &END);
    owner
}

fn funded_wallet(env: &Env, token: &token::Client, amount: i128) -> Address {
    let donor = Address::generate(env);
    token::StellarAssetClient::new(env, &token.address).mint(&donor, &amount);
    donor
}

#[test]
fn test_campaign_created_event() {
    let (env, client, _, _) = setup();
    let owner = create_campaign(&env, &client, 12, 5000);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("created"), identifier)
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![&env, symbol_short!("created").into_val(&env), 12u64.into_val(&env)];
    assert_eq!(last_event.1, expected_topics);

    // Data: CampaignCreated struct
    let event_data: CampaignCreated = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(event_data, CampaignCreated {
        identifier: 12,
        owner,
        goal: 5000,
        begin_time: BEGIN,
        end_time: END,
    });
}

#[test]
fn test_campaign_funded_event() {
    let (env, client, _, token) = setup();
    create_campaign(&env, &client, 12, 5000);
    let contributor = funded_wallet(&env, &token, 3000);

    client.fund(&12, &contributor, &1000);
    client.fund(&12, &contributor, &2000);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("funded"), identifier)
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![&env, symbol_short!("funded").into_val(&env), 12u64.into_val(&env)];
    assert_eq!(last_event.1, expected_topics);

    // Data carries the running escrow total.
    let event_data: CampaignFunded = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(event_data, CampaignFunded {
        identifier: 12,
        contributor,
        amount: 2000,
        raised: 3000,
    });
}

#[test]
fn test_campaign_refunded_event() {
    let (env, client, _, token) = setup();
    create_campaign(&env, &client, 12, 5000);
    let contributor = funded_wallet(&env, &token, 3000);
    client.fund(&12, &contributor, &3000);

    client.refund(&12, &contributor, &1200);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![&env, symbol_short!("refunded").into_val(&env), 12u64.into_val(&env)];
    assert_eq!(last_event.1, expected_topics);

    let event_data: CampaignRefunded = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(event_data, CampaignRefunded {
        identifier: 12,
        contributor,
        amount: 1200,
        raised: 1800,
    });
}

#[test]
fn test_funds_withdrawn_event() {
    let (env, client, _, token) = setup();
    let owner = create_campaign(&env, &client, 12, 5000);
    let contributor = funded_wallet(&env, &token, 3000);
    client.fund(&12, &contributor, &3000);

    env.ledger().set_timestamp(END);
    client.withdraw_funds(&12, &owner);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("withdraw"), identifier)
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![&env, symbol_short!("withdraw").into_val(&env), 12u64.into_val(&env)];
    assert_eq!(last_event.1, expected_topics);

    let event_data: FundsWithdrawn = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(event_data, FundsWithdrawn {
        identifier: 12,
        owner,
        amount: 3000,
    });
}

#[test]
fn test_paused_event() {
    let (env, client, admin, _) = setup();

    client.pause(&admin);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![&env, symbol_short!("paused").into_val(&env)];
    assert_eq!(last_event.1, expected_topics);

    let by: Address = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(by, admin);
}

#[test]
fn test_rejected_fund_emits_nothing() {
    let (env, client, _, token) = setup();
    create_campaign(&env, &client, 12, 1000);
    let contributor = funded_wallet(&env, &token, 3000);

    let result = client.try_fund(&12, &contributor, &2000);
    assert!(result.is_err());

    // A failed invocation is rolled back, events included.
    let funded: Val = symbol_short!("funded").into_val(&env);
    let emitted = env
        .events()
        .all()
        .iter()
        .any(|(_, topics, _)| topics.first().is_some_and(|t| t.shallow_eq(&funded)));
    assert!(!emitted);
}
