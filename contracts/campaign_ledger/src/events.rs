use soroban_sdk::{contracttype, symbol_short, Address, Env};

use crate::types::CampaignId;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignCreated {
    pub identifier: CampaignId,
    pub owner: Address,
    pub goal: i128,
    pub begin_time: u64,
    pub end_time: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignFunded {
    pub identifier: CampaignId,
    pub contributor: Address,
    pub amount: i128,
    pub raised: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignRefunded {
    pub identifier: CampaignId,
    pub contributor: Address,
    pub amount: i128,
    pub raised: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundsWithdrawn {
    pub identifier: CampaignId,
    pub owner: Address,
    pub amount: i128,
}

pub fn emit_campaign_created(
    env: &Env,
    identifier: CampaignId,
    owner: Address,
    goal: i128,
    begin_time: u64,
    end_time: u64,
) {
    let topics = (symbol_short!("created"), identifier);
    let data = CampaignCreated {
        identifier,
        owner,
        goal,
        begin_time,
        end_time,
    };
    env.events().publish(topics, data);
}

pub fn emit_campaign_funded(
    env: &Env,
    identifier: CampaignId,
    contributor: Address,
    amount: i128,
    raised: i128,
) {
    let topics = (symbol_short!("funded"), identifier);
    let data = CampaignFunded {
        identifier,
        contributor,
        amount,
        raised,
    };
    env.events().publish(topics, data);
}

pub fn emit_campaign_refunded(
    env: &Env,
    identifier: CampaignId,
    contributor: Address,
    amount: i128,
    raised: i128,
) {
    let topics = (symbol_short!("refunded"), identifier);
    let data = CampaignRefunded {
        identifier,
        contributor,
        amount,
        raised,
    };
    env.events().publish(topics, data);
}

pub fn emit_funds_withdrawn(env: &Env, identifier: CampaignId, owner: Address, amount: i128) {
    let topics = (symbol_short!("withdraw"), identifier);
    let data = FundsWithdrawn {
        identifier,
        owner,
        amount,
    };
    env.events().publish(topics, data);
}

/// Topic: `(paused,)`, data: the admin that flipped the switch.
pub fn emit_ledger_paused(env: &Env, admin: Address) {
    env.events().publish((symbol_short!("paused"),), admin);
}

pub fn emit_ledger_unpaused(env: &Env, admin: Address) {
    env.events().publish((symbol_short!("unpaused"),), admin);
}
