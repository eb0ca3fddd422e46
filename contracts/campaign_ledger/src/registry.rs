//! # Campaign registry
//!
//! Owns the identifier → campaign mapping. Identifiers are chosen by the
//! caller and are unique for the lifetime of the contract: a campaign is
//! never deleted, so an identifier can never be reused.

use soroban_sdk::{log, Address, Env, String};

use crate::events;
use crate::storage;
use crate::types::{Campaign, CampaignConfig, CampaignId, CampaignState};
use crate::Error;

/// Longest allowed funding window: 5 years (5 * 365 * 24 * 60 * 60).
pub const MAX_CAMPAIGN_DURATION: u64 = 157_680_000;

/// Reject a non-positive goal or an empty, inverted or oversized window.
pub fn validate_params(goal: i128, begin_time: u64, end_time: u64) -> Result<(), Error> {
    if goal <= 0 {
        return Err(Error::InvalidGoal);
    }
    if begin_time >= end_time || end_time - begin_time > MAX_CAMPAIGN_DURATION {
        return Err(Error::InvalidWindow);
    }
    Ok(())
}

/// Register a new campaign owned by `owner`.
///
/// Nothing is written unless every check passes.
#[allow(clippy::too_many_arguments)]
pub fn create(
    env: &Env,
    owner: &Address,
    identifier: CampaignId,
    name: String,
    description: String,
    goal: i128,
    begin_time: u64,
    end_time: u64,
) -> Result<Campaign, Error> {
    if storage::campaign_exists(env, identifier) {
        log!(env, "campaign identifier already taken", identifier);
        return Err(Error::DuplicateIdentifier);
    }
    validate_params(goal, begin_time, end_time)?;

    let config = CampaignConfig {
        identifier,
        owner: owner.clone(),
        name,
        description,
        goal,
        begin_time,
        end_time,
    };
    let state = CampaignState::opened();
    storage::save_campaign(env, &config, &state);

    events::emit_campaign_created(env, identifier, owner.clone(), goal, begin_time, end_time);

    Ok(Campaign::from_parts(config, state))
}

pub fn lookup(env: &Env, identifier: CampaignId) -> Result<Campaign, Error> {
    storage::load_campaign(env, identifier)
}

pub fn exists(env: &Env, identifier: CampaignId) -> bool {
    storage::campaign_exists(env, identifier)
}
