//! # Storage
//!
//! Provides typed helpers over Soroban's two storage tiers used by the ledger:
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key       | Type           | Description                          |
//! |-----------|----------------|--------------------------------------|
//! | `Config`  | `LedgerConfig` | Admin and settlement token           |
//! | `Paused`  | `bool`         | Emergency stop for create and fund   |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                      | Type             | Description                       |
//! |--------------------------|------------------|-----------------------------------|
//! | `CampConfig(id)`         | `CampaignConfig` | Immutable campaign configuration  |
//! | `CampState(id)`          | `CampaignState`  | Escrow balance and status         |
//! | `Contribution(id, addr)` | `i128`           | Escrowed amount per contributor   |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days remaining.
//!
//! A zero contribution is never stored: the entry is removed instead. Entries
//! of a withdrawn campaign are left in place and read as zero by the ledger.

use soroban_sdk::{contracttype, Address, Env};

use crate::types::{Campaign, CampaignConfig, CampaignId, CampaignState, LedgerConfig};
use crate::Error;

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage: bump by 7 days when below 1 day remaining.
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

/// Persistent storage: bump by 30 days when below 7 days remaining.
const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Ledger configuration (Instance).
    Config,
    /// Emergency pause flag (Instance).
    Paused,
    /// Immutable campaign configuration keyed by identifier (Persistent).
    CampConfig(CampaignId),
    /// Mutable campaign state keyed by identifier (Persistent).
    CampState(CampaignId),
    /// Escrowed amount for a contributor in a campaign (Persistent).
    Contribution(CampaignId, Address),
}

// ── Instance Storage Helpers ─────────────────────────────────────────

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn set_config(env: &Env, config: &LedgerConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    bump_instance(env);
}

/// Read the ledger configuration, failing with `NotInitialized` before `init`.
pub fn get_config(env: &Env) -> Result<LedgerConfig, Error> {
    let config: LedgerConfig = env
        .storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)?;
    bump_instance(env);
    Ok(config)
}

pub fn is_paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Paused)
        .unwrap_or(false)
}

pub fn set_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&DataKey::Paused, &paused);
    bump_instance(env);
}

// ── Persistent Storage Helpers ───────────────────────────────────────

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn campaign_exists(env: &Env, identifier: CampaignId) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::CampConfig(identifier))
}

/// Write both entries of a newly created campaign.
pub fn save_campaign(env: &Env, config: &CampaignConfig, state: &CampaignState) {
    let config_key = DataKey::CampConfig(config.identifier);
    let state_key = DataKey::CampState(config.identifier);

    env.storage().persistent().set(&config_key, config);
    env.storage().persistent().set(&state_key, state);
    bump_persistent(env, &config_key);
    bump_persistent(env, &state_key);
}

/// Load the immutable configuration and the mutable state in one call.
pub fn load_campaign_pair(
    env: &Env,
    identifier: CampaignId,
) -> Result<(CampaignConfig, CampaignState), Error> {
    let config_key = DataKey::CampConfig(identifier);
    let state_key = DataKey::CampState(identifier);

    let config: CampaignConfig = env
        .storage()
        .persistent()
        .get(&config_key)
        .ok_or(Error::NotFound)?;
    let state: CampaignState = env
        .storage()
        .persistent()
        .get(&state_key)
        .ok_or(Error::NotFound)?;

    bump_persistent(env, &config_key);
    bump_persistent(env, &state_key);
    Ok((config, state))
}

/// Load the full `Campaign` by combining config and state.
pub fn load_campaign(env: &Env, identifier: CampaignId) -> Result<Campaign, Error> {
    let (config, state) = load_campaign_pair(env, identifier)?;
    Ok(Campaign::from_parts(config, state))
}

/// Load only the mutable state.
pub fn load_campaign_state(env: &Env, identifier: CampaignId) -> Result<CampaignState, Error> {
    let key = DataKey::CampState(identifier);
    let state: CampaignState = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(Error::NotFound)?;
    bump_persistent(env, &key);
    Ok(state)
}

/// Save only the mutable state (every fund, refund and withdrawal).
pub fn save_campaign_state(env: &Env, identifier: CampaignId, state: &CampaignState) {
    let key = DataKey::CampState(identifier);
    env.storage().persistent().set(&key, state);
    bump_persistent(env, &key);
}

// ── Contributions ────────────────────────────────────────────────────

pub fn get_contribution(env: &Env, identifier: CampaignId, contributor: &Address) -> i128 {
    let key = DataKey::Contribution(identifier, contributor.clone());
    match env.storage().persistent().get(&key) {
        Some(amount) => {
            bump_persistent(env, &key);
            amount
        }
        None => 0,
    }
}

/// Store `amount` for `contributor`, removing the entry when it is zero.
pub fn set_contribution(env: &Env, identifier: CampaignId, contributor: &Address, amount: i128) {
    let key = DataKey::Contribution(identifier, contributor.clone());
    if amount == 0 {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &amount);
        bump_persistent(env, &key);
    }
}
