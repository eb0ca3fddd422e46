//! # Funding ledger
//!
//! Escrow accounting on top of the registry. Every entry point follows the
//! same shape: load, check, write bookkeeping, move tokens, emit.
//!
//! The contract's settlement-token balance always equals the sum of
//! `raised` over every campaign, and each campaign's `raised` equals the sum
//! of its contributors' entries. Soroban reverts the whole invocation when a
//! token transfer fails, so bookkeeping and transfer commit together.
//!
//! ## Time gating
//!
//! - `fund` is accepted on `begin_time <= now <= end_time`.
//! - `withdraw` is accepted once `now >= end_time`, or earlier if the goal
//!   has been reached.
//! - `refund` is not time gated; it is only bounded by what the caller has
//!   in escrow.
//!
//! ## Settlement
//!
//! Withdrawal only rewrites the campaign state. Contribution entries are not
//! touched; once the status is `Withdrawn` every one of them reads as zero,
//! so payout cost does not depend on how many contributors a campaign has.

use soroban_sdk::{log, token, Address, Env};

use crate::admin;
use crate::events;
use crate::storage;
use crate::types::{CampaignId, CampaignState, CampaignStatus};
use crate::Error;

/// Move `amount` of the settlement token from `contributor` into escrow.
pub fn fund(
    env: &Env,
    identifier: CampaignId,
    contributor: &Address,
    amount: i128,
) -> Result<(), Error> {
    let (config, mut state) = storage::load_campaign_pair(env, identifier)?;
    let now = env.ledger().timestamp();

    if state.status == CampaignStatus::Withdrawn {
        return Err(Error::CampaignClosed);
    }
    if now < config.begin_time {
        log!(env, "funding not open yet", identifier, now, config.begin_time);
        return Err(Error::FundingNotOpen);
    }
    if now > config.end_time {
        log!(env, "funding window closed", identifier, now, config.end_time);
        return Err(Error::FundingClosed);
    }
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }

    let raised = state.raised.checked_add(amount).ok_or(Error::Overflow)?;
    if raised > config.goal {
        log!(env, "too much", identifier, amount, config.goal - state.raised);
        return Err(Error::FundingCapExceeded);
    }

    let token = admin::settlement_token(env)?;
    token::Client::new(env, &token).transfer(contributor, &env.current_contract_address(), &amount);

    let previous = storage::get_contribution(env, identifier, contributor);
    if previous == 0 {
        state.contributor_count += 1;
    }
    // Bounded by `raised`, which was checked above.
    storage::set_contribution(env, identifier, contributor, previous + amount);

    state.raised = raised;
    storage::save_campaign_state(env, identifier, &state);

    events::emit_campaign_funded(env, identifier, contributor.clone(), amount, raised);
    Ok(())
}

/// Return `amount` of `contributor`'s escrowed contribution.
pub fn refund(
    env: &Env,
    identifier: CampaignId,
    contributor: &Address,
    amount: i128,
) -> Result<(), Error> {
    let mut state = storage::load_campaign_state(env, identifier)?;

    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }

    let contributed = escrowed(env, identifier, &state, contributor);
    if amount > contributed {
        log!(env, "refund exceeds contribution", identifier, amount, contributed);
        return Err(Error::InsufficientContribution);
    }

    let remaining = contributed - amount;
    storage::set_contribution(env, identifier, contributor, remaining);
    if remaining == 0 {
        state.contributor_count -= 1;
    }
    state.raised -= amount;
    storage::save_campaign_state(env, identifier, &state);

    let token = admin::settlement_token(env)?;
    token::Client::new(env, &token).transfer(&env.current_contract_address(), contributor, &amount);

    events::emit_campaign_refunded(env, identifier, contributor.clone(), amount, state.raised);
    Ok(())
}

/// Pay the whole escrow of a campaign out to its owner and close it.
pub fn withdraw(env: &Env, identifier: CampaignId, caller: &Address) -> Result<i128, Error> {
    let (config, mut state) = storage::load_campaign_pair(env, identifier)?;

    if &config.owner != caller {
        log!(env, "withdraw by non-owner", identifier);
        return Err(Error::Unauthorized);
    }
    if state.raised == 0 {
        return Err(Error::NothingToWithdraw);
    }
    let now = env.ledger().timestamp();
    if now < config.end_time && state.raised < config.goal {
        log!(env, "withdraw locked until end or goal", identifier, now, config.end_time);
        return Err(Error::WithdrawalLocked);
    }

    let amount = state.raised;
    log!(env, "contributions settled by withdrawal", identifier, state.contributor_count);
    state.raised = 0;
    state.contributor_count = 0;
    state.status = CampaignStatus::Withdrawn;
    storage::save_campaign_state(env, identifier, &state);

    let token = admin::settlement_token(env)?;
    token::Client::new(env, &token).transfer(&env.current_contract_address(), caller, &amount);

    events::emit_funds_withdrawn(env, identifier, caller.clone(), amount);
    Ok(amount)
}

/// What `contributor` currently has in escrow; zero for unknown or
/// withdrawn campaigns.
pub fn contribution_of(env: &Env, identifier: CampaignId, contributor: &Address) -> i128 {
    match storage::load_campaign_state(env, identifier) {
        Ok(state) => escrowed(env, identifier, &state, contributor),
        Err(_) => 0,
    }
}

fn escrowed(env: &Env, identifier: CampaignId, state: &CampaignState, contributor: &Address) -> i128 {
    match state.status {
        CampaignStatus::Open => storage::get_contribution(env, identifier, contributor),
        CampaignStatus::Withdrawn => 0,
    }
}

/// Settlement-token balance held by the contract across all campaigns.
pub fn escrow_balance(env: &Env) -> Result<i128, Error> {
    let token = admin::settlement_token(env)?;
    Ok(token::Client::new(env, &token).balance(&env.current_contract_address()))
}
