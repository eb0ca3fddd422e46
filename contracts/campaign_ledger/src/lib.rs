//! # Campaign Ledger Contract
//!
//! A time-boxed fundraising ledger. Owners register campaigns under an
//! identifier of their choosing, contributors fund them in the settlement
//! token while the funding window is open, contributors may take back what
//! they put in, and the owner withdraws the escrow once the window has ended
//! or the goal is met.
//!
//! | Phase        | Entry Point(s)                                  |
//! |--------------|-------------------------------------------------|
//! | Bootstrap    | [`CampaignLedger::init`]                        |
//! | Emergency    | `pause`, `unpause`, `is_paused`                 |
//! | Registration | [`CampaignLedger::create_event`]                |
//! | Funding      | [`CampaignLedger::fund`], [`CampaignLedger::refund`] |
//! | Payout       | [`CampaignLedger::withdraw_funds`]              |
//! | Queries      | `get_event`, `event_exists`, `contribution_of`, `escrow_balance`, `config` |
//!
//! ## Architecture
//!
//! Campaign creation and lookup live in [`registry`], escrow accounting in
//! [`ledger`], configuration and pausing in [`admin`]. Storage access is fully
//! delegated to `storage`. This file contains **only** the public entry
//! points and the caller authorisation they require.
//!
//! Every mutating entry point takes the acting identity as an explicit
//! `Address` and calls `require_auth` on it before touching state.

#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, Address, Env, String};

pub mod admin;
pub mod events;
pub mod ledger;
pub mod registry;
mod storage;
mod types;

#[cfg(test)]
mod test_events;

pub use registry::MAX_CAMPAIGN_DURATION;
pub use types::{Campaign, CampaignId, CampaignStatus, LedgerConfig};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    DuplicateIdentifier = 3,
    NotFound = 4,
    FundingNotOpen = 5,
    FundingClosed = 6,
    FundingCapExceeded = 7,
    InsufficientContribution = 8,
    Unauthorized = 9,
    NothingToWithdraw = 10,
    WithdrawalLocked = 11,
    InvalidGoal = 12,
    InvalidWindow = 13,
    InvalidAmount = 14,
    ProtocolPaused = 15,
    Overflow = 16,
    CampaignClosed = 17,
}

#[contract]
pub struct CampaignLedger;

#[contractimpl]
impl CampaignLedger {
    // ─────────────────────────────────────────────────────────
    // Initialisation
    // ─────────────────────────────────────────────────────────

    /// Initialise the ledger with its admin and settlement token.
    ///
    /// Must be called exactly once immediately after deployment.
    /// Subsequent calls fail with `Error::AlreadyInitialized`.
    pub fn init(env: Env, admin: Address, token: Address) -> Result<(), Error> {
        admin.require_auth();
        admin::init(&env, &admin, &token)
    }

    pub fn config(env: Env) -> Result<LedgerConfig, Error> {
        storage::get_config(&env)
    }

    // ─────────────────────────────────────────────────────────
    // Emergency Control
    // ─────────────────────────────────────────────────────────

    /// Pause campaign creation and funding.
    ///
    /// - `caller` must be the ledger admin.
    /// - Refunds and withdrawals keep working while paused.
    pub fn pause(env: Env, caller: Address) -> Result<(), Error> {
        caller.require_auth();
        admin::set_paused(&env, &caller, true)
    }

    /// Resume campaign creation and funding.
    pub fn unpause(env: Env, caller: Address) -> Result<(), Error> {
        caller.require_auth();
        admin::set_paused(&env, &caller, false)
    }

    pub fn is_paused(env: Env) -> bool {
        storage::is_paused(&env)
    }

    // ─────────────────────────────────────────────────────────
    // Campaign registry
    // ─────────────────────────────────────────────────────────

    /// Register a new campaign owned by `owner`.
    ///
    /// Fails with `DuplicateIdentifier` if `identifier` is taken, `InvalidGoal`
    /// for a non-positive goal and `InvalidWindow` unless
    /// `begin_time < end_time <= begin_time + MAX_CAMPAIGN_DURATION`.
    #[allow(clippy::too_many_arguments)]
    pub fn create_event(
        env: Env,
        owner: Address,
        identifier: CampaignId,
        name: String,
        description: String,
        goal: i128,
        begin_time: u64,
        end_time: u64,
    ) -> Result<Campaign, Error> {
        Self::require_open_for_business(&env)?;
        owner.require_auth();
        registry::create(
            &env,
            &owner,
            identifier,
            name,
            description,
            goal,
            begin_time,
            end_time,
        )
    }

    pub fn get_event(env: Env, identifier: CampaignId) -> Result<Campaign, Error> {
        registry::lookup(&env, identifier)
    }

    pub fn event_exists(env: Env, identifier: CampaignId) -> bool {
        registry::exists(&env, identifier)
    }

    // ─────────────────────────────────────────────────────────
    // Funding ledger
    // ─────────────────────────────────────────────────────────

    /// Contribute `amount` of the settlement token to a campaign.
    ///
    /// Accepted only inside `[begin_time, end_time]` and only while the
    /// campaign's escrow stays within its goal.
    pub fn fund(
        env: Env,
        identifier: CampaignId,
        contributor: Address,
        amount: i128,
    ) -> Result<(), Error> {
        Self::require_open_for_business(&env)?;
        contributor.require_auth();
        ledger::fund(&env, identifier, &contributor, amount)
    }

    /// Take back up to everything `contributor` has in escrow for a campaign.
    pub fn refund(
        env: Env,
        identifier: CampaignId,
        contributor: Address,
        amount: i128,
    ) -> Result<(), Error> {
        contributor.require_auth();
        ledger::refund(&env, identifier, &contributor, amount)
    }

    /// Pay the campaign's full escrow to its owner. Returns the amount paid.
    ///
    /// - `caller` must be the campaign owner.
    /// - Allowed once the window has ended or the goal has been met.
    pub fn withdraw_funds(env: Env, identifier: CampaignId, caller: Address) -> Result<i128, Error> {
        caller.require_auth();
        ledger::withdraw(&env, identifier, &caller)
    }

    /// Escrowed amount of `contributor`. Zero once the campaign is withdrawn.
    pub fn contribution_of(env: Env, identifier: CampaignId, contributor: Address) -> i128 {
        ledger::contribution_of(&env, identifier, &contributor)
    }

    pub fn escrow_balance(env: Env) -> Result<i128, Error> {
        ledger::escrow_balance(&env)
    }

    // ─────────────────────────────────────────────────────────
    // Internal Helpers
    // ─────────────────────────────────────────────────────────

    fn require_open_for_business(env: &Env) -> Result<(), Error> {
        storage::get_config(env)?;
        admin::require_not_paused(env)
    }
}
