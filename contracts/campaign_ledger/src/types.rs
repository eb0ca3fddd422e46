//! # Types
//!
//! Shared data structures used across all modules of the campaign ledger.
//!
//! ## Design decisions
//!
//! ### Config / State split
//!
//! A `Campaign` is internally stored as two separate ledger entries:
//!
//! - [`CampaignConfig`]: written once by `create_event`; never mutated.
//! - [`CampaignState`]: written on every fund, refund and withdrawal.
//!
//! The public API exposes the reconstructed [`Campaign`] struct for convenience.
//!
//! ### Status
//!
//! [`CampaignStatus`] only moves forward:
//!
//! ```text
//! Open ──► Withdrawn
//! ```
//!
//! Refunds that bring `raised` back to zero leave a campaign `Open`; only the
//! owner's withdrawal closes it.

use soroban_sdk::{contracttype, Address, String};

/// Externally supplied campaign key.
pub type CampaignId = u64;

/// Lifecycle state of a campaign.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CampaignStatus {
    /// Escrow is live: contributions accepted inside the window, refunds allowed.
    Open,
    /// The owner has claimed the escrow. Terminal.
    Withdrawn,
}

/// Ledger-wide configuration, written once by `init`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LedgerConfig {
    /// May pause and unpause the ledger.
    pub admin: Address,
    /// SAC token every campaign is funded and paid out in.
    pub token: Address,
}

/// Immutable campaign configuration, written once at creation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignConfig {
    pub identifier: CampaignId,
    pub owner: Address,
    pub name: String,
    pub description: String,
    pub goal: i128,
    pub begin_time: u64,
    pub end_time: u64,
}

/// Mutable campaign state, updated on every balance change.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignState {
    pub raised: i128,
    pub status: CampaignStatus,
    pub contributor_count: u32,
}

impl CampaignState {
    /// State of a freshly created campaign.
    pub fn opened() -> Self {
        Self {
            raised: 0,
            status: CampaignStatus::Open,
            contributor_count: 0,
        }
    }
}

/// Full view of a campaign.
///
/// Used as the public API return type; reconstructed internally from
/// the split `CampaignConfig` + `CampaignState` storage entries.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Campaign {
    /// Caller-chosen unique key.
    pub identifier: CampaignId,
    /// Address that created the campaign and alone may withdraw.
    pub owner: Address,
    pub name: String,
    pub description: String,
    /// Funding cap in token base units. Always positive.
    pub goal: i128,
    /// First ledger timestamp at which `fund` is accepted.
    pub begin_time: u64,
    /// Last ledger timestamp at which `fund` is accepted.
    pub end_time: u64,
    /// Amount currently held in escrow for this campaign.
    pub raised: i128,
    pub status: CampaignStatus,
    /// Contributors with a non-zero escrowed contribution.
    pub contributor_count: u32,
}

impl Campaign {
    pub fn from_parts(config: CampaignConfig, state: CampaignState) -> Self {
        Self {
            identifier: config.identifier,
            owner: config.owner,
            name: config.name,
            description: config.description,
            goal: config.goal,
            begin_time: config.begin_time,
            end_time: config.end_time,
            raised: state.raised,
            status: state.status,
            contributor_count: state.contributor_count,
        }
    }
}
