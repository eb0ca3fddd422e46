//! # Admin: ledger configuration and emergency control
//!
//! The ledger has a single administrative identity, fixed at `init`:
//!
//! - it chooses the settlement token every campaign is funded in;
//! - it may pause and unpause the ledger.
//!
//! The admin has **no** authority over individual campaigns: it can neither
//! edit campaign parameters nor move escrowed funds. Campaign authority
//! belongs to each campaign's owner and is checked in [`crate::ledger`].
//!
//! ## Pause semantics
//!
//! | Entry point      | While paused |
//! |------------------|--------------|
//! | `create_event`   | rejected     |
//! | `fund`           | rejected     |
//! | `refund`         | allowed      |
//! | `withdraw_funds` | allowed      |
//!
//! Escrowed value can always leave the contract.

use soroban_sdk::{log, Address, Env};

use crate::events;
use crate::storage;
use crate::types::LedgerConfig;
use crate::Error;

/// Store the ledger configuration. Fails with `AlreadyInitialized` if called again.
pub fn init(env: &Env, admin: &Address, token: &Address) -> Result<(), Error> {
    if storage::has_config(env) {
        return Err(Error::AlreadyInitialized);
    }
    storage::set_config(
        env,
        &LedgerConfig {
            admin: admin.clone(),
            token: token.clone(),
        },
    );
    storage::set_paused(env, false);
    Ok(())
}

/// Address of the settlement token.
pub fn settlement_token(env: &Env) -> Result<Address, Error> {
    Ok(storage::get_config(env)?.token)
}

/// Assert that `caller` is the configured admin.
pub fn require_admin(env: &Env, caller: &Address) -> Result<(), Error> {
    let config = storage::get_config(env)?;
    if &config.admin != caller {
        log!(env, "caller is not the ledger admin");
        return Err(Error::Unauthorized);
    }
    Ok(())
}

/// Reject the call while the ledger is paused.
pub fn require_not_paused(env: &Env) -> Result<(), Error> {
    if storage::is_paused(env) {
        return Err(Error::ProtocolPaused);
    }
    Ok(())
}

pub fn set_paused(env: &Env, caller: &Address, paused: bool) -> Result<(), Error> {
    require_admin(env, caller)?;
    storage::set_paused(env, paused);
    if paused {
        events::emit_ledger_paused(env, caller.clone());
    } else {
        events::emit_ledger_unpaused(env, caller.clone());
    }
    Ok(())
}
