//! Campaign state derivation.
//!
//! The lifecycle is never stored as a status field. It is recomputed from the
//! ledger timestamp and the pool value on every call:
//!
//! ```text
//! Open ──(window end)──► ClosedSuccess   pool >= target
//!                    └─► ClosedFailure   pool <  target
//! ```
//!
//! After the window closes the first payout latches the outcome: a drained
//! ledger always reads as `ClosedSuccess` and a started refund round always
//! reads as `ClosedFailure`, whatever the oracle quotes afterwards.

use soroban_sdk::Env;

use crate::ledger;
use crate::oracle;
use crate::storage_types::{CampaignConfig, CampaignState, DataKey, Error, TTL_INSTANCE};

pub fn load_config(e: &Env) -> Result<CampaignConfig, Error> {
    e.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

pub fn now(e: &Env) -> u64 {
    e.ledger().timestamp()
}

pub fn state(e: &Env, config: &CampaignConfig, now: u64) -> Result<CampaignState, Error> {
    if config.window.is_open(now) {
        return Ok(CampaignState::Open);
    }
    if ledger::is_drained(e) {
        return Ok(CampaignState::ClosedSuccess);
    }
    if refunds_started(e) {
        return Ok(CampaignState::ClosedFailure);
    }

    let raised = oracle::native_to_unit(e, config, ledger::total(e))?;
    if raised >= config.target {
        Ok(CampaignState::ClosedSuccess)
    } else {
        Ok(CampaignState::ClosedFailure)
    }
}

pub fn refunds_started(e: &Env) -> bool {
    e.storage()
        .instance()
        .get(&DataKey::RefundsStarted)
        .unwrap_or(false)
}

pub fn start_refunds(e: &Env) {
    e.storage().instance().set(&DataKey::RefundsStarted, &true);
}

pub fn extend_instance(e: &Env) {
    e.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}
