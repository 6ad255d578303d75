use soroban_sdk::{log, token, Address, Env};

use crate::storage_types::{CampaignConfig, Error};

/// Moves `amount` of the campaign token from `from` to `to`.
///
/// A rejected transfer is reported as `TransferFailed` instead of aborting, so
/// callers can bail out before touching the ledger.
pub fn transfer_funds(
    e: &Env,
    config: &CampaignConfig,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), Error> {
    let token_client = token::Client::new(e, &config.token);
    match token_client.try_transfer(from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(e, "transfer rejected", from.clone(), to.clone(), amount);
            Err(Error::TransferFailed)
        }
    }
}

/// Pulls a contribution from `contributor` into the campaign.
pub fn collect(
    e: &Env,
    config: &CampaignConfig,
    contributor: &Address,
    amount: i128,
) -> Result<(), Error> {
    transfer_funds(e, config, contributor, &e.current_contract_address(), amount)
}

/// Pays out of the campaign's holdings.
pub fn pay(e: &Env, config: &CampaignConfig, to: &Address, amount: i128) -> Result<(), Error> {
    transfer_funds(e, config, &e.current_contract_address(), to, amount)
}

/// Token balance actually held at the campaign's address.
pub fn held_balance(e: &Env, config: &CampaignConfig) -> i128 {
    token::Client::new(e, &config.token).balance(&e.current_contract_address())
}
