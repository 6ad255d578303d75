use soroban_sdk::{contractclient, Env};

use crate::storage_types::{CampaignConfig, Error};

/// Aggregator-style price source quoting one whole token in the target unit.
#[contractclient(name = "PriceFeedClient")]
pub trait PriceFeedInterface {
    fn decimals(env: Env) -> u32;
    fn latest_answer(env: Env) -> i128;
}

/// Converts a token amount into the unit the target is denominated in.
pub fn native_to_unit(e: &Env, config: &CampaignConfig, amount: i128) -> Result<i128, Error> {
    let feed = PriceFeedClient::new(e, &config.price_feed);
    let answer = feed.latest_answer();
    if answer <= 0 {
        return Err(Error::InvalidPrice);
    }
    convert(amount, answer, feed.decimals())
}

fn convert(amount: i128, answer: i128, decimals: u32) -> Result<i128, Error> {
    let scale = 10i128.checked_pow(decimals).ok_or(Error::ArithmeticError)?;
    amount
        .checked_mul(answer)
        .map(|value| value / scale)
        .ok_or(Error::ArithmeticError)
}
