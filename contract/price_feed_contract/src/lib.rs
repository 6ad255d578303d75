#![no_std]

//! Fixed-rate price feed with an aggregator-style read interface.
//!
//! The answer is the price of one whole unit of the base asset in the quote
//! unit, scaled by `10^decimals`. An admin sets it at initialization and may
//! update it later; readers only ever see the latest round.

use soroban_sdk::{contract, contractimpl, log, panic_with_error, Address, Env, Symbol};

mod storage;


pub use storage::{Error, Round};
use storage::{DataKey, TTL_INSTANCE};

#[contract]
pub struct PriceFeedContract;

#[contractimpl]
impl PriceFeedContract {
    pub fn initialize(env: Env, admin: Address, decimals: u32, answer: i128) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Admin) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();
        if answer <= 0 {
            return Err(Error::InvalidAnswer);
        }

        env.storage().instance().set(&DataKey::Admin, &admin);
        Self::store_round(&env, decimals, answer);
        Ok(())
    }

    /// Publish a new answer. Decimals are fixed at initialization.
    pub fn set_answer(env: Env, answer: i128) -> Result<(), Error> {
        let admin: Address = env
            .storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(Error::NotInitialized)?;
        admin.require_auth();
        if answer <= 0 {
            return Err(Error::InvalidAnswer);
        }

        let decimals = Self::round(&env).decimals;
        Self::store_round(&env, decimals, answer);
        Ok(())
    }

    pub fn decimals(env: Env) -> u32 {
        Self::round(&env).decimals
    }

    pub fn latest_answer(env: Env) -> i128 {
        Self::round(&env).answer
    }

    pub fn latest_timestamp(env: Env) -> u64 {
        Self::round(&env).updated_at
    }

    pub fn latest_round(env: Env) -> Round {
        Self::round(&env)
    }
}

impl PriceFeedContract {
    fn round(env: &Env) -> Round {
        env.storage()
            .instance()
            .get(&DataKey::Round)
            .unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized))
    }

    fn store_round(env: &Env, decimals: u32, answer: i128) {
        let round = Round {
            decimals,
            answer,
            updated_at: env.ledger().timestamp(),
        };
        env.storage().instance().set(&DataKey::Round, &round);
        env.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);

        log!(env, "answer updated", answer);
        env.events()
            .publish((Symbol::new(env, "answer_updated"),), (decimals, answer));
    }
}
