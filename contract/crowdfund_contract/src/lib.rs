#![no_std]


mod campaign;
mod events;
mod ledger;
mod oracle;
mod payout;
mod storage_types;

pub use oracle::{PriceFeedClient, PriceFeedInterface};
pub use storage_types::{CampaignConfig, CampaignState, Error, FundingWindow};

use campaign::{extend_instance, load_config};
use storage_types::DataKey;

use soroban_sdk::{contract, contractimpl, log, Address, Env};

#[contract]
pub struct CrowdfundContract;

#[contractimpl]
impl CrowdfundContract {
    /// Initialize the campaign. The funding window opens at the current ledger
    /// timestamp and stays open for `duration` seconds.
    pub fn initialize(
        e: Env,
        owner: Address,
        token: Address,
        price_feed: Address,
        duration: u64,
        target: i128,
        min_contribution: i128,
    ) -> Result<(), Error> {
        if e.storage().instance().has(&DataKey::Config) {
            return Err(Error::AlreadyInitialized);
        }
        owner.require_auth();

        if duration == 0 || target <= 0 || min_contribution <= 0 {
            return Err(Error::InvalidConfig);
        }
        let start_time = campaign::now(&e);
        let deadline = start_time.checked_add(duration).ok_or(Error::InvalidConfig)?;

        let config = CampaignConfig {
            owner: owner.clone(),
            token,
            price_feed,
            window: FundingWindow { start_time, duration },
            target,
            min_contribution,
        };
        e.storage().instance().set(&DataKey::Config, &config);
        e.storage().instance().set(&DataKey::TotalRaised, &0i128);
        extend_instance(&e);

        events::emit_initialized(
            &e,
            events::CampaignInitializedEvent {
                owner,
                deadline,
                target,
            },
        );
        Ok(())
    }

    /// Contribute `amount` of the campaign token while the window is open.
    pub fn fund(e: Env, contributor: Address, amount: i128) -> Result<i128, Error> {
        contributor.require_auth();
        let config = load_config(&e)?;

        if !config.window.is_open(campaign::now(&e)) {
            return Err(Error::WindowClosed);
        }
        if oracle::native_to_unit(&e, &config, amount)? < config.min_contribution {
            return Err(Error::BelowMinAmount);
        }

        payout::collect(&e, &config, &contributor, amount)?;
        let balance = ledger::record(&e, &contributor, amount)?;
        extend_instance(&e);

        log!(&e, "funded", contributor.clone(), amount, balance);
        events::emit_funded(
            &e,
            events::FundedEvent {
                contributor,
                amount,
                balance,
            },
        );
        Ok(balance)
    }

    /// Pay the whole pool to the owner once the window has closed on a
    /// successful campaign.
    pub fn withdraw(e: Env, caller: Address) -> Result<i128, Error> {
        caller.require_auth();
        let config = load_config(&e)?;

        if caller != config.owner {
            return Err(Error::Unauthorized);
        }
        match campaign::state(&e, &config, campaign::now(&e))? {
            CampaignState::Open => return Err(Error::WindowNotClosed),
            CampaignState::ClosedFailure => return Err(Error::TargetNotReached),
            CampaignState::ClosedSuccess => {}
        }
        if ledger::is_drained(&e) {
            return Err(Error::AlreadyWithdrawn);
        }

        // Anything sent to the contract outside `fund` leaves with the pool
        let amount = ledger::total(&e).max(payout::held_balance(&e, &config));
        payout::pay(&e, &config, &config.owner, amount)?;
        ledger::drain(&e);
        extend_instance(&e);

        log!(&e, "withdrawn", amount);
        events::emit_funds_withdrawn(&e, events::FundsWithdrawnEvent { amount });
        Ok(amount)
    }

    /// Return the caller's own contribution once the window has closed on a
    /// failed campaign.
    pub fn refund(e: Env, caller: Address) -> Result<i128, Error> {
        caller.require_auth();
        let config = load_config(&e)?;

        match campaign::state(&e, &config, campaign::now(&e))? {
            CampaignState::Open => return Err(Error::WindowNotClosed),
            CampaignState::ClosedSuccess => return Err(Error::TargetReached),
            CampaignState::ClosedFailure => {}
        }

        let amount = ledger::balance_of(&e, &caller);
        if amount <= 0 {
            return Err(Error::NoFundsAvailable);
        }

        payout::pay(&e, &config, &caller, amount)?;
        ledger::clear(&e, &caller);
        campaign::start_refunds(&e);
        extend_instance(&e);

        log!(&e, "refunded", caller.clone(), amount);
        events::emit_funds_refunded(
            &e,
            events::FundsRefundedEvent {
                contributor: caller,
                amount,
            },
        );
        Ok(amount)
    }

    /// View functions
    pub fn config(e: Env) -> Result<CampaignConfig, Error> {
        load_config(&e)
    }

    pub fn owner(e: Env) -> Result<Address, Error> {
        Ok(load_config(&e)?.owner)
    }

    pub fn token(e: Env) -> Result<Address, Error> {
        Ok(load_config(&e)?.token)
    }

    pub fn price_feed(e: Env) -> Result<Address, Error> {
        Ok(load_config(&e)?.price_feed)
    }

    pub fn deadline(e: Env) -> Result<u64, Error> {
        Ok(load_config(&e)?.window.end())
    }

    pub fn state(e: Env) -> Result<CampaignState, Error> {
        let config = load_config(&e)?;
        campaign::state(&e, &config, campaign::now(&e))
    }

    pub fn contribution_of(e: Env, contributor: Address) -> i128 {
        ledger::balance_of(&e, &contributor)
    }

    pub fn total_raised(e: Env) -> i128 {
        ledger::total(&e)
    }

    /// Current pool value converted through the price feed.
    pub fn total_raised_in_unit(e: Env) -> Result<i128, Error> {
        let config = load_config(&e)?;
        oracle::native_to_unit(&e, &config, ledger::total(&e))
    }
}
