//! Per-contributor record of escrowed value.
//!
//! Records live in persistent storage keyed by contributor. The running
//! total sits in instance storage and is adjusted on every write, so reads of
//! the pool size never scan contributors. Once the pool has been paid out to
//! the owner the ledger is drained: the total is zero and every record reads
//! as zero, which keeps "sum of live records == held balance" true without
//! touching each entry.

use soroban_sdk::{Address, Env};

use crate::storage_types::{DataKey, Error, PersistentKey, TTL_PERSISTENT};

/// Adds `amount` to `contributor`'s record, creating it if absent.
pub fn record(e: &Env, contributor: &Address, amount: i128) -> Result<i128, Error> {
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }

    let key = PersistentKey::Contribution(contributor.clone());
    let current: i128 = e.storage().persistent().get(&key).unwrap_or(0);
    let updated = current.checked_add(amount).ok_or(Error::ArithmeticError)?;
    let total = total(e).checked_add(amount).ok_or(Error::ArithmeticError)?;

    e.storage().persistent().set(&key, &updated);
    e.storage().persistent().extend_ttl(&key, TTL_PERSISTENT, TTL_PERSISTENT);
    e.storage().instance().set(&DataKey::TotalRaised, &total);

    Ok(updated)
}

pub fn balance_of(e: &Env, contributor: &Address) -> i128 {
    if is_drained(e) {
        return 0;
    }
    e.storage()
        .persistent()
        .get(&PersistentKey::Contribution(contributor.clone()))
        .unwrap_or(0)
}

/// Zeroes `contributor`'s record. Clearing an absent or zero record is a no-op.
pub fn clear(e: &Env, contributor: &Address) {
    let amount = balance_of(e, contributor);
    if amount == 0 {
        return;
    }

    let key = PersistentKey::Contribution(contributor.clone());
    e.storage().persistent().set(&key, &0i128);
    e.storage().persistent().extend_ttl(&key, TTL_PERSISTENT, TTL_PERSISTENT);
    // amount <= total holds by construction
    e.storage().instance().set(&DataKey::TotalRaised, &(total(e) - amount));
}

pub fn total(e: &Env) -> i128 {
    e.storage().instance().get(&DataKey::TotalRaised).unwrap_or(0)
}

/// Empties the whole ledger in one write and returns what it held.
pub fn drain(e: &Env) -> i128 {
    let amount = total(e);
    e.storage().instance().set(&DataKey::TotalRaised, &0i128);
    e.storage().instance().set(&DataKey::Drained, &true);
    amount
}

pub fn is_drained(e: &Env) -> bool {
    e.storage().instance().get(&DataKey::Drained).unwrap_or(false)
}
