use soroban_sdk::{contracttype, Address, Env, Symbol};

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct CampaignInitializedEvent {
    pub owner: Address,
    pub deadline: u64,
    pub target: i128,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct FundedEvent {
    pub contributor: Address,
    pub amount: i128,
    pub balance: i128,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct FundsWithdrawnEvent {
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct FundsRefundedEvent {
    pub contributor: Address,
    pub amount: i128,
}

pub fn emit_initialized(env: &Env, event: CampaignInitializedEvent) {
    env.events().publish((Symbol::new(env, "initialized"),), event);
}

pub fn emit_funded(env: &Env, event: FundedEvent) {
    env.events().publish((Symbol::new(env, "funded"),), event);
}

pub fn emit_funds_withdrawn(env: &Env, event: FundsWithdrawnEvent) {
    env.events().publish((Symbol::new(env, "funds_withdrawn"),), event);
}

pub fn emit_funds_refunded(env: &Env, event: FundsRefundedEvent) {
    env.events().publish((Symbol::new(env, "funds_refunded"),), event);
}
