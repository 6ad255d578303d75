use soroban_sdk::{contracterror, contracttype};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    Round,
}

// Latest answer and when it was set
#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct Round {
    pub decimals: u32,
    pub answer: i128,
    pub updated_at: u64,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidAnswer = 3,
}

pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
