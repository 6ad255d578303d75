use soroban_sdk::{contracterror, contracttype, Address};

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Config,
    TotalRaised,
    Drained,
    RefundsStarted,
}

// Storage keys for persistent data
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Contribution(Address),
}

/// Contribution window, fixed at initialization.
#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct FundingWindow {
    pub start_time: u64,
    pub duration: u64,
}

impl FundingWindow {
    /// First timestamp at which the window is closed.
    pub fn end(&self) -> u64 {
        self.start_time + self.duration
    }

    pub fn is_open(&self, now: u64) -> bool {
        now < self.end()
    }
}

// Campaign parameters, written once by `initialize`
#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct CampaignConfig {
    pub owner: Address,
    pub token: Address,            // Token contract holding the escrowed value
    pub price_feed: Address,       // Oracle quoting the token in the target unit
    pub window: FundingWindow,
    pub target: i128,              // In oracle units, same precision as the token
    pub min_contribution: i128,    // In oracle units, per `fund` call
}

// Derived on every call, never stored
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[contracttype]
pub enum CampaignState {
    Open,
    ClosedSuccess,
    ClosedFailure,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidConfig = 3,
    WindowClosed = 4,
    BelowMinAmount = 5,
    Unauthorized = 6,
    WindowNotClosed = 7,
    TargetNotReached = 8,
    TargetReached = 9,
    NoFundsAvailable = 10,
    InvalidAmount = 11,
    TransferFailed = 12,
    AlreadyWithdrawn = 13,
    InvalidPrice = 14,
    ArithmeticError = 15,
}

// Constants
pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days
