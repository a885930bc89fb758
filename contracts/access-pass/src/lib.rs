#![no_std]

mod activity;
mod contract;
mod error;
mod storage;

pub use contract::{AccessPassContract, AccessPassContractClient};
pub use error::ContractError;
pub use storage::Config;

pub mod ttl {
    pub const DAY_IN_LEDGERS: u32 = 17280;

    pub const BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
    pub const LIFETIME_THRESHOLD: u32 = BUMP_AMOUNT - DAY_IN_LEDGERS;

    pub const PASS_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
    pub const PASS_LIFETIME_THRESHOLD: u32 = PASS_BUMP_AMOUNT - DAY_IN_LEDGERS;
}

// durations are configured in days and stored in seconds
pub const SECONDS_PER_DAY: u64 = 86_400;
