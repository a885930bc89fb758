use soroban_sdk::{contract, contractimpl, log, symbol_short, Address, Env, Symbol, Vec};

use crate::{
    error::ContractError,
    storage::{
        append_record, get_record, get_record_count, get_records, get_reporter,
        get_user_records, is_initialized, save_reporter, set_initialized, ActivityRecord,
    },
};

const ACTIVITY: Symbol = symbol_short!("activity");

#[contract]
pub struct ActivityLogger;

#[contractimpl]
impl ActivityLogger {
    // `reporter` is the only address allowed to append, usually the pass ledger contract
    #[allow(dead_code)]
    pub fn initialize(env: Env, reporter: Address) -> Result<(), ContractError> {
        if is_initialized(&env) {
            log!(&env, "Activity Logger: Initialize: Already initialized");
            return Err(ContractError::AlreadyInitialized);
        }

        save_reporter(&env, &reporter);
        set_initialized(&env);

        Ok(())
    }

    // Appends a record; entries are never modified or removed afterwards
    #[allow(dead_code)]
    pub fn log_activity(
        env: Env,
        user: Address,
        action: Symbol,
        amount: u64,
        timestamp: u64,
    ) -> Result<(), ContractError> {
        get_reporter(&env)?.require_auth();

        let record = ActivityRecord {
            id: get_record_count(&env) + 1,
            user: user.clone(),
            action: action.clone(),
            amount,
            timestamp,
        };

        append_record(&env, &record);

        env.events()
            .publish((ACTIVITY, user), (action, amount, timestamp));

        Ok(())
    }

    #[allow(dead_code)]
    pub fn query_reporter(env: Env) -> Result<Address, ContractError> {
        get_reporter(&env)
    }

    #[allow(dead_code)]
    pub fn activity_count(env: Env) -> u64 {
        get_record_count(&env)
    }

    #[allow(dead_code)]
    pub fn get_activity(env: Env, id: u64) -> Result<ActivityRecord, ContractError> {
        get_record(&env, id)
    }

    // Records in append order, `start_index` is 1-based
    #[allow(dead_code)]
    pub fn get_activities(
        env: Env,
        start_index: Option<u64>,
        limit: Option<u64>,
    ) -> Result<Vec<ActivityRecord>, ContractError> {
        get_records(&env, start_index, limit)
    }

    #[allow(dead_code)]
    pub fn get_user_activities(
        env: Env,
        user: Address,
    ) -> Result<Vec<ActivityRecord>, ContractError> {
        get_user_records(&env, &user)
    }
}
