use soroban_sdk::{contracttype, log, vec, Address, Env, Symbol, Vec};

use crate::{
    error::ContractError,
    ttl::{BUMP_AMOUNT, LIFETIME_THRESHOLD, RECORD_BUMP_AMOUNT, RECORD_LIFETIME_THRESHOLD},
};

// consts for Pagination
// since we start counting from 1, default would be 1 as well
pub const DEFAULT_INDEX: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    IsInitialized,
    Reporter,
    RecordCount,
    Record(u64),
    UserRecords(Address),
}

/// A single appended entry.
///
/// * `id` - Position in the global log, starting at 1.
/// * `user` - Whose activity this is.
/// * `action` - Short label of what happened, e.g. `buy`.
/// * `amount` - Value moved by the activity, in token units.
/// * `timestamp` - Ledger time the reporter attached to the activity.
#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct ActivityRecord {
    pub id: u64,
    pub user: Address,
    pub action: Symbol,
    pub amount: u64,
    pub timestamp: u64,
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::IsInitialized)
        .unwrap_or(false)
}

pub fn set_initialized(env: &Env) {
    env.storage().instance().set(&DataKey::IsInitialized, &true);
    env.storage()
        .instance()
        .extend_ttl(LIFETIME_THRESHOLD, BUMP_AMOUNT);
}

pub fn save_reporter(env: &Env, reporter: &Address) {
    env.storage().instance().set(&DataKey::Reporter, reporter);
    env.storage()
        .instance()
        .extend_ttl(LIFETIME_THRESHOLD, BUMP_AMOUNT);
}

pub fn get_reporter(env: &Env) -> Result<Address, ContractError> {
    let reporter = env
        .storage()
        .instance()
        .get(&DataKey::Reporter)
        .ok_or_else(|| {
            log!(env, "Activity Logger: Get reporter: Reporter not set");
            ContractError::NotInitialized
        })?;
    env.storage()
        .instance()
        .extend_ttl(LIFETIME_THRESHOLD, BUMP_AMOUNT);

    Ok(reporter)
}

pub fn get_record_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::RecordCount)
        .unwrap_or_default()
}

pub fn append_record(env: &Env, record: &ActivityRecord) {
    let key = DataKey::Record(record.id);
    env.storage().persistent().set(&key, record);
    env.storage()
        .persistent()
        .extend_ttl(&key, RECORD_LIFETIME_THRESHOLD, RECORD_BUMP_AMOUNT);

    env.storage()
        .instance()
        .set(&DataKey::RecordCount, &record.id);
    env.storage()
        .instance()
        .extend_ttl(LIFETIME_THRESHOLD, BUMP_AMOUNT);

    let user_key = DataKey::UserRecords(record.user.clone());
    let mut user_records: Vec<u64> = env
        .storage()
        .persistent()
        .get(&user_key)
        .unwrap_or(vec![env]);
    user_records.push_back(record.id);

    env.storage().persistent().set(&user_key, &user_records);
    env.storage().persistent().extend_ttl(
        &user_key,
        RECORD_LIFETIME_THRESHOLD,
        RECORD_BUMP_AMOUNT,
    );
}

pub fn get_record(env: &Env, id: u64) -> Result<ActivityRecord, ContractError> {
    let key = DataKey::Record(id);

    let record = env.storage().persistent().get(&key).ok_or_else(|| {
        log!(env, "Activity Logger: Get record: Record not present. Id: ", id);
        ContractError::RecordNotFound
    })?;
    env.storage()
        .persistent()
        .extend_ttl(&key, RECORD_LIFETIME_THRESHOLD, RECORD_BUMP_AMOUNT);

    Ok(record)
}

pub fn get_records(
    env: &Env,
    start_index: Option<u64>,
    limit: Option<u64>,
) -> Result<Vec<ActivityRecord>, ContractError> {
    let start_index = start_index.unwrap_or(DEFAULT_INDEX).max(DEFAULT_INDEX);
    let limit = limit.unwrap_or(DEFAULT_LIMIT);
    let end = start_index
        .saturating_add(limit)
        .min(get_record_count(env).saturating_add(1));

    let mut records = vec![env];

    for id in start_index..end {
        records.push_back(get_record(env, id)?);
    }

    Ok(records)
}

pub fn get_user_records(env: &Env, user: &Address) -> Result<Vec<ActivityRecord>, ContractError> {
    let user_key = DataKey::UserRecords(user.clone());

    let ids: Vec<u64> = env
        .storage()
        .persistent()
        .get(&user_key)
        .unwrap_or(vec![env]);

    env.storage().persistent().has(&user_key).then(|| {
        env.storage().persistent().extend_ttl(
            &user_key,
            RECORD_LIFETIME_THRESHOLD,
            RECORD_BUMP_AMOUNT,
        )
    });

    let mut records = vec![env];
    for id in ids.iter() {
        records.push_back(get_record(env, id)?);
    }

    Ok(records)
}
