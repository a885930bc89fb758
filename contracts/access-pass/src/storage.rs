use soroban_sdk::{contracttype, log, Address, Env};

use crate::{
    error::ContractError,
    ttl::{BUMP_AMOUNT, LIFETIME_THRESHOLD, PASS_BUMP_AMOUNT, PASS_LIFETIME_THRESHOLD},
};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    IsInitialized,
    Owner,
    Config,
    Balance,
    ActivityLogger,
    PassExpiry(Address),
}

/// Pass configuration.
///
/// * `token` - The token every payment and refund is made in.
/// * `pass_price` - Price of a single pass, in the smallest unit of `token`.
/// * `pass_duration` - How long a single pass lasts, in seconds.
#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct Config {
    pub token: Address,
    pub pass_price: u64,
    pub pass_duration: u64,
}

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(LIFETIME_THRESHOLD, BUMP_AMOUNT);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::IsInitialized)
        .unwrap_or(false)
}

pub fn set_initialized(env: &Env) {
    env.storage().instance().set(&DataKey::IsInitialized, &true);
    bump_instance(env);
}

pub fn save_config(env: &Env, config: &Config) -> Result<(), ContractError> {
    env.storage().instance().set(&DataKey::Config, config);
    bump_instance(env);

    Ok(())
}

pub fn get_config(env: &Env) -> Result<Config, ContractError> {
    let config = env
        .storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or_else(|| {
            log!(env, "Access Pass: Get config: Config not found");
            ContractError::NotInitialized
        })?;
    bump_instance(env);

    Ok(config)
}

pub fn save_owner(env: &Env, owner: &Address) -> Result<(), ContractError> {
    env.storage().instance().set(&DataKey::Owner, owner);
    bump_instance(env);

    Ok(())
}

pub fn get_owner(env: &Env) -> Result<Address, ContractError> {
    let owner = env
        .storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or_else(|| {
            log!(env, "Access Pass: Get owner: Owner not found");
            ContractError::NotInitialized
        })?;
    bump_instance(env);

    Ok(owner)
}

pub fn save_activity_logger(env: &Env, logger: &Address) {
    env.storage().instance().set(&DataKey::ActivityLogger, logger);
    bump_instance(env);
}

pub fn get_activity_logger(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::ActivityLogger)
}

pub fn get_balance(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::Balance)
        .unwrap_or_default()
}

pub fn save_balance(env: &Env, balance: u64) {
    env.storage().instance().set(&DataKey::Balance, &balance);
    bump_instance(env);
}

/// Returns the stored expiry of `user`, or `0` if they never bought a pass.
pub fn get_pass_expiry(env: &Env, user: &Address) -> u64 {
    let key = DataKey::PassExpiry(user.clone());

    let expiry = env.storage().persistent().get(&key).unwrap_or_default();

    env.storage().persistent().has(&key).then(|| {
        env.storage()
            .persistent()
            .extend_ttl(&key, PASS_LIFETIME_THRESHOLD, PASS_BUMP_AMOUNT)
    });

    expiry
}

pub fn save_pass_expiry(env: &Env, user: &Address, expiry: u64) {
    let key = DataKey::PassExpiry(user.clone());

    env.storage().persistent().set(&key, &expiry);
    env.storage()
        .persistent()
        .extend_ttl(&key, PASS_LIFETIME_THRESHOLD, PASS_BUMP_AMOUNT);
}
