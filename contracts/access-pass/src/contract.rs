use soroban_sdk::{contract, contractimpl, log, symbol_short, token, Address, Env, Symbol};

use crate::{
    activity::record_activity,
    error::ContractError,
    storage::{
        get_balance, get_config, get_owner, get_pass_expiry, is_initialized,
        save_activity_logger, save_balance, save_config, save_owner, save_pass_expiry,
        set_initialized, Config,
    },
    SECONDS_PER_DAY,
};

const INIT: Symbol = symbol_short!("init");
const BUY: Symbol = symbol_short!("buy");
const PRICE: Symbol = symbol_short!("price");
const DURATION: Symbol = symbol_short!("duration");
const WITHDRAW: Symbol = symbol_short!("withdraw");

#[contract]
pub struct AccessPassContract;

#[contractimpl]
impl AccessPassContract {
    // `pass_duration_days` is converted to seconds before it is stored
    #[allow(dead_code)]
    pub fn initialize(
        env: Env,
        owner: Address,
        token: Address,
        pass_price: u64,
        pass_duration_days: u64,
        activity_logger: Option<Address>,
    ) -> Result<(), ContractError> {
        if is_initialized(&env) {
            log!(&env, "Access Pass: Initialize: Already initialized");
            return Err(ContractError::AlreadyInitialized);
        }

        let config = Config {
            token: token.clone(),
            pass_price,
            pass_duration: days_to_seconds(&env, pass_duration_days)?,
        };

        save_config(&env, &config)?;
        save_owner(&env, &owner)?;
        if let Some(logger) = activity_logger {
            save_activity_logger(&env, &logger);
        }

        set_initialized(&env);

        env.events().publish(
            (INIT, owner),
            (token, config.pass_price, config.pass_duration),
        );

        Ok(())
    }

    /// Buys or extends a pass for `buyer` and returns the new expiry.
    ///
    /// A pass that is still active is extended from its current expiry, an
    /// expired one starts over from the current ledger time. The whole
    /// `payment` is taken and anything above the pass price is refunded in the
    /// same call; if the refund cannot be delivered the purchase is reverted.
    #[allow(dead_code)]
    pub fn buy_pass(env: Env, buyer: Address, payment: u64) -> Result<u64, ContractError> {
        buyer.require_auth();

        let config = get_config(&env)?;

        if payment < config.pass_price {
            log!(
                &env,
                "Access Pass: Buy pass: Insufficient payment. ",
                "Pass price: ",
                config.pass_price,
                "Payment: ",
                payment
            );
            return Err(ContractError::InsufficientPayment);
        }

        let now = env.ledger().timestamp();
        let current_expiry = get_pass_expiry(&env, &buyer);

        // an active pass stacks, an expired one does not carry over
        let base = if current_expiry > now {
            current_expiry
        } else {
            now
        };

        let new_expiry = base.checked_add(config.pass_duration).ok_or_else(|| {
            log!(&env, "Access Pass: Buy pass: Expiry overflow");
            ContractError::ArithmeticOverflow
        })?;

        let new_balance = get_balance(&env)
            .checked_add(config.pass_price)
            .ok_or_else(|| {
                log!(&env, "Access Pass: Buy pass: Balance overflow");
                ContractError::ArithmeticOverflow
            })?;

        let token = token::Client::new(&env, &config.token);
        let contract_addr = env.current_contract_address();

        if token
            .try_transfer(&buyer, &contract_addr, &(payment as i128))
            .is_err()
        {
            log!(
                &env,
                "Access Pass: Buy pass: Payment transfer failed. Buyer: ",
                buyer
            );
            return Err(ContractError::PaymentFailed);
        }

        save_pass_expiry(&env, &buyer, new_expiry);
        save_balance(&env, new_balance);

        env.events().publish((BUY, buyer.clone()), (new_expiry, payment));
        record_activity(&env, &buyer, BUY, payment);

        let excess = payment - config.pass_price;
        if excess > 0
            && token
                .try_transfer(&contract_addr, &buyer, &(excess as i128))
                .is_err()
        {
            log!(
                &env,
                "Access Pass: Buy pass: Refund failed. Buyer: ",
                buyer,
                "Excess: ",
                excess
            );
            return Err(ContractError::RefundFailed);
        }

        Ok(new_expiry)
    }

    #[allow(dead_code)]
    pub fn has_access(env: Env, user: Address) -> bool {
        get_pass_expiry(&env, &user) > env.ledger().timestamp()
    }

    // Seconds left on `user`'s pass, zero when it never existed or already ran out
    #[allow(dead_code)]
    pub fn get_time_remaining(env: Env, user: Address) -> u64 {
        get_pass_expiry(&env, &user).saturating_sub(env.ledger().timestamp())
    }

    #[allow(dead_code)]
    pub fn my_access(env: Env, caller: Address) -> bool {
        caller.require_auth();

        Self::has_access(env, caller)
    }

    #[allow(dead_code)]
    pub fn update_price(env: Env, sender: Address, new_price: u64) -> Result<(), ContractError> {
        ensure_owner(&env, &sender)?;
        sender.require_auth();

        let mut config = get_config(&env)?;
        config.pass_price = new_price;
        save_config(&env, &config)?;

        env.events().publish((PRICE,), new_price);

        Ok(())
    }

    /// Sets the length of future passes. Expiries that were already computed
    /// keep their value.
    #[allow(dead_code)]
    pub fn update_duration(
        env: Env,
        sender: Address,
        new_duration_days: u64,
    ) -> Result<(), ContractError> {
        ensure_owner(&env, &sender)?;
        sender.require_auth();

        let new_duration = days_to_seconds(&env, new_duration_days)?;

        let mut config = get_config(&env)?;
        config.pass_duration = new_duration;
        save_config(&env, &config)?;

        env.events().publish((DURATION,), new_duration);

        Ok(())
    }

    /// Moves the whole collected balance to the owner and returns the amount.
    ///
    /// With nothing collected this is a no-op returning `0`: no transfer is
    /// attempted and no event is published.
    #[allow(dead_code)]
    pub fn withdraw(env: Env, sender: Address) -> Result<u64, ContractError> {
        ensure_owner(&env, &sender)?;
        sender.require_auth();

        let amount = get_balance(&env);
        if amount == 0 {
            log!(&env, "Access Pass: Withdraw: Nothing to withdraw");
            return Ok(0);
        }

        let config = get_config(&env)?;

        // zeroed before the transfer; a failed transfer reverts this write
        save_balance(&env, 0);

        let token = token::Client::new(&env, &config.token);
        if token
            .try_transfer(&env.current_contract_address(), &sender, &(amount as i128))
            .is_err()
        {
            log!(
                &env,
                "Access Pass: Withdraw: Transfer to owner failed. Amount: ",
                amount
            );
            return Err(ContractError::WithdrawalFailed);
        }

        env.events().publish((WITHDRAW, sender.clone()), amount);
        record_activity(&env, &sender, WITHDRAW, amount);

        Ok(amount)
    }

    #[allow(dead_code)]
    pub fn get_balance(env: Env) -> u64 {
        crate::storage::get_balance(&env)
    }

    #[allow(dead_code)]
    pub fn query_config(env: Env) -> Result<Config, ContractError> {
        get_config(&env)
    }

    #[allow(dead_code)]
    pub fn query_owner(env: Env) -> Result<Address, ContractError> {
        get_owner(&env)
    }

    // Raw expiry timestamp, `0` for users that never bought a pass
    #[allow(dead_code)]
    pub fn query_pass_expiry(env: Env, user: Address) -> u64 {
        get_pass_expiry(&env, &user)
    }
}

fn ensure_owner(env: &Env, sender: &Address) -> Result<(), ContractError> {
    let owner = get_owner(env)?;

    if owner != *sender {
        log!(
            env,
            "Access Pass: Ensure owner: Unauthorized. Sender: ",
            sender.clone()
        );
        return Err(ContractError::OnlyOwner);
    }

    Ok(())
}

fn days_to_seconds(env: &Env, days: u64) -> Result<u64, ContractError> {
    days.checked_mul(SECONDS_PER_DAY).ok_or_else(|| {
        log!(env, "Access Pass: Days to seconds: Duration overflow");
        ContractError::ArithmeticOverflow
    })
}
