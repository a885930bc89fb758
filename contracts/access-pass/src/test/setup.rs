use soroban_sdk::{token, Address, Env};

use crate::contract::{AccessPassContract, AccessPassContractClient};

use self::rejecting_token::{RejectingToken, RejectingTokenClient};

pub const DAY: u64 = 86_400u64;
pub const THIRTY_DAYS: u64 = 30;
pub const PASS_PRICE: u64 = 100;

pub fn deploy_token_contract<'a>(
    env: &Env,
    admin: &Address,
) -> (token::Client<'a>, token::StellarAssetClient<'a>) {
    let token_addr = env.register_stellar_asset_contract(admin.clone());

    (
        token::Client::new(env, &token_addr),
        token::StellarAssetClient::new(env, &token_addr),
    )
}

pub fn initialize_access_pass_contract<'a>(
    env: &Env,
    owner: &Address,
    token: &Address,
    activity_logger: Option<Address>,
) -> AccessPassContractClient<'a> {
    let client =
        AccessPassContractClient::new(env, &env.register_contract(None, AccessPassContract {}));

    client.initialize(owner, token, &PASS_PRICE, &THIRTY_DAYS, &activity_logger);

    client
}

// Each stand-in contract lives in its own module so the generated spec
// symbols of same-named functions do not collide.

pub mod rejecting_token {
    use soroban_sdk::{contract, contracterror, contractimpl, contracttype, Address, Env};

    #[contracterror]
    #[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
    #[repr(u32)]
    pub enum RejectingTokenError {
        InsufficientBalance = 0,
        RecipientRejected = 1,
    }

    #[derive(Clone)]
    #[contracttype]
    pub enum TokenKey {
        Balance(Address),
        Rejected(Address),
    }

    /// Minimal token whose transfers fail for recipients flagged with
    /// `set_rejecting`.
    #[contract]
    pub struct RejectingToken;

    #[contractimpl]
    impl RejectingToken {
        pub fn mint(env: Env, to: Address, amount: i128) {
            let balance = Self::balance(env.clone(), to.clone());
            env.storage()
                .persistent()
                .set(&TokenKey::Balance(to), &(balance + amount));
        }

        pub fn balance(env: Env, id: Address) -> i128 {
            env.storage()
                .persistent()
                .get(&TokenKey::Balance(id))
                .unwrap_or(0)
        }

        pub fn set_rejecting(env: Env, id: Address, rejecting: bool) {
            env.storage()
                .persistent()
                .set(&TokenKey::Rejected(id), &rejecting);
        }

        pub fn transfer(
            env: Env,
            from: Address,
            to: Address,
            amount: i128,
        ) -> Result<(), RejectingTokenError> {
            from.require_auth();

            let rejecting = env
                .storage()
                .persistent()
                .get(&TokenKey::Rejected(to.clone()))
                .unwrap_or(false);
            if rejecting {
                return Err(RejectingTokenError::RecipientRejected);
            }

            let from_balance = Self::balance(env.clone(), from.clone());
            if from_balance < amount {
                return Err(RejectingTokenError::InsufficientBalance);
            }

            let to_balance = Self::balance(env.clone(), to.clone());
            env.storage()
                .persistent()
                .set(&TokenKey::Balance(from), &(from_balance - amount));
            env.storage()
                .persistent()
                .set(&TokenKey::Balance(to), &(to_balance + amount));

            Ok(())
        }
    }
}

pub fn deploy_rejecting_token<'a>(env: &Env) -> RejectingTokenClient<'a> {
    RejectingTokenClient::new(env, &env.register_contract(None, RejectingToken {}))
}

pub mod recording_logger {
    use soroban_sdk::{contract, contractimpl, symbol_short, vec, Address, Env, Symbol, Vec};

    #[contract]
    pub struct RecordingLogger;

    #[contractimpl]
    impl RecordingLogger {
        pub fn log_activity(env: Env, user: Address, action: Symbol, amount: u64, timestamp: u64) {
            let mut records = Self::records(env.clone());
            records.push_back((user, action, amount, timestamp));
            env.storage()
                .instance()
                .set(&symbol_short!("records"), &records);
        }

        pub fn records(env: Env) -> Vec<(Address, Symbol, u64, u64)> {
            env.storage()
                .instance()
                .get(&symbol_short!("records"))
                .unwrap_or(vec![&env])
        }
    }
}

pub mod broken_logger {
    use soroban_sdk::{contract, contracterror, contractimpl, Address, Env, Symbol};

    #[contracterror]
    #[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
    #[repr(u32)]
    pub enum BrokenLoggerError {
        LoggerDown = 0,
    }

    #[contract]
    pub struct BrokenLogger;

    #[contractimpl]
    impl BrokenLogger {
        pub fn log_activity(
            _env: Env,
            _user: Address,
            _action: Symbol,
            _amount: u64,
            _timestamp: u64,
        ) -> Result<(), BrokenLoggerError> {
            Err(BrokenLoggerError::LoggerDown)
        }
    }
}
