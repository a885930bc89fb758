use soroban_sdk::{contractclient, log, Address, Env, Symbol};

use crate::storage::get_activity_logger;

/// Append-only audit sink the ledger reports to when one is configured.
#[allow(dead_code)]
#[contractclient(name = "ActivityLoggerClient")]
pub trait ActivityLoggerInterface {
    fn log_activity(env: Env, user: Address, action: Symbol, amount: u64, timestamp: u64);
}

/// Forwards a record to the configured activity logger, if any.
///
/// The logger is off the payment path: a failing logger never fails the
/// ledger operation that triggered it.
pub fn record_activity(env: &Env, user: &Address, action: Symbol, amount: u64) {
    let Some(logger) = get_activity_logger(env) else {
        return;
    };

    let client = ActivityLoggerClient::new(env, &logger);
    let timestamp = env.ledger().timestamp();

    if client
        .try_log_activity(user, &action, &amount, &timestamp)
        .is_err()
    {
        log!(
            env,
            "Access Pass: Record activity: Activity logger rejected the record",
            logger
        );
    }
}
