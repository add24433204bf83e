use soroban_sdk::{unwrap::UnwrapOptimized, Address, Env, Symbol};

//********** Storage Keys **********//

const ORACLE_KEY: &str = "Oracle";
const WRAPPED_KEY: &str = "Wrapped";
const SINK_KEY: &str = "Sink";

//********** Storage Utils **********//

pub const ONE_DAY_LEDGERS: u32 = 17280; // assumes 5 seconds per ledger on average

const LEDGER_BUMP_SHARED: u32 = 31 * ONE_DAY_LEDGERS;
const LEDGER_THRESHOLD_SHARED: u32 = LEDGER_BUMP_SHARED - ONE_DAY_LEDGERS;

const LEDGER_BUMP_USER: u32 = 120 * ONE_DAY_LEDGERS;
const LEDGER_THRESHOLD_USER: u32 = LEDGER_BUMP_USER - 20 * ONE_DAY_LEDGERS;

/// Bump the instance lifetime by the defined amount
pub fn extend_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(LEDGER_THRESHOLD_SHARED, LEDGER_BUMP_SHARED);
}

/********** Instance **********/

/// Get the reserve oracle address
pub fn get_oracle(e: &Env) -> Address {
    e.storage()
        .instance()
        .get::<Symbol, Address>(&Symbol::new(e, ORACLE_KEY))
        .unwrap_optimized()
}

/// Set the reserve oracle address
pub fn set_oracle(e: &Env, oracle: Address) {
    e.storage()
        .instance()
        .set::<Symbol, Address>(&Symbol::new(e, ORACLE_KEY), &oracle);
}

/// Get the wrapped token address
pub fn get_wrapped_token(e: &Env) -> Address {
    e.storage()
        .instance()
        .get::<Symbol, Address>(&Symbol::new(e, WRAPPED_KEY))
        .unwrap_optimized()
}

/// Set the wrapped token address
pub fn set_wrapped_token(e: &Env, wrapped_token: Address) {
    e.storage()
        .instance()
        .set::<Symbol, Address>(&Symbol::new(e, WRAPPED_KEY), &wrapped_token);
}

/// Get the deposit sink address
pub fn get_deposit_sink(e: &Env) -> Address {
    e.storage()
        .instance()
        .get::<Symbol, Address>(&Symbol::new(e, SINK_KEY))
        .unwrap_optimized()
}

/// Set the deposit sink address
pub fn set_deposit_sink(e: &Env, deposit_sink: Address) {
    e.storage()
        .instance()
        .set::<Symbol, Address>(&Symbol::new(e, SINK_KEY), &deposit_sink);
}

/********** Persistent **********/

/// Get the ledger sequence of an account's last deposit.
/// Returns 0 if the account has never deposited.
pub fn get_last_deposit_ledger(e: &Env, account: &Address) -> u32 {
    let result = e.storage().persistent().get::<Address, u32>(account);
    if let Some(ledger) = result {
        e.storage()
            .persistent()
            .extend_ttl(account, LEDGER_THRESHOLD_USER, LEDGER_BUMP_USER);
        ledger
    } else {
        0
    }
}

/// Set the ledger sequence of an account's last deposit
pub fn set_last_deposit_ledger(e: &Env, account: &Address, ledger: u32) {
    e.storage().persistent().set::<Address, u32>(account, &ledger);
    e.storage()
        .persistent()
        .extend_ttl(account, LEDGER_THRESHOLD_USER, LEDGER_BUMP_USER);
}
