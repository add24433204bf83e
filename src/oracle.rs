use crate::{dependencies::ReserveOracleClient, storage};
use soroban_sdk::Env;

/// Fetches the total base asset balance backing the reserve
pub fn total_base_balance(e: &Env) -> i128 {
    get_oracle_client(&e).total_base_balance()
}

/// Fetches the total outstanding wrapped token supply
pub fn total_wrapped_supply(e: &Env) -> i128 {
    get_oracle_client(&e).total_wrapped_supply()
}

/// Fetches the deposit fee rate, 18 decimal precision
pub fn deposit_fee_rate(e: &Env) -> i128 {
    get_oracle_client(&e).deposit_fee_rate()
}

/// Fetches whether deposits are currently accepted
pub fn is_deposit_enabled(e: &Env) -> bool {
    get_oracle_client(&e).is_deposit_enabled()
}

/// Fetches the maximum base asset amount accepted in a single deposit
pub fn max_deposit_amount(e: &Env) -> i128 {
    get_oracle_client(&e).max_deposit_amount()
}

/// Fetches the deposit cooldown length in ledgers
pub fn deposit_delay(e: &Env) -> u32 {
    get_oracle_client(&e).deposit_delay()
}

#[inline]
fn get_oracle_client(e: &Env) -> ReserveOracleClient {
    ReserveOracleClient::new(&e, &storage::get_oracle(&e))
}
