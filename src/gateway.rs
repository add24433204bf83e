use crate::{
    dependencies::DepositSinkClient, errors::GatewayError, events::GatewayEvents, oracle,
    reserve::Reserve, storage, validator::require_positive,
};
use soroban_sdk::{
    panic_with_error,
    token::{StellarAssetClient, TokenClient},
    Address, Env,
};

/// Executes a deposit of base asset into the reserve in exchange for wrapped tokens
pub fn deposit(e: &Env, from: &Address, base_amount: i128) -> i128 {
    require_positive(e, base_amount, GatewayError::ZeroAmount);
    if !oracle::is_deposit_enabled(e) {
        panic_with_error!(e, GatewayError::DepositsDisabled);
    }
    if base_amount > oracle::max_deposit_amount(e) {
        panic_with_error!(e, GatewayError::CapacityExceeded);
    }

    // Price against the reserve state before the deposit lands in the sink
    let reserve = Reserve::load(e);
    let quote = reserve.quote_deposit(base_amount);

    storage::set_last_deposit_ledger(e, from, e.ledger().sequence());

    // Move the base asset into the reserve, then credit the depositor
    DepositSinkClient::new(&e, &storage::get_deposit_sink(e)).deposit(from, &base_amount);
    StellarAssetClient::new(&e, &storage::get_wrapped_token(e)).mint(from, &quote.output_amount);

    GatewayEvents::deposit(e, from, base_amount, quote.output_amount, quote.fee_amount);
    quote.output_amount
}

/// Executes a redemption of wrapped tokens for base asset from the reserve
pub fn redeem(e: &Env, from: &Address, wrapped_amount: i128) -> i128 {
    require_positive(e, wrapped_amount, GatewayError::ZeroAmount);

    // Deposits must season for the configured number of ledgers before the
    // account can redeem
    let last_deposit_ledger = storage::get_last_deposit_ledger(e, from);
    if e.ledger().sequence() - last_deposit_ledger < oracle::deposit_delay(e) {
        panic_with_error!(e, GatewayError::CooldownActive);
    }

    let reserve = Reserve::load(e);
    let base_amount = reserve.quote_redeem(e, wrapped_amount);

    // Burn the wrapped tokens, then release the base asset to the redeemer
    TokenClient::new(&e, &storage::get_wrapped_token(e)).burn(from, &wrapped_amount);
    DepositSinkClient::new(&e, &storage::get_deposit_sink(e)).withdraw(from, &base_amount);

    GatewayEvents::redeem(e, from, wrapped_amount, base_amount);
    base_amount
}
