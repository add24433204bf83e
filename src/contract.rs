use crate::{gateway, oracle, reserve::Reserve, storage, types::ConversionQuote};

use soroban_sdk::{contract, contractimpl, Address, Env};

#[contract]
pub struct ReserveGateway;

#[contractimpl]
impl ReserveGateway {
    /// Initialize the contract
    ///
    /// ### Arguments
    /// * `oracle` - The reserve oracle address
    /// * `wrapped_token` - The wrapped token address
    /// * `deposit_sink` - The deposit sink address
    pub fn __constructor(e: Env, oracle: Address, wrapped_token: Address, deposit_sink: Address) {
        storage::set_oracle(&e, oracle);
        storage::set_wrapped_token(&e, wrapped_token);
        storage::set_deposit_sink(&e, deposit_sink);
    }

    //********** Read-Only ***********//

    /// Get the reserve oracle address
    ///
    /// ### Returns
    /// * `Address` - The reserve oracle address
    pub fn get_oracle(e: Env) -> Address {
        storage::get_oracle(&e)
    }

    /// Get the wrapped token address
    ///
    /// ### Returns
    /// * `Address` - The wrapped token address
    pub fn get_wrapped_token(e: Env) -> Address {
        storage::get_wrapped_token(&e)
    }

    /// Get the deposit sink address
    ///
    /// ### Returns
    /// * `Address` - The deposit sink address
    pub fn get_deposit_sink(e: Env) -> Address {
        storage::get_deposit_sink(&e)
    }

    /// Price a deposit of base asset against the current reserve state
    ///
    /// ### Arguments
    /// * `base_amount` - The base asset amount to price
    ///
    /// ### Returns
    /// * `ConversionQuote` - The wrapped tokens the deposit would mint and
    /// the fee it would be charged
    pub fn quote_deposit(e: Env, base_amount: i128) -> ConversionQuote {
        Reserve::load(&e).quote_deposit(base_amount)
    }

    /// Price a redemption of wrapped tokens against the current reserve state
    ///
    /// ### Arguments
    /// * `wrapped_amount` - The wrapped token amount to price
    ///
    /// ### Returns
    /// * `i128` - The base asset amount the redemption would release
    ///
    /// ### Panics
    /// * `InsufficientReserveSupply` - If there is no outstanding wrapped supply
    pub fn quote_redeem(e: Env, wrapped_amount: i128) -> i128 {
        Reserve::load(&e).quote_redeem(&e, wrapped_amount)
    }

    /// Get whether deposits are enabled and the maximum accepted deposit amount
    ///
    /// ### Returns
    /// * `(bool, i128)` - (deposits enabled, max deposit amount)
    pub fn get_availability(e: Env) -> (bool, i128) {
        (
            oracle::is_deposit_enabled(&e),
            oracle::max_deposit_amount(&e),
        )
    }

    /// Get the deposit cooldown length in ledgers
    ///
    /// ### Returns
    /// * `u32` - The number of ledgers an account must wait after a deposit
    /// before it may redeem
    pub fn get_deposit_delay(e: Env) -> u32 {
        oracle::deposit_delay(&e)
    }

    /// Get the ledger sequence of an account's last deposit
    ///
    /// ### Arguments
    /// * `account` - The account to look up
    ///
    /// ### Returns
    /// * `u32` - The ledger sequence of the account's last deposit, or 0 if
    /// the account has never deposited
    pub fn get_last_deposit_ledger(e: Env, account: Address) -> u32 {
        storage::get_last_deposit_ledger(&e, &account)
    }

    //********** Read-Write ***********//

    /// Deposits base asset into the reserve in exchange for wrapped tokens
    ///
    /// ### Arguments
    /// * `from` - The address of the depositor
    /// * `base_amount` - The amount of base asset to deposit
    ///
    /// ### Returns
    /// * `i128` - The amount of wrapped tokens minted to the depositor
    ///
    /// ### Panics
    /// * `ZeroAmount` - If the amount is not positive
    /// * `DepositsDisabled` - If deposits are currently disabled
    /// * `CapacityExceeded` - If the amount exceeds the max deposit amount
    pub fn deposit(e: &Env, from: Address, base_amount: i128) -> i128 {
        storage::extend_instance(e);
        from.require_auth();
        gateway::deposit(e, &from, base_amount)
    }

    /// Redeems wrapped tokens for the caller's pro-rata share of the reserve
    ///
    /// ### Arguments
    /// * `from` - The address of the redeemer
    /// * `wrapped_amount` - The amount of wrapped tokens to redeem
    ///
    /// ### Returns
    /// * `i128` - The amount of base asset released to the redeemer
    ///
    /// ### Panics
    /// * `ZeroAmount` - If the amount is not positive
    /// * `CooldownActive` - If the deposit delay has not elapsed since the
    /// caller's last deposit
    /// * `InsufficientReserveSupply` - If there is no outstanding wrapped supply
    pub fn redeem(e: &Env, from: Address, wrapped_amount: i128) -> i128 {
        storage::extend_instance(e);
        from.require_auth();
        gateway::redeem(e, &from, wrapped_amount)
    }
}
