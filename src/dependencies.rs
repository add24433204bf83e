use soroban_sdk::{contractclient, Address, Env};

/// The read-only settings and reserve-state source the gateway prices
/// against. Queried fresh on every call, never cached across invocations.
#[contractclient(name = "ReserveOracleClient")]
pub trait ReserveOracle {
    /// The total base asset balance backing the reserve
    fn total_base_balance(env: Env) -> i128;

    /// The total outstanding wrapped token supply
    fn total_wrapped_supply(env: Env) -> i128;

    /// The deposit fee rate, 18 decimal precision
    fn deposit_fee_rate(env: Env) -> i128;

    /// Whether deposits are currently accepted
    fn is_deposit_enabled(env: Env) -> bool;

    /// The maximum base asset amount accepted in a single deposit
    fn max_deposit_amount(env: Env) -> i128;

    /// The number of ledgers an account must wait after a deposit
    /// before it may redeem
    fn deposit_delay(env: Env) -> u32;
}

/// The contract holding the base asset reserve. Deposited funds are pulled
/// into it and redeemed funds are released from it.
#[contractclient(name = "DepositSinkClient")]
pub trait DepositSink {
    /// Pull `amount` of the base asset from `from` into the reserve
    fn deposit(env: Env, from: Address, amount: i128);

    /// Release `amount` of the base asset from the reserve to `to`
    fn withdraw(env: Env, to: Address, amount: i128);
}
