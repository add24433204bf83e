use soroban_sdk::contracterror;

/// The error codes for the contract.
///
/// Insufficient wrapped token balance and missing burn authorization are
/// surfaced by the wrapped token contract, not re-checked here.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum GatewayError {
    DepositsDisabled = 100,
    CapacityExceeded = 101,
    ZeroAmount = 102,
    InsufficientReserveSupply = 103,
    CooldownActive = 104,
}
