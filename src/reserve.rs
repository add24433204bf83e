use crate::{constants::SCALAR_18, errors::GatewayError, oracle, types::ConversionQuote};
use soroban_fixed_point_math::FixedPoint;
use soroban_sdk::{contracttype, panic_with_error, Env};

/// A snapshot of the reserve state a conversion is priced against
#[contracttype]
pub struct Reserve {
    /// The total base asset balance backing the reserve
    pub total_base: i128,
    /// The total outstanding wrapped token supply
    pub total_wrapped: i128,
    /// The deposit fee rate, 18 decimal precision
    pub fee_rate: i128,
}

impl Reserve {
    /// Load the current reserve state from the oracle
    pub fn load(e: &Env) -> Self {
        Self {
            total_base: oracle::total_base_balance(e),
            total_wrapped: oracle::total_wrapped_supply(e),
            fee_rate: oracle::deposit_fee_rate(e),
        }
    }

    /// Prices a deposit of base asset into wrapped tokens, rounding down
    ///
    /// ### Arguments
    /// * `base_amount` - The base asset amount being deposited
    ///
    /// ### Returns
    /// * `ConversionQuote` - The wrapped tokens minted and the fee charged
    pub fn quote_deposit(&self, base_amount: i128) -> ConversionQuote {
        let fee_amount = base_amount
            .fixed_mul_floor(self.fee_rate, SCALAR_18)
            .unwrap();
        if self.total_wrapped == 0 {
            // The first depositor mints 1:1 against the gross amount. The fee
            // is still quoted, but the bootstrap mint does not net it out.
            return ConversionQuote {
                output_amount: base_amount,
                fee_amount,
            };
        }
        let output_amount = (base_amount - fee_amount)
            .fixed_mul_floor(self.total_wrapped, self.total_base)
            .unwrap();
        ConversionQuote {
            output_amount,
            fee_amount,
        }
    }

    /// Prices a redemption of wrapped tokens into the redeemer's pro-rata
    /// share of the reserve, rounding down. No fee is charged on redemption.
    ///
    /// ### Arguments
    /// * `wrapped_amount` - The wrapped token amount being redeemed
    ///
    /// ### Returns
    /// * `i128` - The base asset amount released
    ///
    /// ### Panics
    /// * `InsufficientReserveSupply` - If there is no outstanding wrapped supply
    pub fn quote_redeem(&self, e: &Env, wrapped_amount: i128) -> i128 {
        if self.total_wrapped == 0 {
            panic_with_error!(e, GatewayError::InsufficientReserveSupply);
        }
        wrapped_amount
            .fixed_mul_floor(self.total_base, self.total_wrapped)
            .unwrap()
    }
}
