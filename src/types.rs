use soroban_sdk::contracttype;

/// The result of pricing a deposit against the current reserve state
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct ConversionQuote {
    /// The wrapped token amount the deposit mints
    pub output_amount: i128,
    /// The base asset fee charged on the deposit
    pub fee_amount: i128,
}
