/// 1 with 18 decimal places - the denominator of the deposit fee rate
pub const SCALAR_18: i128 = 1_000_000_000_000_000_000;
