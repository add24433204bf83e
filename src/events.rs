use soroban_sdk::{Address, Env, Symbol};

pub struct GatewayEvents {}

impl GatewayEvents {
    /// Emitted when base asset is deposited for wrapped tokens
    ///
    /// - topics - `["deposit", from: Address]`
    /// - data - `[base_amount: i128, wrapped_amount: i128, fee: i128]`
    pub fn deposit(
        e: &Env,
        from: &Address,
        base_amount: i128,
        wrapped_amount: i128,
        fee: i128,
    ) {
        let topics = (Symbol::new(&e, "deposit"), from.clone());
        e.events()
            .publish(topics, (base_amount, wrapped_amount, fee));
    }

    /// Emitted when wrapped tokens are redeemed for base asset
    ///
    /// - topics - `["redeem", from: Address]`
    /// - data - `[wrapped_amount: i128, base_amount: i128]`
    pub fn redeem(e: &Env, from: &Address, wrapped_amount: i128, base_amount: i128) {
        let topics = (Symbol::new(&e, "redeem"), from.clone());
        e.events().publish(topics, (wrapped_amount, base_amount));
    }
}
