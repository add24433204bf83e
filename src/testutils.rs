#![cfg(any(test, feature = "testutils"))]

use crate::storage::ONE_DAY_LEDGERS;
use crate::ReserveGateway;
use soroban_sdk::{
    testutils::{Ledger as _, LedgerInfo},
    Address, Env,
};

#[cfg(test)]
use crate::ReserveGatewayClient;
#[cfg(test)]
use sep_41_token::testutils::MockTokenClient;

pub trait EnvTestUtils {
    /// Jump the env by the given amount of ledgers. Assumes 5 seconds per ledger.
    fn jump(&self, ledgers: u32);

    /// Set the ledger to the default LedgerInfo
    ///
    /// Time -> 1441065600 (Sept 1st, 2015 12:00:00 AM UTC)
    /// Sequence -> 100
    fn set_default_info(&self);
}

impl EnvTestUtils for Env {
    fn jump(&self, ledgers: u32) {
        self.ledger().set(LedgerInfo {
            timestamp: self.ledger().timestamp().saturating_add(ledgers as u64 * 5),
            protocol_version: 22,
            sequence_number: self.ledger().sequence().saturating_add(ledgers),
            network_id: Default::default(),
            base_reserve: 10,
            min_temp_entry_ttl: 30 * ONE_DAY_LEDGERS,
            min_persistent_entry_ttl: 30 * ONE_DAY_LEDGERS,
            max_entry_ttl: 365 * ONE_DAY_LEDGERS,
        });
    }

    fn set_default_info(&self) {
        self.ledger().set(LedgerInfo {
            timestamp: 1441065600, // Sept 1st, 2015 12:00:00 AM UTC
            protocol_version: 22,
            sequence_number: 100,
            network_id: Default::default(),
            base_reserve: 10,
            min_temp_entry_ttl: 30 * ONE_DAY_LEDGERS,
            min_persistent_entry_ttl: 30 * ONE_DAY_LEDGERS,
            max_entry_ttl: 365 * ONE_DAY_LEDGERS,
        });
    }
}

/// Register the gateway contract against the given collaborator addresses
pub fn register_gateway(
    e: &Env,
    oracle: &Address,
    wrapped_token: &Address,
    deposit_sink: &Address,
) -> Address {
    e.register(
        ReserveGateway,
        (oracle.clone(), wrapped_token.clone(), deposit_sink.clone()),
    )
}

/// A mock reserve oracle with settable state
pub mod mockoracle {
    use soroban_sdk::{contract, contractimpl, Env, Symbol};

    const BASE_KEY: &str = "Base";
    const WRAPPED_KEY: &str = "Wrapped";
    const FEE_RATE_KEY: &str = "FeeRate";
    const ENABLED_KEY: &str = "Enabled";
    const MAX_DEPOSIT_KEY: &str = "MaxDep";
    const DELAY_KEY: &str = "Delay";

    #[contract]
    pub struct MockReserveOracle;

    #[contractimpl]
    impl MockReserveOracle {
        pub fn set_reserve(e: Env, total_base: i128, total_wrapped: i128) {
            e.storage()
                .instance()
                .set(&Symbol::new(&e, BASE_KEY), &total_base);
            e.storage()
                .instance()
                .set(&Symbol::new(&e, WRAPPED_KEY), &total_wrapped);
        }

        pub fn set_deposit_fee_rate(e: Env, rate: i128) {
            e.storage()
                .instance()
                .set(&Symbol::new(&e, FEE_RATE_KEY), &rate);
        }

        pub fn set_deposit_enabled(e: Env, enabled: bool) {
            e.storage()
                .instance()
                .set(&Symbol::new(&e, ENABLED_KEY), &enabled);
        }

        pub fn set_max_deposit_amount(e: Env, max: i128) {
            e.storage()
                .instance()
                .set(&Symbol::new(&e, MAX_DEPOSIT_KEY), &max);
        }

        pub fn set_deposit_delay(e: Env, delay: u32) {
            e.storage()
                .instance()
                .set(&Symbol::new(&e, DELAY_KEY), &delay);
        }

        pub fn total_base_balance(e: Env) -> i128 {
            e.storage()
                .instance()
                .get(&Symbol::new(&e, BASE_KEY))
                .unwrap_or(0)
        }

        pub fn total_wrapped_supply(e: Env) -> i128 {
            e.storage()
                .instance()
                .get(&Symbol::new(&e, WRAPPED_KEY))
                .unwrap_or(0)
        }

        pub fn deposit_fee_rate(e: Env) -> i128 {
            e.storage()
                .instance()
                .get(&Symbol::new(&e, FEE_RATE_KEY))
                .unwrap_or(0)
        }

        pub fn is_deposit_enabled(e: Env) -> bool {
            e.storage()
                .instance()
                .get(&Symbol::new(&e, ENABLED_KEY))
                .unwrap_or(true)
        }

        pub fn max_deposit_amount(e: Env) -> i128 {
            e.storage()
                .instance()
                .get(&Symbol::new(&e, MAX_DEPOSIT_KEY))
                .unwrap_or(i128::MAX)
        }

        pub fn deposit_delay(e: Env) -> u32 {
            e.storage()
                .instance()
                .get(&Symbol::new(&e, DELAY_KEY))
                .unwrap_or(0)
        }
    }

    pub fn register_mock_oracle<'a>(e: &Env) -> MockReserveOracleClient<'a> {
        let address = e.register(MockReserveOracle, ());
        MockReserveOracleClient::new(e, &address)
    }
}

/// A mock deposit sink that holds the base asset it is sent
pub mod mocksink {
    use soroban_sdk::{contract, contractimpl, token::TokenClient, Address, Env, Symbol};

    const TOKEN_KEY: &str = "Token";

    #[contract]
    pub struct MockDepositSink;

    #[contractimpl]
    impl MockDepositSink {
        pub fn __constructor(e: Env, base_token: Address) {
            e.storage()
                .instance()
                .set(&Symbol::new(&e, TOKEN_KEY), &base_token);
        }

        pub fn deposit(e: Env, from: Address, amount: i128) {
            let token: Address = e
                .storage()
                .instance()
                .get(&Symbol::new(&e, TOKEN_KEY))
                .unwrap();
            TokenClient::new(&e, &token).transfer(&from, &e.current_contract_address(), &amount);
        }

        pub fn withdraw(e: Env, to: Address, amount: i128) {
            let token: Address = e
                .storage()
                .instance()
                .get(&Symbol::new(&e, TOKEN_KEY))
                .unwrap();
            TokenClient::new(&e, &token).transfer(&e.current_contract_address(), &to, &amount);
        }
    }

    pub fn register_mock_sink(e: &Env, base_token: &Address) -> Address {
        e.register(MockDepositSink, (base_token.clone(),))
    }
}

#[cfg(test)]
pub fn create_token<'a>(e: &Env, admin: &Address) -> (Address, MockTokenClient<'a>) {
    let token_id = e
        .register_stellar_asset_contract_v2(admin.clone())
        .address();
    (token_id.clone(), MockTokenClient::new(e, &token_id))
}

#[cfg(test)]
pub struct GatewayFixture<'a> {
    pub gateway: ReserveGatewayClient<'a>,
    pub oracle: mockoracle::MockReserveOracleClient<'a>,
    pub sink: Address,
    pub base_token: MockTokenClient<'a>,
    pub wrapped_token: MockTokenClient<'a>,
}

/// Deploy a gateway wired to a mock oracle, a mock sink, and mock base and
/// wrapped tokens administered by `admin`.
#[cfg(test)]
pub fn create_gateway_fixture<'a>(e: &Env, admin: &Address) -> GatewayFixture<'a> {
    let (base_id, base_token) = create_token(e, admin);
    let (wrapped_id, wrapped_token) = create_token(e, admin);
    let oracle = mockoracle::register_mock_oracle(e);
    let sink = mocksink::register_mock_sink(e, &base_id);
    let gateway_id = register_gateway(e, &oracle.address, &wrapped_id, &sink);
    GatewayFixture {
        gateway: ReserveGatewayClient::new(e, &gateway_id),
        oracle,
        sink,
        base_token,
        wrapped_token,
    }
}
