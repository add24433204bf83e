#![cfg(test)]

use crate::testutils::{create_gateway_fixture, EnvTestUtils, GatewayFixture};
use soroban_sdk::{testutils::Address as _, Address, Env};

const DELAY: u32 = 100;

/// Deploy a gateway with a cooldown configured and `samwise` funded for a
/// deposit into an empty pool.
fn cooldown_fixture<'a>(e: &Env, bombadil: &Address, samwise: &Address) -> GatewayFixture<'a> {
    let fixture = create_gateway_fixture(e, bombadil);
    fixture.oracle.set_deposit_delay(&DELAY);
    fixture.base_token.mint(samwise, &100_0000000);
    fixture
}

#[test]
#[should_panic(expected = "Error(Contract, #104)")]
fn test_redeem_in_deposit_ledger() {
    let e = Env::default();
    e.mock_all_auths_allowing_non_root_auth();
    e.set_default_info();

    let bombadil = Address::generate(&e);
    let samwise = Address::generate(&e);
    let fixture = cooldown_fixture(&e, &bombadil, &samwise);

    fixture.gateway.deposit(&samwise, &100_0000000);
    fixture.oracle.set_reserve(&100_0000000, &100_0000000);

    fixture.gateway.redeem(&samwise, &100_0000000);
}

#[test]
#[should_panic(expected = "Error(Contract, #104)")]
fn test_redeem_one_ledger_early() {
    let e = Env::default();
    e.mock_all_auths_allowing_non_root_auth();
    e.set_default_info();

    let bombadil = Address::generate(&e);
    let samwise = Address::generate(&e);
    let fixture = cooldown_fixture(&e, &bombadil, &samwise);

    fixture.gateway.deposit(&samwise, &100_0000000);
    fixture.oracle.set_reserve(&100_0000000, &100_0000000);

    e.jump(DELAY - 1);
    fixture.gateway.redeem(&samwise, &100_0000000);
}

#[test]
fn test_redeem_at_exact_delay() {
    let e = Env::default();
    e.mock_all_auths_allowing_non_root_auth();
    e.set_default_info();

    let bombadil = Address::generate(&e);
    let samwise = Address::generate(&e);
    let fixture = cooldown_fixture(&e, &bombadil, &samwise);

    fixture.gateway.deposit(&samwise, &100_0000000);
    fixture.oracle.set_reserve(&100_0000000, &100_0000000);

    e.jump(DELAY);
    let released = fixture.gateway.redeem(&samwise, &100_0000000);
    assert_eq!(released, 100_0000000);
    assert_eq!(fixture.base_token.balance(&samwise), 100_0000000);
}

#[test]
#[should_panic(expected = "Error(Contract, #104)")]
fn test_new_deposit_restarts_cooldown() {
    let e = Env::default();
    e.mock_all_auths_allowing_non_root_auth();
    e.set_default_info();

    let bombadil = Address::generate(&e);
    let samwise = Address::generate(&e);
    let fixture = cooldown_fixture(&e, &bombadil, &samwise);

    fixture.gateway.deposit(&samwise, &50_0000000);
    fixture.oracle.set_reserve(&50_0000000, &50_0000000);

    e.jump(DELAY);
    fixture.gateway.deposit(&samwise, &50_0000000);
    fixture.oracle.set_reserve(&100_0000000, &100_0000000);

    fixture.gateway.redeem(&samwise, &50_0000000);
}

#[test]
fn test_redeem_does_not_reset_cooldown() {
    let e = Env::default();
    e.mock_all_auths_allowing_non_root_auth();
    e.set_default_info();

    let bombadil = Address::generate(&e);
    let samwise = Address::generate(&e);
    let fixture = cooldown_fixture(&e, &bombadil, &samwise);

    fixture.gateway.deposit(&samwise, &100_0000000);
    fixture.oracle.set_reserve(&100_0000000, &100_0000000);
    let deposit_ledger = fixture.gateway.get_last_deposit_ledger(&samwise);

    e.jump(DELAY);
    assert_eq!(fixture.gateway.redeem(&samwise, &40_0000000), 40_0000000);

    // a redemption leaves the deposit record untouched, so another
    // redemption in the same ledger is allowed
    assert_eq!(
        fixture.gateway.get_last_deposit_ledger(&samwise),
        deposit_ledger
    );
    fixture.oracle.set_reserve(&60_0000000, &60_0000000);
    assert_eq!(fixture.gateway.redeem(&samwise, &60_0000000), 60_0000000);
}
