#![cfg(test)]
extern crate std;

use super::*;
use common::multi_token::types::MultiTokenError;
use soroban_sdk::testutils::{Address as _, Events};
use soroban_sdk::{vec, Address, Env, IntoVal, String, Symbol, Val, Vec};

const ITEM_ID: u64 = 7;

fn create_multi_token_contract<'a>(env: &Env) -> MultiTokenContractClient<'a> {
    let contract_id: Address = env.register(MultiTokenContract, ());
    let contract_client: MultiTokenContractClient<'a> =
        MultiTokenContractClient::new(env, &contract_id);
    contract_client
}

pub struct MultiTokenTest {
    env: Env,
    token_client: MultiTokenContractClient<'static>,
    admin: Address,
    alice: Address,
    bob: Address,
}

impl MultiTokenTest {
    fn setup() -> Self {
        let env: Env = Env::default();
        env.mock_all_auths();

        let token_client: MultiTokenContractClient<'_> = create_multi_token_contract(&env);
        let admin: Address = Address::generate(&env);
        let alice: Address = Address::generate(&env);
        let bob: Address = Address::generate(&env);

        token_client.initialize(&admin);

        MultiTokenTest {
            env,
            token_client,
            admin,
            alice,
            bob,
        }
    }

    fn assert_last_event(&self, name: &str, data: Vec<Val>) {
        let events = self.env.events().all();
        let last = events.slice(events.len() - 1..);
        let expected: Vec<(Address, Vec<Val>, Val)> = vec![
            &self.env,
            (
                self.token_client.address.clone(),
                (Symbol::new(&self.env, name),).into_val(&self.env),
                data.into_val(&self.env),
            ),
        ];
        assert_eq!(last, expected);
    }
}

#[test]
fn test_initialize_once() {
    let test: MultiTokenTest = MultiTokenTest::setup();

    assert_eq!(
        test.token_client.try_initialize(&test.alice),
        Err(Ok(MultiTokenError::AlreadyInitialized))
    );
    assert_eq!(
        test.token_client.name(),
        String::from_str(&test.env, "Storefront Inventory")
    );
}

#[test]
fn test_mint_requires_initialization() {
    let env: Env = Env::default();
    env.mock_all_auths();
    let token_client: MultiTokenContractClient<'_> = create_multi_token_contract(&env);
    let to: Address = Address::generate(&env);

    assert_eq!(
        token_client.try_mint(&to, &ITEM_ID, &1i128),
        Err(Ok(MultiTokenError::NotInitialized))
    );
}

#[test]
fn test_mint() {
    let test: MultiTokenTest = MultiTokenTest::setup();

    test.token_client.mint(&test.alice, &ITEM_ID, &5i128);

    test.assert_last_event(
        "Minted",
        vec![
            &test.env,
            ITEM_ID.into_val(&test.env),
            test.alice.into_val(&test.env),
            5i128.into_val(&test.env),
        ],
    );
    test.token_client.mint(&test.bob, &ITEM_ID, &3i128);

    assert_eq!(test.token_client.balance_of(&test.alice, &ITEM_ID), 5);
    assert_eq!(test.token_client.balance_of(&test.bob, &ITEM_ID), 3);
    assert_eq!(test.token_client.balance_of(&test.alice, &(ITEM_ID + 1)), 0);
    assert_eq!(test.token_client.total_supply(&ITEM_ID), 8);
    assert_eq!(
        test.token_client.try_mint(&test.alice, &ITEM_ID, &0i128),
        Err(Ok(MultiTokenError::InvalidAmount))
    );
    assert_ne!(test.admin, test.alice);
}

#[test]
fn test_transfer() {
    let test: MultiTokenTest = MultiTokenTest::setup();
    test.token_client.mint(&test.alice, &ITEM_ID, &5i128);

    test.token_client
        .transfer(&test.alice, &test.bob, &ITEM_ID, &2i128);

    test.assert_last_event(
        "Transfer",
        vec![
            &test.env,
            ITEM_ID.into_val(&test.env),
            test.alice.into_val(&test.env),
            test.bob.into_val(&test.env),
            2i128.into_val(&test.env),
        ],
    );
    assert_eq!(test.token_client.balance_of(&test.alice, &ITEM_ID), 3);
    assert_eq!(test.token_client.balance_of(&test.bob, &ITEM_ID), 2);
    assert_eq!(test.token_client.total_supply(&ITEM_ID), 5);
}

#[test]
fn test_transfer_rejects_bad_amounts() {
    let test: MultiTokenTest = MultiTokenTest::setup();
    test.token_client.mint(&test.alice, &ITEM_ID, &1i128);

    assert_eq!(
        test.token_client
            .try_transfer(&test.alice, &test.bob, &ITEM_ID, &2i128),
        Err(Ok(MultiTokenError::InsufficientBalance))
    );
    assert_eq!(
        test.token_client
            .try_transfer(&test.alice, &test.bob, &ITEM_ID, &-1i128),
        Err(Ok(MultiTokenError::InvalidAmount))
    );
}

#[test]
fn test_operator_transfer() {
    let test: MultiTokenTest = MultiTokenTest::setup();
    let operator: Address = Address::generate(&test.env);
    test.token_client.mint(&test.alice, &ITEM_ID, &4i128);

    assert_eq!(
        test.token_client
            .try_transfer_from(&operator, &test.alice, &test.bob, &ITEM_ID, &1i128),
        Err(Ok(MultiTokenError::NotApproved))
    );

    test.token_client
        .set_approval_for_all(&test.alice, &operator, &true);
    test.assert_last_event(
        "ApprovalForAll",
        vec![
            &test.env,
            test.alice.into_val(&test.env),
            operator.into_val(&test.env),
            true.into_val(&test.env),
        ],
    );
    assert!(test.token_client.is_approved_for_all(&test.alice, &operator));

    test.token_client
        .transfer_from(&operator, &test.alice, &test.bob, &ITEM_ID, &4i128);
    assert_eq!(test.token_client.balance_of(&test.bob, &ITEM_ID), 4);

    test.token_client
        .set_approval_for_all(&test.alice, &operator, &false);
    assert!(!test.token_client.is_approved_for_all(&test.alice, &operator));
}

#[test]
fn test_owner_moves_own_items_through_transfer_from() {
    let test: MultiTokenTest = MultiTokenTest::setup();
    test.token_client.mint(&test.alice, &ITEM_ID, &2i128);

    test.token_client
        .transfer_from(&test.alice, &test.alice, &test.bob, &ITEM_ID, &2i128);
    assert_eq!(test.token_client.balance_of(&test.alice, &ITEM_ID), 0);
    assert_eq!(test.token_client.balance_of(&test.bob, &ITEM_ID), 2);
}
