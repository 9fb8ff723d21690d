#![cfg(test)]
extern crate std;

use super::*;
use common::order::types::{ItemType, SpentItem};
use escrow::{EscrowContract, EscrowContractClient};
use multi_token::{MultiTokenContract, MultiTokenContractClient};
use soroban_sdk::testutils::{Address as _, Events, Ledger, StellarAssetContract};
use soroban_sdk::{token, vec, Address, Env, IntoVal, Symbol, Val, Vec};

mod mocks;

use mocks::{MockSeaport, MockSeaportClient};

pub const MIN_SETTLE_TIME: u64 = 1_000;
pub const SETTLE_DEADLINE: u64 = 1_000;
pub const GEAR_ID: u64 = 1; // priced in the native asset
pub const PASS_ID: u64 = 2; // priced in the fungible payment token
pub const GEAR_PRICE: i128 = 100_0_000_000;
pub const PASS_PRICE: i128 = 250_0_000_000;
pub const GEAR_STOCK: i128 = 10;
pub const PASS_STOCK: i128 = 3;

fn create_escrow_contract<'a>(env: &Env) -> EscrowContractClient<'a> {
    let contract_id: Address = env.register(EscrowContract, ());
    EscrowContractClient::new(env, &contract_id)
}

fn create_multi_token_contract<'a>(env: &Env, admin: &Address) -> MultiTokenContractClient<'a> {
    let contract_id: Address = env.register(MultiTokenContract, ());
    let contract_client: MultiTokenContractClient<'a> =
        MultiTokenContractClient::new(env, &contract_id);
    contract_client.initialize(admin);
    contract_client
}

fn create_token_contract<'a>(
    e: &Env,
    admin: &Address,
) -> (token::Client<'a>, token::StellarAssetClient<'a>) {
    let sac: StellarAssetContract = e.register_stellar_asset_contract_v2(admin.clone());
    (
        token::Client::new(e, &sac.address()),
        token::StellarAssetClient::new(e, &sac.address()),
    )
}

fn create_storefront_contract<'a>(
    env: &Env,
    owner: &Address,
    config: &StorefrontConfig,
) -> StorefrontContractClient<'a> {
    let contract_id: Address = env.register(StorefrontContract, (owner.clone(), config.clone()));
    StorefrontContractClient::new(env, &contract_id)
}

pub struct StorefrontTest {
    env: Env,
    storefront_client: StorefrontContractClient<'static>,
    escrow_client: EscrowContractClient<'static>,
    inventory_client: MultiTokenContractClient<'static>,
    native_client: token::TokenClient<'static>,
    native_admin_client: token::StellarAssetClient<'static>,
    payment_client: token::TokenClient<'static>,
    payment_admin_client: token::StellarAssetClient<'static>,
    seaport_client: MockSeaportClient<'static>,
    config: StorefrontConfig,
    owner: Address,
    arbiter: Address,
    buyer: Address,
    outsider: Address,
}

impl StorefrontTest {
    // Open store with both ids listed and stocked, buyer funded in both assets.
    fn setup() -> Self {
        let test: StorefrontTest = Self::setup_no_init();

        test.storefront_client.initialize(&test.owner);
        test.storefront_client.toggle_ready(&test.owner);

        test.inventory_client
            .mint(&test.storefront_client.address, &GEAR_ID, &GEAR_STOCK);
        test.inventory_client
            .mint(&test.storefront_client.address, &PASS_ID, &PASS_STOCK);

        test.storefront_client
            .list_token(&test.owner, &GEAR_ID, &GEAR_PRICE, &None);
        test.storefront_client.list_token(
            &test.owner,
            &PASS_ID,
            &PASS_PRICE,
            &Some(test.payment_client.address.clone()),
        );

        test.native_admin_client
            .mint(&test.buyer, &(GEAR_PRICE * GEAR_STOCK));
        test.payment_admin_client
            .mint(&test.buyer, &(PASS_PRICE * PASS_STOCK));

        test
    }

    // Constructed only: not initialised, closed, nothing listed.
    fn setup_no_init() -> Self {
        let env: Env = Env::default();
        env.mock_all_auths();
        env.ledger().set_timestamp(1_700_000_000);

        let owner: Address = Address::generate(&env);
        let arbiter: Address = Address::generate(&env);
        let buyer: Address = Address::generate(&env);
        let outsider: Address = Address::generate(&env);
        let admin: Address = Address::generate(&env);

        assert_ne!(owner, arbiter);
        assert_ne!(owner, buyer);

        let escrow_client: EscrowContractClient<'_> = create_escrow_contract(&env);
        let inventory_client: MultiTokenContractClient<'_> =
            create_multi_token_contract(&env, &admin);
        let (native_client, native_admin_client) = create_token_contract(&env, &admin);
        let (payment_client, payment_admin_client) = create_token_contract(&env, &admin);

        let seaport_id: Address = env.register(MockSeaport, ());
        let seaport_client: MockSeaportClient<'_> = MockSeaportClient::new(&env, &seaport_id);

        let config: StorefrontConfig = StorefrontConfig {
            seaport: seaport_id,
            escrow_factory: escrow_client.address.clone(),
            native_token: native_client.address.clone(),
            erc1155_token: inventory_client.address.clone(),
            designated_arbiter: arbiter.clone(),
            min_settle_time: MIN_SETTLE_TIME,
            settle_deadline: SETTLE_DEADLINE,
        };
        let storefront_client: StorefrontContractClient<'_> =
            create_storefront_contract(&env, &owner, &config);

        StorefrontTest {
            env,
            storefront_client,
            escrow_client,
            inventory_client,
            native_client,
            native_admin_client,
            payment_client,
            payment_admin_client,
            seaport_client,
            config,
            owner,
            arbiter,
            buyer,
            outsider,
        }
    }

    fn item(&self, token_id: u64, amount: i128) -> SpentItem {
        SpentItem {
            item_type: ItemType::MultiToken,
            token: self.inventory_client.address.clone(),
            identifier: token_id,
            amount,
        }
    }

    fn advance_time(&self, seconds: u64) {
        let now: u64 = self.env.ledger().timestamp();
        self.env.ledger().set_timestamp(now + seconds);
    }

    // Checks the most recent contract event; call it right after the
    // invocation under test.
    fn assert_last_event(&self, name: &str, data: Vec<Val>) {
        let events = self.env.events().all();
        assert!(!events.is_empty(), "no events published");
        let last = events.slice(events.len() - 1..);
        let expected: Vec<(Address, Vec<Val>, Val)> = vec![
            &self.env,
            (
                self.storefront_client.address.clone(),
                (Symbol::new(&self.env, name),).into_val(&self.env),
                data.into_val(&self.env),
            ),
        ];
        assert_eq!(last, expected);
    }
}
