#![cfg(test)]
extern crate std;

use super::*;
use soroban_sdk::testutils::{Address as _, Events, Ledger, StellarAssetContract};
use soroban_sdk::{token, vec, Address, Env, IntoVal, Symbol, Val, Vec};

pub const SETTLE_TIME: u64 = 1_000;
pub const ONE_UNIT: i128 = 1_0_000_000;

fn create_escrow_contract<'a>(env: &Env) -> EscrowContractClient<'a> {
    let contract_id: Address = env.register(EscrowContract, ());
    let contract_client: EscrowContractClient<'a> = EscrowContractClient::new(env, &contract_id);
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

pub struct EscrowTest {
    env: Env,
    escrow_client: EscrowContractClient<'static>,
    token_client: token::TokenClient<'static>,
    token_admin_client: token::StellarAssetClient<'static>,
    escrow_id: u64,
    payee: Address,
    payer: Address,
    arbiter: Address,
    storefront: Address,
    outsider: Address,
}

impl EscrowTest {
    // Escrow created by the factory, no payer bound yet.
    fn setup() -> Self {
        let env: Env = Env::default();
        env.mock_all_auths();
        env.ledger().set_timestamp(1_700_000_000);

        let escrow_client: EscrowContractClient<'_> = create_escrow_contract(&env);

        let payee: Address = Address::generate(&env);
        let payer: Address = Address::generate(&env);
        let arbiter: Address = Address::generate(&env);
        let storefront: Address = Address::generate(&env);
        let outsider: Address = Address::generate(&env);
        let admin: Address = Address::generate(&env);

        let (token_client, token_admin_client) = create_token_contract(&env, &admin);

        let escrow_id: u64 = escrow_client.create_escrow(&payee, &storefront, &arbiter);

        EscrowTest {
            env,
            escrow_client,
            token_client,
            token_admin_client,
            escrow_id,
            payee,
            payer,
            arbiter,
            storefront,
            outsider,
        }
    }

    // Payer bound with a SETTLE_TIME window and one unit deposited.
    fn setup_funded() -> Self {
        let test: EscrowTest = Self::setup();
        test.escrow_client
            .set_payer(&test.escrow_id, &test.storefront, &test.payer, &SETTLE_TIME);
        test.fund(&test.payer, ONE_UNIT);
        test
    }

    fn fund(&self, from: &Address, amount: i128) {
        self.token_admin_client.mint(from, &amount);
        self.escrow_client
            .deposit(&self.escrow_id, from, &self.token_client.address, &amount);
    }

    fn token(&self) -> Address {
        self.token_client.address.clone()
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
                self.escrow_client.address.clone(),
                (Symbol::new(&self.env, name),).into_val(&self.env),
                data.into_val(&self.env),
            ),
        ];
        assert_eq!(last, expected);
    }
}
