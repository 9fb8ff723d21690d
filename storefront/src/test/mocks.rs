use common::{
    multi_token::interface::MultiTokenClient,
    order::{
        interface::ContractOffererClient,
        types::{OrderTerms, ReceivedItem, SpentItem},
    },
};
use soroban_sdk::{
    contract, contractimpl, contracttype, token, Address, Bytes, Env, Symbol, Vec,
};

use crate::StorefrontContractClient;

/// Stands in for the order protocol: runs the generate, transfer and ratify
/// phases against a contract offerer.
#[contract]
pub struct MockSeaport;

#[contractimpl]
impl MockSeaport {
    pub fn fulfill(
        env: Env,
        offerer: Address,
        fulfiller: Address,
        minimum_received: Vec<SpentItem>,
        maximum_spent: Vec<SpentItem>,
    ) -> OrderTerms {
        fulfiller.require_auth();
        let seaport: Address = env.current_contract_address();
        let offerer_client: ContractOffererClient<'_> = ContractOffererClient::new(&env, &offerer);

        let nonce: u64 = StorefrontContractClient::new(&env, &offerer).nonce();
        let terms: OrderTerms = offerer_client.generate_order(
            &fulfiller,
            &minimum_received,
            &maximum_spent,
            &Bytes::new(&env),
        );

        for item in terms.offer.iter() {
            MultiTokenClient::new(&env, &item.token).transfer_from(
                &seaport,
                &offerer,
                &fulfiller,
                &item.identifier,
                &item.amount,
            );
        }
        for item in terms.consideration.iter() {
            token::Client::new(&env, &item.token).transfer(&fulfiller, &item.recipient, &item.amount);
        }

        offerer_client.ratify_order(
            &terms.offer,
            &terms.consideration,
            &Bytes::new(&env),
            &Vec::new(&env),
            &nonce,
        );
        terms
    }

    pub fn ratify(
        env: Env,
        offerer: Address,
        consideration: Vec<ReceivedItem>,
        nonce: u64,
    ) -> Symbol {
        ContractOffererClient::new(&env, &offerer).ratify_order(
            &Vec::new(&env),
            &consideration,
            &Bytes::new(&env),
            &Vec::new(&env),
            &nonce,
        )
    }
}

#[contracttype]
#[derive(Clone)]
enum CollectibleKey {
    Owner(u64),
}

/// Bare single-owner collection used to park a stray token on the storefront.
#[contract]
pub struct MockCollectible;

#[contractimpl]
impl MockCollectible {
    pub fn mint(env: Env, to: Address, token_id: u64) {
        env.storage()
            .persistent()
            .set(&CollectibleKey::Owner(token_id), &to);
    }

    pub fn owner_of(env: Env, token_id: u64) -> Address {
        env.storage()
            .persistent()
            .get(&CollectibleKey::Owner(token_id))
            .unwrap()
    }

    pub fn transfer(env: Env, from: Address, to: Address, token_id: u64) {
        from.require_auth();
        let owner: Address = Self::owner_of(env.clone(), token_id);
        assert_eq!(owner, from, "not the token owner");
        env.storage()
            .persistent()
            .set(&CollectibleKey::Owner(token_id), &to);
    }
}
