use common::{
    order::{
        interface::ContractOffererInterface,
        types::{OrderTerms, ReceivedItem, SpentItem, RATIFY_ORDER_MAGIC},
    },
    storage::{get_data, get_persistent, remove_persistent, store_data, store_persistent},
    storefront::types::{PendingOrder, StorefrontConfig, StorefrontError as Error},
};
use soroban_sdk::{contractimpl, log, Address, Bytes, BytesN, Env, Symbol, Vec};

use crate::{
    events::StorefrontEvent,
    types::{DataKey, NONCE, READY},
    utils::helpers::{
        bind_escrow_payer, build_order_terms, check_maximum_spent, deposit_into_escrow,
        open_escrow, read_config,
    },
    StorefrontContract, StorefrontContractArgs, StorefrontContractClient,
};

#[contractimpl]
impl ContractOffererInterface for StorefrontContract {
    // Dry run for quoting; works whether or not the store is open.
    fn preview_order(
        env: Env,
        _caller: Address,
        _fulfiller: Address,
        minimum_received: Vec<SpentItem>,
        _maximum_spent: Vec<SpentItem>,
        _context: Bytes,
    ) -> Result<OrderTerms, Error> {
        let config: StorefrontConfig = read_config(&env);
        build_order_terms(&env, &config, &minimum_received)
    }

    fn generate_order(
        env: Env,
        fulfiller: Address,
        minimum_received: Vec<SpentItem>,
        maximum_spent: Vec<SpentItem>,
        _context: Bytes,
    ) -> Result<OrderTerms, Error> {
        let config: StorefrontConfig = read_config(&env);
        config.seaport.require_auth();

        if !get_data::<_, bool>(&env, &READY).unwrap_or(false) {
            return Err(Error::StoreNotReady);
        }

        let terms: OrderTerms = build_order_terms(&env, &config, &minimum_received)?;
        check_maximum_spent(&env, &terms.consideration, &maximum_spent)?;

        let escrow_id: u64 = open_escrow(&env, &config)?;
        bind_escrow_payer(&env, &config, escrow_id, &fulfiller)?;

        let nonce: u64 = get_data(&env, &NONCE).unwrap_or(0);
        let pending: PendingOrder = PendingOrder {
            escrow_id,
            payer: fulfiller.clone(),
            consideration: terms.consideration.clone(),
        };
        store_persistent(&env, &DataKey::PendingOrder(nonce), &pending);
        store_data(&env, &NONCE, &(nonce + 1));

        StorefrontEvent::OrderGenerated(nonce, escrow_id, fulfiller).publish(&env);
        Ok(terms)
    }

    // Called once the protocol has moved the items and the payment.
    fn ratify_order(
        env: Env,
        _offer: Vec<SpentItem>,
        consideration: Vec<ReceivedItem>,
        _context: Bytes,
        _order_hashes: Vec<BytesN<32>>,
        contract_nonce: u64,
    ) -> Result<Symbol, Error> {
        let config: StorefrontConfig = read_config(&env);
        config.seaport.require_auth();

        let pending: PendingOrder = get_persistent(&env, &DataKey::PendingOrder(contract_nonce))
            .ok_or(Error::OrderNotFound)?;
        if pending.consideration != consideration {
            log!(&env, "consideration differs from order {}", contract_nonce);
            return Err(Error::OrderMismatch);
        }
        remove_persistent(&env, &DataKey::PendingOrder(contract_nonce));

        for item in pending.consideration.iter() {
            deposit_into_escrow(&env, &config, pending.escrow_id, &item.token, item.amount)?;
        }

        StorefrontEvent::OrderRatified(contract_nonce, pending.escrow_id).publish(&env);
        Ok(RATIFY_ORDER_MAGIC)
    }
}
