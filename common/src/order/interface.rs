use soroban_sdk::{contractclient, Address, Bytes, BytesN, Env, Symbol, Vec};

use super::types::{OrderTerms, ReceivedItem, SpentItem};
use crate::storefront::types::StorefrontError as Error;

/// Callbacks an order protocol invokes on a contract offerer: a dry run, the
/// committing generation, and a post-transfer ratification.
#[contractclient(name = "ContractOffererClient")]
pub trait ContractOffererInterface {
    fn preview_order(
        env: Env,
        caller: Address,
        fulfiller: Address,
        minimum_received: Vec<SpentItem>,
        maximum_spent: Vec<SpentItem>,
        context: Bytes,
    ) -> Result<OrderTerms, Error>;
    fn generate_order(
        env: Env,
        fulfiller: Address,
        minimum_received: Vec<SpentItem>,
        maximum_spent: Vec<SpentItem>,
        context: Bytes,
    ) -> Result<OrderTerms, Error>;
    fn ratify_order(
        env: Env,
        offer: Vec<SpentItem>,
        consideration: Vec<ReceivedItem>,
        context: Bytes,
        order_hashes: Vec<BytesN<32>>,
        contract_nonce: u64,
    ) -> Result<Symbol, Error>;
}
