use common::{
    escrow::interface::{EscrowContractClient, EscrowFactoryClient},
    multi_token::interface::MultiTokenClient,
    storefront::types::StorefrontConfig,
};
use soroban_sdk::Env;

// Escrow records and the factory that allocates them live in one contract.
pub fn get_escrow_factory_client<'a>(
    env: &Env,
    config: &StorefrontConfig,
) -> EscrowFactoryClient<'a> {
    EscrowFactoryClient::new(env, &config.escrow_factory)
}

pub fn get_escrow_client<'a>(env: &Env, config: &StorefrontConfig) -> EscrowContractClient<'a> {
    EscrowContractClient::new(env, &config.escrow_factory)
}

pub fn get_inventory_client<'a>(env: &Env, config: &StorefrontConfig) -> MultiTokenClient<'a> {
    MultiTokenClient::new(env, &config.erc1155_token)
}
