use common::{
    multi_token::interface::{MultiTokenClient, NonFungibleTokenClient},
    storefront::types::{StorefrontConfig, StorefrontError as Error},
};
use soroban_sdk::{contractimpl, log, token, Address, Env};

use crate::{
    events::StorefrontEvent,
    utils::helpers::{read_config, require_owner},
    StorefrontContract, StorefrontContractArgs, StorefrontContractClient,
};

/// Owner-only recovery of assets stuck on the storefront. Everything goes to
/// the current owner.
#[contractimpl]
impl StorefrontContract {
    pub fn rescue_native(env: Env, caller: Address, amount: i128) -> Result<(), Error> {
        let owner: Address = require_owner(&env, &caller)?;
        let config: StorefrontConfig = read_config(&env);

        rescue_fungible(&env, &config.native_token, &owner, amount)
    }

    pub fn rescue_erc20(
        env: Env,
        caller: Address,
        token: Address,
        amount: i128,
    ) -> Result<(), Error> {
        let owner: Address = require_owner(&env, &caller)?;

        rescue_fungible(&env, &token, &owner, amount)
    }

    pub fn rescue_erc721(
        env: Env,
        caller: Address,
        token: Address,
        token_id: u64,
    ) -> Result<(), Error> {
        let owner: Address = require_owner(&env, &caller)?;
        let storefront: Address = env.current_contract_address();

        let collection: NonFungibleTokenClient<'_> = NonFungibleTokenClient::new(&env, &token);
        if collection.owner_of(&token_id) != storefront {
            log!(&env, "token {} is not held by the storefront", token_id);
            return Err(Error::InsufficientBalance);
        }
        collection.transfer(&storefront, &owner, &token_id);

        StorefrontEvent::Rescued(token, owner, 1).publish(&env);
        Ok(())
    }

    pub fn rescue_erc1155(
        env: Env,
        caller: Address,
        token: Address,
        token_id: u64,
        amount: i128,
    ) -> Result<(), Error> {
        let owner: Address = require_owner(&env, &caller)?;
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let storefront: Address = env.current_contract_address();
        let inventory: MultiTokenClient<'_> = MultiTokenClient::new(&env, &token);
        let available: i128 = inventory.balance_of(&storefront, &token_id);
        if available < amount {
            log!(&env, "requested {} of id {}, available {}", amount, token_id, available);
            return Err(Error::InsufficientBalance);
        }
        inventory.transfer(&storefront, &owner, &token_id, &amount);

        StorefrontEvent::Rescued(token, owner, amount).publish(&env);
        Ok(())
    }
}

fn rescue_fungible(env: &Env, token: &Address, to: &Address, amount: i128) -> Result<(), Error> {
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }

    let token_client: token::TokenClient<'_> = token::Client::new(env, token);
    let available: i128 = token_client.balance(&env.current_contract_address());
    if available < amount {
        log!(env, "requested {}, available {}", amount, available);
        return Err(Error::InsufficientBalance);
    }
    token_client.transfer(&env.current_contract_address(), to, &amount);

    StorefrontEvent::Rescued(token.clone(), to.clone(), amount).publish(env);
    Ok(())
}
