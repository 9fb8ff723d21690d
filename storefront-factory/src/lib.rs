#![no_std]

mod events;

use common::{
    storage::{get_data, get_persistent, has_data, store_data, store_persistent},
    storefront::types::{StorefrontConfig, StorefrontFactoryError as Error},
};
use events::FactoryEvent;
use soroban_sdk::{contract, contractimpl, contracttype, Address, BytesN, Env};

#[contracttype]
#[derive(Clone)]
enum DataKey {
    Admin,
    StorefrontWasmHash, // Uploaded storefront code used for new deployments
    StorefrontCount,
    Storefront(u64), // Deployed storefront by creation index
}

/// Deploys complete storefront instances from the uploaded storefront wasm.
#[contract]
pub struct StorefrontFactory;

#[contractimpl]
impl StorefrontFactory {
    pub fn __constructor(
        env: Env,
        admin: Address,
        storefront_wasm_hash: BytesN<32>,
    ) -> Result<(), Error> {
        if has_data(&env, &DataKey::Admin) {
            return Err(Error::AlreadyInitialized);
        }
        store_data(&env, &DataKey::Admin, &admin);
        store_data(&env, &DataKey::StorefrontWasmHash, &storefront_wasm_hash);
        store_data(&env, &DataKey::StorefrontCount, &0u64);
        Ok(())
    }

    pub fn create_storefront(
        env: Env,
        owner: Address,
        salt: BytesN<32>,
        config: StorefrontConfig,
    ) -> Result<Address, Error> {
        owner.require_auth();

        // Checked here as well so a bad config fails before anything is deployed.
        if config.settle_deadline < config.min_settle_time {
            return Err(Error::InvalidSettleDeadline);
        }

        let wasm_hash: BytesN<32> = Self::storefront_wasm_hash(env.clone())?;
        let storefront: Address = env
            .deployer()
            .with_current_contract(salt)
            .deploy_v2(wasm_hash, (owner.clone(), config.clone()));

        let index: u64 = Self::storefront_count(env.clone());
        store_persistent(&env, &DataKey::Storefront(index), &storefront);
        store_data(&env, &DataKey::StorefrontCount, &(index + 1));

        FactoryEvent::StorefrontCreated(
            storefront.clone(),
            owner,
            config.seaport,
            config.escrow_factory,
            config.min_settle_time,
        )
        .publish(&env);

        Ok(storefront)
    }

    // Existing storefronts keep the code they were deployed with.
    pub fn set_storefront_wasm_hash(
        env: Env,
        caller: Address,
        storefront_wasm_hash: BytesN<32>,
    ) -> Result<(), Error> {
        caller.require_auth();
        let admin: Address = get_data(&env, &DataKey::Admin).ok_or(Error::NotInitialized)?;
        if caller != admin {
            return Err(Error::Unauthorized);
        }

        store_data(&env, &DataKey::StorefrontWasmHash, &storefront_wasm_hash);

        FactoryEvent::StorefrontWasmHashUpdated(storefront_wasm_hash).publish(&env);
        Ok(())
    }

    pub fn storefront_count(env: Env) -> u64 {
        get_data(&env, &DataKey::StorefrontCount).unwrap_or(0)
    }

    pub fn get_storefront(env: Env, index: u64) -> Result<Address, Error> {
        get_persistent(&env, &DataKey::Storefront(index)).ok_or(Error::StorefrontNotFound)
    }

    pub fn storefront_wasm_hash(env: Env) -> Result<BytesN<32>, Error> {
        get_data(&env, &DataKey::StorefrontWasmHash).ok_or(Error::NotInitialized)
    }

    pub fn admin(env: Env) -> Result<Address, Error> {
        get_data(&env, &DataKey::Admin).ok_or(Error::NotInitialized)
    }
}
