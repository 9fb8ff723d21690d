#![no_std]

mod events;
mod offerer;
mod rescue;
mod types;
mod utils;

use common::{
    storage::{
        get_data, get_persistent, has_data, has_persistent, remove_persistent, store_data,
        store_persistent,
    },
    storefront::types::{Listing, PendingOrder, StorefrontConfig, StorefrontError as Error},
};
use events::StorefrontEvent;
use soroban_sdk::{contract, contractimpl, Address, Env};
use types::{DataKey, INITIALIZED, NONCE, OWNER, READY};
use utils::helpers::{
    approve_seaport, bind_escrow_payer, find_listing, is_initialized, open_escrow, read_config,
    read_owner, require_owner, validate_settle_deadline, write_config,
};

/// Sells multi-token inventory through an external order protocol. Each sale
/// gets its own escrow, paid out to the owner and refereed by the designated
/// arbiter.
#[contract]
pub struct StorefrontContract;

#[contractimpl]
impl StorefrontContract {
    pub fn __constructor(env: Env, owner: Address, config: StorefrontConfig) -> Result<(), Error> {
        if has_data(&env, &OWNER) {
            return Err(Error::AlreadyInitialized);
        }
        validate_settle_deadline(&config)?;

        store_data(&env, &OWNER, &owner);
        store_data(&env, &READY, &false);
        store_data(&env, &NONCE, &0u64);
        write_config(&env, &config);
        Ok(())
    }

    pub fn version() -> u32 {
        1
    }

    pub fn initialize(env: Env, caller: Address) -> Result<(), Error> {
        require_owner(&env, &caller)?;
        if is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }

        let config: StorefrontConfig = read_config(&env);
        approve_seaport(&env, &config);
        store_data(&env, &INITIALIZED, &true);

        StorefrontEvent::Initialized(config.seaport, config.erc1155_token).publish(&env);
        Ok(())
    }

    pub fn toggle_ready(env: Env, caller: Address) -> Result<bool, Error> {
        require_owner(&env, &caller)?;

        let ready: bool = !Self::is_ready(env.clone());
        store_data(&env, &READY, &ready);

        StorefrontEvent::ReadyToggled(ready).publish(&env);
        Ok(ready)
    }

    pub fn list_token(
        env: Env,
        caller: Address,
        token_id: u64,
        price: i128,
        payment_token: Option<Address>,
    ) -> Result<(), Error> {
        require_owner(&env, &caller)?;

        // Id 0 is the empty-listing sentinel.
        if token_id == 0 {
            return Err(Error::InvalidTokenId);
        }
        if price < 0 {
            return Err(Error::InvalidPrice);
        }
        if has_persistent(&env, &DataKey::Listing(token_id)) {
            return Err(Error::ListingAlreadyExists);
        }

        let listing: Listing = Listing {
            token_id,
            price,
            payment_token: payment_token.clone(),
        };
        store_persistent(&env, &DataKey::Listing(token_id), &listing);

        StorefrontEvent::TokenListed(token_id, price, payment_token).publish(&env);
        Ok(())
    }

    pub fn update_listing(
        env: Env,
        caller: Address,
        token_id: u64,
        price: i128,
        payment_token: Option<Address>,
    ) -> Result<(), Error> {
        require_owner(&env, &caller)?;

        if !has_persistent(&env, &DataKey::Listing(token_id)) {
            return Err(Error::ListingNotFound);
        }
        if price < 0 {
            return Err(Error::InvalidPrice);
        }

        let listing: Listing = Listing {
            token_id,
            price,
            payment_token: payment_token.clone(),
        };
        store_persistent(&env, &DataKey::Listing(token_id), &listing);

        StorefrontEvent::ListingUpdated(token_id, price, payment_token).publish(&env);
        Ok(())
    }

    pub fn remove_listing(env: Env, caller: Address, token_id: u64) -> Result<(), Error> {
        require_owner(&env, &caller)?;

        if !has_persistent(&env, &DataKey::Listing(token_id)) {
            return Err(Error::ListingNotFound);
        }
        remove_persistent(&env, &DataKey::Listing(token_id));

        StorefrontEvent::ListingRemoved(token_id).publish(&env);
        Ok(())
    }

    /// Returns a zeroed listing when `token_id` is not for sale.
    pub fn get_listing(env: Env, token_id: u64) -> Listing {
        find_listing(&env, token_id).unwrap_or(Listing {
            token_id: 0,
            price: 0,
            payment_token: None,
        })
    }

    /// Provisions an escrow for an off-protocol sale. The payer is bound
    /// later with `set_escrow_payer`.
    pub fn create_new_escrow_contract(env: Env, caller: Address) -> Result<u64, Error> {
        require_owner(&env, &caller)?;

        let config: StorefrontConfig = read_config(&env);
        let escrow_id: u64 = open_escrow(&env, &config)?;

        StorefrontEvent::EscrowCreated(escrow_id, config.escrow_factory).publish(&env);
        Ok(escrow_id)
    }

    pub fn set_escrow_payer(
        env: Env,
        caller: Address,
        escrow_id: u64,
        payer: Address,
    ) -> Result<(), Error> {
        require_owner(&env, &caller)?;

        let config: StorefrontConfig = read_config(&env);
        bind_escrow_payer(&env, &config, escrow_id, &payer)?;

        StorefrontEvent::EscrowPayerSet(escrow_id, payer).publish(&env);
        Ok(())
    }

    pub fn set_erc1155_token_address(
        env: Env,
        caller: Address,
        erc1155_token: Address,
    ) -> Result<(), Error> {
        require_owner(&env, &caller)?;

        let mut config: StorefrontConfig = read_config(&env);
        let old_token: Address = config.erc1155_token.clone();
        config.erc1155_token = erc1155_token.clone();
        write_config(&env, &config);

        if is_initialized(&env) {
            approve_seaport(&env, &config);
        }

        StorefrontEvent::ERC1155TokenAddressChanged(old_token, erc1155_token).publish(&env);
        Ok(())
    }

    pub fn set_designated_arbiter(env: Env, caller: Address, arbiter: Address) -> Result<(), Error> {
        require_owner(&env, &caller)?;

        let mut config: StorefrontConfig = read_config(&env);
        let old_arbiter: Address = config.designated_arbiter.clone();
        config.designated_arbiter = arbiter.clone();
        write_config(&env, &config);

        StorefrontEvent::DesignatedArbiterChanged(old_arbiter, arbiter).publish(&env);
        Ok(())
    }

    pub fn set_settle_deadline(env: Env, caller: Address, settle_deadline: u64) -> Result<(), Error> {
        require_owner(&env, &caller)?;

        let mut config: StorefrontConfig = read_config(&env);
        let old_deadline: u64 = config.settle_deadline;
        config.settle_deadline = settle_deadline;
        validate_settle_deadline(&config)?;
        write_config(&env, &config);

        StorefrontEvent::SettleDeadlineChanged(old_deadline, settle_deadline).publish(&env);
        Ok(())
    }

    pub fn transfer_ownership(env: Env, caller: Address, new_owner: Address) -> Result<(), Error> {
        let old_owner: Address = require_owner(&env, &caller)?;
        store_data(&env, &OWNER, &new_owner);

        StorefrontEvent::OwnershipTransferred(old_owner, new_owner).publish(&env);
        Ok(())
    }

    pub fn owner(env: Env) -> Address {
        read_owner(&env)
    }

    pub fn config(env: Env) -> StorefrontConfig {
        read_config(&env)
    }

    pub fn seaport(env: Env) -> Address {
        read_config(&env).seaport
    }

    pub fn escrow_factory(env: Env) -> Address {
        read_config(&env).escrow_factory
    }

    pub fn native_token(env: Env) -> Address {
        read_config(&env).native_token
    }

    pub fn erc1155_token(env: Env) -> Address {
        read_config(&env).erc1155_token
    }

    pub fn designated_arbiter(env: Env) -> Address {
        read_config(&env).designated_arbiter
    }

    pub fn min_settle_time(env: Env) -> u64 {
        read_config(&env).min_settle_time
    }

    pub fn settle_deadline(env: Env) -> u64 {
        read_config(&env).settle_deadline
    }

    pub fn is_ready(env: Env) -> bool {
        get_data(&env, &READY).unwrap_or(false)
    }

    pub fn nonce(env: Env) -> u64 {
        get_data(&env, &NONCE).unwrap_or(0)
    }

    pub fn pending_order(env: Env, nonce: u64) -> Option<PendingOrder> {
        get_persistent(&env, &DataKey::PendingOrder(nonce))
    }
}

#[cfg(test)]
mod test;
