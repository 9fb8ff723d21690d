use common::{
    order::types::{ItemType, OrderTerms, ReceivedItem, SpentItem},
    storage::{get_data, get_persistent, store_data},
    storefront::types::{Listing, StorefrontConfig, StorefrontError as Error},
};
use soroban_sdk::{
    auth::{ContractContext, InvokerContractAuthEntry, SubContractInvocation},
    log, panic_with_error, symbol_short, vec, Address, Env, IntoVal, Map, Vec,
};

use super::contract_clients::{get_escrow_client, get_escrow_factory_client, get_inventory_client};
use crate::types::{DataKey, CONFIG, INITIALIZED, OWNER};

pub fn read_config(env: &Env) -> StorefrontConfig {
    get_data(env, &CONFIG).unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized))
}

pub fn write_config(env: &Env, config: &StorefrontConfig) {
    store_data(env, &CONFIG, config);
}

pub fn read_owner(env: &Env) -> Address {
    get_data(env, &OWNER).unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized))
}

pub fn is_initialized(env: &Env) -> bool {
    get_data(env, &INITIALIZED).unwrap_or(false)
}

/// Authenticates `caller` and checks it is the current owner.
pub fn require_owner(env: &Env, caller: &Address) -> Result<Address, Error> {
    caller.require_auth();
    let owner: Address = read_owner(env);
    if *caller != owner {
        log!(env, "unauthorized account {}", caller);
        return Err(Error::OwnableUnauthorizedAccount);
    }
    Ok(owner)
}

pub fn validate_settle_deadline(config: &StorefrontConfig) -> Result<(), Error> {
    if config.settle_deadline < config.min_settle_time {
        return Err(Error::InvalidSettleDeadline);
    }
    Ok(())
}

pub fn find_listing(env: &Env, token_id: u64) -> Option<Listing> {
    get_persistent(env, &DataKey::Listing(token_id))
}

// Lets the order protocol move offered items out of the storefront.
pub fn approve_seaport(env: &Env, config: &StorefrontConfig) {
    get_inventory_client(env, config).set_approval_for_all(
        &env.current_contract_address(),
        &config.seaport,
        &true,
    );
}

/// Validates the requested items against listings and inventory and prices
/// them. The consideration holds one entry per payment token, paid to the
/// storefront.
pub fn build_order_terms(
    env: &Env,
    config: &StorefrontConfig,
    minimum_received: &Vec<SpentItem>,
) -> Result<OrderTerms, Error> {
    if minimum_received.is_empty() {
        return Err(Error::EmptyOrder);
    }

    let storefront: Address = env.current_contract_address();
    let inventory = get_inventory_client(env, config);

    let mut requested: Map<u64, i128> = Map::new(env);
    let mut totals: Map<Address, i128> = Map::new(env);
    let mut offer: Vec<SpentItem> = Vec::new(env);

    for item in minimum_received.iter() {
        if item.item_type != ItemType::MultiToken {
            return Err(Error::UnsupportedItemType);
        }
        if item.token != config.erc1155_token {
            return Err(Error::InvalidToken);
        }
        if item.amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        // Repeated ids draw on the same stock.
        let wanted: i128 = requested
            .get(item.identifier)
            .unwrap_or(0)
            .checked_add(item.amount)
            .ok_or(Error::InvalidAmount)?;
        let available: i128 = inventory.balance_of(&storefront, &item.identifier);
        if available < wanted {
            log!(env, "no tokens available for id {}", item.identifier);
            return Err(Error::NoTokensAvailable);
        }
        requested.set(item.identifier, wanted);

        let listing: Listing = find_listing(env, item.identifier).ok_or(Error::TokenNotListed)?;

        let payment_token: Address = listing
            .payment_token
            .unwrap_or_else(|| config.native_token.clone());
        let cost: i128 = listing
            .price
            .checked_mul(item.amount)
            .ok_or(Error::InvalidPrice)?;
        let total: i128 = totals
            .get(payment_token.clone())
            .unwrap_or(0)
            .checked_add(cost)
            .ok_or(Error::InvalidPrice)?;
        totals.set(payment_token, total);

        offer.push_back(item);
    }

    let mut consideration: Vec<ReceivedItem> = Vec::new(env);
    for (token, amount) in totals.iter() {
        if amount == 0 {
            continue;
        }
        let item_type: ItemType = if token == config.native_token {
            ItemType::Native
        } else {
            ItemType::Fungible
        };
        consideration.push_back(ReceivedItem {
            item_type,
            token,
            identifier: 0,
            amount,
            recipient: storefront.clone(),
        });
    }

    Ok(OrderTerms {
        offer,
        consideration,
    })
}

/// Every consideration item must fit under a `maximum_spent` entry of the
/// same kind. An empty `maximum_spent` accepts any terms.
pub fn check_maximum_spent(
    env: &Env,
    consideration: &Vec<ReceivedItem>,
    maximum_spent: &Vec<SpentItem>,
) -> Result<(), Error> {
    if maximum_spent.is_empty() {
        return Ok(());
    }

    for required in consideration.iter() {
        let covered: bool = maximum_spent.iter().any(|limit| {
            limit.item_type == required.item_type
                && limit.token == required.token
                && limit.amount >= required.amount
        });
        if !covered {
            log!(env, "consideration of {} not covered", required.amount);
            return Err(Error::OrderMismatch);
        }
    }
    Ok(())
}

/// Allocates a fresh escrow paying the owner and refereed by the designated
/// arbiter.
pub fn open_escrow(env: &Env, config: &StorefrontConfig) -> Result<u64, Error> {
    match get_escrow_factory_client(env, config).try_create_escrow(
        &read_owner(env),
        &env.current_contract_address(),
        &config.designated_arbiter,
    ) {
        Ok(Ok(escrow_id)) => Ok(escrow_id),
        _ => {
            log!(env, "escrow factory {} refused create", config.escrow_factory);
            Err(Error::EscrowCreationFailed)
        }
    }
}

pub fn bind_escrow_payer(
    env: &Env,
    config: &StorefrontConfig,
    escrow_id: u64,
    payer: &Address,
) -> Result<(), Error> {
    match get_escrow_client(env, config).try_set_payer(
        &escrow_id,
        &env.current_contract_address(),
        payer,
        &config.settle_deadline,
    ) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "escrow {} refused payer {}", escrow_id, payer);
            Err(Error::EscrowPayerRejected)
        }
    }
}

/// Moves collected payment into an escrow. The escrow pulls the tokens from
/// the storefront, so the nested transfer is authorised up front.
pub fn deposit_into_escrow(
    env: &Env,
    config: &StorefrontConfig,
    escrow_id: u64,
    token: &Address,
    amount: i128,
) -> Result<(), Error> {
    let storefront: Address = env.current_contract_address();

    env.authorize_as_current_contract(vec![
        env,
        InvokerContractAuthEntry::Contract(SubContractInvocation {
            context: ContractContext {
                contract: token.clone(),
                fn_name: symbol_short!("transfer"),
                args: (storefront.clone(), config.escrow_factory.clone(), amount).into_val(env),
            },
            sub_invocations: vec![env],
        }),
    ]);

    match get_escrow_client(env, config).try_deposit(&escrow_id, &storefront, token, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "escrow {} refused deposit of {}", escrow_id, amount);
            Err(Error::EscrowDepositFailed)
        }
    }
}
