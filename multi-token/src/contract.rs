use common::{
    multi_token::{
        interface::MultiTokenInterface,
        types::{MultiTokenDataKey as DataKey, MultiTokenError as Error, ADMIN},
    },
    storage::{get_data, get_persistent, has_data, store_data, store_persistent},
};
use soroban_sdk::{contract, contractimpl, log, Address, Env, String};

use crate::events::MultiTokenEvent;

const NAME: &str = "Storefront Inventory";

/// Semi-fungible inventory: every id carries its own supply, and balances
/// are tracked per `(owner, id)`.
#[contract]
pub struct MultiTokenContract;

#[contractimpl]
impl MultiTokenInterface for MultiTokenContract {
    fn initialize(env: Env, admin: Address) -> Result<(), Error> {
        admin.require_auth();
        if has_data(&env, &ADMIN) {
            return Err(Error::AlreadyInitialized);
        }
        store_data(&env, &ADMIN, &admin);
        MultiTokenEvent::Initialized(admin).publish(&env);
        Ok(())
    }

    fn name(env: Env) -> String {
        String::from_str(&env, NAME)
    }

    fn mint(env: Env, to: Address, id: u64, amount: i128) -> Result<(), Error> {
        let admin: Address = get_data(&env, &ADMIN).ok_or(Error::NotInitialized)?;
        admin.require_auth();

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let balance: i128 = read_balance(&env, &to, id);
        store_persistent(&env, &DataKey::Balance(to.clone(), id), &(balance + amount));

        let supply: i128 = get_persistent(&env, &DataKey::Supply(id)).unwrap_or(0);
        store_persistent(&env, &DataKey::Supply(id), &(supply + amount));

        MultiTokenEvent::Minted(id, to, amount).publish(&env);
        Ok(())
    }

    fn balance_of(env: Env, owner: Address, id: u64) -> i128 {
        read_balance(&env, &owner, id)
    }

    fn total_supply(env: Env, id: u64) -> i128 {
        get_persistent(&env, &DataKey::Supply(id)).unwrap_or(0)
    }

    fn transfer(env: Env, from: Address, to: Address, id: u64, amount: i128) -> Result<(), Error> {
        from.require_auth();
        move_balance(&env, &from, &to, id, amount)?;

        MultiTokenEvent::Transfer(id, from, to, amount).publish(&env);
        Ok(())
    }

    // Lets an approved operator move items on the owner's behalf.
    fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        id: u64,
        amount: i128,
    ) -> Result<(), Error> {
        spender.require_auth();

        if spender != from && !is_approved(&env, &from, &spender) {
            return Err(Error::NotApproved);
        }
        move_balance(&env, &from, &to, id, amount)?;

        MultiTokenEvent::Transfer(id, from, to, amount).publish(&env);
        Ok(())
    }

    fn set_approval_for_all(env: Env, owner: Address, operator: Address, approved: bool) {
        owner.require_auth();
        store_persistent(
            &env,
            &DataKey::OperatorApproval(owner.clone(), operator.clone()),
            &approved,
        );
        MultiTokenEvent::ApprovalForAll(owner, operator, approved).publish(&env);
    }

    fn is_approved_for_all(env: Env, owner: Address, operator: Address) -> bool {
        is_approved(&env, &owner, &operator)
    }
}

fn read_balance(env: &Env, owner: &Address, id: u64) -> i128 {
    get_persistent(env, &DataKey::Balance(owner.clone(), id)).unwrap_or(0)
}

fn is_approved(env: &Env, owner: &Address, operator: &Address) -> bool {
    get_persistent(
        env,
        &DataKey::OperatorApproval(owner.clone(), operator.clone()),
    )
    .unwrap_or(false)
}

fn move_balance(
    env: &Env,
    from: &Address,
    to: &Address,
    id: u64,
    amount: i128,
) -> Result<(), Error> {
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }

    let from_balance: i128 = read_balance(env, from, id);
    if from_balance < amount {
        log!(env, "id {} holds {}, requested {}", id, from_balance, amount);
        return Err(Error::InsufficientBalance);
    }

    store_persistent(
        env,
        &DataKey::Balance(from.clone(), id),
        &(from_balance - amount),
    );
    let to_balance: i128 = read_balance(env, to, id);
    store_persistent(env, &DataKey::Balance(to.clone(), id), &(to_balance + amount));
    Ok(())
}
