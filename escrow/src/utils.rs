use common::{
    escrow::types::{Escrow, EscrowDataKey as DataKey, EscrowError as Error},
    storage::{get_persistent, store_persistent, update_persistent},
};
use soroban_sdk::{token, Address, Env};

pub fn load_escrow(env: &Env, escrow_id: u64) -> Result<Escrow, Error> {
    get_persistent(env, &DataKey::Escrow(escrow_id)).ok_or(Error::EscrowNotFound)
}

pub fn save_escrow(env: &Env, escrow_id: u64, escrow: &Escrow) {
    store_persistent(env, &DataKey::Escrow(escrow_id), escrow);
}

pub fn get_balance(env: &Env, escrow_id: u64, token: &Address) -> i128 {
    get_persistent(env, &DataKey::Balance(escrow_id, token.clone())).unwrap_or(0)
}

pub fn get_custody(env: &Env, token: &Address) -> i128 {
    get_persistent(env, &DataKey::Custody(token.clone())).unwrap_or(0)
}

fn adjust_custody(env: &Env, token: &Address, delta: i128) {
    update_persistent(env, &DataKey::Custody(token.clone()), 0i128, |custody| {
        custody + delta
    });
}

// Tokens held by the contract that no handle accounts for, e.g. plain
// transfers made without `deposit`.
pub fn get_unattributed(env: &Env, token: &Address) -> i128 {
    let token_client: token::TokenClient<'_> = token::Client::new(env, token);
    let held: i128 = token_client.balance(&env.current_contract_address());
    (held - get_custody(env, token)).max(0)
}

pub fn credit(env: &Env, escrow_id: u64, token: &Address, amount: i128) {
    update_persistent(env, &DataKey::Balance(escrow_id, token.clone()), 0i128, |balance| {
        balance + amount
    });
    adjust_custody(env, token, amount);
}

// Debits the ledger before the transfer leaves the contract.
pub fn pay_out(
    env: &Env,
    escrow_id: u64,
    token: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), Error> {
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }

    let balance: i128 = get_balance(env, escrow_id, token);
    if amount > balance {
        return Err(Error::InsufficientBalance);
    }
    store_persistent(
        env,
        &DataKey::Balance(escrow_id, token.clone()),
        &(balance - amount),
    );
    adjust_custody(env, token, -amount);

    let token_client: token::TokenClient<'_> = token::Client::new(env, token);
    token_client.transfer(&env.current_contract_address(), to, &amount);
    Ok(())
}

pub fn require_payer(escrow: &Escrow) -> Result<Address, Error> {
    escrow.payer.clone().ok_or(Error::PayerNotSet)
}

pub fn is_payer(escrow: &Escrow, caller: &Address) -> bool {
    escrow.payer.as_ref() == Some(caller)
}
