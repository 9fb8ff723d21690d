use soroban_sdk::{contractclient, Address, Env, String};
use super::types::MultiTokenError as Error;

/// ERC-1155 style balances keyed by `(owner, id)` with operator approvals.
#[contractclient(name = "MultiTokenClient")]
pub trait MultiTokenInterface {
    fn initialize(env: Env, admin: Address) -> Result<(), Error>;
    fn name(env: Env) -> String;
    fn mint(env: Env, to: Address, id: u64, amount: i128) -> Result<(), Error>;
    fn balance_of(env: Env, owner: Address, id: u64) -> i128;
    fn total_supply(env: Env, id: u64) -> i128;
    fn transfer(env: Env, from: Address, to: Address, id: u64, amount: i128) -> Result<(), Error>;
    fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        id: u64,
        amount: i128,
    ) -> Result<(), Error>;
    fn set_approval_for_all(env: Env, owner: Address, operator: Address, approved: bool);
    fn is_approved_for_all(env: Env, owner: Address, operator: Address) -> bool;
}

/// The slice of an ERC-721 style collection the storefront needs to pull a
/// stray token back out.
#[contractclient(name = "NonFungibleTokenClient")]
pub trait NonFungibleTokenInterface {
    fn owner_of(env: Env, token_id: u64) -> Address;
    fn transfer(env: Env, from: Address, to: Address, token_id: u64);
}
