use soroban_sdk::{contractclient, Address, Env};
use super::types::{Escrow, EscrowError as Error};

#[contractclient(name = "EscrowFactoryClient")]
pub trait EscrowFactoryInterface {
    fn version() -> u32;
    fn create_escrow(
        env: Env,
        payee: Address,
        storefront: Address,
        arbiter: Address,
    ) -> Result<u64, Error>;
    fn escrow_count(env: Env) -> u64;
}

#[contractclient(name = "EscrowContractClient")]
pub trait EscrowInterface {
    fn get_escrow(env: Env, escrow_id: u64) -> Result<Escrow, Error>;
    fn balance(env: Env, escrow_id: u64, token: Address) -> i128;
    fn unattributed(env: Env, token: Address) -> i128;
    fn set_payer(
        env: Env,
        escrow_id: u64,
        caller: Address,
        payer: Address,
        settle_deadline_offset: u64,
    ) -> Result<(), Error>;
    fn deposit(
        env: Env,
        escrow_id: u64,
        from: Address,
        token: Address,
        amount: i128,
    ) -> Result<(), Error>;
    fn claim_unattributed(
        env: Env,
        escrow_id: u64,
        caller: Address,
        token: Address,
        amount: i128,
    ) -> Result<(), Error>;
    fn settle(
        env: Env,
        escrow_id: u64,
        caller: Address,
        token: Address,
        amount: i128,
    ) -> Result<(), Error>;
    fn refund(
        env: Env,
        escrow_id: u64,
        caller: Address,
        token: Address,
        amount: i128,
    ) -> Result<(), Error>;
    fn dispute(env: Env, escrow_id: u64, caller: Address) -> Result<(), Error>;
    fn remove_dispute(env: Env, escrow_id: u64, caller: Address) -> Result<(), Error>;
    fn resolve_dispute(
        env: Env,
        escrow_id: u64,
        caller: Address,
        favor_payee: bool,
        token: Address,
        amount: i128,
    ) -> Result<(), Error>;
    fn change_arbiter(
        env: Env,
        escrow_id: u64,
        caller: Address,
        new_arbiter: Address,
    ) -> Result<(), Error>;
    fn approve_arbiter(
        env: Env,
        escrow_id: u64,
        caller: Address,
        candidate: Address,
    ) -> Result<(), Error>;
    fn set_escape_address(
        env: Env,
        escrow_id: u64,
        caller: Address,
        escape_address: Option<Address>,
    ) -> Result<(), Error>;
    fn escape(
        env: Env,
        escrow_id: u64,
        caller: Address,
        token: Address,
        amount: i128,
        expected: Address,
    ) -> Result<(), Error>;
}
