use common::{
    escrow::{
        interface::EscrowFactoryInterface,
        types::{Escrow, EscrowDataKey as DataKey, EscrowError as Error},
    },
    storage::{get_data, has_persistent, store_data},
};
use soroban_sdk::{contractimpl, Address, Env};

use crate::{
    events::EscrowEvent, utils::save_escrow, EscrowContract, EscrowContractArgs,
    EscrowContractClient,
};

#[contractimpl]
impl EscrowFactoryInterface for EscrowContract {
    fn version() -> u32 {
        1
    }

    // Allocation and initialisation happen in the same invocation, so an
    // uninitialised escrow is never observable. Anyone may create one.
    fn create_escrow(
        env: Env,
        payee: Address,
        storefront: Address,
        arbiter: Address,
    ) -> Result<u64, Error> {
        let escrow_count: u64 = get_data(&env, &DataKey::EscrowCount).unwrap_or(0);
        let escrow_id: u64 = escrow_count + 1;

        initialize(&env, escrow_id, &payee, &storefront, &arbiter)?;
        store_data(&env, &DataKey::EscrowCount, &escrow_id);

        EscrowEvent::EscrowCreated(escrow_id, payee, storefront, arbiter).publish(&env);
        Ok(escrow_id)
    }

    fn escrow_count(env: Env) -> u64 {
        get_data(&env, &DataKey::EscrowCount).unwrap_or(0)
    }
}

fn initialize(
    env: &Env,
    escrow_id: u64,
    payee: &Address,
    storefront: &Address,
    arbiter: &Address,
) -> Result<(), Error> {
    if has_persistent(env, &DataKey::Escrow(escrow_id)) {
        return Err(Error::AlreadyInitialized);
    }

    let escrow: Escrow = Escrow {
        payee: payee.clone(),
        payer: None,
        storefront: storefront.clone(),
        arbiter: arbiter.clone(),
        proposed_arbiter: None,
        escape_address: None,
        settle_deadline: 0,
        disputed: false,
    };
    save_escrow(env, escrow_id, &escrow);
    Ok(())
}
