use common::escrow::{
    interface::EscrowInterface,
    types::{Escrow, EscrowError as Error},
};
use soroban_sdk::{contractimpl, log, token, Address, Env};

use crate::{
    events::EscrowEvent,
    utils::{
        credit, get_balance, get_unattributed, is_payer, load_escrow, pay_out, require_payer,
        save_escrow,
    },
    EscrowContract, EscrowContractArgs, EscrowContractClient,
};

#[contractimpl]
impl EscrowInterface for EscrowContract {
    fn get_escrow(env: Env, escrow_id: u64) -> Result<Escrow, Error> {
        load_escrow(&env, escrow_id)
    }

    fn balance(env: Env, escrow_id: u64, token: Address) -> i128 {
        get_balance(&env, escrow_id, &token)
    }

    fn unattributed(env: Env, token: Address) -> i128 {
        get_unattributed(&env, &token)
    }

    fn set_payer(
        env: Env,
        escrow_id: u64,
        caller: Address,
        payer: Address,
        settle_deadline_offset: u64,
    ) -> Result<(), Error> {
        caller.require_auth();
        let mut escrow: Escrow = load_escrow(&env, escrow_id)?;

        if caller != escrow.storefront {
            return Err(Error::NotAuthorized);
        }
        if escrow.payer.is_some() {
            return Err(Error::PayerAlreadySet);
        }

        let settle_deadline: u64 = env
            .ledger()
            .timestamp()
            .saturating_add(settle_deadline_offset);
        escrow.payer = Some(payer.clone());
        escrow.settle_deadline = settle_deadline;
        save_escrow(&env, escrow_id, &escrow);

        EscrowEvent::PayerSet(escrow_id, payer, settle_deadline).publish(&env);
        Ok(())
    }

    // Anyone may fund an escrow; the amount is credited to the handle.
    fn deposit(
        env: Env,
        escrow_id: u64,
        from: Address,
        token: Address,
        amount: i128,
    ) -> Result<(), Error> {
        from.require_auth();
        load_escrow(&env, escrow_id)?;

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        credit(&env, escrow_id, &token, amount);
        let token_client: token::TokenClient<'_> = token::Client::new(&env, &token);
        token_client.transfer(&from, &env.current_contract_address(), &amount);

        EscrowEvent::Deposited(escrow_id, from, token, amount).publish(&env);
        Ok(())
    }

    // Plain token transfers to this contract carry no handle. The arbiter
    // assigns them to an escrow, after which settle, refund and escape can
    // pay them out.
    fn claim_unattributed(
        env: Env,
        escrow_id: u64,
        caller: Address,
        token: Address,
        amount: i128,
    ) -> Result<(), Error> {
        caller.require_auth();
        let escrow: Escrow = load_escrow(&env, escrow_id)?;

        if caller != escrow.arbiter {
            return Err(Error::NotAuthorized);
        }
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        if amount > get_unattributed(&env, &token) {
            return Err(Error::InsufficientBalance);
        }

        credit(&env, escrow_id, &token, amount);

        EscrowEvent::UnattributedClaimed(escrow_id, caller, token, amount).publish(&env);
        Ok(())
    }

    // The payer may release at any time. The payee has to wait for the
    // settle deadline.
    fn settle(
        env: Env,
        escrow_id: u64,
        caller: Address,
        token: Address,
        amount: i128,
    ) -> Result<(), Error> {
        caller.require_auth();
        let escrow: Escrow = load_escrow(&env, escrow_id)?;

        if escrow.disputed {
            return Err(Error::PaymentDisputed);
        }

        if !is_payer(&escrow, &caller) {
            if caller != escrow.payee {
                return Err(Error::NotAuthorized);
            }
            require_payer(&escrow)?;

            let now: u64 = env.ledger().timestamp();
            if now < escrow.settle_deadline {
                log!(
                    &env,
                    "settle deadline {} not reached at {}",
                    escrow.settle_deadline,
                    now
                );
                return Err(Error::CannotSettleYet);
            }
        }

        pay_out(&env, escrow_id, &token, &escrow.payee, amount)?;

        EscrowEvent::Settled(escrow_id, escrow.payee, token, amount).publish(&env);
        Ok(())
    }

    // Voluntary give-back from the payee.
    fn refund(
        env: Env,
        escrow_id: u64,
        caller: Address,
        token: Address,
        amount: i128,
    ) -> Result<(), Error> {
        caller.require_auth();
        let escrow: Escrow = load_escrow(&env, escrow_id)?;

        if escrow.disputed {
            return Err(Error::PaymentDisputed);
        }
        if caller != escrow.payee {
            return Err(Error::NotAuthorized);
        }
        let payer: Address = require_payer(&escrow)?;

        pay_out(&env, escrow_id, &token, &payer, amount)?;

        EscrowEvent::Refunded(escrow_id, payer, token, amount).publish(&env);
        Ok(())
    }

    fn dispute(env: Env, escrow_id: u64, caller: Address) -> Result<(), Error> {
        caller.require_auth();
        let mut escrow: Escrow = load_escrow(&env, escrow_id)?;

        if !is_payer(&escrow, &caller) {
            return Err(Error::NotPayer);
        }

        escrow.disputed = true;
        save_escrow(&env, escrow_id, &escrow);

        EscrowEvent::Disputed(escrow_id, caller).publish(&env);
        Ok(())
    }

    fn remove_dispute(env: Env, escrow_id: u64, caller: Address) -> Result<(), Error> {
        caller.require_auth();
        let mut escrow: Escrow = load_escrow(&env, escrow_id)?;

        if !is_payer(&escrow, &caller) {
            return Err(Error::NotPayer);
        }

        escrow.disputed = false;
        save_escrow(&env, escrow_id, &escrow);

        EscrowEvent::DisputeRemoved(escrow_id, caller).publish(&env);
        Ok(())
    }

    // Pays out directly rather than going through settle/refund, so it works
    // whether or not a dispute is open. Resolution clears the dispute.
    fn resolve_dispute(
        env: Env,
        escrow_id: u64,
        caller: Address,
        favor_payee: bool,
        token: Address,
        amount: i128,
    ) -> Result<(), Error> {
        caller.require_auth();
        let mut escrow: Escrow = load_escrow(&env, escrow_id)?;

        if caller != escrow.arbiter {
            return Err(Error::NotAuthorized);
        }

        let recipient: Address = if favor_payee {
            escrow.payee.clone()
        } else {
            require_payer(&escrow)?
        };

        escrow.disputed = false;
        save_escrow(&env, escrow_id, &escrow);

        pay_out(&env, escrow_id, &token, &recipient, amount)?;

        if favor_payee {
            EscrowEvent::Settled(escrow_id, recipient, token.clone(), amount).publish(&env);
        } else {
            EscrowEvent::Refunded(escrow_id, recipient, token.clone(), amount).publish(&env);
        }
        EscrowEvent::DisputeResolved(escrow_id, caller, favor_payee, token, amount).publish(&env);
        Ok(())
    }

    fn change_arbiter(
        env: Env,
        escrow_id: u64,
        caller: Address,
        new_arbiter: Address,
    ) -> Result<(), Error> {
        caller.require_auth();
        let mut escrow: Escrow = load_escrow(&env, escrow_id)?;

        if caller != escrow.payee {
            return Err(Error::NotAuthorized);
        }
        // The arbiter has to be a third party.
        if new_arbiter == escrow.arbiter
            || new_arbiter == escrow.payee
            || is_payer(&escrow, &new_arbiter)
        {
            return Err(Error::InvalidArbiterAddress);
        }

        escrow.proposed_arbiter = Some(new_arbiter.clone());
        save_escrow(&env, escrow_id, &escrow);

        EscrowEvent::ArbiterChangeProposed(escrow_id, escrow.arbiter, new_arbiter).publish(&env);
        Ok(())
    }

    fn approve_arbiter(
        env: Env,
        escrow_id: u64,
        caller: Address,
        candidate: Address,
    ) -> Result<(), Error> {
        caller.require_auth();
        let mut escrow: Escrow = load_escrow(&env, escrow_id)?;

        if !is_payer(&escrow, &caller) {
            return Err(Error::NotPayer);
        }
        if escrow.proposed_arbiter.as_ref() != Some(&candidate) {
            return Err(Error::InvalidArbiterAddress);
        }

        let old_arbiter: Address = escrow.arbiter.clone();
        escrow.arbiter = candidate.clone();
        escrow.proposed_arbiter = None;
        save_escrow(&env, escrow_id, &escrow);

        EscrowEvent::ArbiterChangeApproved(escrow_id, old_arbiter, candidate, caller).publish(&env);
        Ok(())
    }

    fn set_escape_address(
        env: Env,
        escrow_id: u64,
        caller: Address,
        escape_address: Option<Address>,
    ) -> Result<(), Error> {
        caller.require_auth();
        let mut escrow: Escrow = load_escrow(&env, escrow_id)?;

        if caller != escrow.arbiter {
            return Err(Error::NotAuthorized);
        }

        escrow.escape_address = escape_address.clone();
        save_escrow(&env, escrow_id, &escrow);

        EscrowEvent::EscapeAddressSet(escrow_id, escape_address).publish(&env);
        Ok(())
    }

    // Break-glass path: ignores dispute state and the settle deadline.
    fn escape(
        env: Env,
        escrow_id: u64,
        caller: Address,
        token: Address,
        amount: i128,
        expected: Address,
    ) -> Result<(), Error> {
        caller.require_auth();
        let escrow: Escrow = load_escrow(&env, escrow_id)?;

        if caller != escrow.payee && !is_payer(&escrow, &caller) {
            return Err(Error::NotPayerOrPayee);
        }
        if escrow.escape_address.as_ref() != Some(&expected) {
            return Err(Error::InvalidEscapeAddress);
        }

        pay_out(&env, escrow_id, &token, &expected, amount)?;

        EscrowEvent::Escaped(escrow_id, expected, token, amount).publish(&env);
        Ok(())
    }
}
