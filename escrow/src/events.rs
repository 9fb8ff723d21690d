use soroban_sdk::{Address, Env, IntoVal, Symbol, Val, Vec};

pub enum EscrowEvent {
    EscrowCreated(u64, Address, Address, Address),
    PayerSet(u64, Address, u64),
    Deposited(u64, Address, Address, i128),
    UnattributedClaimed(u64, Address, Address, i128),
    Settled(u64, Address, Address, i128),
    Refunded(u64, Address, Address, i128),
    Disputed(u64, Address),
    DisputeRemoved(u64, Address),
    DisputeResolved(u64, Address, bool, Address, i128),
    ArbiterChangeProposed(u64, Address, Address),
    ArbiterChangeApproved(u64, Address, Address, Address),
    EscapeAddressSet(u64, Option<Address>),
    Escaped(u64, Address, Address, i128),
}

impl EscrowEvent {
    pub fn name(&self) -> &'static str {
        match self {
            EscrowEvent::EscrowCreated(..) => stringify!(EscrowCreated),
            EscrowEvent::PayerSet(..) => stringify!(PayerSet),
            EscrowEvent::Deposited(..) => stringify!(Deposited),
            EscrowEvent::UnattributedClaimed(..) => stringify!(UnattributedClaimed),
            EscrowEvent::Settled(..) => stringify!(Settled),
            EscrowEvent::Refunded(..) => stringify!(Refunded),
            EscrowEvent::Disputed(..) => stringify!(Disputed),
            EscrowEvent::DisputeRemoved(..) => stringify!(DisputeRemoved),
            EscrowEvent::DisputeResolved(..) => stringify!(DisputeResolved),
            EscrowEvent::ArbiterChangeProposed(..) => stringify!(ArbiterChangeProposed),
            EscrowEvent::ArbiterChangeApproved(..) => stringify!(ArbiterChangeApproved),
            EscrowEvent::EscapeAddressSet(..) => stringify!(EscapeAddressSet),
            EscrowEvent::Escaped(..) => stringify!(Escaped),
        }
    }

    pub fn publish(&self, env: &Env) {
        let mut v: Vec<Val> = Vec::new(env);

        match self {
            EscrowEvent::EscrowCreated(escrow_id, payee, storefront, arbiter) => {
                v.push_back(escrow_id.into_val(env));
                v.push_back(payee.into_val(env));
                v.push_back(storefront.into_val(env));
                v.push_back(arbiter.into_val(env));
            }
            EscrowEvent::PayerSet(escrow_id, payer, settle_deadline) => {
                v.push_back(escrow_id.into_val(env));
                v.push_back(payer.into_val(env));
                v.push_back(settle_deadline.into_val(env));
            }
            EscrowEvent::Deposited(escrow_id, from, token, amount)
            | EscrowEvent::UnattributedClaimed(escrow_id, from, token, amount) => {
                v.push_back(escrow_id.into_val(env));
                v.push_back(from.into_val(env));
                v.push_back(token.into_val(env));
                v.push_back(amount.into_val(env));
            }
            EscrowEvent::Settled(escrow_id, payee, token, amount) => {
                v.push_back(escrow_id.into_val(env));
                v.push_back(payee.into_val(env));
                v.push_back(token.into_val(env));
                v.push_back(amount.into_val(env));
            }
            EscrowEvent::Refunded(escrow_id, payer, token, amount) => {
                v.push_back(escrow_id.into_val(env));
                v.push_back(payer.into_val(env));
                v.push_back(token.into_val(env));
                v.push_back(amount.into_val(env));
            }
            EscrowEvent::Disputed(escrow_id, payer) | EscrowEvent::DisputeRemoved(escrow_id, payer) => {
                v.push_back(escrow_id.into_val(env));
                v.push_back(payer.into_val(env));
            }
            EscrowEvent::DisputeResolved(escrow_id, arbiter, favor_payee, token, amount) => {
                v.push_back(escrow_id.into_val(env));
                v.push_back(arbiter.into_val(env));
                v.push_back(favor_payee.into_val(env));
                v.push_back(token.into_val(env));
                v.push_back(amount.into_val(env));
            }
            EscrowEvent::ArbiterChangeProposed(escrow_id, old, new) => {
                v.push_back(escrow_id.into_val(env));
                v.push_back(old.into_val(env));
                v.push_back(new.into_val(env));
            }
            EscrowEvent::ArbiterChangeApproved(escrow_id, old, new, approver) => {
                v.push_back(escrow_id.into_val(env));
                v.push_back(old.into_val(env));
                v.push_back(new.into_val(env));
                v.push_back(approver.into_val(env));
            }
            EscrowEvent::EscapeAddressSet(escrow_id, escape_address) => {
                v.push_back(escrow_id.into_val(env));
                v.push_back(escape_address.into_val(env));
            }
            EscrowEvent::Escaped(escrow_id, to, token, amount) => {
                v.push_back(escrow_id.into_val(env));
                v.push_back(to.into_val(env));
                v.push_back(token.into_val(env));
                v.push_back(amount.into_val(env));
            }
        }

        env.events()
            .publish((Symbol::new(env, self.name()),), v)
    }
}
