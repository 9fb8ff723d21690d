use soroban_sdk::{Address, Env, IntoVal, Symbol, Val, Vec};

pub enum StorefrontEvent {
    Initialized(Address, Address),
    ReadyToggled(bool),
    TokenListed(u64, i128, Option<Address>),
    ListingUpdated(u64, i128, Option<Address>),
    ListingRemoved(u64),
    OrderGenerated(u64, u64, Address),
    OrderRatified(u64, u64),
    EscrowCreated(u64, Address),
    EscrowPayerSet(u64, Address),
    ERC1155TokenAddressChanged(Address, Address),
    DesignatedArbiterChanged(Address, Address),
    SettleDeadlineChanged(u64, u64),
    OwnershipTransferred(Address, Address),
    Rescued(Address, Address, i128),
}

impl StorefrontEvent {
    pub fn name(&self) -> &'static str {
        match self {
            StorefrontEvent::Initialized(..) => stringify!(Initialized),
            StorefrontEvent::ReadyToggled(..) => stringify!(ReadyToggled),
            StorefrontEvent::TokenListed(..) => stringify!(TokenListed),
            StorefrontEvent::ListingUpdated(..) => stringify!(ListingUpdated),
            StorefrontEvent::ListingRemoved(..) => stringify!(ListingRemoved),
            StorefrontEvent::OrderGenerated(..) => stringify!(OrderGenerated),
            StorefrontEvent::OrderRatified(..) => stringify!(OrderRatified),
            StorefrontEvent::EscrowCreated(..) => stringify!(EscrowCreated),
            StorefrontEvent::EscrowPayerSet(..) => stringify!(EscrowPayerSet),
            StorefrontEvent::ERC1155TokenAddressChanged(..) => {
                stringify!(ERC1155TokenAddressChanged)
            }
            StorefrontEvent::DesignatedArbiterChanged(..) => stringify!(DesignatedArbiterChanged),
            StorefrontEvent::SettleDeadlineChanged(..) => stringify!(SettleDeadlineChanged),
            StorefrontEvent::OwnershipTransferred(..) => stringify!(OwnershipTransferred),
            StorefrontEvent::Rescued(..) => stringify!(Rescued),
        }
    }

    pub fn publish(&self, env: &Env) {
        let mut v: Vec<Val> = Vec::new(env);

        match self {
            StorefrontEvent::Initialized(seaport, erc1155_token) => {
                v.push_back(seaport.into_val(env));
                v.push_back(erc1155_token.into_val(env));
            }
            StorefrontEvent::ReadyToggled(ready) => {
                v.push_back(ready.into_val(env));
            }
            StorefrontEvent::TokenListed(token_id, price, payment_token)
            | StorefrontEvent::ListingUpdated(token_id, price, payment_token) => {
                v.push_back(token_id.into_val(env));
                v.push_back(price.into_val(env));
                v.push_back(payment_token.into_val(env));
            }
            StorefrontEvent::ListingRemoved(token_id) => {
                v.push_back(token_id.into_val(env));
            }
            StorefrontEvent::OrderGenerated(nonce, escrow_id, fulfiller) => {
                v.push_back(nonce.into_val(env));
                v.push_back(escrow_id.into_val(env));
                v.push_back(fulfiller.into_val(env));
            }
            StorefrontEvent::OrderRatified(nonce, escrow_id) => {
                v.push_back(nonce.into_val(env));
                v.push_back(escrow_id.into_val(env));
            }
            StorefrontEvent::EscrowCreated(escrow_id, escrow_factory) => {
                v.push_back(escrow_id.into_val(env));
                v.push_back(escrow_factory.into_val(env));
            }
            StorefrontEvent::EscrowPayerSet(escrow_id, payer) => {
                v.push_back(escrow_id.into_val(env));
                v.push_back(payer.into_val(env));
            }
            StorefrontEvent::ERC1155TokenAddressChanged(old, new)
            | StorefrontEvent::DesignatedArbiterChanged(old, new)
            | StorefrontEvent::OwnershipTransferred(old, new) => {
                v.push_back(old.into_val(env));
                v.push_back(new.into_val(env));
            }
            StorefrontEvent::SettleDeadlineChanged(old, new) => {
                v.push_back(old.into_val(env));
                v.push_back(new.into_val(env));
            }
            StorefrontEvent::Rescued(token, to, amount) => {
                v.push_back(token.into_val(env));
                v.push_back(to.into_val(env));
                v.push_back(amount.into_val(env));
            }
        }

        env.events()
            .publish((Symbol::new(env, self.name()),), v)
    }
}
