use soroban_sdk::{Address, BytesN, Env, IntoVal, Symbol, Val, Vec};

pub enum FactoryEvent {
    StorefrontCreated(Address, Address, Address, Address, u64),
    StorefrontWasmHashUpdated(BytesN<32>),
}

impl FactoryEvent {
    pub fn name(&self) -> &'static str {
        match self {
            FactoryEvent::StorefrontCreated(..) => stringify!(StorefrontCreated),
            FactoryEvent::StorefrontWasmHashUpdated(..) => stringify!(StorefrontWasmHashUpdated),
        }
    }

    pub fn publish(&self, env: &Env) {
        let mut v: Vec<Val> = Vec::new(env);

        match self {
            FactoryEvent::StorefrontCreated(
                storefront,
                owner,
                seaport,
                escrow_factory,
                min_settle_time,
            ) => {
                v.push_back(storefront.into_val(env));
                v.push_back(owner.into_val(env));
                v.push_back(seaport.into_val(env));
                v.push_back(escrow_factory.into_val(env));
                v.push_back(min_settle_time.into_val(env));
            }
            FactoryEvent::StorefrontWasmHashUpdated(wasm_hash) => {
                v.push_back(wasm_hash.into_val(env));
            }
        }

        env.events()
            .publish((Symbol::new(env, self.name()),), v)
    }
}
