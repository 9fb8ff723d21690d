use soroban_sdk::{Address, Env, IntoVal, Symbol, Val, Vec};

pub enum MultiTokenEvent {
    Initialized(Address),
    Minted(u64, Address, i128),
    Transfer(u64, Address, Address, i128),
    ApprovalForAll(Address, Address, bool),
}

impl MultiTokenEvent {
    pub fn name(&self) -> &'static str {
        match self {
            MultiTokenEvent::Initialized(..) => stringify!(Initialized),
            MultiTokenEvent::Minted(..) => stringify!(Minted),
            MultiTokenEvent::Transfer(..) => stringify!(Transfer),
            MultiTokenEvent::ApprovalForAll(..) => stringify!(ApprovalForAll),
        }
    }

    pub fn publish(&self, env: &Env) {
        let mut v: Vec<Val> = Vec::new(env);

        match self {
            MultiTokenEvent::Initialized(admin) => {
                v.push_back(admin.into_val(env));
            }
            MultiTokenEvent::Minted(id, to, amount) => {
                v.push_back(id.into_val(env));
                v.push_back(to.into_val(env));
                v.push_back(amount.into_val(env));
            }
            MultiTokenEvent::Transfer(id, from, to, amount) => {
                v.push_back(id.into_val(env));
                v.push_back(from.into_val(env));
                v.push_back(to.into_val(env));
                v.push_back(amount.into_val(env));
            }
            MultiTokenEvent::ApprovalForAll(owner, operator, approved) => {
                v.push_back(owner.into_val(env));
                v.push_back(operator.into_val(env));
                v.push_back(approved.into_val(env));
            }
        }

        env.events()
            .publish((Symbol::new(env, self.name()),), v)
    }
}
