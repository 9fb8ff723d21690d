use soroban_sdk::{contracttype, symbol_short, Symbol};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Listing(u64),      // Listing by inventory id
    PendingOrder(u64), // Generated order awaiting ratification, by offerer nonce
}

pub const OWNER: Symbol = symbol_short!("OWNER");
pub const CONFIG: Symbol = symbol_short!("CONFIG");
pub const READY: Symbol = symbol_short!("READY");
pub const INITIALIZED: Symbol = symbol_short!("INIT");
pub const NONCE: Symbol = symbol_short!("NONCE");
