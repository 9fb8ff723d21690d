use soroban_sdk::{contracterror, contracttype, symbol_short, Address, Symbol};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum MultiTokenError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidAmount = 3,
    InsufficientBalance = 4,
    NotApproved = 5,
}

#[derive(Clone)]
#[contracttype]
pub enum MultiTokenDataKey {
    Balance(Address, u64),        // Balance of an owner for a token id
    Supply(u64),                  // Total minted for a token id
    OperatorApproval(Address, Address), // (owner, operator) -> approved
}

pub const ADMIN: Symbol = symbol_short!("ADMIN");
