use soroban_sdk::{contracterror, contracttype, Address};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum EscrowError {
    AlreadyInitialized = 1,
    EscrowNotFound = 2,
    NotAuthorized = 3,
    NotPayer = 4,
    NotPayerOrPayee = 5,
    PayerAlreadySet = 6,
    PayerNotSet = 7,
    CannotSettleYet = 8,
    PaymentDisputed = 9,
    InvalidArbiterAddress = 10,
    InvalidEscapeAddress = 11,
    InvalidAmount = 12,
    InsufficientBalance = 13,
}

/// Custody record for a single trade.
///
/// `None` stands in for the unset sentinel on `payer`, `proposed_arbiter`
/// and `escape_address`. With no null address to reject, a proposed
/// arbiter must instead be a third party: not the sitting arbiter, the
/// payee or the payer. The arbiter fixed at creation is not checked.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Escrow {
    pub payee: Address,
    pub payer: Option<Address>,
    pub storefront: Address,
    pub arbiter: Address,
    pub proposed_arbiter: Option<Address>,
    pub escape_address: Option<Address>,
    pub settle_deadline: u64,
    pub disputed: bool,
}

#[derive(Clone)]
#[contracttype]
pub enum EscrowDataKey {
    EscrowCount,
    Escrow(u64),           // Escrow record by handle
    Balance(u64, Address), // Amount of a token held for a handle
    Custody(Address),      // Sum of all handle balances for a token
}
