use soroban_sdk::{contracterror, contracttype, Address, Vec};

use crate::order::types::ReceivedItem;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum StorefrontError {
    AlreadyInitialized = 1,
    OwnableUnauthorizedAccount = 2,
    InvalidSettleDeadline = 3,
    InvalidTokenId = 4,
    InvalidPrice = 5,
    ListingAlreadyExists = 6,
    ListingNotFound = 7,
    StoreNotReady = 8,
    EmptyOrder = 9,
    UnsupportedItemType = 10,
    InvalidToken = 11,
    InvalidAmount = 12,
    TokenNotListed = 13,
    NoTokensAvailable = 14,
    OrderMismatch = 15,
    OrderNotFound = 16,
    InsufficientBalance = 17,
    NotInitialized = 18,
    EscrowCreationFailed = 19,
    EscrowPayerRejected = 20,
    EscrowDepositFailed = 21,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum StorefrontFactoryError {
    AlreadyInitialized = 1,
    Unauthorized = 2,
    InvalidSettleDeadline = 3,
    StorefrontNotFound = 4,
    NotInitialized = 5,
}

/// Sale terms for one inventory id. A zeroed listing (`token_id == 0`) is
/// what callers read back for an id that is not for sale.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Listing {
    pub token_id: u64,
    pub price: i128,
    pub payment_token: Option<Address>, // None = native asset
}

/// Construction parameters of a storefront. `seaport`, `escrow_factory`,
/// `native_token` and `min_settle_time` are fixed for the storefront's life.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct StorefrontConfig {
    pub seaport: Address,
    pub escrow_factory: Address,
    pub native_token: Address,
    pub erc1155_token: Address,
    pub designated_arbiter: Address,
    pub min_settle_time: u64,
    pub settle_deadline: u64,
}

/// An order generated for the protocol and not yet ratified.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct PendingOrder {
    pub escrow_id: u64,
    pub payer: Address,
    pub consideration: Vec<ReceivedItem>,
}
