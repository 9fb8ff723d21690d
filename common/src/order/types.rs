use soroban_sdk::{contracttype, symbol_short, Address, Symbol, Vec};

/// Item discriminants understood by the order protocol.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum ItemType {
    Native = 0,
    Fungible = 1,
    NonFungible = 2,
    MultiToken = 3,
    NonFungibleWithCriteria = 4,
    MultiTokenWithCriteria = 5,
}

/// An item leaving one party, as requested by or offered to a fulfiller.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SpentItem {
    pub item_type: ItemType,
    pub token: Address,
    pub identifier: u64,
    pub amount: i128,
}

/// An item the order protocol must deliver to `recipient`.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct ReceivedItem {
    pub item_type: ItemType,
    pub token: Address,
    pub identifier: u64,
    pub amount: i128,
    pub recipient: Address,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct OrderTerms {
    pub offer: Vec<SpentItem>,
    pub consideration: Vec<ReceivedItem>,
}

/// Returned by `ratify_order` to acknowledge a fulfilled order.
pub const RATIFY_ORDER_MAGIC: Symbol = symbol_short!("ratified");
