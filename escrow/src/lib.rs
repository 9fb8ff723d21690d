#![no_std]

use soroban_sdk::contract;

mod contract;
mod events;
mod factory;
mod utils;

/// Holds every escrow created by the factory. Each escrow is an independent
/// record addressed by its handle; tokens for all handles sit in this
/// contract and are tracked per `(handle, token)`.
#[contract]
pub struct EscrowContract;

#[cfg(test)]
mod test;
