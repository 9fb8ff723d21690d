#![no_std]

mod contract;
mod events;

pub use contract::{MultiTokenContract, MultiTokenContractClient};

#[cfg(test)]
mod test;
