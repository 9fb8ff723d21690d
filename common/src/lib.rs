#![no_std]

pub mod escrow;
pub mod multi_token;
pub mod order;
pub mod storage;
pub mod storefront;
