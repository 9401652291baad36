#![no_std]

#[cfg(test)]
#[macro_use]
extern crate std;

mod contract;
mod error;
mod state;
mod storage_types;
mod supply;
mod wallet;

#[cfg(any(test, feature = "testutils"))]
pub mod testutils;



pub use crate::contract::{JettonMinter, JettonMinterClient};
pub use crate::error::MinterError;
pub use crate::storage_types::{
    AdminChangedEvent, JettonData, MintEvent, SupplyPrice, WalletDiscovery,
};
pub use crate::supply::{plan_mint, MintPlan, SupplyTerms};
