#![no_std]

mod balance;
mod contract;
mod storage_types;


pub use crate::contract::{JettonWallet, JettonWalletClient, WalletError};
pub use crate::storage_types::{TransferNotification, WalletData};
