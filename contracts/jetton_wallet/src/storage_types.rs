use soroban_sdk::{contracttype, Address};

pub(crate) const DAY_IN_LEDGERS: u32 = 17280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Owner,
    Minter,
    Balance,
}

/// Snapshot returned by `get_wallet_data`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WalletData {
    pub balance: i128,
    pub owner: Address,
    pub minter: Address,
}

/// Published to the owner when a credit carries a non-zero forward amount.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransferNotification {
    pub amount: i128,
    pub from: Address,
    pub forward_amount: i128,
}
