use soroban_sdk::{contracttype, Address, Bytes, BytesN};

pub(crate) const DAY_IN_LEDGERS: u32 = 17280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub(crate) const WALLET_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const WALLET_LIFETIME_THRESHOLD: u32 = WALLET_BUMP_AMOUNT - DAY_IN_LEDGERS;

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    State,
    // Set once the holder's wallet has been deployed.
    Wallet(Address),
}

/// The minter's whole persisted state. Stored as a single record so every
/// mutation lands in one write.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IssuanceState {
    pub total_supply: i128,
    pub capped_supply: i128,
    pub price: i128,
    pub admin: Address,
    pub content: Bytes,
    pub wallet_code: BytesN<32>,
    pub payment_asset: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct JettonData {
    pub total_supply: i128,
    pub mintable: bool,
    pub admin: Address,
    pub content: Bytes,
    pub wallet_code: BytesN<32>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SupplyPrice {
    pub capped_supply: i128,
    pub price: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WalletDiscovery {
    pub wallet_address: Address,
    pub owner: Option<Address>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MintEvent {
    pub requestor: Address,
    pub recipient: Address,
    pub wallet: Address,
    pub amount: i128,
    pub payment: i128,
    pub forward_amount: i128,
    pub total_supply: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminChangedEvent {
    pub previous: Address,
    pub new_admin: Address,
}
