//! Client-side wrapper for the capped jetton minter.
//!
//! Hosts the minter and holder wallets in a local ledger sandbox and exposes
//! them through typed handles: deploy, mint, admin change, wallet discovery and
//! the read-only state queries.

pub mod address;
pub mod config;
pub mod errors;
pub mod minter;
pub mod sandbox;
pub mod scenario;
pub mod wallet;

pub use crate::config::{load_config, AppConfig};
pub use crate::errors::ClientError;
pub use crate::minter::{
    jetton_content_to_bytes, JettonDataView, JettonMinter, JettonMinterConfig,
    JettonMinterContent, SupplyPriceView,
};
pub use crate::sandbox::{ResourceUsage, Sandbox, WalletTemplate};
pub use crate::wallet::JettonWallet;
