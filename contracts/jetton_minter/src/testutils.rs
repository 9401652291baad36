//! Helpers for hosting the minter in a test `Env` without compiled wallet Wasm.

use crate::contract::JettonMinterClient;
use crate::wallet::{is_wallet_deployed, mark_wallet_deployed};
use jetton_wallet::JettonWallet;
use soroban_sdk::{Address, Env};

/// Registers a native `JettonWallet` at `owner`'s derived address and records
/// it as deployed, so the minter credits it instead of deploying from Wasm.
pub fn install_native_wallet(env: &Env, minter: &Address, owner: &Address) -> Address {
    let wallet = JettonMinterClient::new(env, minter).get_wallet_address(owner);
    if !is_wallet_installed(env, minter, owner) {
        env.register_at(&wallet, JettonWallet, (owner.clone(), minter.clone()));
        env.as_contract(minter, || mark_wallet_deployed(env, owner));
    }
    wallet
}

pub fn is_wallet_installed(env: &Env, minter: &Address, owner: &Address) -> bool {
    env.as_contract(minter, || is_wallet_deployed(env, owner))
}
