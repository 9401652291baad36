use crate::storage_types::{DataKey, WALLET_BUMP_AMOUNT, WALLET_LIFETIME_THRESHOLD};
use soroban_sdk::{contractclient, xdr::ToXdr, Address, BytesN, Env};

/// The part of the holder wallet interface the minter calls into.
#[allow(dead_code)]
#[contractclient(name = "JettonWalletClient")]
pub trait JettonWalletInterface {
    fn internal_transfer(e: Env, amount: i128, from: Address, forward_amount: i128) -> i128;
}

// Hashing the template into the salt makes the address a function of both
// the owner and the wallet code.
fn wallet_salt(e: &Env, owner: &Address, wallet_code: &BytesN<32>) -> BytesN<32> {
    let preimage = (owner.clone(), wallet_code.clone()).to_xdr(e);
    e.crypto().sha256(&preimage).into()
}

/// Address of `owner`'s wallet, whether or not it has been deployed yet.
pub fn wallet_address(e: &Env, owner: &Address, wallet_code: &BytesN<32>) -> Address {
    e.deployer()
        .with_current_contract(wallet_salt(e, owner, wallet_code))
        .deployed_address()
}

pub fn is_wallet_deployed(e: &Env, owner: &Address) -> bool {
    e.storage()
        .persistent()
        .has(&DataKey::Wallet(owner.clone()))
}

pub(crate) fn mark_wallet_deployed(e: &Env, owner: &Address) {
    e.storage()
        .persistent()
        .set(&DataKey::Wallet(owner.clone()), &true);
    bump_wallet_flag(e, owner);
}

fn bump_wallet_flag(e: &Env, owner: &Address) {
    e.storage().persistent().extend_ttl(
        &DataKey::Wallet(owner.clone()),
        WALLET_LIFETIME_THRESHOLD,
        WALLET_BUMP_AMOUNT,
    );
}

/// Credits `amount` units to `owner`'s wallet, deploying the wallet from
/// `wallet_code` on the holder's first credit. Returns the wallet address.
pub fn credit_wallet(
    e: &Env,
    wallet_code: &BytesN<32>,
    owner: &Address,
    amount: i128,
    from: &Address,
    forward_amount: i128,
) -> Address {
    let deployer = e
        .deployer()
        .with_current_contract(wallet_salt(e, owner, wallet_code));

    let wallet = if is_wallet_deployed(e, owner) {
        bump_wallet_flag(e, owner);
        deployer.deployed_address()
    } else {
        let wallet = deployer.deploy_v2(
            wallet_code.clone(),
            (owner.clone(), e.current_contract_address()),
        );
        mark_wallet_deployed(e, owner);
        wallet
    };

    JettonWalletClient::new(e, &wallet).internal_transfer(&amount, from, &forward_amount);
    wallet
}
