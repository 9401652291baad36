use crate::storage_types::DataKey;
use soroban_sdk::{Address, Env};

pub fn read_balance(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get::<DataKey, i128>(&DataKey::Balance)
        .unwrap_or(0)
}

fn write_balance(e: &Env, amount: i128) {
    e.storage().instance().set(&DataKey::Balance, &amount);
}

/// Adds `amount` to the wallet balance and returns the new balance.
pub fn receive_balance(e: &Env, amount: i128) -> Option<i128> {
    let balance = read_balance(e).checked_add(amount)?;
    write_balance(e, balance);
    Some(balance)
}

pub fn read_owner(e: &Env) -> Address {
    e.storage().instance().get(&DataKey::Owner).unwrap()
}

pub fn read_minter(e: &Env) -> Address {
    e.storage().instance().get(&DataKey::Minter).unwrap()
}

pub fn write_parties(e: &Env, owner: &Address, minter: &Address) {
    e.storage().instance().set(&DataKey::Owner, owner);
    e.storage().instance().set(&DataKey::Minter, minter);
}
