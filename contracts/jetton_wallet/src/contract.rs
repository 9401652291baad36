use crate::balance::{read_balance, read_minter, read_owner, receive_balance, write_parties};
use crate::storage_types::{
    TransferNotification, WalletData, INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD,
};
use soroban_sdk::{contract, contracterror, contractimpl, Address, Env, Symbol};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum WalletError {
    InvalidAmount = 1,
    BalanceOverflow = 2,
}

pub trait JettonWalletTrait {
    fn internal_transfer(
        e: Env,
        amount: i128,
        from: Address,
        forward_amount: i128,
    ) -> Result<i128, WalletError>;
    fn balance(e: Env) -> i128;
    fn get_wallet_data(e: Env) -> WalletData;
}

#[contract]
pub struct JettonWallet;

#[contractimpl]
impl JettonWallet {
    pub fn __constructor(e: Env, owner: Address, minter: Address) {
        write_parties(&e, &owner, &minter);
    }
}

#[contractimpl]
impl JettonWalletTrait for JettonWallet {
    /// Credits freshly minted units. Only the minter that deployed this wallet
    /// may call it.
    fn internal_transfer(
        e: Env,
        amount: i128,
        from: Address,
        forward_amount: i128,
    ) -> Result<i128, WalletError> {
        read_minter(&e).require_auth();
        if amount <= 0 || forward_amount < 0 {
            return Err(WalletError::InvalidAmount);
        }
        e.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let balance = receive_balance(&e, amount).ok_or(WalletError::BalanceOverflow)?;

        if forward_amount > 0 {
            e.events().publish(
                (Symbol::new(&e, "transfer_notification"), read_owner(&e)),
                TransferNotification {
                    amount,
                    from,
                    forward_amount,
                },
            );
        }

        Ok(balance)
    }

    fn balance(e: Env) -> i128 {
        read_balance(&e)
    }

    fn get_wallet_data(e: Env) -> WalletData {
        WalletData {
            balance: read_balance(&e),
            owner: read_owner(&e),
            minter: read_minter(&e),
        }
    }
}
