use crate::errors::{flatten_host, ClientError};
use jetton_wallet::{JettonWalletClient, WalletData};
use soroban_sdk::{Address, Env};

/// Typed handle on a holder wallet.
pub struct JettonWallet {
    env: Env,
    address: Address,
}

impl JettonWallet {
    pub fn create_from_address(env: &Env, address: Address) -> Self {
        Self {
            env: env.clone(),
            address,
        }
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    fn client(&self) -> JettonWalletClient<'_> {
        JettonWalletClient::new(&self.env, &self.address)
    }

    /// Fails until the wallet has been deployed by its first credit.
    pub fn get_wallet_data(&self) -> Result<WalletData, ClientError> {
        flatten_host(self.client().try_get_wallet_data())
    }

    pub fn get_jetton_balance(&self) -> Result<i128, ClientError> {
        flatten_host(self.client().try_balance())
    }
}
