use crate::address::to_strkey;
use crate::errors::{flatten_minter, ClientError};
use crate::sandbox::Sandbox;
use crate::wallet::JettonWallet;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use jetton_minter::testutils::install_native_wallet;
use jetton_minter::{
    plan_mint, JettonData, JettonMinterClient, SupplyPrice, SupplyTerms, WalletDiscovery,
};
use serde::{Deserialize, Serialize};
use soroban_sdk::{Address, Bytes, Env};

/// Descriptive metadata stored opaquely by the minter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JettonMinterContent {
    pub uri: String,
}

#[derive(Debug, Clone)]
pub struct JettonMinterConfig {
    pub admin: Address,
    pub content: JettonMinterContent,
    pub capped_supply: i128,
    pub price: i128,
}

pub fn jetton_content_to_bytes(env: &Env, content: &JettonMinterContent) -> Bytes {
    Bytes::from_slice(env, content.uri.as_bytes())
}

/// Typed handle on a deployed minter.
pub struct JettonMinter {
    env: Env,
    address: Address,
    native_wallets: bool,
}

impl JettonMinter {
    /// Deploy a new minter with `config` on `sandbox`.
    pub fn create_from_config(
        sandbox: &Sandbox,
        config: &JettonMinterConfig,
    ) -> Result<Self, ClientError> {
        if config.price <= 0 || config.capped_supply < 0 {
            return Err(ClientError::InvalidConfig(format!(
                "price {} and capped supply {} must be positive",
                config.price, config.capped_supply
            )));
        }

        let env = sandbox.env();
        let address = env.register(
            jetton_minter::JettonMinter,
            (
                config.admin.clone(),
                sandbox.payment_asset().clone(),
                sandbox.wallet_code(),
                jetton_content_to_bytes(env, &config.content),
                config.capped_supply,
                config.price,
            ),
        );

        tracing::info!(
            "jetton minter deployed at {} (cap {}, price {})",
            to_strkey(&address)?,
            config.capped_supply,
            config.price
        );

        Ok(Self::create_from_address(sandbox, address))
    }

    pub fn create_from_address(sandbox: &Sandbox, address: Address) -> Self {
        Self {
            env: sandbox.env().clone(),
            address,
            native_wallets: sandbox.template().is_native(),
        }
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    fn client(&self) -> JettonMinterClient<'_> {
        JettonMinterClient::new(&self.env, &self.address)
    }

    /// Buy units for `to` with `total_amount`, paid by `via`.
    ///
    /// `total_amount < forward_amount` is refused here without touching the
    /// ledger.
    pub fn send_mint(
        &self,
        via: &Address,
        to: &Address,
        forward_amount: i128,
        total_amount: i128,
    ) -> Result<i128, ClientError> {
        if total_amount < forward_amount {
            return Err(ClientError::ForwardExceedsTotal {
                forward: forward_amount,
                total: total_amount,
            });
        }

        // Native wallets live outside the mint invocation, so only install
        // one for a mint the ledger is going to accept. A mint that still
        // fails afterwards (e.g. unfunded requestor) leaves an empty wallet.
        if self.native_wallets && plan_mint(self.terms(), forward_amount, total_amount).is_ok() {
            install_native_wallet(&self.env, &self.address, to);
        }

        let result = flatten_minter(self.client().try_mint(
            via,
            to,
            &forward_amount,
            &total_amount,
        ));
        match &result {
            Ok(units) => tracing::info!("minted {} units for {:?}", units, to),
            Err(e) if e.is_fatal() => tracing::error!("mint rejected: {}", e),
            Err(e) => tracing::warn!("mint rejected: {}", e),
        }
        result
    }

    pub fn send_discovery(&self, owner: &Address, include_address: bool) -> WalletDiscovery {
        self.client().provide_wallet_address(owner, &include_address)
    }

    pub fn send_change_admin(&self, via: &Address, new_admin: &Address) -> Result<(), ClientError> {
        let result = flatten_minter(self.client().try_change_admin(via, new_admin));
        if let Err(e) = &result {
            tracing::warn!("admin change rejected: {}", e);
        }
        result
    }

    pub fn send_collect_proceeds(
        &self,
        via: &Address,
        to: &Address,
        amount: i128,
    ) -> Result<(), ClientError> {
        flatten_minter(self.client().try_collect_proceeds(via, to, &amount))
    }

    fn terms(&self) -> SupplyTerms {
        let supply_price = self.get_supply_price();
        SupplyTerms {
            total_supply: self.get_jetton_data().total_supply,
            capped_supply: supply_price.capped_supply,
            price: supply_price.price,
        }
    }

    pub fn get_jetton_data(&self) -> JettonData {
        self.client().get_jetton_data()
    }

    pub fn get_wallet_address(&self, owner: &Address) -> Address {
        self.client().get_wallet_address(owner)
    }

    pub fn get_supply_price(&self) -> SupplyPrice {
        self.client().get_supply_price()
    }

    pub fn user_wallet(&self, owner: &Address) -> JettonWallet {
        JettonWallet::create_from_address(&self.env, self.get_wallet_address(owner))
    }
}

/// Printable form of `get_jetton_data`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JettonDataView {
    pub total_supply: i128,
    pub mintable: bool,
    pub admin: String,
    /// The content decoded as a URI, when it is valid UTF-8.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_uri: Option<String>,
    pub content_base64: String,
    pub wallet_code: String,
}

impl JettonDataView {
    pub fn from_data(data: &JettonData) -> Result<Self, ClientError> {
        let content: Vec<u8> = data.content.iter().collect();
        Ok(Self {
            total_supply: data.total_supply,
            mintable: data.mintable,
            admin: to_strkey(&data.admin)?,
            content_uri: String::from_utf8(content.clone()).ok(),
            content_base64: BASE64.encode(&content),
            wallet_code: hex::encode(data.wallet_code.to_array()),
        })
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SupplyPriceView {
    pub capped_supply: i128,
    pub price: i128,
}

impl From<&SupplyPrice> for SupplyPriceView {
    fn from(value: &SupplyPrice) -> Self {
        Self {
            capped_supply: value.capped_supply,
            price: value.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sandbox::tests::built_wallet_wasm;
    use jetton_minter::testutils::is_wallet_installed;
    use jetton_minter::MinterError;
    use soroban_sdk::testutils::Address as _;

    const CAPPED_SUPPLY: i128 = 1000;
    const PRICE: i128 = 100_000;

    fn deploy(sandbox: &mut Sandbox) -> (JettonMinter, Address, Address) {
        let deployer = sandbox.treasury("deployer");
        let user = sandbox.treasury("user");
        let minter = JettonMinter::create_from_config(
            sandbox,
            &JettonMinterConfig {
                admin: deployer.clone(),
                content: JettonMinterContent {
                    uri: "https://ton.org/".to_string(),
                },
                capped_supply: CAPPED_SUPPLY,
                price: PRICE,
            },
        )
        .unwrap();
        (minter, deployer, user)
    }

    #[test]
    fn test_should_deploy() {
        let mut sandbox = Sandbox::new(1_000_000_000);
        let (minter, deployer, _user) = deploy(&mut sandbox);

        let view = JettonDataView::from_data(&minter.get_jetton_data()).unwrap();
        assert_eq!(view.total_supply, 0);
        assert!(view.mintable);
        assert_eq!(view.admin, to_strkey(&deployer).unwrap());
        assert_eq!(view.content_uri.as_deref(), Some("https://ton.org/"));
        assert_eq!(view.wallet_code, hex::encode(sandbox.template().code()));
    }

    #[test]
    fn test_should_mint_max_value() {
        let mut sandbox = Sandbox::new(1_000_000_000);
        let (minter, _deployer, user) = deploy(&mut sandbox);

        let minted = minter
            .send_mint(&user, &user, 500_000, CAPPED_SUPPLY * PRICE)
            .unwrap();
        assert_eq!(minted, CAPPED_SUPPLY);

        let wallet = minter.user_wallet(&user);
        assert_eq!(wallet.get_jetton_balance().unwrap(), CAPPED_SUPPLY);
        assert!(!minter.get_jetton_data().mintable);
    }

    #[test]
    fn test_should_not_mint_more_than_capped_supply() {
        let mut sandbox = Sandbox::new(1_000_000_000);
        let (minter, _deployer, user) = deploy(&mut sandbox);
        minter
            .send_mint(&user, &user, 0, CAPPED_SUPPLY * PRICE)
            .unwrap();

        let err = minter.send_mint(&user, &user, 0, PRICE).unwrap_err();
        assert!(err.is_fatal());
        assert_eq!(err.exit_code(), Some(256));
        assert_eq!(minter.get_jetton_data().total_supply, CAPPED_SUPPLY);
    }

    #[test]
    fn test_rejected_mint_installs_no_native_wallet() {
        let mut sandbox = Sandbox::new(1_000_000_000);
        let (minter, _deployer, user) = deploy(&mut sandbox);
        let recipient = Address::generate(sandbox.env());

        let err = minter.send_mint(&user, &recipient, 0, PRICE - 1).unwrap_err();
        assert_eq!(err.exit_code(), Some(4));
        assert!(!is_wallet_installed(sandbox.env(), minter.address(), &recipient));

        minter
            .send_mint(&user, &user, 0, CAPPED_SUPPLY * PRICE)
            .unwrap();
        let err = minter.send_mint(&user, &recipient, 0, PRICE).unwrap_err();
        assert_eq!(err.exit_code(), Some(256));
        assert!(!is_wallet_installed(sandbox.env(), minter.address(), &recipient));
        assert!(is_wallet_installed(sandbox.env(), minter.address(), &user));
    }

    #[test]
    fn test_forward_above_total_never_reaches_ledger() {
        let mut sandbox = Sandbox::new(1_000_000_000);
        let (minter, _deployer, user) = deploy(&mut sandbox);
        let before = sandbox.payment_balance(&user);

        let err = minter.send_mint(&user, &user, PRICE + 1, PRICE).unwrap_err();
        assert!(matches!(err, ClientError::ForwardExceedsTotal { .. }));
        assert_eq!(minter.get_jetton_data().total_supply, 0);
        assert_eq!(sandbox.payment_balance(&user), before);
    }

    #[test]
    fn test_should_get_valid_price() {
        let mut sandbox = Sandbox::new(1_000_000_000);
        let (minter, _deployer, user) = deploy(&mut sandbox);

        assert_eq!(minter.get_supply_price().price, PRICE);
        minter.send_mint(&user, &user, 0, 10 * PRICE).unwrap();
        assert_eq!(
            SupplyPriceView::from(&minter.get_supply_price()),
            SupplyPriceView {
                capped_supply: CAPPED_SUPPLY,
                price: PRICE,
            }
        );
    }

    #[test]
    fn test_discovery_matches_wallet_address() {
        let mut sandbox = Sandbox::new(1_000_000_000);
        let (minter, _deployer, user) = deploy(&mut sandbox);
        let address = minter.get_wallet_address(&user);

        let discovery = minter.send_discovery(&user, true);
        assert_eq!(discovery.wallet_address, address);
        assert_eq!(discovery.owner, Some(user.clone()));
        assert_eq!(minter.send_discovery(&user, false).owner, None);

        minter.send_mint(&user, &user, 0, PRICE).unwrap();
        assert_eq!(minter.get_wallet_address(&user), address);
    }

    #[test]
    fn test_change_admin_flow() {
        let mut sandbox = Sandbox::new(1_000_000_000);
        let (minter, deployer, user) = deploy(&mut sandbox);
        let new_admin = Address::generate(sandbox.env());

        let err = minter.send_change_admin(&user, &user).unwrap_err();
        assert!(matches!(err, ClientError::Contract(MinterError::Unauthorized)));
        assert_eq!(minter.get_jetton_data().admin, deployer);

        minter.send_change_admin(&deployer, &new_admin).unwrap();
        assert!(minter.send_change_admin(&deployer, &deployer).is_err());
        minter.send_change_admin(&new_admin, &deployer).unwrap();
        assert_eq!(minter.get_jetton_data().admin, deployer);
    }

    #[test]
    fn test_collect_proceeds() {
        let mut sandbox = Sandbox::new(1_000_000_000);
        let (minter, deployer, user) = deploy(&mut sandbox);
        let deployer_before = sandbox.payment_balance(&deployer);

        minter.send_mint(&user, &user, 0, 4 * PRICE).unwrap();
        minter
            .send_collect_proceeds(&deployer, &deployer, 4 * PRICE)
            .unwrap();
        assert_eq!(sandbox.payment_balance(&deployer), deployer_before + 4 * PRICE);
        assert_eq!(sandbox.payment_balance(minter.address()), 0);
    }

    #[test]
    fn test_first_mint_deploys_wallet_from_wasm() {
        let Some(path) = built_wallet_wasm() else {
            return;
        };
        let mut sandbox = Sandbox::with_wallet_wasm(1_000_000_000, &path).unwrap();
        let (minter, _deployer, user) = deploy(&mut sandbox);
        let wallet = minter.user_wallet(&user);
        assert!(wallet.get_wallet_data().is_err());

        assert_eq!(minter.send_mint(&user, &user, 1_000, 3 * PRICE).unwrap(), 3);
        let data = wallet.get_wallet_data().unwrap();
        assert_eq!(data.balance, 3);
        assert_eq!(data.owner, user);
        assert_eq!(&data.minter, minter.address());

        // The second credit lands in the wallet deployed by the first.
        assert_eq!(minter.send_mint(&user, &user, 0, 2 * PRICE).unwrap(), 2);
        assert_eq!(wallet.get_jetton_balance().unwrap(), 5);
        assert_eq!(wallet.address(), &minter.get_wallet_address(&user));
        assert_eq!(minter.get_jetton_data().total_supply, 5);
    }

    #[test]
    fn test_rejects_invalid_config_before_deploying() {
        let sandbox = Sandbox::new(0);
        let admin = Address::generate(sandbox.env());
        let result = JettonMinter::create_from_config(
            &sandbox,
            &JettonMinterConfig {
                admin,
                content: JettonMinterContent {
                    uri: "https://ton.org/".to_string(),
                },
                capped_supply: CAPPED_SUPPLY,
                price: 0,
            },
        );
        assert!(matches!(result, Err(ClientError::InvalidConfig(_))));
    }
}
