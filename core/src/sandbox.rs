use crate::config::AppConfig;
use crate::errors::ClientError;
use serde::Serialize;
use sha2::{Digest, Sha256};
use soroban_sdk::{testutils::Address as _, token, Address, Bytes, BytesN, Env};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Template hash used when wallets are hosted natively instead of from Wasm.
const NATIVE_WALLET_LABEL: &[u8] = b"jetton-wallet/native";

/// Where holder wallets come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletTemplate {
    /// Wallets run as native contracts installed at their derived address.
    Native { code: [u8; 32] },
    /// Wallets are deployed by the minter from uploaded Wasm.
    Wasm { code: [u8; 32] },
}

impl WalletTemplate {
    pub fn code(&self) -> [u8; 32] {
        match self {
            Self::Native { code } | Self::Wasm { code } => *code,
        }
    }

    pub fn is_native(&self) -> bool {
        matches!(self, Self::Native { .. })
    }
}

/// CPU and memory consumed by one host invocation.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq)]
pub struct ResourceUsage {
    pub cpu_instructions: u64,
    pub memory_bytes: u64,
}

/// A local ledger hosting one payment asset, named treasury accounts and a
/// wallet template.
pub struct Sandbox {
    env: Env,
    payment_asset: Address,
    treasuries: BTreeMap<String, Address>,
    treasury_funds: i128,
    template: WalletTemplate,
}

impl Sandbox {
    pub fn new(treasury_funds: i128) -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.cost_estimate().budget().reset_unlimited();

        let issuer = Address::generate(&env);
        let payment_asset = env.register_stellar_asset_contract_v2(issuer).address();

        let code: [u8; 32] = Sha256::digest(NATIVE_WALLET_LABEL).into();
        tracing::debug!("native wallet template hash = {}", hex::encode(code));

        Self {
            env,
            payment_asset,
            treasuries: BTreeMap::new(),
            treasury_funds,
            template: WalletTemplate::Native { code },
        }
    }

    /// Sandbox whose wallets are deployed from the compiled wallet contract at `path`.
    pub fn with_wallet_wasm(treasury_funds: i128, path: impl AsRef<Path>) -> Result<Self, ClientError> {
        let path = path.as_ref();
        tracing::info!("Loading wallet template from: {:?}", path);
        let wasm = fs::read(path)?;

        if wasm.len() < 4 || &wasm[0..4] != b"\0asm" {
            return Err(ClientError::InvalidConfig(format!(
                "{} is not a Wasm module",
                path.display()
            )));
        }

        let mut sandbox = Self::new(treasury_funds);
        let computed: [u8; 32] = Sha256::digest(&wasm).into();
        let reported = sandbox
            .env
            .deployer()
            .upload_contract_wasm(Bytes::from_slice(&sandbox.env, &wasm))
            .to_array();

        if computed != reported {
            return Err(ClientError::TemplateMismatch {
                computed: hex::encode(computed),
                reported: hex::encode(reported),
            });
        }

        tracing::info!("jetton wallet code hash = {}", hex::encode(computed));
        sandbox.template = WalletTemplate::Wasm { code: computed };
        Ok(sandbox)
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, ClientError> {
        match &config.wallet_wasm {
            Some(path) => Self::with_wallet_wasm(config.treasury_funds(), path),
            None => Ok(Self::new(config.treasury_funds())),
        }
    }

    pub fn env(&self) -> &Env {
        &self.env
    }

    pub fn payment_asset(&self) -> &Address {
        &self.payment_asset
    }

    pub fn template(&self) -> &WalletTemplate {
        &self.template
    }

    pub fn wallet_code(&self) -> BytesN<32> {
        BytesN::from_array(&self.env, &self.template.code())
    }

    /// Account registered under `name`, created and funded on first use.
    pub fn treasury(&mut self, name: &str) -> Address {
        if let Some(address) = self.treasuries.get(name) {
            return address.clone();
        }

        let address = Address::generate(&self.env);
        self.fund(&address, self.treasury_funds);
        tracing::debug!("treasury {} created with {} stroops", name, self.treasury_funds);
        self.treasuries.insert(name.to_string(), address.clone());
        address
    }

    pub fn fund(&self, address: &Address, amount: i128) {
        if amount > 0 {
            token::StellarAssetClient::new(&self.env, &self.payment_asset).mint(address, &amount);
        }
    }

    pub fn payment_balance(&self, address: &Address) -> i128 {
        token::Client::new(&self.env, &self.payment_asset).balance(address)
    }

    /// Run `f` and report what it cost the host.
    pub fn measure<T>(&self, f: impl FnOnce() -> T) -> (T, ResourceUsage) {
        let mut budget = self.env.cost_estimate().budget();
        budget.reset_unlimited();
        let start_cpu = budget.cpu_instruction_cost();
        let start_mem = budget.memory_bytes_cost();

        let value = f();

        let budget = self.env.cost_estimate().budget();
        let usage = ResourceUsage {
            cpu_instructions: budget.cpu_instruction_cost().saturating_sub(start_cpu),
            memory_bytes: budget.memory_bytes_cost().saturating_sub(start_mem),
        };
        (value, usage)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::path::PathBuf;

    /// The wallet contract built for Soroban (`stellar contract build` or
    /// `cargo build --target wasm32v1-none --release`), or the file named by
    /// `JETTON_WALLET_WASM`.
    pub(crate) fn built_wallet_wasm() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("JETTON_WALLET_WASM") {
            return Some(PathBuf::from(path));
        }

        let target = Path::new(env!("CARGO_MANIFEST_DIR")).join("../target");
        let found = ["wasm32v1-none", "wasm32-unknown-unknown"]
            .iter()
            .map(|triple| target.join(triple).join("release/jetton_wallet.wasm"))
            .find(|path| path.exists());
        if found.is_none() {
            eprintln!("jetton_wallet.wasm not built under {:?}, skipping", target);
        }
        found
    }

    #[test]
    fn test_treasury_is_created_once_and_funded() {
        let mut sandbox = Sandbox::new(5_000);

        let deployer = sandbox.treasury("deployer");
        assert_eq!(sandbox.treasury("deployer"), deployer);
        assert_ne!(sandbox.treasury("user"), deployer);
        assert_eq!(sandbox.payment_balance(&deployer), 5_000);
    }

    #[test]
    fn test_native_template_hash() {
        let sandbox = Sandbox::new(0);
        let expected: [u8; 32] = Sha256::digest(b"jetton-wallet/native").into();

        assert!(sandbox.template().is_native());
        assert_eq!(sandbox.wallet_code().to_array(), expected);
    }

    #[test]
    fn test_wallet_wasm_must_be_wasm() {
        let path = std::env::temp_dir().join("jetton-client-not-wasm.bin");
        fs::write(&path, b"definitely not wasm").unwrap();

        let result = Sandbox::with_wallet_wasm(0, &path);
        assert!(matches!(result, Err(ClientError::InvalidConfig(_))));

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_wallet_wasm_template_is_file_hash() {
        let Some(path) = built_wallet_wasm() else {
            return;
        };
        let expected: [u8; 32] = Sha256::digest(fs::read(&path).unwrap()).into();

        let sandbox = Sandbox::with_wallet_wasm(0, &path).unwrap();
        assert_eq!(sandbox.template(), &WalletTemplate::Wasm { code: expected });
        assert_eq!(sandbox.wallet_code().to_array(), expected);
    }

    #[test]
    fn test_missing_wallet_wasm_is_io_error() {
        let result = Sandbox::with_wallet_wasm(0, "/nonexistent/jetton_wallet.wasm");
        assert!(matches!(result, Err(ClientError::Io(_))));
    }

    #[test]
    fn test_measure_reports_usage() {
        let mut sandbox = Sandbox::new(100);
        let user = sandbox.treasury("user");

        let (balance, usage) = sandbox.measure(|| sandbox.payment_balance(&user));
        assert_eq!(balance, 100);
        assert!(usage.cpu_instructions > 0);
    }
}
