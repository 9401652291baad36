use crate::errors::ClientError;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};
use serde::{Deserialize, Serialize};

/// Settings for a sandboxed minter deployment.
///
/// Sources, lowest precedence first: built-in defaults, an optional
/// `jetton.toml` in the working directory, then `JETTON_*` environment
/// variables (a `.env` file is loaded into the environment first).
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct AppConfig {
    pub rust_log: String,
    /// Maximum number of units that may ever exist.
    pub capped_supply: u64,
    /// Price of one unit in stroops of the payment asset.
    pub price: u64,
    pub content_uri: String,
    /// Admin strkey. A generated sandbox account is used when unset.
    #[serde(default)]
    pub admin: Option<String>,
    /// Payment-asset balance given to every sandbox treasury account.
    pub treasury_funds: u64,
    /// Compiled `jetton_wallet.wasm`. Native wallets are hosted when unset.
    #[serde(default)]
    pub wallet_wasm: Option<String>,
}

pub(crate) fn with_defaults(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    builder
        .set_default("rust_log", "info")?
        .set_default("capped_supply", 1000)?
        // 0.01 XLM
        .set_default("price", 100_000)?
        .set_default("content_uri", "https://ton.org/")?
        .set_default("treasury_funds", 1_000_000_000_000u64)
}

pub fn load_config() -> Result<AppConfig, ClientError> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let settings = with_defaults(Config::builder())?
        .add_source(config::File::with_name("jetton").required(false))
        .add_source(config::Environment::with_prefix("JETTON"))
        .build()?;

    let config: AppConfig = settings.try_deserialize()?;
    config.validate()?;
    Ok(config)
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ClientError> {
        if self.price == 0 {
            return Err(ClientError::InvalidConfig(
                "price must be greater than zero".to_string(),
            ));
        }
        if self.content_uri.is_empty() {
            return Err(ClientError::InvalidConfig(
                "content_uri cannot be empty".to_string(),
            ));
        }
        // Asset amounts on the host are bounded by i64.
        let full_cap_cost = (self.capped_supply as u128) * (self.price as u128);
        if full_cap_cost > i64::MAX as u128 || self.treasury_funds > i64::MAX as u64 {
            return Err(ClientError::InvalidConfig(format!(
                "capped_supply * price ({}) exceeds the asset amount range",
                full_cap_cost
            )));
        }
        Ok(())
    }

    pub fn capped_supply(&self) -> i128 {
        self.capped_supply as i128
    }

    pub fn price(&self) -> i128 {
        self.price as i128
    }

    pub fn treasury_funds(&self) -> i128 {
        self.treasury_funds as i128
    }
}
