use crate::address::to_strkey;
use crate::config::AppConfig;
use crate::errors::ClientError;
use crate::minter::{
    JettonDataView, JettonMinter, JettonMinterConfig, JettonMinterContent, SupplyPriceView,
};
use crate::sandbox::{ResourceUsage, Sandbox};
use serde::Serialize;

/// Forward amount attached to the full-cap mint (0.05 XLM).
const MINT_FORWARD_AMOUNT: i128 = 500_000;

/// Outcome of one ledger interaction.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StepReport {
    pub name: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_code: Option<u32>,
    /// Set when the failure can never succeed on retry.
    pub fatal: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub resources: ResourceUsage,
}

impl StepReport {
    fn from_result<T>(name: &str, result: &Result<T, ClientError>, resources: ResourceUsage) -> Self {
        match result {
            Ok(_) => Self {
                name: name.to_string(),
                success: true,
                exit_code: None,
                fatal: false,
                error: None,
                resources,
            },
            Err(e) => Self {
                name: name.to_string(),
                success: false,
                exit_code: e.exit_code(),
                fatal: e.is_fatal(),
                error: Some(e.to_string()),
                resources,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    pub minter: String,
    pub wallet_template: String,
    pub steps: Vec<StepReport>,
    pub final_state: JettonDataView,
    pub supply_price: SupplyPriceView,
    pub price_matches_config: bool,
    pub user_wallet: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_wallet_balance: Option<i128>,
}

/// Deploy a minter from `config`, mint the whole cap, try to mint one more
/// unit and read back the price.
pub fn run_capped_supply(config: &AppConfig) -> Result<ScenarioReport, ClientError> {
    let mut sandbox = Sandbox::from_config(config)?;
    let deployer = match &config.admin {
        Some(strkey) => crate::address::parse_address(sandbox.env(), strkey)?,
        None => sandbox.treasury("deployer"),
    };
    let user = sandbox.treasury("user");

    let capped_supply = config.capped_supply();
    let price = config.price();
    let full_cap_cost = capped_supply * price;
    // Enough for the whole cap plus the rejected extra unit.
    sandbox.fund(&user, full_cap_cost + price - sandbox.payment_balance(&user));

    let mut steps = Vec::new();

    let (deployed, usage) = sandbox.measure(|| {
        JettonMinter::create_from_config(
            &sandbox,
            &JettonMinterConfig {
                admin: deployer.clone(),
                content: JettonMinterContent {
                    uri: config.content_uri.clone(),
                },
                capped_supply,
                price,
            },
        )
    });
    steps.push(StepReport::from_result("deploy", &deployed, usage));
    let minter = deployed?;

    let forward_amount = MINT_FORWARD_AMOUNT.min(full_cap_cost);
    let (result, usage) =
        sandbox.measure(|| minter.send_mint(&user, &user, forward_amount, full_cap_cost));
    steps.push(StepReport::from_result("mint_max_value", &result, usage));

    let (result, usage) = sandbox.measure(|| minter.send_mint(&user, &user, 0, price));
    steps.push(StepReport::from_result("mint_over_cap", &result, usage));

    let supply_price = minter.get_supply_price();
    let wallet = minter.user_wallet(&user);
    // The wallet only exists once something was credited to it.
    let user_wallet_balance = match wallet.get_jetton_balance() {
        Ok(balance) => Some(balance),
        Err(e) => {
            tracing::warn!("user wallet balance unavailable: {}", e);
            None
        }
    };

    let report = ScenarioReport {
        minter: to_strkey(minter.address())?,
        wallet_template: hex::encode(sandbox.template().code()),
        steps,
        final_state: JettonDataView::from_data(&minter.get_jetton_data())?,
        supply_price: SupplyPriceView::from(&supply_price),
        price_matches_config: supply_price.price == price,
        user_wallet: to_strkey(wallet.address())?,
        user_wallet_balance,
    };

    tracing::info!(
        "scenario finished: total supply {} / {}",
        report.final_state.total_supply,
        report.supply_price.capped_supply
    );
    Ok(report)
}
